//! User Repository

use super::{BaseRepository, RepoError, RepoResult, is_duplicate, strip_table_prefix};
use crate::db::models::User;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const USER_TABLE: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new user. The unique email index turns a re-registration
    /// into a duplicate error.
    pub async fn create(&self, user: User) -> RepoResult<User> {
        let email = user.email.clone();
        let created: Option<User> = self
            .base
            .db()
            .create(USER_TABLE)
            .content(user)
            .await
            .map_err(|e| {
                if is_duplicate(&e) {
                    RepoError::Duplicate(format!("User {} already exists", email))
                } else {
                    RepoError::from(e)
                }
            })?;

        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM users WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let key = strip_table_prefix(USER_TABLE, id);
        let user: Option<User> = self.base.db().select((USER_TABLE, key)).await?;
        Ok(user)
    }
}
