//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Product, ProductUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const PRODUCT_TABLE: &str = "products";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new product
    pub async fn create(&self, product: Product) -> RepoResult<Product> {
        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let key = strip_table_prefix(PRODUCT_TABLE, id);
        let product: Option<Product> = self.base.db().select((PRODUCT_TABLE, key)).await?;
        Ok(product)
    }

    /// List products, optionally filtered by category, with skip/limit
    /// pagination.
    pub async fn find_many(
        &self,
        category: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> RepoResult<Vec<Product>> {
        let mut query_str = String::from("SELECT * FROM products");
        if category.is_some() {
            query_str.push_str(" WHERE category = $category");
        }
        query_str.push_str(" ORDER BY created_at LIMIT $limit START $skip");

        let mut query = self
            .base
            .db()
            .query(query_str)
            .bind(("limit", limit))
            .bind(("skip", skip));
        if let Some(cat) = category {
            query = query.bind(("category", cat.to_string()));
        }

        let products: Vec<Product> = query.await?.take(0)?;
        Ok(products)
    }

    /// Partial update. Only supplied fields are written; an empty effective
    /// patch is a no-op that returns the current record.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let key = strip_table_prefix(PRODUCT_TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.category.is_some() {
            set_parts.push("category = $category");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.model_url.is_some() {
            set_parts.push("model_url = $model_url");
        }
        if data.templates.is_some() {
            set_parts.push("templates = $templates");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(key)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)));
        }

        let thing = surrealdb::RecordId::from_table_key(PRODUCT_TABLE, key);
        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(query_str).bind(("thing", thing));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.category {
            query = query.bind(("category", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.model_url {
            query = query.bind(("model_url", v));
        }
        if let Some(v) = data.templates {
            query = query.bind(("templates", v));
        }

        let mut result = query.await?;
        let products: Vec<Product> = result.take(0)?;

        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete. Returns whether a record was removed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = strip_table_prefix(PRODUCT_TABLE, id);
        let deleted: Option<Product> = self.base.db().delete((PRODUCT_TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
