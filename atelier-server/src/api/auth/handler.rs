//! Authentication Handlers
//!
//! Registration, login, and current-user lookup.

use std::time::Duration;

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{LoginRequest, LoginResponse, User, UserCreate, UserPublic};
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult, now_millis};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<UserPublic>)> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = UserRepository::new(state.db.clone());

    // Check first for a clean conflict message; the unique email index
    // still catches a concurrent double-registration
    if repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::conflict("Email already registered"));
    }

    let hashed_password = User::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let user = User {
        id: None,
        email: payload.email,
        full_name: payload.full_name,
        role: payload.role,
        hashed_password,
        created_at: now_millis(),
    };

    let created = repo.create(user).await?;
    tracing::info!(email = %created.email, role = ?created.role, "User registered");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.find_by_email(&req.email).await?;

    // Fixed delay before checking the result, so lookup misses and
    // password mismatches are indistinguishable on the wire
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let user = match user {
        Some(u) => u,
        None => {
            tracing::warn!(email = %req.email, "Login failed - user not found");
            return Err(AppError::InvalidCredentials);
        }
    };

    let password_valid = user
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

    if !password_valid {
        tracing::warn!(email = %req.email, "Login failed - invalid credentials");
        return Err(AppError::InvalidCredentials);
    }

    let token = state
        .jwt_service
        .generate_token(&user.email, user.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(email = %user.email, role = ?user.role, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<UserPublic>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_email(&current.email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {}", current.email)))?;

    Ok(Json(user.into()))
}
