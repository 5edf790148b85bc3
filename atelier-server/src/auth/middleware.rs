//! Authentication middleware
//!
//! Extracts and validates the bearer token from `Authorization: Bearer
//! <token>` and injects [`CurrentUser`] into request extensions
//! (`req.extensions_mut().insert(user)`).
//!
//! # Paths that skip authentication
//!
//! - `OPTIONS *` (CORS preflight)
//! - non-`/api/` paths (fall through to 404)
//! - `/api/health`
//! - `/api/auth/register`, `/api/auth/login`
//! - `/api/payments/verify` (signed provider callback, verified by HMAC)
//! - `GET /api/products*` (public catalog)

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

fn is_public_route(method: &http::Method, path: &str) -> bool {
    if path == "/api/health"
        || path == "/api/auth/register"
        || path == "/api/auth/login"
        || path == "/api/payments/verify"
    {
        return true;
    }

    // Catalog browsing is public; catalog mutation is not
    *method == http::Method::GET && path.starts_with("/api/products")
}

/// Require a valid bearer token on protected `/api/` routes.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_route(req.method(), path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.jwt_service.clone();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => {
            JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Request without authorization header");
            return Err(AppError::Unauthorized);
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Token validation failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}
