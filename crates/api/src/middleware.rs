use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use musclemate_auth::SessionToken;
use musclemate_infra::IdentityStore;

use crate::app::errors;
use crate::context::{Identity, SessionHash};

#[derive(Clone)]
pub struct AuthState {
    pub identity: Arc<dyn IdentityStore>,
}

/// Resolve the bearer session token to an [`Identity`] request
/// extension, or answer 401 without running the handler.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers()).ok_or_else(unauthorized)?;
    let token = SessionToken::parse(token).ok_or_else(unauthorized)?;
    let token_hash = token.hash();

    let user = state
        .identity
        .find_user_by_session(&token_hash)
        .await
        .map_err(errors::store_error_to_response)?
        .ok_or_else(unauthorized)?;

    req.extensions_mut()
        .insert(Identity::new(user.id, user.username));
    req.extensions_mut().insert(SessionHash(token_hash));

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    errors::json_error(StatusCode::UNAUTHORIZED, "authentication required")
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
