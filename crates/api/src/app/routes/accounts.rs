use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use musclemate_auth::{hash_password, verify_password, RegisterUser, SessionToken, User};
use musclemate_core::UserId;

use crate::app::services::AppServices;
use crate::app::errors;
use crate::context::SessionHash;

pub fn public_router() -> Router {
    Router::new()
        .route("/ping/", get(ping))
        .route("/register/", post(register))
        .route("/session-login/", post(session_login))
}

pub fn session_router() -> Router {
    Router::new().route("/session-logout/", post(session_logout))
}

pub async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<crate::app::dto::RegisterRequest>,
) -> axum::response::Response {
    let registration = match RegisterUser::new(body.username, body.email, body.password) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    // Pre-check for a friendly answer; insert_user still guards the
    // race on the unique constraint.
    match services.identity.username_exists(&registration.username).await {
        Ok(true) => {
            return errors::json_error(
                StatusCode::CONFLICT,
                format!("username '{}' already taken", registration.username),
            )
        }
        Ok(false) => {}
        Err(e) => return errors::store_error_to_response(e),
    }

    let user = User {
        id: UserId::new(),
        username: registration.username,
        email: registration.email,
        password_hash: hash_password(&registration.password),
        created_at: Utc::now(),
    };

    if let Err(e) = services.identity.insert_user(&user).await {
        return errors::store_error_to_response(e);
    }

    match open_session(&services, user.id).await {
        Ok(token) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "status": "ok", "token": token.expose() })),
        )
            .into_response(),
        Err(resp) => resp,
    }
}

pub async fn session_login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<crate::app::dto::LoginRequest>,
) -> axum::response::Response {
    let user = match services.identity.find_user_by_username(&body.username).await {
        Ok(Some(user)) => user,
        Ok(None) => return invalid_credentials(),
        Err(e) => return errors::store_error_to_response(e),
    };

    match verify_password(&body.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return invalid_credentials(),
        Err(e) => {
            tracing::error!(error = %e, username = %user.username, "unreadable password hash");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        }
    }

    match open_session(&services, user.id).await {
        Ok(token) => Json(serde_json::json!({ "status": "ok", "token": token.expose() }))
            .into_response(),
        Err(resp) => resp,
    }
}

pub async fn session_logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionHash>,
) -> axum::response::Response {
    if let Err(e) = services.identity.delete_session(&session.0).await {
        return errors::store_error_to_response(e);
    }
    Json(serde_json::json!({ "status": "ok" })).into_response()
}

async fn open_session(
    services: &AppServices,
    user_id: UserId,
) -> Result<SessionToken, axum::response::Response> {
    let token = SessionToken::generate();
    services
        .identity
        .insert_session(&token.hash(), user_id, Utc::now())
        .await
        .map_err(errors::store_error_to_response)?;
    Ok(token)
}

fn invalid_credentials() -> axum::response::Response {
    errors::json_error(StatusCode::BAD_REQUEST, "Invalid credentials")
}
