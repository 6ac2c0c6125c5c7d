use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use musclemate_ai::{prompt, AiError, GEMINI_MODEL};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/chat/", post(chat))
        .route("/status/", get(status))
        .route("/test/", get(test_connection))
        .route("/workout-plan/", post(workout_plan))
        .route("/nutrition-advice/", post(nutrition_advice))
}

const NOT_CONFIGURED: &str =
    "AI service not configured. Please add GOOGLE_API_KEY to environment variables.";

pub async fn chat(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<crate::app::dto::ChatRequest>,
) -> axum::response::Response {
    let message = body.message.trim();
    if message.is_empty() {
        return ai_error_response(StatusCode::BAD_REQUEST, "Message is required");
    }

    let Some(client) = services.ai.as_ref() else {
        return ai_error_response(StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED);
    };

    match client.generate(&prompt::coach_chat(message)).await {
        Ok(text) => Json(serde_json::json!({
            "success": true,
            "response": text,
            "timestamp": Utc::now().to_rfc3339(),
            "model": client.model_name(),
        }))
        .into_response(),
        Err(e) => generation_failed("AI response generation failed", e),
    }
}

pub async fn status(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.ai.as_ref() {
        Some(client) => Json(serde_json::json!({
            "success": true,
            "status": "active",
            "model": client.model_name(),
            "message": "AI Fitness Coach is ready!",
        }))
        .into_response(),
        None => Json(serde_json::json!({
            "success": false,
            "status": "inactive",
            "message": NOT_CONFIGURED,
        }))
        .into_response(),
    }
}

pub async fn test_connection(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let configured = services.ai.is_some();
    Json(serde_json::json!({
        "success": true,
        "message": "Connection successful! AI Coach is working!",
        "timestamp": Utc::now().to_rfc3339(),
        "api_key_status": if configured { "configured" } else { "not_configured" },
        "model": GEMINI_MODEL,
    }))
    .into_response()
}

pub async fn workout_plan(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<crate::app::dto::WorkoutPlanRequest>,
) -> axum::response::Response {
    let Some(client) = services.ai.as_ref() else {
        return ai_error_response(StatusCode::INTERNAL_SERVER_ERROR, "AI service not configured");
    };

    let prompt = prompt::workout_plan(&body.goal, &body.time, &body.level);
    match client.generate(&prompt).await {
        Ok(text) => Json(serde_json::json!({
            "success": true,
            "workout_plan": text,
            "timestamp": Utc::now().to_rfc3339(),
        }))
        .into_response(),
        Err(e) => generation_failed("Workout plan generation failed", e),
    }
}

pub async fn nutrition_advice(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<crate::app::dto::NutritionAdviceRequest>,
) -> axum::response::Response {
    let Some(client) = services.ai.as_ref() else {
        return ai_error_response(StatusCode::INTERNAL_SERVER_ERROR, "AI service not configured");
    };

    let prompt = prompt::nutrition_advice(&body.goal, &body.dietary_preference, &body.meal_time);
    match client.generate(&prompt).await {
        Ok(text) => Json(serde_json::json!({
            "success": true,
            "nutrition_advice": text,
            "timestamp": Utc::now().to_rfc3339(),
        }))
        .into_response(),
        Err(e) => generation_failed("Nutrition advice generation failed", e),
    }
}

fn ai_error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(serde_json::json!({ "success": false, "error": message })),
    )
        .into_response()
}

fn generation_failed(context: &str, err: AiError) -> axum::response::Response {
    tracing::error!(error = %err, "{context}");
    ai_error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &format!("{context}: {err}"),
    )
}
