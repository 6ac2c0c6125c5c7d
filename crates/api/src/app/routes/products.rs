use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use musclemate_catalog::{NewCategory, NewProduct};
use musclemate_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/categories/", post(create_category).get(list_categories))
        .route("/items/", post(create_product).get(list_products))
        .route("/items/:id", get(get_product))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog.list_categories().await {
        Ok(categories) => {
            let items = categories.iter().map(dto::category_to_json).collect::<Vec<_>>();
            Json(items).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    let category = match NewCategory::new(body.name, body.slug) {
        Ok(c) => c.into_category(),
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.insert_category(&category).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(dto::category_to_json(&category)),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog.list_active_products().await {
        Ok(products) => {
            let items = products.iter().map(dto::product_to_json).collect::<Vec<_>>();
            Json(items).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid product id"),
    };

    match services.catalog.get_product(id).await {
        Ok(Some(product)) => Json(dto::product_to_json(&product)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let category_id = match body.category_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid category id"),
    };

    let product = match NewProduct::new(
        body.name,
        body.slug,
        body.description,
        body.price,
        body.stock,
        body.image,
        category_id,
    ) {
        Ok(p) => p.into_product(Utc::now()),
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.insert_product(&product).await {
        Ok(()) => (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
