use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use musclemate_core::ProductId;
use musclemate_orders::{OrderLine, PlaceOrder};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::Identity;

pub fn router() -> Router {
    Router::new()
        .route("/place/", post(place_order))
        .route("/mine/", get(my_orders))
}

pub async fn place_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<dto::PlaceOrderRequest>,
) -> axum::response::Response {
    let mut lines = Vec::with_capacity(body.items.len());
    for item in body.items {
        let product_id: ProductId = match item.product.parse() {
            Ok(v) => v,
            Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid product id"),
        };
        match OrderLine::new(product_id, item.price, item.quantity.unwrap_or(1)) {
            Ok(line) => lines.push(line),
            Err(e) => return errors::domain_error_to_response(e),
        }
    }

    let command = match PlaceOrder::new(lines) {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.place_order(identity.user_id(), command).await {
        Ok(order) => (
            StatusCode::CREATED,
            Json(dto::order_to_json(&order, identity.username())),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn my_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(identity): Extension<Identity>,
) -> axum::response::Response {
    match services.orders.my_orders(identity.user_id()).await {
        Ok(orders) => {
            let rendered = orders
                .iter()
                .map(|o| dto::order_to_json(o, identity.username()))
                .collect::<Vec<_>>();
            Json(serde_json::json!({
                "count": rendered.len(),
                "orders": rendered,
            }))
            .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
