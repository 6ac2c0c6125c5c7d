use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use musclemate_catalog::{Category, Product};
use musclemate_orders::Order;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
}

/// One order line as sent by the storefront: product id, unit price
/// snapshot, quantity (defaults to 1 when omitted).
#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub product: String,
    pub price: Decimal,
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: i32,
    pub image: Option<String>,
    pub category_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutPlanRequest {
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_goal() -> String {
    "general_fitness".to_string()
}

fn default_time() -> String {
    "30".to_string()
}

fn default_level() -> String {
    "beginner".to_string()
}

#[derive(Debug, Deserialize)]
pub struct NutritionAdviceRequest {
    #[serde(default = "default_health_goal")]
    pub goal: String,
    #[serde(default = "default_dietary_preference")]
    pub dietary_preference: String,
    #[serde(default = "default_meal_time")]
    pub meal_time: String,
}

fn default_health_goal() -> String {
    "general_health".to_string()
}

fn default_dietary_preference() -> String {
    "vegetarian".to_string()
}

fn default_meal_time() -> String {
    "breakfast".to_string()
}

// -------------------------
// Response mapping
// -------------------------

/// Render an order the way the storefront expects it: decimals as
/// strings, items inline, the owner's username as `user_name`.
pub fn order_to_json(order: &Order, user_name: &str) -> serde_json::Value {
    json!({
        "id": order.id.to_string(),
        "user_name": user_name,
        "total_amount": order.total_amount,
        "discount_amount": order.discount_amount,
        "items": order
            .items
            .iter()
            .map(|item| {
                json!({
                    "product": item.product_id.to_string(),
                    "price": item.price,
                    "quantity": item.quantity,
                })
            })
            .collect::<Vec<_>>(),
        "created_at": order.created_at.to_rfc3339(),
    })
}

pub fn category_to_json(category: &Category) -> serde_json::Value {
    json!({
        "id": category.id.to_string(),
        "name": category.name,
        "slug": category.slug,
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id.to_string(),
        "name": product.name,
        "slug": product.slug,
        "description": product.description,
        "price": product.price,
        "stock": product.stock,
        "image": product.image,
        "is_active": product.is_active,
        "category_id": product.category_id.to_string(),
        "created_at": product.created_at.to_rfc3339(),
        "updated_at": product.updated_at.to_rfc3339(),
    })
}
