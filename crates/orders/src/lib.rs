//! `musclemate-orders` — order placement domain.
//!
//! This crate holds the pure decision logic of the order flow: line
//! validation, subtotal/discount/total pricing, and the persisted order
//! aggregate types. Storage and HTTP concerns live elsewhere.

pub mod line;
pub mod order;
pub mod pricing;

pub use line::{OrderLine, PlaceOrder, MAX_QUANTITY};
pub use order::{Order, OrderItem};
pub use pricing::{price_order, Pricing, REPEAT_DISCOUNT_RATE};
