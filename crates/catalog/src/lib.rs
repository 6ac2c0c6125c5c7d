//! `musclemate-catalog` — catalog domain (categories and products).
//!
//! The order flow only reads from the catalog; it never mutates stock.

pub mod category;
pub mod product;

pub use category::{Category, NewCategory};
pub use product::{NewProduct, Product};
