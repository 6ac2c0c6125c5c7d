//! Infrastructure layer: storage traits, Postgres and in-memory
//! implementations, and the order-placement service.

pub mod catalog_store;
pub mod db;
pub mod error;
pub mod identity_store;
pub mod order_service;
pub mod order_store;
pub mod seed;

pub use catalog_store::{CatalogStore, InMemoryCatalogStore, PostgresCatalogStore};
pub use error::StoreError;
pub use identity_store::{IdentityStore, InMemoryIdentityStore, PostgresIdentityStore};
pub use order_service::OrderService;
pub use order_store::{InMemoryOrderStore, OrderStore, PostgresOrderStore};
