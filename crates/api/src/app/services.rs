//! Infrastructure wiring: stores, the order service, and the optional
//! AI client, switched between in-memory and Postgres backends.

use std::sync::Arc;

use musclemate_ai::{GeminiClient, GenerativeClient};
use musclemate_infra::{
    db, seed, CatalogStore, IdentityStore, InMemoryCatalogStore, InMemoryIdentityStore,
    InMemoryOrderStore, OrderService, OrderStore, PostgresCatalogStore, PostgresIdentityStore,
    PostgresOrderStore,
};

/// Shared service handles for the HTTP layer.
#[derive(Clone)]
pub struct AppServices {
    pub identity: Arc<dyn IdentityStore>,
    pub catalog: Arc<dyn CatalogStore>,
    pub orders: OrderService,
    /// `None` when no API key is configured; the coach reports inactive.
    pub ai: Option<Arc<dyn GenerativeClient>>,
}

impl AppServices {
    pub fn new(
        identity: Arc<dyn IdentityStore>,
        catalog: Arc<dyn CatalogStore>,
        order_store: Arc<dyn OrderStore>,
        ai: Option<Arc<dyn GenerativeClient>>,
    ) -> Self {
        let orders = OrderService::new(order_store, Arc::clone(&catalog));
        Self {
            identity,
            catalog,
            orders,
            ai,
        }
    }
}

pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    let ai = ai_client_from_env();

    if use_persistent {
        build_persistent_services(ai).await
    } else {
        build_in_memory_services(ai).await
    }
}

fn ai_client_from_env() -> Option<Arc<dyn GenerativeClient>> {
    match std::env::var("GOOGLE_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            Some(Arc::new(GeminiClient::new(key)) as Arc<dyn GenerativeClient>)
        }
        _ => {
            tracing::warn!("GOOGLE_API_KEY not set; AI coach endpoints inactive");
            None
        }
    }
}

async fn build_in_memory_services(ai: Option<Arc<dyn GenerativeClient>>) -> AppServices {
    let catalog = Arc::new(InMemoryCatalogStore::new());
    if let Err(e) = seed::seed_catalog(catalog.as_ref()).await {
        tracing::warn!(error = %e, "failed to seed sample catalog");
    }

    AppServices::new(
        Arc::new(InMemoryIdentityStore::new()),
        catalog,
        Arc::new(InMemoryOrderStore::new()),
        ai,
    )
}

async fn build_persistent_services(ai: Option<Arc<dyn GenerativeClient>>) -> AppServices {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = db::connect(&database_url)
        .await
        .expect("failed to connect to postgres");
    db::apply_schema(&pool).await.expect("failed to apply schema");

    AppServices::new(
        Arc::new(PostgresIdentityStore::new(pool.clone())),
        Arc::new(PostgresCatalogStore::new(pool.clone())),
        Arc::new(PostgresOrderStore::new(pool)),
        ai,
    )
}
