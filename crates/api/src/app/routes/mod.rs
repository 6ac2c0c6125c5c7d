use axum::Router;

pub mod accounts;
pub mod ai_coach;
pub mod orders;
pub mod products;
pub mod system;

/// Routes reachable without a session: account entry points, the
/// catalog, and the AI coach.
pub fn public_router() -> Router {
    Router::new()
        .nest("/accounts", accounts::public_router())
        .nest("/products", products::router())
        .nest("/ai_coach", ai_coach::router())
}

/// Routes that require an authenticated session.
pub fn protected_router() -> Router {
    Router::new()
        .nest("/accounts", accounts::session_router())
        .nest("/orders", orders::router())
}
