use std::sync::Arc;

#[tokio::main]
async fn main() {
    musclemate_observability::init();

    let services = Arc::new(musclemate_api::app::services::build_services().await);
    let app = musclemate_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
