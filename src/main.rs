use forme::config::AppConfig;
use forme::{routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let port = config.port;
    let state = state::AppState::new(&config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(
        %port,
        width = config.surface_width,
        height = config.surface_height,
        "forme listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
