use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

use league_chatbot_backend::config::ServerConfig;
use league_chatbot_backend::routes;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env();

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    info!(
        "🚀 League chatbot backend running at http://localhost:{}",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
