use anyhow::Context;
use dotenvy::dotenv;
use staffdesk::logging::init_tracing;
use staffdesk::router::init_router;
use staffdesk::state::init_app_state;
use staffdesk_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state();
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!(address = %address, "Server running");
    tracing::info!("OpenAPI document available at /api-docs/openapi.json");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
