use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use ada_testcase_service::{
    config::Config,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::load()?;
    let server_addr = config.server_addr;
    if config.google_api_key.is_none() {
        tracing::warn!("neither MANIDEEP_GOOGLE_API_KEY nor GOOGLE_API_KEY is set; model-backed routes will fail");
    }
    tracing::info!(model = %config.gemini_model, "using Gemini model");

    let app = create_router(AppState::with_gemini(&config));

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
