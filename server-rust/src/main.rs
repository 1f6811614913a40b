use axum::http::HeaderValue;
use dotenvy::dotenv;
use std::{env, sync::Arc};
use symbio_sdk::{AdviceService, Config};
use symbio_server::{router, AppState};
use tracing_subscriber::EnvFilter;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxedError> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,symbio_sdk=debug,symbio_server=debug")),
        )
        .init();

    let config = Config::from_env().inspect_err(|error| {
        tracing::error!(%error, "Refusing to start without configuration");
    })?;

    let model = config.google_model();
    tracing::info!(model_id = %config.model_id, "Using Gemini model");
    let state = AppState {
        service: AdviceService::new(Arc::new(model)),
    };

    let allowed_origin = match env::var("APP_URL") {
        Ok(url) => Some(url.parse::<HeaderValue>()?),
        Err(_) => None,
    };

    let app = router(state, allowed_origin);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
