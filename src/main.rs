use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use keepsake::application::ports::EntryRepository;
use keepsake::application::services::{BiographyService, DigitizeService};
use keepsake::infrastructure::auth::HttpTokenVerifier;
use keepsake::infrastructure::llm::AiGatewayClient;
use keepsake::infrastructure::observability::{init_tracing, TracingConfig};
use keepsake::infrastructure::persistence::InMemoryEntryRepository;
use keepsake::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(
        &TracingConfig {
            environment: settings.logging.environment.to_string(),
            json_format: settings.logging.json_format,
        },
        settings.server.port,
    );

    if settings.ai.api_key.is_none() {
        tracing::warn!("AI_GATEWAY_API_KEY is not set; digitization requests will be refused");
    }

    let chat_client = Arc::new(AiGatewayClient::new(
        settings.ai.base_url.clone(),
        settings.ai.api_key.clone().unwrap_or_default(),
        settings.ai.model.clone(),
        Duration::from_secs(settings.ai.request_timeout_seconds),
    ));
    let token_verifier = Arc::new(HttpTokenVerifier::new(
        settings.identity.base_url.clone(),
        settings.identity.api_key.clone(),
    ));
    let entry_repository: Arc<dyn EntryRepository> = Arc::new(InMemoryEntryRepository::new());

    let digitize_service = Arc::new(DigitizeService::new(Arc::clone(&chat_client)));
    let biography_service = Arc::new(BiographyService::new(
        Arc::clone(&entry_repository),
        Arc::clone(&digitize_service),
    ));

    let state = AppState {
        digitize_service,
        biography_service,
        token_verifier,
        entry_repository,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
