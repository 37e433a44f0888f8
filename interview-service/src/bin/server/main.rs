use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use interview_service::config::Config;
use interview_service::domain::interview::service::InterviewService;
use interview_service::domain::user::service::UserService;
use interview_service::inbound::http::router::create_router;
use interview_service::outbound::repositories::InMemoryInterviewStore;
use interview_service::outbound::repositories::InMemoryUserStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interview_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "interview-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        hash_algorithm = %config.hash.algorithm,
        hash_iterations = config.hash.iterations,
        token_ttl_seconds = config.token.ttl_seconds,
        "Configuration loaded"
    );

    let password_hasher = Arc::new(PasswordHasher::new(config.hash.clone()));
    let token_codec = Arc::new(TokenCodec::new(config.token.secret.as_bytes()));

    let user_store = Arc::new(InMemoryUserStore::new());
    let interview_store = Arc::new(InMemoryInterviewStore::new());

    let user_service = Arc::new(UserService::new(user_store, password_hasher));
    let interview_service = Arc::new(InterviewService::new(interview_store));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        interview_service,
        token_codec,
        config.token.ttl_seconds,
    );
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
