use std::sync::Arc;
use std::time::Duration;

use auth::JwtHandler;
use bookstore_service::config;
use bookstore_service::config::Config;
use bookstore_service::domain::auth::service::AuthService;
use bookstore_service::domain::book::service::BookService;
use bookstore_service::domain::order::service::OrderService;
use bookstore_service::domain::user::service::UserService;
use bookstore_service::inbound::http::router::create_router;
use bookstore_service::inbound::http::router::AppState;
use bookstore_service::outbound::repositories::PostgresBookRepository;
use bookstore_service::outbound::repositories::PostgresOrderRepository;
use bookstore_service::outbound::repositories::PostgresUserRepository;
use bookstore_service::outbound::tokens::JwtTokenService;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let dotenv = (config::run_mode() != "production").then(dotenvy::dotenv);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(Err(e)) = dotenv {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    tracing::info!(
        service = "bookstore-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        app = %config.app.name,
        env = %config.app.env,
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        query_timeout_secs = config.database.query_timeout_secs,
        jwt_issuer = %config.jwt.issuer,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(POOL_ACQUIRE_TIMEOUT)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let query_timeout = config.database.query_timeout();
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone(), query_timeout));
    let book_repository = Arc::new(PostgresBookRepository::new(pg_pool.clone(), query_timeout));
    let order_repository = Arc::new(PostgresOrderRepository::new(pg_pool, query_timeout));

    let jwt_handler = JwtHandler::new(
        config.jwt.secret.expose_secret().as_bytes(),
        config.jwt.issuer.as_str(),
        config.jwt.audience.as_str(),
        config.jwt.lifetime(),
    )?;
    let token_service = Arc::new(JwtTokenService::new(jwt_handler));

    let state = AppState {
        user_service: Arc::new(UserService::new(Arc::clone(&user_repository))),
        book_service: Arc::new(BookService::new(Arc::clone(&book_repository))),
        order_service: Arc::new(OrderService::new(order_repository, book_repository)),
        auth_service: Arc::new(AuthService::new(
            user_repository,
            Arc::clone(&token_service),
        )),
        token_service,
    };

    let http_application = create_router(state, &config.server.allowed_origins());

    let http_address = config.server.address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
