use std::sync::Arc;

use auth::Authenticator;
use shop_service::config::Config;
use shop_service::domain::product::service::ProductService;
use shop_service::domain::user::service::UserService;
use shop_service::inbound::http::cookie::CookieSettings;
use shop_service::inbound::http::router::create_router;
use shop_service::outbound::repositories::PostgresProductRepository;
use shop_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "shop-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        query_timeout_secs = config.database.query_timeout_secs,
        jwt_expiration_hours = config.jwt.expiration_hours,
        secure_cookie = config.cookie.secure,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.query_timeout())
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
    let authenticator = Arc::new(Authenticator::new(&config.jwt.auth_settings()?));
    let cookie_settings = CookieSettings::new(authenticator.token_ttl(), config.cookie.secure);
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone(), query_timeout));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool, query_timeout));

    let user_service = Arc::new(UserService::new(user_repository, authenticator));
    let product_service = Arc::new(ProductService::new(product_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, product_service, cookie_settings);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
