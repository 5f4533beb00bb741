use std::str::FromStr;
use std::sync::Arc;

use auth::Authenticator;
use fitness_service::config::Config;
use fitness_service::domain::auth::service::AuthService;
use fitness_service::domain::simulator::service::SimulatorService;
use fitness_service::domain::user::service::UserService;
use fitness_service::inbound::http::router::create_router;
use fitness_service::outbound::repositories::SqliteSimulatorRepository;
use fitness_service::outbound::repositories::SqliteUserRepository;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitness_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "fitness-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        request_timeout_secs = config.server.request_timeout_secs,
        token_expiration_hours = ?config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let connect_options =
        SqliteConnectOptions::from_str(&config.database.url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let mut authenticator = Authenticator::new(config.jwt.secret.as_bytes());
    if let Some(hours) = config.jwt.expiration_hours {
        authenticator = authenticator.with_token_lifetime_hours(hours)?;
    }

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let simulator_repository = Arc::new(SqliteSimulatorRepository::new(pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let simulator_service = Arc::new(SimulatorService::new(simulator_repository));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_service),
        Arc::new(authenticator),
    )?);

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
        simulator_service,
        auth_service,
        config.server.request_timeout(),
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
