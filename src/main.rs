use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoicer::{
  adapters::http::{AuthMiddleware, RequestIdMiddleware, configure_invoice_routes, health_check},
  application::auth::AuthenticateUserUseCase,
  application::invoice::{CreateInvoiceUseCase, ListInvoicesUseCase},
  domain::auth::AuthService,
  domain::invoice::InvoiceService,
  infrastructure::{
    config::Config,
    persistence::postgres::{PostgresInvoiceRepository, PostgresUserRepository},
    security::{Argon2PasswordHasher, UuidGuidGenerator},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invoicer=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting invoicer");

  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  tracing::info!(
    max_connections = config.database.max_connections,
    "Connecting to database"
  );

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  // Repositories and security services
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let invoice_repo = Arc::new(PostgresInvoiceRepository::new(db_pool.clone()));
  let password_hasher = Arc::new(
    Argon2PasswordHasher::new().map_err(|e| std::io::Error::other(e.to_string()))?,
  );
  let guid_generator = Arc::new(UuidGuidGenerator::new());

  // Domain services
  let auth_service = Arc::new(AuthService::new(user_repo, password_hasher));
  let invoice_service = Arc::new(InvoiceService::new(invoice_repo, guid_generator));

  // Use cases
  let authenticate_use_case = Arc::new(AuthenticateUserUseCase::new(auth_service));
  let create_invoice_use_case = Arc::new(CreateInvoiceUseCase::new(invoice_service.clone()));
  let list_invoices_use_case = Arc::new(ListInvoicesUseCase::new(invoice_service));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .service(
        web::scope("/api/invoices")
          .wrap(AuthMiddleware::new(authenticate_use_case.clone()))
          .configure(|cfg| {
            configure_invoice_routes(
              cfg,
              create_invoice_use_case.clone(),
              list_invoices_use_case.clone(),
            )
          }),
      )
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
