use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shiftboard::{
  adapters::http::{
    RequestIdMiddleware, configure_admin_routes, configure_auth_routes, configure_tenant_routes,
    health_handler,
  },
  application::admin::AllowAdminPasswordResetUseCase,
  application::auth::{
    LoginAdminUseCase, LoginSystemAdminUseCase, LogoutUseCase, ResetAdminPasswordUseCase,
    ResolveSessionUseCase,
  },
  application::tenant::{GetCurrentTenantUseCase, UpdateCurrentTenantUseCase},
  domain::admin::AdminService,
  domain::auth::{AuthService, AuthServiceConfig},
  domain::tenant::TenantService,
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresAdminRepository, PostgresSessionRepository, PostgresSystemAdminRepository,
      PostgresTenantRepository,
    },
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  dotenvy::dotenv().ok();

  let config = Config::load().map_err(|e| {
    eprintln!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Shiftboard application");

  tracing::info!(
    "Connecting to database (max {} connections)",
    config.database.max_connections
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

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to run database migrations: {}", e);
      std::io::Error::other(format!("Migration error: {}", e))
    })?;
  tracing::info!("Database migrations completed");

  // Repositories
  let tenant_repo = Arc::new(PostgresTenantRepository::new(db_pool.clone()));
  let admin_repo = Arc::new(PostgresAdminRepository::new(db_pool.clone()));
  let system_admin_repo = Arc::new(PostgresSystemAdminRepository::new(db_pool.clone()));
  let session_repo = Arc::new(PostgresSessionRepository::new(db_pool.clone()));

  let password_hasher = Arc::new(Argon2PasswordHasher::new().map_err(|e| {
    tracing::error!("Failed to create password hasher: {}", e);
    std::io::Error::other(e.to_string())
  })?);

  // Domain services
  let auth_service = Arc::new(AuthService::new(
    admin_repo.clone(),
    system_admin_repo.clone(),
    session_repo,
    password_hasher,
    AuthServiceConfig {
      session_ttl_seconds: config.security.session_ttl_seconds,
    },
  ));
  let admin_service = Arc::new(AdminService::new(admin_repo, system_admin_repo));
  let tenant_service = Arc::new(TenantService::new(tenant_repo));

  // Use cases
  let login_admin_use_case = Arc::new(LoginAdminUseCase::new(auth_service.clone()));
  let login_system_admin_use_case = Arc::new(LoginSystemAdminUseCase::new(auth_service.clone()));
  let logout_use_case = Arc::new(LogoutUseCase::new(auth_service.clone()));
  let reset_password_use_case = Arc::new(ResetAdminPasswordUseCase::new(auth_service.clone()));
  let resolve_session_use_case = Arc::new(ResolveSessionUseCase::new(auth_service));
  let allow_password_reset_use_case =
    Arc::new(AllowAdminPasswordResetUseCase::new(admin_service));
  let get_tenant_use_case = Arc::new(GetCurrentTenantUseCase::new(tenant_service.clone()));
  let update_tenant_use_case = Arc::new(UpdateCurrentTenantUseCase::new(tenant_service));

  let (server_host, server_port) = config.bind_address();

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .route("/health", web::get().to(health_handler))
      .service(web::scope("/api/v1/auth").configure(|cfg| {
        configure_auth_routes(
          cfg,
          login_admin_use_case.clone(),
          logout_use_case.clone(),
          reset_password_use_case.clone(),
        )
      }))
      .service(web::scope("/api/v1/admin").configure(|cfg| {
        configure_admin_routes(
          cfg,
          login_system_admin_use_case.clone(),
          allow_password_reset_use_case.clone(),
          resolve_session_use_case.clone(),
        )
      }))
      .service(web::scope("/api/v1/tenants").configure(|cfg| {
        configure_tenant_routes(
          cfg,
          get_tenant_use_case.clone(),
          update_tenant_use_case.clone(),
          resolve_session_use_case.clone(),
        )
      }))
  })
  .bind((server_host, server_port))?
  .run()
  .await
}
