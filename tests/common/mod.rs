#![allow(dead_code)]

use actix_web::{
  App, Error,
  body::MessageBody,
  dev::{ServiceFactory, ServiceRequest, ServiceResponse},
  web,
};
use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

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
  domain::admin::{Admin, AdminRepository, AdminService, SystemAdmin, SystemAdminRepository},
  domain::auth::{
    AuthService, AuthServiceConfig, Password, PasswordHasher, Principal, Session,
    SessionRepository, SessionToken,
  },
  domain::tenant::{DEFAULT_TIMEZONE, Tenant, TenantName, TenantRepository, TenantService},
  infrastructure::{
    persistence::memory::{
      InMemoryAdminRepository, InMemorySessionRepository, InMemorySystemAdminRepository,
      InMemoryTenantRepository,
    },
    security::Argon2PasswordHasher,
  },
};

/// Fully wired application over in-memory repositories
#[derive(Clone)]
pub struct TestContext {
  pub tenant_repo: Arc<InMemoryTenantRepository>,
  pub admin_repo: Arc<InMemoryAdminRepository>,
  pub system_admin_repo: Arc<InMemorySystemAdminRepository>,
  pub session_repo: Arc<InMemorySessionRepository>,
  pub hasher: Arc<Argon2PasswordHasher>,
  login_admin: Arc<LoginAdminUseCase>,
  login_system_admin: Arc<LoginSystemAdminUseCase>,
  logout: Arc<LogoutUseCase>,
  reset_password: Arc<ResetAdminPasswordUseCase>,
  resolve_session: Arc<ResolveSessionUseCase>,
  allow_password_reset: Arc<AllowAdminPasswordResetUseCase>,
  get_tenant: Arc<GetCurrentTenantUseCase>,
  update_tenant: Arc<UpdateCurrentTenantUseCase>,
}

impl TestContext {
  pub fn new() -> Self {
    let tenant_repo = Arc::new(InMemoryTenantRepository::new());
    let admin_repo = Arc::new(InMemoryAdminRepository::new());
    let system_admin_repo = Arc::new(InMemorySystemAdminRepository::new());
    let session_repo = Arc::new(InMemorySessionRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::with_params(8, 1, 1).expect("test hasher params"));

    let auth_service = Arc::new(AuthService::new(
      admin_repo.clone(),
      system_admin_repo.clone(),
      session_repo.clone(),
      hasher.clone(),
      AuthServiceConfig::default(),
    ));
    let admin_service = Arc::new(AdminService::new(
      admin_repo.clone(),
      system_admin_repo.clone(),
    ));
    let tenant_service = Arc::new(TenantService::new(tenant_repo.clone()));

    Self {
      login_admin: Arc::new(LoginAdminUseCase::new(auth_service.clone())),
      login_system_admin: Arc::new(LoginSystemAdminUseCase::new(auth_service.clone())),
      logout: Arc::new(LogoutUseCase::new(auth_service.clone())),
      reset_password: Arc::new(ResetAdminPasswordUseCase::new(auth_service.clone())),
      resolve_session: Arc::new(ResolveSessionUseCase::new(auth_service)),
      allow_password_reset: Arc::new(AllowAdminPasswordResetUseCase::new(admin_service)),
      get_tenant: Arc::new(GetCurrentTenantUseCase::new(tenant_service.clone())),
      update_tenant: Arc::new(UpdateCurrentTenantUseCase::new(tenant_service)),
      tenant_repo,
      admin_repo,
      system_admin_repo,
      session_repo,
      hasher,
    }
  }

  /// Same route layout as the server binary
  pub fn into_app(
    self,
  ) -> App<
    impl ServiceFactory<
      ServiceRequest,
      Config = (),
      Response = ServiceResponse<impl MessageBody>,
      Error = Error,
      InitError = (),
    >,
  > {
    let Self {
      login_admin,
      logout,
      reset_password,
      login_system_admin,
      allow_password_reset,
      resolve_session,
      get_tenant,
      update_tenant,
      ..
    } = self;
    let resolve_admin = resolve_session.clone();
    let resolve_tenant = resolve_session;

    App::new()
      .wrap(RequestIdMiddleware::new())
      .route("/health", web::get().to(health_handler))
      .service(
        web::scope("/api/v1/auth")
          .configure(move |cfg| configure_auth_routes(cfg, login_admin, logout, reset_password)),
      )
      .service(web::scope("/api/v1/admin").configure(move |cfg| {
        configure_admin_routes(cfg, login_system_admin, allow_password_reset, resolve_admin)
      }))
      .service(web::scope("/api/v1/tenants").configure(move |cfg| {
        configure_tenant_routes(cfg, get_tenant, update_tenant, resolve_tenant)
      }))
  }

  pub async fn seed_tenant(&self, name: &str) -> Tenant {
    self
      .tenant_repo
      .create(Tenant::new(TenantName::new(name).unwrap(), DEFAULT_TIMEZONE))
      .await
      .unwrap()
  }

  pub async fn seed_admin(&self, tenant_id: Uuid, email: &str, password: &str) -> Admin {
    let hash = self
      .hasher
      .hash(&Password::new(password).unwrap())
      .await
      .unwrap();
    self
      .admin_repo
      .create(Admin::new(
        tenant_id,
        email.to_string(),
        "Store Manager".to_string(),
        hash.into_inner(),
      ))
      .await
      .unwrap()
  }

  pub async fn seed_system_admin(&self, email: &str, password: &str) -> SystemAdmin {
    let hash = self
      .hasher
      .hash(&Password::new(password).unwrap())
      .await
      .unwrap();
    self
      .system_admin_repo
      .create(SystemAdmin::new(
        email.to_string(),
        "Operator".to_string(),
        hash.into_inner(),
      ))
      .await
      .unwrap()
  }

  /// Opens a session for `principal` without going through a login
  pub async fn issue_token(&self, principal: Principal) -> String {
    let token = SessionToken::generate();
    self
      .session_repo
      .create(Session::with_duration(
        principal,
        token.hash().into_inner(),
        Duration::hours(1),
        None,
        None,
      ))
      .await
      .unwrap();
    token.into_inner()
  }

  pub async fn system_admin_token(&self, system_admin: &SystemAdmin) -> String {
    self
      .issue_token(Principal::SystemAdmin {
        system_admin_id: system_admin.id,
      })
      .await
  }

  pub async fn admin_token(&self, admin: &Admin) -> String {
    self
      .issue_token(Principal::TenantAdmin {
        admin_id: admin.id,
        tenant_id: admin.tenant_id,
      })
      .await
  }
}

pub fn bearer(token: &str) -> (&'static str, String) {
  ("Authorization", format!("Bearer {}", token))
}
