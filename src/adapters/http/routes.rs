use actix_web::web;
use std::sync::Arc;

use crate::application::admin::AllowAdminPasswordResetUseCase;
use crate::application::auth::{
  LoginAdminUseCase, LoginSystemAdminUseCase, LogoutUseCase, ResetAdminPasswordUseCase,
  ResolveSessionUseCase,
};
use crate::application::tenant::{GetCurrentTenantUseCase, UpdateCurrentTenantUseCase};

use super::errors::json_error_handler;
use super::handlers::admin_auth::{allow_password_reset_handler, missing_admin_id_handler};
use super::handlers::auth::{
  login_handler, logout_handler, password_reset_handler, system_admin_login_handler,
};
use super::handlers::tenant::{get_current_tenant_handler, update_current_tenant_handler};
use super::middleware::{AuthMiddleware, TenantContextMiddleware};

fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(json_error_handler)
}

/// Configure tenant admin authentication routes
///
/// Mount under `/api/v1/auth`.
///
/// # Routes
///
/// - POST /login - Authenticate a tenant admin and create a session
/// - POST /logout - Invalidate the current session
/// - POST /password-reset - Set a new password with an open reset grant
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use shiftboard::application::auth::*;
/// # use shiftboard::adapters::http::routes::configure_auth_routes;
///
/// # async fn example(
/// #   login_use_case: Arc<LoginAdminUseCase>,
/// #   logout_use_case: Arc<LogoutUseCase>,
/// #   reset_use_case: Arc<ResetAdminPasswordUseCase>,
/// # ) {
/// let app = App::new().service(web::scope("/api/v1/auth").configure(|cfg| {
///   configure_auth_routes(cfg, login_use_case, logout_use_case, reset_use_case)
/// }));
/// # }
/// ```
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  login_use_case: Arc<LoginAdminUseCase>,
  logout_use_case: Arc<LogoutUseCase>,
  reset_password_use_case: Arc<ResetAdminPasswordUseCase>,
) {
  cfg
    .app_data(json_config())
    .app_data(web::Data::new(login_use_case))
    .app_data(web::Data::new(logout_use_case))
    .app_data(web::Data::new(reset_password_use_case))
    .route("/login", web::post().to(login_handler))
    .route("/logout", web::post().to(logout_handler))
    .route("/password-reset", web::post().to(password_reset_handler));
}

/// Configure system admin routes
///
/// Mount under `/api/v1/admin`.
///
/// # Routes
///
/// - POST /auth/login - Authenticate a system admin
/// - POST /admins/{admin_id}/allow-password-reset - Open a 24h reset window (requires a system admin session)
///
/// Any other path under `/admins` is answered with 400 `bad_request`.
pub fn configure_admin_routes(
  cfg: &mut web::ServiceConfig,
  login_use_case: Arc<LoginSystemAdminUseCase>,
  allow_password_reset_use_case: Arc<AllowAdminPasswordResetUseCase>,
  resolve_session_use_case: Arc<ResolveSessionUseCase>,
) {
  cfg
    .app_data(json_config())
    .app_data(web::Data::new(login_use_case))
    .app_data(web::Data::new(allow_password_reset_use_case))
    .route("/auth/login", web::post().to(system_admin_login_handler))
    .service(
      web::scope("/admins")
        .wrap(AuthMiddleware::new(resolve_session_use_case))
        // Empty segments reach the handler so they can be answered with 400
        .route(
          "/{admin_id:[^/]*}/allow-password-reset",
          web::post().to(allow_password_reset_handler),
        )
        .default_service(web::to(missing_admin_id_handler)),
    );
}

/// Configure tenant profile routes
///
/// Mount under `/api/v1/tenants`. Requests pass through `AuthMiddleware`
/// and then `TenantContextMiddleware`.
///
/// # Routes
///
/// - GET /me - Current tenant profile
/// - PUT /me - Rename the current tenant
pub fn configure_tenant_routes(
  cfg: &mut web::ServiceConfig,
  get_tenant_use_case: Arc<GetCurrentTenantUseCase>,
  update_tenant_use_case: Arc<UpdateCurrentTenantUseCase>,
  resolve_session_use_case: Arc<ResolveSessionUseCase>,
) {
  cfg
    .app_data(json_config())
    .app_data(web::Data::new(get_tenant_use_case))
    .app_data(web::Data::new(update_tenant_use_case))
    .service(
      web::resource("/me")
        .wrap(TenantContextMiddleware::new())
        .wrap(AuthMiddleware::new(resolve_session_use_case))
        .route(web::get().to(get_current_tenant_handler))
        .route(web::put().to(update_current_tenant_handler)),
    );
}
