use actix_web::{HttpRequest, HttpResponse, web};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    AdminLoginResponse, LoginRequest, PasswordResetRequest, SuccessResponse,
    SystemAdminLoginResponse,
  },
  errors::{ApiError, AuthErrorKind},
};
use crate::application::auth::{
  LoginAdminCommand, LoginAdminUseCase, LoginSystemAdminCommand, LoginSystemAdminUseCase,
  LogoutUseCase, ResetAdminPasswordCommand, ResetAdminPasswordUseCase,
};
use crate::domain::auth::errors::AuthError;

/// Extract session token from Authorization header
fn extract_session_token(req: &HttpRequest) -> Result<String, ApiError> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix("Bearer "))
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .ok_or(ApiError::Auth(AuthErrorKind::InvalidToken))
}

/// Extract the client IP, accepting both `ip` and `ip:port` forms
fn extract_ip_address(req: &HttpRequest) -> Option<IpAddr> {
  let info = req.connection_info();
  let addr = info.realip_remote_addr()?;

  addr
    .parse::<SocketAddr>()
    .map(|socket| socket.ip())
    .or_else(|_| addr.parse::<IpAddr>())
    .ok()
}

fn extract_user_agent(req: &HttpRequest) -> Option<String> {
  req
    .headers()
    .get("User-Agent")
    .and_then(|h| h.to_str().ok())
    .map(|s| s.to_string())
}

/// Handler for tenant admin login
///
/// POST /api/v1/auth/login
/// Body: LoginRequest (JSON)
/// Response: AdminLoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginAdminUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let ip_address = extract_ip_address(&http_req);
  let user_agent = extract_user_agent(&http_req);

  let request = request.into_inner();
  let command = LoginAdminCommand {
    email: request.email,
    password: request.password,
  };

  let response = use_case.execute(command, ip_address, user_agent).await?;

  Ok(HttpResponse::Ok().json(AdminLoginResponse {
    admin_id: response.admin_id,
    tenant_id: response.tenant_id,
    email: response.email,
    session_token: response.session_token,
    expires_at: response.expires_at,
  }))
}

/// Handler for system admin login
///
/// POST /api/v1/admin/auth/login
/// Body: LoginRequest (JSON)
/// Response: SystemAdminLoginResponse (JSON) with status 200
pub async fn system_admin_login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginSystemAdminUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let ip_address = extract_ip_address(&http_req);
  let user_agent = extract_user_agent(&http_req);

  let request = request.into_inner();
  let command = LoginSystemAdminCommand {
    email: request.email,
    password: request.password,
  };

  let response = use_case.execute(command, ip_address, user_agent).await?;

  Ok(HttpResponse::Ok().json(SystemAdminLoginResponse {
    system_admin_id: response.system_admin_id,
    email: response.email,
    session_token: response.session_token,
    expires_at: response.expires_at,
  }))
}

/// Handler for logout
///
/// POST /api/v1/auth/logout
/// Headers: Authorization: Bearer <token>
/// Response: SuccessResponse (JSON) with status 200
pub async fn logout_handler(
  use_case: web::Data<Arc<LogoutUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let session_token = extract_session_token(&http_req)?;

  use_case
    .execute(session_token)
    .await
    .map_err(|e| match e {
      AuthError::ValueObject(_) => ApiError::Auth(AuthErrorKind::InvalidToken),
      other => other.into(),
    })?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Successfully logged out".to_string(),
  }))
}

/// Handler for setting a new password with an open reset grant
///
/// POST /api/v1/auth/password-reset
/// Body: PasswordResetRequest (JSON)
/// Response: SuccessResponse (JSON) with status 200
pub async fn password_reset_handler(
  request: web::Json<PasswordResetRequest>,
  use_case: web::Data<Arc<ResetAdminPasswordUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let request = request.into_inner();
  let command = ResetAdminPasswordCommand {
    email: request.email,
    new_password: request.new_password,
  };

  let response = use_case.execute(command).await?;

  tracing::debug!(revoked_sessions = response.revoked_sessions, "Sessions revoked after reset");

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Password has been reset. Please log in again.".to_string(),
  }))
}
