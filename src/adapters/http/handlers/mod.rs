pub mod admin_auth;
pub mod auth;
pub mod tenant;

use actix_web::{HttpMessage, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::{
  adapters::http::{
    errors::{ApiError, AuthErrorKind},
    middleware::TenantContext,
  },
  domain::auth::entities::Principal,
};

/// Extract the authenticated principal from request extensions
pub fn get_principal(req: &HttpRequest) -> Result<Principal, ApiError> {
  let principal = req.extensions().get::<Principal>().copied();

  if principal.is_none() {
    tracing::warn!(
      "get_principal: Principal not found in request extensions for path {}",
      req.path()
    );
  }

  principal.ok_or(ApiError::Auth(AuthErrorKind::InvalidSession))
}

/// Extract the acting system admin, rejecting tenant-scoped sessions
pub fn get_system_admin_id(req: &HttpRequest) -> Result<Uuid, ApiError> {
  get_principal(req)?.system_admin_id().ok_or_else(|| {
    ApiError::Forbidden("System administrator privileges are required".to_string())
  })
}

/// Extract tenant context from request extensions (set by TenantContextMiddleware)
pub fn get_tenant_context(req: &HttpRequest) -> Result<TenantContext, ApiError> {
  req
    .extensions()
    .get::<TenantContext>()
    .copied()
    .ok_or_else(|| ApiError::BadRequest("Tenant context is missing".to_string()))
}

/// GET /health
pub async fn health_handler() -> HttpResponse {
  HttpResponse::Ok().body("OK")
}
