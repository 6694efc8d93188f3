pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, SuccessResponse};
pub use errors::{ApiError, AuthErrorKind};
pub use handlers::health_handler;
pub use middleware::{
  AuthMiddleware, RequestId, RequestIdMiddleware, TenantContext, TenantContextMiddleware,
};
pub use routes::{configure_admin_routes, configure_auth_routes, configure_tenant_routes};
