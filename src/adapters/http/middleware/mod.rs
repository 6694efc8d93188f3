pub mod auth;
pub mod request_id;
pub mod tenant_context;

pub use auth::AuthMiddleware;
pub use request_id::{RequestId, RequestIdMiddleware};
pub use tenant_context::{TenantContext, TenantContextMiddleware};
