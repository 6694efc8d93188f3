pub mod admin_repository;
pub mod session_repository;
pub mod system_admin_repository;
pub mod tenant_repository;

pub use admin_repository::PostgresAdminRepository;
pub use session_repository::PostgresSessionRepository;
pub use system_admin_repository::PostgresSystemAdminRepository;
pub use tenant_repository::PostgresTenantRepository;
