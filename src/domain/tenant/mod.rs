pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{DEFAULT_TIMEZONE, Tenant};
pub use errors::{TenantError, ValidationError};
pub use ports::TenantRepository;
pub use services::TenantService;
pub use value_objects::TenantName;
