pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{Admin, PASSWORD_RESET_WINDOW_HOURS, PasswordResetGrant, SystemAdmin};
pub use errors::AdminError;
pub use ports::{AdminRepository, SystemAdminRepository};
pub use services::AdminService;
