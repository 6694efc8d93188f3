//! Cross-tenant administration use cases

mod allow_password_reset;

pub use allow_password_reset::{
  AllowAdminPasswordResetCommand, AllowAdminPasswordResetResponse, AllowAdminPasswordResetUseCase,
};
