//! Tenant profile use cases

mod get_current_tenant;
mod update_current_tenant;

pub use get_current_tenant::{GetCurrentTenantUseCase, TenantDetails};
pub use update_current_tenant::{UpdateCurrentTenantCommand, UpdateCurrentTenantUseCase};
