use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use super::get_tenant_context;
use crate::adapters::http::{
  dtos::{TenantResponse, UpdateTenantRequest},
  errors::ApiError,
};
use crate::application::tenant::{
  GetCurrentTenantUseCase, UpdateCurrentTenantCommand, UpdateCurrentTenantUseCase,
};

/// Get the caller's tenant
/// GET /api/v1/tenants/me
pub async fn get_current_tenant_handler(
  use_case: web::Data<Arc<GetCurrentTenantUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let context = get_tenant_context(&http_req)?;

  let tenant = use_case.execute(context.tenant_id).await?;

  Ok(HttpResponse::Ok().json(TenantResponse::from(tenant)))
}

/// Rename the caller's tenant
/// PUT /api/v1/tenants/me
pub async fn update_current_tenant_handler(
  request: web::Json<UpdateTenantRequest>,
  use_case: web::Data<Arc<UpdateCurrentTenantUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let context = get_tenant_context(&http_req)?;

  let request = request.into_inner();
  if request.tenant_name.trim().is_empty() {
    return Err(ApiError::BadRequest("tenant_name is required".to_string()));
  }

  let command = UpdateCurrentTenantCommand {
    tenant_id: context.tenant_id,
    tenant_name: request.tenant_name,
  };

  let tenant = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(TenantResponse::from(tenant)))
}
