use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use super::get_system_admin_id;
use crate::adapters::http::{
  dtos::AllowPasswordResetResponse,
  errors::{ADMIN_NOT_FOUND_MESSAGE, ApiError},
};
use crate::application::admin::{AllowAdminPasswordResetCommand, AllowAdminPasswordResetUseCase};
use crate::domain::admin::AdminError;

/// Extract the target admin id from the URL path
fn extract_admin_id(req: &HttpRequest) -> Result<Uuid, ApiError> {
  let raw = req
    .match_info()
    .get("admin_id")
    .filter(|id| !id.is_empty())
    .ok_or_else(|| ApiError::BadRequest("admin_id is required".to_string()))?;

  Uuid::parse_str(raw)
    .map_err(|_| ApiError::BadRequest(format!("Invalid admin_id format: {}", raw)))
}

/// Handler for allowing a tenant admin to reset their password
///
/// POST /api/v1/admin/admins/{admin_id}/allow-password-reset
/// Headers: Authorization: Bearer <system admin token>
/// Response: AllowPasswordResetResponse (JSON) with status 200
pub async fn allow_password_reset_handler(
  use_case: web::Data<Arc<AllowAdminPasswordResetUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let system_admin_id = get_system_admin_id(&http_req)?;
  let target_admin_id = extract_admin_id(&http_req)?;

  let command = AllowAdminPasswordResetCommand {
    system_admin_id,
    target_admin_id,
  };

  match use_case.execute(command).await {
    Ok(grant) => Ok(HttpResponse::Ok().json(AllowPasswordResetResponse::from(grant))),
    Err(AdminError::NotFound) => Err(ApiError::NotFound(ADMIN_NOT_FOUND_MESSAGE.to_string())),
    Err(e) => Err(e.into()),
  }
}

/// Fallback for paths under `/admins` that carry no admin id segment
pub async fn missing_admin_id_handler() -> Result<HttpResponse, ApiError> {
  Err(ApiError::BadRequest("admin_id is required".to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn test_extract_admin_id_valid() {
    let admin_id = Uuid::new_v4();
    let req = TestRequest::default()
      .param("admin_id", admin_id.to_string())
      .to_http_request();

    assert_eq!(extract_admin_id(&req).unwrap(), admin_id);
  }

  #[test]
  fn test_extract_admin_id_missing() {
    let req = TestRequest::default().to_http_request();

    assert!(matches!(
      extract_admin_id(&req),
      Err(ApiError::BadRequest(_))
    ));
  }

  #[test]
  fn test_extract_admin_id_empty() {
    let req = TestRequest::default()
      .param("admin_id", "")
      .to_http_request();

    assert!(matches!(
      extract_admin_id(&req),
      Err(ApiError::BadRequest(_))
    ));
  }

  #[test]
  fn test_extract_admin_id_invalid_format() {
    let req = TestRequest::default()
      .param("admin_id", "not-a-uuid")
      .to_http_request();

    assert!(matches!(
      extract_admin_id(&req),
      Err(ApiError::BadRequest(_))
    ));
  }

  #[actix_web::test]
  async fn test_missing_admin_id_handler_is_bad_request() {
    let result = missing_admin_id_handler().await;

    assert!(matches!(result, Err(ApiError::BadRequest(_))));
  }
}
