mod common;

use actix_web::{http::StatusCode, test};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use uuid::Uuid;

use common::{TestContext, bearer};
use shiftboard::domain::admin::AdminRepository;

const NOT_FOUND_MESSAGE: &str = "指定された管理者が見つかりません";
const GRANTED_MESSAGE: &str = "パスワードリセットを許可しました。有効期限は24時間です。";

fn reset_uri(admin_id: &str) -> String {
  format!("/api/v1/admin/admins/{}/allow-password-reset", admin_id)
}

fn timestamp(value: &Value) -> DateTime<Utc> {
  DateTime::parse_from_rfc3339(value.as_str().unwrap())
    .unwrap()
    .with_timezone(&Utc)
}

#[actix_web::test]
async fn test_allow_password_reset_success() {
  let ctx = TestContext::new();
  let tenant = ctx.seed_tenant("Sakura Diner").await;
  let admin = ctx
    .seed_admin(tenant.id, "manager@sakura.example", "manager-pass")
    .await;
  let operator = ctx.seed_system_admin("ops@shiftboard.example", "operator-pass").await;
  let token = ctx.system_admin_token(&operator).await;
  let app = test::init_service(ctx.clone().into_app()).await;

  let req = test::TestRequest::post()
    .uri(&reset_uri(&admin.id.to_string()))
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["target_admin_id"], admin.id.to_string());
  assert_eq!(body["target_email"], "manager@sakura.example");
  assert_eq!(body["tenant_id"], tenant.id.to_string());
  assert_eq!(body["message"], GRANTED_MESSAGE);

  let allowed_at = timestamp(&body["allowed_at"]);
  let expires_at = timestamp(&body["expires_at"]);
  assert_eq!(expires_at - allowed_at, Duration::hours(24));

  let stored = ctx.admin_repo.find_by_id(admin.id).await.unwrap().unwrap();
  assert_eq!(stored.password_reset_allowed_by, Some(operator.id));
  assert!(stored.can_reset_password_at(Utc::now()));
}

#[actix_web::test]
async fn test_malformed_admin_id_is_bad_request() {
  let ctx = TestContext::new();
  let operator = ctx.seed_system_admin("ops@shiftboard.example", "operator-pass").await;
  let token = ctx.system_admin_token(&operator).await;
  let app = test::init_service(ctx.clone().into_app()).await;

  let req = test::TestRequest::post()
    .uri(&reset_uri("not-a-uuid"))
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "bad_request");
}

#[actix_web::test]
async fn test_missing_admin_id_is_bad_request() {
  let ctx = TestContext::new();
  let operator = ctx.seed_system_admin("ops@shiftboard.example", "operator-pass").await;
  let token = ctx.system_admin_token(&operator).await;
  let app = test::init_service(ctx.clone().into_app()).await;

  let req = test::TestRequest::post()
    .uri(&reset_uri(""))
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_admin_is_not_found_with_fixed_message() {
  let ctx = TestContext::new();
  let operator = ctx.seed_system_admin("ops@shiftboard.example", "operator-pass").await;
  let token = ctx.system_admin_token(&operator).await;
  let app = test::init_service(ctx.clone().into_app()).await;

  let req = test::TestRequest::post()
    .uri(&reset_uri(&Uuid::new_v4().to_string()))
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "not_found");
  assert_eq!(body["message"], NOT_FOUND_MESSAGE);
}

#[actix_web::test]
async fn test_requires_authentication() {
  let ctx = TestContext::new();
  let app = test::init_service(ctx.clone().into_app()).await;

  let req = test::TestRequest::post()
    .uri(&reset_uri(&Uuid::new_v4().to_string()))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "invalid_token");
}

#[actix_web::test]
async fn test_unknown_session_is_unauthorized() {
  let ctx = TestContext::new();
  let app = test::init_service(ctx.clone().into_app()).await;
  let stray_token = "ab".repeat(32);

  let req = test::TestRequest::post()
    .uri(&reset_uri(&Uuid::new_v4().to_string()))
    .insert_header(bearer(&stray_token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "invalid_session");
}

#[actix_web::test]
async fn test_tenant_admin_is_forbidden() {
  let ctx = TestContext::new();
  let tenant = ctx.seed_tenant("Sakura Diner").await;
  let caller = ctx
    .seed_admin(tenant.id, "manager@sakura.example", "manager-pass")
    .await;
  let target = ctx
    .seed_admin(tenant.id, "deputy@sakura.example", "deputy-pass")
    .await;
  let token = ctx.admin_token(&caller).await;
  let app = test::init_service(ctx.clone().into_app()).await;

  let req = test::TestRequest::post()
    .uri(&reset_uri(&target.id.to_string()))
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  let stored = ctx.admin_repo.find_by_id(target.id).await.unwrap().unwrap();
  assert!(stored.password_reset_expires_at.is_none());
}

#[actix_web::test]
async fn test_granting_again_restarts_the_window() {
  let ctx = TestContext::new();
  let tenant = ctx.seed_tenant("Sakura Diner").await;
  let admin = ctx
    .seed_admin(tenant.id, "manager@sakura.example", "manager-pass")
    .await;
  let operator = ctx.seed_system_admin("ops@shiftboard.example", "operator-pass").await;
  let token = ctx.system_admin_token(&operator).await;
  let app = test::init_service(ctx.clone().into_app()).await;

  let mut expiries = Vec::new();
  for _ in 0..2 {
    let req = test::TestRequest::post()
      .uri(&reset_uri(&admin.id.to_string()))
      .insert_header(bearer(&token))
      .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    expiries.push(timestamp(&body["expires_at"]));
  }

  assert!(expiries[1] >= expiries[0]);
  let stored = ctx.admin_repo.find_by_id(admin.id).await.unwrap().unwrap();
  assert_eq!(stored.password_reset_expires_at, Some(expiries[1]));
}

#[actix_web::test]
async fn test_route_without_admin_segment_is_bad_request() {
  let ctx = TestContext::new();
  let operator = ctx.seed_system_admin("ops@shiftboard.example", "operator-pass").await;
  let token = ctx.system_admin_token(&operator).await;
  let app = test::init_service(ctx.clone().into_app()).await;

  let req = test::TestRequest::post()
    .uri("/api/v1/admin/admins/allow-password-reset")
    .insert_header(bearer(&token))
    .to_request();
  let resp = test::call_service(&app, req).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "bad_request");
  assert!(body["message"].is_string());
}
