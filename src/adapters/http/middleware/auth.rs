use actix_web::{
  Error, HttpMessage, ResponseError,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  application::auth::ResolveSessionUseCase,
  domain::auth::errors::AuthError,
};

/// Authentication middleware that validates bearer tokens and attaches the principal to the request
///
/// This middleware:
/// 1. Extracts the session token from the Authorization header
/// 2. Resolves it with `ResolveSessionUseCase`
/// 3. Stores the resulting `Principal` in request extensions
/// 4. Answers 401 with a JSON error body when the token is missing, unknown or expired
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use shiftboard::application::auth::ResolveSessionUseCase;
/// # use shiftboard::adapters::http::middleware::auth::AuthMiddleware;
///
/// # async fn example(resolve_session: Arc<ResolveSessionUseCase>) {
/// let app = App::new().service(
///   web::scope("/api/v1/tenants")
///     .wrap(AuthMiddleware::new(resolve_session))
///     .route("/me", web::get().to(|| async { "Protected endpoint" })),
/// );
/// # }
/// ```
pub struct AuthMiddleware {
  resolve_session: Arc<ResolveSessionUseCase>,
}

impl AuthMiddleware {
  pub fn new(resolve_session: Arc<ResolveSessionUseCase>) -> Self {
    Self { resolve_session }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      resolve_session: self.resolve_session.clone(),
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  resolve_session: Arc<ResolveSessionUseCase>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let resolve_session = self.resolve_session.clone();

    Box::pin(async move {
      let session_token = match extract_session_token(&req) {
        Ok(token) => token,
        Err(e) => {
          let res = req.into_response(e.error_response());
          return Ok(res.map_into_right_body());
        }
      };

      let principal = match resolve_session.execute(session_token).await {
        Ok(principal) => principal,
        Err(e) => {
          let res = req.into_response(rejection(e).error_response());
          return Ok(res.map_into_right_body());
        }
      };

      req.extensions_mut().insert(principal);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Extract session token from Authorization header
fn extract_session_token(req: &ServiceRequest) -> Result<String, ApiError> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix("Bearer "))
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .ok_or(ApiError::Auth(AuthErrorKind::InvalidToken))
}

/// Anything but an infrastructure failure is an authentication failure
fn rejection(error: AuthError) -> ApiError {
  match error {
    AuthError::Repository(_) | AuthError::Hash(_) => ApiError::from(error),
    AuthError::ValueObject(_) => ApiError::Auth(AuthErrorKind::InvalidToken),
    _ => ApiError::Auth(AuthErrorKind::InvalidSession),
  }
}
