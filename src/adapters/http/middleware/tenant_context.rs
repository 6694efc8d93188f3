use actix_web::{
  Error, HttpMessage,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
};
use uuid::Uuid;

use crate::domain::auth::entities::Principal;

/// Tenant the current request acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
  pub tenant_id: Uuid,
}

impl TenantContext {
  /// Only tenant admins carry a tenant
  pub fn from_principal(principal: &Principal) -> Option<Self> {
    principal
      .tenant_id()
      .map(|tenant_id| TenantContext { tenant_id })
  }
}

/// Middleware that resolves the tenant from the authenticated principal
///
/// Must run inside `AuthMiddleware`. Requests without a tenant-scoped
/// principal pass through untouched; tenant handlers then reject them.
#[derive(Debug, Clone, Default)]
pub struct TenantContextMiddleware;

impl TenantContextMiddleware {
  pub fn new() -> Self {
    Self
  }
}

impl<S, B> Transform<S, ServiceRequest> for TenantContextMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = TenantContextMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(TenantContextMiddlewareService {
      service: Rc::new(service),
    }))
  }
}

pub struct TenantContextMiddlewareService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TenantContextMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);

    let context = req
      .extensions()
      .get::<Principal>()
      .and_then(TenantContext::from_principal);

    match context {
      Some(context) => {
        req.extensions_mut().insert(context);
      }
      None => {
        tracing::debug!(path = %req.path(), "No tenant context for request");
      }
    }

    Box::pin(async move { service.call(req).await })
  }
}
