use crate::health::HealthModel;
use crate::middleware::OpsEndpointsMiddleware;

use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};

/// Middleware factory answering `/__/ready`, `/__/health` and `/__/about`
/// from a built [`HealthModel`]; everything else passes through to the
/// wrapped service untouched.
///
/// Cheap to clone: one model serves every worker.
#[derive(Clone)]
pub struct OpsEndpoints {
    pub(crate) model: Arc<HealthModel>,
}

impl OpsEndpoints {
    pub fn new(model: HealthModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for OpsEndpoints
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = OpsEndpointsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OpsEndpointsMiddleware {
            service,
            model: self.model.clone(),
        }))
    }
}
