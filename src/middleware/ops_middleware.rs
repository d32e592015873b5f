use crate::health::HealthModel;
use crate::middleware::OpsRoute;
use crate::views::{AboutResponse, HealthResponse};

use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    Error, HttpResponse,
};
use futures::future::LocalBoxFuture;

pub struct OpsEndpointsMiddleware<S> {
    pub(crate) service: S,
    pub(crate) model: Arc<HealthModel>,
}

impl<S, B> Service<ServiceRequest> for OpsEndpointsMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match OpsRoute::match_path(req.path()) {
            None => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Some(route) => {
                let model = self.model.clone();
                Box::pin(async move {
                    let response = respond(&model, route)?;
                    Ok(req.into_response(response).map_into_right_body())
                })
            }
        }
    }
}

fn respond(model: &HealthModel, route: OpsRoute) -> Result<HttpResponse, Error> {
    match route {
        OpsRoute::Ready => match model.ready() {
            Ok(true) => Ok(HttpResponse::Ok()
                .content_type("text/plain")
                .body("ready\n")),
            Ok(false) => Ok(HttpResponse::ServiceUnavailable().finish()),
            Err(err) => {
                tracing::error!("ready endpoint hit without a readiness predicate: {err}");
                Err(ErrorInternalServerError(err))
            }
        },
        OpsRoute::Health => {
            let body =
                HealthResponse::try_from(&model.health()).map_err(ErrorInternalServerError)?;
            Ok(HttpResponse::Ok().json(body))
        }
        OpsRoute::About => Ok(HttpResponse::Ok().json(AboutResponse::from(&model.about()))),
        OpsRoute::Unrecognized => Ok(HttpResponse::NotFound().finish()),
    }
}
