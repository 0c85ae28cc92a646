/// Maintenance gate
///
/// Before any page renders, the `cdts` status row is consulted; while its
/// `caida` flag is set every route answers with the maintenance notice
/// instead of its normal view. The row is fetched once per process and the
/// resolved state is terminal until restart. A fetch failure counts as
/// "site up".
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use supabase_client::SupabaseClient;

use crate::models::status::{MaintenanceView, SiteStatus};
use crate::AppState;

/// Routes that stay reachable while the site is down.
const EXEMPT_PATHS: &[&str] = &["/health", "/api/v1/openapi.json"];

pub async fn fetch_site_status(supabase: &SupabaseClient) -> SiteStatus {
    match supabase
        .from("cdts")
        .select("caida, cdtscode, motivo, hora_caida, mdlc")
        .eq("id", 1)
        .single()
        .fetch::<SiteStatus>()
        .await
    {
        Ok(status) => status,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch site status, assuming site up");
            SiteStatus::site_up()
        }
    }
}

/// Middleware factory for the maintenance gate
pub struct MaintenanceGate;

impl<S, B> Transform<S, ServiceRequest> for MaintenanceGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = MaintenanceGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MaintenanceGateService {
            service: Rc::new(service),
        }))
    }
}

pub struct MaintenanceGateService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for MaintenanceGateService<S>
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
        let service = self.service.clone();

        Box::pin(async move {
            let exempt = EXEMPT_PATHS.contains(&req.path());
            let state = req.app_data::<web::Data<AppState>>().cloned();

            if let (false, Some(state)) = (exempt, state) {
                let status = state
                    .site_status
                    .get_or_init(|| async { fetch_site_status(&state.supabase).await })
                    .await;

                if status.caida {
                    let view = MaintenanceView::from(status);
                    let response = HttpResponse::ServiceUnavailable().json(view);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}
