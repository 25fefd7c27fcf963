use axum::Router;
use axum::extract::MatchedPath;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

pub mod customers;
pub mod error;
pub mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        customers::list_customers,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        health::health,
    ),
    components(schemas(
        customers::Customer,
        customers::CreateCustomerRequest,
        customers::UpdateCustomerRequest,
        error::ErrorBody,
        health::HealthResp,
    )),
    tags(
        (name = "Customers", description = "Customer records"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;

fn cors_layer(cfg: &Config) -> CorsLayer {
    let methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::OPTIONS,
    ];
    let base = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([http::header::CONTENT_TYPE]);
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) | None if cfg.is_production => {
            // Rejected by Config::from_env in production; deny all origins
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://invalid",
            )))
        }
        _ => base.allow_origin(AllowOrigin::mirror_request()),
    }
}

/// Full application router: customer routes, health, API docs, CORS and
/// request tracing.
pub fn router(ctx: AppContext) -> Router {
    let cors = cors_layer(&ctx.cfg);
    Router::new()
        .merge(health::routes(ctx.clone()))
        .merge(customers::routes(ctx))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
