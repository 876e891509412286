use super::api;
use super::global;

use axum::Router;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::questionnaire::list_questions,
        api::v0::questionnaire::get_question,
        api::v0::assessment::get_assessment,
        api::v0::assessment::start,
        api::v0::assessment::load,
        api::v0::assessment::update,
        api::v0::assessment::submit,
        api::v0::assessment::get_report,
        api::v0::assessment::get_report_pdf,
        global::version,
    ),
    tags()
)]
struct ApiDoc;

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // There is no need to create `RapiDoc::with_openapi` because the OpenApi is served
        // via SwaggerUi instead we only make rapidoc to point to the existing doc.
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}
