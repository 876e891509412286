use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/version", get(version)).with_state(())
}

#[utoipa::path(
    get,
    path = "/version",
    responses(
        (status = OK, body = String, description = "returns the server version")
    ),
    tag = "util"
)]
pub(crate) async fn version() -> impl IntoResponse {
    Json(env!("CARGO_PKG_VERSION")).into_response()
}
