use crate::AppConfig;
use crate::data::sessions::SessionStore;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use faro_model::status::ComponentStatus;
use http::StatusCode;
use serde_json::json;
use utoipa::ToSchema;

pub fn create_router<S>() -> Router<S> {
    Router::new().route("/", get(get_status)).with_state(())
}

#[derive(Debug, Clone, ToSchema)]
struct Status {
    questionnaire: ComponentStatus,
    sessions: ComponentStatus,
}

impl Status {
    pub(crate) fn status_code(&self) -> StatusCode {
        if self.questionnaire.is_ok() && self.sessions.is_ok() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<Status> for faro_model::status::Status {
    fn from(val: Status) -> Self {
        faro_model::status::Status {
            questionnaire: val.questionnaire.into_message(),
            sessions: val.sessions.into_message(),
        }
    }
}

impl IntoResponse for Status {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let status: faro_model::status::Status = self.into();
        (status_code, Json(status)).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server is ok", body = Status, example = json!( faro_model::status::Status { questionnaire: json!({ "questions": 10 }), sessions: json!({ "count": 0 }) } )),
    ),
    tag = "util"
)]
pub(crate) async fn get_status(
    Extension(app_config): Extension<AppConfig>,
    Extension(sessions): Extension<SessionStore>,
) -> impl IntoResponse {
    let questionnaire = if app_config.questionnaire().is_empty() {
        ComponentStatus::from_error_text("no questions loaded")
    } else {
        ComponentStatus::new(StatusCode::OK, Some(json!({ "questions": app_config.questionnaire().len() })))
    };
    let sessions = ComponentStatus::new(StatusCode::OK, Some(json!({ "count": sessions.len().await })));

    Status { questionnaire, sessions }
}
