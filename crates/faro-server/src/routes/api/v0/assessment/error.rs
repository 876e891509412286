use crate::data::sessions::SessionError;
use axum::Json;
use axum::response::{IntoResponse, Response};
use faro_core::report::error::RenderError;
use faro_core::scoring::error::InvalidAnswerError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("question id wasn't found")]
    QuestionNotFound,
    #[error("an invalid answer was submitted")]
    InvalidAnswer,
    #[error(transparent)]
    InvalidAnswers(#[from] InvalidAnswerError),
    #[error("assessment session was not completed")]
    NotCompleted,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::QuestionNotFound | Self::NotCompleted | Self::Session(SessionError::NotFound) => {
                http::StatusCode::NOT_FOUND.into_response()
            }
            Self::Session(SessionError::NotRunning) => http::StatusCode::CONFLICT.into_response(),
            Self::InvalidAnswer => http::StatusCode::BAD_REQUEST.into_response(),
            Self::InvalidAnswers(error) => (
                http::StatusCode::BAD_REQUEST,
                Json(json!({ "error": error.to_string() })),
            )
                .into_response(),
            Self::Render(_) => http::StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
