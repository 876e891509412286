use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("question id wasn't found")]
    QuestionNotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::QuestionNotFound => http::StatusCode::NOT_FOUND.into_response(),
        }
    }
}
