use crate::AppConfig;
use axum::Extension;
use axum::Json;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{Router, get};
use error::Error;
use faro_config::questionnaire::question::Question;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_questions))
        .route("/{question}", get(get_question))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/questionnaire",
    responses(
        (status = OK, body = [Question], description = "Returns all questions in presentation order"),
    ),
    tag = "v0/questionnaire"
)]
pub(crate) async fn list_questions(Extension(app_config): Extension<AppConfig>) -> Result<impl IntoResponse, Error> {
    let questions = app_config.questionnaire().questions.values().collect::<Vec<_>>();
    Ok(Json(questions).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/questionnaire/{question}",
    responses(
        (status = OK, body = Question, description = "Returns a single question"),
    ),
    params(
        ("question" = String, Path, description = "the id of the question"),
    ),
    tag = "v0/questionnaire"
)]
pub(crate) async fn get_question(
    Extension(app_config): Extension<AppConfig>,
    Path(question): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let question = app_config
        .questionnaire()
        .get(&question)
        .ok_or(Error::QuestionNotFound)?;
    Ok(Json(question).into_response())
}
