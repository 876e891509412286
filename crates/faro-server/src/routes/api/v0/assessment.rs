use crate::AppConfig;
use crate::data::sessions::{SessionEntry, SessionStore};
use axum::Extension;
use axum::Json;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::routing::{Router, get, post, put};
use error::Error;
use faro_config::questionnaire::Questionnaire;
use faro_core::report::html::render_html;
use faro_core::report::pdf::render_pdf;
use faro_core::scoring::evaluate;
use faro_model::answer::{Answer, AnswerValue};
use faro_model::report::Report;
use faro_model::session::{AnsweredQuestion, AssessmentSession, Progress};
use http::{StatusCode, header};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) mod error;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SessionResponse {
    pub(crate) session_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ReportResponse {
    #[serde(flatten)]
    pub(crate) report: Report,
    /// Escaped html fragment rendering the same content.
    pub(crate) html: String,
}

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_assessment))
        .route("/start", post(start))
        .nest(
            "/sessions/{session}",
            Router::new()
                .route("/load", get(load))
                .route("/update/{question}", put(update))
                .route("/submit", post(submit))
                .route("/report", get(get_report))
                .route("/report/pdf", get(get_report_pdf)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/assessment",
    responses(
        (status = OK, body = faro_config::assessment::Assessment, description = "Returns title, instructions, thresholds and narratives"),
    ),
    tag = "v0/assessment"
)]
pub(crate) async fn get_assessment(Extension(app_config): Extension<AppConfig>) -> impl IntoResponse {
    Json(app_config.assessment().clone()).into_response()
}

#[utoipa::path(
    post,
    path = "/api/v0/assessment/start",
    responses(
        (status = OK, body = SessionResponse, description = "Starts a new assessment session"),
    ),
    tag = "v0/assessment"
)]
pub(crate) async fn start(Extension(sessions): Extension<SessionStore>) -> Result<impl IntoResponse, Error> {
    let session_id = sessions.start().await;
    tracing::debug!(session_id = %session_id.as_hyphenated(), "started assessment session");
    Ok(Json(SessionResponse { session_id }))
}

#[utoipa::path(
    get,
    path = "/api/v0/assessment/sessions/{session}/load",
    responses(
        (status = OK, body = AssessmentSession, description = "Returns all questions with, if answered, the saved choice"),
    ),
    params(
        ("session" = String, Path, description = "the session id of the assessment which should be loaded"),
    ),
    tag = "v0/assessment"
)]
pub(crate) async fn load(
    Extension(sessions): Extension<SessionStore>,
    Extension(app_config): Extension<AppConfig>,
    Path(session): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let entry = sessions.load(session).await?;
    Ok(Json(answered_session(app_config.questionnaire(), &entry)))
}

#[utoipa::path(
    put,
    request_body = AnswerValue,
    path = "/api/v0/assessment/sessions/{session}/update/{question}",
    responses(
        (status = CREATED, description = "Saves the choice for the given question"),
    ),
    params(
        ("session" = String, Path, description = "the session id of the assessment which should be updated"),
        ("question" = String, Path, description = "the question id of the question of which the answer should be set"),
    ),
    tag = "v0/assessment"
)]
pub(crate) async fn update(
    Extension(sessions): Extension<SessionStore>,
    Extension(app_config): Extension<AppConfig>,
    Path((session, question)): Path<(Uuid, String)>,
    Json(body): Json<AnswerValue>,
) -> Result<impl IntoResponse, Error> {
    let question = app_config
        .questionnaire()
        .get(&question)
        .ok_or(Error::QuestionNotFound)?;

    question.validate(body.choice).map_err(|error| {
        tracing::error!(error = &error as &dyn std::error::Error, "failed to validate answer");
        Error::InvalidAnswer
    })?;

    sessions.set_answer(session, question.id.clone(), body.choice).await?;
    Ok(StatusCode::CREATED.into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/assessment/sessions/{session}/submit",
    responses(
        (status = OK, body = faro_model::result::AssessmentResult, description = "Scores the saved answers and marks this session as finished"),
    ),
    params(
        ("session" = String, Path, description = "the session id of the assessment which should be submitted"),
    ),
    tag = "v0/assessment"
)]
pub(crate) async fn submit(
    Extension(sessions): Extension<SessionStore>,
    Extension(app_config): Extension<AppConfig>,
    Path(session): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    tracing::trace!(session_id = %session.as_hyphenated(), "submit assessment session");

    let entry = sessions.running(session).await?;

    let answers: Vec<Answer> = entry
        .answers
        .iter()
        .map(|(question_id, &choice)| Answer {
            question_id: question_id.clone(),
            choice,
        })
        .collect();

    // On failure the session keeps running with its answers intact.
    let result = evaluate(app_config.questionnaire(), &app_config.assessment().thresholds, &answers).inspect_err(
        |error| {
            tracing::error!(
                session_id = %session.as_hyphenated(),
                error = error as &dyn std::error::Error,
                "failed to evaluate assessment"
            );
        },
    )?;

    sessions.finish(session, result.clone()).await?;
    tracing::debug!(
        session_id = %session.as_hyphenated(),
        total = result.total,
        level = %result.level,
        "finished assessment session"
    );
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/api/v0/assessment/sessions/{session}/report",
    responses(
        (status = OK, body = ReportResponse, description = "Returns the report for a finished session"),
    ),
    params(
        ("session" = String, Path, description = "the session id of the assessment which should be reported"),
    ),
    tag = "v0/assessment"
)]
pub(crate) async fn get_report(
    Extension(sessions): Extension<SessionStore>,
    Extension(app_config): Extension<AppConfig>,
    Path(session): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let report = build_report(&sessions, &app_config, session).await?;
    let html = render_html(&report);
    Ok(Json(ReportResponse { report, html }))
}

#[utoipa::path(
    get,
    path = "/api/v0/assessment/sessions/{session}/report/pdf",
    responses(
        (status = OK, content_type = "application/pdf", description = "Returns the report as a downloadable pdf"),
    ),
    params(
        ("session" = String, Path, description = "the session id of the assessment which should be reported"),
    ),
    tag = "v0/assessment"
)]
pub(crate) async fn get_report_pdf(
    Extension(sessions): Extension<SessionStore>,
    Extension(app_config): Extension<AppConfig>,
    Path(session): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let report = build_report(&sessions, &app_config, session).await?;
    let bytes = render_pdf(&report).inspect_err(|error| {
        tracing::error!(
            session_id = %session.as_hyphenated(),
            error = error as &dyn std::error::Error,
            "failed to render pdf report"
        );
    })?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"assessment-report.pdf\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

async fn build_report(sessions: &SessionStore, app_config: &AppConfig, session: Uuid) -> Result<Report, Error> {
    let entry = sessions.load(session).await?;
    let result = entry.result.ok_or(Error::NotCompleted)?;
    let report = faro_core::report::build(app_config.assessment(), &result)?;
    Ok(report)
}

fn answered_session(questionnaire: &Questionnaire, entry: &SessionEntry) -> AssessmentSession {
    let questions: Vec<AnsweredQuestion> = questionnaire
        .questions
        .values()
        .map(|question| AnsweredQuestion {
            question: question.clone(),
            answer: entry.answers.get(&question.id).copied(),
        })
        .collect();
    let answered = questions.iter().filter(|question| question.answer.is_some()).count();

    AssessmentSession {
        session_id: entry.id,
        status: entry.status,
        completed: entry.completed,
        progress: Progress {
            answered,
            total: questions.len(),
        },
        questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faro_config::questionnaire::question::{Choice, Question};
    use faro_model::session::Status;
    use indexmap::IndexMap;
    use std::sync::LazyLock;
    use test_log::test;

    static QUESTIONNAIRE: LazyLock<Questionnaire> = LazyLock::new(|| {
        let questions = ["a", "b"]
            .into_iter()
            .map(|id| {
                (
                    id.to_owned(),
                    Question {
                        id: id.to_owned(),
                        section: "Policy".to_owned(),
                        prompt: format!("Prompt {id}"),
                        options: vec![
                            Choice {
                                label: "Yes".to_owned(),
                                weight: 3,
                            },
                            Choice {
                                label: "No".to_owned(),
                                weight: 1,
                            },
                        ],
                    },
                )
            })
            .collect::<IndexMap<_, _>>();
        Questionnaire { questions }
    });

    #[test(tokio::test)]
    async fn test_answered_session_tracks_progress() {
        let sessions = SessionStore::default();
        let id = sessions.start().await;
        sessions.set_answer(id, "a".to_owned(), 0).await.unwrap();

        let entry = sessions.load(id).await.unwrap();
        let session = answered_session(&QUESTIONNAIRE, &entry);

        assert_eq!(session.status, Status::Running);
        assert_eq!(session.progress.answered, 1);
        assert_eq!(session.progress.total, 2);
        assert_eq!(session.questions[0].answer, Some(0));
        assert_eq!(session.questions[1].answer, None);
    }

    #[test(tokio::test)]
    async fn test_answered_session_serializes_flat_questions() {
        let sessions = SessionStore::default();
        let id = sessions.start().await;
        sessions.set_answer(id, "b".to_owned(), 1).await.unwrap();

        let entry = sessions.load(id).await.unwrap();
        let session = answered_session(&QUESTIONNAIRE, &entry);
        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(value["questions"][1]["id"], "b");
        assert_eq!(value["questions"][1]["answer"], 1);
        assert!(value["questions"][0].get("answer").is_none());
    }
}
