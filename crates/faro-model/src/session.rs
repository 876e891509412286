use chrono::{DateTime, Utc};
use faro_config::questionnaire::question::Question;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, ToSchema, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Running = 1,
    Finished = 2,
}

/// How far through the questionnaire a session is.
#[derive(Debug, Copy, Clone, Serialize, ToSchema)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

/// A question together with the choice recorded for it in this session, if
/// any.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnsweredQuestion {
    #[serde(flatten)]
    pub question: Question,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssessmentSession {
    pub session_id: Uuid,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<Utc>>,
    pub progress: Progress,
    pub questions: Vec<AnsweredQuestion>,
}
