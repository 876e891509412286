use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One answered question: a question id paired with the index of the chosen
/// option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Answer {
    pub question_id: String,
    /// Index into the question's option list as served by the API.
    pub choice: usize,
}

/// Request body for answering a single question. The question id comes from
/// the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct AnswerValue {
    pub choice: usize,
}
