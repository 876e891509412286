use faro_config::assessment::level::Level;
use serde::Serialize;
use utoipa::ToSchema;

/// A fully resolved answer, carrying everything the report needs so the
/// questionnaire is not consulted again afterwards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelectedAnswer {
    pub question_id: String,
    pub section: String,
    pub prompt: String,
    pub label: String,
    pub weight: u8,
}

/// A section where the participant scored below the maximum, together with the
/// lowest weight selected there.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectionScore {
    pub section: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssessmentResult {
    pub total: u32,
    pub level: Level,
    pub level_label: String,
    pub answers: Vec<SelectedAnswer>,
    pub areas: Vec<SectionScore>,
}
