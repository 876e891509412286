pub mod assessment;
pub mod questionnaire;
