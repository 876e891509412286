pub(crate) mod assessment;
pub(crate) mod questionnaire;
pub(crate) mod status;
