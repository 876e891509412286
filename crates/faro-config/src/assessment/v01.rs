use crate::assessment::Thresholds;
use crate::assessment::level::{Level, Narrative};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AssessmentV01 {
    /// # Title of the assessment
    /// A human-readable title shown on the intro view and the report.
    pub title: String,
    /// # Instructions shown before the first question
    #[serde(default)]
    pub instructions: String,
    /// # Score thresholds separating the maturity levels
    pub thresholds: Thresholds,
    /// # Narrative text per maturity level
    #[schemars(with = "std::collections::HashMap<Level, Narrative>")]
    pub levels: IndexMap<Level, Narrative>,
}
