use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The final maturity classification. A closed enumeration, never a free-form
/// string.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema, JsonSchema, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Initial,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Initial, Self::Intermediate, Self::Advanced];
}

/// Static narrative text for one level, straight from the question bank
/// author.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Narrative {
    /// # What the level means
    pub definition: String,
    /// # Typical traits of an organization at this level
    pub characteristics: String,
    /// # Suggested learning path
    pub learning_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(Level::Initial.to_string(), "Initial");
        assert_eq!(Level::Intermediate.to_string(), "Intermediate");
        assert_eq!(Level::Advanced.to_string(), "Advanced");
    }

    #[test]
    fn test_level_as_map_key() {
        let json = serde_json::to_string(&Level::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
        let level: Level = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(level, Level::Intermediate);
    }
}
