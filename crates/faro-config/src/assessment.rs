use crate::assessment::error::ConfigError;
use crate::assessment::level::{Level, Narrative};
use crate::assessment::v01::AssessmentV01;
use faro_utils::loader::{Filter, Loader, LoaderTrait};
use futures::StreamExt;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod error;
pub mod level;
pub mod v01;

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { assessment: AssessmentV01 },
}

/// The assessment policy: everything about the questionnaire that is text and
/// numbers rather than questions. Immutable after load.
#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct Assessment {
    pub title: String,
    pub instructions: String,
    pub thresholds: Thresholds,
    pub narratives: IndexMap<Level, Narrative>,
}

impl Assessment {
    #[must_use]
    pub fn narrative(&self, level: Level) -> Option<&Narrative> {
        self.narratives.get(&level)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        for level in Level::ALL {
            if !self.narratives.contains_key(&level) {
                return Err(ConfigError::MissingNarrative(level));
            }
        }
        Ok(())
    }
}

impl From<AssessmentV01> for Assessment {
    fn from(v01: AssessmentV01) -> Self {
        Self {
            title: v01.title,
            instructions: v01.instructions,
            thresholds: v01.thresholds,
            narratives: v01.levels,
        }
    }
}

/// Score ranges are domain policy set by the question bank author, so they are
/// configuration, never code.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, ToSchema, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Thresholds {
    pub initial_max: u32,
    pub intermediate_max: u32,
}

impl Thresholds {
    /// Maps every total to exactly one level. Exhaustive and non-overlapping.
    #[must_use]
    pub fn classify(&self, total: u32) -> Level {
        if total <= self.initial_max {
            Level::Initial
        } else if total <= self.intermediate_max {
            Level::Intermediate
        } else {
            Level::Advanced
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_max >= self.intermediate_max {
            return Err(ConfigError::ThresholdOrder {
                initial_max: self.initial_max,
                intermediate_max: self.intermediate_max,
            });
        }
        Ok(())
    }
}

/// Loads the first yaml file found under the loader root.
pub async fn load(loader: &Loader) -> Result<Assessment, ConfigError> {
    tracing::debug!("Loading assessment configuration");
    let mut stream = loader.load_dir("", Filter::Yaml);
    let Some(file) = stream.next().await else {
        return Err(ConfigError::SourceNotFound);
    };
    let file = file?;
    let VersionConfig::V01 { assessment } = serde_yml::from_slice::<VersionConfig>(&file.content)?;
    let assessment: Assessment = assessment.into();
    assessment.validate()?;
    tracing::debug!(title = assessment.title, "loaded assessment configuration");
    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;
    use test_log::test;

    #[test]
    fn test_assessment_loading() {
        let assessment_file = read_to_string("test_configs/test.assessment.yaml").unwrap();
        let VersionConfig::V01 { assessment } = serde_yml::from_str::<VersionConfig>(&assessment_file).unwrap();
        let assessment: Assessment = assessment.into();
        assessment.validate().unwrap();
        assert_eq!(assessment.thresholds.initial_max, 15);
        assert_eq!(assessment.narratives.len(), 3);
    }

    #[test]
    fn test_classify_is_exhaustive() {
        let thresholds = Thresholds {
            initial_max: 10,
            intermediate_max: 20,
        };
        assert_eq!(thresholds.classify(0), Level::Initial);
        assert_eq!(thresholds.classify(10), Level::Initial);
        assert_eq!(thresholds.classify(11), Level::Intermediate);
        assert_eq!(thresholds.classify(12), Level::Intermediate);
        assert_eq!(thresholds.classify(20), Level::Intermediate);
        assert_eq!(thresholds.classify(21), Level::Advanced);
        assert_eq!(thresholds.classify(u32::MAX), Level::Advanced);
    }

    #[test]
    fn test_thresholds_must_increase() {
        let thresholds = Thresholds {
            initial_max: 23,
            intermediate_max: 15,
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ConfigError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn test_missing_narrative_is_rejected() {
        let mut narratives = IndexMap::new();
        narratives.insert(
            Level::Initial,
            Narrative {
                definition: "d".to_owned(),
                characteristics: "c".to_owned(),
                learning_path: "l".to_owned(),
            },
        );
        let assessment = Assessment {
            title: "Test".to_owned(),
            instructions: String::new(),
            thresholds: Thresholds {
                initial_max: 15,
                intermediate_max: 23,
            },
            narratives,
        };
        assert!(matches!(
            assessment.validate(),
            Err(ConfigError::MissingNarrative(Level::Intermediate))
        ));
    }
}
