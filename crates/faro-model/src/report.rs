use crate::result::{SectionScore, SelectedAnswer};
use faro_config::assessment::level::{Level, Narrative};
use serde::Serialize;
use utoipa::ToSchema;

/// The report content shared by every export format. Rendering to html or pdf
/// only lays this out, it never recomputes anything.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Report {
    pub title: String,
    pub level: Level,
    pub level_label: String,
    pub total: u32,
    pub narrative: Narrative,
    pub breakdown: Vec<SelectedAnswer>,
    pub areas: Vec<SectionScore>,
}
