use crate::report::error::RenderError;
use faro_config::assessment::Assessment;
use faro_model::report::Report;
use faro_model::result::AssessmentResult;

pub mod error;
pub mod html;
pub mod pdf;

/// Assembles the report content for a finished assessment. Pure data; see
/// [`html::render_html`] and [`pdf::render_pdf`] for the export formats.
pub fn build(assessment: &Assessment, result: &AssessmentResult) -> Result<Report, RenderError> {
    let narrative = assessment
        .narrative(result.level)
        .ok_or(RenderError::MissingNarrative(result.level))?;
    Ok(Report {
        title: assessment.title.clone(),
        level: result.level,
        level_label: result.level_label.clone(),
        total: result.total,
        narrative: narrative.clone(),
        breakdown: result.answers.clone(),
        areas: result.areas.clone(),
    })
}
