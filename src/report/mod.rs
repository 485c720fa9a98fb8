pub mod json;
pub mod md;

use crate::content::validate::Finding;
use crate::error::PersonaError;
use crate::types::result::ResultSummary;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Output of `persona validate`: the content revision plus every finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub fingerprint: String,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }

    pub fn has_warnings(&self) -> bool {
        !self.findings.is_empty()
    }
}

pub fn render_summary(
    summary: &ResultSummary,
    format: OutputFormat,
) -> Result<String, PersonaError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(PersonaError::Json),
        OutputFormat::Md => Ok(md::summary_to_markdown(summary)),
    }
}

pub fn render_validation(
    report: &ValidationReport,
    format: OutputFormat,
) -> Result<String, PersonaError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PersonaError::Json),
        OutputFormat::Md => Ok(md::validation_to_markdown(report)),
    }
}
