use serde::{Deserialize, Serialize};

/// Qualitative band a normalized percentage falls into. The threshold table
/// selects which narrative text block users see, so it is fixed: changing a
/// boundary is a content-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QualitativeRange {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl QualitativeRange {
    pub const ALL: [QualitativeRange; 5] = [
        QualitativeRange::VeryLow,
        QualitativeRange::Low,
        QualitativeRange::Medium,
        QualitativeRange::High,
        QualitativeRange::VeryHigh,
    ];

    /// Buckets a percentage (0-100). Boundaries are inclusive on the lower
    /// side: 20 is veryLow, 21 is low, 80 is high, 81 is veryHigh.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0..=20 => QualitativeRange::VeryLow,
            21..=40 => QualitativeRange::Low,
            41..=60 => QualitativeRange::Medium,
            61..=80 => QualitativeRange::High,
            _ => QualitativeRange::VeryHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualitativeRange::VeryLow => "veryLow",
            QualitativeRange::Low => "low",
            QualitativeRange::Medium => "medium",
            QualitativeRange::High => "high",
            QualitativeRange::VeryHigh => "veryHigh",
        }
    }
}
