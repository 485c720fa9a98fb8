use crate::content::catalog::CategoryProfile;
use crate::gender::Gender;
use crate::types::range::QualitativeRange;
use serde::Serialize;

/// One category after normalization, bucketing and catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    pub category: String,
    pub percentage: u8,
    pub range: QualitativeRange,
    pub profile: CategoryProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Respondent {
    pub name: String,
    pub gender: Gender,
}

/// Final output of one scored attempt. Computed once, immutable; persistence
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub test_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent: Option<Respondent>,
    /// Sorted by percentage descending; ties keep declared category order.
    pub ranked: Vec<ResolvedProfile>,
    pub primary_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_category: Option<String>,
    pub overview: String,
    pub combined_strengths: Vec<String>,
    pub combined_keywords: Vec<String>,
}

impl ResultSummary {
    pub fn primary(&self) -> &ResolvedProfile {
        &self.ranked[0]
    }

    pub fn secondary(&self) -> Option<&ResolvedProfile> {
        self.ranked.get(1)
    }
}
