use crate::error::{PersonaError, Result};
use crate::types::range::QualitativeRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const CATALOG_FILE: &str = "profiles.json";

/// Narrative text for one (category, range) cell of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProfile {
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    pub professional_suitability: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub development_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionProfiles {
    pub profiles: BTreeMap<QualitativeRange, CategoryProfile>,
}

/// Static narrative lookup table keyed by category and qualitative range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCatalog {
    pub dimensions: BTreeMap<String, DimensionProfiles>,
}

impl ProfileCatalog {
    pub fn load(content_root: &Path) -> Result<Self> {
        let path = content_root.join(CATALOG_FILE);
        if !path.is_file() {
            return Err(PersonaError::ContentDirNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(&path)?;
        serde_json::from_str(&raw)
            .map_err(|e| PersonaError::ContentParse(format!("{}: {}", path.display(), e)))
    }

    /// Fails loud on a missing cell; a silent default would mask content
    /// bugs from authors.
    pub fn profile(&self, category: &str, range: QualitativeRange) -> Result<&CategoryProfile> {
        self.dimensions
            .get(category)
            .and_then(|dimension| dimension.profiles.get(&range))
            .ok_or_else(|| PersonaError::MissingProfile {
                category: category.to_string(),
                range: range.as_str().to_string(),
            })
    }

    pub fn has_profile(&self, category: &str, range: QualitativeRange) -> bool {
        self.profile(category, range).is_ok()
    }
}
