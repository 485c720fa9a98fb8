use crate::content::bank::Test;
use crate::error::{PersonaError, Result};
use crate::types::answers::AnswerSet;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROGRESS_FILE: &str = ".persona/progress.json";

/// One test's stored progress. Keyed by test id in the store; the engine
/// never reads this back into scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestProgress {
    pub test_id: String,
    pub completed_questions: Vec<String>,
    pub last_played: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub percent_complete: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_fingerprint: Option<String>,
}

/// Flat key-value progress store persisted as pretty JSON under the content
/// directory's `.persona/` bookkeeping folder.
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn open(content_root: &Path) -> Self {
        Self {
            path: content_root.join(PROGRESS_FILE),
        }
    }

    pub fn load(&self) -> Result<BTreeMap<String, TestProgress>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|e| PersonaError::ContentParse(format!("{}: {}", self.path.display(), e)))
    }

    pub fn get(&self, test_id: &str) -> Result<Option<TestProgress>> {
        Ok(self.load()?.remove(test_id))
    }

    /// Upserts the record for one completed attempt and rewrites the store.
    pub fn record_attempt(
        &self,
        test: &Test,
        answers: &AnswerSet,
        fingerprint: Option<String>,
    ) -> Result<TestProgress> {
        let mut completed: Vec<String> = answers
            .answers
            .iter()
            .filter(|record| test.find_question(&record.question_id).is_some())
            .map(|record| record.question_id.clone())
            .collect();
        completed.dedup();

        let total = test.questions.len();
        let percent_complete = if total == 0 {
            100
        } else {
            ((completed.len() as f64 / total as f64) * 100.0).round() as u8
        };
        let position = completed.last().cloned();

        let progress = TestProgress {
            test_id: test.id.clone(),
            completed_questions: completed,
            last_played: Utc::now().to_rfc3339(),
            position,
            percent_complete,
            content_fingerprint: fingerprint,
        };

        let mut store = self.load()?;
        store.insert(test.id.clone(), progress.clone());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&store)?)?;
        Ok(progress)
    }
}
