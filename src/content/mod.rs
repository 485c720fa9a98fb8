pub mod bank;
pub mod catalog;
pub mod fingerprint;
pub mod validate;

use crate::error::{PersonaError, Result};
use bank::QuestionBank;
use catalog::ProfileCatalog;
use std::path::Path;

/// Everything loaded from the static content pack. Immutable for the
/// process lifetime; content updates ship as a new pack.
#[derive(Debug, Clone)]
pub struct ContentSet {
    pub bank: QuestionBank,
    pub catalog: ProfileCatalog,
}

pub fn load_content(content_root: &Path) -> Result<ContentSet> {
    if !content_root.is_dir() {
        return Err(PersonaError::ContentDirNotFound(
            content_root.display().to_string(),
        ));
    }
    let bank = QuestionBank::load(content_root)?;
    let catalog = ProfileCatalog::load(content_root)?;
    Ok(ContentSet { bank, catalog })
}
