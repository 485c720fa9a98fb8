use crate::error::Result;
use sha2::{Digest, Sha256};
use std::path::Path;
use walkdir::WalkDir;

/// SHA-256 over the content pack: sorted relative paths and file bytes.
/// Identifies a content revision, since content only changes with a new
/// build. Hidden bookkeeping under `.persona/` is excluded.
pub fn content_fingerprint(content_root: &Path) -> Result<String> {
    let mut paths: Vec<_> = WalkDir::new(content_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            !path
                .components()
                .any(|component| component.as_os_str() == ".persona")
        })
        .collect();
    paths.sort();

    let mut hasher = Sha256::new();
    for path in paths {
        let relative = path.strip_prefix(content_root).unwrap_or(&path);
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update([0u8]);
        hasher.update(std::fs::read(&path)?);
        hasher.update([0u8]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
