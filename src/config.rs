use crate::error::{PersonaError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "persona.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".persona/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/persona/config.toml";

/// Optional settings layered from global, content-dir and local files; later
/// layers win key by key. CLI flags override all of it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonaConfig {
    pub scoring: Option<ScoringConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Skip-and-log instead of failing fast on bad answer references.
    #[serde(default)]
    pub lenient: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

impl PersonaConfig {
    pub fn lenient(&self) -> bool {
        self.scoring
            .as_ref()
            .map(|scoring| scoring.lenient)
            .unwrap_or(false)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }
}

pub fn load_config(content_root: &Path) -> Result<Option<PersonaConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(content_root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    content_root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PersonaConfig>> {
    let local_main = content_root.join(DEFAULT_CONFIG_FILE);
    let has_global = global_path.map(|path| path.exists()).unwrap_or(false);
    if !local_main.exists() && !has_global {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &local_main)?;
    merge_file_if_exists(&mut merged, &content_root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PersonaConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PersonaError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)
        .map_err(|e| PersonaError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, value);
    Ok(())
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
