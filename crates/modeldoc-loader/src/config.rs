use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use modeldoc_config::{CONFIG_FILE_NAME, ModelDocConfig};
use tracing::debug;

/// Load config from a specific path.
pub fn load_config_from_path(path: &Path) -> Result<ModelDocConfig> {
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE_NAME} not found at: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let config: ModelDocConfig = serde_json::from_str(&content)
        .with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<&Path>) -> Result<ModelDocConfig> {
    let config_path = match project_root {
        Some(root) => root.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    };

    if config_path.exists() {
        load_config_from_path(&config_path)
    } else {
        debug!("no {CONFIG_FILE_NAME}, using defaults");
        Ok(ModelDocConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_config_or_default_without_file() {
        let tmp = tempdir().unwrap();
        let config = load_config_or_default(Some(tmp.path())).unwrap();
        assert_eq!(config, ModelDocConfig::default());
    }

    #[test]
    fn load_config_or_default_reads_file() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"{"projectName": "Repair", "modelsDir": "schema"}"#,
        )
        .unwrap();

        let config = load_config_or_default(Some(tmp.path())).unwrap();
        assert_eq!(config.project_name, "Repair");
        assert_eq!(config.models_dir, PathBuf::from("schema"));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
    }

    #[test]
    fn load_config_from_path_reports_parse_errors() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().starts_with("parse "));
    }

    #[test]
    fn load_config_from_path_missing_file() {
        let tmp = tempdir().unwrap();
        let err = load_config_from_path(&tmp.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("not found at"));
    }
}
