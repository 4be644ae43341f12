use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use modeldoc_config::ModelDocConfig;
use modeldoc_core::{ModelDef, ModelRegistry};
use tracing::debug;

/// Namespace for model files placed directly in the models directory
/// without an explicit `app`.
pub const DEFAULT_APP: &str = "default";

/// Load every model file under the configured models directory.
pub fn load_registry(config: &ModelDocConfig) -> Result<ModelRegistry> {
    load_registry_from_dir(config.models_dir())
}

/// Load every model file under `models_dir` (recursively) into a registry.
///
/// Files are visited in sorted path order so the registry, and every document
/// rendered from it, is stable across runs. A missing directory yields an
/// empty registry.
pub fn load_registry_from_dir(models_dir: &Path) -> Result<ModelRegistry> {
    let mut registry = ModelRegistry::new();
    if !models_dir.exists() {
        debug!(dir = %models_dir.display(), "models directory does not exist");
        return Ok(registry);
    }

    let mut files = Vec::new();
    collect_model_files(models_dir, &mut files)?;
    files.sort();

    for path in files {
        let model = parse_model_file(&path)?;
        let app = resolve_app(models_dir, &path, &model);
        debug!(path = %path.display(), app = %app, "loaded model");
        registry.register(app, model);
    }

    Ok(registry)
}

/// Recursively walk directory and collect model file paths.
fn collect_model_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read models directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();

        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }

        if path.is_dir() {
            collect_model_files(&path, files)?;
        } else if path.is_file() && is_model_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_model_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("json") | Some("yaml") | Some("yml")
    )
}

/// Parse one JSON or YAML model file.
pub fn parse_model_file(path: &Path) -> Result<ModelDef> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read model file: {}", path.display()))?;

    let model: ModelDef = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(&content)
            .with_context(|| format!("parse JSON model: {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML model: {}", path.display()))?
    };
    Ok(model)
}

/// Namespace of a model: its own `app`, else the first directory below the
/// models root, else [`DEFAULT_APP`].
fn resolve_app(root: &Path, path: &Path, model: &ModelDef) -> String {
    if let Some(app) = model.app.as_deref().filter(|a| !a.trim().is_empty()) {
        return app.to_string();
    }

    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut components = rel.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(dir)), Some(_)) => dir.to_string_lossy().into_owned(),
        _ => DEFAULT_APP.to_string(),
    }
}
