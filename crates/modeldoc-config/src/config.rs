use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::doc_format::DocFormat;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "modeldoc.json";

fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_project_name() -> String {
    "Project".to_string()
}

fn default_markdown_file() -> String {
    "magic_model_markdown.md".to_string()
}

fn default_excel_file() -> String {
    "magic_model_excel.xlsx".to_string()
}

/// Top-level modeldoc configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ModelDocConfig {
    /// Directory holding model files; subdirectories name namespaces.
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
    /// Directory generated documents are written to. Must already exist.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Project name used in the Markdown title.
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default = "default_markdown_file")]
    pub markdown_file: String,
    #[serde(default = "default_excel_file")]
    pub excel_file: String,
}

impl Default for ModelDocConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            output_dir: default_output_dir(),
            project_name: default_project_name(),
            markdown_file: default_markdown_file(),
            excel_file: default_excel_file(),
        }
    }
}

impl ModelDocConfig {
    /// Path where model definitions are stored.
    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    /// Directory generated documents land in.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Full output path for the given format.
    pub fn output_path(&self, format: DocFormat) -> PathBuf {
        match format {
            DocFormat::Md => self.output_dir.join(&self.markdown_file),
            DocFormat::Excel => self.output_dir.join(&self.excel_file),
        }
    }
}
