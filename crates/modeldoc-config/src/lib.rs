pub mod config;
pub mod doc_format;

pub use config::{CONFIG_FILE_NAME, ModelDocConfig};
pub use doc_format::{DocFormat, UnsupportedFormat};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    #[test]
    fn overrides_work_via_struct_update() {
        let cfg = ModelDocConfig {
            models_dir: PathBuf::from("schema/models"),
            output_dir: PathBuf::from("build/docs"),
            excel_file: "tables.xlsx".into(),
            ..Default::default()
        };

        assert_eq!(cfg.models_dir(), Path::new("schema/models"));
        assert_eq!(
            cfg.output_path(DocFormat::Excel),
            PathBuf::from("build/docs/tables.xlsx")
        );
        assert_eq!(
            cfg.output_path(DocFormat::Md),
            PathBuf::from("build/docs/magic_model_markdown.md")
        );
    }
}
