pub mod config;
pub mod models;

pub use config::{load_config_from_path, load_config_or_default};
pub use models::{DEFAULT_APP, load_registry, load_registry_from_dir, parse_model_file};
