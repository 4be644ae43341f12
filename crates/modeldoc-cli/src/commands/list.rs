use anyhow::Result;
use colored::Colorize;
use modeldoc_core::{AppModels, extract_fields};
use modeldoc_loader::{load_config_or_default, load_registry};

pub fn cmd_list(apps: Vec<String>) -> Result<()> {
    let config = load_config_or_default(None)?;
    let registry = load_registry(&config)?;
    let selected = registry.enumerate(apps.as_slice());

    println!(
        "{} {}",
        "Models directory:".cyan(),
        config.models_dir().display().to_string().bright_white()
    );
    if selected.is_empty() {
        println!("{}", "No models found.".bright_yellow());
        return Ok(());
    }

    for line in describe(&selected)? {
        println!("{line}");
    }
    Ok(())
}

fn describe(apps: &[AppModels<'_>]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for app in apps {
        lines.push(format!(
            "{} ({} models)",
            app.app.bright_cyan().bold(),
            app.models.len().to_string().bright_yellow()
        ));
        for model in app.models {
            // Counted as documented: duplicate keys collapse into one row.
            let fields = extract_fields(model)?.len();
            lines.push(format!(
                "  {} {} {}",
                model.table_name()?.bright_white(),
                model.display_name()?,
                format!("[{fields} fields]").dimmed()
            ));
        }
    }
    Ok(lines)
}
