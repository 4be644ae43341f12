use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use modeldoc_config::DocFormat;
use modeldoc_exporter::exporter_for;
use modeldoc_loader::{load_config_or_default, load_registry};
use tracing::debug;

pub const FORMAT_PROMPT: &str = "选择文档格式:  (1) md   (2) excel";

pub fn cmd_model_to_doc(apps: Vec<String>, format: Option<DocFormat>) -> Result<()> {
    let stdin = io::stdin();
    let today = Local::now().date_naive();
    model_to_doc(&apps, format, &mut stdin.lock(), today)
}

fn model_to_doc<R: BufRead>(
    apps: &[String],
    format: Option<DocFormat>,
    input: &mut R,
    date: NaiveDate,
) -> Result<()> {
    let scope = if apps.is_empty() {
        "all".to_string()
    } else {
        apps.join(", ")
    };
    println!("{} {}", "Apps:".cyan(), scope.bright_white());

    let format = match format {
        Some(format) => format,
        None => match prompt_format(input)? {
            Some(format) => format,
            None => {
                eprintln!("{}", "unsupported format".red());
                return Ok(());
            }
        },
    };

    let config = load_config_or_default(None)?;
    let registry = load_registry(&config)?;
    let selected = registry.enumerate(apps);

    let path = config.output_path(format);
    debug!(%format, apps = selected.len(), path = %path.display(), "exporting document");
    exporter_for(format, config.project_name(), date)
        .export(&selected, &path)
        .with_context(|| format!("generate {format} document"))?;

    println!("{} {}", "Generated".bright_green().bold(), path.display());
    Ok(())
}

/// Ask for the output format and read one answer line.
fn prompt_format<R: BufRead>(input: &mut R) -> Result<Option<DocFormat>> {
    print!("{FORMAT_PROMPT} ");
    io::stdout().flush().context("flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("read format choice")?;
    Ok(DocFormat::from_choice(&line))
}
