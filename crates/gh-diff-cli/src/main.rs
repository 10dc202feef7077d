use anyhow::{Context, Result};
use clap::Parser;
use gh_diff_config::{AppConfig, LoadedConfig};
use gh_diff_engine::{highlight_patch, parse_diff};

mod cli;
mod input;
mod logger;
mod output;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // the logger depends on the config, so config lookup is reported afterwards
    let loaded = match cli.config.as_deref() {
        Some(path) => LoadedConfig::from_file(path.to_path_buf(), AppConfig::load_from(path)?),
        None => AppConfig::load(),
    };
    let config = cli.merge_into(loaded.config.clone());

    if let Some(log_file) = logger::init(cli.verbose, config.log_to_file)? {
        eprintln!("Logging to {}", log_file.display());
    }
    loaded.log();
    log::debug!("Effective config: {:?}", config);

    let patch = input::read_patch(cli.patch.as_deref())?;

    let lines = if config.inline_highlights {
        highlight_patch(&patch, &config.highlight_options())
    } else {
        parse_diff(&patch)
    };
    log::info!("Processed {} diff lines", lines.len());

    let stdout = std::io::stdout();
    output::write_lines(&mut stdout.lock(), &lines, config.output_format)
        .context("Failed to write output")?;

    Ok(())
}
