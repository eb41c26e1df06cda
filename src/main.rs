mod catalog;
mod cli;
mod config;
mod countdown;
mod duration;
mod notify;
mod ui;

use anyhow::{Context, Result};
use catalog::Tea;
use clap::{CommandFactory, Parser};
use cli::Args;
use config::load_config;
use std::fs::File;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Args::parse();
    let config = load_config()?;

    // --file beats the config's teas_file; no file at all means the built-ins.
    let teas = match cli.file.as_ref().or(config.teas_file.as_ref()) {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open tea file {:?}", path))?;
            let (teas, fallback) = catalog::load_with_fallback(file);
            if let Some(err) = fallback {
                ui::warning(&format!("{err}; using the built-in teas"));
            }
            teas
        }
        None => Tea::defaults(),
    };

    if cli.list {
        ui::print_logo();
        ui::print_teas(&teas);
        return Ok(());
    }

    // Without a tea or a duration there is nothing to time.
    if cli.tea.is_none() && cli.duration.is_none() {
        Args::command().print_help()?;
        std::process::exit(1);
    }

    let selected = match &cli.tea {
        Some(selector) => Some(catalog::resolve(selector, &teas)?),
        None => None,
    };

    let total = duration::resolve_total(
        cli.duration.as_deref(),
        selected.map(Tea::steep_duration),
    )?;

    if let Some(tea) = selected {
        ui::print_tea(tea);
    }
    ui::print_logo();
    ui::info(&format!("Steeping for {}", duration::format_human(total)));

    countdown::steep(total).await;

    if config.notify {
        notify::notify_ready();
    }
    ui::success(notify::READY_MSG);

    Ok(())
}
