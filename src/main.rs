mod app;
mod cli;
mod clipboard;
mod config;
mod docs;
mod ui;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use docs::ApiReference;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use ui::theme::Theme;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let reference = ApiReference::builtin();

    match cli.command {
        Some(Commands::Show { resource }) => {
            init_stderr_logging();
            handle_show(&reference, resource.as_deref())?;
        }
        Some(Commands::Copy { token, list }) => {
            init_stderr_logging();
            handle_copy(&reference, token.as_deref(), list)?;
        }
        None => {
            // No command - launch TUI
            init_file_logging()?;
            info!("starting doctui");

            let theme = Theme::from_config(&config);
            let copy_feedback = Duration::from_millis(config.copy_feedback_ms);
            let state = app::AppState::new(reference, theme, copy_feedback);

            ui::run_tui(state)?;
        }
    }

    Ok(())
}

/// TUI mode owns the terminal, so logs go to a file under ~/.doc-tui.
fn init_file_logging() -> Result<()> {
    utils::paths::ensure_directories_exist()?;
    let file = std::fs::File::create(utils::paths::get_log_path()?)?;
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn handle_show(reference: &ApiReference, resource: Option<&str>) -> Result<()> {
    let resources: Vec<_> = match resource {
        Some(name) => match reference.resource(name) {
            Some(r) => vec![r],
            None => bail!("Unknown resource '{name}' (expected products, users or posts)"),
        },
        None => reference.resources.iter().collect(),
    };

    println!("\n{} - {}\n", reference.title, reference.base_urls.join(" | "));

    for r in resources {
        println!("{}", r.name);
        for ep in &r.endpoints {
            println!("  {:<22} {}", ep.title(), ep.description);
        }
        println!();
    }

    Ok(())
}

fn handle_copy(reference: &ApiReference, token: Option<&str>, list: bool) -> Result<()> {
    if list {
        println!("base-url");
        for block in reference.all_blocks() {
            println!("{}", block.id);
        }
        return Ok(());
    }

    let Some(token) = token else {
        bail!("Pass a block token, or --list to see what is available");
    };

    let base_url = reference.base_url_block();
    let block = if token == base_url.id {
        &base_url
    } else {
        match reference.find_block(token) {
            Some(block) => block,
            None => bail!("Unknown token '{token}' (see 'doctui copy --list')"),
        }
    };

    clipboard::copy_to_clipboard(&block.code)?;
    println!("✓ Copied '{}' to clipboard", block.id);

    Ok(())
}
