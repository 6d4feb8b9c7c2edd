//! Cyber USB Toolkit - terminal dashboard with simulated maintenance tools
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use cyber_usb::{Engine, HeadlessPlan};
use cyberusb_app::catalog::ToolCategory;
use cyberusb_app::config::{default_config_path, load_settings};
use cyberusb_app::preferences::{default_preferences_path, load_theme_preference};
use cyberusb_app::state::SystemInfo;
use cyberusb_core::logging;

/// Cyber USB Toolkit - system maintenance and security dashboard
#[derive(Parser, Debug)]
#[command(name = "cyberusb", version)]
#[command(about = "Terminal dashboard with simulated maintenance and security tools", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Identity string to classify the platform from
    #[arg(long, value_name = "STRING")]
    platform_id: Option<String>,

    /// Run without the dashboard and print NDJSON events
    #[arg(long)]
    headless: bool,

    /// Quick action to dispatch at startup (repeatable)
    #[arg(long = "action", value_name = "ID")]
    actions: Vec<String>,

    /// Tool to dispatch at startup (repeatable)
    #[arg(long = "tool", value_name = "ID")]
    tools: Vec<String>,

    /// Run every tool of a category: performance or security (repeatable)
    #[arg(long = "run-all", value_name = "CATEGORY", value_parser = parse_category)]
    run_all: Vec<ToolCategory>,
}

fn parse_category(s: &str) -> std::result::Result<ToolCategory, String> {
    ToolCategory::parse(s).ok_or_else(|| format!("expected 'performance' or 'security', got '{s}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let settings = load_settings(&config_path);
    let theme = load_theme_preference(&default_preferences_path());
    let system = match args.platform_id {
        Some(identity) => SystemInfo::new(identity, std::env::consts::ARCH),
        None => SystemInfo::current(),
    };

    let mut engine = Engine::new(settings, theme, system);
    engine.bootstrap();
    engine.spawn_signal_handler();

    let plan = HeadlessPlan {
        actions: args.actions,
        tools: args.tools,
        run_all: args.run_all,
    };

    if args.headless {
        cyber_usb::run_headless(engine, plan).await?;
    } else {
        for message in plan.messages() {
            engine.process_message(message);
        }
        cyber_usb::run(engine).await?;
    }

    Ok(())
}
