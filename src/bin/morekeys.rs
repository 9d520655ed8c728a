// Morekeys CLI
// Reorders a key's long-press popup string from the command line

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use morekeys_core::{decode_order, LongPressSettings};

/// Long-press popup key reordering tool
#[derive(Parser, Debug)]
#[command(name = "morekeys")]
#[command(about = "Reorder long-press popup key specs", long_about = None)]
struct Args {
    /// TOML settings file (defaults to the user config location)
    #[arg(short, long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Explicit encoded category order (e.g. "1,0,2,3,4"), bypassing settings
    #[arg(short, long, value_name = "ORDER")]
    order: Option<String>,

    /// Print the effective category order and exit
    #[arg(long)]
    show_order: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Comma-joined popup key specs for one key
    #[arg(value_name = "KEYSPECS", required_unless_present = "show_order")]
    keyspecs: Option<String>,
}

fn load_settings(args: &Args) -> anyhow::Result<LongPressSettings> {
    if let Some(encoded) = &args.order {
        return Ok(LongPressSettings::new(decode_order(encoded), true));
    }
    match &args.settings {
        Some(path) => LongPressSettings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => LongPressSettings::load_default().context("failed to load default settings"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let settings = load_settings(&args)?;

    if args.show_order {
        for category in &settings.current_order {
            println!("{category}");
        }
        return Ok(());
    }

    let raw = args.keyspecs.as_deref().unwrap_or_default();
    println!("{}", settings.reorder_joined(raw));
    Ok(())
}
