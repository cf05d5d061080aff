//! Terminal demo for the listview engine.

mod app;
mod config;
mod error;
mod paths;
mod scrollbar;
mod style;

use std::fs::File;

use clap::Parser;
use log::{LevelFilter, error, info, warn};
use simplelog::{Config, WriteLogger};

use crate::app::{App, Screen};
use crate::config::DemoConfig;
use crate::error::DemoError;

#[derive(Debug, Parser)]
#[command(name = "listview-demo", about = "Scroll through a virtualized list")]
struct Args {
    /// Number of generated items.
    #[arg(long, default_value_t = 200)]
    items: usize,

    /// Allow selecting several items.
    #[arg(long)]
    multi: bool,
}

fn main() {
    let args = Args::parse();

    // Logging must not touch the terminal once raw mode is on.
    if let Some(path) = paths::session_log()
        && let Ok(file) = File::create(&path)
    {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }

    if let Err(e) = run(&args) {
        error!("Demo failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let config = match paths::config_file() {
        Some(path) => DemoConfig::load(&path)?,
        None => {
            warn!("No config directory, using defaults");
            DemoConfig::default()
        }
    };
    info!("Starting with {:?}", args);

    let mut app = App::new(args.items, args.multi, &config)?;
    let mut screen = Screen::enter()?;
    app.run(&mut screen)
}
