#![deny(unsafe_code)]

mod common;
mod config;
mod constants;
mod gui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level as TraceLevel;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::config::EditorPaths;
use crate::constants::paths::{CONTROLS_FILE, CVARS_FILE, SCHEMA_FILE};
use crate::gui::state::EditorState;

#[derive(Parser)]
#[command(name = "cvar-editor")]
#[command(version)]
#[command(about = "Graphical editor for game cvars and key bindings", long_about = None)]
struct Cli {
    /// JSON schema declaring every cvar's type, default and bounds
    #[arg(long, default_value = SCHEMA_FILE)]
    schema: PathBuf,

    /// Saved cvar values, read at startup and written on save
    #[arg(long, default_value = CVARS_FILE)]
    cvars: PathBuf,

    /// Saved key bindings, read at startup and written on save
    #[arg(long, default_value = CONTROLS_FILE)]
    controls: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.debug {
        TraceLevel::DEBUG
    } else {
        TraceLevel::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let paths = EditorPaths {
        schema: cli.schema,
        cvars: cli.cvars,
        controls: cli.controls,
    };
    info!(schema = ?paths.schema, cvars = ?paths.cvars, controls = ?paths.controls, "Starting editor");

    // Without its schema the editor has nothing to show
    let state = EditorState::load(paths)?;

    gui::run_gui(state)
}
