//! glow-tree-app: terminal host for the glow-tree interaction pipeline
//!
//! Polls a landmark source once per frame, feeds the interaction controller,
//! plays feedback for its events and draws the scene in the terminal.
//!
//! Landmark sources:
//! - Keyboard hand simulator (default)
//! - JSON-lines replay (`--replay`), optionally recorded with `--record`

pub mod cli;
pub mod framework;
pub mod handlers;
pub mod haptics;
pub mod renderer;
pub mod source;
pub mod state;
pub mod ui;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use crossterm::event::KeyEvent;
use glow_tree_core::{Catalog, GlowConfig, InteractionController, LandmarkSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use framework::{AppRunner, SceneApp};
use renderer::RenderBackend;
use state::AppState;

/// The glow-tree terminal application
pub struct GlowTreeApp;

impl SceneApp for GlowTreeApp {
    type State = AppState;

    fn handle_key(&mut self, key: KeyEvent, state: &mut Self::State) -> bool {
        handlers::handle_key(key, state)
    }

    fn update(&mut self, state: &mut Self::State, now: Instant) {
        for event in state.step(now) {
            info!(event = event.name(), "Interaction");
        }
    }

    fn render(&self, state: &Self::State, backend: &mut dyn RenderBackend) {
        ui::render_scene(state, backend);
    }

    fn on_tick(&mut self, state: &mut Self::State) {
        state.tick = state.tick.wrapping_add(1);
    }
}

/// Install a file logger; without a path logging stays off
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "glow_tree=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the application with parsed arguments
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        GlowConfig::discover(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let source = source::open(cli.replay.as_deref(), cli.loop_replay, cli.record.as_deref())
        .context("failed to open landmark source")?;
    info!(
        "glow-tree v{} starting with {} at {} fps",
        env!("CARGO_PKG_VERSION"),
        source.name(),
        cli.fps
    );

    let controller = InteractionController::new(config, Catalog::default());
    let state = AppState::new(
        controller,
        source,
        haptics::backend(!cli.no_haptics),
        cli.edition.into(),
    );

    let mut runner =
        AppRunner::new(GlowTreeApp, cli.tick_rate()).context("failed to set up terminal")?;
    let state = runner.run(state).context("terminal session failed")?;

    let placed = state.controller.decorations().len();
    info!("Session ended with {} decorations", placed);
    println!("Decorated the tree with {placed} ornaments.");
    Ok(())
}
