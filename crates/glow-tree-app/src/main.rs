//! glow-tree: decorate a tree with hand gestures, in the terminal
//!
//! Controls (keyboard hand simulator):
//! - Arrows: move the hand
//! - +/-: open or close the palm (resizes the tree while the palm is centered)
//! - h / v / f / o: heart, peace, fist, open hand
//! - z: push the index finger toward the camera
//! - Space: hide or show the hand
//! - r: clear the tree, e: next edition
//! - q, Esc or Ctrl-Q: quit
//!
//! Hover over a catalog item to pick it up, then hover over the tree to
//! place it.

use clap::Parser;
use glow_tree_app::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    glow_tree_app::init_logging(cli.log_file.as_deref())?;
    glow_tree_app::run(cli)
}
