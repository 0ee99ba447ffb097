#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the TKix catch game.

mod config;
mod pace;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use tkix_rendering::{Presentation, RenderingBackend};
use tkix_rendering_macroquad::MacroquadBackend;

use self::{config::CliArgs, session::Session};

/// Entry point for the TKix command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CliArgs::parse()
        .into_config()
        .context("invalid launch options")?;
    log::info!(
        "starting with seed {:#x}, redraw every {:?}",
        config.seed,
        config.tick_interval
    );

    let mut session =
        Session::new(config.seed, config.tick_interval).with_pace_reporting(config.show_fps);
    let presentation = Presentation::welcome(session.scene())
        .with_window_size(config.window_width, config.window_height)
        .context("invalid window size")?;

    let mut backend = MacroquadBackend::new();
    if let Some(vsync) = config.vsync {
        backend = backend.with_vsync(vsync);
    }

    backend
        .run(presentation, move |dt, input, scene| {
            session.frame(dt, input, scene);
        })
        .context("rendering backend failed")
}
