use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Command-line options accepted by the `tkix` binary.
#[derive(Debug, Parser)]
#[command(name = "tkix", about = "Trap both ends of the bouncing TKix inside a box")]
pub(crate) struct CliArgs {
    /// Seed for the random stream used when a caught stick is released.
    #[arg(long)]
    seed: Option<u64>,
    /// Interval between timer-driven redraws, in milliseconds.
    #[arg(long, default_value_t = 100)]
    tick_millis: u64,
    /// Initial window width in pixels.
    #[arg(long, default_value_t = 400)]
    width: u32,
    /// Initial window height in pixels.
    #[arg(long, default_value_t = 200)]
    height: u32,
    /// Synchronise presentation with the display refresh rate.
    #[arg(long)]
    vsync: Option<bool>,
    /// Log frame and tick rates once per second.
    #[arg(long)]
    show_fps: bool,
}

/// Validated launch configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LaunchConfig {
    pub(crate) seed: u64,
    pub(crate) tick_interval: Duration,
    pub(crate) window_width: u32,
    pub(crate) window_height: u32,
    pub(crate) vsync: Option<bool>,
    pub(crate) show_fps: bool,
}

/// Reasons launch options can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("tick interval must be at least one millisecond")]
    ZeroTickInterval,
}

impl CliArgs {
    /// Validates the options, drawing a fresh seed when none was given.
    pub(crate) fn into_config(self) -> Result<LaunchConfig, ConfigError> {
        if self.tick_millis == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(LaunchConfig {
            seed: self.seed.unwrap_or_else(rand::random),
            tick_interval: Duration::from_millis(self.tick_millis),
            window_width: self.width,
            window_height: self.height,
            vsync: self.vsync,
            show_fps: self.show_fps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("tkix").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn defaults_match_the_classic_window() {
        let config = parse(&["--seed", "9"]).into_config().expect("defaults are valid");

        assert_eq!(
            config,
            LaunchConfig {
                seed: 9,
                tick_interval: Duration::from_millis(100),
                window_width: 400,
                window_height: 200,
                vsync: None,
                show_fps: false,
            }
        );
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--seed",
            "1",
            "--tick-millis",
            "50",
            "--width",
            "800",
            "--height",
            "600",
            "--vsync",
            "false",
            "--show-fps",
        ])
        .into_config()
        .expect("flags are valid");

        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!((config.window_width, config.window_height), (800, 600));
        assert_eq!(config.vsync, Some(false));
        assert!(config.show_fps);
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let error = parse(&["--tick-millis", "0"])
            .into_config()
            .expect_err("zero interval must be rejected");

        assert_eq!(error, ConfigError::ZeroTickInterval);
    }

    #[test]
    fn unknown_flags_fail_to_parse() {
        assert!(CliArgs::try_parse_from(["tkix", "--levels", "3"]).is_err());
    }
}
