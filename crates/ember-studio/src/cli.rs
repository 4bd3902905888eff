use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use ember_field::ring::RingParameters;

/// Headless driver for the ring and flame fields.
#[derive(Debug, Parser)]
#[command(name = "ember-studio", version)]
pub struct Cli {
    /// Log filter in env_logger syntax, e.g. "debug" or "ember_field=debug".
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Raise ember log verbosity (-v debug, -vv trace). `--log` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Step the ring scene on a fixed clock and report its extent.
    Rings(RingsArgs),
    /// Rasterize both flame sprites to PNG files.
    Flames(FlamesArgs),
    /// List the tunable ring parameters and their slider ranges.
    Controls,
}

#[derive(Debug, Args)]
pub struct RingsArgs {
    #[arg(long, default_value_t = 240)]
    pub frames: u32,
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,
    /// Log a report every N frames.
    #[arg(long, default_value_t = 30)]
    pub report_every: u32,
    #[arg(long, default_value_t = 80)]
    pub instances: u32,
    #[arg(long, default_value_t = 4)]
    pub circles: u32,
    #[arg(long, default_value_t = 1.0)]
    pub radius: f32,
    #[arg(long, default_value_t = 0.5)]
    pub speed: f32,
    #[arg(long, default_value_t = 1.0)]
    pub separation_start: f32,
    #[arg(long, default_value_t = 2.0)]
    pub separation_end: f32,
    #[arg(long, default_value_t = 0.02)]
    pub bounce: f32,
    /// Snap parameters into the slider ranges of the settings panel.
    #[arg(long)]
    pub clamp: bool,
}

impl RingsArgs {
    pub fn params(&self) -> RingParameters {
        let params = RingParameters {
            circle_radius: self.radius,
            circle_speed: self.speed,
            separation_start: self.separation_start,
            separation_end: self.separation_end,
            circle_bounce: self.bounce,
        };
        if self.clamp { params.clamped() } else { params }
    }
}

#[derive(Debug, Args)]
pub struct FlamesArgs {
    /// Field time in seconds.
    #[arg(long, default_value_t = 1.0)]
    pub time: f32,
    /// Sprite height in pixels; width follows each sprite's aspect.
    #[arg(long, default_value_t = 512)]
    pub height: u32,
    /// Seed for the generated noise tables.
    #[arg(long, default_value_t = 7)]
    pub seed: u32,
    /// Output directory.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}
