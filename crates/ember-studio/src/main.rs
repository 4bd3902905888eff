mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ember_field::logging::{init_logging, LoggingConfig};
use ember_field::ring::{RingLayout, RingParameters};
use ember_field::scene::{Extent, FlameScene, RingScene};
use ember_field::time::FrameClock;

use cli::{Cli, Command, FlamesArgs, RingsArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::verbose(cli.verbose),
    });

    match cli.command {
        Command::Rings(args) => run_rings(&args),
        Command::Flames(args) => run_flames(&args),
        Command::Controls => {
            list_controls();
            Ok(())
        }
    }
}

fn list_controls() {
    let defaults = RingParameters::default();
    let values = [
        defaults.circle_radius,
        defaults.circle_speed,
        defaults.separation_start,
        defaults.separation_end,
        defaults.circle_bounce,
    ];
    for (range, value) in RingParameters::controls().iter().zip(values) {
        println!(
            "{:<18} {:<18} [{:>5}, {:>5}] step {:<6} default {}",
            range.name, range.label, range.min, range.max, range.step, value
        );
    }
}

fn run_rings(args: &RingsArgs) -> Result<()> {
    let layout = RingLayout::new(args.instances, args.circles).context("invalid ring layout")?;
    let scene = RingScene {
        layout,
        params: args.params(),
        ..RingScene::default()
    };

    log::info!(
        "ring scene: {} instances over {} circles, {:?}",
        layout.instance_count(),
        layout.circle_count(),
        scene.params
    );

    let dt = Duration::from_secs_f32(1.0 / args.fps.max(1.0));
    let mut clock = FrameClock::new();
    let report_every = args.report_every.max(1);

    for _ in 0..args.frames {
        let frame = clock.advance(dt);
        let positions = scene.vertex_positions(frame.elapsed)?;

        if frame.frame_index % report_every as u64 == 0 {
            if let Some(extent) = Extent::of(&positions) {
                log::info!(
                    "frame {:>5} t={:>6.2}s  extent min=({:.2}, {:.2}, {:.2}) max=({:.2}, {:.2}, {:.2})",
                    frame.frame_index,
                    frame.elapsed,
                    extent.min.x,
                    extent.min.y,
                    extent.min.z,
                    extent.max.x,
                    extent.max.y,
                    extent.max.z,
                );
            }
        }
    }

    let records = scene.instances(clock.elapsed_seconds())?;
    log::info!(
        "done after {:.2}s, instance buffer {} bytes",
        clock.elapsed_seconds(),
        std::mem::size_of_val(records.as_slice())
    );
    Ok(())
}

fn run_flames(args: &FlamesArgs) -> Result<()> {
    let scene = FlameScene::generated(args.seed).context("failed to generate noise tables")?;
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    for sprite in scene.sprites() {
        let height = args.height.max(1);
        let width = ((height as f32 * sprite.scale_x).round() as u32).max(1);
        let mask = scene.rasterize(sprite.variant, width, height, args.time);

        let path = args.out.join(format!("flame-{}.png", sprite.variant.name()));
        let image = image::RgbaImage::from_raw(width, height, mask.to_rgba8())
            .context("mask buffer does not match image size")?;
        image
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;

        let (min, max) = sprite.bounds();
        log::info!(
            "{} flame {width}x{height} at t={:.2}s -> {} (coverage {:.1}%)",
            sprite.variant.name(),
            args.time,
            path.display(),
            mask.coverage() * 100.0
        );
        log::debug!(
            "{} billboard spans x {:.2}..{:.2}, y {:.2}..{:.2}",
            sprite.variant.name(),
            min.x,
            max.x,
            min.y,
            max.y
        );
    }

    Ok(())
}
