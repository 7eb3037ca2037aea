//! `terramap`: render a procedurally generated planet to a PNG map.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p terramap-app -- --seed 7 --contours true -o world.png`.

mod pipeline;
mod platform;

use std::process::ExitCode;

use clap::Parser;
use terramap_config::{CliArgs, Config};
use terramap_log::init_logging;
use tracing::{error, info};

use crate::platform::PlatformDirs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let dirs = match &args.config {
        Some(dir) => PlatformDirs::from_config_dir(dir),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("terramap: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    if let Err(e) = dirs.create_all() {
        eprintln!("terramap: {e}");
        return ExitCode::FAILURE;
    }

    let mut config = match Config::load_or_create(&dirs.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("terramap: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    init_logging(Some(&dirs.log_dir), Some(&config));
    // Records from load_or_create predate the subscriber.
    info!(
        config = %Config::path_in(&dirs.config_dir).display(),
        "terramap starting"
    );

    match pipeline::run(&config) {
        Ok(summary) => {
            info!(
                output = %summary.output.display(),
                sea = summary.stats.sea,
                land = summary.stats.land,
                snow = summary.stats.snow,
                contour_pixels = summary.stats.contour_pixels,
                "map written"
            );
            if !summary.center_regions.is_empty() {
                info!(regions = ?summary.center_regions, "regions at map center");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "render failed");
            ExitCode::FAILURE
        }
    }
}
