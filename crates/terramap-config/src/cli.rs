//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Render a procedurally generated planet to a PNG map.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terramap", about = "Render procedural terrain maps")]
pub struct CliArgs {
    /// Image width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Draw contour lines (true/false).
    #[arg(long)]
    pub contours: Option<bool>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Longitude at the image center, degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub center_lon: Option<f64>,

    /// Latitude at the image center, degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub center_lat: Option<f64>,

    /// Zoom factor (1 = whole globe).
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Render worker threads (0 = all CPUs).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output PNG path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.render.width = w;
        }
        if let Some(h) = args.height {
            self.render.height = h;
        }
        if let Some(contours) = args.contours {
            self.render.contours = contours;
        }
        if let Some(threads) = args.threads {
            self.render.threads = threads;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(lon) = args.center_lon {
            self.view.center_lon = lon;
        }
        if let Some(lat) = args.center_lat {
            self.view.center_lat = lat;
        }
        if let Some(zoom) = args.zoom {
            self.view.zoom = zoom;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
