//! Config-driven render pipeline: build the terrain, render it, write the PNG.

use std::path::PathBuf;

use glam::DVec2;
use terramap_config::{Config, ConfigError, RegionConfig, RenderConfig, TerrainConfig};
use terramap_region::Region;
use terramap_render::{
    AltitudeMode, PixelBuffer, RenderError, RenderOptions, RenderStats, TerrainRenderer, write_png,
};
use terramap_terrain::{
    HeightmapParams, NoiseTerrain, NoiseTerrainParams, TerrainError, TerrainSampler, Viewport,
};
use tracing::info;

/// Errors that stop a render run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build terrain: {0}")]
    Terrain(#[from] TerrainError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub stats: RenderStats,
    /// Names of the regions under the image center.
    pub center_regions: Vec<String>,
}

pub fn viewport_from_config(config: &Config) -> Viewport {
    Viewport {
        width: config.render.width,
        height: config.render.height,
        center_lon: config.view.center_lon,
        center_lat: config.view.center_lat,
        zoom: config.view.zoom,
    }
}

pub fn terrain_params(terrain: &TerrainConfig) -> NoiseTerrainParams {
    NoiseTerrainParams {
        heightmap: HeightmapParams {
            seed: terrain.seed,
            octaves: terrain.octaves,
            lacunarity: terrain.lacunarity,
            persistence: terrain.persistence,
            base_frequency: terrain.base_frequency,
        },
        water_level: terrain.water_level,
        temperature_frequency: terrain.temperature_frequency,
        equator_temperature: terrain.equator_temperature,
        pole_temperature: terrain.pole_temperature,
        lapse_rate: terrain.lapse_rate,
        diurnal_amplitude: terrain.diurnal_amplitude,
    }
}

pub fn regions_from_config(regions: &[RegionConfig]) -> Vec<Region> {
    regions
        .iter()
        .map(|r| {
            Region::from_vertices(
                r.name.clone(),
                r.vertices.iter().map(|&(lon, lat)| DVec2::new(lon, lat)),
            )
        })
        .collect()
}

pub fn render_options(render: &RenderConfig) -> RenderOptions {
    RenderOptions {
        contours: render.contours,
        altitude_mode: if render.clamp_altitude {
            AltitudeMode::Clamped
        } else {
            AltitudeMode::Unclamped
        },
        threads: render.threads,
    }
}

pub fn build_terrain(config: &Config) -> Result<NoiseTerrain, TerrainError> {
    let terrain = NoiseTerrain::new(viewport_from_config(config), terrain_params(&config.terrain))?;
    Ok(terrain.with_regions(regions_from_config(&config.regions)))
}

/// Validate `config`, render the map it describes, and write the PNG.
pub fn run(config: &Config) -> Result<RunSummary, AppError> {
    config.validate()?;

    let terrain = build_terrain(config)?;
    let renderer = TerrainRenderer::new(render_options(&config.render));
    let mut buffer = PixelBuffer::new(config.render.width, config.render.height);

    info!(
        width = config.render.width,
        height = config.render.height,
        seed = config.terrain.seed,
        contours = config.render.contours,
        "rendering terrain"
    );
    let stats = renderer.render_with_stats(&terrain, &mut buffer);
    write_png(&buffer, &config.output.path)?;

    let (cx, cy) = (
        config.render.width as f64 * 0.5,
        config.render.height as f64 * 0.5,
    );
    let center_regions = terrain
        .regions_at(cx, cy)
        .into_iter()
        .map(|r| r.name().to_string())
        .collect();

    Ok(RunSummary {
        output: config.output.path.clone(),
        stats,
        center_regions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(dir: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.render.width = 48;
        config.render.height = 24;
        config.render.threads = 2;
        config.render.contours = true;
        config.terrain.seed = 3;
        config.output.path = dir.join("out").join("map.png");
        config
    }

    #[test]
    fn test_run_writes_png_and_counts_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());

        let summary = run(&config).unwrap();

        assert_eq!(summary.stats.total(), 48 * 24);
        assert!(summary.output.exists());
        assert!(summary.center_regions.is_empty());
    }

    #[test]
    fn test_run_reports_center_regions() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.regions = vec![
            RegionConfig {
                name: "origin".into(),
                vertices: vec![(-5.0, -5.0), (5.0, -5.0), (5.0, 5.0), (-5.0, 5.0)],
            },
            RegionConfig {
                name: "far".into(),
                vertices: vec![(100.0, 40.0), (120.0, 40.0), (110.0, 60.0)],
            },
        ];

        let summary = run(&config).unwrap();
        assert_eq!(summary.center_regions, vec!["origin".to_string()]);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.view.zoom = 0.0;

        let err = run(&config).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::InvalidValue { .. })));
        assert!(!config.output.path.exists());
    }

    #[test]
    fn test_build_terrain_carries_view_and_regions() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.view.center_lon = 30.0;
        config.view.zoom = 2.0;
        config.regions.push(RegionConfig {
            name: "wedge".into(),
            vertices: vec![(25.0, -5.0), (35.0, -5.0), (30.0, 5.0)],
        });

        let terrain = build_terrain(&config).unwrap();
        assert_eq!(*terrain.viewport(), viewport_from_config(&config));
        assert_eq!(terrain.regions().len(), 1);
        assert_eq!(terrain.regions()[0].name(), "wedge");
    }

    #[test]
    fn test_render_options_mapping() {
        let mut render = RenderConfig::default();
        render.clamp_altitude = false;
        render.contours = true;
        render.threads = 4;
        let options = render_options(&render);
        assert_eq!(options.altitude_mode, AltitudeMode::Unclamped);
        assert!(options.contours);
        assert_eq!(options.threads, 4);
    }

    #[test]
    fn test_regions_from_config_keep_ring() {
        let regions = regions_from_config(&[RegionConfig {
            name: "tri".into(),
            vertices: vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)],
        }]);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].name(), "tri");
        assert_eq!(regions[0].len(), 3);
        assert!(regions[0].contains_point(2.0, 2.0));
        assert_eq!(regions[0].bounding_box().to_array(), [0.0, 0.0, 10.0, 10.0]);
    }
}
