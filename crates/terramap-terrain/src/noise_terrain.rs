//! Noise-driven planet surface seen through a [`Viewport`].

use glam::DVec3;
use noise::{NoiseFn, Simplex};
use terramap_region::Region;

use crate::daylight::{average_daylight, daylight};
use crate::error::TerrainError;
use crate::heightmap::{HeightmapParams, HeightmapSampler};
use crate::sampler::TerrainSampler;
use crate::viewport::{Viewport, geo_to_sphere};

/// Parameters for [`NoiseTerrain`].
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseTerrainParams {
    /// fBm altitude field. Its seed also derives the temperature noise seed.
    pub heightmap: HeightmapParams,
    /// Water surface altitude in `[0, 1]`. Default: 140/256.
    pub water_level: f64,
    /// Frequency of the temperature perturbation noise on the unit sphere.
    pub temperature_frequency: f64,
    /// Mean temperature at the equator at water level, in degrees Celsius.
    pub equator_temperature: f64,
    /// Mean temperature at the poles at water level, in degrees Celsius.
    pub pole_temperature: f64,
    /// Degrees lost per unit of altitude above the water level.
    pub lapse_rate: f64,
    /// Peak day/night swing around the daily mean, in degrees Celsius.
    pub diurnal_amplitude: f64,
}

impl Default for NoiseTerrainParams {
    fn default() -> Self {
        Self {
            heightmap: HeightmapParams::default(),
            water_level: 140.0 / 256.0,
            temperature_frequency: 2.0,
            equator_temperature: 30.0,
            pole_temperature: -25.0,
            lapse_rate: 40.0,
            diurnal_amplitude: 6.0,
        }
    }
}

/// A [`TerrainSampler`] backed by simplex noise on the unit sphere.
///
/// Screen positions go through the viewport to `(lon, lat)`, then onto the
/// sphere where the noise is sampled. Regions are stored in `(lon, lat)`
/// degrees.
pub struct NoiseTerrain {
    viewport: Viewport,
    heightmap: HeightmapSampler,
    temperature_noise: Simplex,
    params: NoiseTerrainParams,
    regions: Vec<Region>,
}

impl NoiseTerrain {
    /// Build a terrain after validating the viewport and noise parameters.
    pub fn new(viewport: Viewport, params: NoiseTerrainParams) -> Result<Self, TerrainError> {
        viewport.validate()?;
        let heightmap = HeightmapSampler::new(params.heightmap.clone())?;
        let temperature_noise = Simplex::new(params.heightmap.seed.wrapping_add(0xDEAD_BEEF) as u32);

        tracing::debug!(
            seed = params.heightmap.seed,
            octaves = params.heightmap.octaves,
            width = viewport.width,
            height = viewport.height,
            zoom = viewport.zoom,
            "noise terrain created"
        );

        Ok(Self {
            viewport,
            heightmap,
            temperature_noise,
            params,
            regions: Vec::new(),
        })
    }

    /// Attach regions whose vertices are `(lon, lat)` degrees.
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn sphere_point(&self, x: f64, y: f64) -> DVec3 {
        self.viewport.screen_to_sphere(x, y)
    }
}

impl TerrainSampler for NoiseTerrain {
    fn altitude(&self, x: f64, y: f64) -> f64 {
        self.heightmap.sample_normalized(self.sphere_point(x, y))
    }

    fn water_level(&self, _x: f64, _y: f64) -> f64 {
        self.params.water_level
    }

    fn light(&self, x: f64, y: f64, time: f64) -> f64 {
        let geo = self.viewport.screen_to_geo(x, y);
        daylight(geo.x, geo.y, time)
    }

    fn average_light(&self, x: f64, y: f64) -> f64 {
        average_daylight(self.viewport.screen_to_geo(x, y).y)
    }

    fn temperature(&self, x: f64, y: f64, time: f64) -> f64 {
        let swing = self.light(x, y, time) - self.average_light(x, y);
        self.average_temperature(x, y) + self.params.diurnal_amplitude * swing
    }

    fn average_temperature(&self, x: f64, y: f64) -> f64 {
        let geo = self.viewport.screen_to_geo(x, y);
        let p = &self.params;

        let equatorness = geo.y.to_radians().cos().max(0.0);
        let sea_level_temp =
            p.pole_temperature + (p.equator_temperature - p.pole_temperature) * equatorness;

        let elevation = (self.altitude(x, y) - p.water_level).max(0.0);

        let q = geo_to_sphere(geo.x, geo.y) * p.temperature_frequency;
        let jitter = self.temperature_noise.get([q.x, q.y, q.z])
            * 0.1
            * (p.equator_temperature - p.pole_temperature);

        sea_level_temp - p.lapse_rate * elevation + jitter
    }

    fn regions_at(&self, x: f64, y: f64) -> Vec<&Region> {
        let geo = self.viewport.screen_to_geo(x, y);
        self.regions
            .iter()
            .filter(|r| r.contains_point(geo.x, geo.y))
            .collect()
    }

    fn project_to_full_coords(&self, x: f64, y: f64) -> Vec<f64> {
        self.sphere_point(x, y).to_array().to_vec()
    }

    fn world_x(&self, coords: &[f64]) -> f64 {
        self.viewport.sphere_to_screen(point_from_coords(coords)).x
    }

    fn world_y(&self, coords: &[f64]) -> f64 {
        self.viewport.sphere_to_screen(point_from_coords(coords)).y
    }
}

/// Missing trailing components read as zero.
fn point_from_coords(coords: &[f64]) -> DVec3 {
    let get = |i: usize| coords.get(i).copied().unwrap_or(0.0);
    DVec3::new(get(0), get(1), get(2))
}
