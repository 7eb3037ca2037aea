//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Image size and render options.
    pub render: RenderConfig,
    /// Noise and climate parameters for the generated planet.
    pub terrain: TerrainConfig,
    /// Which part of the globe is shown.
    pub view: ViewConfig,
    /// Where the rendered image goes.
    pub output: OutputConfig,
    /// Logging settings.
    pub debug: DebugConfig,
    /// Named areas, in `(lon, lat)` degrees.
    pub regions: Vec<RegionConfig>,
}

/// Render configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Draw contour lines every ten levels.
    pub contours: bool,
    /// Clamp altitude levels to `0..=255` before coloring.
    pub clamp_altitude: bool,
    /// Worker threads (0 = all logical CPUs).
    pub threads: usize,
}

/// Terrain generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// World seed.
    pub seed: u64,
    /// fBm octave count.
    pub octaves: u32,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// First-octave frequency on the unit sphere.
    pub base_frequency: f64,
    /// Water surface altitude in `[0, 1]`.
    pub water_level: f64,
    /// Frequency of the temperature perturbation noise.
    pub temperature_frequency: f64,
    /// Mean equator temperature at water level (Celsius).
    pub equator_temperature: f64,
    /// Mean pole temperature at water level (Celsius).
    pub pole_temperature: f64,
    /// Degrees lost per unit of altitude above water.
    pub lapse_rate: f64,
    /// Day/night temperature swing (Celsius).
    pub diurnal_amplitude: f64,
}

/// Viewport configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Longitude at the image center, degrees.
    pub center_lon: f64,
    /// Latitude at the image center, degrees.
    pub center_lat: f64,
    /// 1.0 shows the whole globe across the image width.
    pub zoom: f64,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG output path.
    pub path: PathBuf,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,terramap_render=trace").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub file_logging: bool,
}

/// A named polygon in `(lon, lat)` degrees.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegionConfig {
    pub name: String,
    pub vertices: Vec<(f64, f64)>,
}

// --- Default implementations ---

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
            contours: false,
            clamp_altitude: true,
            threads: 0,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 6,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 1.5,
            water_level: 140.0 / 256.0,
            temperature_frequency: 2.0,
            equator_temperature: 30.0,
            pole_temperature: -25.0,
            lapse_rate: 40.0,
            diurnal_amplitude: 6.0,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center_lon: 0.0,
            center_lat: 0.0,
            zoom: 1.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("terramap.png"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            file_logging: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Path of the config file inside `config_dir`.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::path_in(config_dir);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(Self::path_in(config_dir), serialized).map_err(ConfigError::WriteError)
    }

    /// Re-read the file; returns `Some(new_config)` only if it changed.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&Self::path_in(config_dir))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }

    /// Reject settings that would produce an empty or meaningless render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &str| -> Result<(), ConfigError> {
            Err(ConfigError::InvalidValue {
                field,
                reason: reason.to_string(),
            })
        };

        if self.render.width == 0 {
            return invalid("render.width", "image must be at least 1x1");
        }
        if self.render.height == 0 {
            return invalid("render.height", "image must be at least 1x1");
        }
        if !(self.view.zoom.is_finite() && self.view.zoom > 0.0) {
            return invalid("view.zoom", "must be finite and positive");
        }
        if !(0.0..=1.0).contains(&self.terrain.water_level) {
            return invalid("terrain.water_level", "must lie in [0, 1]");
        }
        if self.terrain.octaves == 0 {
            return invalid("terrain.octaves", "must be at least 1");
        }
        if !(self.terrain.lacunarity.is_finite() && self.terrain.lacunarity > 0.0) {
            return invalid("terrain.lacunarity", "must be finite and positive");
        }
        if !(self.terrain.persistence.is_finite() && self.terrain.persistence > 0.0) {
            return invalid("terrain.persistence", "must be finite and positive");
        }
        if let Some(region) = self.regions.iter().find(|r| r.vertices.len() < 3) {
            return Err(ConfigError::InvalidValue {
                field: "regions",
                reason: format!("region `{}` needs at least 3 vertices", region.name),
            });
        }
        Ok(())
    }
}
