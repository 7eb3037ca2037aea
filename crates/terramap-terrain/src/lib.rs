//! Terrain sources: the [`TerrainSampler`] capability and two implementations.
//!
//! [`NoiseTerrain`] samples multi-octave simplex noise on the unit sphere
//! through an equirectangular [`Viewport`]. [`HeightField`] serves a
//! precomputed grid of altitudes.

mod daylight;
mod error;
mod height_field;
mod heightmap;
mod noise_terrain;
mod sampler;
mod viewport;

pub use daylight::{average_daylight, daylight};
pub use error::TerrainError;
pub use height_field::HeightField;
pub use heightmap::{HeightmapParams, HeightmapSampler};
pub use noise_terrain::{NoiseTerrain, NoiseTerrainParams};
pub use sampler::TerrainSampler;
pub use terramap_region::Region;
pub use viewport::Viewport;
