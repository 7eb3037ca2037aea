//! Color-coded terrain rendering.
//!
//! [`TerrainRenderer`] samples a [`TerrainSampler`](terramap_terrain::TerrainSampler)
//! once per pixel and paints three bands into a [`PixelBuffer`]: a raw-level
//! sea ramp, a green land ramp, and gray snow, with optional black contour
//! lines every ten levels.

mod band;
mod buffer;
mod error;
mod png_export;
mod renderer;

pub use band::{
    AltitudeMode, Band, CONTOUR_STEP, GREEN_RANGE, LEVELS, SEA_LEVEL, SNOW_LINE, altitude_level,
    band_color, classify, coarsen, unpack_rgb,
};
pub use buffer::PixelBuffer;
pub use error::RenderError;
pub use png_export::{encode_png, write_png};
pub use renderer::{RenderOptions, RenderStats, TerrainRenderer, render};
