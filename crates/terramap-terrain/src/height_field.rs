//! Grid-backed terrain source for precomputed altitude data.

use terramap_region::Region;

use crate::daylight::{average_daylight, daylight};
use crate::error::TerrainError;
use crate::sampler::TerrainSampler;

/// A [`TerrainSampler`] that looks altitudes up in a row-major grid.
///
/// Coordinates are floored to the containing cell and clamped to the grid
/// edge. The field is a flat plane on the equator: native coordinates are
/// the screen coordinates, and every cell sees the same sun.
#[derive(Clone, Debug)]
pub struct HeightField {
    width: u32,
    height: u32,
    altitudes: Vec<f64>,
    water_level: f64,
    base_temperature: f64,
    lapse_rate: f64,
    diurnal_amplitude: f64,
    regions: Vec<Region>,
}

impl HeightField {
    /// Wrap `altitudes` (length `width * height`, row-major).
    pub fn new(width: u32, height: u32, altitudes: Vec<f64>) -> Result<Self, TerrainError> {
        if width == 0 || height == 0 {
            return Err(TerrainError::EmptyViewport { width, height });
        }
        let expected = width as usize * height as usize;
        if altitudes.len() != expected {
            return Err(TerrainError::HeightFieldSize {
                expected,
                actual: altitudes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            altitudes,
            water_level: 140.0 / 256.0,
            base_temperature: 15.0,
            lapse_rate: 40.0,
            diurnal_amplitude: 6.0,
            regions: Vec::new(),
        })
    }

    /// Build a field by evaluating `f(x, y)` at every cell.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> f64,
    ) -> Result<Self, TerrainError> {
        let mut altitudes = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                altitudes.push(f(x, y));
            }
        }
        Self::new(width, height, altitudes)
    }

    pub fn with_water_level(mut self, water_level: f64) -> Self {
        self.water_level = water_level;
        self
    }

    /// Attach regions whose vertices are in grid coordinates.
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn cell(&self, x: f64, y: f64) -> f64 {
        let cx = clamp_index(x, self.width);
        let cy = clamp_index(y, self.height);
        self.altitudes[cy * self.width as usize + cx]
    }
}

fn clamp_index(v: f64, len: u32) -> usize {
    if v.is_nan() || v < 0.0 {
        0
    } else {
        (v.floor() as usize).min(len as usize - 1)
    }
}

impl TerrainSampler for HeightField {
    fn altitude(&self, x: f64, y: f64) -> f64 {
        self.cell(x, y)
    }

    fn water_level(&self, _x: f64, _y: f64) -> f64 {
        self.water_level
    }

    fn light(&self, _x: f64, _y: f64, time: f64) -> f64 {
        daylight(0.0, 0.0, time)
    }

    fn average_light(&self, _x: f64, _y: f64) -> f64 {
        average_daylight(0.0)
    }

    fn temperature(&self, x: f64, y: f64, time: f64) -> f64 {
        let swing = self.light(x, y, time) - self.average_light(x, y);
        self.average_temperature(x, y) + self.diurnal_amplitude * swing
    }

    fn average_temperature(&self, x: f64, y: f64) -> f64 {
        let elevation = (self.cell(x, y) - self.water_level).max(0.0);
        self.base_temperature - self.lapse_rate * elevation
    }

    fn regions_at(&self, x: f64, y: f64) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|r| r.contains_point(x, y))
            .collect()
    }

    fn project_to_full_coords(&self, x: f64, y: f64) -> Vec<f64> {
        vec![x, y]
    }

    fn world_x(&self, coords: &[f64]) -> f64 {
        coords.first().copied().unwrap_or(0.0)
    }

    fn world_y(&self, coords: &[f64]) -> f64 {
        coords.get(1).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_size_mismatch_rejected() {
        let err = HeightField::new(2, 2, vec![0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            TerrainError::HeightFieldSize {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_lookup_is_row_major_and_clamped() {
        let field = HeightField::new(2, 2, vec![0.1, 0.9, 0.5, 0.99]).unwrap();
        assert_eq!(field.altitude(0.0, 0.0), 0.1);
        assert_eq!(field.altitude(1.0, 0.0), 0.9);
        assert_eq!(field.altitude(0.0, 1.0), 0.5);
        assert_eq!(field.altitude(1.0, 1.0), 0.99);
        assert_eq!(field.altitude(1.7, 0.2), 0.9);
        assert_eq!(field.altitude(5.0, 5.0), 0.99);
        assert_eq!(field.altitude(-3.0, 0.0), 0.1);
        assert_eq!(field.altitude(f64::NAN, 1.0), 0.5);
    }

    #[test]
    fn test_from_fn_fills_grid() {
        let field = HeightField::from_fn(4, 3, |x, y| (x + y * 4) as f64 / 12.0).unwrap();
        assert_eq!(field.dimensions(), (4, 3));
        assert_eq!(field.altitude(3.0, 2.0), 11.0 / 12.0);
    }

    #[test]
    fn test_identity_projection() {
        let field = HeightField::new(1, 1, vec![0.5]).unwrap();
        let coords = field.project_to_full_coords(3.5, 7.25);
        assert_eq!(field.world_x(&coords), 3.5);
        assert_eq!(field.world_y(&coords), 7.25);
        assert_eq!(field.world_y(&[1.0]), 0.0);
    }

    #[test]
    fn test_high_ground_is_colder() {
        let field = HeightField::new(2, 1, vec![0.5, 0.9]).unwrap();
        assert!(field.average_temperature(0.0, 0.0) > field.average_temperature(1.0, 0.0));
        assert!(field.temperature(0.0, 0.0, 0.5) > field.temperature(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_water_level_shifts_lapse_baseline() {
        let field = HeightField::new(1, 1, vec![0.6]).unwrap();
        assert_eq!(field.water_level(0.0, 0.0), 140.0 / 256.0);

        let flooded = field.clone().with_water_level(0.8);
        assert_eq!(flooded.water_level(0.0, 0.0), 0.8);
        // Below the water line there is no lapse cooling.
        assert_eq!(flooded.average_temperature(0.0, 0.0), 15.0);
        assert!(field.average_temperature(0.0, 0.0) < 15.0);
    }

    #[test]
    fn test_regions_in_grid_space() {
        let square = Region::from_vertices(
            "square",
            [
                DVec2::new(0.0, 0.0),
                DVec2::new(4.0, 0.0),
                DVec2::new(4.0, 4.0),
                DVec2::new(0.0, 4.0),
            ],
        );
        let field = HeightField::new(8, 8, vec![0.0; 64])
            .unwrap()
            .with_regions(vec![square]);
        assert_eq!(field.regions_at(2.0, 2.0).len(), 1);
        assert!(field.regions_at(6.0, 6.0).is_empty());
    }
}
