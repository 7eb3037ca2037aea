//! Multi-octave fractal Brownian motion (fBm) over simplex noise.
//!
//! Samples are taken on the unit sphere so that maps wrap around in
//! longitude without a seam.

use glam::DVec3;
use noise::{NoiseFn, Simplex};

use crate::error::TerrainError;

/// Configuration for the fBm altitude field.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightmapParams {
    /// World seed for deterministic generation.
    pub seed: u64,
    /// Number of noise octaves to composite. Default: 6.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves. Default: 2.0.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves. Default: 0.5.
    pub persistence: f64,
    /// Frequency of the first octave on the unit sphere. Default: 1.5
    /// (a few continents per hemisphere).
    pub base_frequency: f64,
}

impl Default for HeightmapParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 6,
            lacunarity: 2.0,
            persistence: 0.5,
            base_frequency: 1.5,
        }
    }
}

impl HeightmapParams {
    /// Check that the parameters describe a usable fBm stack.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.octaves == 0 {
            return Err(TerrainError::ZeroOctaves);
        }
        if !self.lacunarity.is_finite() || self.lacunarity <= 0.0 {
            return Err(TerrainError::InvalidLacunarity(self.lacunarity));
        }
        if !self.persistence.is_finite() || self.persistence <= 0.0 {
            return Err(TerrainError::InvalidPersistence(self.persistence));
        }
        Ok(())
    }
}

/// Generates fractal height values by summing octaves of simplex noise.
pub struct HeightmapSampler {
    noise: Simplex,
    params: HeightmapParams,
}

impl HeightmapSampler {
    /// Create a sampler after validating `params`.
    pub fn new(params: HeightmapParams) -> Result<Self, TerrainError> {
        params.validate()?;
        let noise = Simplex::new(params.seed as u32);
        Ok(Self { noise, params })
    }

    /// Raw fBm value at a 3D point, roughly in `[-max_amplitude, max_amplitude]`.
    pub fn sample_3d(&self, point: DVec3) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.base_frequency;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            let p = point * frequency;
            total += self.noise.get([p.x, p.y, p.z]) * amplitude;

            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total
    }

    /// fBm value remapped to `[0, 1]`.
    pub fn sample_normalized(&self, point: DVec3) -> f64 {
        let max_amp = self.max_amplitude();
        (((self.sample_3d(point) / max_amp) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Sum of all octave amplitudes (geometric series with a first term of 1).
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.params.octaves {
            sum += amp;
            amp *= self.params.persistence;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn sphere_point(lon_deg: f64, lat_deg: f64) -> DVec3 {
        let (lon, lat) = (lon_deg.to_radians(), lat_deg.to_radians());
        DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    #[test]
    fn test_determinism_same_seed_same_point() {
        let params = HeightmapParams {
            seed: 42,
            ..Default::default()
        };
        let a = HeightmapSampler::new(params.clone()).unwrap();
        let b = HeightmapSampler::new(params).unwrap();

        let p = sphere_point(12.0, 34.0);
        assert!((a.sample_3d(p) - b.sample_3d(p)).abs() < EPSILON);
    }

    #[test]
    fn test_different_seeds_produce_different_fields() {
        let a = HeightmapSampler::new(HeightmapParams {
            seed: 1,
            ..Default::default()
        })
        .unwrap();
        let b = HeightmapSampler::new(HeightmapParams {
            seed: 999,
            ..Default::default()
        })
        .unwrap();

        let differs = (0..36).any(|i| {
            let p = sphere_point(i as f64 * 10.0, 20.0);
            (a.sample_3d(p) - b.sample_3d(p)).abs() > EPSILON
        });
        assert!(differs, "Different seeds should produce different heights");
    }

    #[test]
    fn test_normalized_within_unit_range() {
        let sampler = HeightmapSampler::new(HeightmapParams::default()).unwrap();
        for lon in (0..36).map(|i| i as f64 * 10.0 - 180.0) {
            for lat in (0..18).map(|i| i as f64 * 10.0 - 85.0) {
                let h = sampler.sample_normalized(sphere_point(lon, lat));
                assert!((0.0..=1.0).contains(&h), "height {h} at ({lon}, {lat})");
            }
        }
    }

    #[test]
    fn test_max_amplitude_calculation() {
        let sampler = HeightmapSampler::new(HeightmapParams {
            persistence: 0.5,
            octaves: 4,
            ..Default::default()
        })
        .unwrap();
        assert!((sampler.max_amplitude() - 1.875).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let zero_octaves = HeightmapParams {
            octaves: 0,
            ..Default::default()
        };
        assert_eq!(
            HeightmapSampler::new(zero_octaves).err(),
            Some(TerrainError::ZeroOctaves)
        );

        let bad_lacunarity = HeightmapParams {
            lacunarity: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            bad_lacunarity.validate(),
            Err(TerrainError::InvalidLacunarity(_))
        ));

        let bad_persistence = HeightmapParams {
            persistence: -0.5,
            ..Default::default()
        };
        assert_eq!(
            bad_persistence.validate(),
            Err(TerrainError::InvalidPersistence(-0.5))
        );
    }

    #[test]
    fn test_smooth_gradient_no_discontinuities() {
        let sampler = HeightmapSampler::new(HeightmapParams {
            seed: 42,
            ..Default::default()
        })
        .unwrap();

        for i in 0..3600 {
            let lon = i as f64 * 0.1;
            let a = sampler.sample_normalized(sphere_point(lon, 10.0));
            let b = sampler.sample_normalized(sphere_point(lon + 0.1, 10.0));
            assert!(
                (a - b).abs() < 0.1,
                "Discontinuity at lon={lon}: {a} vs {b}"
            );
        }
    }
}
