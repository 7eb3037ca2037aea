//! Equirectangular mapping between screen pixels and geographic degrees.

use glam::{DVec2, DVec3};

use crate::error::TerrainError;

/// The window of the globe shown on screen.
///
/// At `zoom == 1` the full 360 degrees of longitude span the image width.
/// Screen y grows downward, latitude grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Longitude at the image center, in degrees.
    pub center_lon: f64,
    /// Latitude at the image center, in degrees.
    pub center_lat: f64,
    /// Magnification relative to the whole-globe view.
    pub zoom: f64,
}

impl Viewport {
    /// A whole-globe view centered on (0, 0).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            center_lon: 0.0,
            center_lat: 0.0,
            zoom: 1.0,
        }
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width == 0 || self.height == 0 {
            return Err(TerrainError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.zoom.is_finite() || self.zoom <= 0.0 {
            return Err(TerrainError::InvalidZoom(self.zoom));
        }
        Ok(())
    }

    pub fn degrees_per_pixel(&self) -> f64 {
        360.0 / (self.width as f64 * self.zoom)
    }

    /// Convert a screen position to `(lon, lat)` in degrees.
    ///
    /// Latitude is clamped to the poles; longitude is left unwrapped.
    pub fn screen_to_geo(&self, x: f64, y: f64) -> DVec2 {
        let dpp = self.degrees_per_pixel();
        let lon = self.center_lon + (x - self.width as f64 * 0.5) * dpp;
        let lat = self.center_lat - (y - self.height as f64 * 0.5) * dpp;
        DVec2::new(lon, lat.clamp(-90.0, 90.0))
    }

    /// Convert `(lon, lat)` in degrees back to a screen position.
    ///
    /// Longitude is wrapped to the copy nearest the viewport center.
    pub fn geo_to_screen(&self, lon: f64, lat: f64) -> DVec2 {
        let dpp = self.degrees_per_pixel();
        let d_lon = (lon - self.center_lon + 180.0).rem_euclid(360.0) - 180.0;
        DVec2::new(
            self.width as f64 * 0.5 + d_lon / dpp,
            self.height as f64 * 0.5 - (lat - self.center_lat) / dpp,
        )
    }

    /// Point on the unit sphere under a screen position.
    pub fn screen_to_sphere(&self, x: f64, y: f64) -> DVec3 {
        let geo = self.screen_to_geo(x, y);
        geo_to_sphere(geo.x, geo.y)
    }

    /// Screen position of a point given in sphere coordinates.
    ///
    /// The point does not need to be normalized. The origin maps to the
    /// viewport center.
    pub fn sphere_to_screen(&self, point: DVec3) -> DVec2 {
        let len = point.length();
        if len == 0.0 || !len.is_finite() {
            return self.geo_to_screen(self.center_lon, self.center_lat);
        }
        let lon = point.y.atan2(point.x).to_degrees();
        let lat = (point.z / len).clamp(-1.0, 1.0).asin().to_degrees();
        self.geo_to_screen(lon, lat)
    }
}

/// Unit-sphere point for a geographic location in degrees (z is north).
pub(crate) fn geo_to_sphere(lon_deg: f64, lat_deg: f64) -> DVec3 {
    let (lon, lat) = (lon_deg.to_radians(), lat_deg.to_radians());
    DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_center_pixel_maps_to_center() {
        let vp = Viewport {
            center_lon: 20.0,
            center_lat: -10.0,
            ..Viewport::new(360, 180)
        };
        let geo = vp.screen_to_geo(180.0, 90.0);
        assert!((geo.x - 20.0).abs() < EPSILON);
        assert!((geo.y + 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_whole_globe_edges() {
        let vp = Viewport::new(360, 180);
        assert_eq!(vp.degrees_per_pixel(), 1.0);
        let top_left = vp.screen_to_geo(0.0, 0.0);
        assert_eq!(top_left, DVec2::new(-180.0, 90.0));
        let bottom = vp.screen_to_geo(0.0, 500.0);
        assert_eq!(bottom.y, -90.0);
    }

    #[test]
    fn test_zoom_narrows_view() {
        let vp = Viewport {
            zoom: 4.0,
            ..Viewport::new(360, 180)
        };
        assert_eq!(vp.degrees_per_pixel(), 0.25);
        assert_eq!(vp.screen_to_geo(0.0, 90.0).x, -45.0);
    }

    #[test]
    fn test_sphere_roundtrip_through_screen() {
        let vp = Viewport {
            center_lon: 170.0,
            center_lat: 5.0,
            zoom: 2.0,
            ..Viewport::new(200, 100)
        };
        for (x, y) in [(0.0, 0.0), (37.5, 12.25), (199.0, 99.0), (100.0, 50.0)] {
            let back = vp.sphere_to_screen(vp.screen_to_sphere(x, y));
            assert!((back.x - x).abs() < 1e-6, "x {x} -> {}", back.x);
            assert!((back.y - y).abs() < 1e-6, "y {y} -> {}", back.y);
        }
    }

    #[test]
    fn test_zero_point_maps_to_center() {
        let vp = Viewport::new(64, 32);
        assert_eq!(vp.sphere_to_screen(DVec3::ZERO), DVec2::new(32.0, 16.0));
    }

    #[test]
    fn test_invalid_viewports_rejected() {
        assert_eq!(
            Viewport::new(0, 10).validate(),
            Err(TerrainError::EmptyViewport {
                width: 0,
                height: 10
            })
        );
        let vp = Viewport {
            zoom: 0.0,
            ..Viewport::new(10, 10)
        };
        assert_eq!(vp.validate(), Err(TerrainError::InvalidZoom(0.0)));
    }
}
