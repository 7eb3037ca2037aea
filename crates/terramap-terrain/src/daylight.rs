//! Day/night light curves shared by the terrain sources.
//!
//! Time is a normalized day fraction in `[0, 1)`: 0.0 is midnight and 0.5 is
//! noon at longitude 0. The sun stays on the equatorial plane.

use std::f64::consts::{PI, TAU};

/// Direct sunlight at a geographic location, in `[0, 1]`.
///
/// This is the cosine of the sun's zenith angle, clamped to zero at night.
pub fn daylight(lon_deg: f64, lat_deg: f64, time: f64) -> f64 {
    let hour_angle = (time - 0.5) * TAU + lon_deg.to_radians();
    (lat_deg.to_radians().cos() * hour_angle.cos()).max(0.0)
}

/// Mean of [`daylight`] over a full day at the given latitude.
pub fn average_daylight(lat_deg: f64) -> f64 {
    lat_deg.to_radians().cos().max(0.0) / PI
}
