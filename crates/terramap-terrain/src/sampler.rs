use terramap_region::Region;

/// A pluggable terrain source queried per screen location.
///
/// Every method is a pure function of its arguments, so one sampler can be
/// read from many threads at once. `x` and `y` are screen coordinates in
/// pixels; the sampler owns whatever projection maps them to its native space.
pub trait TerrainSampler {
    /// Fractional height in `[0, 1]`. Renderers scale this by 256.
    fn altitude(&self, x: f64, y: f64) -> f64;

    /// Water surface height on the same scale as [`altitude`](Self::altitude).
    fn water_level(&self, x: f64, y: f64) -> f64;

    /// Light intensity at `time`, a day fraction where 0.5 is noon at longitude 0.
    fn light(&self, x: f64, y: f64, time: f64) -> f64;

    /// Light intensity averaged over a full day.
    fn average_light(&self, x: f64, y: f64) -> f64;

    /// Air temperature at `time`, in degrees Celsius.
    fn temperature(&self, x: f64, y: f64, time: f64) -> f64;

    /// Temperature averaged over a full day.
    fn average_temperature(&self, x: f64, y: f64) -> f64;

    /// Regions containing the location, in the order the sampler stores them.
    fn regions_at(&self, x: f64, y: f64) -> Vec<&Region>;

    /// Map a screen location into the sampler's native coordinate system.
    fn project_to_full_coords(&self, x: f64, y: f64) -> Vec<f64>;

    /// Screen x for a point in native coordinates.
    fn world_x(&self, coords: &[f64]) -> f64;

    /// Screen y for a point in native coordinates.
    fn world_y(&self, coords: &[f64]) -> f64;
}
