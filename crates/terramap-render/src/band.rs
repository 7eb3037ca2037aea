//! Altitude bands and their packed `0xRRGGBB` colors.

/// Levels below this are sea.
pub const SEA_LEVEL: i32 = 140;
/// Width of the land green ramp; the ramp starts at `GREEN_RANGE / 2`.
pub const GREEN_RANGE: i32 = 150;
/// Levels at or above this are snow.
pub const SNOW_LINE: i32 = 190;

/// Scale from fractional altitude to integer level.
pub const LEVELS: f64 = 256.0;
/// Levels per contour band.
pub const CONTOUR_STEP: i32 = 10;

/// How fractional altitudes outside `[0, 1]` become levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AltitudeMode {
    /// Floor and clamp the level to `0..=255`, so every band color fits in a byte
    /// per channel. NaN maps to 0.
    #[default]
    Clamped,
    /// Truncate toward zero with no clamping. Out-of-range levels overflow
    /// the band colors into neighbouring channels, matching older renders.
    Unclamped,
}

/// Terrain classification of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Sea,
    Land,
    Snow,
}

/// Band for an integer level.
pub fn classify(level: i32) -> Band {
    if level < SEA_LEVEL {
        Band::Sea
    } else if level < SNOW_LINE {
        Band::Land
    } else {
        Band::Snow
    }
}

/// Integer level for a fractional altitude.
pub fn altitude_level(altitude: f64, mode: AltitudeMode) -> i32 {
    match mode {
        AltitudeMode::Clamped => ((altitude * LEVELS).floor() as i32).clamp(0, 255),
        AltitudeMode::Unclamped => (altitude * LEVELS) as i32,
    }
}

/// Contour band index of a level.
pub fn coarsen(level: i32) -> i32 {
    level / CONTOUR_STEP
}

/// Packed color for a level. `edge` draws land and snow pixels black;
/// sea pixels ignore it.
pub fn band_color(level: i32, edge: bool) -> u32 {
    let color = match classify(level) {
        Band::Sea => level,
        Band::Land | Band::Snow if edge => 0,
        Band::Land => {
            let green =
                ((level - SEA_LEVEL) * GREEN_RANGE) / (SNOW_LINE - SEA_LEVEL) + GREEN_RANGE / 2;
            green << 8
        }
        Band::Snow => level | (level << 8) | (level << 16),
    };
    color as u32
}

/// Split a packed color into `(r, g, b)`.
pub fn unpack_rgb(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(classify(0), Band::Sea);
        assert_eq!(classify(139), Band::Sea);
        assert_eq!(classify(140), Band::Land);
        assert_eq!(classify(189), Band::Land);
        assert_eq!(classify(190), Band::Snow);
        assert_eq!(classify(255), Band::Snow);
        assert_eq!(classify(-5), Band::Sea);
    }

    #[test]
    fn test_sea_color_is_raw_level() {
        for level in 0..SEA_LEVEL {
            assert_eq!(band_color(level, false), level as u32);
            assert_eq!(band_color(level, true), level as u32);
        }
    }

    #[test]
    fn test_land_color_is_green_ramp() {
        for level in SEA_LEVEL..SNOW_LINE {
            let (r, g, b) = unpack_rgb(band_color(level, false));
            let expected = ((level - 140) * 150) / 50 + 75;
            assert_eq!((r, b), (0, 0));
            assert_eq!(g as i32, expected, "level {level}");
        }
        assert_eq!(unpack_rgb(band_color(140, false)), (0, 75, 0));
        assert_eq!(unpack_rgb(band_color(189, false)), (0, 222, 0));
    }

    #[test]
    fn test_snow_color_is_gray() {
        for level in SNOW_LINE..256 {
            let (r, g, b) = unpack_rgb(band_color(level, false));
            assert_eq!((r, g, b), (level as u8, level as u8, level as u8));
        }
    }

    #[test]
    fn test_edges_black_on_land_and_snow() {
        assert_eq!(band_color(150, true), 0);
        assert_eq!(band_color(200, true), 0);
    }

    #[test]
    fn test_clamped_levels() {
        assert_eq!(altitude_level(0.1, AltitudeMode::Clamped), 25);
        assert_eq!(altitude_level(0.99, AltitudeMode::Clamped), 253);
        assert_eq!(altitude_level(1.0, AltitudeMode::Clamped), 255);
        assert_eq!(altitude_level(1.7, AltitudeMode::Clamped), 255);
        assert_eq!(altitude_level(-0.2, AltitudeMode::Clamped), 0);
        assert_eq!(altitude_level(f64::NAN, AltitudeMode::Clamped), 0);
        assert_eq!(altitude_level(f64::INFINITY, AltitudeMode::Clamped), 255);
    }

    #[test]
    fn test_unclamped_levels_pass_through() {
        assert_eq!(altitude_level(1.0, AltitudeMode::Unclamped), 256);
        assert_eq!(altitude_level(1.5, AltitudeMode::Unclamped), 384);
        assert_eq!(altitude_level(-0.5, AltitudeMode::Unclamped), -128);
        // Truncation, not floor.
        assert_eq!(altitude_level(-0.001, AltitudeMode::Unclamped), 0);
    }

    #[test]
    fn test_unclamped_overflow_bleeds_across_channels() {
        // 256 | 256 << 8 | 256 << 16 sets bits outside the byte lanes.
        assert_eq!(band_color(256, false), 0x0101_0100);
        // Negative sea levels keep their two's complement bit pattern.
        assert_eq!(band_color(-1, false), u32::MAX);
    }

    #[test]
    fn test_coarsen_truncates() {
        assert_eq!(coarsen(0), 0);
        assert_eq!(coarsen(9), 0);
        assert_eq!(coarsen(143), 14);
        assert_eq!(coarsen(255), 25);
        assert_eq!(coarsen(-15), -1);
    }
}
