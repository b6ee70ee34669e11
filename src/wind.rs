//! Wind direction resolution
//!
//! Converts a wind bearing in degrees to one of the 16 compass point
//! labels, starting at N and proceeding clockwise in 22.5-degree sectors.

/// The 16 compass points, clockwise from north
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Compass label for a wind bearing in degrees [0, 360)
///
/// Uses `f64::round`, which rounds halves away from zero, so the sector
/// boundary 11.25 resolves to "NNE". 360 wraps back to "N".
pub fn compass_direction(degrees: f64) -> &'static str {
    let sector = (degrees / 22.5).round() as usize % 16;
    COMPASS_POINTS[sector]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(180.0), "S");
        assert_eq!(compass_direction(270.0), "W");
    }

    #[test]
    fn test_full_circle_wraps_to_north() {
        assert_eq!(compass_direction(360.0), "N");
        assert_eq!(compass_direction(359.0), "N");
    }

    #[test]
    fn test_boundary_rounding() {
        // 11.2 is just below the N/NNE boundary, 11.3 just above.
        assert_eq!(compass_direction(11.2), "N");
        assert_eq!(compass_direction(11.3), "NNE");
        // The exact boundary rounds away from zero into NNE.
        assert_eq!(compass_direction(11.25), "NNE");
    }

    #[test]
    fn test_intercardinal_directions() {
        assert_eq!(compass_direction(45.0), "NE");
        assert_eq!(compass_direction(135.0), "SE");
        assert_eq!(compass_direction(225.0), "SW");
        assert_eq!(compass_direction(315.0), "NW");
    }

    #[test]
    fn test_every_sector_center_maps_to_its_label() {
        for (i, label) in COMPASS_POINTS.iter().enumerate() {
            let center = i as f64 * 22.5;
            assert_eq!(compass_direction(center), *label);
        }
    }
}
