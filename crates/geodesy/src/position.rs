//! Positions on the ellipsoid and hemisphere normalization.
//!
//! Best-track coordinate fields carry a trailing hemisphere letter
//! (`28.0N`, `94.8W`), and longitudes may exceed 180° in the raw data.
//! `Position::parse` folds both quirks into a canonical signed-degree
//! representation, so `358.0W` and `2.0E` construct the same position.

use crate::error::{GeodesyError, GeodesyResult};

/// A point on the WGS84 ellipsoid in signed decimal degrees.
///
/// North latitudes and east longitudes are positive. Longitude is kept in
/// (-180°, 180°]; construction goes through [`normalize_longitude`] so an
/// out-of-range east-convention value is reflected before it gets here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    lat: f64,
    lon: f64,
}

impl Position {
    /// Build from already-normalized signed degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a latitude/longitude field pair from a best-track record.
    ///
    /// Each field is a decimal number with an optional trailing hemisphere
    /// letter. A longitude whose numeric part exceeds 180° is reflected
    /// (360° − value) with its hemisphere flipped. Fields without a
    /// hemisphere letter are taken as north/east.
    pub fn parse(lat: &str, lon: &str) -> GeodesyResult<Self> {
        let (lat_num, lat_dir) = split_hemisphere(lat)?;
        let lat_signed = match lat_dir {
            Some('N') | None => lat_num,
            Some('S') => -lat_num,
            Some(other) => return Err(GeodesyError::InvalidDirection(other.to_string())),
        };

        let (lon_num, lon_dir) = split_hemisphere(lon)?;
        let (lon_num, lon_dir) = match lon_dir {
            Some(dir) => normalize_longitude(lon_num, dir)?,
            // No hemisphere letter: east convention, no reflection needed.
            None => (lon_num, 'E'),
        };
        let lon_signed = match lon_dir {
            'E' => lon_num,
            'W' => -lon_num,
            other => return Err(GeodesyError::InvalidDirection(other.to_string())),
        };

        Ok(Self::new(lat_signed, lon_signed))
    }

    /// Latitude in signed degrees (north positive).
    pub fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in signed degrees (east positive).
    pub fn longitude(&self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.lat < 0.0 { 'S' } else { 'N' };
        let ew = if self.lon < 0.0 { 'W' } else { 'E' };
        write!(f, "{:.1}{}, {:.1}{}", self.lat.abs(), ns, self.lon.abs(), ew)
    }
}

/// Split a coordinate field into its numeric part and hemisphere letter.
fn split_hemisphere(field: &str) -> GeodesyResult<(f64, Option<char>)> {
    let field = field.trim();
    let (num_part, dir) = match field.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (&field[..field.len() - 1], Some(c)),
        _ => (field, None),
    };
    let num = num_part
        .parse::<f64>()
        .map_err(|_| GeodesyError::InvalidCoordinate(field.to_string()))?;
    Ok((num, dir))
}

/// Return the opposite compass direction for N, E, S, or W.
pub fn flip_direction(direction: char) -> GeodesyResult<char> {
    match direction {
        'E' => Ok('W'),
        'W' => Ok('E'),
        'N' => Ok('S'),
        'S' => Ok('N'),
        other => Err(GeodesyError::InvalidDirection(other.to_string())),
    }
}

/// Reflect a longitude above 180° back into range, flipping its hemisphere.
///
/// Values at or below 180° pass through untouched together with their
/// hemisphere letter.
pub fn normalize_longitude(value: f64, hemisphere: char) -> GeodesyResult<(f64, char)> {
    if value > 180.0 {
        Ok((360.0 - value, flip_direction(hemisphere)?))
    } else {
        Ok((value, hemisphere))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_direction_is_involution() {
        for dir in ['N', 'E', 'S', 'W'] {
            assert_eq!(flip_direction(flip_direction(dir).unwrap()).unwrap(), dir);
        }
    }

    #[test]
    fn test_flip_direction_rejects_other_letters() {
        assert!(matches!(
            flip_direction('Q'),
            Err(GeodesyError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_normalize_longitude_in_range_passthrough() {
        assert_eq!(normalize_longitude(94.8, 'W').unwrap(), (94.8, 'W'));
        assert_eq!(normalize_longitude(180.0, 'E').unwrap(), (180.0, 'E'));
    }

    #[test]
    fn test_normalize_longitude_reflects_and_flips() {
        let (num, dir) = normalize_longitude(358.0, 'W').unwrap();
        assert!((num - 2.0).abs() < 1e-9);
        assert_eq!(dir, 'E');
    }

    #[test]
    fn test_parse_equivalent_longitude_encodings() {
        let a = Position::parse("45.1N", "2.0E").unwrap();
        let b = Position::parse("45.1N", "358.0W").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_southern_western_hemispheres() {
        let p = Position::parse("22.2S", "97.6W").unwrap();
        assert!((p.latitude() + 22.2).abs() < 1e-9);
        assert!((p.longitude() + 97.6).abs() < 1e-9);
    }

    #[test]
    fn test_parse_without_hemisphere_letters() {
        let p = Position::parse("15.1", "68.0").unwrap();
        assert!((p.latitude() - 15.1).abs() < 1e-9);
        assert!((p.longitude() - 68.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Position::parse("4x.1N", "68.0W").is_err());
        assert!(Position::parse("28.0N", "abcW").is_err());
    }
}
