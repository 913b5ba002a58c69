//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Proximity
//! ranking has to separate people standing metres apart, and at longitude
//! ±175° an `f32` degree value only resolves to ~1 m — too coarse once the
//! haversine rounding stacks on top.  `f64` keeps the ranking stable down to
//! millimetres.
//!
//! Neither type validates its domain.  Callers that accept external input
//! are expected to range-check before constructing queries; out-of-range
//! values produce a mathematically defined but meaningless result rather
//! than an error.

/// Mean Earth radius in kilometres (spherical model).
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Kilometres per degree of latitude (and of longitude at the equator).
const KM_PER_DEGREE: f64 = 111.0;

/// `cos(lat)` below this is treated as zero when sizing a bounding box —
/// the box is within a whisker of a pole and must span all longitudes.
const POLE_COS_EPSILON: f64 = 1e-9;

/// A WGS-84 geographic coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric, and exactly 0 for identical coordinates.  Accuracy is
    /// bounded by the spherical-Earth model (~0.5 % vs. the WGS-84
    /// ellipsoid), which is ample for radius filtering and rank ordering.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// An axis-aligned lat/lon rectangle used to cheaply pre-filter candidates
/// before exact distance computation.
///
/// Ephemeral: derived from a center point and radius on every query, never
/// persisted.  The box is a *superset* of the true circle — its corner
/// regions lie outside the radius and must be excluded by an exact
/// [`GeoPoint::distance_km`] check afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Compute the bounding box around `center` that encloses the circle of
    /// `radius_km`.
    ///
    /// Uses the constant-distance-per-degree approximation: one degree of
    /// latitude ≈ 111 km everywhere, one degree of longitude ≈
    /// `111 · cos(lat)` km.  Near the poles `cos(lat)` vanishes and the
    /// longitude half-width diverges; once it reaches a hemisphere (or the
    /// cosine underflows entirely) the box clamps to the full ±180° range
    /// instead of emitting NaN/∞ bounds.
    ///
    /// A zero radius yields a zero-width, zero-height box equal to `center`,
    /// including at the poles — the zero half-width never needs clamping.
    pub fn around(center: GeoPoint, radius_km: f64) -> Self {
        let lat_delta = radius_km / KM_PER_DEGREE;

        let cos_lat = center.lat.to_radians().cos();
        let lon_delta = if radius_km == 0.0 {
            0.0
        } else if cos_lat.abs() < POLE_COS_EPSILON {
            f64::INFINITY
        } else {
            radius_km / (KM_PER_DEGREE * cos_lat)
        };

        // `!(x < 180.0)` also catches NaN from hostile inputs.
        let (min_lon, max_lon) = if !(lon_delta.abs() < 180.0) {
            (-180.0, 180.0)
        } else {
            (center.lon - lon_delta, center.lon + lon_delta)
        };

        Self {
            min_lat: center.lat - lat_delta,
            max_lat: center.lat + lat_delta,
            min_lon,
            max_lon,
        }
    }

    /// Inclusive rectangle test.  Much cheaper than `distance_km` for quick
    /// rejection before the exact radius filter.
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}
