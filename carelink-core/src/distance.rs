//! Great-circle distance between two coordinates.
//!
//! Uses the haversine formula on a spherical earth of radius
//! [`EARTH_RADIUS_KM`]. Coordinates follow the crate convention
//! (`x = longitude`, `y = latitude`, degrees). Inputs are not validated;
//! callers pass finite latitudes in `[-90, 90]` and longitudes in
//! `[-180, 180]`.

use geo::Coord;

/// Mean earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between `from` and `to`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use carelink_core::distance_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let pole = Coord { x: 0.0, y: 90.0 };
/// let quarter = distance_km(origin, pole);
/// assert!((quarter - 10_007.5).abs() < 1.0);
/// assert_eq!(distance_km(origin, origin), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
#[must_use]
pub fn distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let half_dlat = (to.y - from.y).to_radians() / 2.0;
    let half_dlon = (to.x - from.x).to_radians() / 2.0;

    let h = half_dlat.sin().powi(2) + lat_from.cos() * lat_to.cos() * half_dlon.sin().powi(2);
    // Rounding can push `h` marginally above 1 for antipodal points.
    let central_angle = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * central_angle
}
