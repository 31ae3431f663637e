use super::point::Point;

/// Mean Earth radius in kilometers
///
/// Also the divisor for converting a kilometer radius to the angular
/// threshold used by the clustering metric on the unit sphere.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

/// Calculates the haversine central angle between two points, in radians
///
/// This is the great-circle distance on the unit sphere; coordinates are
/// converted from degrees to radians before the distance computation.
pub fn haversine_radians(a: &Point, b: &Point) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Calculates great-circle distance between two points
///
/// # Returns
///
/// Distance in kilometers
pub fn great_circle_km(a: &Point, b: &Point) -> f64 {
    MEAN_EARTH_RADIUS_KM * haversine_radians(a, b)
}

/// Calculates great-circle distance between two points, in meters
pub fn great_circle_m(a: &Point, b: &Point) -> f64 {
    great_circle_km(a, b) * 1000.0
}
