use super::dbscan::db_scan;
use super::distance::{MEAN_EARTH_RADIUS_KM, great_circle_m};
use super::point::{Cluster, Point, PointList};
use std::fmt;

/// Errors reported by [`reduce`]
#[derive(Debug, Clone, PartialEq)]
pub enum ReduceError {
    /// The point list is empty or contains a malformed entry
    InvalidInput(String),
    /// The clustering radius is not a positive number
    InvalidParameter(String),
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ReduceError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for ReduceError {}

/// Reduces a point set to one representative point per cluster
///
/// Points within `radius_km` (great-circle) of each other are grouped by
/// density-reachability, and each group is replaced with the member point
/// closest to the group's centroid. Every input point lands in exactly one
/// cluster; a point with no neighbors represents itself.
///
/// # Arguments
///
/// * `points` - Non-empty list of points, degrees
/// * `radius_km` - Maximum great-circle distance in kilometers for two
///   points to be grouped together
///
/// # Returns
///
/// One representative per cluster, in cluster-id order. Representatives are
/// exact input coordinates, never synthesized ones, so the output is always
/// a subset of the input (up to reordering).
///
/// # Errors
///
/// * [`ReduceError::InvalidInput`] - `points` is empty or contains a
///   non-finite coordinate
/// * [`ReduceError::InvalidParameter`] - `radius_km` is not a positive number
pub fn reduce(points: &PointList, radius_km: f64) -> Result<PointList, ReduceError> {
    if points.is_empty() {
        return Err(ReduceError::InvalidInput("empty point list".to_string()));
    }
    for (i, point) in points.iter().enumerate() {
        if !point.is_finite() {
            return Err(ReduceError::InvalidInput(format!(
                "point {} has a non-finite coordinate: ({}, {})",
                i, point.lat, point.lng
            )));
        }
    }
    if !(radius_km > 0.0) {
        return Err(ReduceError::InvalidParameter(format!(
            "radius must be a positive number of kilometers, got {}",
            radius_km
        )));
    }

    // The clustering metric works on the unit sphere, so the kilometer
    // radius becomes a central angle in radians
    let eps = radius_km / MEAN_EARTH_RADIUS_KM;

    let clusters = db_scan(points, eps);

    Ok(clusters
        .iter()
        .map(|cluster| representative(cluster, points))
        .collect())
}

/// Selects the cluster member closest to the cluster's centroid
///
/// Distance to the centroid is great-circle, in meters. Ties are broken by
/// first occurrence in the cluster's iteration order. The returned value is
/// the member's coordinates verbatim, not the centroid.
fn representative(cluster: &Cluster, points: &PointList) -> Point {
    let centroid = cluster.centroid(points);

    let mut best = points[cluster.points[0]];
    let mut best_dist = great_circle_m(&best, &centroid);

    for &i in &cluster.points[1..] {
        let dist = great_circle_m(&points[i], &centroid);
        if dist < best_dist {
            best = points[i];
            best_dist = dist;
        }
    }

    best
}
