//! Geographic points and cluster membership.

/// A geographic coordinate in degrees (WGS84 assumed).
///
/// A point has no identity beyond its coordinates; duplicate coordinate
/// values are valid and independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Cluster represents one group produced by the clustering step
#[derive(Debug, Clone)]
pub struct Cluster {
    /// Cluster ID
    pub id: usize,
    /// Indices of points belonging to this cluster, in discovery order
    pub points: Vec<usize>,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Point { lat, lng }
    }

    /// Checks that both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl Cluster {
    /// Calculates the planar centroid of the cluster's members
    ///
    /// The mean is taken over (lat, lng) treated as planar coordinates,
    /// ignoring spherical distortion. The centroid only serves as a
    /// reference point for selecting a representative member, which is
    /// always a real input point.
    ///
    /// # Panics
    ///
    /// Panics if the cluster is empty
    pub fn centroid(&self, points: &PointList) -> Point {
        if self.points.is_empty() {
            panic!("empty cluster");
        }

        let mut center = Point::new(0.0, 0.0);
        for &i in &self.points {
            center.lat += points[i].lat;
            center.lng += points[i].lng;
        }

        let n = self.points.len() as f64;
        center.lat /= n;
        center.lng /= n;
        center
    }
}
