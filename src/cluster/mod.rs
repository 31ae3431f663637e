//! Package cluster reduces (lat, lng) point sets to one representative per cluster
pub mod dbscan;
pub mod distance;
pub mod point;
pub mod reduce;


pub use point::{Cluster, Point, PointList};
pub use reduce::{ReduceError, reduce};
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use dbscan::{db_scan, region_query};
#[allow(unused_imports)]
pub use distance::{MEAN_EARTH_RADIUS_KM, great_circle_km, great_circle_m, haversine_radians};
