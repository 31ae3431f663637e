use super::distance::haversine_radians;
use super::point::{Cluster, Point, PointList};
use bitvec::prelude::*;

// DBSCAN algorithm pseudocode (from <http://en.wikipedia.org/wiki/DBSCAN>):
//
// DBSCAN(D, eps, MinPts)
//    C = 0
//    for each unvisited point P in dataset D
//       mark P as visited
//       NeighborPts = regionQuery(P, eps)
//       if sizeof(NeighborPts) < MinPts
//          mark P as NOISE
//       else
//          C = next cluster
//          expandCluster(P, NeighborPts, C, eps, MinPts)
//
// Here MinPts is fixed at 1. A point's neighborhood always contains at
// least itself, so no point is ever noise and every point is a core point:
// the algorithm degenerates to connected components under the relation
// "haversine central angle <= eps".

/// Clusters points by density-reachability with minimum cluster size 1
///
/// # Arguments
///
/// * `points` - List of points to cluster
/// * `eps` - Neighborhood radius as a haversine central angle in radians
///
/// # Returns
///
/// The discovered clusters, ids `0..n` in discovery order. Together they
/// partition the input; a point with no neighbors forms a singleton cluster.
pub fn db_scan(points: &PointList, eps: f64) -> Vec<Cluster> {
    let mut visited = vec![false; points.len()];
    let mut members = vec![false; points.len()];
    let mut clusters: Vec<Cluster> = Vec::new();

    let mut neighbor_unique = bitvec![0; points.len()];

    for i in 0..points.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;

        let mut cluster = Cluster {
            id: clusters.len(),
            points: vec![i],
        };
        members[i] = true;

        // expandCluster goes here inline
        let mut neighbor_pts = region_query(points, &points[i], eps);
        neighbor_unique.fill(false);
        for &j in &neighbor_pts {
            neighbor_unique.set(j, true);
        }

        let mut j = 0;
        // Use while loop to handle dynamic growth of neighbor_pts during iteration
        while j < neighbor_pts.len() {
            let k = neighbor_pts[j];
            if !visited[k] {
                visited[k] = true;
                // With MinPts = 1 every point is a core point, so its
                // neighborhood is always merged into the frontier
                for p in region_query(points, &points[k], eps) {
                    if !neighbor_unique[p] {
                        neighbor_pts.push(p);
                        neighbor_unique.set(p, true);
                    }
                }
            }

            if !members[k] {
                cluster.points.push(k);
                members[k] = true;
            }
            j += 1;
        }
        clusters.push(cluster);
    }

    clusters
}

/// Simple O(N) way to find points in neighbourhood
///
/// Returns indices of all points whose haversine central angle from `p` is
/// at most `eps` (inclusive, so the query point itself is always included).
pub fn region_query(points: &PointList, p: &Point, eps: f64) -> Vec<usize> {
    let mut result = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if haversine_radians(point, p) <= eps {
            result.push(i);
        }
    }

    result
}
