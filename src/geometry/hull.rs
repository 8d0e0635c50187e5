use geo::{Area, ConvexHull, MultiPoint};

use crate::domain::Polygon;

/// Convex hull of a projected point set.
///
/// Non-finite points are dropped. Returns `None` when fewer than three points
/// remain or the hull has no area (all points collinear), which callers treat
/// as "nothing on screen" for that object.
pub fn convex_hull(points: &[(f64, f64)]) -> Option<Polygon> {
    let finite: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|&(x, y)| x.is_finite() && y.is_finite())
        .collect();

    if finite.len() < 3 {
        return None;
    }

    let hull = MultiPoint::from(finite).convex_hull();
    if hull.unsigned_area() <= 0.0 {
        return None;
    }

    let mut ring: Vec<(f64, f64)> = hull.exterior().coords().map(|c| (c.x, c.y)).collect();

    // geo closes its rings explicitly
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    if ring.len() < 3 {
        return None;
    }

    Some(Polygon::new(ring))
}

/// Hull every point set, skipping the ones without a valid hull
pub fn convex_hulls(point_sets: &[Vec<(f64, f64)>]) -> Vec<Polygon> {
    point_sets
        .iter()
        .filter_map(|points| convex_hull(points))
        .collect()
}
