use geo::{LineString, Simplify};

pub fn simplify_polyline(points: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let line: LineString<f64> = points
        .iter()
        .map(|&(x, y)| geo::coord! { x: x, y: y })
        .collect();

    let simplified = line.simplify(&epsilon);

    simplified.0.into_iter().map(|c| (c.x, c.y)).collect()
}

/// Simplify an implicitly closed ring.
///
/// The first point is always kept. A non-positive `epsilon` leaves the ring
/// untouched. Falls back to the input when the result would no longer be a
/// polygon.
pub fn simplify_ring(ring: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if ring.len() < 4 {
        return ring.to_vec();
    }

    let mut closed = ring.to_vec();
    closed.push(ring[0]);

    let mut simplified = simplify_polyline(&closed, epsilon);
    simplified.pop();

    if simplified.len() < 3 {
        return ring.to_vec();
    }

    simplified
}
