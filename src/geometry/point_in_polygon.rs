/// Ray-casting membership test.
///
/// Casts a horizontal ray from `point` towards +x and counts edge crossings;
/// an odd count means inside. An edge is crossed only when exactly one of its
/// endpoints lies strictly above `point.y`, so a shared vertex is never
/// counted twice and horizontal edges are skipped. For an axis-aligned
/// rectangle this makes the left and bottom (min-y) edges inclusive and the
/// right and top (max-y) edges exclusive.
pub fn contains(point: (f64, f64), polygon: &[(f64, f64)]) -> bool {
    let (px, py) = point;
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];

        if (yi > py) != (yj > py) {
            let x_cross = (xj - xi) * (py - yi) / (yj - yi) + xi;
            if px < x_cross {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}
