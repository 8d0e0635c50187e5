use serde::Serialize;

use crate::geometry::{Bounds, simplify_ring};

/// One closed boundary, as an ordered list of corner points.
///
/// The ring is implicitly closed; the first point is not repeated at the end
/// and no two consecutive points are equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outline {
    pub points: Vec<(f64, f64)>,
}

impl Outline {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enclosed area (shoelace formula, winding ignored)
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let mut twice_area = 0.0;
        for i in 0..n {
            let (x1, y1) = self.points[i];
            let (x2, y2) = self.points[(i + 1) % n];
            twice_area += x1 * y2 - x2 * y1;
        }

        twice_area.abs() / 2.0
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Drop corners that lie within `epsilon` of a straight run
    pub fn simplify(&self, epsilon: f64) -> Self {
        Self::new(simplify_ring(&self.points, epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_corners() -> Outline {
        Outline::new(vec![
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (0.0, 2.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ])
    }

    #[test]
    fn test_area() {
        assert_eq!(unit_corners().area(), 4.0);

        let mut reversed = unit_corners();
        reversed.points.reverse();
        assert_eq!(reversed.area(), 4.0);
    }

    #[test]
    fn test_area_degenerate() {
        assert_eq!(Outline::default().area(), 0.0);
        assert_eq!(Outline::new(vec![(0.0, 0.0), (1.0, 0.0)]).area(), 0.0);
    }

    #[test]
    fn test_simplify_keeps_area() {
        let outline = unit_corners();
        let simplified = outline.simplify(0.01);

        assert!(simplified.len() < outline.len());
        assert_eq!(simplified.area(), outline.area());
    }

    #[test]
    fn test_bounds() {
        let bounds = unit_corners().bounds().unwrap();
        assert_eq!(bounds.width(), 2.0);
        assert_eq!(bounds.height(), 2.0);
        assert!(Outline::default().bounds().is_none());
    }
}
