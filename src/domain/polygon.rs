use serde::{Deserialize, Serialize};

/// A convex silhouette in screen space.
///
/// The ring is implicitly closed: the last point connects back to the first.
/// Winding is irrelevant to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub points: Vec<(f64, f64)>,
}

impl Polygon {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Axis-aligned square with its top-left corner at `(x, y)`
    pub fn square(x: f64, y: f64, side: f64) -> Self {
        Self::new(vec![
            (x, y),
            (x + side, y),
            (x + side, y + side),
            (x, y + side),
        ])
    }

    /// At least three vertices, all finite
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
            && self
                .points
                .iter()
                .all(|&(x, y)| x.is_finite() && y.is_finite())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<(f64, f64)>> for Polygon {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_validity() {
        assert!(Polygon::square(0.0, 0.0, 4.0).is_valid());
        assert!(!Polygon::new(vec![(0.0, 0.0), (1.0, 1.0)]).is_valid());
        assert!(!Polygon::new(vec![(0.0, 0.0), (1.0, f64::NAN), (2.0, 0.0)]).is_valid());
    }

    #[test]
    fn test_polygon_deserializes_from_point_list() {
        let polygon: Polygon = serde_json::from_str("[[0,0],[2,0],[1,2]]").unwrap();
        assert_eq!(polygon.len(), 3);
        assert_eq!(polygon.points[2], (1.0, 2.0));
    }
}
