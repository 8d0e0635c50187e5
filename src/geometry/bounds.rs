use crate::domain::Polygon;

/// Axis-aligned bounding box in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[(f64, f64)]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;

        let mut bounds = Self {
            min_x: first.0,
            max_x: first.0,
            min_y: first.1,
            max_y: first.1,
        };
        bounds.expand(rest);

        Some(bounds)
    }

    /// Bounds over every vertex of every polygon.
    ///
    /// Returns `None` when no vertex was seen at all.
    pub fn from_polygons<'a, I>(polygons: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Polygon>,
    {
        let mut bounds: Option<Self> = None;

        for polygon in polygons {
            match bounds.as_mut() {
                Some(b) => b.expand(&polygon.points),
                None => bounds = Self::from_points(&polygon.points),
            }
        }

        bounds
    }

    /// Expand bounds to include another set of points
    pub fn expand(&mut self, points: &[(f64, f64)]) {
        for &(x, y) in points {
            self.min_x = self.min_x.min(x);
            self.max_x = self.max_x.max(x);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
    }

    /// Grow by `margin` on every side, then snap outward to whole units
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min_x: (self.min_x - margin).floor(),
            max_x: (self.max_x + margin).ceil(),
            min_y: (self.min_y - margin).floor(),
            max_y: (self.max_y + margin).ceil(),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
