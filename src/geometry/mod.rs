pub mod bounds;
pub mod hull;
pub mod point_in_polygon;
pub mod simplify;

pub use bounds::Bounds;
pub use hull::{convex_hull, convex_hulls};
pub use point_in_polygon::contains;
pub use simplify::simplify_ring;
