pub mod outline;
pub mod polygon;

pub use outline::Outline;
pub use polygon::Polygon;
