pub mod grid;
pub mod rasterizer;

pub use grid::OccupancyGrid;
pub use rasterizer::{
    DEFAULT_MAX_CELLS, DEFAULT_STEP, RasterSettings, rasterize, rasterize_into,
};
