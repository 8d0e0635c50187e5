//! hulltrace - Trace a single closed outline around the union of convex 2D silhouettes

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod io;
pub mod outline;
pub mod raster;
pub mod trace;

pub use domain::{Outline, Polygon};
pub use error::OutlineError;
pub use outline::{OutlineContext, OutlineParams, compute_outline};
pub use raster::{OccupancyGrid, rasterize};
pub use trace::{TraceMode, trace, trace_all};
