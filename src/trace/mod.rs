pub mod direction;
pub mod regions;
pub mod tracer;

pub use direction::Direction;
pub use regions::{TraceMode, trace_all, trace_all_into};
pub use tracer::trace;
