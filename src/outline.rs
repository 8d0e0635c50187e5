//! The full pipeline: rasterize convex silhouettes, then trace their outline.

use crate::domain::{Outline, Polygon};
use crate::error::Result;
use crate::raster::{DEFAULT_MAX_CELLS, OccupancyGrid, RasterSettings, rasterize_into};
use crate::trace::{TraceMode, trace, trace_all_into};

/// Knobs for one outline computation
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineParams {
    /// Grid cell size, defaults to 1
    pub step: Option<f64>,
    /// Margin around the silhouettes, defaults to two cells
    pub padding: Option<f64>,
    pub mode: TraceMode,
    pub max_cells: usize,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            step: None,
            padding: None,
            mode: TraceMode::FirstRegion,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl OutlineParams {
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_mode(mut self, mode: TraceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    fn raster_settings(&self) -> Result<RasterSettings> {
        RasterSettings::resolve(self.step, self.padding, self.max_cells)
    }
}

/// Reusable buffers for outline computations.
///
/// Each call resets everything it touches, so a reused context gives the same
/// results as a fresh one. Hold one context per thread.
#[derive(Debug, Default)]
pub struct OutlineContext {
    grid: OccupancyGrid,
    visited: Vec<bool>,
}

impl OutlineContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline of the first occupied region, ignoring `params.mode`
    pub fn outline(&mut self, polygons: &[Polygon], params: &OutlineParams) -> Result<Outline> {
        if !self.rasterize(polygons, params)? {
            return Ok(Outline::default());
        }
        trace(&self.grid)
    }

    /// Outlines according to `params.mode`.
    ///
    /// `FirstRegion` yields at most one outline; empty input yields none.
    pub fn outlines(
        &mut self,
        polygons: &[Polygon],
        params: &OutlineParams,
    ) -> Result<Vec<Outline>> {
        if !self.rasterize(polygons, params)? {
            return Ok(Vec::new());
        }

        match params.mode {
            TraceMode::FirstRegion => {
                let outline = trace(&self.grid)?;
                Ok(if outline.is_empty() {
                    Vec::new()
                } else {
                    vec![outline]
                })
            }
            TraceMode::AllRegions => trace_all_into(&self.grid, &mut self.visited),
        }
    }

    /// Grid produced by the most recent call
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    fn rasterize(&mut self, polygons: &[Polygon], params: &OutlineParams) -> Result<bool> {
        let settings = params.raster_settings()?;
        rasterize_into(&mut self.grid, polygons, &settings)
    }
}

/// Outline of the union of `polygons`, using a throwaway context
pub fn compute_outline(
    polygons: &[Polygon],
    step: Option<f64>,
    padding: Option<f64>,
) -> Result<Outline> {
    let params = OutlineParams {
        step,
        padding,
        ..Default::default()
    };
    OutlineContext::new().outline(polygons, &params)
}
