use crate::domain::Polygon;
use crate::error::{OutlineError, Result};
use crate::geometry::{Bounds, contains};

use super::OccupancyGrid;

/// Cell size used when the caller does not pick one
pub const DEFAULT_STEP: f64 = 1.0;

/// Upper bound on `width * height` for a single rasterization pass
pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

/// Validated rasterization parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterSettings {
    pub step: f64,
    pub padding: f64,
    pub max_cells: usize,
}

impl RasterSettings {
    /// Fill in defaults and validate.
    ///
    /// `padding` defaults to two cells.
    pub fn resolve(step: Option<f64>, padding: Option<f64>, max_cells: usize) -> Result<Self> {
        let step = step.unwrap_or(DEFAULT_STEP);
        if !step.is_finite() || step <= 0.0 {
            return Err(OutlineError::InvalidStep(step));
        }

        let padding = padding.unwrap_or(step * 2.0);
        if !padding.is_finite() || padding < 0.0 {
            return Err(OutlineError::InvalidPadding(padding));
        }

        Ok(Self {
            step,
            padding,
            max_cells,
        })
    }
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            padding: DEFAULT_STEP * 2.0,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

/// Rasterize polygons into a freshly allocated grid.
///
/// Returns `Ok(None)` when there is nothing to trace: no polygons, or none
/// with at least three finite vertices.
pub fn rasterize(
    polygons: &[Polygon],
    step: Option<f64>,
    padding: Option<f64>,
) -> Result<Option<OccupancyGrid>> {
    let settings = RasterSettings::resolve(step, padding, DEFAULT_MAX_CELLS)?;
    let mut grid = OccupancyGrid::default();

    if rasterize_into(&mut grid, polygons, &settings)? {
        Ok(Some(grid))
    } else {
        Ok(None)
    }
}

/// Rasterize polygons into `grid`, reusing its storage.
///
/// The grid is fully reset first, so nothing from a previous pass survives.
/// Returns `false` (and leaves a 0x0 grid) when there is nothing to trace.
pub fn rasterize_into(
    grid: &mut OccupancyGrid,
    polygons: &[Polygon],
    settings: &RasterSettings,
) -> Result<bool> {
    let step = settings.step;
    let valid = || polygons.iter().filter(|p| p.is_valid());

    let Some(bounds) = Bounds::from_polygons(valid()) else {
        grid.clear();
        return Ok(false);
    };
    let bounds = bounds.padded(settings.padding);

    let width = cells_along(bounds.width(), step);
    let height = cells_along(bounds.height(), step);
    match width.checked_mul(height) {
        Some(n) if n <= settings.max_cells => {}
        _ => {
            grid.clear();
            return Err(OutlineError::GridTooLarge {
                width,
                height,
                limit: settings.max_cells,
            });
        }
    }

    grid.reset(width, height, (bounds.min_x, bounds.min_y), step);

    for polygon in valid() {
        rasterize_polygon(grid, polygon, &bounds);
    }

    Ok(true)
}

fn cells_along(extent: f64, step: f64) -> usize {
    ((extent / step).floor() as usize).saturating_add(1).max(1)
}

/// Mark every cell whose centre lies inside `polygon`.
///
/// Only the polygon's own footprint is sampled, widened by one cell on each
/// side so grazing edges are not lost to centre sampling. Ranges are computed
/// 1-based and clamped to `[1, width]` / `[1, height]`.
fn rasterize_polygon(grid: &mut OccupancyGrid, polygon: &Polygon, bounds: &Bounds) {
    let Some(local) = Bounds::from_points(&polygon.points) else {
        return;
    };
    let step = grid.step();

    let x_range = index_range(local.min_x, local.max_x, bounds.min_x, step, grid.width());
    let y_range = index_range(local.min_y, local.max_y, bounds.min_y, step, grid.height());

    for y in y_range {
        for x in x_range.clone() {
            if grid.get(x, y) {
                continue;
            }
            if contains(grid.cell_center(x, y), &polygon.points) {
                grid.set(x, y, true);
            }
        }
    }
}

/// 0-based cell range covering `[lo, hi]`, with one cell of slack each way
fn index_range(lo: f64, hi: f64, origin: f64, step: f64, len: usize) -> std::ops::Range<usize> {
    let len = len as i64;
    let first = (((lo - origin) / step).floor() as i64 - 1).max(1);
    let last = (((hi - origin) / step).floor() as i64 + 1).min(len);

    if first > last {
        return 0..0;
    }

    (first - 1) as usize..last as usize
}
