use crate::domain::Outline;
use crate::error::Result;
use crate::raster::OccupancyGrid;

use super::tracer::trace_from;

/// Which occupied regions of the grid get an outline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceMode {
    /// Only the region holding the first occupied cell in row-major order
    #[default]
    FirstRegion,
    /// Every 4-connected region, in row-major order of their first cells
    AllRegions,
}

/// Trace every 4-connected occupied region, allocating a scratch mask
pub fn trace_all(grid: &OccupancyGrid) -> Result<Vec<Outline>> {
    let mut visited = Vec::new();
    trace_all_into(grid, &mut visited)
}

/// Trace every 4-connected occupied region.
///
/// `visited` is scratch storage; it is cleared and resized here. The first
/// outline is always the one [`trace`](super::trace) returns.
pub fn trace_all_into(grid: &OccupancyGrid, visited: &mut Vec<bool>) -> Result<Vec<Outline>> {
    visited.clear();
    visited.resize(grid.width() * grid.height(), false);

    let mut outlines = Vec::new();

    while let Some(seed) = grid.first_occupied_where(|i| visited[i]) {
        outlines.push(trace_from(grid, seed)?);
        mark_region(grid, seed, visited);
    }

    Ok(outlines)
}

/// Flood-fill the 4-connected region around `seed` into `visited`
fn mark_region(grid: &OccupancyGrid, seed: (usize, usize), visited: &mut [bool]) {
    let mut stack = vec![seed];
    visited[grid.index(seed.0, seed.1)] = true;

    while let Some((x, y)) = stack.pop() {
        let neighbours = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];

        for (nx, ny) in neighbours {
            if !grid.get(nx, ny) {
                continue;
            }
            let i = grid.index(nx, ny);
            if !visited[i] {
                visited[i] = true;
                stack.push((nx, ny));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::trace;

    fn grid(rows: &[&str]) -> OccupancyGrid {
        OccupancyGrid::from_rows(rows, (0.0, 0.0), 1.0)
    }

    #[test]
    fn test_one_outline_per_region() {
        let g = grid(&["##......", "........", "........", "......##"]);
        let outlines = trace_all(&g).unwrap();

        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[0], trace(&g).unwrap());
        assert_eq!(outlines[1].area(), 2.0);
        assert!(outlines[1].points.iter().all(|&(x, y)| x >= 6.0 && y >= 3.0));
    }

    #[test]
    fn test_connected_region_is_traced_once() {
        let g = grid(&["#.#", "#.#", "###"]);
        assert_eq!(trace_all(&g).unwrap().len(), 1);
    }

    #[test]
    fn test_island_inside_hole() {
        let g = grid(&["#####", "#...#", "#.#.#", "#...#", "#####"]);
        let outlines = trace_all(&g).unwrap();

        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[0].area(), 25.0);
        assert_eq!(outlines[1].area(), 1.0);
    }

    #[test]
    fn test_empty_grid() {
        assert!(trace_all(&grid(&["...."])).unwrap().is_empty());
    }

    #[test]
    fn test_scratch_mask_is_reset() {
        let mut visited = vec![true; 64];
        let g = grid(&["#.#"]);
        assert_eq!(trace_all_into(&g, &mut visited).unwrap().len(), 2);
        assert_eq!(visited.len(), 3);
    }
}
