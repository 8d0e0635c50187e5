//! Square tracing of the occupied region of an [`OccupancyGrid`].
//!
//! The walker carries a cell and a heading. Whenever the cell ahead is
//! occupied it prefers the sharper left turn onto the diagonal cell, which
//! keeps the unoccupied side on its left and hugs the outer boundary.
//! Otherwise it turns right in place. Each state reports one corner of its
//! cell, so consecutive points are always one lattice edge apart.

use crate::domain::Outline;
use crate::error::{OutlineError, Result};
use crate::raster::OccupancyGrid;

use super::Direction;

/// Trace the outer boundary of the region holding the first occupied cell in
/// row-major order.
///
/// Other, disconnected regions are ignored. An empty grid yields an empty
/// outline.
pub fn trace(grid: &OccupancyGrid) -> Result<Outline> {
    match grid.first_occupied_where(|_| false) {
        Some(seed) => trace_from(grid, seed),
        None => Ok(Outline::default()),
    }
}

/// Trace starting from `seed`, which must be the first occupied cell of its
/// region in row-major order (its upper and left neighbours are empty).
pub(crate) fn trace_from(grid: &OccupancyGrid, seed: (usize, usize)) -> Result<Outline> {
    let start = (seed.0 as isize, seed.1 as isize);
    let start_dir = initial_direction(grid, start);

    let mut pos = start;
    let mut dir = start_dir;
    let mut points: Vec<(f64, f64)> = Vec::new();

    let limit = 4 * grid.width() * grid.height() + 4;
    let mut steps = 0;

    loop {
        let ahead = dir.step_from(pos);

        if grid.is_occupied(ahead.0, ahead.1) {
            let turned = dir.counter_clockwise();
            let diagonal = turned.step_from(ahead);

            if grid.is_occupied(diagonal.0, diagonal.1) {
                pos = diagonal;
                dir = turned;
            } else {
                pos = ahead;
            }
        } else {
            dir = dir.clockwise();
        }

        let point = corner_point(grid, pos, dir);
        if points.last() != Some(&point) {
            points.push(point);
        }

        steps += 1;
        if pos == start && dir == start_dir {
            break;
        }
        if steps >= limit {
            return Err(OutlineError::UnclosedTrace { steps });
        }
    }

    Ok(Outline::new(points))
}

/// First heading, clockwise from up, with an occupied neighbour.
///
/// An isolated cell has none and keeps `Up`; the walk then just turns in
/// place around its four corners.
fn initial_direction(grid: &OccupancyGrid, pos: (isize, isize)) -> Direction {
    Direction::ALL
        .into_iter()
        .find(|dir| {
            let (x, y) = dir.step_from(pos);
            grid.is_occupied(x, y)
        })
        .unwrap_or(Direction::Up)
}

fn corner_point(grid: &OccupancyGrid, pos: (isize, isize), dir: Direction) -> (f64, f64) {
    let (cx, cy) = dir.corner();
    grid.vertex(pos.0 as usize + cx, pos.1 as usize + cy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: &[&str]) -> OccupancyGrid {
        OccupancyGrid::from_rows(rows, (0.0, 0.0), 1.0)
    }

    /// Consecutive points, closing pair included, are one axis-aligned step apart
    fn assert_unit_steps(outline: &Outline, step: f64) {
        let n = outline.len();
        for i in 0..n {
            let (x1, y1) = outline.points[i];
            let (x2, y2) = outline.points[(i + 1) % n];
            let d = (x2 - x1).abs() + (y2 - y1).abs();
            assert!(
                (d - step).abs() < 1e-9 && (x1 == x2 || y1 == y2),
                "segment {} from {:?} to {:?}",
                i,
                (x1, y1),
                (x2, y2)
            );
        }
    }

    #[test]
    fn test_empty_grid() {
        assert!(trace(&grid(&["...", "..."])).unwrap().is_empty());
        assert!(trace(&OccupancyGrid::default()).unwrap().is_empty());
    }

    #[test]
    fn test_single_cell() {
        let outline = trace(&grid(&["...", ".#.", "..."])).unwrap();
        assert_eq!(
            outline.points,
            vec![(2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)]
        );
        assert_eq!(outline.area(), 1.0);
    }

    #[test]
    fn test_horizontal_pair() {
        let outline = trace(&grid(&["##"])).unwrap();
        assert_eq!(
            outline.points,
            vec![
                (2.0, 0.0),
                (2.0, 1.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (0.0, 0.0),
                (1.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_start_corner_closes_the_ring() {
        // Seed (1, 1) starts heading right, whose corner is its top-right
        let outline = trace(&grid(&["....", ".##.", ".##.", "...."])).unwrap();
        assert_eq!(outline.points.last(), Some(&(2.0, 1.0)));
        assert_eq!(outline.points.first(), Some(&(3.0, 1.0)));
        assert_eq!(outline.len(), 8);
        assert_eq!(outline.area(), 4.0);
        assert_unit_steps(&outline, 1.0);
    }

    #[test]
    fn test_concave_corner_takes_diagonal() {
        let outline = trace(&grid(&["#.", "##"])).unwrap();
        assert_eq!(
            outline.points,
            vec![
                (2.0, 1.0),
                (2.0, 2.0),
                (1.0, 2.0),
                (0.0, 2.0),
                (0.0, 1.0),
                (0.0, 0.0),
                (1.0, 0.0),
                (1.0, 1.0)
            ]
        );
        assert_eq!(outline.area(), 3.0);
    }

    #[test]
    fn test_notch_is_followed() {
        let rows = ["#####", "#...#", "#####"];
        let outline = trace(&grid(&rows)).unwrap();

        // Outer boundary only: the hole does not reduce the enclosed area
        assert_eq!(outline.area(), 15.0);
        assert_eq!(outline.len(), 16);
        assert_unit_steps(&outline, 1.0);
    }

    #[test]
    fn test_u_shape() {
        let rows = ["#.#", "#.#", "###"];
        let outline = trace(&grid(&rows)).unwrap();

        assert_eq!(outline.area(), 7.0);
        assert_unit_steps(&outline, 1.0);
    }

    #[test]
    fn test_corners_use_origin_and_step() {
        let grid = OccupancyGrid::from_rows(&["#"], (10.0, -4.0), 0.5);
        let outline = trace(&grid).unwrap();
        assert_eq!(
            outline.points,
            vec![(10.5, -4.0), (10.5, -3.5), (10.0, -3.5), (10.0, -4.0)]
        );
        assert_unit_steps(&outline, 0.5);
    }

    #[test]
    fn test_only_first_region_is_traced() {
        let rows = ["##......", "........", "........", "......##"];
        let g = grid(&rows);
        let outline = trace(&g).unwrap();

        let traced_cells = outline.area() as usize;
        assert_eq!(traced_cells, 2);
        assert!(traced_cells < g.occupied_count());
        assert!(outline.points.iter().all(|&(x, y)| x <= 2.0 && y <= 1.0));
    }

    #[test]
    fn test_trace_is_repeatable() {
        let g = grid(&[".##.", "####", ".#.."]);
        assert_eq!(trace(&g).unwrap(), trace(&g).unwrap());
    }

    #[test]
    fn test_diagonal_neighbours_are_separate_regions() {
        let outline = trace(&grid(&["#.", ".#"])).unwrap();
        assert_eq!(outline.len(), 4);
        assert_eq!(outline.area(), 1.0);
    }

    fn arbitrary_grid() -> impl Strategy<Value = OccupancyGrid> {
        (1usize..10, 1usize..10).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<bool>(), w * h).prop_map(move |cells| {
                let mut grid = OccupancyGrid::new(w, h, (0.0, 0.0), 1.0);
                for (i, occupied) in cells.into_iter().enumerate() {
                    grid.set(i % w, i / w, occupied);
                }
                grid
            })
        })
    }

    proptest! {
        #[test]
        fn random_grids_always_close(grid in arbitrary_grid()) {
            let outline = trace(&grid).unwrap();

            if grid.occupied_count() == 0 {
                prop_assert!(outline.is_empty());
            } else {
                prop_assert!(outline.len() >= 4);

                let n = outline.len();
                for i in 0..n {
                    let (x1, y1) = outline.points[i];
                    let (x2, y2) = outline.points[(i + 1) % n];
                    prop_assert_ne!((x1, y1), (x2, y2));
                    prop_assert!(x1 == x2 || y1 == y2);
                    prop_assert_eq!((x2 - x1).abs() + (y2 - y1).abs(), 1.0);
                    prop_assert!(x1 >= 0.0 && x1 <= grid.width() as f64);
                    prop_assert!(y1 >= 0.0 && y1 <= grid.height() as f64);
                }
            }
        }
    }
}
