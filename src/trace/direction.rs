/// Walking direction on the grid, numbered clockwise from "up".
///
/// Screen space: `y` grows downwards, so "up" is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up = 1,
    Right = 2,
    Down = 3,
    Left = 4,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step in cell coordinates
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    /// Which corner of a cell the walker reports while heading this way,
    /// as a lattice offset from the cell's top-left vertex.
    ///
    /// Up: top-left, Right: top-right, Down: bottom-right, Left: bottom-left.
    pub fn corner(self) -> (usize, usize) {
        match self {
            Direction::Up => (0, 0),
            Direction::Right => (1, 0),
            Direction::Down => (1, 1),
            Direction::Left => (0, 1),
        }
    }

    pub fn step_from(self, (x, y): (isize, isize)) -> (isize, isize) {
        let (dx, dy) = self.offset();
        (x + dx, y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        for dir in Direction::ALL {
            assert_eq!(dir.clockwise().counter_clockwise(), dir);
            assert_eq!(dir.clockwise().clockwise().clockwise().clockwise(), dir);
        }
        assert_eq!(Direction::Left.clockwise(), Direction::Up);
        assert_eq!(Direction::Up.counter_clockwise(), Direction::Left);
    }

    #[test]
    fn test_numbering() {
        let numbers: Vec<i32> = Direction::ALL.iter().map(|&d| d as i32).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_corners_follow_clockwise_order() {
        // Each clockwise turn moves the reported corner one edge around the cell
        for dir in Direction::ALL {
            let (x0, y0) = dir.corner();
            let (x1, y1) = dir.clockwise().corner();
            assert_eq!(x0.abs_diff(x1) + y0.abs_diff(y1), 1);
        }
    }
}
