use crate::Cell;

/// The four orthogonal directions, in the order neighbors are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Row and column deltas. North is towards row 0.
    pub fn offset(self) -> (i16, i16) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The cell one step away in this direction, clipped to a `rows` x `cols` grid.
    pub fn step(self, (row, col): Cell, rows: u8, cols: u8) -> Option<Cell> {
        let (dr, dc) = self.offset();
        let r = row as i16 + dr;
        let c = col as i16 + dc;
        if r < 0 || c < 0 || r >= rows as i16 || c >= cols as i16 {
            None
        } else {
            Some((r as u8, c as u8))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_inside_grid() {
        assert_eq!(Direction::North.step((2, 2), 5, 5), Some((1, 2)));
        assert_eq!(Direction::East.step((2, 2), 5, 5), Some((2, 3)));
        assert_eq!(Direction::South.step((2, 2), 5, 5), Some((3, 2)));
        assert_eq!(Direction::West.step((2, 2), 5, 5), Some((2, 1)));
    }

    #[test]
    fn clips_at_edges() {
        assert_eq!(Direction::North.step((0, 3), 5, 5), None);
        assert_eq!(Direction::West.step((3, 0), 5, 5), None);
        assert_eq!(Direction::South.step((4, 0), 5, 5), None);
        assert_eq!(Direction::East.step((0, 4), 5, 5), None);
    }

    #[test]
    fn handles_largest_grid() {
        assert_eq!(Direction::East.step((0, 254), 255, 255), None);
        assert_eq!(Direction::South.step((253, 0), 255, 255), Some((254, 0)));
    }

    #[test]
    fn offsets_cancel_pairwise() {
        let sum = Direction::ALL
            .iter()
            .map(|d| d.offset())
            .fold((0, 0), |acc, (r, c)| (acc.0 + r, acc.1 + c));
        assert_eq!(sum, (0, 0));
    }
}
