use serde::{Deserialize, Serialize};

/// The orientation of a slot within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A maximal run of open cells forming one word position.
///
/// Slots are plain values: two slots with the same coordinates, direction
/// and length are the same slot. They are immutable once the puzzle has
/// been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// The grid coordinates of the `k`-th cell of this slot.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} of length {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_the_slot_direction() {
        let across = Slot {
            row: 2,
            col: 1,
            direction: Direction::Across,
            length: 3,
        };
        assert_eq!(across.cell(0), (2, 1));
        assert_eq!(across.cell(2), (2, 3));

        let down = Slot {
            row: 0,
            col: 4,
            direction: Direction::Down,
            length: 2,
        };
        assert_eq!(down.cell(1), (1, 4));
    }

    #[test]
    fn slots_compare_by_value() {
        let a = Slot {
            row: 0,
            col: 0,
            direction: Direction::Across,
            length: 3,
        };
        let b = a;
        assert_eq!(a, b);
    }
}
