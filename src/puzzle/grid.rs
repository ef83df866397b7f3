use crate::error::{Error, Result};

/// The black/white cell structure of a crossword grid.
///
/// Parsed once from a structure description and never mutated. `_` and `.`
/// mark open (fillable) cells; any other character is a blocked cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    open: Vec<bool>,
}

impl Grid {
    /// Parses a structure description, one row of cells per line.
    ///
    /// Rows shorter than the widest row are padded with blocked cells, so
    /// ragged input is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();

        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::InvalidStructure(
                "structure description is empty".to_string(),
            ));
        }

        let mut open = vec![false; width * height];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.iter().enumerate() {
                open[r * width + c] = matches!(*ch, '_' | '.');
            }
        }

        Ok(Self {
            width,
            height,
            open,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(row, col)` is open. Coordinates outside the
    /// grid are treated as blocked, which keeps run-scanning loops simple.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.open[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_dimensions_and_cells() {
        let grid = Grid::parse("#__\n__#\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(!grid.is_open(0, 0));
        assert!(grid.is_open(0, 1));
        assert!(grid.is_open(1, 0));
        assert!(!grid.is_open(1, 2));
    }

    #[test]
    fn ragged_rows_are_padded_with_blocked_cells() {
        let grid = Grid::parse("___\n_\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert!(grid.is_open(1, 0));
        assert!(!grid.is_open(1, 1));
        assert!(!grid.is_open(1, 2));
    }

    #[test]
    fn out_of_bounds_cells_read_as_blocked() {
        let grid = Grid::parse("__").unwrap();
        assert!(!grid.is_open(0, 2));
        assert!(!grid.is_open(1, 0));
    }

    #[test]
    fn empty_structure_is_rejected() {
        assert!(matches!(Grid::parse(""), Err(Error::InvalidStructure(_))));
    }
}
