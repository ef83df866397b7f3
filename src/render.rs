//! Read-only reporting over a solved assignment: the letter grid for
//! terminal output, and a serialisable per-slot report.

use serde::Serialize;

use crate::puzzle::{Direction, Puzzle};
use crate::solver::Assignment;

/// The 2-D array of letters a (possibly partial) assignment puts on the
/// grid.
pub struct LetterGrid<'p> {
    puzzle: &'p Puzzle,
    letters: Vec<Option<char>>,
}

impl<'p> LetterGrid<'p> {
    pub fn new(puzzle: &'p Puzzle, assignment: &Assignment) -> Self {
        let width = puzzle.grid().width();
        let mut letters = vec![None; width * puzzle.grid().height()];
        for (id, word) in assignment.iter() {
            let slot = puzzle.slot(id);
            for (k, ch) in word.chars().enumerate() {
                let (row, col) = slot.cell(k);
                letters[row * width + col] = Some(ch);
            }
        }
        Self { puzzle, letters }
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.letters[row * self.puzzle.grid().width() + col]
    }
}

impl std::fmt::Display for LetterGrid<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let grid = self.puzzle.grid();
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid.is_open(row, col) {
                    write!(f, "{}", self.letter(row, col).unwrap_or(' '))?;
                } else {
                    write!(f, "█")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One solved slot, as emitted in the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct SlotReport {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
    pub word: String,
}

/// Flattens a solved assignment into slot reports, ordered by grid
/// position for stable output.
pub fn solution_report(puzzle: &Puzzle, assignment: &Assignment) -> Vec<SlotReport> {
    let mut reports: Vec<SlotReport> = assignment
        .iter()
        .map(|(id, word)| {
            let slot = puzzle.slot(id);
            SlotReport {
                row: slot.row,
                col: slot.col,
                direction: slot.direction,
                length: slot.length,
                word: word.to_string(),
            }
        })
        .collect();
    reports.sort_by_key(|r| (r.row, r.col, r.direction));
    reports
}
