//! Gridfill fills crossword grids: given a black/white cell structure and a
//! word list, it assigns one word to every slot so that lengths match, no
//! word is used twice, and crossing slots agree on their shared letter.
//!
//! The core is a constraint-satisfaction solver layered the classic way:
//!
//! - **Node consistency** prunes each slot's candidates to words of the
//!   slot's length.
//! - **Arc consistency** (the AC-3 algorithm) propagates pairwise crossing
//!   constraints over a FIFO worklist until a fixpoint.
//! - **Backtracking search** extends a partial assignment slot by slot,
//!   guided by minimum-remaining-values and least-constraining-value
//!   heuristics, re-running propagation after every tentative choice and
//!   committing forced (singleton-domain) slots eagerly.
//!
//! A puzzle with no fill is an ordinary outcome, reported as `None`.
//!
//! # Example
//!
//! ```
//! use gridfill::puzzle::{Puzzle, WordList};
//! use gridfill::solver::Solver;
//!
//! // Two crossing slots sharing their first cell.
//! let puzzle = Puzzle::from_structure("__\n_#").unwrap();
//! let words = WordList::from_words(["it", "in"]).unwrap();
//!
//! let mut solver = Solver::new(&puzzle, &words);
//! let solution = solver.solve().expect("this grid has a fill");
//! assert!(solution.is_complete(&puzzle));
//! assert!(solution.is_consistent(&puzzle));
//! ```
pub mod error;
pub mod puzzle;
pub mod render;
pub mod solver;

pub use error::{Error, Result};
