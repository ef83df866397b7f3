//! Pluggable strategies guiding the backtracking search: which slot to
//! branch on next, and in which order to try its candidate words.

pub mod value;
pub mod variable;

pub use value::{IdentityValueHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic};
pub use variable::{
    MinimumRemainingValuesHeuristic, SelectFirstHeuristic, SlotSelectionHeuristic,
};
