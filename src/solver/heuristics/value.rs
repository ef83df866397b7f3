//! Heuristics for ordering the candidate words tried for a slot.

use crate::puzzle::{Puzzle, SlotId, Word};
use crate::solver::{assignment::Assignment, domains::DomainStore};

/// A strategy for ordering a slot's candidates before the search tries
/// them one by one.
pub trait ValueOrderingHeuristic {
    fn order_values(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<Word>;
}

/// Returns candidates in the domain's natural iteration order, with no
/// ordering guarantee. A baseline for tests.
pub struct IdentityValueHeuristic;

impl ValueOrderingHeuristic for IdentityValueHeuristic {
    fn order_values(
        &self,
        _puzzle: &Puzzle,
        domains: &DomainStore,
        _assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<Word> {
        domains.get(slot).iter().cloned().collect()
    }
}

/// Least-constraining-value ordering: candidates that rule out the fewest
/// words in unassigned neighbors' domains come first.
///
/// For each candidate, sums over every unassigned neighbor the number of
/// words in that neighbor's domain that disagree at the shared cell. Ties
/// fall to lexicographic word order, keeping the search reproducible.
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<Word> {
        let unassigned_neighbors: Vec<SlotId> = puzzle
            .neighbors(slot)
            .iter()
            .copied()
            .filter(|&n| !assignment.contains(n))
            .collect();

        let ruled_out = |word: &Word| -> usize {
            unassigned_neighbors
                .iter()
                .map(|&n| {
                    let overlap = puzzle.overlap(slot, n).unwrap();
                    domains
                        .get(n)
                        .iter()
                        .filter(|candidate| !overlap.agrees(word, candidate))
                        .count()
                })
                .sum()
        };

        let mut ordered: Vec<Word> = domains.get(slot).iter().cloned().collect();
        ordered.sort_by_cached_key(|word| (ruled_out(word), word.clone()));
        ordered
    }
}
