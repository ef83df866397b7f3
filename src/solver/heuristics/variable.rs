//! Heuristics for selecting which unassigned slot to branch on next.

use std::cmp::Reverse;

use crate::puzzle::{Puzzle, SlotId};
use crate::solver::{assignment::Assignment, domains::DomainStore};

/// A strategy for choosing the next slot to assign during search.
///
/// Implementations must return `None` only when every slot is already
/// assigned. A good choice here dramatically shrinks the search tree.
pub trait SlotSelectionHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId>;
}

/// Selects the unassigned slot with the lowest id. Deterministic and
/// cheap; mostly useful as a baseline in tests.
pub struct SelectFirstHeuristic;

impl SlotSelectionHeuristic for SelectFirstHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        puzzle.slot_ids().find(|&id| !assignment.contains(id))
    }
}

/// Minimum-remaining-values selection: the unassigned slot with the
/// smallest current domain.
///
/// This is a "fail-first" strategy that tackles the most constrained slot
/// while the most options remain elsewhere. Ties fall to the slot with the
/// most neighbors (highest degree, so the choice constrains the most other
/// slots), and any remaining tie to the lowest slot id for reproducibility.
pub struct MinimumRemainingValuesHeuristic;

impl SlotSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        puzzle
            .slot_ids()
            .filter(|&id| !assignment.contains(id))
            .min_by_key(|&id| (domains.get(id).len(), Reverse(puzzle.degree(id)), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Word, WordList};

    // Three across slots in separate rows crossed by one down slot:
    //   ___
    //   _##
    //   ___
    // Ids: 0 = (0,0) across 3, 1 = (2,0) across 3, 2 = (0,0) down 3,
    // and the isolated cell (1,0) belongs to the down run.
    fn puzzle() -> Puzzle {
        Puzzle::from_structure("___\n_##\n___").unwrap()
    }

    fn domains(puzzle: &Puzzle) -> DomainStore {
        let words = WordList::from_words(["ant", "bee", "cow", "doe"]).unwrap();
        DomainStore::new(puzzle, &words)
    }

    #[test]
    fn select_first_takes_the_lowest_unassigned_id() {
        let puzzle = puzzle();
        let domains = domains(&puzzle);
        let assignment = Assignment::new().assign(0, Word::from("ANT"));
        let chosen = SelectFirstHeuristic.select_slot(&puzzle, &domains, &assignment);
        assert_eq!(chosen, Some(1));
    }

    #[test]
    fn all_assigned_yields_none() {
        let puzzle = puzzle();
        let domains = domains(&puzzle);
        let mut assignment = Assignment::new();
        for id in puzzle.slot_ids() {
            assignment = assignment.assign(id, Word::from("ANT"));
        }
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_slot(&puzzle, &domains, &assignment),
            None
        );
    }

    #[test]
    fn mrv_prefers_the_smallest_domain() {
        let puzzle = puzzle();
        let mut domains = domains(&puzzle);
        domains.prune(1, |w| w.as_ref() == "ANT" || w.as_ref() == "BEE");
        let chosen =
            MinimumRemainingValuesHeuristic.select_slot(&puzzle, &domains, &Assignment::new());
        assert_eq!(chosen, Some(1));
    }

    #[test]
    fn mrv_breaks_domain_ties_by_highest_degree() {
        let puzzle = puzzle();
        let domains = domains(&puzzle);
        // All domains equal; the down slot crosses both across slots
        // (degree 2) while each across slot crosses only it (degree 1).
        let chosen =
            MinimumRemainingValuesHeuristic.select_slot(&puzzle, &domains, &Assignment::new());
        assert_eq!(chosen, Some(2));
        assert_eq!(puzzle.degree(2), 2);
    }

    #[test]
    fn mrv_breaks_remaining_ties_by_lowest_id() {
        let puzzle = puzzle();
        let domains = domains(&puzzle);
        // With the down slot assigned, both across slots tie on domain
        // size and degree.
        let assignment = Assignment::new().assign(2, Word::from("ANT"));
        let chosen = MinimumRemainingValuesHeuristic.select_slot(&puzzle, &domains, &assignment);
        assert_eq!(chosen, Some(0));
    }
}
