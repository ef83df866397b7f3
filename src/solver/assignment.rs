use std::collections::HashSet;

use crate::puzzle::{Puzzle, SlotId, Word};

/// A partial mapping of slots to chosen words.
///
/// Assignments are persistent values: [`Assignment::assign`] returns an
/// extended copy and leaves the original untouched, so each search branch
/// carries its own assignment and failed branches are simply dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    chosen: im::HashMap<SlotId, Word>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: SlotId) -> Option<&Word> {
        self.chosen.get(&slot)
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        self.chosen.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Word)> {
        self.chosen.iter().map(|(&slot, word)| (slot, word))
    }

    /// Returns a copy of this assignment extended with `slot -> word`.
    pub fn assign(&self, slot: SlotId, word: Word) -> Assignment {
        Assignment {
            chosen: self.chosen.update(slot, word),
        }
    }

    /// Whether every slot in the puzzle has been assigned a word.
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        self.chosen.len() == puzzle.slot_count()
    }

    /// The consistency invariant: no word is used twice, every word's
    /// length matches its slot, and every pair of overlapping assigned
    /// slots agrees at the shared cell.
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        let mut seen: HashSet<&Word> = HashSet::new();
        for (slot, word) in self.iter() {
            if !seen.insert(word) {
                return false;
            }
            if word.len() != puzzle.slot(slot).length {
                return false;
            }
            for (other, other_word) in self.iter() {
                if other == slot {
                    continue;
                }
                if let Some(overlap) = puzzle.overlap(slot, other) {
                    if !overlap.agrees(word, other_word) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Puzzle;

    // One across slot (id 0) crossing one down slot (id 1) at their
    // middle letters.
    fn crossing() -> Puzzle {
        Puzzle::from_structure("#_#\n___\n#_#").unwrap()
    }

    #[test]
    fn empty_assignment_is_consistent_but_incomplete() {
        let puzzle = crossing();
        let assignment = Assignment::new();
        assert!(assignment.is_consistent(&puzzle));
        assert!(!assignment.is_complete(&puzzle));
    }

    #[test]
    fn agreeing_crossing_words_are_consistent() {
        let puzzle = crossing();
        let assignment = Assignment::new()
            .assign(0, Word::from("CAT"))
            .assign(1, Word::from("TAD"));
        assert!(assignment.is_consistent(&puzzle));
        assert!(assignment.is_complete(&puzzle));
    }

    #[test]
    fn disagreeing_crossing_words_are_inconsistent() {
        let puzzle = crossing();
        let assignment = Assignment::new()
            .assign(0, Word::from("CAT"))
            .assign(1, Word::from("DOG"));
        assert!(!assignment.is_consistent(&puzzle));
    }

    #[test]
    fn duplicate_words_are_inconsistent() {
        let puzzle = crossing();
        let assignment = Assignment::new()
            .assign(0, Word::from("CAT"))
            .assign(1, Word::from("CAT"));
        assert!(!assignment.is_consistent(&puzzle));
    }

    #[test]
    fn length_mismatch_is_inconsistent() {
        let puzzle = crossing();
        let assignment = Assignment::new().assign(0, Word::from("GECKO"));
        assert!(!assignment.is_consistent(&puzzle));
    }

    #[test]
    fn assign_leaves_the_original_untouched() {
        let original = Assignment::new();
        let extended = original.assign(0, Word::from("CAT"));
        assert!(original.is_empty());
        assert_eq!(extended.len(), 1);
    }
}
