use crate::puzzle::{Puzzle, SlotId, Word, WordList};

/// The per-slot sets of still-candidate words.
///
/// Domains only ever shrink during propagation; the one way back is an
/// explicit [`DomainStore::restore`] of an earlier snapshot. Built on
/// persistent maps, so a snapshot is a structural-sharing clone rather
/// than a deep copy.
///
/// An empty domain is a normal state, signalling to the search that the
/// current branch is dead; it is never an error here. Looking up a slot id
/// the puzzle never issued panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: im::HashMap<SlotId, im::HashSet<Word>>,
}

/// An opaque copy of a [`DomainStore`]'s contents, captured before a
/// tentative assignment and handed back to [`DomainStore::restore`] when
/// the branch fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSnapshot {
    domains: im::HashMap<SlotId, im::HashSet<Word>>,
}

impl DomainStore {
    /// Initialises every slot's domain as the full word list.
    pub fn new(puzzle: &Puzzle, words: &WordList) -> Self {
        let domains = puzzle
            .slot_ids()
            .map(|id| (id, words.words().clone()))
            .collect();
        Self { domains }
    }

    /// The current candidates for a slot. Panics on an unknown slot id.
    pub fn get(&self, slot: SlotId) -> &im::HashSet<Word> {
        self.domains
            .get(&slot)
            .unwrap_or_else(|| panic!("no domain for slot id {slot}"))
    }

    /// Drops every candidate for `slot` failing `keep`, reporting whether
    /// anything was removed. Panics on an unknown slot id.
    pub fn prune<F>(&mut self, slot: SlotId, keep: F) -> bool
    where
        F: Fn(&Word) -> bool,
    {
        let current = self.get(slot);
        let retained: im::HashSet<Word> = current.iter().filter(|w| keep(*w)).cloned().collect();
        let removed = retained.len() < current.len();
        if removed {
            self.domains.insert(slot, retained);
        }
        removed
    }

    /// Collapses a slot's domain to a single word, as part of a tentative
    /// assignment. Panics on an unknown slot id.
    pub fn narrow(&mut self, slot: SlotId, word: Word) {
        assert!(
            self.domains.contains_key(&slot),
            "no domain for slot id {slot}"
        );
        self.domains.insert(slot, im::hashset! {word});
    }

    /// If a slot's domain holds exactly one candidate, returns it.
    pub fn singleton(&self, slot: SlotId) -> Option<Word> {
        let domain = self.get(slot);
        if domain.len() == 1 {
            domain.iter().next().cloned()
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Replaces the entire store's contents with an earlier snapshot.
    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.domains = snapshot.domains;
    }
}
