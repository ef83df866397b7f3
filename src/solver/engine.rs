use tracing::{debug, trace};

use crate::puzzle::{Puzzle, SlotId, WordList};
use crate::solver::{
    assignment::Assignment,
    domains::DomainStore,
    heuristics::{
        LeastConstrainingValueHeuristic, MinimumRemainingValuesHeuristic, SlotSelectionHeuristic,
        ValueOrderingHeuristic,
    },
    stats::SearchStats,
    work_list::WorkList,
};

/// The crossword-filling solver.
///
/// Combines three layers, each feeding the next: node consistency prunes
/// every domain to words of the slot's length; the AC-3 propagation loop
/// enforces pairwise overlap constraints to a fixpoint; and heuristic
/// backtracking search extends a partial assignment one slot at a time,
/// re-running propagation after every tentative choice.
///
/// The domain store is owned by the solver and mutated in place during
/// propagation. Each branch point snapshots the store before its tentative
/// assignment and restores it when the branch fails, so no failed branch
/// leaves residue. Execution is single-threaded and depth-first; recursion
/// depth is bounded by the number of slots.
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    domains: DomainStore,
    slot_heuristic: Box<dyn SlotSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    stats: SearchStats,
}

impl<'p> Solver<'p> {
    /// Creates a solver with the default heuristics: minimum remaining
    /// values with a degree tie-break for slot selection, and least
    /// constraining value for word ordering.
    pub fn new(puzzle: &'p Puzzle, words: &WordList) -> Self {
        Self::with_heuristics(
            puzzle,
            words,
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    pub fn with_heuristics(
        puzzle: &'p Puzzle,
        words: &WordList,
        slot_heuristic: Box<dyn SlotSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            puzzle,
            domains: DomainStore::new(puzzle, words),
            slot_heuristic,
            value_heuristic,
            stats: SearchStats::default(),
        }
    }

    /// Attempts to fill the puzzle.
    ///
    /// Returns a complete, consistent assignment, or `None` when the
    /// puzzle has no solution. Unsatisfiability is an ordinary outcome,
    /// never an error.
    pub fn solve(&mut self) -> Option<Assignment> {
        debug!(
            slots = self.puzzle.slot_count(),
            "starting crossword fill"
        );
        self.enforce_node_consistency();
        if self
            .puzzle
            .slot_ids()
            .any(|id| self.domains.get(id).is_empty())
        {
            debug!("a slot has no candidate of the right length");
            return None;
        }
        if !self.ac3(None) {
            debug!("arc consistency proved the puzzle unsatisfiable");
            return None;
        }
        let solution = self.backtrack(Assignment::new());
        debug!(
            solved = solution.is_some(),
            nodes = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            "search finished"
        );
        solution
    }

    /// Counters collected over the last [`Solver::solve`] call.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Read-only view of the current domains, mostly useful after a solve
    /// to inspect how far propagation pruned.
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Removes from every slot's domain the words whose length differs
    /// from the slot's length. Runs once, before the first propagation
    /// pass; a second run would find nothing left to remove.
    fn enforce_node_consistency(&mut self) {
        for id in self.puzzle.slot_ids() {
            let length = self.puzzle.slot(id).length;
            self.domains.prune(id, |word| word.len() == length);
        }
    }

    /// Makes `x` arc-consistent with `y`: drops every word in `x`'s domain
    /// with no agreeing partner left in `y`'s domain. Reports whether
    /// anything was removed; a no-op for non-overlapping pairs.
    fn revise(&mut self, x: SlotId, y: SlotId) -> bool {
        let Some(overlap) = self.puzzle.overlap(x, y) else {
            return false;
        };
        self.stats.revise_calls += 1;
        let y_domain = self.domains.get(y).clone();
        let removed = self
            .domains
            .prune(x, |word| y_domain.iter().any(|partner| overlap.agrees(word, partner)));
        if removed {
            self.stats.prunings += 1;
            trace!(slot = x, against = y, "revised domain");
        }
        removed
    }

    /// The AC-3 propagation loop.
    ///
    /// Starts from the given arcs, or from every ordered pair of
    /// neighboring slots when `None`. Whenever revising `(x, y)` shrinks
    /// `x`'s domain, the arcs `(z, x)` for every other neighbor `z` of `x`
    /// are re-queued, since the shrink may have invalidated their
    /// consistency with `x`. Returns `false` as soon as any domain
    /// empties; `true` once the worklist drains with all domains
    /// non-empty. Domains only shrink, so the loop always terminates.
    fn ac3(&mut self, arcs: Option<Vec<(SlotId, SlotId)>>) -> bool {
        let mut worklist = WorkList::new();
        match arcs {
            Some(arcs) => {
                for (x, y) in arcs {
                    worklist.push_back(x, y);
                }
            }
            None => {
                for x in self.puzzle.slot_ids() {
                    for &y in self.puzzle.neighbors(x) {
                        worklist.push_back(x, y);
                    }
                }
            }
        }

        while let Some((x, y)) = worklist.pop_front() {
            if self.revise(x, y) {
                if self.domains.get(x).is_empty() {
                    trace!(slot = x, "domain wiped out");
                    return false;
                }
                for &z in self.puzzle.neighbors(x) {
                    if z != y {
                        worklist.push_back(z, x);
                    }
                }
            }
        }
        true
    }

    /// Depth-first backtracking over partial assignments.
    ///
    /// Each candidate word is tried inside a snapshot of the domain store:
    /// the tentative assignment narrows the slot's domain, propagation and
    /// singleton inference run against it, and a failed branch restores
    /// the snapshot verbatim before the next candidate. The first complete
    /// assignment found wins.
    fn backtrack(&mut self, assignment: Assignment) -> Option<Assignment> {
        self.stats.nodes_visited += 1;
        if assignment.is_complete(self.puzzle) {
            return Some(assignment);
        }

        let slot = self
            .slot_heuristic
            .select_slot(self.puzzle, &self.domains, &assignment)?;
        let ordered =
            self.value_heuristic
                .order_values(self.puzzle, &self.domains, &assignment, slot);
        trace!(slot, candidates = ordered.len(), "branching");

        for word in ordered {
            let snapshot = self.domains.snapshot();
            let candidate = assignment.assign(slot, word.clone());
            if candidate.is_consistent(self.puzzle) {
                self.domains.narrow(slot, word);
                let seeded = self
                    .puzzle
                    .neighbors(slot)
                    .iter()
                    .map(|&n| (n, slot))
                    .collect();
                if self.ac3(Some(seeded)) {
                    if let Some(candidate) = self.infer_singletons(candidate) {
                        if let Some(solved) = self.backtrack(candidate) {
                            return Some(solved);
                        }
                    }
                }
            }
            self.domains.restore(snapshot);
            self.stats.backtracks += 1;
        }
        None
    }

    /// Commits every unassigned slot whose domain has shrunk to a single
    /// candidate, propagating from each commitment, until a fixpoint.
    ///
    /// Forced choices are taken eagerly here instead of waiting for the
    /// selection heuristic to reach them. Returns `None` when a commitment
    /// breaks the consistency invariant or propagation wipes out a domain;
    /// the caller then abandons the candidate that led here.
    fn infer_singletons(&mut self, mut assignment: Assignment) -> Option<Assignment> {
        loop {
            let mut committed = false;
            for slot in self.puzzle.slot_ids() {
                if assignment.contains(slot) {
                    continue;
                }
                let Some(word) = self.domains.singleton(slot) else {
                    continue;
                };
                let extended = assignment.assign(slot, word);
                if !extended.is_consistent(self.puzzle) {
                    return None;
                }
                trace!(slot, "committing singleton domain");
                self.stats.singleton_commits += 1;
                assignment = extended;
                committed = true;

                let seeded = self
                    .puzzle
                    .neighbors(slot)
                    .iter()
                    .copied()
                    .filter(|n| !assignment.contains(*n))
                    .map(|n| (n, slot))
                    .collect();
                if !self.ac3(Some(seeded)) {
                    return None;
                }
            }
            if !committed {
                return Some(assignment);
            }
        }
    }
}
