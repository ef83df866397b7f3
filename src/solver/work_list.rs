use std::collections::{HashSet, VecDeque};

use crate::puzzle::SlotId;

/// The FIFO worklist of arcs awaiting revision during constraint
/// propagation.
///
/// Arcs append to the back and pop from the front, so revisions discovered
/// earlier propagate before later ones. Pushing an arc that is already
/// queued is a no-op; membership is tracked separately so the queue itself
/// stays a plain deque.
pub struct WorkList {
    queue: VecDeque<(SlotId, SlotId)>,
    queued: HashSet<(SlotId, SlotId)>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, x: SlotId, y: SlotId) {
        if self.queued.insert((x, y)) {
            self.queue.push_back((x, y));
        }
    }

    pub fn pop_front(&mut self) -> Option<(SlotId, SlotId)> {
        let arc = self.queue.pop_front()?;
        self.queued.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_fifo_order() {
        let mut worklist = WorkList::new();
        worklist.push_back(0, 1);
        worklist.push_back(2, 3);
        worklist.push_back(1, 0);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
        assert_eq!(worklist.pop_front(), Some((2, 3)));
        assert_eq!(worklist.pop_front(), Some((1, 0)));
        assert_eq!(worklist.pop_front(), None);
    }

    #[test]
    fn queued_arcs_are_not_duplicated() {
        let mut worklist = WorkList::new();
        worklist.push_back(0, 1);
        worklist.push_back(0, 1);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
        assert!(worklist.is_empty());

        // Once popped, the same arc may be queued again.
        worklist.push_back(0, 1);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
    }
}
