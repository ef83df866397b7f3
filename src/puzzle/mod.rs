//! The puzzle model: the grid structure, the slots it contains, and the
//! precomputed overlap table the solver's constraints are read from.

pub mod grid;
pub mod slot;
pub mod words;

use std::collections::{BTreeSet, HashMap};

pub use grid::Grid;
pub use slot::{Direction, Slot};
pub use words::{Word, WordList};

use crate::error::Result;

/// Dense index into a puzzle's slot table. The solver operates on ids; the
/// [`Slot`] value behind an id is available through [`Puzzle::slot`].
pub type SlotId = usize;

/// A shared cell between two slots: the word for the first slot at offset
/// `a` must equal the word for the second slot at offset `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub a: usize,
    pub b: usize,
}

impl Overlap {
    /// The same overlap seen from the other slot's side.
    pub fn flip(&self) -> Overlap {
        Overlap {
            a: self.b,
            b: self.a,
        }
    }

    /// Whether two words agree at the shared cell.
    pub fn agrees(&self, a: &str, b: &str) -> bool {
        match (a.as_bytes().get(self.a), b.as_bytes().get(self.b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

/// An immutable crossword puzzle: grid geometry, slot table, overlap table
/// and neighbor lists, all computed once at load time.
///
/// Lookups taking a [`SlotId`] panic when handed an id this puzzle never
/// issued; that is a bug in the caller, not a property of the puzzle.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    overlaps: HashMap<(SlotId, SlotId), Overlap>,
    neighbors: Vec<Vec<SlotId>>,
}

impl Puzzle {
    /// Parses a structure description and extracts its slots.
    pub fn from_structure(text: &str) -> Result<Self> {
        Ok(Self::new(Grid::parse(text)?))
    }

    pub fn new(grid: Grid) -> Self {
        let slots = extract_slots(&grid);

        // Index every cell by the slots covering it, then record an overlap
        // (in both directions) for every pair sharing a cell. Maximal runs
        // in the same direction never share a cell, so any pair of slots
        // shares at most one.
        let mut by_cell: HashMap<(usize, usize), Vec<(SlotId, usize)>> = HashMap::new();
        for (id, slot) in slots.iter().enumerate() {
            for k in 0..slot.length {
                by_cell.entry(slot.cell(k)).or_default().push((id, k));
            }
        }

        let mut overlaps = HashMap::new();
        let mut neighbor_sets: Vec<BTreeSet<SlotId>> = vec![BTreeSet::new(); slots.len()];
        for covering in by_cell.values() {
            for (i, &(id_a, off_a)) in covering.iter().enumerate() {
                for &(id_b, off_b) in &covering[i + 1..] {
                    let overlap = Overlap { a: off_a, b: off_b };
                    overlaps.insert((id_a, id_b), overlap);
                    overlaps.insert((id_b, id_a), overlap.flip());
                    neighbor_sets[id_a].insert(id_b);
                    neighbor_sets[id_b].insert(id_a);
                }
            }
        }

        let neighbors = neighbor_sets
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();

        Self {
            grid,
            slots,
            overlaps,
            neighbors,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over every slot id in this puzzle.
    pub fn slot_ids(&self) -> std::ops::Range<SlotId> {
        0..self.slots.len()
    }

    /// The slot behind an id. Panics on an unknown id.
    pub fn slot(&self, id: SlotId) -> Slot {
        self.slots[id]
    }

    /// The overlap between two distinct slots, or `None` when they share no
    /// cell. Symmetric: `overlap(a, b)` is `overlap(b, a)` with the offsets
    /// swapped. Panics on an unknown id.
    pub fn overlap(&self, a: SlotId, b: SlotId) -> Option<Overlap> {
        assert!(
            a < self.slots.len() && b < self.slots.len(),
            "slot id out of range: ({a}, {b}) with {} slots",
            self.slots.len()
        );
        self.overlaps.get(&(a, b)).copied()
    }

    /// The slots sharing at least one cell with `id`, in ascending id
    /// order. Panics on an unknown id.
    pub fn neighbors(&self, id: SlotId) -> &[SlotId] {
        &self.neighbors[id]
    }

    /// The number of neighbors of `id`.
    pub fn degree(&self, id: SlotId) -> usize {
        self.neighbors[id].len()
    }
}

/// Extracts every slot from the grid: maximal horizontal and vertical runs
/// of at least two open cells, plus a single length-1 across slot for any
/// open cell no such run covers. The fallback keeps isolated cells fillable
/// without producing two trivially conflicting slots over the same cell.
fn extract_slots(grid: &Grid) -> Vec<Slot> {
    let mut slots = Vec::new();
    let mut covered = vec![false; grid.width() * grid.height()];
    let cover = |slots: &mut Vec<Slot>, slot: Slot, covered: &mut Vec<bool>| {
        for k in 0..slot.length {
            let (r, c) = slot.cell(k);
            covered[r * grid.width() + c] = true;
        }
        slots.push(slot);
    };

    for row in 0..grid.height() {
        let mut col = 0;
        while col < grid.width() {
            let start = col;
            while grid.is_open(row, col) {
                col += 1;
            }
            let length = col - start;
            if length >= 2 {
                let slot = Slot {
                    row,
                    col: start,
                    direction: Direction::Across,
                    length,
                };
                cover(&mut slots, slot, &mut covered);
            }
            col += 1;
        }
    }

    for col in 0..grid.width() {
        let mut row = 0;
        while row < grid.height() {
            let start = row;
            while grid.is_open(row, col) {
                row += 1;
            }
            let length = row - start;
            if length >= 2 {
                let slot = Slot {
                    row: start,
                    col,
                    direction: Direction::Down,
                    length,
                };
                cover(&mut slots, slot, &mut covered);
            }
            row += 1;
        }
    }

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if grid.is_open(row, col) && !covered[row * grid.width() + col] {
                slots.push(Slot {
                    row,
                    col,
                    direction: Direction::Across,
                    length: 1,
                });
            }
        }
    }

    slots
}
