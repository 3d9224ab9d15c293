//! The working sets of not-yet-expanded search nodes. [StackFrontier] gives depth-first order,
//! [PriorityFrontier] gives best-first order on the estimated total cost.
use crate::cell::Cell;
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A reference to a node in the search arena together with the keys the frontier orders on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Index of the node in the arena of the running search.
    pub index: usize,
    pub state: Cell,
    /// Path cost from the start (gScore).
    pub cost: u32,
    /// `cost` plus the heuristic estimate to the goal (fScore).
    pub estimated_cost: u32,
}

pub trait Frontier: Default {
    fn add(&mut self, entry: FrontierEntry);
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
    /// Takes the next entry according to the frontier's policy.
    ///
    /// # Panics
    /// If the frontier is empty. Callers check [is_empty](Frontier::is_empty) first.
    fn remove(&mut self) -> FrontierEntry;
    /// Whether an entry for `state` is currently held, stale entries included.
    fn contains_state(&self, state: &Cell) -> bool;
}

/// Number of entries held per state. Replaces a linear scan of the frontier.
#[derive(Clone, Debug, Default)]
struct Occupancy(FxHashMap<Cell, u32>);

impl Occupancy {
    fn insert(&mut self, state: Cell) {
        *self.0.entry(state).or_insert(0) += 1;
    }
    fn remove(&mut self, state: &Cell) {
        if let Some(n) = self.0.get_mut(state) {
            *n -= 1;
            if *n == 0 {
                self.0.remove(state);
            }
        }
    }
    fn contains(&self, state: &Cell) -> bool {
        self.0.contains_key(state)
    }
}

/// Last-in-first-out frontier used by depth-first search.
#[derive(Clone, Debug, Default)]
pub struct StackFrontier {
    stack: Vec<FrontierEntry>,
    occupancy: Occupancy,
}

impl Frontier for StackFrontier {
    fn add(&mut self, entry: FrontierEntry) {
        self.occupancy.insert(entry.state);
        self.stack.push(entry);
    }
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
    fn remove(&mut self) -> FrontierEntry {
        let Some(entry) = self.stack.pop() else {
            panic!("empty frontier");
        };
        self.occupancy.remove(&entry.state);
        entry
    }
    fn contains_state(&self, state: &Cell) -> bool {
        self.occupancy.contains(state)
    }
}

#[derive(Clone, Debug)]
struct SmallestCostHolder {
    entry: FrontierEntry,
    sequence: u64,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the smallest estimated cost comes out
        // first and, among equals, the earliest inserted entry.
        match other.entry.estimated_cost.cmp(&self.entry.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Min-priority frontier on the estimated total cost with first-in-first-out tie-breaking.
/// Entries are never updated in place; a cheaper route is pushed as a new entry and the old one
/// stays behind until it is popped.
#[derive(Clone, Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<SmallestCostHolder>,
    occupancy: Occupancy,
    next_sequence: u64,
}

impl Frontier for PriorityFrontier {
    fn add(&mut self, entry: FrontierEntry) {
        self.occupancy.insert(entry.state);
        self.heap.push(SmallestCostHolder {
            entry,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
    fn remove(&mut self) -> FrontierEntry {
        let Some(SmallestCostHolder { entry, .. }) = self.heap.pop() else {
            panic!("empty frontier");
        };
        self.occupancy.remove(&entry.state);
        entry
    }
    fn contains_state(&self, state: &Cell) -> bool {
        self.occupancy.contains(state)
    }
}
