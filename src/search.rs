//! Per-run search state: the node arena with its parent links, the frontier, the closed set and
//! the bookkeeping that ends up in [SearchStats].
use crate::cell::{Cell, Direction};
use crate::frontier::{Frontier, FrontierEntry};
use crate::pathing_grid::PathingGrid;
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use itertools::Itertools;
use std::mem::size_of;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A node of the search tree. The state is the key under which the node is stored in the arena;
/// `parent` is the arena index of the predecessor, [None] for the start node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub parent: Option<usize>,
    pub action: Option<Direction>,
    pub cost: u32,
    pub estimated_cost: u32,
}

/// A start-to-goal route, both endpoints included, with the move taken before each cell after
/// the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
    actions: Vec<Direction>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One label per step; always one shorter than [cells](Self::cells).
    pub fn actions(&self) -> &[Direction] {
        &self.actions
    }

    /// Number of moves, i.e. the path cost on a unit-cost grid.
    pub fn edge_count(&self) -> usize {
        self.actions.len()
    }

    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Checks that every cell is passable on `grid`, that consecutive cells are one orthogonal
    /// step apart in the recorded direction, and that no cell is visited twice.
    pub fn is_valid_on(&self, grid: &PathingGrid) -> bool {
        self.cells.iter().all(|&c| grid.is_passable(c))
            && self.cells.iter().all_unique()
            && self.cells.len() == self.actions.len() + 1
            && self
                .cells
                .iter()
                .tuple_windows()
                .zip(&self.actions)
                .all(|((a, b), &dir)| a.dir_to(b) == Some(dir))
    }
}

/// Exploration counters of a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of expanded (closed) states.
    pub explored: usize,
    /// Number of distinct states that received a search node.
    pub generated: usize,
    /// Number of frontier entries dropped unexpanded because their state was already closed.
    pub discarded: usize,
    pub peak_frontier: usize,
    /// Estimate of the largest number of bytes held by the arena, frontier and closed set.
    pub peak_bytes: usize,
}

/// Terminal state of a run. Running out of frontier is a regular outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved { path: Path, stats: SearchStats },
    Exhausted { stats: SearchStats },
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Solved { path, .. } => Some(path),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Solved { path, .. } => Some(path),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Solved { stats, .. } | SearchOutcome::Exhausted { stats } => stats,
        }
    }

    pub fn explored(&self) -> usize {
        self.stats().explored
    }
}

const NODE_BYTES: usize = size_of::<Cell>() + size_of::<SearchNode>() + size_of::<usize>();

/// State owned by one search invocation. Nodes live in an insertion-ordered arena keyed by
/// state, so a node's arena index never changes and parent links stay valid for the whole run.
pub struct SearchContext<F> {
    nodes: FxIndexMap<Cell, SearchNode>,
    frontier: F,
    closed: FxHashSet<Cell>,
    explored: usize,
    discarded: usize,
    peak_frontier: usize,
    peak_bytes: usize,
}

impl<F: Frontier> SearchContext<F> {
    /// Seeds the arena and the frontier with the start node.
    pub fn new(start: Cell, estimated_cost: u32) -> SearchContext<F> {
        let mut ctx = SearchContext {
            nodes: FxIndexMap::default(),
            frontier: F::default(),
            closed: FxHashSet::default(),
            explored: 0,
            discarded: 0,
            peak_frontier: 0,
            peak_bytes: 0,
        };
        let node = SearchNode {
            parent: None,
            action: None,
            cost: 0,
            estimated_cost,
        };
        let (index, _) = ctx.nodes.insert_full(start, node);
        ctx.push_entry(index, start, &node);
        ctx.record_peaks();
        ctx
    }

    fn push_entry(&mut self, index: usize, state: Cell, node: &SearchNode) {
        self.frontier.add(FrontierEntry {
            index,
            state,
            cost: node.cost,
            estimated_cost: node.estimated_cost,
        });
    }

    pub fn frontier_is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// # Panics
    /// If the frontier is empty.
    pub fn next_entry(&mut self) -> FrontierEntry {
        self.frontier.remove()
    }

    pub fn in_frontier(&self, state: &Cell) -> bool {
        self.frontier.contains_state(state)
    }

    pub fn is_closed(&self, state: &Cell) -> bool {
        self.closed.contains(state)
    }

    /// Marks `state` as expanded and counts it.
    pub fn close(&mut self, state: Cell) {
        if self.closed.insert(state) {
            self.explored += 1;
        }
    }

    /// Counts an entry that was popped after its state had been closed.
    pub fn discard(&mut self) {
        self.discarded += 1;
    }

    pub fn node(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }

    /// Adds a node for a state that has never been generated before.
    ///
    /// # Panics
    /// In debug builds, if `state` already has a node.
    pub fn add_child(
        &mut self,
        parent: usize,
        action: Direction,
        state: Cell,
        cost: u32,
        estimated_cost: u32,
    ) {
        let node = SearchNode {
            parent: Some(parent),
            action: Some(action),
            cost,
            estimated_cost,
        };
        let (index, previous) = self.nodes.insert_full(state, node);
        debug_assert!(previous.is_none(), "{state} was generated twice");
        self.push_entry(index, state, &node);
    }

    /// Records a route to `state` of the given cost if no cheaper or equal route is known and
    /// pushes a fresh frontier entry for it. Returns whether the route was an improvement.
    pub fn relax(
        &mut self,
        parent: usize,
        action: Direction,
        state: Cell,
        cost: u32,
        estimated_cost: u32,
    ) -> bool {
        let node = SearchNode {
            parent: Some(parent),
            action: Some(action),
            cost,
            estimated_cost,
        };
        let index = match self.nodes.entry(state) {
            Vacant(e) => {
                let index = e.index();
                e.insert(node);
                index
            }
            Occupied(mut e) => {
                if e.get().cost <= cost {
                    return false;
                }
                e.insert(node);
                e.index()
            }
        };
        self.push_entry(index, state, &node);
        true
    }

    /// Updates the peak frontier length and memory estimate; called once per iteration.
    pub fn record_peaks(&mut self) {
        self.peak_frontier = self.peak_frontier.max(self.frontier.len());
        let bytes = self.nodes.len() * NODE_BYTES
            + self.frontier.len() * size_of::<FrontierEntry>()
            + self.closed.len() * size_of::<Cell>();
        self.peak_bytes = self.peak_bytes.max(bytes);
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            explored: self.explored,
            generated: self.nodes.len(),
            discarded: self.discarded,
            peak_frontier: self.peak_frontier,
            peak_bytes: self.peak_bytes,
        }
    }

    /// Walks the parent links from the node at `index` back to the start and returns the route
    /// in forward order.
    pub fn reconstruct_path(&self, index: usize) -> Path {
        reverse_path(&self.nodes, index)
    }
}

fn reverse_path(nodes: &FxIndexMap<Cell, SearchNode>, index: usize) -> Path {
    let mut cells = Vec::new();
    let mut actions = Vec::new();
    let chain = std::iter::successors(Some(index), |&i| {
        nodes.get_index(i).and_then(|(_, node)| node.parent)
    });
    for i in chain {
        let (&state, node) = nodes
            .get_index(i)
            .unwrap_or_else(|| panic!("arena index {i} out of range"));
        cells.push(state);
        actions.extend(node.action);
    }
    cells.reverse();
    actions.reverse();
    Path { cells, actions }
}
