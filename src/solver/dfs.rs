use crate::cell::Cell;
use crate::frontier::{FrontierEntry, StackFrontier};
use crate::pathing_grid::PathingGrid;
use crate::search::SearchContext;
use crate::solver::GridSolver;

/// Depth-first search. Ignores path cost, so the returned path is valid but usually not the
/// shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = StackFrontier;

    fn name(&self) -> &'static str {
        "dfs"
    }

    fn heuristic(&self, _: &Cell, _: &Cell) -> u32 {
        0
    }

    /// Pushes every neighbour that is neither waiting in the frontier nor closed. Neighbours are
    /// pushed up, down, left, right, so the right neighbour is expanded first.
    fn expand(
        &self,
        ctx: &mut SearchContext<StackFrontier>,
        grid: &PathingGrid,
        current: FrontierEntry,
        _: &Cell,
    ) {
        let cost = ctx.node(current.index).cost + 1;
        for (action, state) in grid.neighbors(current.state) {
            if !ctx.in_frontier(&state) && !ctx.is_closed(&state) {
                ctx.add_child(current.index, action, state, cost, cost);
            }
        }
    }
}
