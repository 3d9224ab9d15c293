use crate::cell::Cell;
use crate::frontier::{FrontierEntry, PriorityFrontier};
use crate::pathing_grid::PathingGrid;
use crate::search::SearchContext;
use crate::solver::GridSolver;
use crate::EDGE_COST;

/// A* search with a Manhattan distance heuristic. With `heuristic_factor` at 1.0 the first path
/// that reaches the goal is a shortest one; larger factors trade optimality for fewer
/// expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier;

    fn name(&self) -> &'static str {
        "astar"
    }

    /// Manhattan distance times the heuristic factor.
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32 {
        ((cell.manhattan_distance(goal) * EDGE_COST) as f32 * self.heuristic_factor) as u32
    }

    fn expand(
        &self,
        ctx: &mut SearchContext<PriorityFrontier>,
        grid: &PathingGrid,
        current: FrontierEntry,
        goal: &Cell,
    ) {
        let cost = ctx.node(current.index).cost + EDGE_COST;
        for (action, state) in grid.neighbors(current.state) {
            if ctx.is_closed(&state) {
                continue;
            }
            let estimated_cost = cost + self.heuristic(&state, goal);
            ctx.relax(current.index, action, state, cost, estimated_cost);
        }
    }
}
