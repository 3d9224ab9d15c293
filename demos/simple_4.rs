use grid_search::report::MazeView;
use grid_search::solver::{astar::AstarSolver, dfs::DfsSolver, GridSolver};
use grid_search::{Cell, Maze, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Both solvers run on the same grid; A* returns a shortest route, depth-first search the first
// route it stumbles into.

fn main() {
    let mut pathing_grid = PathingGrid::new(3, 3, false);
    pathing_grid.set(Cell::new(1, 1), true);
    println!("{}", pathing_grid);
    let maze = Maze::new(pathing_grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();

    for (name, outcome) in [
        ("A*", AstarSolver::new().solve(&maze)),
        ("DFS", DfsSolver.solve(&maze)),
    ] {
        let path = outcome.path().unwrap();
        println!("{name}: {} moves, {} states explored", path.edge_count(), outcome.explored());
        for (cell, action) in path.cells().iter().skip(1).zip(path.actions()) {
            println!("  {action} -> {cell}");
        }
        print!("{}", MazeView::with_path(&maze, Some(path)));
    }
}
