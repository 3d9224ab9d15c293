use grid_search::{
    report::{MazeView, Report},
    solver::{astar::AstarSolver, dfs::DfsSolver, Algorithm, GridSolver},
    Cell, Maze,
};

fn maze(json: &str) -> Maze {
    Maze::from_json(json).expect("fixture should be a valid maze")
}

#[test]
fn maze1_shortest_and_depth_first() {
    let maze = maze(include_str!("../mazes/maze1.json"));

    let astar = AstarSolver::new().solve(&maze);
    assert_eq!(astar.path().unwrap().edge_count(), 10);
    assert_eq!(astar.explored(), 10);

    // Depth-first search takes the long way round the bottom corridor.
    let dfs = DfsSolver.solve(&maze);
    let path = dfs.path().unwrap();
    assert_eq!(path.edge_count(), 14);
    assert_eq!(dfs.explored(), 16);
    assert!(path.is_valid_on(maze.grid()));
}

#[test]
fn maze2_has_no_solution() {
    let maze = maze(include_str!("../mazes/maze2.json"));
    for algorithm in [Algorithm::DepthFirst, Algorithm::Astar] {
        let outcome = algorithm.solve(&maze);
        assert!(outcome.path().is_none());
        // Everything left of the wall column is reachable.
        assert_eq!(outcome.explored(), 11);
    }
}

/// The start cell is a wall in the file and is opened by the loader.
#[test]
fn maze3_walled_start() {
    let maze = maze(include_str!("../mazes/maze3.json"));
    assert!(maze.grid().is_passable(Cell::new(0, 0)));

    let astar = AstarSolver::new().solve(&maze);
    assert_eq!(astar.path().unwrap().edge_count(), 11);
    assert_eq!(astar.explored(), 21);

    let dfs = DfsSolver.solve(&maze);
    assert_eq!(dfs.path().unwrap().edge_count(), 11);
    assert_eq!(dfs.explored(), 11);
}

#[test]
fn report_output_for_fixture() {
    let maze = maze(include_str!("../mazes/maze3.json"));
    assert_eq!(
        MazeView::new(&maze).to_string(),
        concat!(
            " S  0  0  0  0  0  0  0 \n",
            " 0  1  1  1  1  1  1  0 \n",
            " 0  0  0  0  0  0  1  0 \n",
            " 1  1  1  1  1  0  1  0 \n",
            " 0  0  0  0  0  0  0  G \n",
            "\n"
        )
    );
    let report = Report::run(&AstarSolver::new(), &maze);
    let text = report.display(&maze).to_string();
    assert!(text.starts_with("Solution found.\nStates Explored: 21\nPath Length: 11\n"));
    assert!(text.contains(" *  *  *  *  *  *  1  0 \n"));
}
