use clap::Parser;
use maze_search::agent::SearchAgent;
use maze_search::algorithms::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, SearchAlgorithm,
};
use maze_search::config::{Config, HeuristicKind, ProblemKind};
use maze_search::error::SearchError;
use maze_search::grid::{Direction, Layout, Position};
use maze_search::heuristics::{corners_heuristic, food_heuristic, manhattan_heuristic};
use maze_search::problem::{SearchProblem, ILLEGAL_SEQUENCE_COST};
use maze_search::problems::{CornersProblem, FoodSearchProblem, PositionSearchProblem};
use std::path::PathBuf;

fn layout_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("layouts").join(name)
}

fn replay<P: SearchProblem>(problem: &P, actions: &[Direction]) -> P::State {
    actions.iter().fold(problem.start_state(), |state, &action| {
        problem
            .next_state(&state, action)
            .expect("plan contains an illegal action")
    })
}

#[test]
fn immediate_goal_is_empty_plan() {
    let layout: Layout = "%%%\n%P%\n%%%".parse().unwrap();
    let goal = Position::new(1, 1);

    let mut problem = PositionSearchProblem::new(&layout, goal);
    assert!(depth_first_search(&mut problem).is_empty());
    let mut problem = PositionSearchProblem::new(&layout, goal);
    assert!(breadth_first_search(&mut problem).is_empty());
    let mut problem = PositionSearchProblem::new(&layout, goal);
    let path = a_star_search(&mut problem, &manhattan_heuristic);
    assert!(path.is_empty());
    assert_eq!(problem.cost_of_actions(Some(&path[..])), 0.0);
}

#[test]
fn corridor_runs_straight_for_dfs_and_bfs() {
    let layout: Layout = "%%%%%%%\n%P   .%\n%%%%%%%".parse().unwrap();
    let goal = Position::new(5, 1);

    let mut problem = PositionSearchProblem::new(&layout, goal);
    assert_eq!(depth_first_search(&mut problem), vec![Direction::East; 4]);
    let mut problem = PositionSearchProblem::new(&layout, goal);
    assert_eq!(breadth_first_search(&mut problem), vec![Direction::East; 4]);
}

#[test]
fn corners_tour_of_twenty() {
    let layout = Layout::from_file(&layout_file("corners.lay")).unwrap();
    let mut problem = CornersProblem::new(&layout);
    let start = problem.start_state();
    assert!(corners_heuristic(&start, &mut problem) <= 20.0);

    let path = a_star_search(&mut problem, &corners_heuristic);
    assert_eq!(path.len(), 20);
    assert!(problem.is_goal_state(&replay(&problem, &path)));
    assert_eq!(problem.cost_of_actions(Some(&path[..])), 20.0);
}

#[test]
fn food_heuristic_is_nearest_plus_edge() {
    // food at distance 2 and 4 from the agent, 6 apart
    let layout: Layout = "%%%%%%%%%\n%. P   .%\n%%%%%%%%%".parse().unwrap();
    let mut problem = FoodSearchProblem::new(&layout);
    let start = problem.start_state();
    assert_eq!(food_heuristic(&start, &mut problem), 2.0 + 6.0);

    let path = a_star_search(&mut problem, &food_heuristic);
    assert_eq!(path.len(), 8);
    assert!(problem.is_goal_state(&replay(&problem, &path)));
}

#[test]
fn every_algorithm_lands_on_goal() {
    let layout = Layout::from_file(&layout_file("tiny.lay")).unwrap();
    let goal = Position::new(1, 1);
    for algorithm in [
        SearchAlgorithm::DepthFirst,
        SearchAlgorithm::BreadthFirst,
        SearchAlgorithm::UniformCost,
        SearchAlgorithm::AStar,
    ] {
        let mut problem = PositionSearchProblem::new(&layout, goal);
        let path = algorithm
            .run(&mut problem, &manhattan_heuristic, None)
            .unwrap();
        assert_eq!(replay(&problem, &path), goal, "{algorithm}");
        if algorithm != SearchAlgorithm::DepthFirst {
            assert_eq!(path.len(), 8, "{algorithm}");
        }
    }
}

#[test]
fn food_layout_is_cleared() {
    let layout = Layout::from_file(&layout_file("food.lay")).unwrap();
    let mut ucs = FoodSearchProblem::new(&layout);
    let mut astar = FoodSearchProblem::new(&layout);
    let baseline = uniform_cost_search(&mut ucs);
    let path = a_star_search(&mut astar, &food_heuristic);
    assert!(astar.is_goal_state(&replay(&astar, &path)));
    assert_eq!(path.len(), baseline.len());
    assert!(ucs.is_goal_state(&replay(&ucs, &baseline)));
}

#[test]
fn wall_hitting_sequence_costs_sentinel() {
    let layout = Layout::from_file(&layout_file("tiny.lay")).unwrap();
    let problem = PositionSearchProblem::new(&layout, Position::new(1, 1));
    assert_eq!(
        problem.cost_of_actions(Some(&[Direction::North][..])),
        ILLEGAL_SEQUENCE_COST
    );
    assert_eq!(problem.cost_of_actions(None), ILLEGAL_SEQUENCE_COST);
    assert!(matches!(
        problem.next_state(&layout.agent, Direction::North),
        Err(SearchError::IllegalAction { .. })
    ));
}

#[test]
fn cli_config_plans_from_file() {
    let path = layout_file("tiny.lay");
    let config = Config::parse_from([
        "maze_search",
        "--layout",
        path.to_str().unwrap(),
        "--algorithm",
        "bfs",
        "--goal",
        "1,1",
    ]);
    let layout = config.load_layout().unwrap();
    let report = config.agent().unwrap().plan(&layout).unwrap();
    assert!(report.solved);
    assert_eq!(report.actions.len(), 8);
    assert_eq!(report.cost, 8.0);
    assert!(report.expanded > 0);
}

#[test]
fn closest_dot_agent_eats_all_food() {
    let layout = Layout::from_file(&layout_file("food.lay")).unwrap();
    let agent = SearchAgent::new(
        SearchAlgorithm::BreadthFirst,
        ProblemKind::ClosestDot,
        HeuristicKind::Null,
    )
    .unwrap();
    let report = agent.plan(&layout).unwrap();
    assert!(report.solved);

    let mut snapshot = layout.clone();
    for &action in &report.actions {
        snapshot = snapshot.successor(action).unwrap();
    }
    assert_eq!(snapshot.food_count(), 0);
    assert_eq!(report.cost, report.actions.len() as f64);
}

#[test]
fn random_layout_closest_dot_either_clears_or_reports_stranded_food() {
    for seed in 0..10 {
        let seed = seed.to_string();
        let config = Config::parse_from([
            "maze_search",
            "--problem",
            "closest-dot",
            "--algorithm",
            "bfs",
            "--num-food",
            "4",
            "--seed",
            seed.as_str(),
        ]);
        let layout = config.load_layout().unwrap();
        match config.agent().unwrap().plan(&layout) {
            Ok(report) => {
                let mut snapshot = layout.clone();
                for &action in &report.actions {
                    snapshot = snapshot.successor(action).unwrap();
                }
                assert_eq!(snapshot.food_count(), 0, "seed {seed}");
            }
            Err(SearchError::NoSolution { remaining }) => assert!(remaining > 0),
            Err(other) => panic!("seed {seed}: {other}"),
        }
    }
}
