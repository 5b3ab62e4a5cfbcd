use crate::algorithms::{a_star, bfs, dfs};
use crate::error::SearchError;
use crate::grid::Direction;
use crate::heuristics::{null_heuristic, Heuristic};
use crate::problem::SearchProblem;
use clap::ValueEnum;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Predecessor map: each discovered state points at the state it was reached
/// from and the action taken. The start state maps to `None`.
pub type Parents<S> = FxHashMap<S, Option<(S, Direction)>>;

/// Walk the predecessor map back from `goal` and return the actions from the
/// start in order.
pub fn reconstruct_path<S: Eq + Hash>(goal: &S, parents: &Parents<S>) -> Vec<Direction> {
    let mut actions = Vec::new();
    let mut current = goal;
    while let Some(Some((parent, action))) = parents.get(current) {
        actions.push(*action);
        current = parent;
    }
    actions.reverse();
    actions
}

/// Fails once `expanded` reaches a configured cap.
pub(crate) fn check_limit(expanded: usize, limit: Option<usize>) -> Result<(), SearchError> {
    match limit {
        Some(limit) if expanded >= limit => Err(SearchError::ExpansionLimit { limit }),
        _ => Ok(()),
    }
}

/// The search strategies selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, strum::Display)]
pub enum SearchAlgorithm {
    #[value(name = "dfs", alias = "depth-first")]
    #[strum(serialize = "dfs")]
    DepthFirst,
    #[value(name = "bfs", alias = "breadth-first")]
    #[strum(serialize = "bfs")]
    BreadthFirst,
    #[value(name = "ucs", alias = "uniform-cost")]
    #[strum(serialize = "ucs")]
    UniformCost,
    #[value(name = "astar", alias = "a-star")]
    #[strum(serialize = "astar")]
    AStar,
}

impl SearchAlgorithm {
    /// Whether the strategy consults a heuristic at all.
    pub fn uses_heuristic(self) -> bool {
        self == SearchAlgorithm::AStar
    }

    /// Run this strategy. `heuristic` is ignored by everything but A*.
    pub fn run<P, H>(
        self,
        problem: &mut P,
        heuristic: &H,
        limit: Option<usize>,
    ) -> Result<Vec<Direction>, SearchError>
    where
        P: SearchProblem,
        H: Heuristic<P>,
    {
        match self {
            SearchAlgorithm::DepthFirst => dfs::depth_first_search_with_limit(problem, limit),
            SearchAlgorithm::BreadthFirst => bfs::breadth_first_search_with_limit(problem, limit),
            SearchAlgorithm::UniformCost => {
                a_star::a_star_search_with_limit(problem, &null_heuristic::<P>, limit)
            }
            SearchAlgorithm::AStar => a_star::a_star_search_with_limit(problem, heuristic, limit),
        }
    }
}
