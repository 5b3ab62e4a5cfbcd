use crate::heuristics::{as_cost, DistanceCache};
use crate::problem::SearchProblem;
use crate::problems::{CornersProblem, CornersState};
use itertools::Itertools;

/// Memo owned by a [`CornersProblem`]: maze distances between corners and
/// from visited cells to corners.
#[derive(Debug, Default)]
pub struct CornersHeuristicInfo {
    pub(crate) distances: DistanceCache,
    pub(crate) corner_pairs_ready: bool,
}

impl CornersHeuristicInfo {
    pub fn distances(&self) -> &DistanceCache {
        &self.distances
    }
}

/// Exact shortest tour length through the unvisited corners, ignoring that
/// the agent may pass other corners on the way.
///
/// Tries every order of the remaining corners (at most 4! = 24) and sums the
/// maze distance to the first corner with the memoized distances between
/// consecutive corners.
pub fn corners_heuristic(state: &CornersState, problem: &mut CornersProblem) -> f64 {
    if problem.is_goal_state(state) {
        return 0.0;
    }
    let corners = problem.corners();
    let CornersProblem { walls, info, .. } = problem;

    if !info.corner_pairs_ready {
        for (a, b) in corners.iter().tuple_combinations() {
            info.distances.get(*a, *b, walls);
        }
        info.corner_pairs_ready = true;
        tracing::debug!("memoized {} corner distances", info.distances.len());
    }

    let unexplored: Vec<_> = corners
        .iter()
        .enumerate()
        .filter(|&(index, _)| !state.explored.contains(index))
        .map(|(_, &corner)| corner)
        .collect();

    let mut best = f64::INFINITY;
    for order in unexplored.iter().copied().permutations(unexplored.len()) {
        let first = as_cost(info.distances.get(state.position, order[0], walls));
        let rest: f64 = order
            .windows(2)
            .map(|pair| as_cost(info.distances.get(pair[0], pair[1], walls)))
            .sum();
        best = best.min(first + rest);
    }
    best
}
