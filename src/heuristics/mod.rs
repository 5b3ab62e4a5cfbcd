//! Cost-to-goal estimates for A*.
//!
//! A heuristic receives the state being scored and mutable access to the
//! problem, so it can memoize expensive work (maze distances, spanning tree
//! weights) in caches the problem owns for the lifetime of one search.

pub mod corners;
pub mod distance;
pub mod food;
pub mod mst;

pub use corners::{corners_heuristic, CornersHeuristicInfo};
pub use distance::{euclidean, manhattan, maze_distance, DistanceCache};
pub use food::{food_heuristic, FoodHeuristicInfo};

use crate::problem::SearchProblem;
use crate::problems::PositionSearchProblem;
use crate::grid::Position;

pub trait Heuristic<P: SearchProblem> {
    fn estimate(&self, state: &P::State, problem: &mut P) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &mut P) -> f64,
{
    fn estimate(&self, state: &P::State, problem: &mut P) -> f64 {
        self(state, problem)
    }
}

/// Always 0. Turns A* into uniform-cost search.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &mut P) -> f64 {
    0.0
}

pub fn manhattan_heuristic(state: &Position, problem: &mut PositionSearchProblem) -> f64 {
    manhattan(*state, problem.goal()) as f64
}

pub fn euclidean_heuristic(state: &Position, problem: &mut PositionSearchProblem) -> f64 {
    euclidean(*state, problem.goal())
}

/// Maze distance as a cost, with no path meaning an infinite cost.
pub(crate) fn as_cost(distance: Option<usize>) -> f64 {
    distance.map_or(f64::INFINITY, |d| d as f64)
}
