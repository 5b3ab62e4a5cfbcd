//! Graph search over any [`crate::problem::SearchProblem`].

pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;

pub use a_star::{a_star_search, a_star_search_with_limit, uniform_cost_search};
pub use bfs::{breadth_first_search, breadth_first_search_with_limit};
pub use common::{reconstruct_path, SearchAlgorithm};
pub use dfs::{depth_first_search, depth_first_search_with_limit};
