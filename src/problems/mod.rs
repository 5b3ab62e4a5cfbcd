//! Concrete grid puzzles implementing [`crate::problem::SearchProblem`].

pub mod any_food;
pub mod corners;
pub mod food;
pub mod position;

pub use any_food::AnyFoodSearchProblem;
pub use corners::{CornerSet, CornersProblem, CornersState};
pub use food::{FoodSearchProblem, FoodState};
pub use position::{CostFunction, PositionSearchProblem};
