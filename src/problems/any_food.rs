use crate::grid::{Direction, Grid, Layout, Position};
use crate::problem::SearchProblem;
use crate::problems::PositionSearchProblem;

/// Position search whose goal is any cell that currently holds food.
/// Used to route greedily to the nearest remaining food.
#[derive(Debug)]
pub struct AnyFoodSearchProblem {
    inner: PositionSearchProblem,
    food: Grid,
}

impl AnyFoodSearchProblem {
    pub fn new(layout: &Layout) -> Self {
        AnyFoodSearchProblem {
            inner: PositionSearchProblem::between(layout.walls.clone(), layout.agent, layout.agent),
            food: layout.food.clone(),
        }
    }

    pub fn food(&self) -> &Grid {
        &self.food
    }

    pub fn visited_list(&self) -> &[Position] {
        self.inner.visited_list()
    }
}

impl SearchProblem for AnyFoodSearchProblem {
    type State = Position;

    fn start_state(&self) -> Position {
        self.inner.start_state()
    }

    fn is_goal_state(&self, state: &Position) -> bool {
        self.food.get(*state)
    }

    fn actions(&self, state: &Position) -> Vec<Direction> {
        self.inner.actions(state)
    }

    fn successor(&self, state: &Position, action: Direction) -> Position {
        self.inner.successor(state, action)
    }

    fn position(&self, state: &Position) -> Position {
        *state
    }

    fn walls(&self) -> &Grid {
        self.inner.walls()
    }

    fn expanded(&self) -> usize {
        self.inner.expanded()
    }

    fn record_expansion(&mut self, state: &Position) {
        self.inner.record_expansion(state);
    }

    fn step_cost(&self, next: &Position) -> f64 {
        self.inner.step_cost(next)
    }
}
