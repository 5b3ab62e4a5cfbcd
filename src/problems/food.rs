use crate::grid::{Direction, Grid, Layout, Position};
use crate::heuristics::FoodHeuristicInfo;
use crate::problem::SearchProblem;

/// Agent position plus a snapshot of the food still on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodState {
    pub position: Position,
    pub food: Grid,
}

/// Collect every piece of food.
#[derive(Debug)]
pub struct FoodSearchProblem {
    pub(crate) walls: Grid,
    pub(crate) start: FoodState,
    expanded: usize,
    pub(crate) info: FoodHeuristicInfo,
}

impl FoodSearchProblem {
    pub fn new(layout: &Layout) -> Self {
        FoodSearchProblem {
            walls: layout.walls.clone(),
            start: FoodState {
                position: layout.agent,
                food: layout.food.clone(),
            },
            expanded: 0,
            info: FoodHeuristicInfo::default(),
        }
    }

    /// Enable the approximate food heuristic mode when more than `threshold`
    /// food remain. See [`crate::heuristics::food_heuristic`].
    pub fn with_degraded_mode(mut self, threshold: usize) -> Self {
        self.info.degrade_above = Some(threshold);
        self
    }

    /// Memo filled by [`crate::heuristics::food_heuristic`].
    pub fn heuristic_info(&self) -> &FoodHeuristicInfo {
        &self.info
    }
}

impl SearchProblem for FoodSearchProblem {
    type State = FoodState;

    fn start_state(&self) -> FoodState {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &FoodState) -> bool {
        state.food.count() == 0
    }

    fn actions(&self, state: &FoodState) -> Vec<Direction> {
        Direction::CARDINAL
            .into_iter()
            .filter(|&d| {
                state
                    .position
                    .step(d)
                    .is_some_and(|next| !self.walls.blocks(next))
            })
            .collect()
    }

    fn successor(&self, state: &FoodState, action: Direction) -> FoodState {
        let position = state.position.step(action).unwrap_or(state.position);
        let mut food = state.food.clone();
        food.set(position, false);
        FoodState { position, food }
    }

    fn position(&self, state: &FoodState) -> Position {
        state.position
    }

    fn walls(&self) -> &Grid {
        &self.walls
    }

    fn expanded(&self) -> usize {
        self.expanded
    }

    fn record_expansion(&mut self, _state: &FoodState) {
        self.expanded += 1;
    }
}
