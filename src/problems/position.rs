use crate::grid::{Direction, Grid, Layout, Position};
use crate::problem::SearchProblem;
use rustc_hash::FxHashSet;
use std::fmt;

/// Cost of stepping onto a cell.
pub enum CostFunction {
    Unit,
    /// 0.5^x: cheap in the east, expensive in the west.
    StayEast,
    /// 2^x: cheap in the west, expensive in the east.
    StayWest,
    Custom(Box<dyn Fn(Position) -> f64>),
}

impl CostFunction {
    pub fn cost(&self, pos: Position) -> f64 {
        match self {
            CostFunction::Unit => 1.0,
            CostFunction::StayEast => 0.5f64.powi(pos.x as i32),
            CostFunction::StayWest => 2f64.powi(pos.x as i32),
            CostFunction::Custom(f) => f(pos),
        }
    }
}

impl fmt::Debug for CostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostFunction::Unit => write!(f, "Unit"),
            CostFunction::StayEast => write!(f, "StayEast"),
            CostFunction::StayWest => write!(f, "StayWest"),
            CostFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// Find a path to a single goal cell. States are positions.
#[derive(Debug)]
pub struct PositionSearchProblem {
    walls: Grid,
    start: Position,
    goal: Position,
    cost_fn: CostFunction,
    visited: FxHashSet<Position>,
    visited_list: Vec<Position>,
    expanded: usize,
}

impl PositionSearchProblem {
    /// Start at the layout's agent cell and head for `goal` at unit cost.
    pub fn new(layout: &Layout, goal: Position) -> Self {
        if layout.food_count() != 1 || !layout.has_food(goal) {
            tracing::warn!("this does not look like a regular search maze (goal {goal})");
        }
        Self::between(layout.walls.clone(), layout.agent, goal)
    }

    pub(crate) fn between(walls: Grid, start: Position, goal: Position) -> Self {
        PositionSearchProblem {
            walls,
            start,
            goal,
            cost_fn: CostFunction::Unit,
            visited: FxHashSet::default(),
            visited_list: Vec::new(),
            expanded: 0,
        }
    }

    pub fn with_cost_function(mut self, cost_fn: CostFunction) -> Self {
        self.cost_fn = cost_fn;
        self
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Distinct states in the order they were first expanded.
    pub fn visited_list(&self) -> &[Position] {
        &self.visited_list
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal_state(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &Position) -> Vec<Direction> {
        Direction::CARDINAL
            .into_iter()
            .filter(|&d| state.step(d).is_some_and(|next| !self.walls.blocks(next)))
            .collect()
    }

    fn successor(&self, state: &Position, action: Direction) -> Position {
        state.step(action).unwrap_or(*state)
    }

    fn position(&self, state: &Position) -> Position {
        *state
    }

    fn walls(&self) -> &Grid {
        &self.walls
    }

    fn expanded(&self) -> usize {
        self.expanded
    }

    fn record_expansion(&mut self, state: &Position) {
        self.expanded += 1;
        if self.visited.insert(*state) {
            self.visited_list.push(*state);
        }
    }

    fn step_cost(&self, next: &Position) -> f64 {
        self.cost_fn.cost(*next)
    }
}
