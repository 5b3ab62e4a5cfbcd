use crate::error::SearchError;
use crate::grid::{Direction, Grid, Position};
use std::fmt::Debug;
use std::hash::Hash;

/// Cost reported for an absent action sequence or one that walks into a wall.
pub const ILLEGAL_SEQUENCE_COST: f64 = 999_999.0;

/// One successor produced by [`SearchProblem::expand`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub state: S,
    pub action: Direction,
    pub cost: f64,
}

/// The capability set every grid puzzle exposes to the search algorithms.
///
/// Implementors supply the state space (`start_state`, `is_goal_state`,
/// `actions`, `successor`) and diagnostics bookkeeping. The checked
/// transition API, expansion and sequence costing are shared.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;

    fn start_state(&self) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Legal movement actions from `state` (never wall-blocked).
    fn actions(&self, state: &Self::State) -> Vec<Direction>;

    /// The state reached by taking `action`, without checking legality.
    fn successor(&self, state: &Self::State, action: Direction) -> Self::State;

    fn position(&self, state: &Self::State) -> Position;

    fn walls(&self) -> &Grid;

    /// Number of states expanded so far.
    fn expanded(&self) -> usize;

    /// Diagnostics hook invoked once per call to [`SearchProblem::expand`].
    fn record_expansion(&mut self, state: &Self::State);

    /// Cost of entering `next`. Unit by default.
    fn step_cost(&self, _next: &Self::State) -> f64 {
        1.0
    }

    fn expand(&mut self, state: &Self::State) -> Vec<Transition<Self::State>> {
        let children = self
            .actions(state)
            .into_iter()
            .map(|action| {
                let next = self.successor(state, action);
                let cost = self.step_cost(&next);
                Transition {
                    state: next,
                    action,
                    cost,
                }
            })
            .collect();
        self.record_expansion(state);
        children
    }

    fn next_state(&self, state: &Self::State, action: Direction) -> Result<Self::State, SearchError> {
        if !self.actions(state).contains(&action) {
            return Err(SearchError::IllegalAction {
                state: format!("{state:?}"),
                action,
            });
        }
        Ok(self.successor(state, action))
    }

    fn action_cost(
        &self,
        state: &Self::State,
        action: Direction,
        next: &Self::State,
    ) -> Result<f64, SearchError> {
        if self.next_state(state, action)? != *next {
            return Err(SearchError::InconsistentTransition {
                state: format!("{state:?}"),
                action,
                claimed: format!("{next:?}"),
            });
        }
        Ok(self.step_cost(next))
    }

    /// Replay `actions` from the start state and total their cost, or
    /// [`ILLEGAL_SEQUENCE_COST`] if there is no sequence or it hits a wall.
    fn cost_of_actions(&self, actions: Option<&[Direction]>) -> f64 {
        let Some(actions) = actions else {
            return ILLEGAL_SEQUENCE_COST;
        };
        let mut state = self.start_state();
        let mut cost = 0.0;
        for &action in actions {
            let blocked = self
                .position(&state)
                .step(action)
                .map_or(true, |next| self.walls().blocks(next));
            if blocked {
                return ILLEGAL_SEQUENCE_COST;
            }
            state = self.successor(&state, action);
            cost += self.step_cost(&state);
        }
        cost
    }
}
