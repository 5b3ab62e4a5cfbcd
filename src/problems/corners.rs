use crate::grid::{Direction, Grid, Layout, Position};
use crate::heuristics::CornersHeuristicInfo;
use crate::problem::SearchProblem;

/// Which of the four corners have been reached. Order of arrival is not
/// part of the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CornerSet(u8);

impl CornerSet {
    pub const ALL: CornerSet = CornerSet(0b1111);

    pub fn contains(self, index: usize) -> bool {
        self.0 & (1 << index) != 0
    }

    #[must_use]
    pub fn with(self, index: usize) -> CornerSet {
        CornerSet(self.0 | (1 << index))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_complete(self) -> bool {
        self == Self::ALL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CornersState {
    pub position: Position,
    pub explored: CornerSet,
}

/// Visit all four interior corners of the layout.
#[derive(Debug)]
pub struct CornersProblem {
    pub(crate) walls: Grid,
    start: Position,
    corners: [Position; 4],
    expanded: usize,
    pub(crate) info: CornersHeuristicInfo,
}

impl CornersProblem {
    pub fn new(layout: &Layout) -> Self {
        let top = layout.height().saturating_sub(2);
        let right = layout.width().saturating_sub(2);
        let corners = [
            Position::new(1, 1),
            Position::new(1, top),
            Position::new(right, 1),
            Position::new(right, top),
        ];
        for corner in corners {
            if !layout.has_food(corner) {
                tracing::warn!("no food in corner {corner}");
            }
        }
        CornersProblem {
            walls: layout.walls.clone(),
            start: layout.agent,
            corners,
            expanded: 0,
            info: CornersHeuristicInfo::default(),
        }
    }

    pub fn corners(&self) -> [Position; 4] {
        self.corners
    }

    /// Memo filled by [`crate::heuristics::corners_heuristic`].
    pub fn heuristic_info(&self) -> &CornersHeuristicInfo {
        &self.info
    }

    /// `explored` extended with every corner located at `position`.
    fn mark(&self, explored: CornerSet, position: Position) -> CornerSet {
        self.corners
            .iter()
            .enumerate()
            .filter(|&(_, &corner)| corner == position)
            .fold(explored, |set, (index, _)| set.with(index))
    }
}

impl SearchProblem for CornersProblem {
    type State = CornersState;

    /// A start on a corner counts as having reached it.
    fn start_state(&self) -> CornersState {
        CornersState {
            position: self.start,
            explored: self.mark(CornerSet::default(), self.start),
        }
    }

    fn is_goal_state(&self, state: &CornersState) -> bool {
        state.explored.is_complete()
    }

    fn actions(&self, state: &CornersState) -> Vec<Direction> {
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

    fn successor(&self, state: &CornersState, action: Direction) -> CornersState {
        let position = state.position.step(action).unwrap_or(state.position);
        CornersState {
            position,
            explored: self.mark(state.explored, position),
        }
    }

    fn position(&self, state: &CornersState) -> Position {
        state.position
    }

    fn walls(&self) -> &Grid {
        &self.walls
    }

    fn expanded(&self) -> usize {
        self.expanded
    }

    fn record_expansion(&mut self, _state: &CornersState) {
        self.expanded += 1;
    }
}
