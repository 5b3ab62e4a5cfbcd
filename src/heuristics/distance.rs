use crate::grid::{Direction, Grid, Position};
use pathfinding::prelude::bfs;
use rustc_hash::FxHashMap;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Position, b: Position) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Position, b: Position) -> f64 {
    let dx = a.x.abs_diff(b.x) as f64;
    let dy = a.y.abs_diff(b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Open cells one step away from `pos`.
pub fn open_neighbors(walls: &Grid, pos: Position) -> Vec<Position> {
    Direction::CARDINAL
        .into_iter()
        .filter_map(|d| pos.step(d))
        .filter(|&next| !walls.blocks(next))
        .collect()
}

/// Length of the shortest wall-avoiding path from `from` to `to`, or `None`
/// if either endpoint is a wall or no path exists.
pub fn maze_distance(from: Position, to: Position, walls: &Grid) -> Option<usize> {
    if walls.blocks(from) || walls.blocks(to) {
        return None;
    }
    bfs(&from, |p| open_neighbors(walls, *p), |p| *p == to).map(|path| path.len() - 1)
}

/// Symmetric memo of maze distances, keyed by unordered cell pair.
#[derive(Debug, Default, Clone)]
pub struct DistanceCache {
    distances: FxHashMap<(Position, Position), Option<usize>>,
    computed: usize,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: Position, b: Position) -> (Position, Position) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn get(&mut self, a: Position, b: Position, walls: &Grid) -> Option<usize> {
        if a == b {
            return (!walls.blocks(a)).then_some(0);
        }
        if let Some(&known) = self.distances.get(&Self::key(a, b)) {
            return known;
        }
        let distance = maze_distance(a, b, walls);
        self.distances.insert(Self::key(a, b), distance);
        self.computed += 1;
        distance
    }

    /// Number of maze searches run so far.
    pub fn computed(&self) -> usize {
        self.computed
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
