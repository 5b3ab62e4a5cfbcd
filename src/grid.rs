use crate::error::{LayoutError, SearchError};
use pathfinding::matrix::Matrix;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use strum::{Display, VariantArray};

/// A cell coordinate. `x` grows eastward, `y` grows northward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// The cell reached by moving one step in `direction`, or `None` when that
    /// would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.vector();
        Some(Position {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, VariantArray, Display)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Movement actions in the order successors are generated.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn vector(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }
}

/// Boolean occupancy over a rectangular area, used for both walls and food.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    // rows are y, columns are x
    cells: Matrix<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            cells: Matrix::new(height, width, false),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.columns
    }

    pub fn height(&self) -> usize {
        self.cells.rows
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }

    /// Occupancy at `pos`; cells outside the grid read as unoccupied.
    pub fn get(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[(pos.y, pos.x)]
    }

    /// Occupancy for a wall grid: cells outside the grid block movement.
    pub fn blocks(&self, pos: Position) -> bool {
        !self.contains(pos) || self.get(pos)
    }

    pub fn set(&mut self, pos: Position, value: bool) {
        if self.contains(pos) {
            self.cells[(pos.y, pos.x)] = value;
        }
    }

    pub fn count(&self) -> usize {
        self.positions().filter(|&pos| self.get(pos)).count()
    }

    /// Occupied cells, ordered by x then y.
    pub fn as_list(&self) -> Vec<Position> {
        self.positions().filter(|&pos| self.get(pos)).collect()
    }

    fn positions(&self) -> impl Iterator<Item = Position> {
        let (width, height) = (self.width(), self.height());
        (0..width).flat_map(move |x| (0..height).map(move |y| Position { x, y }))
    }
}

/// A snapshot of the world: walls, remaining food and the agent's cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: Grid,
    pub food: Grid,
    pub agent: Position,
}

impl Layout {
    /// Generate a bordered maze with random interior walls and food.
    pub fn random(
        width: usize,
        height: usize,
        num_walls: usize,
        num_food: usize,
        seed: Option<u64>,
    ) -> Result<Self, LayoutError> {
        if width < 3 || height < 3 {
            return Err(LayoutError::TooSmall { width, height });
        }
        let mut rng = if let Some(seed) = seed {
            rand::rngs::StdRng::seed_from_u64(seed)
        } else {
            rand::rngs::StdRng::from_entropy()
        };

        let mut walls = Grid::new(width, height);
        for x in 0..width {
            walls.set(Position::new(x, 0), true);
            walls.set(Position::new(x, height - 1), true);
        }
        for y in 0..height {
            walls.set(Position::new(0, y), true);
            walls.set(Position::new(width - 1, y), true);
        }

        let agent = Position {
            x: rng.gen_range(1..width - 1),
            y: rng.gen_range(1..height - 1),
        };

        // Place walls randomly, never on the agent
        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let pos = Position {
                x: rng.gen_range(1..width - 1),
                y: rng.gen_range(1..height - 1),
            };
            if pos != agent && !walls.get(pos) {
                walls.set(pos, true);
                walls_placed += 1;
            }
            attempts += 1;
        }

        let mut food = Grid::new(width, height);
        let mut food_placed = 0;
        let mut attempts = 0;
        while food_placed < num_food && attempts < num_food * 10 {
            let pos = Position {
                x: rng.gen_range(1..width - 1),
                y: rng.gen_range(1..height - 1),
            };
            if pos != agent && !walls.get(pos) && !food.get(pos) {
                food.set(pos, true);
                food_placed += 1;
            }
            attempts += 1;
        }

        Ok(Layout { walls, food, agent })
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        text.parse()
    }

    pub fn width(&self) -> usize {
        self.walls.width()
    }

    pub fn height(&self) -> usize {
        self.walls.height()
    }

    /// Walls are everywhere outside the grid.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.blocks(pos)
    }

    pub fn has_food(&self, pos: Position) -> bool {
        self.food.get(pos)
    }

    pub fn food_count(&self) -> usize {
        self.food.count()
    }

    /// Movement actions available from `pos`, plus `Stop`.
    pub fn legal_actions(&self, pos: Position) -> Vec<Direction> {
        let mut actions: Vec<Direction> = Direction::CARDINAL
            .into_iter()
            .filter(|&d| pos.step(d).is_some_and(|next| !self.is_wall(next)))
            .collect();
        actions.push(Direction::Stop);
        actions
    }

    /// The snapshot after the agent takes `action`, eating any food it lands on.
    pub fn successor(&self, action: Direction) -> Result<Layout, SearchError> {
        if !self.legal_actions(self.agent).contains(&action) {
            return Err(SearchError::IllegalAction {
                state: self.agent.to_string(),
                action,
            });
        }
        let mut next = self.clone();
        if let Some(pos) = self.agent.step(action) {
            next.agent = pos;
            next.food.set(pos, false);
        }
        Ok(next)
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }
        let height = rows.len();
        let width = rows[0].chars().count();

        let mut walls = Grid::new(width, height);
        let mut food = Grid::new(width, height);
        let mut agent = None;

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(LayoutError::Ragged {
                    line: row + 1,
                    expected: width,
                    found: line.chars().count(),
                });
            }
            // First text line is the northernmost row
            let y = height - 1 - row;
            for (x, ch) in line.chars().enumerate() {
                let pos = Position { x, y };
                match ch {
                    '%' => walls.set(pos, true),
                    '.' => food.set(pos, true),
                    'P' => {
                        if agent.replace(pos).is_some() {
                            return Err(LayoutError::MultipleAgents);
                        }
                    }
                    ' ' | 'o' | 'G' | '0'..='9' => {}
                    other => {
                        return Err(LayoutError::UnknownCharacter {
                            ch: other,
                            line: row + 1,
                            column: x + 1,
                        })
                    }
                }
            }
        }

        let agent = agent.ok_or(LayoutError::MissingAgent)?;
        Ok(Layout { walls, food, agent })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let pos = Position { x, y };
                let ch = if pos == self.agent {
                    'P'
                } else if self.walls.get(pos) {
                    '%'
                } else if self.food.get(pos) {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = "\
%%%%%
%P .%
%%%%%
";

    #[test]
    fn parses_rows_north_first() {
        let layout: Layout = "%%%\n%.%\n%P%\n%%%\n".parse().unwrap();
        assert_eq!(layout.width(), 3);
        assert_eq!(layout.height(), 4);
        assert_eq!(layout.agent, Position::new(1, 1));
        assert!(layout.has_food(Position::new(1, 2)));
        assert!(layout.is_wall(Position::new(1, 0)));
        assert!(layout.is_wall(Position::new(1, 3)));
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(matches!("".parse::<Layout>(), Err(LayoutError::Empty)));
        assert!(matches!("%%%\n% %\n%%%".parse::<Layout>(), Err(LayoutError::MissingAgent)));
        assert!(matches!("%%%%\n%PP%\n%%%%".parse::<Layout>(), Err(LayoutError::MultipleAgents)));
        assert!(matches!(
            "%%%\n%P\n%%%".parse::<Layout>(),
            Err(LayoutError::Ragged { line: 2, .. })
        ));
        assert!(matches!(
            "%%%\n%P#\n%%%".parse::<Layout>(),
            Err(LayoutError::UnknownCharacter { ch: '#', line: 2, column: 3 })
        ));
    }

    #[test]
    fn display_round_trips_text() {
        let layout: Layout = TINY.parse().unwrap();
        assert_eq!(layout.to_string(), TINY);
    }

    #[test]
    fn food_list_is_x_major() {
        let layout: Layout = "%%%%\n%..%\n%P.%\n%%%%".parse().unwrap();
        assert_eq!(
            layout.food.as_list(),
            vec![Position::new(1, 2), Position::new(2, 1), Position::new(2, 2)]
        );
        assert_eq!(layout.food_count(), 3);
    }

    #[test]
    fn successor_eats_food_and_rejects_walls() {
        let layout: Layout = TINY.parse().unwrap();
        assert_eq!(
            layout.legal_actions(layout.agent),
            vec![Direction::East, Direction::Stop]
        );
        let moved = layout.successor(Direction::East).unwrap();
        let moved = moved.successor(Direction::East).unwrap();
        assert_eq!(moved.agent, Position::new(3, 1));
        assert_eq!(moved.food_count(), 0);
        assert!(matches!(
            layout.successor(Direction::North),
            Err(SearchError::IllegalAction { action: Direction::North, .. })
        ));
    }

    #[test]
    fn random_layout_is_bordered_and_reproducible() {
        let a = Layout::random(12, 9, 20, 5, Some(7)).unwrap();
        let b = Layout::random(12, 9, 20, 5, Some(7)).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_wall(a.agent));
        assert!(!a.has_food(a.agent));
        for x in 0..12 {
            assert!(a.is_wall(Position::new(x, 0)));
            assert!(a.is_wall(Position::new(x, 8)));
        }
        assert!(a.food_count() <= 5);
    }

    #[test]
    fn step_stays_in_quadrant() {
        assert_eq!(Position::new(0, 0).step(Direction::West), None);
        assert_eq!(Position::new(0, 0).step(Direction::North), Some(Position::new(0, 1)));
        assert_eq!(Position::new(2, 2).step(Direction::Stop), Some(Position::new(2, 2)));
    }
}
