use crate::algorithms::SearchAlgorithm;
use crate::config::{HeuristicKind, ProblemKind};
use crate::grid::Direction;
use itertools::Itertools;
use std::fmt;
use std::time::Duration;

/// Outcome of one planning run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub algorithm: SearchAlgorithm,
    pub problem: ProblemKind,
    pub heuristic: HeuristicKind,
    pub actions: Vec<Direction>,
    pub cost: f64,
    pub expanded: usize,
    pub elapsed: Duration,
    /// False when the search gave up; an empty plan from a start that is
    /// already a goal still counts as solved.
    pub solved: bool,
}

impl SearchReport {
    pub fn path_string(&self) -> String {
        self.actions.iter().join(" ")
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Problem: {}", self.problem)?;
        if self.algorithm.uses_heuristic() {
            writeln!(f, "Algorithm: {} ({} heuristic)", self.algorithm, self.heuristic)?;
        } else {
            writeln!(f, "Algorithm: {}", self.algorithm)?;
        }
        writeln!(f, "Path length: {}", self.actions.len())?;
        writeln!(f, "Total cost: {}", self.cost)?;
        writeln!(f, "Search nodes expanded: {}", self.expanded)?;
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;
        if !self.solved {
            writeln!(f, "No solution found")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines() {
        let report = SearchReport {
            algorithm: SearchAlgorithm::AStar,
            problem: ProblemKind::Corners,
            heuristic: HeuristicKind::Corners,
            actions: vec![Direction::North, Direction::East],
            cost: 2.0,
            expanded: 5,
            elapsed: Duration::from_millis(3),
            solved: true,
        };
        let text = report.to_string();
        assert!(text.contains("Algorithm: astar (corners heuristic)"));
        assert!(text.contains("Path length: 2"));
        assert!(text.contains("Search nodes expanded: 5"));
        assert!(!text.contains("No solution"));
        assert_eq!(report.path_string(), "North East");
    }

    #[test]
    fn unsolved_report_says_so() {
        let report = SearchReport {
            algorithm: SearchAlgorithm::BreadthFirst,
            problem: ProblemKind::Position,
            heuristic: HeuristicKind::Null,
            actions: vec![],
            cost: 0.0,
            expanded: 1,
            elapsed: Duration::ZERO,
            solved: false,
        };
        assert!(report.to_string().contains("No solution found"));
    }
}
