//! Typed errors.
//!
//! Contract violations (an illegal action, a transition that does not match
//! the problem's successor function) abort the call that detected them.
//! "No solution" is not an error for the search algorithms: they return an
//! empty action sequence instead.

use crate::grid::Direction;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `action` is not among the legal actions of `state`.
    IllegalAction { state: String, action: Direction },
    /// `claimed` is not the successor of `state` under `action`.
    InconsistentTransition {
        state: String,
        action: Direction,
        claimed: String,
    },
    /// The caller-imposed expansion cap was reached before a goal was found.
    ExpansionLimit { limit: usize },
    /// Greedy routing found remaining targets it cannot reach.
    NoSolution { remaining: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalAction { state, action } => {
                write!(f, "illegal action {action} from state {state}")
            }
            Self::InconsistentTransition {
                state,
                action,
                claimed,
            } => write!(
                f,
                "invalid next state {claimed} for action {action} from state {state}"
            ),
            Self::ExpansionLimit { limit } => {
                write!(f, "search aborted after {limit} expansions")
            }
            Self::NoSolution { remaining } => {
                write!(f, "no path to any of the {remaining} remaining targets")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug)]
pub enum LayoutError {
    Empty,
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    UnknownCharacter {
        ch: char,
        line: usize,
        column: usize,
    },
    MissingAgent,
    MultipleAgents,
    TooSmall {
        width: usize,
        height: usize,
    },
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout is empty"),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line} has {found} cells, expected {expected}"
            ),
            Self::UnknownCharacter { ch, line, column } => {
                write!(f, "unknown layout character {ch:?} at {line}:{column}")
            }
            Self::MissingAgent => write!(f, "layout has no agent start 'P'"),
            Self::MultipleAgents => write!(f, "layout has more than one agent start 'P'"),
            Self::TooSmall { width, height } => {
                write!(f, "layout {width}x{height} leaves no interior")
            }
            Self::Io { path, source } => write!(f, "failed to read {path}: {source}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Rejected search configurations, caught before any search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    HeuristicMismatch { heuristic: String, problem: String },
    /// The heuristic overestimates under this step cost.
    InadmissibleUnderCost { heuristic: String, cost: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeuristicMismatch { heuristic, problem } => {
                write!(f, "heuristic {heuristic} does not apply to the {problem} problem")
            }
            Self::InadmissibleUnderCost { heuristic, cost } => {
                write!(f, "heuristic {heuristic} overestimates with {cost} step costs")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
