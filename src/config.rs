use crate::agent::SearchAgent;
use crate::algorithms::SearchAlgorithm;
use crate::error::{ConfigError, LayoutError};
use crate::grid::{Layout, Position};
use crate::problems::CostFunction;
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ProblemKind {
    /// Reach the goal cell
    Position,
    /// Visit all four corners
    Corners,
    /// Eat every piece of food
    Food,
    /// Eat every piece of food, always heading for the nearest one
    ClosestDot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum HeuristicKind {
    Null,
    Manhattan,
    Euclidean,
    Corners,
    Food,
}

impl HeuristicKind {
    pub fn applies_to(self, problem: ProblemKind) -> bool {
        match self {
            HeuristicKind::Null => true,
            HeuristicKind::Manhattan | HeuristicKind::Euclidean => problem == ProblemKind::Position,
            HeuristicKind::Corners => problem == ProblemKind::Corners,
            HeuristicKind::Food => problem == ProblemKind::Food,
        }
    }

    /// Straight-line distances assume every step costs 1.
    pub fn admissible_under(self, cost: CostPreset) -> bool {
        match self {
            HeuristicKind::Manhattan | HeuristicKind::Euclidean => cost == CostPreset::Unit,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CostPreset {
    Unit,
    StayEast,
    StayWest,
}

impl From<CostPreset> for CostFunction {
    fn from(preset: CostPreset) -> Self {
        match preset {
            CostPreset::Unit => CostFunction::Unit,
            CostPreset::StayEast => CostFunction::StayEast,
            CostPreset::StayWest => CostFunction::StayWest,
        }
    }
}

/// Parse `x,y`.
pub fn parse_position(text: &str) -> Result<Position, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {text:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {text:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {text:?}: {e}"))?;
    Ok(Position { x, y })
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Layout file; a random layout is generated when omitted
    #[arg(long)]
    pub layout: Option<PathBuf>,

    #[arg(long, default_value_t = 20)]
    pub width: usize,

    #[arg(long, default_value_t = 10)]
    pub height: usize,

    #[arg(long, default_value_t = 30)]
    pub num_walls: usize,

    #[arg(long, default_value_t = 1)]
    pub num_food: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = SearchAlgorithm::DepthFirst)]
    pub algorithm: SearchAlgorithm,

    #[arg(long, value_enum, default_value_t = ProblemKind::Position)]
    pub problem: ProblemKind,

    #[arg(long, value_enum, default_value_t = HeuristicKind::Null)]
    pub heuristic: HeuristicKind,

    #[arg(long, value_enum, default_value_t = CostPreset::Unit)]
    pub cost: CostPreset,

    /// Goal cell for the position problem, as x,y
    #[arg(long, value_parser = parse_position, default_value = "1,1")]
    pub goal: Position,

    /// Abort a search after this many expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Use the approximate food heuristic while more than this much food remains
    #[arg(long)]
    pub degrade_above: Option<usize>,

    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    #[arg(long, default_value_t = false)]
    pub show_path: bool,
}

impl Config {
    /// Most verbose level the subscriber lets through; `--quiet` keeps errors only.
    pub fn log_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else {
            self.log_level
        }
    }

    pub fn load_layout(&self) -> Result<Layout, LayoutError> {
        match &self.layout {
            Some(path) => Layout::from_file(path),
            None => Layout::random(
                self.width,
                self.height,
                self.num_walls,
                self.num_food,
                self.seed,
            ),
        }
    }

    /// Build the agent, rejecting heuristics that do not fit the problem.
    pub fn agent(&self) -> Result<SearchAgent, ConfigError> {
        let mut agent = SearchAgent::new(self.algorithm, self.problem, self.heuristic)?
            .with_cost(self.cost)?
            .with_goal(self.goal);
        if let Some(limit) = self.max_expansions {
            agent = agent.with_max_expansions(limit);
        }
        if let Some(threshold) = self.degrade_above {
            agent = agent.with_degraded_mode(threshold);
        }
        Ok(agent)
    }
}
