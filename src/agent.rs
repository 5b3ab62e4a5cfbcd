use crate::algorithms::{breadth_first_search_with_limit, SearchAlgorithm};
use crate::config::{CostPreset, HeuristicKind, ProblemKind};
use crate::error::{ConfigError, SearchError};
use crate::grid::{Direction, Layout, Position};
use crate::heuristics::{
    corners_heuristic, euclidean_heuristic, food_heuristic, manhattan_heuristic, null_heuristic,
    Heuristic,
};
use crate::problem::SearchProblem;
use crate::problems::{
    AnyFoodSearchProblem, CornersProblem, FoodSearchProblem, PositionSearchProblem,
};
use crate::statistics::SearchReport;
use std::time::Instant;

/// Plans a complete action sequence for one layout: builds the problem,
/// runs the chosen search and costs the result.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    algorithm: SearchAlgorithm,
    problem: ProblemKind,
    heuristic: HeuristicKind,
    cost: CostPreset,
    goal: Position,
    max_expansions: Option<usize>,
    degrade_above: Option<usize>,
}

impl SearchAgent {
    pub fn new(
        algorithm: SearchAlgorithm,
        problem: ProblemKind,
        heuristic: HeuristicKind,
    ) -> Result<Self, ConfigError> {
        if !heuristic.applies_to(problem) {
            return Err(ConfigError::HeuristicMismatch {
                heuristic: heuristic.to_string(),
                problem: problem.to_string(),
            });
        }
        if heuristic != HeuristicKind::Null && !algorithm.uses_heuristic() {
            tracing::warn!("{algorithm} ignores the {heuristic} heuristic");
        }
        let algorithm = if problem == ProblemKind::ClosestDot {
            if algorithm != SearchAlgorithm::BreadthFirst {
                tracing::warn!("{problem} always routes with bfs, not {algorithm}");
            }
            SearchAlgorithm::BreadthFirst
        } else {
            algorithm
        };
        Ok(SearchAgent {
            algorithm,
            problem,
            heuristic,
            cost: CostPreset::Unit,
            goal: Position::new(1, 1),
            max_expansions: None,
            degrade_above: None,
        })
    }

    /// Rejects step costs under which the configured heuristic overestimates.
    pub fn with_cost(mut self, cost: CostPreset) -> Result<Self, ConfigError> {
        if !self.heuristic.admissible_under(cost) {
            return Err(ConfigError::InadmissibleUnderCost {
                heuristic: self.heuristic.to_string(),
                cost: cost.to_string(),
            });
        }
        self.cost = cost;
        Ok(self)
    }

    pub fn with_goal(mut self, goal: Position) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_degraded_mode(mut self, threshold: usize) -> Self {
        self.degrade_above = Some(threshold);
        self
    }

    pub fn plan(&self, layout: &Layout) -> Result<SearchReport, SearchError> {
        let started = Instant::now();
        let outcome = match self.problem {
            ProblemKind::Position => {
                let problem = PositionSearchProblem::new(layout, self.goal)
                    .with_cost_function(self.cost.into());
                match self.heuristic {
                    HeuristicKind::Manhattan => self.solve(problem, &manhattan_heuristic),
                    HeuristicKind::Euclidean => self.solve(problem, &euclidean_heuristic),
                    _ => self.solve(problem, &null_heuristic::<PositionSearchProblem>),
                }
            }
            ProblemKind::Corners => {
                let problem = CornersProblem::new(layout);
                match self.heuristic {
                    HeuristicKind::Corners => self.solve(problem, &corners_heuristic),
                    _ => self.solve(problem, &null_heuristic::<CornersProblem>),
                }
            }
            ProblemKind::Food => {
                let mut problem = FoodSearchProblem::new(layout);
                if let Some(threshold) = self.degrade_above {
                    problem = problem.with_degraded_mode(threshold);
                }
                match self.heuristic {
                    HeuristicKind::Food => self.solve(problem, &food_heuristic),
                    _ => self.solve(problem, &null_heuristic::<FoodSearchProblem>),
                }
            }
            ProblemKind::ClosestDot => closest_dot_route(layout, self.max_expansions),
        }?;

        let report = SearchReport {
            algorithm: self.algorithm,
            problem: self.problem,
            heuristic: self.heuristic,
            actions: outcome.actions,
            cost: outcome.cost,
            expanded: outcome.expanded,
            elapsed: started.elapsed(),
            solved: outcome.solved,
        };
        tracing::info!(
            "path found with total cost of {} in {:.1?} ({} nodes expanded)",
            report.cost,
            report.elapsed,
            report.expanded
        );
        Ok(report)
    }

    fn solve<P, H>(&self, mut problem: P, heuristic: &H) -> Result<Outcome, SearchError>
    where
        P: SearchProblem,
        H: Heuristic<P>,
    {
        let actions = self
            .algorithm
            .run(&mut problem, heuristic, self.max_expansions)?;
        let solved = !actions.is_empty() || problem.is_goal_state(&problem.start_state());
        Ok(Outcome {
            cost: problem.cost_of_actions(Some(&actions)),
            expanded: problem.expanded(),
            actions,
            solved,
        })
    }
}

/// Plan result before it is dressed up as a report.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub actions: Vec<Direction>,
    pub cost: f64,
    pub expanded: usize,
    pub solved: bool,
}

/// Eat all food by repeatedly walking a shortest path to the nearest piece.
///
/// Each segment is replayed against the snapshot, so an illegal action fails
/// the whole route. Not optimal overall, but each search is cheap.
pub fn closest_dot_route(layout: &Layout, limit: Option<usize>) -> Result<Outcome, SearchError> {
    let mut current = layout.clone();
    let mut actions = Vec::new();
    let mut expanded = 0;

    if current.has_food(current.agent) {
        current.food.set(current.agent, false);
    }
    while current.food_count() > 0 {
        let mut problem = AnyFoodSearchProblem::new(&current);
        let segment = breadth_first_search_with_limit(&mut problem, limit)?;
        expanded += problem.expanded();
        if segment.is_empty() {
            return Err(SearchError::NoSolution {
                remaining: current.food_count(),
            });
        }
        for &action in &segment {
            current = current.successor(action)?;
        }
        tracing::debug!(
            "closest dot: {} steps to {:?}, {} food left",
            segment.len(),
            current.agent,
            current.food_count()
        );
        actions.extend(segment);
    }

    Ok(Outcome {
        cost: actions.len() as f64,
        expanded,
        actions,
        solved: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_plan_reports_cost() {
        let layout: Layout = "%%%%%%%\n%P   .%\n%%%%%%%".parse().unwrap();
        let agent = SearchAgent::new(
            SearchAlgorithm::AStar,
            ProblemKind::Position,
            HeuristicKind::Manhattan,
        )
        .unwrap()
        .with_goal(Position::new(5, 1));
        let report = agent.plan(&layout).unwrap();
        assert_eq!(report.actions, vec![Direction::East; 4]);
        assert_eq!(report.cost, 4.0);
        assert!(report.solved);
        assert!(report.expanded >= 4);
    }

    #[test]
    fn unreachable_goal_is_unsolved_not_an_error() {
        let layout: Layout = "%%%%%%\n%P%..%\n%%%%%%".parse().unwrap();
        let agent = SearchAgent::new(
            SearchAlgorithm::BreadthFirst,
            ProblemKind::Position,
            HeuristicKind::Null,
        )
        .unwrap()
        .with_goal(Position::new(4, 1));
        let report = agent.plan(&layout).unwrap();
        assert!(report.actions.is_empty());
        assert!(!report.solved);
    }

    #[test]
    fn expansion_cap_propagates() {
        let layout: Layout = "%%%%%%%\n%P   .%\n%%%%%%%".parse().unwrap();
        let agent = SearchAgent::new(
            SearchAlgorithm::UniformCost,
            ProblemKind::Position,
            HeuristicKind::Null,
        )
        .unwrap()
        .with_goal(Position::new(5, 1))
        .with_max_expansions(1);
        assert_eq!(
            agent.plan(&layout).unwrap_err(),
            SearchError::ExpansionLimit { limit: 1 }
        );
    }

    #[test]
    fn closest_dot_eats_everything() {
        let layout: Layout = "%%%%%%%%\n%.  P .%\n%%%%%%%%".parse().unwrap();
        let outcome = closest_dot_route(&layout, None).unwrap();
        // east 2 to the near food, then west 5 to the far one
        assert_eq!(outcome.actions.len(), 7);
        assert_eq!(&outcome.actions[..2], &[Direction::East; 2]);

        let mut replay = layout.clone();
        for &action in &outcome.actions {
            replay = replay.successor(action).unwrap();
        }
        assert_eq!(replay.food_count(), 0);
    }

    #[test]
    fn closest_dot_reports_stranded_food() {
        let layout: Layout = "%%%%%%\n%P.%.%\n%%%%%%".parse().unwrap();
        assert_eq!(
            closest_dot_route(&layout, None).err(),
            Some(SearchError::NoSolution { remaining: 1 })
        );
    }

    #[test]
    fn manhattan_rejected_for_weighted_steps() {
        // a wall block forces a detour through the cheap eastern cells
        let layout: Layout = "\
%%%%%%%%%%%%
%          %
% P        %
%%%%%%     %
%          %
% .        %
%%%%%%%%%%%%"
            .parse()
            .unwrap();
        let goal = Position::new(2, 1);
        let astar = SearchAgent::new(
            SearchAlgorithm::AStar,
            ProblemKind::Position,
            HeuristicKind::Manhattan,
        )
        .unwrap();
        assert_eq!(
            astar.with_cost(CostPreset::StayEast).err(),
            Some(ConfigError::InadmissibleUnderCost {
                heuristic: "manhattan".into(),
                cost: "stay-east".into(),
            })
        );

        let ucs = SearchAgent::new(
            SearchAlgorithm::UniformCost,
            ProblemKind::Position,
            HeuristicKind::Null,
        )
        .unwrap()
        .with_cost(CostPreset::StayEast)
        .unwrap()
        .with_goal(goal);
        let null_astar = SearchAgent::new(
            SearchAlgorithm::AStar,
            ProblemKind::Position,
            HeuristicKind::Null,
        )
        .unwrap()
        .with_cost(CostPreset::StayEast)
        .unwrap()
        .with_goal(goal);
        let cheapest = ucs.plan(&layout).unwrap();
        assert!(cheapest.cost < 1.0);
        assert_eq!(null_astar.plan(&layout).unwrap().cost, cheapest.cost);
    }

    #[test]
    fn closest_dot_reports_the_search_it_ran() {
        let layout: Layout = "%%%%%%%%\n%.  P .%\n%%%%%%%%".parse().unwrap();
        let agent = SearchAgent::new(
            SearchAlgorithm::DepthFirst,
            ProblemKind::ClosestDot,
            HeuristicKind::Null,
        )
        .unwrap();
        let report = agent.plan(&layout).unwrap();
        assert_eq!(report.algorithm, SearchAlgorithm::BreadthFirst);
        assert!(report.to_string().contains("Algorithm: bfs"));
    }

    #[test]
    fn heuristic_must_fit_problem() {
        assert!(SearchAgent::new(
            SearchAlgorithm::AStar,
            ProblemKind::Corners,
            HeuristicKind::Food
        )
        .is_err());
    }
}
