use crate::algorithms::common::{check_limit, reconstruct_path, Parents};
use crate::error::SearchError;
use crate::frontier::PriorityQueue;
use crate::grid::Direction;
use crate::heuristics::{null_heuristic, Heuristic};
use crate::problem::SearchProblem;
use rustc_hash::FxHashMap;

/// Best-first search ordered by `g + h`.
///
/// `g` is the cheapest known cost from the start; a state is queued again
/// whenever a strictly cheaper path to it turns up. The goal test runs when a
/// state is popped, before it is expanded, so with an admissible and
/// consistent `heuristic` the returned path has minimum total cost.
///
/// Returns an empty sequence when no goal is reachable.
pub fn a_star_search<P, H>(problem: &mut P, heuristic: &H) -> Vec<Direction>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    match a_star_search_with_limit(problem, heuristic, None) {
        Ok(actions) => actions,
        Err(_) => Vec::new(),
    }
}

/// A* with the zero heuristic.
pub fn uniform_cost_search<P: SearchProblem>(problem: &mut P) -> Vec<Direction> {
    a_star_search(problem, &null_heuristic::<P>)
}

pub fn a_star_search_with_limit<P, H>(
    problem: &mut P,
    heuristic: &H,
    limit: Option<usize>,
) -> Result<Vec<Direction>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    let start = problem.start_state();
    let mut frontier = PriorityQueue::new();
    let mut parents: Parents<P::State> = Parents::default();
    let mut cost: FxHashMap<P::State, f64> = FxHashMap::default();

    let h = heuristic.estimate(&start, problem);
    parents.insert(start.clone(), None);
    cost.insert(start.clone(), 0.0);
    frontier.push((start, 0.0), h);

    let mut expansions = 0;
    while let Some((state, g)) = frontier.pop() {
        if problem.is_goal_state(&state) {
            let path = reconstruct_path(&state, &parents);
            tracing::debug!(
                "astar: goal at cost {g} after {expansions} expansions, {} actions",
                path.len()
            );
            return Ok(path);
        }
        // A cheaper copy of this state was queued after this one.
        if cost.get(&state).is_some_and(|&best| g > best) {
            continue;
        }
        check_limit(expansions, limit)?;
        expansions += 1;
        for child in problem.expand(&state) {
            let total = g + child.cost;
            let improved = cost.get(&child.state).map_or(true, |&known| total < known);
            if improved {
                let h = heuristic.estimate(&child.state, problem);
                cost.insert(child.state.clone(), total);
                parents.insert(child.state.clone(), Some((state.clone(), child.action)));
                frontier.push((child.state, total), total + h);
            }
        }
    }
    tracing::debug!("astar: frontier exhausted after {expansions} expansions");
    Ok(Vec::new())
}
