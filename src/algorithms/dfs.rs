use crate::algorithms::common::{check_limit, reconstruct_path, Parents};
use crate::error::SearchError;
use crate::frontier::{Frontier, Stack};
use crate::grid::Direction;
use crate::problem::SearchProblem;
use rustc_hash::FxHashSet;

/// Graph search that always expands the deepest discovered state first.
///
/// A state may sit on the stack more than once; only its first pop expands
/// it. Returns an empty sequence when no goal is reachable.
pub fn depth_first_search<P: SearchProblem>(problem: &mut P) -> Vec<Direction> {
    match depth_first_search_with_limit(problem, None) {
        Ok(actions) => actions,
        Err(_) => Vec::new(),
    }
}

pub fn depth_first_search_with_limit<P: SearchProblem>(
    problem: &mut P,
    limit: Option<usize>,
) -> Result<Vec<Direction>, SearchError> {
    let start = problem.start_state();
    let mut stack = Stack::new();
    let mut visited = FxHashSet::default();
    let mut parents: Parents<P::State> = Parents::default();
    parents.insert(start.clone(), None);
    stack.push(start);

    let mut expansions = 0;
    while let Some(state) = stack.pop() {
        if !visited.insert(state.clone()) {
            continue;
        }
        if problem.is_goal_state(&state) {
            let path = reconstruct_path(&state, &parents);
            tracing::debug!("dfs: goal after {expansions} expansions, {} actions", path.len());
            return Ok(path);
        }
        check_limit(expansions, limit)?;
        expansions += 1;
        for child in problem.expand(&state) {
            // the latest discoverer owns the parent link, matching stack order
            if !visited.contains(&child.state) {
                parents.insert(child.state.clone(), Some((state.clone(), child.action)));
                stack.push(child.state);
            }
        }
    }
    tracing::debug!("dfs: frontier exhausted after {expansions} expansions");
    Ok(Vec::new())
}
