use crate::algorithms::common::{check_limit, reconstruct_path, Parents};
use crate::error::SearchError;
use crate::frontier::{Frontier, Queue};
use crate::grid::Direction;
use crate::problem::SearchProblem;

/// Graph search that expands states in order of discovery. Each state is
/// queued once, when first discovered, so the first goal popped has the
/// fewest actions. Returns an empty sequence when no goal is reachable.
pub fn breadth_first_search<P: SearchProblem>(problem: &mut P) -> Vec<Direction> {
    match breadth_first_search_with_limit(problem, None) {
        Ok(actions) => actions,
        Err(_) => Vec::new(),
    }
}

pub fn breadth_first_search_with_limit<P: SearchProblem>(
    problem: &mut P,
    limit: Option<usize>,
) -> Result<Vec<Direction>, SearchError> {
    let start = problem.start_state();
    let mut queue = Queue::new();
    let mut parents: Parents<P::State> = Parents::default();
    parents.insert(start.clone(), None);
    queue.push(start);

    let mut expansions = 0;
    while let Some(state) = queue.pop() {
        if problem.is_goal_state(&state) {
            let path = reconstruct_path(&state, &parents);
            tracing::debug!("bfs: goal after {expansions} expansions, {} actions", path.len());
            return Ok(path);
        }
        check_limit(expansions, limit)?;
        expansions += 1;
        for child in problem.expand(&state) {
            if !parents.contains_key(&child.state) {
                parents.insert(child.state.clone(), Some((state.clone(), child.action)));
                queue.push(child.state);
            }
        }
    }
    tracing::debug!("bfs: frontier exhausted after {expansions} expansions");
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Layout, Position};
    use crate::problems::PositionSearchProblem;

    #[test]
    fn corridor_goes_straight() {
        let layout: Layout = "%%%%%%%\n%P   .%\n%%%%%%%".parse().unwrap();
        let mut problem = PositionSearchProblem::new(&layout, Position::new(5, 1));
        assert_eq!(breadth_first_search(&mut problem), vec![Direction::East; 4]);
    }

    #[test]
    fn shortest_around_obstacle() {
        let layout: Layout = "\
%%%%%%%
%     %
% %%% %
%P%  .%
%%%%%%%"
            .parse()
            .unwrap();
        let mut problem = PositionSearchProblem::new(&layout, Position::new(5, 1));
        let path = breadth_first_search(&mut problem);
        assert_eq!(path.len(), 8);
        assert_eq!(problem.cost_of_actions(Some(path.as_slice())), 8.0);
    }

    #[test]
    fn unreachable_goal_is_empty() {
        let layout: Layout = "%%%%%%\n%P%..%\n%%%%%%".parse().unwrap();
        let mut problem = PositionSearchProblem::new(&layout, Position::new(4, 1));
        assert!(breadth_first_search(&mut problem).is_empty());
        assert_eq!(problem.expanded(), 1);
    }
}
