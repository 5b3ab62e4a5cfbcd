use crate::grid::Grid;
use crate::heuristics::mst::kruskal_weight;
use crate::heuristics::{as_cost, DistanceCache};
use crate::problem::SearchProblem;
use crate::problems::{FoodSearchProblem, FoodState};
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Memo owned by a [`FoodSearchProblem`].
#[derive(Debug, Default)]
pub struct FoodHeuristicInfo {
    pub(crate) distances: DistanceCache,
    pub(crate) food_pairs_ready: bool,
    /// Spanning tree weight per distinct remaining-food snapshot.
    pub(crate) mst_weights: FxHashMap<Grid, Option<usize>>,
    pub(crate) degrade_above: Option<usize>,
    pub(crate) best_estimate: Option<f64>,
}

impl FoodHeuristicInfo {
    pub fn distances(&self) -> &DistanceCache {
        &self.distances
    }

    pub fn mst_cache_len(&self) -> usize {
        self.mst_weights.len()
    }
}

/// Maze distance to the nearest food plus the weight of a minimum spanning
/// tree over the remaining food, with edges weighted by maze distance.
///
/// Any route that eats everything must reach some food first and then
/// connect all of it, which costs at least the spanning tree, so the
/// estimate never overshoots. Pair distances are exact and the tree weight
/// only shrinks as food is eaten, so it is also consistent.
///
/// With [`FoodSearchProblem::with_degraded_mode`], while more food remains
/// than the threshold, any state whose estimate exceeds the last accepted
/// one is scored `f64::INFINITY`. That prunes hard and gives up optimality.
pub fn food_heuristic(state: &FoodState, problem: &mut FoodSearchProblem) -> f64 {
    if problem.is_goal_state(state) {
        return 0.0;
    }
    let FoodSearchProblem {
        walls, start, info, ..
    } = problem;

    if !info.food_pairs_ready {
        let starting_food = start.food.as_list();
        for (a, b) in starting_food.iter().tuple_combinations() {
            info.distances.get(*a, *b, walls);
        }
        info.food_pairs_ready = true;
        tracing::debug!(
            "memoized {} food distances for {} food",
            info.distances.len(),
            starting_food.len()
        );
    }

    let food = state.food.as_list();

    let mut closest: Option<usize> = None;
    for &target in &food {
        if let Some(d) = info.distances.get(state.position, target, walls) {
            closest = Some(closest.map_or(d, |c| c.min(d)));
            if d <= 1 {
                break;
            }
        }
    }

    let tree = match info.mst_weights.get(&state.food) {
        Some(&weight) => weight,
        None => {
            let edges: Vec<_> = (0..food.len())
                .tuple_combinations()
                .filter_map(|(i, j)| {
                    info.distances
                        .get(food[i], food[j], walls)
                        .map(|weight| (i, j, weight))
                })
                .collect();
            let weight = kruskal_weight(food.len(), edges);
            info.mst_weights.insert(state.food.clone(), weight);
            weight
        }
    };

    let estimate = as_cost(closest) + as_cost(tree);

    if info.degrade_above.is_some_and(|threshold| food.len() > threshold) {
        if *state == *start {
            info.best_estimate = Some(estimate);
        }
        match info.best_estimate {
            Some(best) if estimate > best => return f64::INFINITY,
            _ => info.best_estimate = Some(estimate),
        }
    }
    estimate
}
