//! The expansion loop: frontier + explored set + adjacency function.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::frontier::{Frontier, QueueFrontier, StackFrontier};
use crate::node::NodeArena;

/// Adjacency function over the states being searched.
///
/// `neighbors` must be a pure query with stable results for the lifetime of
/// one search. It may yield a pair whose state equals the queried state;
/// the engine's explored set absorbs those without looping.
pub trait SearchSpace {
    type State: Eq + Hash + Clone;
    type Action: Clone;

    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;
}

/// Knobs for one search call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchPolicy {
    /// Abort and report "not connected" once this many nodes have been
    /// expanded. `None` leaves the search unbounded.
    pub max_expansions: Option<usize>,
}

/// Breadth-first shortest path from `source` to `target`.
///
/// Returns the ordered `(action, state)` steps from just after `source` up
/// to `target`: `Ok(Some(vec![]))` when `source == target` (degree 0) and
/// `Ok(None)` when the two states are not connected.
///
/// Unknown states are a caller precondition; the engine cannot tell an
/// unknown state from one with no neighbors and will report `Ok(None)`.
pub fn shortest_path<W: SearchSpace>(
    space: &W,
    source: W::State,
    target: &W::State,
) -> Result<Option<Vec<(W::Action, W::State)>>, SearchError> {
    shortest_path_with(space, source, target, SearchPolicy::default())
}

/// [`shortest_path`] with an explicit [`SearchPolicy`].
pub fn shortest_path_with<W: SearchSpace>(
    space: &W,
    source: W::State,
    target: &W::State,
    policy: SearchPolicy,
) -> Result<Option<Vec<(W::Action, W::State)>>, SearchError> {
    let mut frontier = QueueFrontier::new();
    search(space, &mut frontier, source, target, policy)
}

/// Depth-first variant over the same interface. Finds a path when one
/// exists but promises nothing about its length.
pub fn depth_first_path<W: SearchSpace>(
    space: &W,
    source: W::State,
    target: &W::State,
    policy: SearchPolicy,
) -> Result<Option<Vec<(W::Action, W::State)>>, SearchError> {
    let mut frontier = StackFrontier::new();
    search(space, &mut frontier, source, target, policy)
}

/// Run the expansion loop with any frontier policy.
///
/// Children are enqueued only when their state is neither explored nor
/// already present in the frontier, so no state ever appears in both at
/// once and no state is expanded twice.
pub fn search<W, F>(
    space: &W,
    frontier: &mut F,
    source: W::State,
    target: &W::State,
    policy: SearchPolicy,
) -> Result<Option<Vec<(W::Action, W::State)>>, SearchError>
where
    W: SearchSpace,
    F: Frontier<W::State>,
{
    // Degree 0: answered before any node machinery runs.
    if source == *target {
        return Ok(Some(Vec::new()));
    }

    let mut arena = NodeArena::new();
    let mut explored: FxHashSet<W::State> = FxHashSet::default();

    let root = arena.push(source.clone(), None, None);
    frontier.add(root, source);

    let mut expansions = 0usize;
    loop {
        if frontier.is_empty() {
            debug!(expansions, "frontier exhausted, states not connected");
            return Ok(None);
        }
        if let Some(max) = policy.max_expansions {
            if expansions >= max {
                warn!(max, "expansion budget exceeded, reporting not connected");
                return Ok(None);
            }
        }

        // Guarded by the is_empty check above; an underflow here is a
        // logic fault in this loop, surfaced as SearchError::EmptyFrontier.
        let id = frontier.remove()?;
        let state = arena.get(id).state.clone();

        if state == *target {
            return Ok(Some(arena.path_from_root(id)));
        }

        explored.insert(state.clone());
        expansions += 1;

        for (action, neighbor) in space.neighbors(&state) {
            if explored.contains(&neighbor) || frontier.contains_state(&neighbor) {
                continue;
            }
            let child = arena.push(neighbor.clone(), Some(id), Some(action));
            frontier.add(child, neighbor);
        }
    }
}
