//! Frontier implementations: the ordered collection of
//! discovered-but-unexpanded nodes.
//!
//! The removal policy is the only decision an implementation makes. FIFO
//! removal ([`QueueFrontier`]) makes the search breadth-first and is what
//! the shortest-path entry point uses; LIFO removal ([`StackFrontier`])
//! gives depth-first search without the shortest-path guarantee.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::EmptyFrontierError;
use crate::node::NodeId;

/// An ordered multiset of not-yet-expanded nodes.
///
/// `add` performs no deduplication; callers consult `contains_state` before
/// adding. Nodes leave only through `remove` — there is no
/// arbitrary-position deletion.
pub trait Frontier<S> {
    fn add(&mut self, id: NodeId, state: S);

    /// Remove and return exactly one node per the ordering policy.
    fn remove(&mut self) -> Result<NodeId, EmptyFrontierError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Whether any currently-held entry has this state.
    fn contains_state(&self, state: &S) -> bool;
}

/// FIFO frontier: breadth-first search.
///
/// Membership queries go through a side-table of per-state entry counts
/// instead of scanning the queue. Counts rather than a flag keep the table
/// correct if a caller ever adds the same state twice.
#[derive(Debug)]
pub struct QueueFrontier<S> {
    entries: VecDeque<(NodeId, S)>,
    present: FxHashMap<S, usize>,
}

impl<S> QueueFrontier<S> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            present: FxHashMap::default(),
        }
    }
}

impl<S: Eq + Hash + Clone> Frontier<S> for QueueFrontier<S> {
    fn add(&mut self, id: NodeId, state: S) {
        *self.present.entry(state.clone()).or_insert(0) += 1;
        self.entries.push_back((id, state));
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontierError> {
        let (id, state) = self.entries.pop_front().ok_or(EmptyFrontierError)?;
        release(&mut self.present, &state);
        Ok(id)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains_state(&self, state: &S) -> bool {
        self.present.contains_key(state)
    }
}

impl<S> Default for QueueFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// LIFO frontier: depth-first search. Same interface, no shortest-path
/// guarantee.
#[derive(Debug)]
pub struct StackFrontier<S> {
    entries: Vec<(NodeId, S)>,
    present: FxHashMap<S, usize>,
}

impl<S> StackFrontier<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            present: FxHashMap::default(),
        }
    }
}

impl<S: Eq + Hash + Clone> Frontier<S> for StackFrontier<S> {
    fn add(&mut self, id: NodeId, state: S) {
        *self.present.entry(state.clone()).or_insert(0) += 1;
        self.entries.push((id, state));
    }

    fn remove(&mut self) -> Result<NodeId, EmptyFrontierError> {
        let (id, state) = self.entries.pop().ok_or(EmptyFrontierError)?;
        release(&mut self.present, &state);
        Ok(id)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn contains_state(&self, state: &S) -> bool {
        self.present.contains_key(state)
    }
}

impl<S> Default for StackFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn release<S: Eq + Hash>(present: &mut FxHashMap<S, usize>, state: &S) {
    if let Some(count) = present.get_mut(state) {
        *count -= 1;
        if *count == 0 {
            present.remove(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeArena;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena: NodeArena<usize, ()> = NodeArena::new();
        (0..n).map(|i| arena.push(i, None, None)).collect()
    }

    #[test]
    fn queue_removes_in_insertion_order() {
        let ids = ids(3);
        let mut frontier = QueueFrontier::new();
        frontier.add(ids[0], "a");
        frontier.add(ids[1], "b");
        frontier.add(ids[2], "c");

        assert_eq!(frontier.remove().unwrap(), ids[0]);
        assert_eq!(frontier.remove().unwrap(), ids[1]);
        assert_eq!(frontier.remove().unwrap(), ids[2]);
    }

    #[test]
    fn stack_removes_in_reverse_insertion_order() {
        let ids = ids(3);
        let mut frontier = StackFrontier::new();
        frontier.add(ids[0], "a");
        frontier.add(ids[1], "b");
        frontier.add(ids[2], "c");

        assert_eq!(frontier.remove().unwrap(), ids[2]);
        assert_eq!(frontier.remove().unwrap(), ids[1]);
        assert_eq!(frontier.remove().unwrap(), ids[0]);
    }

    #[test]
    fn remove_on_empty_is_an_error() {
        let mut frontier: QueueFrontier<&str> = QueueFrontier::new();
        assert_eq!(frontier.remove(), Err(EmptyFrontierError));
        assert!(frontier.is_empty());
    }

    #[test]
    fn contains_state_tracks_membership() {
        let ids = ids(2);
        let mut frontier = QueueFrontier::new();
        assert!(!frontier.contains_state(&"a"));

        frontier.add(ids[0], "a");
        frontier.add(ids[1], "b");
        assert!(frontier.contains_state(&"a"));
        assert!(frontier.contains_state(&"b"));
        assert_eq!(frontier.len(), 2);

        frontier.remove().unwrap();
        assert!(!frontier.contains_state(&"a"));
        assert!(frontier.contains_state(&"b"));
    }

    #[test]
    fn duplicate_states_stay_present_until_both_removed() {
        let ids = ids(2);
        let mut frontier = QueueFrontier::new();
        frontier.add(ids[0], "a");
        frontier.add(ids[1], "a");

        frontier.remove().unwrap();
        assert!(
            frontier.contains_state(&"a"),
            "one entry for the state remains"
        );
        frontier.remove().unwrap();
        assert!(!frontier.contains_state(&"a"));
    }
}
