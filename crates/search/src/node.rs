//! Search nodes and the arena that owns them.

/// Index of a node in a [`NodeArena`]. Only valid for the arena that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// An immutable search node: a state, the action that produced it, and a
/// link to the parent node it was expanded from.
///
/// The root node has `parent = None` and `action = None`. Nodes are never
/// mutated after creation and are never used for traversal bookkeeping;
/// they exist so a finished search can walk parent links back to the root
/// and recover the path.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    pub state: S,
    pub parent: Option<NodeId>,
    pub action: Option<A>,
}

/// Arena owning every node created during one search call.
///
/// Parent links are integer indices into the arena rather than owned back
/// references, so ancestors stay alive for path reconstruction even after
/// they have left the frontier, without any reference cycles.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn push(&mut self, state: S, parent: Option<NodeId>, action: Option<A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state,
            parent,
            action,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Clone, A: Clone> NodeArena<S, A> {
    /// Walk parent links from `goal` back to the root, collecting the
    /// `(action, state)` pair of every non-root node, then reverse so the
    /// steps read source-to-goal. Walking the root itself yields an empty
    /// path.
    pub fn path_from_root(&self, goal: NodeId) -> Vec<(A, S)> {
        let mut steps = Vec::new();
        let mut current = self.get(goal);
        while let Some(parent) = current.parent {
            // Non-root nodes always carry the action that produced them.
            if let Some(action) = &current.action {
                steps.push((action.clone(), current.state.clone()));
            }
            current = self.get(parent);
        }
        steps.reverse();
        steps
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_reconstructs_to_empty_path() {
        let mut arena: NodeArena<&str, &str> = NodeArena::new();
        let root = arena.push("a", None, None);
        assert!(arena.path_from_root(root).is_empty());
    }

    #[test]
    fn path_is_ordered_source_to_goal() {
        let mut arena = NodeArena::new();
        let root = arena.push("a", None, None);
        let b = arena.push("b", Some(root), Some("m1"));
        let c = arena.push("c", Some(b), Some("m2"));

        let path = arena.path_from_root(c);
        assert_eq!(path, vec![("m1", "b"), ("m2", "c")]);
    }

    #[test]
    fn ancestors_stay_reachable_through_parent_indices() {
        let mut arena = NodeArena::new();
        let root = arena.push(0u32, None, None);
        let mut parent = root;
        for i in 1..=50u32 {
            parent = arena.push(i, Some(parent), Some(i));
        }

        let path = arena.path_from_root(parent);
        assert_eq!(path.len(), 50);
        assert_eq!(path[0], (1, 1));
        assert_eq!(path[49], (50, 50));
        assert_eq!(arena.len(), 51);
    }
}
