//! Search nodes and the per-invocation node arena.
//!
//! Nodes reference their parents by integer handle rather than by owning
//! pointer, so siblings share a parent without reference counting and an
//! entire search graph is freed at once when its arena drops.

use std::ops::Index;

/// Handle to a [`SearchNode`] inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena slot this handle points at.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable node on a parent-linked path back to the start state.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// The state this node reaches.
    pub state: S,
    /// Handle of the parent node; `None` for the root.
    pub parent: Option<NodeId>,
    /// Action taken from the parent state; `None` for the root.
    pub action: Option<A>,
    /// Sum of action costs from the root to this node.
    pub cumulative_cost: f64,
}

/// Append-only store owning every node created by one search invocation.
///
/// Handles returned by [`NodeArena::root`] and [`NodeArena::child`] are
/// only meaningful for the arena that issued them.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocates the root node: no parent, no action, zero cost.
    pub fn root(&mut self, state: S) -> NodeId {
        self.alloc(state, None, None, 0.0)
    }

    /// Allocates a child of `parent` reached by `action` at `step_cost`.
    ///
    /// The child's cumulative cost is derived here, as the parent's
    /// cumulative cost plus `step_cost`, which keeps the path-sum
    /// invariant in one place.
    pub fn child(&mut self, state: S, parent: NodeId, action: A, step_cost: f64) -> NodeId {
        let cumulative_cost = self.nodes[parent.0].cumulative_cost + step_cost;
        self.alloc(state, Some(parent), Some(action), cumulative_cost)
    }

    fn alloc(
        &mut self,
        state: S,
        parent: Option<NodeId>,
        action: Option<A>,
        cumulative_cost: f64,
    ) -> NodeId {
        self.nodes.push(SearchNode {
            state,
            parent,
            action,
            cumulative_cost,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Reconstructs the action sequence from the root to `id` by walking
    /// parent handles and reversing. Empty for the root itself.
    pub fn actions_to(&self, id: NodeId) -> Vec<A>
    where
        A: Clone,
    {
        let mut actions = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = &self.nodes[current.0];
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            cursor = node.parent;
        }
        actions.reverse();
        actions
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Index<NodeId> for NodeArena<S, A> {
    type Output = SearchNode<S, A>;

    fn index(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent_no_action_zero_cost() {
        let mut arena: NodeArena<u32, char> = NodeArena::new();
        let root = arena.root(7);

        let node = &arena[root];
        assert_eq!(node.state, 7);
        assert!(node.parent.is_none());
        assert!(node.action.is_none());
        assert_eq!(node.cumulative_cost, 0.0);
        assert!(arena.actions_to(root).is_empty());
    }

    #[test]
    fn child_cost_accumulates_along_parent_chain() {
        let mut arena: NodeArena<u32, char> = NodeArena::new();
        let root = arena.root(0);
        let a = arena.child(1, root, 'a', 2.0);
        let b = arena.child(2, a, 'b', 3.5);

        assert_eq!(arena[a].cumulative_cost, 2.0);
        assert_eq!(arena[b].cumulative_cost, 5.5);
    }

    #[test]
    fn actions_reconstructed_in_execution_order() {
        let mut arena: NodeArena<u32, char> = NodeArena::new();
        let root = arena.root(0);
        let a = arena.child(1, root, 'a', 1.0);
        let b = arena.child(2, a, 'b', 1.0);
        let c = arena.child(3, b, 'c', 1.0);

        assert_eq!(arena.actions_to(c), vec!['a', 'b', 'c']);
    }

    #[test]
    fn siblings_share_a_parent() {
        let mut arena: NodeArena<u32, char> = NodeArena::new();
        let root = arena.root(0);
        let left = arena.child(1, root, 'l', 1.0);
        let right = arena.child(2, root, 'r', 1.0);

        assert_eq!(arena[left].parent, Some(root));
        assert_eq!(arena[right].parent, Some(root));
        assert_eq!(arena.actions_to(left), vec!['l']);
        assert_eq!(arena.actions_to(right), vec!['r']);
        assert_eq!(arena.len(), 3);
    }
}
