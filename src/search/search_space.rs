use crate::search::{NodeId, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};
use std::{collections::HashMap, hash::Hash};

/// A [`SearchSpace`] manages the states and nodes seen during a search. Every
/// distinct state is registered exactly once, so duplicate detection is a
/// single hash lookup and the node status tells whether the state is unseen,
/// in the frontier or explored.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_nodes: HashMap<S, NodeId>,
}

impl<S: Clone + Eq + Hash, A> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_without_parent(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Get the node of `state`, registering it as a child of `parent_id` if
    /// it was never seen before. The action is only recorded for new nodes.
    pub fn insert_or_get_node(
        &mut self,
        state: S,
        action: A,
        parent_id: NodeId,
    ) -> &mut SearchNode<A> {
        if let Some(&node_id) = self.registered_nodes.get(&state) {
            return self.get_node_mut(node_id);
        }

        let node_id = NodeId::new(self.nodes.len());
        self.registered_nodes.insert(state.clone(), node_id);
        self.states.push(state);
        self.nodes
            .push(SearchNode::new_with_parent(node_id, parent_id, action));
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<A> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode<A> {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    /// Number of distinct states registered so far.
    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_nodes.is_empty()
    }
}

impl<S: Clone + Eq + Hash, A: Clone> SearchSpace<S, A> {
    /// Follow the parent pointers from `goal_id` back to the root.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }
}
