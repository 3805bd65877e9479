use crate::search::HeuristicValue;
use ordered_float::Float;

/// Identifies a state registered in a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Generated for the first time, not yet opened
    New,
    /// Node is in the frontier
    Open,
    /// Node has been expanded, it is never opened again
    Closed,
}

/// A [`SearchNode`] holds the search specific information about a state, such
/// as its costs and how it was reached.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Unique identifier of the state
    node_id: NodeId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, i.e. the frontier priority. What it means depends
    /// on the search algorithm.
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost of the best known path to it.
    g: HeuristicValue,
    /// H-value of the node, i.e. the cached heuristic estimate. Uninformed
    /// searches leave it at zero.
    h: HeuristicValue,
    /// Action that led to this node, `None` for the root
    action: Option<A>,
    /// Parent node
    parent_id: NodeId,
}

impl<A> SearchNode<A> {
    /// Create the root node of a search space. For other nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, action: A) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            action: Some(action),
            parent_id,
        }
    }

    /// Open the node with `f = g + h`.
    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.open_with_f(g, h, g + h);
    }

    pub fn open_with_f(&mut self, g: HeuristicValue, h: HeuristicValue, f: HeuristicValue) {
        debug_assert_ne!(
            self.status,
            SearchNodeStatus::Closed,
            "Closed nodes are never reopened"
        );
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = f;
    }

    /// Record a cheaper way of reaching this node.
    pub fn update_parent(&mut self, parent_id: NodeId, action: A) {
        self.parent_id = parent_id;
        self.action = Some(action);
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }
}
