use crate::map::Location;
use ordered_float::{Float, OrderedFloat};

/// Cumulative path cost. Wrapped in [`OrderedFloat`] so it is totally ordered
/// and can be used as a queue priority.
pub type Cost = OrderedFloat<f64>;

/// Dense identifier of a discovered state, handed out in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline(always)]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded, its cost is final
    Closed,
}

/// A [`SearchNode`] holds the search-specific information about a state: the
/// best known cost to reach it and the edge that achieves that cost.
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    status: SearchNodeStatus,
    /// Lowest cost found so far to reach this node.
    g: Cost,
    /// Label of the transition from the parent, `None` for the root.
    transition: Option<Location>,
    parent_id: NodeId,
}

impl SearchNode {
    pub fn new_root(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: Cost::infinity(),
            transition: None,
            parent_id: NO_NODE,
        }
    }

    pub fn new_with_parent(node_id: NodeId, parent_id: NodeId, transition: Location) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            g: Cost::infinity(),
            transition: Some(transition),
            parent_id,
        }
    }

    pub fn open(&mut self, g: Cost) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
    }

    /// Record a cheaper way of reaching an open node.
    pub fn reopen(&mut self, g: Cost, parent_id: NodeId, transition: Location) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Only open nodes can be given a cheaper parent"
        );
        self.g = g;
        self.parent_id = parent_id;
        self.transition = Some(transition);
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

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<Location> {
        self.transition
    }
}
