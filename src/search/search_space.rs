use crate::map::Location;
use crate::search::{states::State, NodeId, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] manages the states and nodes discovered during a single
/// search. Each distinct [`State`] gets exactly one [`SearchNode`], with node
/// ids assigned in discovery order.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<State, Linear>,
    registered_nodes: HashMap<State, NodeId>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state.clone(), root_node_id);
        nodes.push(SearchNode::new_root(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Look up the node of `state`, creating it with the given parent edge if
    /// the state has not been seen before.
    pub fn insert_or_get_node(
        &mut self,
        state: State,
        transition: Location,
        parent_id: NodeId,
    ) -> &mut SearchNode {
        if let Some(&node_id) = self.registered_nodes.get(&state) {
            return self.get_node_mut(node_id);
        }
        let node_id = NodeId::new(self.nodes.len());
        self.registered_nodes.insert(state.clone(), node_id);
        self.states.push(state);
        self.nodes
            .push(SearchNode::new_with_parent(node_id, parent_id, transition));
        self.get_node_mut(node_id)
    }

    /// Walk the parent pointers back from `goal_id` to the root.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(label) = current_node.get_transition() {
                steps.push(label);
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &State {
        self.states.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.registered_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_are_registered_once() {
        let a = Location::new("a");
        let b = Location::new("b");
        let mut search_space = SearchSpace::new(State::new(a));
        let root_id = search_space.get_root_node_mut().get_node_id();

        let first = search_space
            .insert_or_get_node(State::new(b), b, root_id)
            .get_node_id();
        let second = search_space
            .insert_or_get_node(State::new(b), b, root_id)
            .get_node_id();

        assert_eq!(first, second);
        assert_eq!(first, NodeId::new(1));
        assert_eq!(search_space.len(), 2);
        assert_eq!(search_space.get_state(first), &State::new(b));
    }

    #[test]
    fn extract_plan_follows_parents() {
        let [a, b, c] = ["a", "b", "c"].map(Location::new);
        let mut search_space = SearchSpace::new(State::new(a));
        let root_id = search_space.get_root_node_mut().get_node_id();
        let b_id = search_space
            .insert_or_get_node(State::new(b), b, root_id)
            .get_node_id();
        let c_id = search_space
            .insert_or_get_node(State::new(c), c, b_id)
            .get_node_id();

        assert_eq!(search_space.extract_plan(c_id).steps(), &[b, c]);
        assert!(search_space.extract_plan(root_id).is_empty());
    }
}
