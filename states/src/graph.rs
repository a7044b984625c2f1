use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("cycle detected in dependency graph involving {0:?}")]
    CycleDetected(Vec<T>),
}

/// Directed dependency graph. An edge `from -> to` means `to` must be
/// recomputed when `from` changes.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    pub fn route_to(&mut self, from: Node, to: Node) {
        self.edges.entry(from).or_default().insert(to);
    }

    /// Every node reachable from `from`, excluding `from` itself (unless it
    /// sits on a cycle through itself).
    pub fn dependents_of(&self, from: Node) -> BTreeSet<Node> {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([from]);
        while let Some(node) = queue.pop_front() {
            if let Some(nexts) = self.edges.get(&node) {
                for next in nexts {
                    if seen.insert(*next) {
                        queue.push_back(*next);
                    }
                }
            }
        }
        seen
    }

    /// Kahn's algorithm over every node mentioned by an edge.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree = BTreeMap::<Node, usize>::new();
        for (from, tos) in &self.edges {
            in_degree.entry(*from).or_insert(0);
            for to in tos {
                *in_degree.entry(*to).or_insert(0) += 1;
            }
        }

        let mut ready: VecDeque<Node> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut order = Vec::with_capacity(in_degree.len());

        while let Some(node) = ready.pop_front() {
            order.push(node);
            if let Some(tos) = self.edges.get(&node) {
                for to in tos {
                    let degree = in_degree.get_mut(to).expect("edge target is tracked");
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(*to);
                    }
                }
            }
        }

        if order.len() != in_degree.len() {
            let stuck: Vec<Node> = in_degree
                .keys()
                .filter(|node| !order.contains(node))
                .copied()
                .collect();
            return Err(TopologyError::CycleDetected(stuck));
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_orders_dependencies_first() {
        let mut graph = Graph::new();
        graph.route_to("store", "visible");
        graph.route_to("params", "visible");
        graph.route_to("visible", "summary");

        let order = graph.topology_sort().unwrap();
        let pos = |node: &str| order.iter().position(|n| *n == node).unwrap();

        assert!(pos("store") < pos("visible"));
        assert!(pos("params") < pos("visible"));
        assert!(pos("visible") < pos("summary"));
    }

    #[test]
    fn cycle_is_detected() {
        let mut graph = Graph::new();
        graph.route_to("a", "b");
        graph.route_to("b", "a");

        assert!(matches!(
            graph.topology_sort(),
            Err(TopologyError::CycleDetected(_))
        ));
    }

    #[test]
    fn dependents_are_transitive() {
        let mut graph = Graph::new();
        graph.route_to("store", "visible");
        graph.route_to("visible", "summary");

        let dependents = graph.dependents_of("store");
        assert!(dependents.contains("visible"));
        assert!(dependents.contains("summary"));
        assert!(!dependents.contains("store"));
    }

    #[test]
    fn dependents_of_leaf_is_empty() {
        let mut graph = Graph::new();
        graph.route_to("store", "visible");

        assert!(graph.dependents_of("visible").is_empty());
    }
}
