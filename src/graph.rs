use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::error::GraphError;

/// An undirected graph stored as adjacency sets.
///
/// Every edge is recorded in both endpoints' neighbor sets, so `b` is a
/// neighbor of `a` exactly when `a` is a neighbor of `b`. Self-loops are
/// never recorded and, since neighbors live in a set, an edge between the same
/// pair exists at most once.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    adjacency: HashMap<N, HashSet<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // Every edge is stored once per endpoint
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Iterates over every node key, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Iterates over every undirected edge exactly once.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        let mut seen: HashSet<(&N, &N)> = HashSet::new();
        self.adjacency
            .iter()
            .flat_map(|(a, neighbors)| neighbors.iter().map(move |b| (a, b)))
            .filter(move |&(a, b)| {
                // Skip the mirrored direction of an edge already yielded
                if seen.contains(&(b, a)) {
                    false
                } else {
                    seen.insert((a, b));
                    true
                }
            })
    }

    /// Inserts a new node with no edges.
    pub fn add_node(&mut self, node: N) -> Result<(), GraphError<N>> {
        if self.adjacency.contains_key(&node) {
            return Err(GraphError::DuplicateNode(node));
        }
        self.adjacency.insert(node, HashSet::new());
        Ok(())
    }

    /// Connects `a` and `b`. Both must already be in the graph.
    ///
    /// Connecting a node to itself is accepted and ignored, as is adding an
    /// edge that already exists.
    pub fn add_edge(&mut self, a: &N, b: &N) -> Result<(), GraphError<N>> {
        self.check_node(a)?;
        self.check_node(b)?;
        if a == b {
            return Ok(());
        }
        self.neighbors_mut(a)?.insert(b.clone());
        self.neighbors_mut(b)?.insert(a.clone());
        Ok(())
    }

    /// Disconnects `a` and `b`.
    pub fn remove_edge(&mut self, a: &N, b: &N) -> Result<(), GraphError<N>> {
        if !self.adjacent(a, b)? {
            return Err(GraphError::EdgeNotFound(a.clone(), b.clone()));
        }
        self.neighbors_mut(a)?.remove(b);
        self.neighbors_mut(b)?.remove(a);
        Ok(())
    }

    /// Returns the neighbor set of `node`.
    pub fn neighbors(&self, node: &N) -> Result<&HashSet<N>, GraphError<N>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))
    }

    /// Checks whether an edge connects `a` and `b`.
    pub fn adjacent(&self, a: &N, b: &N) -> Result<bool, GraphError<N>> {
        self.check_node(b)?;
        Ok(self.neighbors(a)?.contains(b))
    }

    /// Checks whether any path leads from `a` to `b`.
    ///
    /// Runs an iterative depth-first traversal; the visited set keeps cycles
    /// from being walked twice.
    pub fn is_connected(&self, a: &N, b: &N) -> Result<bool, GraphError<N>> {
        self.check_node(a)?;
        self.check_node(b)?;

        let mut visited = HashSet::from([a]);
        let mut stack = vec![a];
        while let Some(node) = stack.pop() {
            if node == b {
                return Ok(true);
            }
            for neighbor in &self.adjacency[node] {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        Ok(false)
    }

    fn check_node(&self, node: &N) -> Result<(), GraphError<N>> {
        if self.adjacency.contains_key(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node.clone()))
        }
    }

    fn neighbors_mut(&mut self, node: &N) -> Result<&mut HashSet<N>, GraphError<N>> {
        self.adjacency
            .get_mut(node)
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))
    }
}

/// Lists every node followed by its neighbors, one node per line, in sorted order.
impl<N> fmt::Display for Graph<N>
where
    N: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = self.adjacency.iter().collect::<Vec<_>>();
        nodes.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (node, neighbors) in nodes {
            let mut neighbors = neighbors.iter().collect::<Vec<_>>();
            neighbors.sort();
            write!(f, "{:?}:", node)?;
            for neighbor in neighbors {
                write!(f, " {:?}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph<char> {
        let mut graph = Graph::new();
        for node in ['A', 'B', 'C'] {
            graph.add_node(node).unwrap();
        }
        graph.add_edge(&'A', &'B').unwrap();
        graph.add_edge(&'B', &'C').unwrap();
        graph
    }

    #[test]
    fn test_add_node_twice() {
        let mut graph = abc();
        assert_eq!(graph.add_node('A'), Err(GraphError::DuplicateNode('A')));
        assert_eq!(graph.node_count(), 3);
        assert!(graph.neighbors(&'A').unwrap().contains(&'B'));
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = abc();
        assert!(graph.adjacent(&'A', &'B').unwrap());
        assert!(graph.adjacent(&'B', &'A').unwrap());
        assert!(!graph.adjacent(&'A', &'C').unwrap());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_duplicate_edge_is_stored_once() {
        let mut graph = abc();
        graph.add_edge(&'B', &'A').unwrap();
        assert_eq!(graph.neighbors(&'A').unwrap().len(), 1);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_is_ignored() {
        let mut graph = abc();
        let before = graph.neighbors(&'A').unwrap().clone();
        graph.add_edge(&'A', &'A').unwrap();
        assert_eq!(graph.neighbors(&'A').unwrap(), &before);
        assert!(!graph.adjacent(&'A', &'A').unwrap());
    }

    #[test]
    fn test_unknown_nodes() {
        let mut graph = abc();
        assert_eq!(
            graph.add_edge(&'A', &'D'),
            Err(GraphError::UnknownNode('D'))
        );
        // A half-inserted edge must not be left behind
        assert_eq!(graph.neighbors(&'A').unwrap().len(), 1);
        assert_eq!(graph.neighbors(&'D'), Err(GraphError::UnknownNode('D')));
        assert_eq!(graph.adjacent(&'D', &'A'), Err(GraphError::UnknownNode('D')));
        assert_eq!(graph.adjacent(&'A', &'D'), Err(GraphError::UnknownNode('D')));
        assert_eq!(
            graph.is_connected(&'A', &'D'),
            Err(GraphError::UnknownNode('D'))
        );
        assert_eq!(
            graph.remove_edge(&'D', &'A'),
            Err(GraphError::UnknownNode('D'))
        );
        assert_eq!(graph.add_edge(&'D', &'D'), Err(GraphError::UnknownNode('D')));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = abc();
        graph.remove_edge(&'B', &'A').unwrap();
        assert!(!graph.adjacent(&'A', &'B').unwrap());
        assert!(!graph.adjacent(&'B', &'A').unwrap());
        assert_eq!(
            graph.remove_edge(&'A', &'B'),
            Err(GraphError::EdgeNotFound('A', 'B'))
        );
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_is_connected() {
        let mut graph = abc();
        assert!(graph.is_connected(&'A', &'C').unwrap());
        assert!(graph.is_connected(&'C', &'A').unwrap());
        assert!(graph.is_connected(&'A', &'A').unwrap());

        graph.add_node('D').unwrap();
        assert!(!graph.is_connected(&'A', &'D').unwrap());

        // A cycle must not trap the traversal
        graph.add_edge(&'A', &'C').unwrap();
        assert!(!graph.is_connected(&'B', &'D').unwrap());
    }

    #[test]
    fn test_edges_yields_each_edge_once() {
        let graph = abc();
        let mut edges = graph
            .edges()
            .map(|(&a, &b)| if a < b { (a, b) } else { (b, a) })
            .collect::<Vec<_>>();
        edges.sort();
        assert_eq!(edges, vec![('A', 'B'), ('B', 'C')]);
    }

    #[test]
    fn test_nodes() {
        let graph = abc();
        let mut nodes = graph.nodes().copied().collect::<Vec<_>>();
        nodes.sort();
        assert_eq!(nodes, vec!['A', 'B', 'C']);
        assert!(graph.contains(&'B'));
        assert!(!graph.contains(&'Z'));
    }

    #[test]
    fn test_display() {
        let graph = abc();
        assert_eq!(graph.to_string(), "'A': 'B'\n'B': 'A' 'C'\n'C': 'B'\n");
    }
}
