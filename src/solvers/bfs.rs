use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use crate::{error::GraphError, graph::Graph};

/// Finds a shortest path from `start` to `end` with breadth-first search.
///
/// The returned path starts with `start`, ends with `end`, and every consecutive
/// pair is an edge of the graph. Fails with [`GraphError::NoPath`] if `end` cannot
/// be reached from `start`.
pub fn shortest_path<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<Vec<N>, GraphError<N>>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    if !graph.contains(end) {
        return Err(GraphError::UnknownNode(end.clone()));
    }

    // Each discovered node maps to the node it was first reached from
    let mut parents: HashMap<&N, Option<&N>> = HashMap::new();
    parents.insert(start, None);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == end {
            break;
        }
        for neighbor in graph.neighbors(current)? {
            if !parents.contains_key(neighbor) {
                parents.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    if !parents.contains_key(end) {
        tracing::debug!("[bfs] {:?} is unreachable from {:?}", end, start);
        return Err(GraphError::NoPath {
            start: start.clone(),
            end: end.clone(),
        });
    }

    // Backtrack from the goal to the start
    let mut path = vec![end.clone()];
    let mut child = end;
    while let Some(&Some(parent)) = parents.get(child) {
        path.push(parent.clone());
        child = parent;
    }
    path.reverse();
    tracing::debug!("[bfs] found a path of {} nodes", path.len());
    Ok(path)
}

/// Number of edges on a shortest path from `start` to every node reachable from it.
pub fn distances<N>(graph: &Graph<N>, start: &N) -> Result<HashMap<N, usize>, GraphError<N>>
where
    N: Eq + Hash + Clone + fmt::Debug,
{
    let mut distances = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let next = distances[current] + 1;
        for neighbor in graph.neighbors(current)? {
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor.clone(), next);
                queue.push_back(neighbor);
            }
        }
    }
    Ok(distances)
}
