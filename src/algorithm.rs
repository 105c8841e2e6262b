use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::state::State;

/// A global minimum edge cut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    /// Number of edges crossing the cut
    pub weight: usize,
    /// Node indices on one side of the cut, sorted
    pub side: Vec<usize>,
    /// The crossing edges, as `(lo, hi)` node index pairs
    pub edges: Vec<(usize, usize)>,
}

/// Computes a global minimum edge cut with Stoer-Wagner. Among cuts
/// of equal weight the one found in the earliest phase wins, so the
/// result is deterministic for a given graph.
pub fn minimum_cut(graph: &Graph) -> Result<MinCut> {
    let num_nodes = graph.node_count();
    if num_nodes < 2 {
        return Err(Error::TooFewNodes(num_nodes));
    }

    let mut state = State::initialize(&graph.graph);

    let mut best_weight = usize::MAX;
    let mut best_side = Vec::new();

    while state.num_alive > 1 {
        let phase = state.phase();
        trace!(
            "phase {}: merging {} into {}, cut of the phase {}",
            num_nodes - state.num_alive,
            phase.t,
            phase.s,
            phase.cut
        );

        if phase.cut < best_weight {
            best_weight = phase.cut;
            best_side = state.members[phase.t].clone();
        }

        state.merge(phase.s, phase.t);
    }

    best_side.sort_unstable();

    let mut on_side = vec![false; num_nodes];
    for &ix in best_side.iter() {
        on_side[ix] = true;
    }

    let edges: Vec<_> = graph
        .edges()
        .into_iter()
        .filter(|&(from, to)| on_side[from] != on_side[to])
        .collect();
    debug_assert_eq!(edges.len(), best_weight);

    debug!(
        "minimum cut of weight {} separates {} of {} nodes",
        best_weight,
        best_side.len(),
        num_nodes
    );

    Ok(MinCut {
        weight: best_weight,
        side: best_side,
        edges,
    })
}

/// Finds the connected components of the graph, scanning breadth
/// first from each unvisited node in ascending index order.
pub fn connected_components(graph: &Graph) -> Vec<Vec<usize>> {
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for &start in graph.graph.keys() {
        if visited[start] {
            continue;
        }

        visited[start] = true;
        queue.push_back(start);
        let mut component = Vec::new();

        while let Some(node) = queue.pop_front() {
            component.push(node);
            for next in graph.neighbors(node) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        components.push(component);
    }

    components
}

/// Computes a minimum cut of a connected graph and removes the cut
/// edges from it.
pub fn split(graph: &mut Graph) -> Result<MinCut> {
    let components = connected_components(graph).len();
    if components > 1 {
        return Err(Error::Disconnected(components));
    }

    let cut = minimum_cut(graph)?;
    let removed = graph.remove_edges(cut.edges.iter().copied());
    debug!("removed {} cut edges", removed);

    Ok(cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edge() {
        let graph = Graph::from_edges(vec![("a", "b")]);
        let cut = minimum_cut(&graph).unwrap();

        assert_eq!(cut.weight, 1);
        assert_eq!(cut.edges, vec![(0, 1)]);
        assert_eq!(cut.side.len(), 1);
    }

    #[test]
    fn too_few_nodes() {
        let graph = Graph::parse(b"a: a\n").unwrap();
        assert!(matches!(minimum_cut(&graph), Err(Error::TooFewNodes(1))));
        assert!(matches!(
            minimum_cut(&Graph::default()),
            Err(Error::TooFewNodes(0))
        ));
    }

    #[test]
    fn components_in_index_order() {
        let graph = Graph::from_edges(vec![(0, 1), (2, 3), (3, 4), (1, 5)]);
        let comps = connected_components(&graph);

        assert_eq!(comps, vec![vec![0, 1, 5], vec![2, 3, 4]]);
    }

    #[test]
    fn split_rejects_disconnected_input() {
        let mut graph = Graph::from_edges(vec![("a", "b"), ("c", "d")]);
        assert!(matches!(split(&mut graph), Err(Error::Disconnected(2))));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn split_removes_bridge() {
        // two triangles joined by c-x
        let mut graph = Graph::parse(b"a: b c\nb: c\nc: x\nx: y z\ny: z\n").unwrap();
        let c = graph.index("c").unwrap();
        let x = graph.index("x").unwrap();

        let cut = split(&mut graph).unwrap();

        assert_eq!(cut.weight, 1);
        assert_eq!(cut.edges, vec![(c, x)]);
        assert_eq!(cut.side.len(), 3);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(connected_components(&graph).len(), 2);
    }
}
