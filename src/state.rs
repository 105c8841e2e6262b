use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fxhash::FxHashMap;

use crate::graph::BTreeGraph;

/// Outcome of one maximum adjacency ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Second to last supernode added
    pub s: usize,
    /// Last supernode added
    pub t: usize,
    /// Total weight of the edges between `t` and everything else
    pub cut: usize,
}

/// Contraction state for the Stoer-Wagner minimum cut. Every node of
/// the input graph starts as its own supernode; merging folds one
/// supernode's edges and members into another.
#[derive(Default, Debug, Clone)]
pub struct State {
    pub weights: Vec<FxHashMap<usize, usize>>,
    pub members: Vec<Vec<usize>>,
    pub alive: Vec<bool>,
    pub num_alive: usize,
}

impl State {
    pub fn initialize(graph: &BTreeGraph) -> State {
        let num_nodes = graph.len();

        let mut weights = vec![FxHashMap::default(); num_nodes];
        for (&from, adj) in graph.iter() {
            weights[from].extend(adj.iter().map(|&to| (to, 1)));
        }

        State {
            weights,
            members: (0..num_nodes).map(|ix| vec![ix]).collect(),
            alive: vec![true; num_nodes],
            num_alive: num_nodes,
        }
    }

    /// Orders the live supernodes by maximum adjacency, starting from
    /// the lowest live index. Ties go to the lower index.
    pub fn phase(&self) -> Phase {
        let num_nodes = self.alive.len();
        let mut added = vec![false; num_nodes];
        let mut connectivity = vec![0usize; num_nodes];

        let mut heap: BinaryHeap<(usize, Reverse<usize>)> = self
            .alive
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(ix, _)| (0, Reverse(ix)))
            .collect();

        let mut s = 0;
        let mut t = 0;
        let mut count = 0;

        while let Some((weight, Reverse(node))) = heap.pop() {
            // stale entry, the node was pushed again with a higher weight
            if added[node] || weight != connectivity[node] {
                continue;
            }

            added[node] = true;
            s = t;
            t = node;
            count += 1;

            if count == self.num_alive {
                break;
            }

            for (&next, &w) in self.weights[node].iter() {
                if !added[next] {
                    connectivity[next] += w;
                    heap.push((connectivity[next], Reverse(next)));
                }
            }
        }

        Phase {
            s,
            t,
            cut: connectivity[t],
        }
    }

    /// Merges supernode `t` into `s`.
    pub fn merge(&mut self, s: usize, t: usize) {
        assert!(s != t && self.alive[s] && self.alive[t]);

        let t_weights = std::mem::take(&mut self.weights[t]);
        for (other, w) in t_weights {
            self.weights[other].remove(&t);
            if other == s {
                continue;
            }
            *self.weights[s].entry(other).or_insert(0) += w;
            *self.weights[other].entry(s).or_insert(0) += w;
        }

        let t_members = std::mem::take(&mut self.members[t]);
        self.members[s].extend(t_members);

        self.alive[t] = false;
        self.num_alive -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    // a path a-b-c-d
    fn path() -> Graph {
        Graph::from_edges(vec![("a", "b"), ("b", "c"), ("c", "d")])
    }

    #[test]
    fn phase_on_path() {
        let graph = path();
        let state = State::initialize(&graph.graph);

        // a, then b, c, d in order of adjacency
        let phase = state.phase();
        assert_eq!(phase, Phase { s: 2, t: 3, cut: 1 });
    }

    #[test]
    fn merge_accumulates_weights() {
        let graph = Graph::from_edges(vec![("a", "b"), ("b", "c"), ("a", "c")]);
        let mut state = State::initialize(&graph.graph);

        state.merge(0, 1);

        assert_eq!(state.num_alive, 2);
        assert!(!state.alive[1]);
        assert_eq!(state.members[0], vec![0, 1]);
        assert_eq!(state.weights[0].get(&2), Some(&2));
        assert_eq!(state.weights[2].get(&0), Some(&2));
        assert!(state.weights[2].get(&1).is_none());
        assert!(state.weights[0].get(&1).is_none());

        let phase = state.phase();
        assert_eq!(phase, Phase { s: 0, t: 2, cut: 2 });
    }
}
