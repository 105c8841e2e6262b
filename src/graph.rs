use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io::prelude::*;

use bstr::ByteSlice;
use fxhash::FxHashMap;
use log::{debug, warn};

use crate::error::{Error, ParseErrorKind, Result};

pub type AdjacencyList = BTreeSet<usize>;
pub type BTreeGraph = BTreeMap<usize, AdjacencyList>;

/// An undirected adjacency list representation of a labelled graph,
/// including the maps required to go from node labels to graph node
/// indices, and back
#[derive(Default, Debug, Clone)]
pub struct Graph {
    pub graph: BTreeGraph,
    pub inv_names: Vec<String>,
    name_map: FxHashMap<String, usize>,
}

impl Graph {
    /// Reads the whole stream and parses it as adjacency records, see
    /// [`Graph::parse`].
    pub fn from_reader<T: BufRead>(reader: &mut T) -> Result<Graph> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        Graph::parse(&input)
    }

    /// Parses lines of the form `LABEL: N1 N2 N3 ...`, adding an
    /// undirected edge between `LABEL` and every `Ni`. Nodes are
    /// indexed in the order they are first seen. Blank lines are
    /// skipped; any other malformed line is an error.
    pub fn parse(input: &[u8]) -> Result<Graph> {
        let mut graph = Graph::default();

        // `&[u8]` is also a BufRead, so name the bstr method
        for (ix, line) in ByteSlice::lines(input).enumerate() {
            let line_no = ix + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let colon = line
                .find_byte(b':')
                .ok_or_else(|| Error::parse(line_no, ParseErrorKind::MissingColon))?;

            let label = to_label(line[..colon].trim(), line_no)?;
            if label.is_empty() {
                return Err(Error::parse(line_no, ParseErrorKind::EmptyLabel));
            }
            let from = graph.insert_node(label);

            let mut neighbors = 0;
            for field in line[colon + 1..].fields() {
                let to = graph.insert_node(to_label(field, line_no)?);
                graph.add_edge(from, to);
                neighbors += 1;
            }

            if neighbors == 0 {
                return Err(Error::parse(line_no, ParseErrorKind::EmptyNeighbors));
            }
        }

        debug!(
            "parsed graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Builds a graph from pairs of labels; anything that can be
    /// displayed works as a label.
    pub fn from_edges<I, S>(edges: I) -> Graph
    where
        I: IntoIterator<Item = (S, S)>,
        S: ToString,
    {
        let mut graph = Graph::default();
        for (from, to) in edges {
            let from = graph.insert_node(&from.to_string());
            let to = graph.insert_node(&to.to_string());
            graph.add_edge(from, to);
        }
        graph
    }

    /// Returns the index of the node with the given label, adding it
    /// if it isn't in the graph yet.
    pub fn insert_node(&mut self, name: &str) -> usize {
        if let Some(ix) = self.name_map.get(name) {
            *ix
        } else {
            let ix = self.inv_names.len();
            self.name_map.insert(name.to_string(), ix);
            self.inv_names.push(name.to_string());
            self.graph.entry(ix).or_default();
            ix
        }
    }

    /// Adds the undirected edge `from`-`to`. Returns false if the edge
    /// was already present or is a self-loop, which is dropped.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            warn!("dropping self-loop on {}", self.inv_names[from]);
            return false;
        }
        let inserted = self.graph.entry(from).or_default().insert(to);
        self.graph.entry(to).or_default().insert(from);
        inserted
    }

    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        let removed = self
            .graph
            .get_mut(&from)
            .map_or(false, |adj| adj.remove(&to));
        if let Some(adj) = self.graph.get_mut(&to) {
            adj.remove(&from);
        }
        removed
    }

    /// Removes every edge in `edges`, returning how many were present.
    pub fn remove_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        edges
            .into_iter()
            .filter(|&(from, to)| self.remove_edge(from, to))
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.inv_names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.values().map(|adj| adj.len()).sum::<usize>() / 2
    }

    pub fn name(&self, ix: usize) -> &str {
        &self.inv_names[ix]
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        self.name_map.get(name).copied()
    }

    pub fn neighbors(&self, ix: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph.get(&ix).into_iter().flatten().copied()
    }

    /// Every edge exactly once, as `(lo, hi)` with `lo < hi`, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (&from, adj) in self.graph.iter() {
            edges.extend(adj.range(from + 1..).map(|&to| (from, to)));
        }
        edges
    }

    /// Writes the graph back out in the adjacency record format. Each
    /// edge is listed once, on the line of its lower-indexed endpoint.
    pub fn write_adjacency<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (&from, adj) in self.graph.iter() {
            let mut higher = adj.range(from + 1..).peekable();
            if higher.peek().is_none() {
                continue;
            }
            write!(out, "{}:", self.inv_names[from])?;
            for &to in higher {
                write!(out, " {}", self.inv_names[to])?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn to_label(bytes: &[u8], line: usize) -> Result<&str> {
    bytes
        .to_str()
        .map_err(|_| Error::parse(line, ParseErrorKind::InvalidUtf8))
}
