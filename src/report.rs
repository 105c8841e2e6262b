use std::io::prelude::*;

use log::info;

use crate::algorithm;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// The two halves left after removing a minimum cut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub cut_edges: Vec<(usize, usize)>,
    pub sizes: [usize; 2],
    pub product: usize,
}

impl Partition {
    pub fn from_components(
        cut_edges: Vec<(usize, usize)>,
        components: &[Vec<usize>],
    ) -> Result<Partition> {
        match components {
            [a, b] => {
                let sizes = [a.len(), b.len()];
                Ok(Partition {
                    cut_edges,
                    sizes,
                    product: sizes[0] * sizes[1],
                })
            }
            _ => Err(Error::ComponentCount {
                found: components.len(),
            }),
        }
    }
}

/// Cuts the graph along a global minimum cut and reports the sizes of
/// the two resulting components.
pub fn solve(mut graph: Graph) -> Result<Partition> {
    let cut = algorithm::split(&mut graph)?;
    let components = algorithm::connected_components(&graph);
    let partition = Partition::from_components(cut.edges, &components)?;

    info!(
        "cut {} edges ({}), components of size {} and {}",
        partition.cut_edges.len(),
        partition
            .cut_edges
            .iter()
            .map(|&(from, to)| format!("{}/{}", graph.name(from), graph.name(to)))
            .collect::<Vec<_>>()
            .join(", "),
        partition.sizes[0],
        partition.sizes[1]
    );

    Ok(partition)
}

/// Dumps every node label, then every edge as a pair of labels.
pub fn describe<W: Write>(graph: &Graph, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Edges:")?;
    for name in graph.inv_names.iter() {
        writeln!(out, "{}", name)?;
    }

    writeln!(out)?;
    writeln!(out, "Connections:")?;
    for (from, to) in graph.edges() {
        writeln!(out, "{} {}", graph.name(from), graph.name(to))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_components_required() {
        let one = Partition::from_components(vec![], &[vec![0, 1, 2]]);
        assert!(matches!(one, Err(Error::ComponentCount { found: 1 })));

        let three = Partition::from_components(vec![], &[vec![0], vec![1], vec![2]]);
        assert!(matches!(three, Err(Error::ComponentCount { found: 3 })));

        let two = Partition::from_components(vec![(0, 3)], &[vec![0, 1, 2], vec![3, 4]]).unwrap();
        assert_eq!(two.sizes, [3, 2]);
        assert_eq!(two.product, 6);
    }

    #[test]
    fn describe_output() {
        let graph = Graph::parse(b"a: b c\nb: c\n").unwrap();

        let mut out = Vec::new();
        describe(&graph, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Edges:\na\nb\nc\n\nConnections:\na b\na c\nb c\n"
        );
    }
}
