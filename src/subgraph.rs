use std::collections::{BTreeSet, HashMap, HashSet};

use crate::Graph;

/// Host graph vertex identifier, caller supplied and possibly sparse
pub type Vertex = i64;

/// Directed host edge `(source, target)`
pub type HostEdge = (Vertex, Vertex);

/// Host graph read from input: the vertex set is exactly the edge endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGraph {
    /// Sorted, deduplicated vertex identifiers
    pub vertices: Vec<Vertex>,
    /// Edges in input order
    pub edges: Vec<HostEdge>,
}

impl HostGraph {
    pub fn from_edges(edges: Vec<HostEdge>) -> Self {
        let vertices: BTreeSet<Vertex> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();
        HostGraph {
            vertices: vertices.into_iter().collect(),
            edges,
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

/// Edges of `edges` with both endpoints in `vertex_subset`, in input order
pub fn induced_subgraph(vertex_subset: &[Vertex], edges: &[HostEdge]) -> Vec<HostEdge> {
    let members: HashSet<Vertex> = vertex_subset.iter().copied().collect();
    edges
        .iter()
        .filter(|(u, v)| members.contains(u) && members.contains(v))
        .copied()
        .collect()
}

/// Relabel an induced subgraph onto `0..k` by sorted vertex label.
///
/// Every endpoint must belong to `vertex_subset`, which holds when `edges`
/// comes from [`induced_subgraph`] on the same subset.
pub fn relabel_dense(vertex_subset: &[Vertex], edges: &[HostEdge]) -> Graph {
    let mut sorted = vertex_subset.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let index: HashMap<Vertex, usize> = sorted.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut graph = Graph::new(sorted.len());
    for (u, v) in edges {
        if let (Some(&i), Some(&j)) = (index.get(u), index.get(v)) {
            graph.add_edge(i, j);
        }
    }
    graph
}
