use crate::error::{MotifError, Result};

/// Directed edge `(source, target)` between dense vertex indices
pub type Edge = (usize, usize);

/// A relabeling of `0..n`: vertex `i` of the relabeled graph is `perm[i]` of the original
pub type Permutation = Vec<usize>;

/// Represents a labeled directed graph with a 0/1 adjacency matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Graph {
    /// Number of vertices
    pub n: usize,
    /// Adjacency matrix: adj[i][j] = 1 iff the edge i -> j is present
    pub adj: Vec<Vec<u8>>,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Graph {
            n,
            adj: vec![vec![0; n]; n],
        }
    }

    /// Build a graph on `0..n` from an edge list. Duplicate edges collapse
    /// into one adjacency entry; self-loops are kept.
    pub fn from_edges(n: usize, edges: &[Edge]) -> Result<Self> {
        let mut graph = Graph::new(n);
        for &(u, v) in edges {
            for vertex in [u, v] {
                if vertex >= n {
                    return Err(MotifError::VertexOutOfRange { vertex, size: n });
                }
            }
            graph.adj[u][v] = 1;
        }
        Ok(graph)
    }

    pub fn from_adjacency_matrix(adj: Vec<Vec<u8>>) -> Self {
        let n = adj.len();
        Graph { n, adj }
    }

    pub fn num_vertices(&self) -> usize {
        self.n
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u][v] != 0
    }

    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adj[u][v] = 1;
    }

    /// Edges in row-major order of the adjacency matrix
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (u, row) in self.adj.iter().enumerate() {
            for (v, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.adj
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell != 0).count())
            .sum()
    }

    pub fn out_degree(&self, u: usize) -> usize {
        self.adj[u].iter().filter(|&&cell| cell != 0).count()
    }

    pub fn in_degree(&self, v: usize) -> usize {
        self.adj.iter().filter(|row| row[v] != 0).count()
    }

    /// Relabeled copy with `A'[i][j] = A[perm[i]][perm[j]]`
    pub fn relabel(&self, perm: &[usize]) -> Graph {
        let adj = perm
            .iter()
            .map(|&pi| perm.iter().map(|&pj| self.adj[pi][pj]).collect())
            .collect();
        Graph { n: self.n, adj }
    }
}

// Module declarations
pub mod canonical;
pub mod census;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod motif;
pub mod parser;
pub mod permutation;
pub mod report;
pub mod subgraph;
pub mod utils;

pub use canonical::{
    canonical_form, canonicalize, is_isomorphic, CanonicalCache, CanonicalForm,
};
pub use census::{generate_weakly_connected, is_weakly_connected, Dedup, EdgeUniverse};
pub use config::Limits;
pub use enumerate::{enumerate_motifs, Motif};
pub use motif::{count_motifs, MotifEntry, MotifTable};
pub use subgraph::{induced_subgraph, relabel_dense, HostEdge, HostGraph, Vertex};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotifError;

    #[test]
    fn test_graph_creation() {
        let g = Graph::new(3);
        assert_eq!(g.num_vertices(), 3);
        assert!(!g.has_edge(0, 0));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_from_edges_collapses_duplicates() {
        let g = Graph::from_edges(3, &[(0, 1), (0, 1), (2, 2)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges(), vec![(0, 1), (2, 2)]);
        assert_eq!(g.out_degree(0), 1);
        assert_eq!(g.in_degree(1), 1);
    }

    #[test]
    fn test_from_edges_rejects_out_of_range() {
        let err = Graph::from_edges(2, &[(0, 2)]).unwrap_err();
        assert!(matches!(
            err,
            MotifError::VertexOutOfRange { vertex: 2, size: 2 }
        ));
    }

    #[test]
    fn test_relabel() {
        // 0 -> 1 relabeled by swapping the two vertices becomes 1 -> 0
        let g = Graph::from_edges(2, &[(0, 1)]).unwrap();
        let swapped = g.relabel(&[1, 0]);
        assert_eq!(swapped.edges(), vec![(1, 0)]);
    }

    #[test]
    fn test_combinations() {
        assert_eq!(utils::num_combinations(5, 2), 10);
        assert_eq!(utils::num_combinations(4, 4), 1);
        assert_eq!(utils::num_combinations(3, 0), 1);
        assert_eq!(utils::num_combinations(2, 3), 0);
    }
}
