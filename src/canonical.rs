//! Canonical forms of labeled directed graphs.
//!
//! The canonical form of a graph is the lexicographically smallest adjacency
//! matrix, read row-major, over all `k!` relabelings of its vertices. Two
//! graphs are isomorphic iff their canonical forms are equal.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;

use crate::error::Result;
use crate::permutation::for_each_permutation_with_prefix;
use crate::{Edge, Graph};

/// Below this size the first-vertex fan-out is not worth a rayon task.
const PARALLEL_THRESHOLD: usize = 6;

/// Minimal adjacency matrix of an isomorphism class.
///
/// Ordering is row-major lexicographic, which is what the derived `Ord` on
/// `Vec<Vec<u8>>` gives for square matrices of the same size.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalForm(Vec<Vec<u8>>);

impl CanonicalForm {
    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// Edges of the canonical matrix itself, row-major.
    pub fn to_edges(&self) -> Vec<Edge> {
        self.to_graph().edges()
    }

    pub fn to_graph(&self) -> Graph {
        Graph::from_adjacency_matrix(self.0.clone())
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Canonical form of the graph on `0..k` with the given edges.
///
/// Duplicate edges and self-loops are accepted; endpoints outside `0..k`
/// are rejected.
pub fn canonicalize(k: usize, edges: &[Edge]) -> Result<CanonicalForm> {
    let graph = Graph::from_edges(k, edges)?;
    Ok(canonical_form(&graph))
}

/// Canonical form of an already built graph.
pub fn canonical_form(graph: &Graph) -> CanonicalForm {
    let n = graph.num_vertices();
    if n == 0 {
        return CanonicalForm(Vec::new());
    }

    let firsts = first_vertex_candidates(graph);
    let best = if n >= PARALLEL_THRESHOLD && firsts.len() > 1 {
        firsts
            .par_iter()
            .map(|&first| best_in_subtree(graph, first))
            .min()
    } else {
        firsts
            .iter()
            .map(|&first| best_in_subtree(graph, first))
            .min()
    };

    // firsts is never empty for n > 0
    CanonicalForm(best.unwrap_or_default())
}

/// Vertices that can occupy position 0 of the minimal matrix.
///
/// Row 0 of a relabeled matrix starts with the first vertex's self-loop and
/// its best arrangement puts all other out-neighbours last, so only vertices
/// minimizing `(self-loop, out-degree)` can produce the minimum.
fn first_vertex_candidates(graph: &Graph) -> Vec<usize> {
    let key = |v: usize| {
        let looped = graph.adj[v][v];
        (looped, graph.out_degree(v) - looped as usize)
    };
    let Some(best) = (0..graph.n).map(key).min() else {
        return Vec::new();
    };
    (0..graph.n).filter(|&v| key(v) == best).collect()
}

/// Minimal relabeled matrix among permutations starting with `first`.
fn best_in_subtree(graph: &Graph, first: usize) -> Vec<Vec<u8>> {
    let mut best: Option<Vec<Vec<u8>>> = None;
    for_each_permutation_with_prefix(graph.n, first, |perm| {
        let better = match &best {
            None => true,
            Some(current) => compare_relabeled(graph, perm, current) == Ordering::Less,
        };
        if better {
            best = Some(graph.relabel(perm).adj);
        }
    });
    best.unwrap_or_default()
}

/// Compare the relabeled matrix against `current` without materializing it.
fn compare_relabeled(graph: &Graph, perm: &[usize], current: &[Vec<u8>]) -> Ordering {
    for (i, &pi) in perm.iter().enumerate() {
        for (j, &pj) in perm.iter().enumerate() {
            match graph.adj[pi][pj].cmp(&current[i][j]) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
    }
    Ordering::Equal
}

/// Exact isomorphism test.
///
/// Cheap invariants (edge count, degree multiset) reject most
/// non-isomorphic pairs before the canonical search runs.
pub fn is_isomorphic(a: &Graph, b: &Graph) -> bool {
    if a.num_vertices() != b.num_vertices() || a.edge_count() != b.edge_count() {
        return false;
    }
    if degree_profile(a) != degree_profile(b) {
        return false;
    }
    canonical_form(a) == canonical_form(b)
}

fn degree_profile(graph: &Graph) -> Vec<(u8, usize, usize)> {
    let mut profile: Vec<_> = (0..graph.n)
        .map(|v| (graph.adj[v][v], graph.out_degree(v), graph.in_degree(v)))
        .collect();
    profile.sort_unstable();
    profile
}

/// Memo of canonical forms keyed by adjacency matrix.
///
/// Induced subgraphs of a host graph repeat the same labeled matrix many
/// times, so a counting worker keeps one of these per thread.
#[derive(Debug, Default)]
pub struct CanonicalCache {
    forms: HashMap<Vec<Vec<u8>>, CanonicalForm>,
    hits: usize,
    misses: usize,
}

impl CanonicalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, graph: &Graph) -> CanonicalForm {
        if let Some(form) = self.forms.get(&graph.adj) {
            self.hits += 1;
            return form.clone();
        }
        self.misses += 1;
        let form = canonical_form(graph);
        self.forms.insert(graph.adj.clone(), form.clone());
        form
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
