//! Census of weakly-connected directed graphs on `k` vertices.
//!
//! Edge subsets are tried by increasing size, in lexicographic combination
//! order over the edge universe, and each weakly-connected graph is kept
//! only if it is not isomorphic to one already accepted.

use std::collections::HashSet;
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::canonical::{canonical_form, is_isomorphic, CanonicalForm};
use crate::config::Limits;
use crate::error::Result;
use crate::{Edge, Graph};

/// Which ordered vertex pairs may carry an edge.
///
/// The motif enumerator always includes self-loop positions; the census
/// excludes them unless asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeUniverse {
    #[default]
    WithoutLoops,
    WithLoops,
}

impl EdgeUniverse {
    /// All candidate edges in row-major order
    pub fn edges(self, k: usize) -> Vec<Edge> {
        (0..k)
            .cartesian_product(0..k)
            .filter(|&(i, j)| i != j || self == EdgeUniverse::WithLoops)
            .collect()
    }
}

/// How accepted graphs are deduplicated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dedup {
    /// Compare each candidate against every accepted graph
    Pairwise,
    /// Hash set of canonical forms
    #[default]
    Canonical,
}

impl FromStr for Dedup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pairwise" => Ok(Dedup::Pairwise),
            "canonical" => Ok(Dedup::Canonical),
            _ => Err(format!(
                "Invalid dedup strategy: {}. Use 'pairwise' or 'canonical'",
                s
            )),
        }
    }
}

/// True when every vertex is reachable from every other ignoring direction.
///
/// The null graph is not considered connected.
pub fn is_weakly_connected(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    if n == 0 {
        return false;
    }

    let mut parent: Vec<usize> = (0..n).collect();
    let mut components = n;
    for (u, v) in graph.edges() {
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        if ru != rv {
            parent[ru] = rv;
            components -= 1;
        }
    }
    components == 1
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// Non-isomorphic weakly-connected graphs on `k` vertices, in acceptance order.
///
/// Subset sizes start at zero, so `k = 1` yields the isolated vertex.
pub fn generate_weakly_connected(
    k: usize,
    universe: EdgeUniverse,
    dedup: Dedup,
    limits: &Limits,
) -> Result<Vec<Graph>> {
    limits.check_census_size(k)?;
    let all_edges = universe.edges(k);
    info!(
        "Trying 2^{} edge subsets (k={}, {:?})",
        all_edges.len(),
        k,
        dedup
    );

    let graphs = match dedup {
        Dedup::Pairwise => pairwise_census(k, &all_edges),
        Dedup::Canonical => canonical_census(k, &all_edges),
    };
    info!("Accepted {} non-isomorphic graphs", graphs.len());
    Ok(graphs)
}

fn build(k: usize, subset: &[&Edge]) -> Graph {
    let mut graph = Graph::new(k);
    for &&(u, v) in subset {
        graph.add_edge(u, v);
    }
    graph
}

fn pairwise_census(k: usize, all_edges: &[Edge]) -> Vec<Graph> {
    let mut graphs: Vec<Graph> = Vec::new();
    for r in 0..=all_edges.len() {
        for subset in all_edges.iter().combinations(r) {
            let graph = build(k, &subset);
            if !is_weakly_connected(&graph) {
                continue;
            }
            if graphs.iter().all(|existing| !is_isomorphic(&graph, existing)) {
                graphs.push(graph);
            }
        }
        debug!("r={}: {} graphs accepted so far", r, graphs.len());
    }
    graphs
}

fn canonical_census(k: usize, all_edges: &[Edge]) -> Vec<Graph> {
    let mut seen: HashSet<CanonicalForm> = HashSet::new();
    let mut graphs = Vec::new();
    for r in 0..=all_edges.len() {
        // forms in parallel, acceptance in combination order
        let candidates: Vec<(Graph, CanonicalForm)> = all_edges
            .iter()
            .combinations(r)
            .collect::<Vec<_>>()
            .into_par_iter()
            .filter_map(|subset| {
                let graph = build(k, &subset);
                if !is_weakly_connected(&graph) {
                    return None;
                }
                let form = canonical_form(&graph);
                Some((graph, form))
            })
            .collect();

        for (graph, form) in candidates {
            if seen.insert(form) {
                graphs.push(graph);
            }
        }
        debug!("r={}: {} graphs accepted so far", r, graphs.len());
    }
    graphs
}
