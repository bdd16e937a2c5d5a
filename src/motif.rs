//! Counting motif occurrences as induced subgraphs of a host graph.

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::canonical::{CanonicalCache, CanonicalForm};
use crate::config::Limits;
use crate::enumerate::{enumerate_motifs, Motif};
use crate::error::Result;
use crate::subgraph::{induced_subgraph, relabel_dense, HostGraph, Vertex};
use crate::utils::num_combinations;
use crate::Edge;

/// Representative edges and occurrence count of one motif
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifEntry {
    pub edges: Vec<Edge>,
    pub count: usize,
}

/// Canonical form -> (representative, count), iterated in ascending form order.
///
/// Filled in two phases: every class of size `k` is inserted at zero, then
/// host subgraph occurrences are added, so zero-count motifs are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifTable {
    k: usize,
    entries: BTreeMap<CanonicalForm, MotifEntry>,
}

impl MotifTable {
    pub fn new(k: usize, motifs: Vec<Motif>) -> Self {
        let entries = motifs
            .into_iter()
            .map(|motif| {
                let entry = MotifEntry {
                    edges: motif.edges,
                    count: 0,
                };
                (motif.form, entry)
            })
            .collect();
        MotifTable { k, entries }
    }

    pub fn motif_size(&self) -> usize {
        self.k
    }

    /// Add `occurrences` to a known motif. Returns false for an unknown form.
    pub fn record(&mut self, form: &CanonicalForm, occurrences: usize) -> bool {
        match self.entries.get_mut(form) {
            Some(entry) => {
                entry.count += occurrences;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalForm, &MotifEntry)> {
        self.entries.iter()
    }

    pub fn count_of(&self, form: &CanonicalForm) -> Option<usize> {
        self.entries.get(form).map(|entry| entry.count)
    }

    pub fn total_occurrences(&self) -> usize {
        self.entries.values().map(|entry| entry.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-worker partial tally
type Tally = HashMap<CanonicalForm, usize>;

/// Count every size-`k` motif among the induced subgraphs of `host`.
///
/// Vertex subsets are drawn from the sorted vertex list, so the scan order
/// is deterministic; the tally itself does not depend on it.
pub fn count_motifs(host: &HostGraph, k: usize, limits: &Limits) -> Result<MotifTable> {
    let motifs = enumerate_motifs(k, limits)?;
    info!("Found {} unique motifs of size {}", motifs.len(), k);
    let mut table = MotifTable::new(k, motifs);

    let n = host.num_vertices();
    if k > n {
        info!(
            "Motif size {} exceeds the {} host vertices, nothing to count",
            k, n
        );
        return Ok(table);
    }

    info!(
        "Evaluating {} vertex subsets of size {}...",
        num_combinations(n, k),
        k
    );
    let search_start = std::time::Instant::now();

    let tally = if k == 0 {
        let mut tally = Tally::new();
        tally.insert(subset_form(host, &[], &mut CanonicalCache::new()), 1);
        tally
    } else {
        host.vertices
            .iter()
            .copied()
            .combinations(k)
            .par_bridge()
            .fold(
                || (Tally::new(), CanonicalCache::new()),
                |(mut tally, mut cache), subset| {
                    let form = subset_form(host, &subset, &mut cache);
                    *tally.entry(form).or_insert(0) += 1;
                    (tally, cache)
                },
            )
            .map(|(tally, cache)| {
                debug!(
                    "worker cache: {} forms, {} hits, {} misses",
                    cache.len(),
                    cache.hits(),
                    cache.misses()
                );
                tally
            })
            .reduce(Tally::new, |mut left, right| {
                for (form, count) in right {
                    *left.entry(form).or_insert(0) += count;
                }
                left
            })
    };

    for (form, count) in &tally {
        if !table.record(form, *count) {
            warn!("Subgraph form missing from the motif universe:\n{}", form);
        }
    }

    info!(
        "Counted {} subsets in {:.3}s",
        table.total_occurrences(),
        search_start.elapsed().as_secs_f64()
    );
    Ok(table)
}

fn subset_form(host: &HostGraph, subset: &[Vertex], cache: &mut CanonicalCache) -> CanonicalForm {
    let edges = induced_subgraph(subset, &host.edges);
    cache.get_or_compute(&relabel_dense(subset, &edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;

    fn limits() -> Limits {
        Limits::default()
    }

    #[test]
    fn test_single_edge_host() {
        let host = HostGraph::from_edges(vec![(1, 2)]);
        let table = count_motifs(&host, 2, &limits()).unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(table.total_occurrences(), 1);

        let single_edge = canonicalize(2, &[(0, 1)]).unwrap();
        assert_eq!(table.count_of(&single_edge), Some(1));
        for (form, entry) in table.iter() {
            if *form != single_edge {
                assert_eq!(entry.count, 0);
            }
        }
    }

    #[test]
    fn test_counts_sum_to_subset_count() {
        let host = HostGraph::from_edges(vec![
            (1, 2),
            (2, 3),
            (3, 1),
            (3, 4),
            (4, 5),
            (5, 5),
            (10, 1),
        ]);
        let n = host.num_vertices();
        for k in 0..=3 {
            let table = count_motifs(&host, k, &limits()).unwrap();
            assert_eq!(table.total_occurrences(), num_combinations(n, k));
        }
    }

    #[test]
    fn test_motif_larger_than_host() {
        let host = HostGraph::from_edges(vec![(1, 2)]);
        let table = count_motifs(&host, 3, &limits()).unwrap();
        assert_eq!(table.len(), 104);
        assert_eq!(table.total_occurrences(), 0);
    }

    #[test]
    fn test_empty_selection_for_k_zero() {
        let host = HostGraph::from_edges(vec![(1, 2), (2, 3)]);
        let table = count_motifs(&host, 0, &limits()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.total_occurrences(), 1);

        let empty = count_motifs(&HostGraph::from_edges(Vec::new()), 0, &limits()).unwrap();
        assert_eq!(empty.total_occurrences(), 1);
    }

    #[test]
    fn test_triangle_counts() {
        // directed 3-cycle plus a tail; the cycle appears exactly once
        let host = HostGraph::from_edges(vec![(1, 2), (2, 3), (3, 1), (3, 4)]);
        let table = count_motifs(&host, 3, &limits()).unwrap();
        let cycle = canonicalize(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(table.count_of(&cycle), Some(1));
        assert_eq!(table.total_occurrences(), 4);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let host = HostGraph::from_edges(vec![(1, 2), (2, 1)]);
        let table = count_motifs(&host, 2, &limits()).unwrap();
        let forms: Vec<_> = table.iter().map(|(form, _)| form.clone()).collect();
        assert!(forms.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_record_unknown_form() {
        let mut table = MotifTable::new(1, Vec::new());
        let form = canonicalize(1, &[]).unwrap();
        assert!(!table.record(&form, 1));
        assert!(table.is_empty());
    }
}
