//! Every directed graph on `k` vertices, up to isomorphism.
//!
//! The scan walks all `2^(k²)` adjacency bitmasks, self-loop positions
//! included, and canonicalizes each one. Cost is `O(2^(k²) · k!)`, so the
//! scan is only tractable for `k ≤ 4` and is guarded by [`Limits`].

use std::collections::HashMap;

use log::{debug, info};
use rayon::prelude::*;

use crate::canonical::{canonical_form, CanonicalForm};
use crate::config::Limits;
use crate::error::{MotifError, Result};
use crate::{Edge, Graph};

/// Masks are `u64`, so `k²` must stay below 64 whatever the configured limit.
const MAX_MASK_BITS: usize = 63;

/// One isomorphism class with the first edge list that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    pub form: CanonicalForm,
    pub edges: Vec<Edge>,
}

/// Decode mask bit `i·k + j` into edge `(i, j)`, in ascending bit order
pub fn mask_to_edges(k: usize, mask: u64) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..k {
        for j in 0..k {
            if mask & (1u64 << (i * k + j)) != 0 {
                edges.push((i, j));
            }
        }
    }
    edges
}

fn mask_to_graph(k: usize, mask: u64) -> Graph {
    let mut graph = Graph::new(k);
    for (i, j) in mask_to_edges(k, mask) {
        graph.add_edge(i, j);
    }
    graph
}

/// All isomorphism classes of directed graphs on `k` vertices, sorted by
/// canonical form.
///
/// The representative of each class is the edge list of the lowest mask
/// that reaches it, which is what a sequential first-writer-wins scan
/// keeps, independent of how rayon splits the range.
pub fn enumerate_motifs(k: usize, limits: &Limits) -> Result<Vec<Motif>> {
    limits.check_motif_size(k)?;
    if k * k > MAX_MASK_BITS {
        return Err(MotifError::SizeTooLarge {
            what: "Motif",
            size: k,
            limit: 7,
        });
    }

    let total_masks = 1u64 << (k * k);
    info!("Enumerating {} adjacency masks for k={}", total_masks, k);

    let first_masks: HashMap<CanonicalForm, u64> = (0..total_masks)
        .into_par_iter()
        .fold(HashMap::new, |mut acc, mask| {
            let form = canonical_form(&mask_to_graph(k, mask));
            keep_lowest(&mut acc, form, mask);
            acc
        })
        .reduce(HashMap::new, |mut left, right| {
            for (form, mask) in right {
                keep_lowest(&mut left, form, mask);
            }
            left
        });

    let mut motifs: Vec<Motif> = first_masks
        .into_iter()
        .map(|(form, mask)| Motif {
            form,
            edges: mask_to_edges(k, mask),
        })
        .collect();
    motifs.sort_by(|a, b| a.form.cmp(&b.form));

    debug!("k={} yields {} isomorphism classes", k, motifs.len());
    Ok(motifs)
}

fn keep_lowest(acc: &mut HashMap<CanonicalForm, u64>, form: CanonicalForm, mask: u64) {
    acc.entry(form)
        .and_modify(|current| *current = (*current).min(mask))
        .or_insert(mask);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_decoding() {
        // bit 1 is (0, 1), bit 2 is (1, 0) for k = 2
        assert_eq!(mask_to_edges(2, 0b0110), vec![(0, 1), (1, 0)]);
        assert!(mask_to_edges(3, 0).is_empty());
    }

    #[test]
    fn test_class_counts_with_self_loops() {
        // OEIS A000595
        let limits = Limits::default();
        let counts: Vec<usize> = (0..=3)
            .map(|k| enumerate_motifs(k, &limits).unwrap().len())
            .collect();
        assert_eq!(counts, vec![1, 2, 10, 104]);
    }

    #[test]
    fn test_sorted_and_first_mask_representatives() {
        let motifs = enumerate_motifs(2, &Limits::default()).unwrap();
        assert!(motifs.windows(2).all(|w| w[0].form < w[1].form));
        // the empty graph is both the smallest form and mask 0
        assert!(motifs[0].edges.is_empty());
        // the single edge class is first reached by mask 0b0010
        let single_edge = motifs
            .iter()
            .find(|m| m.form.matrix() == [vec![0u8, 0], vec![1u8, 0]].as_slice())
            .unwrap();
        assert_eq!(single_edge.edges, vec![(0, 1)]);
    }

    #[test]
    fn test_representatives_match_their_form() {
        let motifs = enumerate_motifs(3, &Limits::default()).unwrap();
        for motif in motifs {
            let graph = Graph::from_edges(3, &motif.edges).unwrap();
            assert_eq!(canonical_form(&graph), motif.form);
        }
    }

    #[test]
    fn test_deterministic() {
        let first = enumerate_motifs(3, &Limits::default()).unwrap();
        let second = enumerate_motifs(3, &Limits::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_guard() {
        let err = enumerate_motifs(5, &Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            MotifError::SizeTooLarge {
                size: 5,
                limit: 4,
                ..
            }
        ));
        assert!(enumerate_motifs(8, &Limits::with_max_size(10)).is_err());
    }
}
