use crate::error::{MotifError, Result};

/// Default ceiling for the motif enumerator: 2^16 masks times 4! relabelings.
pub const DEFAULT_MAX_MOTIF_SIZE: usize = 4;

/// Default ceiling for the weakly-connected census: 2^12 edge subsets.
pub const DEFAULT_MAX_CENSUS_SIZE: usize = 4;

/// Size ceilings guarding the exponential generators.
///
/// The motif enumerator costs `O(2^(k²) · k!)` and the census
/// `O(2^(k·(k-1)))` subsets, so both hit a hard wall a few vertices
/// past the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_motif_size: usize,
    pub max_census_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_motif_size: DEFAULT_MAX_MOTIF_SIZE,
            max_census_size: DEFAULT_MAX_CENSUS_SIZE,
        }
    }
}

impl Limits {
    /// Same ceiling for both generators, used when a binary takes `--max-size`.
    pub fn with_max_size(max_size: usize) -> Self {
        Limits {
            max_motif_size: max_size,
            max_census_size: max_size,
        }
    }

    pub fn check_motif_size(&self, k: usize) -> Result<()> {
        check("Motif", k, self.max_motif_size)
    }

    pub fn check_census_size(&self, k: usize) -> Result<()> {
        check("Census", k, self.max_census_size)
    }
}

fn check(what: &'static str, size: usize, limit: usize) -> Result<()> {
    if size > limit {
        return Err(MotifError::SizeTooLarge { what, size, limit });
    }
    Ok(())
}
