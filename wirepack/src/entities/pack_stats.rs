use serde::{Deserialize, Serialize};

/// Counters collected while packing, mainly to judge the quality of a layout.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackStats {
    /// Candidate positions tested for overlap
    pub n_candidates: usize,
    /// Circles placed at a tangency candidate (including the first one at the origin)
    pub n_tangent: usize,
    /// Circles placed by the spiral search fallback
    pub n_spiral: usize,
    /// Circles placed on the x-axis beyond everything else
    pub n_edge: usize,
}

impl PackStats {
    /// Number of circles that could not be placed at a tangency candidate
    pub fn n_fallbacks(&self) -> usize {
        self.n_spiral + self.n_edge
    }
}
