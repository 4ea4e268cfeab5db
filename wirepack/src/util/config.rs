use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// Configuration of the Packing Engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Number of equally spaced tangency candidates sampled around every placed circle.
    /// With 0, only positions touching two placed circles are considered.
    pub n_angles: usize,
    /// Overlap between two placed circles that is still accepted, absorbs floating point noise
    pub overlap_tolerance: f64,
    /// Size of the grid cells used to merge near-identical candidate positions
    pub dedup_precision: f64,
    /// The spiral search fallback scans up to `spiral_bound_factor` times the sum of all radii
    pub spiral_bound_factor: f64,
    /// Lower limit of the spiral search bound
    pub min_spiral_bound: f64,
    /// Upper limit on the number of rings scanned by the spiral search
    pub max_spiral_rings: usize,
}

impl PackConfig {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        check("overlap_tolerance", self.overlap_tolerance, self.overlap_tolerance >= 0.0)?;
        check("dedup_precision", self.dedup_precision, self.dedup_precision > 0.0)?;
        check("spiral_bound_factor", self.spiral_bound_factor, self.spiral_bound_factor >= 0.0)?;
        check("min_spiral_bound", self.min_spiral_bound, self.min_spiral_bound >= 0.0)?;
        check("max_spiral_rings", self.max_spiral_rings as f64, self.max_spiral_rings > 0)
    }
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            n_angles: 36,
            overlap_tolerance: 1e-7,
            dedup_precision: 1e-6,
            spiral_bound_factor: 1.5,
            min_spiral_bound: 10.0,
            max_spiral_rings: 512,
        }
    }
}

/// Rule to pick which of the circles sticking out of the candidate enclosing circle is corrected next
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViolatorSelection {
    /// The circle sticking out the furthest, the first one on ties
    #[default]
    MaxExcess,
    /// Uniformly random among all violating circles, drawn from a PRNG with a fixed seed
    Seeded { seed: u64 },
}

/// Configuration of the Enclosing Circle Solver
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct EnclosingConfig {
    /// A circle sticking out by less than this distance is considered enclosed
    pub tolerance: f64,
    /// Maximum number of relaxation steps before giving up on convergence
    pub max_iterations: usize,
    pub selection: ViolatorSelection,
    /// Polish a converged result towards the true minimum enclosing circle
    pub refine: bool,
}

impl EnclosingConfig {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        check("tolerance", self.tolerance, self.tolerance >= 0.0)
    }
}

impl Default for EnclosingConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1500,
            selection: ViolatorSelection::default(),
            refine: true,
        }
    }
}

/// Configuration of the Bundle Diameter Resolver
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct ResolveConfig {
    pub pack_config: PackConfig,
    pub enclosing_config: EnclosingConfig,
    /// Bundles with more circles than this are rejected, packing is cubic in the number of circles
    pub max_circles: usize,
}

impl ResolveConfig {
    /// Checks all parameters, configurations are often read from user supplied files
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        self.pack_config.validate()?;
        self.enclosing_config.validate()
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            pack_config: PackConfig::default(),
            enclosing_config: EnclosingConfig::default(),
            max_circles: 1000,
        }
    }
}

fn check(field: &'static str, value: f64, valid: bool) -> Result<(), InvalidInputError> {
    match value.is_finite() && valid {
        true => Ok(()),
        false => Err(InvalidInputError::InvalidConfig { field, value }),
    }
}
