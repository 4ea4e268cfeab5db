//! Quick estimate of the bundle diameter from the summed wire areas, without packing.

use anyhow::Result;

use crate::catalogue::WireCatalogue;
use crate::harness::Harness;

/// Empirical factor between the square root of the summed wire areas and the bundle diameter
pub const DEFAULT_ESTIMATE_FACTOR: f64 = 1.3;

/// `factor * sqrt(total_area)`, zero for an empty bundle
pub fn quick_diameter(total_area: f64, factor: f64) -> f64 {
    match total_area > 0.0 {
        true => factor * total_area.sqrt(),
        false => 0.0,
    }
}

pub fn harness_quick_diameter(harness: &Harness, catalogue: &WireCatalogue, factor: f64) -> Result<f64> {
    Ok(quick_diameter(harness.total_area(catalogue)?, factor))
}
