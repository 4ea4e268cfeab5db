use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use wirepack::io::svg::SvgDrawOptions;
use wirepack::util::ResolveConfig;

use crate::catalogue::WireCatalogue;
use crate::estimate::DEFAULT_ESTIMATE_FACTOR;

/// Configuration of the harness diameter calculator
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HdcConfig {
    /// Configuration of the packing and enclosing circle solvers
    #[serde(default)]
    pub resolve_config: ResolveConfig,
    /// Factor of the quick diameter estimate, `factor * sqrt(total wire area)`
    #[serde(default = "default_estimate_factor")]
    pub estimate_factor: f64,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
    /// Known wire types. If undefined, the built-in catalogue is used
    #[serde(default)]
    pub catalogue: WireCatalogue,
}

impl HdcConfig {
    pub fn validate(&self) -> Result<()> {
        self.resolve_config.validate()?;
        ensure!(
            self.estimate_factor.is_finite() && self.estimate_factor > 0.0,
            "estimate factor should be strictly positive, got {}",
            self.estimate_factor
        );
        for wire in &self.catalogue.wires {
            ensure!(
                wire.diameter_mm.is_finite() && wire.diameter_mm > 0.0,
                "wire type {:?} has an invalid diameter: {}",
                wire.name,
                wire.diameter_mm
            );
        }
        Ok(())
    }
}

fn default_estimate_factor() -> f64 {
    DEFAULT_ESTIMATE_FACTOR
}

impl Default for HdcConfig {
    fn default() -> Self {
        Self {
            resolve_config: ResolveConfig::default(),
            estimate_factor: DEFAULT_ESTIMATE_FACTOR,
            svg_draw_options: SvgDrawOptions::default(),
            catalogue: WireCatalogue::default(),
        }
    }
}
