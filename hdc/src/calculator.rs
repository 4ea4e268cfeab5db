use anyhow::{Context, Result};
use log::{info, warn};
use thousands::Separable;
use wirepack::resolver;

use crate::config::HdcConfig;
use crate::estimate;
use crate::harness::Harness;
use crate::io::output::HdcOutput;

/// Packs the wires of `harness` and computes the diameter of the bundle.
/// `margin_override` replaces the margin defined in the harness.
pub fn calculate(harness: &Harness, margin_override: Option<f64>, config: &HdcConfig) -> Result<HdcOutput> {
    let circles = harness.to_circles(&config.catalogue)?;
    let margin = margin_override.unwrap_or(harness.margin);

    let bundle = resolver::resolve(circles, margin, &config.resolve_config)
        .with_context(|| format!("could not resolve harness {:?}", harness.name))?;

    info!(
        "[CALC] {:?}: {} wires, diameter: {:.3} mm, with margin: {:.3} mm, density: {:.2}%, {} candidates tested",
        harness.name,
        bundle.layout.len(),
        bundle.outer_diameter,
        bundle.outer_diameter_with_margin,
        bundle.density() * 100.0,
        bundle.stats.n_candidates.separate_with_commas()
    );
    if !bundle.enclosing.converged {
        warn!(
            "[CALC] enclosing circle did not converge after {} iterations, the diameter is an upper bound",
            bundle.enclosing.iterations
        );
    }
    if bundle.stats.n_fallbacks() > 0 {
        warn!(
            "[CALC] {} wires placed by fallback ({} spiral, {} edge), the layout may not be compact",
            bundle.stats.n_fallbacks(),
            bundle.stats.n_spiral,
            bundle.stats.n_edge
        );
    }

    let quick_estimate_mm =
        estimate::harness_quick_diameter(harness, &config.catalogue, config.estimate_factor)?;
    info!("[CALC] quick estimate: {quick_estimate_mm:.3} mm");

    Ok(HdcOutput {
        harness: harness.clone(),
        quick_estimate_mm,
        bundle,
        config: config.clone(),
    })
}
