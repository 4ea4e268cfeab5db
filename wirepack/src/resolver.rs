//! Bundle Diameter Resolver: packs the circles, encloses the packing and derives the bundle diameter.

use log::debug;

use crate::InvalidInputError;
use crate::enclosing;
use crate::entities::{BundleResult, UnplacedCircle};
use crate::geometry::geo_traits::Shape;
use crate::packing::Packer;
use crate::util::ResolveConfig;
use crate::util::assertions;

/// Computes the layout and outer diameter of a bundle of `circles`, with a uniform `margin` around it.
///
/// Fails if the configuration is invalid, if there are no circles or too many circles,
/// if a radius is not strictly positive and finite, or if the margin is negative (or non-finite).
/// A layout relying on fallback placements or an enclosing circle that did not converge are not errors,
/// check [`BundleResult::stats`] and [`EnclosingResult::converged`](crate::entities::EnclosingResult::converged).
pub fn resolve<L, P>(
    circles: Vec<UnplacedCircle<L, P>>,
    margin: f64,
    config: &ResolveConfig,
) -> Result<BundleResult<L, P>, InvalidInputError> {
    validate(&circles, margin, config)?;

    let mut packer = Packer::new(config.pack_config);
    let layout = packer.pack(circles);
    let stats = packer.stats;

    let enclosing = enclosing::min_enclosing(
        &assertions::layout_circles(&layout),
        &config.enclosing_config,
    );

    let bundle = BundleResult {
        outer_diameter: enclosing.circle().diameter(),
        outer_diameter_with_margin: 2.0 * (enclosing.radius + margin),
        layout,
        enclosing,
        margin,
        stats,
    };

    debug!(
        "[RESOLVE] {} circles packed into diameter {:.4} ({:.4} with margin), density: {:.2}%, fallbacks: {}",
        bundle.layout.len(),
        bundle.outer_diameter,
        bundle.outer_diameter_with_margin,
        bundle.density() * 100.0,
        stats.n_fallbacks()
    );
    debug_assert!(assertions::bundle_is_consistent(
        &bundle,
        config.pack_config.overlap_tolerance,
        config.enclosing_config.tolerance
    ));

    Ok(bundle)
}

/// Checks the input of [resolve]
pub fn validate<L, P>(
    circles: &[UnplacedCircle<L, P>],
    margin: f64,
    config: &ResolveConfig,
) -> Result<(), InvalidInputError> {
    config.validate()?;
    if circles.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    if circles.len() > config.max_circles {
        return Err(InvalidInputError::TooManyCircles {
            n_circles: circles.len(),
            max_circles: config.max_circles,
        });
    }
    if let Some((index, c)) = circles
        .iter()
        .enumerate()
        .find(|(_, c)| !(c.radius.is_finite() && c.radius > 0.0))
    {
        return Err(InvalidInputError::InvalidRadius {
            index,
            radius: c.radius,
        });
    }
    if !(margin.is_finite() && margin >= 0.0) {
        return Err(InvalidInputError::InvalidMargin(margin));
    }
    Ok(())
}
