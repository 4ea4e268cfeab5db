//! Estimates the outer diameter of a cable harness bundle.
//!
//! Every wire is a circle in the cross-section of the bundle. The [packing] engine places the circles
//! without overlap in a compact arrangement, the [enclosing] circle solver finds the smallest circle around
//! that arrangement, and the [resolver] combines both into a bundle diameter, with an optional
//! jacket margin. The [io] module renders the result as SVG.

/// Entities: circles before and after placement, and results
pub mod entities;
pub mod enclosing;
/// Geometric primitives and traits
pub mod geometry;
/// Rendering of bundles
pub mod io;
pub mod packing;
pub mod resolver;
/// Configuration and correctness checks
pub mod util;

mod error;

#[doc(inline)]
pub use error::InvalidInputError;
