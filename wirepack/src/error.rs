use thiserror::Error;

/// Rejected input of the Bundle Diameter Resolver, raised before any geometry is computed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("no circles provided")]
    Empty,
    #[error("circle {index} has radius {radius}, radii should be strictly positive and finite")]
    InvalidRadius { index: usize, radius: f64 },
    #[error("margin {0} is invalid, should be positive (or zero) and finite")]
    InvalidMargin(f64),
    #[error("{n_circles} circles exceed the limit of {max_circles}")]
    TooManyCircles { n_circles: usize, max_circles: usize },
    #[error("invalid configuration, {field}: {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}
