/// Set of traits shared by the geometric primitives
pub mod geo_traits;
/// Geometric primitives: points, circles and axis-aligned rectangles
pub mod primitives;
