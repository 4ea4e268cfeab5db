/// Functions to draw a bundle in SVG format
pub mod svg;
