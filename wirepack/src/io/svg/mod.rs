mod bundle_to_svg;
mod svg_util;

#[doc(inline)]
pub use bundle_to_svg::*;

#[doc(inline)]
pub use svg_util::Color;
#[doc(inline)]
pub use svg_util::SvgBundleTheme;
#[doc(inline)]
pub use svg_util::SvgDrawOptions;
