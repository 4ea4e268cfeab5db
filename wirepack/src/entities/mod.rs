mod bundle;
mod circles;
mod enclosing_result;
mod pack_stats;

#[doc(inline)]
pub use bundle::BundleResult;
#[doc(inline)]
pub use circles::PlacedCircle;
#[doc(inline)]
pub use circles::UnplacedCircle;
#[doc(inline)]
pub use enclosing_result::EnclosingResult;
#[doc(inline)]
pub use pack_stats::PackStats;
