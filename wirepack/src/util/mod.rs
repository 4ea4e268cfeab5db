/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::EnclosingConfig;
#[doc(inline)]
pub use config::PackConfig;
#[doc(inline)]
pub use config::ResolveConfig;
#[doc(inline)]
pub use config::ViolatorSelection;
