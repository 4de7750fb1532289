//! Definitions generated by `cssgen` from `spec/spec.json`.

mod keywords_gen;
mod properties_gen;
mod setters_gen;

pub use keywords_gen::*;
pub use properties_gen::*;
pub use setters_gen::*;
