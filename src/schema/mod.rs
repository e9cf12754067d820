//! Version-aware Compose schema.
//!
//! The [`SchemaRegistry`] maps key path patterns to descriptions, each tagged
//! with the file-format [`Variant`]s that recognise it. The built-in registry
//! is loaded once per process and never mutated, so concurrent readers need
//! no locking.

mod keys;
mod registry;
mod variant;

pub use registry::{KeyPattern, PatternSegment, SchemaEntry, SchemaRegistry};
pub use variant::{Variant, VariantParseError, VariantSet};
