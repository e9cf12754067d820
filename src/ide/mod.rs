//! IDE features: completion and hover for Dockerfile and Compose text.
//!
//! Each request takes the current document text and a cursor position and
//! returns plain data; nothing here depends on an LSP crate. Results are
//! converted to protocol types at the server boundary.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take text in, return data out
//! 2. **No NoMatch errors**: Nothing applicable is an empty list or `None`
//! 3. **Declaration order**: Schema candidates are never re-sorted
//!
//! ## Usage
//!
//! ```
//! use docker_lang::ide::completions;
//! use docker_lang::schema::Variant;
//! use docker_lang::syntax::DocumentKind;
//!
//! let text = "version: \"2\"\n";
//! let items = completions(DocumentKind::Compose, text, 1, 0, Some(Variant::V2));
//! assert!(items.iter().any(|item| item.label.as_ref() == "services"));
//! ```

mod analysis;
mod completion;
mod hover;
mod options;

pub use analysis::AnalysisHost;
pub use completion::{
    CompletionItem, CompletionKind, completions, completions_with_options, compose_completions,
    dockerfile_completions,
};
pub use hover::{
    HoverResult, compose_hover, dockerfile_hover, hover, hover_with_options,
};
pub use options::AnalysisOptions;

use crate::compose::{self, ParseResult};
use crate::schema::Variant;

/// The variant a Compose request runs against: the host's declaration, else
/// the document's `version` key (when enabled), else [`Variant::All`].
pub fn effective_variant(
    parse: &ParseResult,
    declared: Option<Variant>,
    options: &AnalysisOptions,
) -> Variant {
    match declared {
        Some(variant) => variant,
        None if options.detect_variant => compose::detect_variant(parse),
        None => Variant::All,
    }
}
