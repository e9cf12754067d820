//! Routing documents to a parser by path.
//!
//! The host supplies glob patterns (usually from its own settings);
//! [`FileClassifier`] only matches path text and never touches the file
//! system.

mod classify;

pub use classify::{
    ClassifyError, DEFAULT_COMPOSE_PATTERN, DEFAULT_DOCKERFILE_PATTERN, FileClassifier,
    expand_braces,
};
