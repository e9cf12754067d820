//! IDE feature tests
//!
//! Tests for:
//! - Code completion (Compose keys, Dockerfile keywords and stages)
//! - Hover information
//! - AnalysisHost caching and offset entry points
//! - Options and result serialization

pub mod tests_completion;
pub mod tests_hover;
pub mod tests_serde;
