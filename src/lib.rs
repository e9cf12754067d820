//! # docker-lang-base
//!
//! Core library for Dockerfile and Docker Compose structural parsing, schema
//! lookup, completion and hover.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide        → completion, hover, AnalysisHost
//!   ↓
//! project    → file classification by glob
//!   ↓
//! compose    → key tree, position resolver, variant detection
//!   ↓
//! schema     → versioned key descriptions (All / V1 / V2)
//! dockerfile → directive records, stages, position resolver
//!   ↓
//! syntax     → Issue, Resolve, DocumentKind
//!   ↓
//! base       → Position, Span, KeyPath, LineIndex
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → schema/dockerfile → compose → project → ide)
// ============================================================================

/// Foundation types: Position, Span, KeyPath, LineIndex
pub mod base;

/// Shared parse-output types: Issue, Resolve, DocumentKind
pub mod syntax;

/// Compose schema registry
pub mod schema;

/// Dockerfile parser
pub mod dockerfile;

/// Compose structural parser
pub mod compose;

/// Document classification
pub mod project;

/// IDE features: completion, hover
pub mod ide;

// Re-export foundation types
pub use base::{ColumnSpan, KeyPath, LineCol, LineIndex, PathSegment, Position, Span, TextRange, TextSize};

pub use ide::{AnalysisHost, AnalysisOptions, CompletionItem, CompletionKind, HoverResult, completions, hover};
pub use schema::{SchemaRegistry, Variant};
pub use syntax::{DocumentKind, Issue, IssueKind, NodePart, Resolve};
