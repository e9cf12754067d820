//! AnalysisHost: repeated completion and hover requests over changing text.
//!
//! Every request is a pure function of the text it is given, so the host
//! only adds an optional cache: the most recent parse per document kind,
//! keyed by a hash of the text and checked against the text itself. Rapid
//! requests against an unchanged buffer (completion followed by hover, say)
//! then skip the reparse.
//!
//! ## Usage
//!
//! ```
//! use docker_lang::ide::AnalysisHost;
//! use docker_lang::syntax::DocumentKind;
//!
//! let mut host = AnalysisHost::new();
//! let text = "services:\n  web:\n    image: nginx\n    ";
//! let items = host.completions(DocumentKind::Compose, text, 3, 4, None);
//! assert!(items.iter().any(|item| item.label.as_ref() == "ports"));
//! ```

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::base::{LineIndex, Position, TextSize};
use crate::compose::{self, ParseResult};
use crate::dockerfile::{self, DockerfileParse};
use crate::schema::{SchemaRegistry, Variant};
use crate::syntax::DocumentKind;

use super::{
    AnalysisOptions, CompletionItem, HoverResult, compose_completions, compose_hover,
    dockerfile_completions, dockerfile_hover,
};

/// A parse together with the text it came from.
#[derive(Debug)]
struct Cached<T> {
    hash: u64,
    text: String,
    parse: T,
}

impl<T> Cached<T> {
    fn is_for(&self, hash: u64, text: &str) -> bool {
        self.hash == hash && self.text == text
    }
}

/// Owns the options and the parse cache for the IDE layer.
#[derive(Debug)]
pub struct AnalysisHost {
    options: AnalysisOptions,
    registry: &'static SchemaRegistry,
    compose: Option<Cached<ParseResult>>,
    dockerfile: Option<Cached<DockerfileParse>>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a host with default options and the built-in schema.
    pub fn new() -> Self {
        Self::with_options(AnalysisOptions::default())
    }

    pub fn with_options(options: AnalysisOptions) -> Self {
        Self {
            options,
            registry: SchemaRegistry::builtin(),
            compose: None,
            dockerfile: None,
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Replace the options. Disabling the cache also drops it.
    pub fn set_options(&mut self, options: AnalysisOptions) {
        if !options.cache_parses {
            self.clear_cache();
        }
        self.options = options;
    }

    pub fn clear_cache(&mut self) {
        self.compose = None;
        self.dockerfile = None;
    }

    /// Parse (or reuse) Compose text.
    pub fn compose_parse(&mut self, text: &str) -> &ParseResult {
        let hash = content_hash(text);
        let hit = self.options.cache_parses && self.compose.as_ref().is_some_and(|c| c.is_for(hash, text));
        if hit {
            tracing::debug!(hash, "compose parse cache hit");
        } else {
            tracing::debug!(hash, "compose parse cache miss");
            self.compose = None;
        }
        &self
            .compose
            .get_or_insert_with(|| Cached {
                hash,
                text: text.to_string(),
                parse: compose::parse(text),
            })
            .parse
    }

    /// Parse (or reuse) Dockerfile text.
    pub fn dockerfile_parse(&mut self, text: &str) -> &DockerfileParse {
        let hash = content_hash(text);
        let hit =
            self.options.cache_parses && self.dockerfile.as_ref().is_some_and(|c| c.is_for(hash, text));
        if hit {
            tracing::debug!(hash, "dockerfile parse cache hit");
        } else {
            tracing::debug!(hash, "dockerfile parse cache miss");
            self.dockerfile = None;
        }
        &self
            .dockerfile
            .get_or_insert_with(|| Cached {
                hash,
                text: text.to_string(),
                parse: dockerfile::parse(text),
            })
            .parse
    }

    /// Get completion suggestions at a line/column position.
    pub fn completions(
        &mut self,
        kind: DocumentKind,
        text: &str,
        line: u32,
        col: u32,
        variant: Option<Variant>,
    ) -> Vec<CompletionItem> {
        let position = Position::new(line, col);
        let options = self.options;
        let registry = self.registry;
        match kind {
            DocumentKind::Compose => {
                let parse = self.compose_parse(text);
                let variant = super::effective_variant(parse, variant, &options);
                compose_completions(parse, position, variant, registry)
            }
            DocumentKind::Dockerfile => {
                let parse = self.dockerfile_parse(text);
                dockerfile_completions(parse, text, position, &options)
            }
        }
    }

    /// Get hover information at a line/column position.
    pub fn hover(
        &mut self,
        kind: DocumentKind,
        text: &str,
        line: u32,
        col: u32,
        variant: Option<Variant>,
    ) -> Option<HoverResult> {
        let position = Position::new(line, col);
        let options = self.options;
        let registry = self.registry;
        match kind {
            DocumentKind::Compose => {
                let parse = self.compose_parse(text);
                let variant = super::effective_variant(parse, variant, &options);
                compose_hover(parse, position, variant, registry)
            }
            DocumentKind::Dockerfile => {
                let parse = self.dockerfile_parse(text);
                dockerfile_hover(parse, text, position)
            }
        }
    }

    /// [`completions`](Self::completions) for a flat byte offset.
    pub fn completions_at_offset(
        &mut self,
        kind: DocumentKind,
        text: &str,
        offset: TextSize,
        variant: Option<Variant>,
    ) -> Vec<CompletionItem> {
        let position: Position = LineIndex::new(text).line_col(offset).into();
        self.completions(kind, text, position.line, position.column, variant)
    }

    /// [`hover`](Self::hover) for a flat byte offset.
    pub fn hover_at_offset(
        &mut self,
        kind: DocumentKind,
        text: &str,
        offset: TextSize,
        variant: Option<Variant>,
    ) -> Option<HoverResult> {
        let position: Position = LineIndex::new(text).line_col(offset).into();
        self.hover(kind, text, position.line, position.column, variant)
    }
}

fn content_hash(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
