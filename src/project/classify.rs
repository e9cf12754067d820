use std::path::Path;

use glob::{MatchOptions, Pattern, PatternError};
use thiserror::Error;

use crate::syntax::DocumentKind;

pub const DEFAULT_COMPOSE_PATTERN: &str = "**/[dD]ocker-[cC]ompose*.{yaml,yml}";
pub const DEFAULT_DOCKERFILE_PATTERN: &str = "**/{*.dockerfile,[dD]ockerfile}";

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

/// Decides which parser applies to a path.
#[derive(Debug, Clone)]
pub struct FileClassifier {
    compose: Vec<Pattern>,
    dockerfile: Vec<Pattern>,
}

impl FileClassifier {
    /// Compile host-supplied patterns. `{a,b}` alternatives are expanded
    /// before compiling since `glob` does not support them.
    pub fn new<C, D>(compose_globs: C, dockerfile_globs: D) -> Result<Self, ClassifyError>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Ok(Self {
            compose: compile(compose_globs)?,
            dockerfile: compile(dockerfile_globs)?,
        })
    }

    pub fn with_default_patterns() -> Result<Self, ClassifyError> {
        Self::new([DEFAULT_COMPOSE_PATTERN], [DEFAULT_DOCKERFILE_PATTERN])
    }

    /// Compose patterns are checked first and match case-sensitively;
    /// Dockerfile patterns ignore case.
    pub fn classify(&self, path: impl AsRef<Path>) -> Option<DocumentKind> {
        let text = path.as_ref().to_string_lossy().replace('\\', "/");

        let strict = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        let relaxed = MatchOptions {
            case_sensitive: false,
            ..strict
        };

        let kind = if self.compose.iter().any(|p| p.matches_with(&text, strict)) {
            Some(DocumentKind::Compose)
        } else if self.dockerfile.iter().any(|p| p.matches_with(&text, relaxed)) {
            Some(DocumentKind::Dockerfile)
        } else {
            None
        };
        tracing::trace!(path = %text, ?kind, "classified");
        kind
    }
}

fn compile<I>(globs: I) -> Result<Vec<Pattern>, ClassifyError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut patterns = Vec::new();
    for glob in globs {
        for expanded in expand_braces(glob.as_ref()) {
            let pattern = Pattern::new(&expanded).map_err(|source| ClassifyError::Pattern {
                pattern: expanded.clone(),
                source,
            })?;
            patterns.push(pattern);
        }
    }
    Ok(patterns)
}

/// Expand shell-style `{a,b}` alternatives (nesting allowed).
///
/// An unbalanced `{` is kept literally.
///
/// ```
/// use docker_lang::project::expand_braces;
///
/// assert_eq!(expand_braces("*.{yaml,yml}"), vec!["*.yaml", "*.yml"]);
/// ```
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0usize;
    let mut commas = Vec::new();
    let mut close = None;
    for (i, c) in pattern[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + i);
                    break;
                }
            }
            ',' if depth == 1 => commas.push(open + i),
            _ => {}
        }
    }
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    let mut start = open + 1;
    let mut expanded = Vec::new();
    for end in commas.into_iter().chain(std::iter::once(close)) {
        let alternative = &pattern[start..end];
        expanded.extend(expand_braces(&format!("{prefix}{alternative}{suffix}")));
        start = end + 1;
    }
    expanded
}
