//! Analysis options

/// Host-configurable behaviour for completion and hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct AnalysisOptions {
    /// Pick the Compose variant from the document's `version` key when the
    /// host does not declare one (otherwise every variant applies)
    pub detect_variant: bool,
    /// Offer Dockerfile keywords as snippets with argument placeholders
    pub keyword_snippets: bool,
    /// Reuse the last parse per document kind when the text is unchanged
    pub cache_parses: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            detect_variant: true,
            keyword_snippets: true,
            cache_parses: true,
        }
    }
}
