//! The process-wide Compose schema registry.

use std::sync::LazyLock;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::keys::{NESTED, PathKey, SERVICE, TOP_LEVEL};
use super::{Variant, VariantSet};
use crate::base::{KeyPath, PathSegment};

/// One segment of a [`KeyPattern`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSegment {
    Literal(SmolStr),
    /// `*`: any mapping key or sequence index (a service name, a network name).
    Wildcard,
}

impl PatternSegment {
    pub fn matches(&self, segment: &PathSegment) -> bool {
        match (self, segment) {
            (PatternSegment::Wildcard, _) => true,
            (PatternSegment::Literal(literal), PathSegment::Key(key)) => literal == key,
            (PatternSegment::Literal(_), PathSegment::Index(_)) => false,
        }
    }
}

/// A dotted key path pattern such as `services.*.build.context`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    source: SmolStr,
    segments: Vec<PatternSegment>,
}

impl KeyPattern {
    pub fn parse(source: &str) -> Self {
        let segments = source
            .split('.')
            .filter(|s| !s.is_empty())
            .map(|s| match s {
                "*" => PatternSegment::Wildcard,
                literal => PatternSegment::Literal(literal.into()),
            })
            .collect();
        Self {
            source: source.into(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn wildcard_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PatternSegment::Wildcard))
            .count()
    }

    pub fn is_literal(&self) -> bool {
        self.wildcard_count() == 0
    }

    /// The final key, unless the pattern ends in a wildcard.
    pub fn label(&self) -> Option<&str> {
        match self.segments.last()? {
            PatternSegment::Literal(literal) => Some(literal),
            PatternSegment::Wildcard => None,
        }
    }

    /// Whole-path match.
    pub fn matches(&self, path: &KeyPath) -> bool {
        self.len() == path.len() && Self::all_match(&self.segments, path.segments())
    }

    /// Whether this pattern names a direct child of `path`.
    pub fn is_child_of(&self, path: &KeyPath) -> bool {
        self.len() == path.len() + 1
            && Self::all_match(&self.segments[..path.len()], path.segments())
    }

    /// Whether the trailing segments of this pattern match the whole of `path`.
    pub fn ends_with(&self, path: &KeyPath) -> bool {
        self.len() >= path.len()
            && Self::all_match(&self.segments[self.len() - path.len()..], path.segments())
    }

    fn all_match(pattern: &[PatternSegment], path: &[PathSegment]) -> bool {
        pattern.iter().zip(path).all(|(p, s)| p.matches(s))
    }
}

/// A documented key known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pattern: KeyPattern,
    description: &'static str,
    variants: VariantSet,
}

impl SchemaEntry {
    pub fn new(pattern: &str, variants: VariantSet, description: &'static str) -> Self {
        Self {
            pattern: KeyPattern::parse(pattern),
            description,
            variants,
        }
    }

    pub fn pattern(&self) -> &KeyPattern {
        &self.pattern
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn variants(&self) -> VariantSet {
        self.variants
    }

    pub fn label(&self) -> Option<&str> {
        self.pattern.label()
    }
}

static BUILTIN: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::from_builtin_tables);

/// Immutable table of Compose keys, indexed for exact and wildcard lookup.
///
/// Entries keep their declaration order; [`SchemaRegistry::candidates_at`]
/// returns them in that order.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    entries: Vec<SchemaEntry>,
    /// Literal patterns by dotted source, in declaration order.
    exact: FxHashMap<SmolStr, Vec<usize>>,
    /// Indexes of patterns containing at least one wildcard.
    wildcard: Vec<usize>,
}

impl SchemaRegistry {
    /// The built-in registry covering the v1 and v2 file formats.
    pub fn builtin() -> &'static SchemaRegistry {
        &BUILTIN
    }

    pub fn new(entries: Vec<SchemaEntry>) -> Self {
        let mut exact: FxHashMap<SmolStr, Vec<usize>> = FxHashMap::default();
        let mut wildcard = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if entry.pattern.is_literal() {
                exact
                    .entry(entry.pattern.source.clone())
                    .or_default()
                    .push(i);
            } else {
                wildcard.push(i);
            }
        }
        tracing::debug!(
            entries = entries.len(),
            literal = exact.len(),
            wildcard = wildcard.len(),
            "schema registry loaded"
        );
        Self {
            entries,
            exact,
            wildcard,
        }
    }

    fn from_builtin_tables() -> Self {
        let from_path =
            |key: &PathKey| SchemaEntry::new(key.pattern, key.variants, key.description);

        let mut entries: Vec<SchemaEntry> = TOP_LEVEL.iter().map(from_path).collect();
        for key in SERVICE {
            if key.variants.contains(VariantSet::V1) {
                let pattern = format!("*.{}", key.key);
                entries.push(SchemaEntry::new(&pattern, VariantSet::V1, key.description));
            }
            if key.variants.contains(VariantSet::V2) {
                let pattern = format!("services.*.{}", key.key);
                entries.push(SchemaEntry::new(&pattern, VariantSet::V2, key.description));
            }
        }
        entries.extend(NESTED.iter().map(from_path));

        Self::new(entries)
    }

    pub fn entries(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry describing exactly `path`.
    ///
    /// A literal pattern wins over any wildcard pattern; among wildcard
    /// matches the one with the fewest wildcards wins, then declaration order.
    pub fn lookup(&self, path: &KeyPath, variant: Variant) -> Option<&SchemaEntry> {
        let exact = path
            .dotted()
            .and_then(|dotted| self.exact.get(dotted.as_str()))
            .and_then(|ids| {
                ids.iter()
                    .map(|&i| &self.entries[i])
                    .find(|e| variant.accepts(e.variants))
            });
        if exact.is_some() {
            return exact;
        }

        self.wildcard
            .iter()
            .map(|&i| &self.entries[i])
            .filter(|e| variant.accepts(e.variants) && e.pattern.matches(path))
            .min_by_key(|e| e.pattern.wildcard_count())
    }

    /// Find an entry for a path taken from a document fragment.
    ///
    /// Applies only when the first segment is not a top-level key of
    /// `variant`; the path is then matched against the tail of each pattern,
    /// so `build.context` written at the root resolves to
    /// `services.*.build.context`.
    pub fn lookup_fragment(&self, path: &KeyPath, variant: Variant) -> Option<&SchemaEntry> {
        let first = path.segments().first()?;
        if self.is_root_key(first, variant) {
            return None;
        }

        self.entries
            .iter()
            .filter(|e| {
                variant.accepts(e.variants)
                    && e.pattern.len() > path.len()
                    && e.pattern.ends_with(path)
            })
            .min_by_key(|e| {
                e.pattern.segments()[e.pattern.len() - path.len()..]
                    .iter()
                    .filter(|s| matches!(s, PatternSegment::Wildcard))
                    .count()
            })
    }

    /// Whether `segment` is a literal top-level key under `variant`.
    ///
    /// The v1 `*` (any service name) does not count.
    pub fn is_root_key(&self, segment: &PathSegment, variant: Variant) -> bool {
        self.entries.iter().any(|e| {
            variant.accepts(e.variants)
                && e.pattern.len() == 1
                && e.pattern.is_literal()
                && e.pattern.segments()[0].matches(segment)
        })
    }

    /// Keys that may appear directly under `path`, in declaration order.
    ///
    /// Patterns ending in a wildcard (user-chosen names) are not candidates.
    /// When two entries share a label the one with fewer wildcards is kept,
    /// at the position of the first.
    pub fn candidates_at(&self, path: &KeyPath, variant: Variant) -> Vec<&SchemaEntry> {
        let mut by_label: IndexMap<&str, &SchemaEntry> = IndexMap::new();

        for entry in &self.entries {
            if !variant.accepts(entry.variants)
                || !entry.pattern.is_child_of(path)
                || self.wildcard_shadowed(entry, path, variant)
            {
                continue;
            }
            let Some(label) = entry.label() else {
                continue;
            };
            match by_label.get_mut(label) {
                Some(existing) => {
                    if entry.pattern.wildcard_count() < existing.pattern.wildcard_count() {
                        *existing = entry;
                    }
                }
                None => {
                    by_label.insert(label, entry);
                }
            }
        }

        by_label.into_values().collect()
    }

    /// Whether a wildcard in `entry` stands where `path` names a literal
    /// key. Under [`Variant::All`] the v1 `*` would otherwise read
    /// `services` as a service name.
    fn wildcard_shadowed(&self, entry: &SchemaEntry, path: &KeyPath, variant: Variant) -> bool {
        entry
            .pattern
            .segments()
            .iter()
            .zip(path.segments())
            .enumerate()
            .filter(|(_, (pattern, _))| matches!(pattern, PatternSegment::Wildcard))
            .any(|(i, _)| self.is_literal_path(&path.segments()[..=i], variant))
    }

    fn is_literal_path(&self, segments: &[PathSegment], variant: Variant) -> bool {
        let keys: Option<Vec<&str>> = segments.iter().map(PathSegment::as_key).collect();
        keys.and_then(|keys| self.exact.get(keys.join(".").as_str()))
            .is_some_and(|ids| ids.iter().any(|&i| variant.accepts(self.entries[i].variants)))
    }
}
