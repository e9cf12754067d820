//! Schema variant detection from the root `version` key.

use super::tree::{NodeId, ParseResult};
use crate::schema::Variant;

/// The root `version` value with quotes removed.
pub fn declared_version(parse: &ParseResult) -> Option<&str> {
    let id = parse.child_by_key(NodeId::ROOT, "version")?;
    let raw = parse.node(id)?.value.as_deref()?;
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(raw);
    Some(unquoted.trim())
}

/// `1`/`1.x` is V1, `2.x` and `3.x` are V2, anything else (including no
/// `version` key) is [`Variant::All`].
pub fn detect_variant(parse: &ParseResult) -> Variant {
    let variant = declared_version(parse).map_or(Variant::All, variant_for_version);
    tracing::debug!(%variant, "detected compose variant");
    variant
}

fn variant_for_version(version: &str) -> Variant {
    let (major, minor) = match version.split_once('.') {
        Some((major, minor)) => (major, Some(minor)),
        None => (version, None),
    };
    if minor.is_some_and(|m| m.is_empty() || !m.bytes().all(|b| b.is_ascii_digit())) {
        return Variant::All;
    }
    match major {
        "1" => Variant::V1,
        "2" | "3" => Variant::V2,
        _ => Variant::All,
    }
}
