//! Compose schema variants.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The schema dialect used to interpret a Compose document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// Superset of every dialect, used when the version is unknown.
    #[default]
    All,
    /// Legacy format: services at the top level, no `version` key.
    V1,
    /// Versioned format with top-level `services`, `networks` and `volumes`.
    V2,
}

impl Variant {
    /// Whether an entry applicable to `variants` is visible under this variant.
    pub fn accepts(self, variants: VariantSet) -> bool {
        match self {
            Variant::All => true,
            Variant::V1 => variants.contains(VariantSet::V1),
            Variant::V2 => variants.contains(VariantSet::V2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::All => "all",
            Variant::V1 => "v1",
            Variant::V2 => "v2",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a variant name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown compose schema variant `{0}` (expected `all`, `v1` or `v2`)")]
pub struct VariantParseError(pub String);

impl FromStr for Variant {
    type Err = VariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "*" => Ok(Variant::All),
            "1" | "v1" => Ok(Variant::V1),
            "2" | "v2" => Ok(Variant::V2),
            _ => Err(VariantParseError(s.to_string())),
        }
    }
}

/// The set of concrete variants (`V1`, `V2`) an entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantSet(u8);

impl VariantSet {
    pub const V1: VariantSet = VariantSet(0b01);
    pub const V2: VariantSet = VariantSet(0b10);
    pub const BOTH: VariantSet = VariantSet(0b11);

    pub const fn contains(self, other: VariantSet) -> bool {
        self.0 & other.0 == other.0
    }
}
