//! Serialized forms of options and results.

#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used)]

use docker_lang::ide::{AnalysisOptions, completions, hover};
use docker_lang::schema::Variant;
use docker_lang::syntax::DocumentKind;

#[test]
fn test_options_from_partial_json() {
    let options: AnalysisOptions = serde_json::from_str(r#"{"detectVariant": false}"#).unwrap();
    assert!(!options.detect_variant);
    assert!(options.keyword_snippets);
    assert!(options.cache_parses);
}

#[test]
fn test_variant_names() {
    assert_eq!(serde_json::to_string(&Variant::V2).unwrap(), r#""v2""#);
    let variant: Variant = serde_json::from_str(r#""all""#).unwrap();
    assert_eq!(variant, Variant::All);
    assert_eq!(serde_json::to_string(&DocumentKind::Compose).unwrap(), r#""compose""#);
}

#[test]
fn test_results_serialize() {
    let items = completions(DocumentKind::Dockerfile, "", 0, 0, None);
    let json = serde_json::to_value(&items[0]).unwrap();
    assert_eq!(json["label"], "FROM");

    let result = hover(DocumentKind::Dockerfile, "FROM alpine", 0, 1, None).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["start_col"], 0);
    assert_eq!(json["end_col"], 4);
}
