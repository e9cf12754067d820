//! Code completion tests for the IDE layer.
//!
//! Fixtures mark the cursor with `$0`, typically at the end of a half-typed
//! document exactly as an editor would send it.

#![allow(clippy::unwrap_used)]

use docker_lang::KeyPath;
use docker_lang::ide::{
    AnalysisOptions, CompletionKind, completions, completions_with_options,
};
use docker_lang::schema::{SchemaRegistry, Variant};
use docker_lang::syntax::DocumentKind;
use rstest::rstest;

use crate::helpers::ide_helpers::{labels, split_cursor};

fn compose_at(source: &str, variant: Option<Variant>) -> Vec<String> {
    let (text, line, col) = split_cursor(source);
    labels(&completions(DocumentKind::Compose, &text, line, col, variant))
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn dockerfile_at(source: &str) -> Vec<String> {
    let (text, line, col) = split_cursor(source);
    labels(&completions(DocumentKind::Dockerfile, &text, line, col, None))
        .into_iter()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// COMPOSE
// =============================================================================

#[rstest]
#[case(Some(Variant::V2))]
#[case(None)]
fn test_top_level_after_version(#[case] variant: Option<Variant>) {
    let items = compose_at("version: \"2\"\n$0", variant);
    assert_eq!(items, vec!["services", "networks", "volumes"]);
}

#[rstest]
#[case(Some(Variant::V2))]
#[case(None)]
fn test_service_keys_exclude_existing(#[case] variant: Option<Variant>) {
    let items = compose_at("services:\n  web:\n    image: x\n    $0", variant);
    assert!(!items.contains(&"image".to_string()));
    assert!(items.contains(&"build".to_string()));
    assert!(items.contains(&"ports".to_string()));
}

#[rstest]
#[case("services:\n  $0", None)]
#[case("services:\n  $0", Some(Variant::All))]
#[case("networks:\n  $0", None)]
#[case("volumes:\n  $0", None)]
#[case("services:\n  web:\n    image: x\nnetworks:\n  $0", None)]
#[case("services:\n  web:\n    image: x\nvolumes:\n  data:\n  $0", Some(Variant::All))]
fn test_user_named_slots_have_no_keys(#[case] source: &str, #[case] variant: Option<Variant>) {
    assert!(compose_at(source, variant).is_empty());
}

#[rstest]
#[case("services:\n  web:\n    $0", None)]
#[case("services:\n  web:\n    $0", Some(Variant::All))]
#[case("web:\n  $0", None)]
fn test_service_body_without_version(#[case] source: &str, #[case] variant: Option<Variant>) {
    let items = compose_at(source, variant);
    assert!(items.contains(&"image".to_string()));
    assert!(items.contains(&"build".to_string()));
}

#[test]
fn test_service_keys_follow_schema_order() {
    let (text, line, col) = split_cursor("services:\n  web:\n    $0");
    let items = completions(DocumentKind::Compose, &text, line, col, Some(Variant::V2));
    let registry = SchemaRegistry::builtin();
    let expected: Vec<_> = registry
        .candidates_at(&KeyPath::from_keys(["services", "web"]), Variant::V2)
        .into_iter()
        .filter_map(|e| e.label())
        .collect();
    assert_eq!(labels(&items), expected);
    assert!(items.windows(2).all(|w| w[0].sort_priority < w[1].sort_priority));
}

#[test]
fn test_detected_version_hides_other_variant() {
    let source = "version: '2'\nweb:\n  $0";
    assert!(compose_at(source, None).is_empty());

    let (text, line, col) = split_cursor(source);
    let options = AnalysisOptions {
        detect_variant: false,
        ..AnalysisOptions::default()
    };
    let items = completions_with_options(DocumentKind::Compose, &text, line, col, None, &options);
    assert!(labels(&items).contains(&"image"));
}

#[test]
fn test_declared_variant_wins_over_version_key() {
    let items = compose_at("version: '2'\nweb:\n  $0", Some(Variant::V1));
    assert!(items.contains(&"image".to_string()));
    assert!(items.contains(&"net".to_string()));
}

#[test]
fn test_documentation_comes_from_schema() {
    let (text, line, col) = split_cursor("services:\n  web:\n    $0");
    let items = completions(DocumentKind::Compose, &text, line, col, Some(Variant::V2));
    let image = items.iter().find(|i| i.label.as_ref() == "image").unwrap();

    let entry = SchemaRegistry::builtin()
        .lookup(&KeyPath::from_keys(["services", "web", "image"]), Variant::V2)
        .unwrap();
    assert_eq!(image.kind, CompletionKind::Property);
    assert_eq!(image.documentation.as_deref(), Some(entry.description()));
    assert_eq!(image.detail.as_deref(), Some("services.*.image"));
}

#[rstest]
#[case("services:\n  web:\n    ports:\n      - \"80:80\"\n      $0")]
#[case("services:\n  web:\n    image: ng$0")]
#[case("services:\n  web:\n    command: |\n      echo $0")]
fn test_no_compose_completions(#[case] source: &str) {
    assert!(compose_at(source, Some(Variant::V2)).is_empty());
}

#[test]
fn test_build_mapping_keys() {
    let items = compose_at("services:\n  web:\n    build:\n      $0", Some(Variant::V2));
    assert!(items.contains(&"context".to_string()));
    assert!(items.contains(&"dockerfile".to_string()));
}

// =============================================================================
// DOCKERFILE
// =============================================================================

#[rstest]
#[case("$0")]
#[case("FROM alpine\n$0")]
#[case("FROM alpine\nRU$0")]
#[case("FROM alpine\n  $0")]
fn test_keywords_at_line_start(#[case] source: &str) {
    let items = dockerfile_at(source);
    assert_eq!(items.first().map(String::as_str), Some("FROM"));
    assert!(items.contains(&"HEALTHCHECK".to_string()));
}

#[rstest]
#[case("FROM alpine\nRUN apt-get $0")]
#[case("FROM alpine\nRUN apt-get \\\n  $0")]
#[case("FROM alpine AS $0")]
fn test_no_keywords_inside_arguments(#[case] source: &str) {
    assert!(dockerfile_at(source).is_empty());
}

#[test]
fn test_stage_aliases_before_copy() {
    let items = dockerfile_at(
        "FROM node:14 AS builder\nFROM golang AS tools\nFROM alpine\nCOPY --from=$0\nFROM scratch AS late\n",
    );
    assert_eq!(items, vec!["builder", "tools"]);
}

#[test]
fn test_stage_alias_partially_typed() {
    let (text, line, col) = split_cursor("FROM node:14 AS builder\nFROM alpine\nCOPY --from=bu$0 /a /b\n");
    let items = completions(DocumentKind::Dockerfile, &text, line, col, None);
    assert_eq!(labels(&items), vec!["builder"]);
    assert_eq!(items[0].kind, CompletionKind::Stage);
    assert_eq!(items[0].detail.as_deref(), Some("FROM node:14"));
}

#[test]
fn test_keyword_items_carry_snippets() {
    let (text, line, col) = split_cursor("$0");
    let items = completions(DocumentKind::Dockerfile, &text, line, col, None);
    assert!(items.iter().all(|i| i.kind == CompletionKind::Keyword));
    assert!(items.iter().all(|i| i.documentation.is_some()));
    assert!(items.iter().all(|i| i.is_snippet));

    let options = AnalysisOptions {
        keyword_snippets: false,
        ..AnalysisOptions::default()
    };
    let plain = completions_with_options(DocumentKind::Dockerfile, &text, line, col, None, &options);
    assert_eq!(labels(&plain), labels(&items));
    assert!(plain.iter().all(|i| i.insert_text.is_none()));
}
