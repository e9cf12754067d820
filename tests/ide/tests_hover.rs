//! Hover tests for the IDE layer.

#![allow(clippy::unwrap_used)]

use docker_lang::dockerfile::Instruction;
use docker_lang::ide::hover;
use docker_lang::schema::{SchemaRegistry, Variant};
use docker_lang::syntax::DocumentKind;
use docker_lang::{KeyPath, Span};
use rstest::rstest;

use crate::helpers::source_fixtures::{BUILD_FRAGMENT, COMPOSE_V2, MULTI_STAGE};

fn description(keys: &[&str], variant: Variant) -> &'static str {
    SchemaRegistry::builtin()
        .lookup(&KeyPath::from_keys(keys.iter().copied()), variant)
        .unwrap()
        .description()
}

// =============================================================================
// COMPOSE
// =============================================================================

#[test]
fn test_hover_service_key() {
    let result = hover(DocumentKind::Compose, COMPOSE_V2, 3, 5, None).unwrap();
    assert_eq!(result.contents, description(&["services", "web", "image"], Variant::V2));
    assert_eq!(result.span(), Span::from_coords(3, 4, 3, 9));
}

#[rstest]
#[case(Some(Variant::V2))]
#[case(Some(Variant::V1))]
#[case(None)]
fn test_hover_build_fragment(#[case] variant: Option<Variant>) {
    let result = hover(DocumentKind::Compose, BUILD_FRAGMENT, 1, 3, variant).unwrap();
    assert_eq!(
        result.contents,
        description(&["services", "web", "build", "context"], Variant::V2)
    );
    assert_eq!(result.span(), Span::from_coords(1, 2, 1, 9));
}

#[test]
fn test_hover_nested_key() {
    let text = "services:\n  web:\n    image: x\n    healthcheck:\n      test: x\n";
    let result = hover(DocumentKind::Compose, text, 4, 7, Some(Variant::V2)).unwrap();
    assert_eq!(
        result.contents,
        description(&["services", "web", "healthcheck", "test"], Variant::V2)
    );
}

#[rstest]
#[case(COMPOSE_V2, 3, 14)]
#[case(COMPOSE_V2, 5, 9)]
#[case("services:\n  web:\n    bogus: 1\n", 2, 5)]
#[case("services:\n  web:\n\n", 2, 0)]
#[case("", 0, 0)]
fn test_no_compose_hover(#[case] text: &str, #[case] line: u32, #[case] col: u32) {
    assert!(hover(DocumentKind::Compose, text, line, col, Some(Variant::V2)).is_none());
}

// =============================================================================
// DOCKERFILE
// =============================================================================

#[test]
fn test_hover_keyword() {
    let result = hover(DocumentKind::Dockerfile, MULTI_STAGE, 13, 2, None).unwrap();
    assert_eq!(result.contents, Instruction::Expose.info().unwrap().description);
    assert_eq!(result.span(), Span::from_coords(13, 0, 13, 6));
}

#[test]
fn test_hover_lowercase_keyword() {
    let result = hover(DocumentKind::Dockerfile, "from alpine\n", 0, 1, None).unwrap();
    assert_eq!(result.contents, Instruction::From.info().unwrap().description);
}

#[rstest]
#[case(11, 14, "builder", "node:14", 2, 12, 19)]
#[case(12, 16, "tools", "golang:1.22", 8, 12, 17)]
fn test_hover_copy_from_stage(
    #[case] line: u32,
    #[case] col: u32,
    #[case] alias: &str,
    #[case] image: &str,
    #[case] stage_line: u32,
    #[case] start: u32,
    #[case] end: u32,
) {
    let result = hover(DocumentKind::Dockerfile, MULTI_STAGE, line, col, None).unwrap();
    assert_eq!(
        result.contents,
        format!("Build stage `{alias}`: `FROM {image}` (line {stage_line})")
    );
    assert_eq!(result.span(), Span::from_coords(line, start, line, end));
}

#[rstest]
#[case(MULTI_STAGE, 0, 3)]
#[case(MULTI_STAGE, 5, 6)]
#[case(MULTI_STAGE, 6, 0)]
#[case(MULTI_STAGE, 11, 25)]
#[case("FROM alpine\nCOPY --from=missing /a /b\n", 1, 14)]
#[case("BOGUS arg\n", 0, 2)]
fn test_no_dockerfile_hover(#[case] text: &str, #[case] line: u32, #[case] col: u32) {
    assert!(hover(DocumentKind::Dockerfile, text, line, col, None).is_none());
}
