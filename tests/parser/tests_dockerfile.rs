//! Dockerfile parser tests.

#![allow(clippy::unwrap_used)]

use docker_lang::Position;
use docker_lang::dockerfile::{DirectiveNode, Instruction, parse, parse_directives};
use docker_lang::syntax::{IssueKind, NodePart, Resolve};
use rstest::rstest;

use crate::helpers::source_fixtures::MULTI_STAGE;

// =============================================================================
// STAGE ALIASES
// =============================================================================

#[rstest]
#[case("FROM node:14 AS builder", Some("builder"))]
#[case("FROM node:14", None)]
#[case("from node:14 as Builder2", Some("Builder2"))]
#[case("FROM --platform=linux/amd64 node:20-slim AS web.base", Some("web.base"))]
#[case("FROM registry.example.com:5000/team/app@sha256:abc AS pinned", Some("pinned"))]
#[case("FROM ${BASE_IMAGE} AS from_arg", Some("from_arg"))]
#[case("FROM node AS 1bad", None)]
#[case("   FROM   node   AS   spaced   ", Some("spaced"))]
fn test_stage_alias(#[case] line: &str, #[case] alias: Option<&str>) {
    let directives = parse_directives(line);
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].instruction, Instruction::From);
    assert_eq!(directives[0].instruction.as_str(), "FROM");
    assert_eq!(directives[0].stage_alias.as_deref(), alias);
}

#[test]
fn test_alias_only_on_from() {
    let directives = parse_directives("RUN echo FROM x AS y");
    assert_eq!(directives[0].instruction, Instruction::Run);
    assert_eq!(directives[0].stage_alias, None);
}

// =============================================================================
// MULTI-STAGE FILES
// =============================================================================

#[test]
fn test_multi_stage_records() {
    let parse = parse(MULTI_STAGE);
    let instructions: Vec<_> = parse
        .directives()
        .iter()
        .map(|d| d.instruction.as_str())
        .collect();
    assert_eq!(
        instructions,
        vec![
            "FROM", "WORKDIR", "COPY", "RUN", "FROM", "RUN", "FROM", "COPY", "COPY", "EXPOSE",
            "CMD"
        ]
    );
    assert!(parse.issues().is_empty());

    let run = &parse.directives()[3];
    assert_eq!((run.line, run.end_line), (4, 5));
    assert_eq!(run.arguments, "npm ci &&     npm run build");

    let stages: Vec<_> = parse.stages().filter_map(|d| d.stage_alias.as_deref()).collect();
    assert_eq!(stages, vec!["builder", "tools"]);
    assert_eq!(parse.stages_before(7).count(), 1);
}

#[test]
fn test_base_images() {
    let images: Vec<_> = parse_directives(MULTI_STAGE)
        .into_iter()
        .filter_map(|d| d.base_image)
        .collect();
    assert_eq!(images, vec!["node:14", "golang:1.22", "alpine:3.19"]);
}

// =============================================================================
// TOLERANCE
// =============================================================================

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("\\")]
#[case("RUN \\")]
#[case("# only\n# comments")]
#[case("¿qué? ñ\n\t\tFROMX")]
#[case("FROM\nAS\n--from=\n")]
fn test_parse_never_fails(#[case] text: &str) {
    let parse = parse(text);
    for directive in parse.directives() {
        assert!(directive.line <= directive.end_line);
        assert!(directive.keyword_span.start <= directive.keyword_span.end);
    }
}

#[test]
fn test_unknown_instructions_are_kept() {
    let parse = parse("FROM alpine\nSQUASH now\nrun ok\n");
    let directives = parse.directives();
    assert_eq!(directives.len(), 3);
    assert_eq!(directives[1].instruction, Instruction::Unknown);
    assert_eq!(directives[1].instruction.as_str(), "UNKNOWN");
    assert_eq!(directives[1].keyword, "SQUASH");
    assert_eq!(directives[2].instruction, Instruction::Run);

    assert_eq!(parse.issues().len(), 1);
    assert_eq!(parse.issues()[0].kind, IssueKind::UnknownInstruction);
    assert_eq!(parse.issues()[0].line, 1);
}

#[test]
fn test_crlf_line_endings() {
    let directives = parse_directives("FROM a AS one\r\nRUN b \\\r\n  c\r\n");
    assert_eq!(directives.len(), 2);
    assert_eq!(directives[0].stage_alias.as_deref(), Some("one"));
    assert_eq!(directives[1].arguments, "b   c");
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[test]
fn test_resolve_is_total() {
    let parse = parse(MULTI_STAGE);
    let lines = MULTI_STAGE.lines().count() as u32;
    for line in 0..lines + 3 {
        for column in 0..60 {
            let resolution = parse.resolve(Position::new(line, column));
            match resolution.node {
                DirectiveNode::Root => assert_eq!(resolution.part, NodePart::Body),
                node => assert!(parse.get(node).is_some()),
            }
        }
    }
}

#[test]
fn test_resolve_continuation_line_is_value() {
    let parse = parse(MULTI_STAGE);
    let resolution = parse.resolve(Position::new(5, 2));
    assert_eq!(resolution.node, DirectiveNode::Directive(3));
    assert_eq!(resolution.part, NodePart::Value);
}

#[test]
fn test_resolve_comment_and_blank_lines_are_root() {
    let parse = parse(MULTI_STAGE);
    assert_eq!(parse.resolve(Position::new(0, 3)).node, DirectiveNode::Root);
    assert_eq!(parse.resolve(Position::new(6, 0)).node, DirectiveNode::Root);
}
