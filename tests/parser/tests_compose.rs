//! Compose structural parser tests.

#![allow(clippy::unwrap_used)]

use docker_lang::{Position, Span};
use docker_lang::compose::{EntryKind, NodeId, ValueKind, detect_variant, parse};
use docker_lang::schema::Variant;
use docker_lang::syntax::{IssueKind, MalformedReason, NodePart, Resolve};
use rstest::rstest;

use crate::helpers::source_fixtures::{COMPOSE_V1, COMPOSE_V2, COMPOSE_WITH_COMMENTS};

fn structural_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .count()
}

// =============================================================================
// TREE CONSTRUCTION
// =============================================================================

#[rstest]
#[case(COMPOSE_V2)]
#[case(COMPOSE_V1)]
#[case("a:\n  b:\n    c: 1\n  d: 2\n")]
fn test_node_count_matches_structural_lines(#[case] text: &str) {
    let parse = parse(text);
    assert!(parse.issues().is_empty());
    assert_eq!(parse.node_count(), structural_lines(text));
}

#[rstest]
#[case(COMPOSE_V2)]
#[case(COMPOSE_V1)]
#[case(COMPOSE_WITH_COMMENTS)]
fn test_children_are_indented_deeper(#[case] text: &str) {
    let parse = parse(text);
    for (id, node) in parse.iter() {
        let parent = parse.node(node.parent.unwrap()).unwrap();
        assert!(parent.children.contains(&id));
        if !node.parent.unwrap().is_root() {
            assert!(node.indent > parent.indent, "{} not deeper than parent", node.path);
        }
        for (_, sibling) in parse.children(node.parent.unwrap()) {
            assert_eq!(sibling.indent, node.indent);
        }
    }
}

#[rstest]
#[case(COMPOSE_V2)]
#[case(COMPOSE_WITH_COMMENTS)]
#[case("\tbroken:\n  - x\nnot a key\n")]
fn test_parse_is_idempotent(#[case] text: &str) {
    assert_eq!(parse(text), parse(text));
}

#[test]
fn test_paths_and_kinds() {
    let parse = parse(COMPOSE_V2);

    let cases = [
        (vec!["services"], ValueKind::Mapping),
        (vec!["services", "web", "image"], ValueKind::Scalar),
        (vec!["services", "web", "ports"], ValueKind::Sequence),
        (vec!["services", "db", "environment"], ValueKind::Mapping),
        (vec!["volumes", "data"], ValueKind::Scalar),
    ];
    for (keys, kind) in cases {
        let id = parse.find(keys.iter().copied()).unwrap();
        let node = parse.node(id).unwrap();
        assert_eq!(node.kind, kind, "{}", node.path);
        assert_eq!(node.path.dotted().unwrap(), keys.join("."));
    }
}

#[test]
fn test_children_keep_document_order() {
    let parse = parse(COMPOSE_V2);
    let top: Vec<_> = parse
        .children(NodeId::ROOT)
        .map(|(_, n)| n.key.as_str())
        .collect();
    assert_eq!(top, vec!["version", "services", "networks", "volumes"]);
}

#[test]
fn test_depends_on_items() {
    let parse = parse(COMPOSE_V2);
    let depends_on = parse.find(["services", "web", "depends_on"]).unwrap();
    let items: Vec<_> = parse.children(depends_on).map(|(_, n)| n).collect();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].entry, EntryKind::Item);
    assert_eq!(items[0].value.as_deref(), Some("db"));
    assert_eq!(items[0].path.to_string(), "services.web.depends_on[0]");
}

#[test]
fn test_comments_and_block_scalars() {
    let parse = parse(COMPOSE_WITH_COMMENTS);
    assert!(parse.issues().is_empty());
    assert_eq!(parse.node_count(), 10);

    let context = parse.find(["services", "api", "build", "context"]).unwrap();
    assert_eq!(parse.node(context).unwrap().value.as_deref(), Some("./api"));

    let command = parse.find(["services", "api", "command"]).unwrap();
    assert_eq!(parse.node(command).unwrap().value.as_deref(), Some("|"));
    assert!(parse.find(["services", "api", "healthcheck", "interval"]).is_some());
}

#[test]
fn test_crlf_line_endings() {
    let parse = parse("services:\r\n  web:\r\n    image: x\r\n");
    let image = parse.find(["services", "web", "image"]).unwrap();
    assert_eq!(parse.node(image).unwrap().value.as_deref(), Some("x"));
}

// =============================================================================
// MALFORMED INPUT
// =============================================================================

#[rstest]
#[case("services:\n\tweb:\n", IssueKind::MalformedLine(MalformedReason::TabIndent), 1)]
#[case("services:\n  web\n", IssueKind::MalformedLine(MalformedReason::Unrecognised), 1)]
#[case("{services: {}}\n", IssueKind::MalformedLine(MalformedReason::Unrecognised), 0)]
fn test_malformed_line_recorded(#[case] text: &str, #[case] kind: IssueKind, #[case] line: u32) {
    let parse = parse(text);
    assert_eq!(parse.issues().len(), 1);
    assert_eq!(parse.issues()[0].kind, kind);
    assert_eq!(parse.issues()[0].line, line);
}

#[test]
fn test_malformed_lines_do_not_break_siblings() {
    let parse = parse("services:\n  web:\n\t  bad: tab\n    image: x\n  db:\n");
    assert!(parse.find(["services", "web", "image"]).is_some());
    assert!(parse.find(["services", "db"]).is_some());
    assert_eq!(parse.node_count(), 4);
}

// =============================================================================
// RESOLUTION
// =============================================================================

#[rstest]
#[case(COMPOSE_V2)]
#[case(COMPOSE_WITH_COMMENTS)]
#[case("")]
#[case("\n\n  \n")]
#[case("- a\n- b: c\n  d: e\n")]
fn test_resolve_is_total(#[case] text: &str) {
    let parse = parse(text);
    let lines = text.lines().count() as u32;
    for line in 0..=lines + 1 {
        for column in 0..40 {
            let resolution = parse.resolve(Position::new(line, column));
            assert!(parse.node(resolution.node).is_some());
            if resolution.node.is_root() {
                assert_eq!(resolution.part, NodePart::Body);
            }
        }
    }
}

#[test]
fn test_resolve_key_then_value() {
    let parse = parse(COMPOSE_V2);
    let image = parse.find(["services", "web", "image"]).unwrap();

    let on_key = parse.resolve(Position::new(3, 6));
    assert_eq!((on_key.node, on_key.part), (image, NodePart::Key));

    let after_colon = parse.resolve(Position::new(3, 12));
    assert_eq!((after_colon.node, after_colon.part), (image, NodePart::Value));
    assert_eq!(parse.node(image).unwrap().span(), Span::from_coords(3, 4, 3, 23));
}

// =============================================================================
// VARIANT DETECTION
// =============================================================================

#[rstest]
#[case(COMPOSE_V2, Variant::V2)]
#[case(COMPOSE_V1, Variant::All)]
#[case(COMPOSE_WITH_COMMENTS, Variant::V2)]
#[case("version: '1.0'\nweb:\n  image: x\n", Variant::V1)]
#[case("version: 'banana'\n", Variant::All)]
fn test_detect_variant(#[case] text: &str, #[case] expected: Variant) {
    assert_eq!(detect_variant(&parse(text)), expected);
}
