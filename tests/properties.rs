//! Property-based tests for letter parsing.
//!
//! Generated documents stick to the subset of the format whose expected
//! result is easy to state independently of the parser: single-line fields
//! with delimiter-free names and values, plus one content block.

use letter_context::{
    format_content, normalize_name, parse_str, BlankLinePolicy, LetterError, ParserConfig,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Field names: no delimiters, not the content field.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z ]{0,12}".prop_filter("not the content field", |n| {
        normalize_name(n) != "Content"
    })
}

/// Single-line values: printable, no delimiter characters.
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?']{0,30}"
}

/// Body lines: some blank, none containing markers, emails or `Link(`.
fn body_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9 .,]{1,40}",
    ]
}

fn render(fields: &[(String, String)], body: &[String]) -> String {
    let mut doc = String::new();
    for (name, value) in fields {
        doc.push_str(&format!("{name}:-{value}\n"));
    }
    doc.push_str("~-\n");
    for line in body {
        doc.push_str(line);
        doc.push('\n');
    }
    doc.push_str("-~\n");
    doc
}

proptest! {
    #[test]
    fn parse_is_deterministic(
        fields in prop::collection::vec((name_strategy(), value_strategy()), 0..8),
        body in prop::collection::vec(body_line_strategy(), 0..10),
    ) {
        let doc = render(&fields, &body);
        let config = ParserConfig::default();
        let first = parse_str(&doc, &config).unwrap();
        let second = parse_str(&doc, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_line_fields_round_trip(
        fields in prop::collection::vec((name_strategy(), value_strategy()), 1..8),
    ) {
        let doc = render(&fields, &["x".to_string()]);
        let parsed = parse_str(&doc, &ParserConfig::default()).unwrap();

        // Later definitions of the same normalised name win.
        let mut expected = BTreeMap::new();
        for (name, value) in &fields {
            expected.insert(normalize_name(name), value.trim().to_string());
        }
        for (name, value) in &expected {
            prop_assert_eq!(parsed.get(name), Some(value.as_str()));
        }
        prop_assert_eq!(parsed.len(), expected.len() + 1);

        // Re-serialising the parsed fields yields the same set.
        let reserialised: Vec<(String, String)> = parsed
            .iter()
            .filter(|(k, _)| *k != "Content")
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let redoc = render(&reserialised, &["x".to_string()]);
        let reparsed = parse_str(&redoc, &ParserConfig::default()).unwrap();
        prop_assert_eq!(reparsed, parsed);
    }

    #[test]
    fn collapse_only_removes_blank_lines(
        body in prop::collection::vec(body_line_strategy(), 1..12),
    ) {
        let doc = render(&[], &body);
        let preserve = ParserConfig::builder()
            .blank_lines(BlankLinePolicy::Preserve)
            .build()
            .unwrap();
        let collapsed = parse_str(&doc, &ParserConfig::default()).unwrap();
        let preserved = parse_str(&doc, &preserve).unwrap();
        let collapsed = collapsed.get("Content").unwrap();
        let preserved = preserved.get("Content").unwrap();

        let text_lines = |s: &str| -> Vec<String> {
            s.lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect()
        };
        prop_assert_eq!(text_lines(collapsed), text_lines(preserved));
        prop_assert!(collapsed.lines().count() <= preserved.lines().count());
    }

    #[test]
    fn unclosed_block_is_always_an_error(
        body in prop::collection::vec(body_line_strategy(), 0..10),
    ) {
        let mut doc = String::from("~-\n");
        for line in &body {
            doc.push_str(line);
            doc.push('\n');
        }
        let err = parse_str(&doc, &ParserConfig::default()).unwrap_err();
        let is_unterminated = matches!(err, LetterError::UnterminatedBlock { .. });
        prop_assert!(is_unterminated);
    }

    #[test]
    fn formatting_plain_text_is_identity(text in "[a-zA-Z0-9 .,;\n]{0,200}") {
        prop_assert_eq!(format_content(&text), text);
    }
}
