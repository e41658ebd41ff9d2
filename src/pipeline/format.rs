//! Inline markup rewriting for the content field.
//!
//! Two rules, applied left to right over the text:
//!
//! 1. `Link(DISPLAY, URL)` becomes a coloured, underlined `\href` showing
//!    DISPLAY and pointing at URL.
//! 2. Bare email addresses become `mailto:` hyperlinks showing the address.
//!
//! Rule 2 only looks at text that rule 1 did not rewrite, so an address used
//! as a link target or display text is never wrapped twice. Neither rule can
//! fail: text that does not match is copied through unchanged.

use crate::config::MarkupStyle;
use crate::markup;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

// ── Rule 1: Link(DISPLAY, URL) ───────────────────────────────────────────────

static RE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Link\(([^,]+),\s*([^)]+)\)").unwrap());

// ── Rule 2: Bare email addresses ─────────────────────────────────────────────

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Rewrites `Link(...)` markup and email addresses into LaTeX hyperlinks.
#[derive(Debug, Clone, Copy)]
pub struct ContentFormatter<'a> {
    style: &'a MarkupStyle,
}

impl<'a> ContentFormatter<'a> {
    pub fn new(style: &'a MarkupStyle) -> Self {
        Self { style }
    }

    /// Apply both rules to `text`.
    pub fn format(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 64);
        let mut last = 0;

        for caps in RE_LINK.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_str(&self.format_emails(&text[last..whole.start()]));
            out.push_str(&self.render_link(&caps));
            last = whole.end();
        }
        out.push_str(&self.format_emails(&text[last..]));
        out
    }

    /// Apply rule 2 only.
    pub fn format_emails<'t>(&self, text: &'t str) -> Cow<'t, str> {
        RE_EMAIL.replace_all(text, |caps: &Captures<'_>| {
            markup::mailto(self.style, &caps[0])
        })
    }

    fn render_link(&self, caps: &Captures<'_>) -> String {
        markup::hyperlink(self.style, &caps[2], &caps[1])
    }
}

impl Default for ContentFormatter<'static> {
    fn default() -> Self {
        static DEFAULT_STYLE: Lazy<MarkupStyle> = Lazy::new(MarkupStyle::default);
        Self::new(&DEFAULT_STYLE)
    }
}

/// Format `text` with the default [`MarkupStyle`].
pub fn format_content(text: &str) -> String {
    ContentFormatter::default().format(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_rewrite() {
        let out = format_content("See Link(my site, http://example.com) for info");
        assert_eq!(
            out,
            r"See \href{http://example.com}{\textcolor{Purple_200}{\underline{my site}}} for info"
        );
    }

    #[test]
    fn test_link_without_space_after_comma() {
        let out = format_content("Link(docs,https://docs.rs)");
        assert!(out.starts_with(r"\href{https://docs.rs}{"), "got: {out}");
        assert!(out.contains(r"\underline{docs}"));
    }

    #[test]
    fn test_multiple_links() {
        let out = format_content("Link(a, http://a.io) and Link(b, http://b.io).");
        assert!(out.contains(r"\href{http://a.io}"));
        assert!(out.contains(r"\href{http://b.io}"));
        assert!(out.ends_with("}}}."), "got: {out}");
        assert!(!out.contains("Link("));
    }

    #[test]
    fn test_incomplete_link_left_alone() {
        let input = "Link(no comma here) and Link(a, unclosed";
        assert_eq!(format_content(input), input);
    }

    #[test]
    fn test_email_rewrite() {
        let out = format_content("Contact me at a.b@example.com today");
        assert_eq!(
            out,
            r"Contact me at \href{mailto:a.b@example.com}{\textcolor{Purple_200}{\underline{a.b@example.com}}} today"
        );
    }

    #[test]
    fn test_multiple_emails() {
        let out = format_content("x@a.org, y+tag@b.co.uk");
        assert!(out.contains(r"\href{mailto:x@a.org}"));
        assert!(out.contains(r"\href{mailto:y+tag@b.co.uk}"));
        assert!(out.contains(", "));
    }

    #[test]
    fn test_not_an_email() {
        for input in ["user@localhost", "@example.com", "a@b.c", "price: 5@10"] {
            assert_eq!(format_content(input), input, "input: {input}");
        }
    }

    #[test]
    fn test_email_inside_link_not_wrapped_twice() {
        let out = format_content("Link(write to me, mailto:me@example.com)");
        assert_eq!(out.matches(r"\href").count(), 1, "got: {out}");
        assert!(out.starts_with(r"\href{mailto:me@example.com}{"));
    }

    #[test]
    fn test_link_and_email_together() {
        let out = format_content("Link(site, https://x.dev) or jo@x.dev");
        assert_eq!(out.matches(r"\href").count(), 2, "got: {out}");
        assert!(out.contains(r"\href{mailto:jo@x.dev}"));
    }

    #[test]
    fn test_sequential_rules_match_combined_pass_without_overlap() {
        let f = ContentFormatter::default();
        let input = "Link(home, https://home.example) then mail jo@home.example";
        let links = RE_LINK.replace_all(input, |caps: &Captures<'_>| f.render_link(caps));
        let sequential = f.format_emails(&links).into_owned();
        assert_eq!(f.format(input), sequential);
    }

    #[test]
    fn test_custom_colour() {
        let style = MarkupStyle {
            link_color: "Navy".into(),
        };
        let out = ContentFormatter::new(&style).format("a@b.io");
        assert!(out.contains(r"\textcolor{Navy}"));
    }

    #[test]
    fn test_plain_text_unchanged() {
        let input = "Dear team,\n\nI would love to join.\n";
        assert_eq!(format_content(input), input);
    }
}
