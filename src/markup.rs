//! LaTeX markup emitted by the content formatter.
//!
//! Both rewrites produce the same construct, a coloured and underlined
//! `\href`, so the template lives here once. The colour name must be defined
//! by the LaTeX document that `\input`s the field files; this crate never
//! checks that.

use crate::config::MarkupStyle;

/// URL scheme prepended to bare email addresses.
pub const MAILTO_SCHEME: &str = "mailto:";

/// Render `text` as a coloured, underlined hyperlink to `target`.
///
/// Produces `\href{TARGET}{\textcolor{COLOR}{\underline{TEXT}}}`. Neither
/// argument is escaped.
pub fn hyperlink(style: &MarkupStyle, target: &str, text: &str) -> String {
    format!(
        "\\href{{{target}}}{{\\textcolor{{{color}}}{{\\underline{{{text}}}}}}}",
        color = style.link_color
    )
}

/// Render an email address as a `mailto:` hyperlink showing the address.
pub fn mailto(style: &MarkupStyle, address: &str) -> String {
    hyperlink(style, &format!("{MAILTO_SCHEME}{address}"), address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperlink_template() {
        let style = MarkupStyle::default();
        assert_eq!(
            hyperlink(&style, "http://example.com", "my site"),
            r"\href{http://example.com}{\textcolor{Purple_200}{\underline{my site}}}"
        );
    }

    #[test]
    fn test_mailto_template() {
        let style = MarkupStyle {
            link_color: "Teal".into(),
        };
        assert_eq!(
            mailto(&style, "a.b@example.com"),
            r"\href{mailto:a.b@example.com}{\textcolor{Teal}{\underline{a.b@example.com}}}"
        );
    }
}
