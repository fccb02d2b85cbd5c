//! Header field and summary extraction. Every function short-circuits to an
//! empty string when its pattern is absent; a missing field is never an error.

use super::lines::{Line, LineKind};
use super::spans;

/// Glyph markers acting as cheap semantic tags on contact lines, so free-text
/// contact info can be told apart without a markdown AST.
const EMAIL_MARKER: &str = "📧";
const LINKEDIN_MARKER: &str = "🔗";
const GITHUB_MARKER: &str = "🐙";
const PORTFOLIO_MARKER: &str = "🌐";
const LOCATION_MARKER: &str = "📍 Location:";

/// Name from the first level-1 heading.
pub(super) fn name(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .find_map(|line| match line.kind {
            LineKind::Heading1(title) => Some(title.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

/// Professional title from the first bold span anywhere in the document. The
/// title appearing before any other bold text is an authoring constraint of
/// the source document, not something validated here.
pub(super) fn title(source: &str) -> String {
    spans::first_bold(source).unwrap_or_default().to_string()
}

pub(super) fn email(lines: &[Line<'_>]) -> String {
    contact(lines, EMAIL_MARKER)
}

pub(super) fn linkedin(lines: &[Line<'_>]) -> String {
    contact(lines, LINKEDIN_MARKER)
}

pub(super) fn github(lines: &[Line<'_>]) -> String {
    contact(lines, GITHUB_MARKER)
}

pub(super) fn portfolio(lines: &[Line<'_>]) -> String {
    contact(lines, PORTFOLIO_MARKER)
}

/// Label of the first bracketed link following the glyph marker on one line.
fn contact(lines: &[Line<'_>], marker: &str) -> String {
    lines
        .iter()
        .find_map(|line| spans::label_after_marker(line.raw, marker))
        .unwrap_or_default()
        .to_string()
}

/// Free text following the `📍 Location:` tag on its line.
pub(super) fn location(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .find_map(|line| {
            let start = line.raw.find(LOCATION_MARKER)?;
            Some(line.raw[start + LOCATION_MARKER.len()..].trim().to_string())
        })
        .unwrap_or_default()
}

/// Body of the `## Summary` heading, up to the next level-2 heading or the
/// end of the document.
pub(super) fn summary(lines: &[Line<'_>]) -> String {
    let Some(start) = lines.iter().position(|line| line.heading2() == Some("Summary")) else {
        return String::new();
    };

    let body = &lines[start + 1..];
    let end = body
        .iter()
        .position(|line| line.heading2().is_some())
        .unwrap_or(body.len());

    let text: Vec<&str> = body[..end].iter().map(|line| line.raw).collect();
    text.join("\n").trim().to_string()
}

#[cfg(test)]
mod test {
    use super::super::lines::tokenize;
    use super::*;

    #[test]
    fn name_from_first_level_one_heading() {
        let lines = tokenize("intro text\n# Jane Doe\n# Someone Else");
        assert_eq!("Jane Doe", name(&lines));
    }

    #[test]
    fn missing_name_is_empty_not_an_error() {
        let lines = tokenize("## Summary\n\nNo level-1 heading here.");
        assert_eq!("", name(&lines));
    }

    #[test]
    fn contact_fields_capture_the_label_text() {
        let source = "\
# Jane Doe
📧 Email: [jane@doe.dev](mailto:jane@doe.dev)
🔗 LinkedIn: [linkedin.com/in/janedoe](https://linkedin.com/in/janedoe)
🐙 GitHub: [github.com/janedoe](https://github.com/janedoe)
🌐 Portfolio: [janedoe.dev](https://janedoe.dev)
📍 Location: Denver, CO";
        let lines = tokenize(source);

        assert_eq!("jane@doe.dev", email(&lines));
        assert_eq!("linkedin.com/in/janedoe", linkedin(&lines));
        assert_eq!("github.com/janedoe", github(&lines));
        assert_eq!("janedoe.dev", portfolio(&lines));
        assert_eq!("Denver, CO", location(&lines));
    }

    #[test]
    fn absent_contact_fields_are_independent() {
        let lines = tokenize("📧 Email: [jane@doe.dev](mailto:jane@doe.dev)");

        assert_eq!("jane@doe.dev", email(&lines));
        assert_eq!("", linkedin(&lines));
        assert_eq!("", location(&lines));
    }

    #[test]
    fn summary_runs_to_next_heading() {
        let source = "\
## Summary

First paragraph.

Second paragraph.

## Experience

**Acme**, Denver - *2022*";
        let lines = tokenize(source);

        assert_eq!("First paragraph.\n\nSecond paragraph.", summary(&lines));
    }

    #[test]
    fn summary_absent_yields_empty() {
        let lines = tokenize("# Jane Doe\n\n## Experience\n");
        assert_eq!("", summary(&lines));
    }
}
