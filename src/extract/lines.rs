//! Line tokenizer for the fixed resume document shape. The extractor never
//! needs a full CommonMark event stream; headings, bullets, and bold-opening
//! lines are the only structure the classifier keys on.

/// A single raw source line along with its structural classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Line<'a> {
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineKind<'a> {
    /// `# Title`, title trimmed.
    Heading1(&'a str),
    /// `## Title`, title trimmed. Deeper headings stay `Text`.
    Heading2(&'a str),
    /// `- text`, text untrimmed past the marker.
    Bullet(&'a str),
    /// Anything else, including blank lines.
    Text,
}

impl<'a> Line<'a> {
    fn classify(raw: &'a str) -> Line<'a> {
        let kind = if let Some(title) = heading(raw, "# ") {
            LineKind::Heading1(title)
        } else if let Some(title) = heading(raw, "## ") {
            LineKind::Heading2(title)
        } else if let Some(text) = raw.strip_prefix("- ") {
            LineKind::Bullet(text)
        } else {
            LineKind::Text
        };

        Line { raw, kind }
    }

    /// Whether this line starts a new entry block within a section body.
    pub fn opens_bold(&self) -> bool {
        self.raw.starts_with("**")
    }

    /// The heading title when this line is a level-2 heading.
    pub fn heading2(&self) -> Option<&'a str> {
        match self.kind {
            LineKind::Heading2(title) => Some(title),
            _ => None,
        }
    }
}

fn heading<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = raw.strip_prefix(prefix)?;

    // A longer marker run (`###`) must not be mistaken for a shorter heading.
    if rest.starts_with('#') {
        return None;
    }

    let title = rest.trim();
    if title.is_empty() {
        return None;
    }

    Some(title)
}

pub(super) fn tokenize(source: &str) -> Vec<Line<'_>> {
    source.lines().map(Line::classify).collect()
}
