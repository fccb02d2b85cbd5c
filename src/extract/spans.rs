//! Inline span scanning: bold runs, single-asterisk emphasis runs, and
//! bracketed link labels. These are substring scans, not markdown parsing —
//! the document shape is author-controlled and the extractor only needs the
//! handful of inline forms the resume actually uses.

/// The first `**…**` span anywhere in the text, inner text trimmed.
pub(super) fn first_bold(text: &str) -> Option<&str> {
    let start = text.find("**")? + 2;
    let len = text[start..].find("**")?;

    Some(text[start..start + len].trim())
}

/// Splits a line that opens with a bold span into `(inner, rest)`, where
/// `rest` is everything after the closing `**`.
pub(super) fn leading_bold(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix("**")?;
    let len = inner.find("**")?;

    Some((inner[..len].trim(), &inner[len + 2..]))
}

/// The first `[label]` appearing after `marker` on the line.
pub(super) fn label_after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = &line[line.find(marker)? + marker.len()..];
    let start = rest.find('[')? + 1;
    let len = rest[start..].find(']')?;

    Some(&rest[start..start + len])
}

/// Text fragments lying outside `*…*` emphasis runs, in order. Bold markers
/// never reach this scanner; callers strip the leading bold span first.
pub(super) fn plain_fragments(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut rest = text;

    loop {
        match rest.find('*') {
            Some(open) => {
                fragments.push(&rest[..open]);
                let after = &rest[open + 1..];
                match after.find('*') {
                    // Skip over the emphasis run.
                    Some(close) => rest = &after[close + 1..],
                    None => return fragments,
                }
            }
            None => {
                fragments.push(rest);
                return fragments;
            }
        }
    }
}
