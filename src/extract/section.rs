//! Section scan, entry segmentation, and entry classification.

use crate::model::{Entry, InlineEntry, Section, SectionKind, StructuredEntry};

use super::lines::{Line, LineKind};
use super::spans;

/// Meta-label marking a bullet as entry metadata rather than an achievement.
const TECHNOLOGIES_LABEL: &str = "Technologies:";

/// Collects the recognized sections in document order. A section body runs
/// from just past its heading to the next level-2 heading (recognized or not)
/// or the end of the document.
pub(super) fn sections(lines: &[Line<'_>]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let Some(kind) = lines[idx].heading2().and_then(SectionKind::from_heading) else {
            idx += 1;
            continue;
        };

        let body = &lines[idx + 1..];
        let len = body
            .iter()
            .position(|line| line.heading2().is_some())
            .unwrap_or(body.len());

        sections.push(Section {
            kind,
            entries: entries(&body[..len]),
        });

        idx += 1 + len;
    }

    sections
}

/// Splits a section body into entry blocks at every bold-opening line and
/// classifies each block. Blocks that fit neither known shape contribute
/// nothing.
///
/// Known limitation: the split is a block heuristic, not a line classifier. A
/// continuation line that itself begins with `**` starts a new block and the
/// text is lost to classification.
fn entries(body: &[Line<'_>]) -> Vec<Entry> {
    let mut boundaries = vec![0];
    boundaries.extend(
        body.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(idx, line)| line.opens_bold().then_some(idx)),
    );
    boundaries.push(body.len());

    boundaries
        .windows(2)
        .filter_map(|window| classify(&body[window[0]..window[1]]))
        .collect()
}

/// First rule that matches wins, judged on the block's first line only.
fn classify(block: &[Line<'_>]) -> Option<Entry> {
    if let Some(entry) = inline_entry(block.first()?.raw) {
        return Some(Entry::Inline(entry));
    }

    structured_entry(block).map(Entry::Structured)
}

/// `**<label-without-colon>:** <rest-of-line>` — the skill-category shape.
fn inline_entry(first: &str) -> Option<InlineEntry> {
    let (label, rest) = spans::leading_bold(first)?;
    let title = label.strip_suffix(':')?;
    if title.contains(':') {
        return None;
    }

    let subtitle = rest.trim();
    if subtitle.is_empty() {
        return None;
    }

    Some(InlineEntry {
        title: title.trim().to_string(),
        subtitle: subtitle.to_string(),
    })
}

/// `**<title>**[,] <remainder> - *<sub_subtitle>*`, or the two-part fallback
/// `**<title>**, *<sub_subtitle>*`. The bold span is kept whole as the title;
/// a comma-joined `Company, Role` is never split here.
fn structured_entry(block: &[Line<'_>]) -> Option<StructuredEntry> {
    let (title, rest) = spans::leading_bold(block.first()?.raw)?;

    let rest = rest.trim_start();
    let (had_comma, rest) = match rest.strip_prefix(',') {
        Some(stripped) => (true, stripped),
        None => (false, rest),
    };
    let rest = rest.trim();

    // The line must close with an emphasis run; its text is the date slot.
    let before_close = rest.strip_suffix('*')?;
    let open = before_close.rfind('*')?;
    let sub_subtitle = before_close[open + 1..].trim();
    if sub_subtitle.is_empty() {
        return None;
    }

    let pre = before_close[..open].trim_end();
    let subtitle = if let Some(pre) = pre.strip_suffix('-') {
        join_fragments(pre)
    } else if pre.is_empty() && had_comma {
        // Two-part form: `**title**, *date*` with no subtitle slot.
        String::new()
    } else {
        return None;
    };

    let (bullets, technologies) = bullet_lines(block);

    Some(StructuredEntry {
        title: title.to_string(),
        subtitle,
        sub_subtitle: sub_subtitle.to_string(),
        bullets,
        technologies,
    })
}

/// Joins the remainder's plain-text fragments with " • ", eliding emphasis
/// runs and trimming stray dashes left over from the date separator.
fn join_fragments(pre: &str) -> String {
    let fragments: Vec<&str> = spans::plain_fragments(pre)
        .into_iter()
        .map(|fragment| fragment.trim().trim_matches('-').trim())
        .filter(|fragment| !fragment.is_empty())
        .collect();

    fragments.join(" • ")
}

fn bullet_lines(block: &[Line<'_>]) -> (Vec<String>, Vec<String>) {
    let mut bullets = Vec::new();
    let mut technologies = Vec::new();

    for line in block {
        let LineKind::Bullet(text) = line.kind else {
            continue;
        };

        let text = text.replace("**", "");
        let text = text.trim();

        if let Some(rest) = text.strip_prefix(TECHNOLOGIES_LABEL) {
            technologies.extend(
                rest.split(',')
                    .map(str::trim)
                    .filter(|tech| !tech.is_empty())
                    .map(String::from),
            );
        } else {
            bullets.push(text.to_string());
        }
    }

    (bullets, technologies)
}
