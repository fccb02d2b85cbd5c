//! Reverse-chronological timeline derived from a [`ResumeRecord`]. The page
//! loader consumes these items instead of re-deriving org/role/date from raw
//! markdown with a second set of rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::model::{Entry, ResumeRecord, SectionKind, StructuredEntry};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimelineKind {
    Experience,
    Education,
}

/// One rendered stop on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineItem {
    pub kind: TimelineKind,
    /// The entry title, kept whole (`Company, Role` is never split).
    pub title: String,
    /// The date range, prefixed with the location/org subtitle for education
    /// items when one is present.
    pub period: String,
    /// Bullets joined with " • ".
    pub description: String,
    /// End of the range, used only for ordering. `None` means the range reads
    /// as current (contains "present" or has no parseable date) and sorts
    /// newest. Skipped on the wire; consumers render `period` instead.
    #[serde(skip)]
    pub sort_date: Option<NaiveDate>,
}

/// Builds the timeline from the Experience and Education sections, newest
/// first. Inline entries never appear on a timeline and are skipped.
pub fn timeline(record: &ResumeRecord) -> Vec<TimelineItem> {
    let mut items = Vec::new();

    for (kind, section_kind) in [
        (TimelineKind::Experience, SectionKind::Experience),
        (TimelineKind::Education, SectionKind::Education),
    ] {
        let Some(section) = record.section(section_kind) else {
            continue;
        };

        for entry in &section.entries {
            if let Entry::Structured(entry) = entry {
                items.push(item(kind, entry));
            }
        }
    }

    // Stable sort keeps document order for same-dated and current items.
    items.sort_by_key(|item| Reverse(item.sort_date.unwrap_or(NaiveDate::MAX)));

    items
}

fn item(kind: TimelineKind, entry: &StructuredEntry) -> TimelineItem {
    let period = match kind {
        TimelineKind::Education if !entry.subtitle.is_empty() => {
            format!("{} • {}", entry.subtitle, entry.sub_subtitle)
        }
        _ => entry.sub_subtitle.clone(),
    };

    TimelineItem {
        kind,
        title: entry.title.clone(),
        period,
        description: entry.bullets.join(" • "),
        sort_date: sort_date(&entry.sub_subtitle),
    }
}

/// The last `Month YYYY` pair in the range. A range containing "present" in
/// any case counts as current.
fn sort_date(range: &str) -> Option<NaiveDate> {
    if range.to_lowercase().contains("present") {
        return None;
    }

    let tokens: Vec<&str> = range.split_whitespace().collect();
    tokens
        .windows(2)
        .rev()
        .find_map(|pair| month_year(pair[0], pair[1]))
}

fn month_year(month: &str, year: &str) -> Option<NaiveDate> {
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // %B accepts both full and abbreviated month names when parsing.
    NaiveDate::parse_from_str(&format!("{month} 1 {year}"), "%B %d %Y").ok()
}
