use serde::{Deserialize, Serialize};

/// A `ResumeRecord` is the structured form of a single hand-authored resume
/// markdown document. Every field degrades to empty rather than erroring, so a
/// record always exists even for badly mangled input.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeRecord {
    /// Name taken from the first level-1 heading.
    pub name: String,
    /// Professional title taken from the first bold span in the document.
    pub title: String,
    /// Contact fields, each keyed by its glyph marker line. The captured text
    /// is the bracketed link label, not the URL.
    pub email: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    /// Body of the `## Summary` heading, up to the next level-2 heading.
    pub summary: String,
    /// Recognized sections in document order.
    pub sections: Vec<Section>,
}

impl ResumeRecord {
    /// Looks up the first section of the given kind. Duplicate headings each
    /// produce a section, so callers wanting the rest iterate `sections`.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}

/// The closed set of recognized level-2 headings. Anything else in the source
/// document is skipped; new section types require extending this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SectionKind {
    Experience,
    Education,
    Projects,
    #[serde(rename = "Technical Skills")]
    TechnicalSkills,
}

impl SectionKind {
    /// Maps a heading title to a section kind. Exact, case-sensitive match.
    pub fn from_heading(title: &str) -> Option<SectionKind> {
        match title {
            "Experience" => Some(SectionKind::Experience),
            "Education" => Some(SectionKind::Education),
            "Projects" => Some(SectionKind::Projects),
            "Technical Skills" => Some(SectionKind::TechnicalSkills),
            _ => None,
        }
    }

    /// The heading title this kind was matched from.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Projects => "Projects",
            SectionKind::TechnicalSkills => "Technical Skills",
        }
    }
}

/// A `Section` holds the entries found under one recognized heading, in the
/// order they appear in the source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub entries: Vec<Entry>,
}

/// One item within a section: either a single `label: value` line (skill
/// categories) or a full titled block with bullets (jobs, degrees, projects).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Entry {
    Inline(InlineEntry),
    Structured(StructuredEntry),
}

/// Skill-category shape: `**Languages:** Python, Go`. Never carries bullets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineEntry {
    /// Category label, without the trailing colon.
    pub title: String,
    /// Everything after the colon, verbatim.
    pub subtitle: String,
}

/// Job/degree/project shape: a bold title line followed by `- ` bullets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StructuredEntry {
    /// The full bold span of the first line, kept whole. A comma-joined
    /// `Company, Role` stays one string; consumers that want the parts split
    /// do so themselves.
    pub title: String,
    /// Location or organization text between the title and the date, with
    /// emphasis runs elided and fragments joined by " • ". Empty for the
    /// two-part `**title**, *date*` form.
    pub subtitle: String,
    /// The final emphasis run of the first line, typically a date range.
    pub sub_subtitle: String,
    /// Achievement lines in source order, bold markers stripped.
    pub bullets: Vec<String>,
    /// Comma-split value of a `Technologies:` meta bullet, which is metadata
    /// about the entry rather than a displayable achievement line.
    pub technologies: Vec<String>,
}
