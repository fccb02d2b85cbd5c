//! The ResumeExtractor: a pure, total transformation from raw resume markdown
//! to a [`ResumeRecord`]. Absent fields become empty strings, malformed entry
//! blocks are dropped, and no input ever produces an error — the worst case is
//! an under-populated record.

mod fields;
mod lines;
mod section;
mod spans;

use std::str::FromStr;

use crate::error::Error;
use crate::model::ResumeRecord;

pub struct ResumeExtractor<'a> {
    source: &'a str,
    lines: Vec<lines::Line<'a>>,
}

impl<'a> ResumeExtractor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lines: lines::tokenize(source),
        }
    }

    /// Runs every field extractor and the section scan. Each header field
    /// matches independently against the whole document, so one malformed
    /// line never blocks the others.
    pub fn extract(self) -> ResumeRecord {
        ResumeRecord {
            name: fields::name(&self.lines),
            title: fields::title(self.source),
            email: fields::email(&self.lines),
            location: fields::location(&self.lines),
            linkedin: fields::linkedin(&self.lines),
            github: fields::github(&self.lines),
            portfolio: fields::portfolio(&self.lines),
            summary: fields::summary(&self.lines),
            sections: section::sections(&self.lines),
        }
    }
}

impl FromStr for ResumeRecord {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(ResumeExtractor::new(source).extract())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::SectionKind;

    const SOURCE: &str = "\
# Jane Doe

**Machine Learning Engineer**

📧 Email: [jane@doe.dev](mailto:jane@doe.dev)
📍 Location: Denver, CO

## Summary

Engineer who ships.

## Experience

**Acme Corp, Senior Engineer**, Denver, CO - *Jan 2022 - Present*
- Shipped X

## Technical Skills

**Languages:** Python, Go
";

    #[test]
    fn extracts_the_full_record() {
        let record: ResumeRecord = SOURCE.parse().expect("extraction is total");

        assert_eq!("Jane Doe", record.name);
        assert_eq!("Machine Learning Engineer", record.title);
        assert_eq!("jane@doe.dev", record.email);
        assert_eq!("Denver, CO", record.location);
        assert_eq!("", record.linkedin);
        assert_eq!("Engineer who ships.", record.summary);
        assert_eq!(2, record.sections.len());
        assert!(record.section(SectionKind::Experience).is_some());
        assert!(record.section(SectionKind::TechnicalSkills).is_some());
    }

    #[test]
    fn extraction_is_idempotent() {
        let first: ResumeRecord = SOURCE.parse().expect("extraction is total");
        let second: ResumeRecord = SOURCE.parse().expect("extraction is total");

        assert_eq!(first, second);
    }

    #[test]
    fn empty_document_yields_empty_record() {
        let record: ResumeRecord = "".parse().expect("extraction is total");

        assert_eq!(ResumeRecord::default(), record);
    }
}
