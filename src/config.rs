use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};
use toml::{value::Table, Value};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Configuration for the resume source itself.
    pub resume: ResumeConfig,

    /// Any remaining configuration for renderers and other consumers.
    rest: Value,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let mut buffer = String::new();
        File::open(path)
            .with_context(|| "Failed to open config file")?
            .read_to_string(&mut buffer)
            .with_context(|| "Failed to read config file")?;

        Config::from_str(&buffer)
    }

    /// Deserializes a renderer-specific table kept outside the `[resume]`
    /// section.
    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let Value::Table(table) = &self.rest else {
            anyhow::bail!("resume.toml must always be a toml table");
        };

        let value = table
            .get(key)
            .with_context(|| format!("Missing configuration section: {key}"))?;

        value
            .clone()
            .try_into()
            .with_context(|| format!("Failed to deserialize configuration section: {key}"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resume: ResumeConfig::default(),
            rest: Value::Table(Table::default()),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = Value::deserialize(deserializer)?;
        let Value::Table(mut table) = raw else {
            return Err(D::Error::custom("resume.toml must always be a toml table"));
        };

        let resume: ResumeConfig = table
            .remove("resume")
            .map(|resume| resume.try_into().map_err(D::Error::custom))
            .transpose()?
            .unwrap_or_default();

        let config = Config {
            resume,
            rest: Value::Table(table),
        };

        Ok(config)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        toml::from_str(source).with_context(|| "Attempted to parse invalid configuration file")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ResumeConfig {
    /// Optional site title shown by consumers.
    pub title: Option<String>,
    /// List of authors of the resume source.
    pub authors: Vec<String>,
    /// Relative path to the markdown source.
    pub source: PathBuf,
    /// Summary text used when the source cannot be read.
    pub fallback_summary: Option<String>,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            title: None,
            authors: Vec::new(),
            source: PathBuf::from("./resume.md"),
            fallback_summary: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_the_resume_table() {
        let source = r#"
[resume]
title = "Jane Doe — Portfolio"
source = "./content/resume.md"
fallback-summary = "Engineer who ships."
"#;
        let config = Config::from_str(source).expect("config failed to parse");

        assert_eq!(
            Some(String::from("Jane Doe — Portfolio")),
            config.resume.title
        );
        assert_eq!(PathBuf::from("./content/resume.md"), config.resume.source);
        assert_eq!(
            Some(String::from("Engineer who ships.")),
            config.resume.fallback_summary
        );
    }

    #[test]
    fn missing_resume_table_falls_back_to_defaults() {
        let config = Config::from_str("").expect("config failed to parse");

        assert_eq!(ResumeConfig::default(), config.resume);
        assert_eq!(PathBuf::from("./resume.md"), config.resume.source);
    }

    #[test]
    fn preserves_unknown_sections_for_consumers() {
        #[derive(Debug, Deserialize, PartialEq, Eq)]
        #[serde(rename_all = "kebab-case")]
        struct PdfConfig {
            output_file: String,
        }

        let source = r#"
[resume]
source = "./resume.md"

[renderer-pdf]
output-file = "resume.pdf"
"#;
        let config = Config::from_str(source).expect("config failed to parse");
        let pdf: PdfConfig = config.get("renderer-pdf").expect("should be deserializable");

        assert_eq!(
            PdfConfig {
                output_file: String::from("resume.pdf")
            },
            pdf
        );
    }
}
