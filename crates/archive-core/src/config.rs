//! Archive configuration (`archive.yaml`)
//!
//! Loaded once per run and treated as read-only input:
//!
//! ```yaml
//! site:
//!   author: Jane Doe
//!   bio: Researcher and lecturer.
//!   contacts:
//!     email: jane@example.org
//!     github: janedoe
//!
//! groups:
//!   - name: Research
//!     tags: [phd, conference]
//!   - name: Teaching
//!     tags: [polytech]
//!
//! sections:
//!   - path: /
//!     label: Home
//!   - path: /talks/
//!     label: Talks
//!     filter:
//!       tag: talk
//!   - path: /teaching/
//!     label: Teaching
//!     filter:
//!       has_course: true
//!
//! aliases:
//!   ml: [machine-learning, ML]
//! ```

use std::collections::HashSet;
use std::path::Path;

use archive_tags::AliasTable;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ArchiveError, Result};

/// Name of the residual group holding everything no configured group claims.
pub const OTHER_GROUP: &str = "Other";

/// Full archive.yaml configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub aliases: AliasTable,
}

/// Site metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub author: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub contacts: Option<Contacts>,
}

/// Contact information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scholar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Tag-based group on the main page. A classification rule, not an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Group {
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

/// Filter configuration for a section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFilter {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub has_course: Option<bool>,
}

/// Site section configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub path: String,
    pub label: String,
    #[serde(default)]
    pub filter: Option<SectionFilter>,
    #[serde(default = "default_group_by")]
    pub group_by: Vec<String>,
}

fn default_group_by() -> Vec<String> {
    vec!["year".to_string()]
}

impl Section {
    /// Section path without surrounding slashes (`/talks/` → `talks`).
    pub fn clean_path(&self) -> &str {
        self.path.trim_matches('/')
    }

    /// Whether this section is the site root.
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Whether this section lists courses (the teaching area).
    pub fn is_teaching(&self) -> bool {
        self.filter
            .as_ref()
            .is_some_and(|f| f.has_course == Some(true))
    }
}

impl ArchiveConfig {
    /// Create a config with only site metadata
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                author: author.into(),
                bio: None,
                contacts: None,
            },
            groups: Vec::new(),
            sections: Vec::new(),
            aliases: AliasTable::new(),
        }
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ArchiveConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| ArchiveError::io(path, e))?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(
            config_path = ?path,
            groups = config.groups.len(),
            sections = config.sections.len(),
            aliases = config.aliases.len(),
            "Loaded archive config"
        );
        Ok(config)
    }

    /// Validate structural rules serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.site.author.trim().is_empty() {
            return Err(ArchiveError::InvalidConfig(
                "site.author must not be empty".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for group in &self.groups {
            let name = group.name.trim();
            if name.is_empty() {
                return Err(ArchiveError::InvalidConfig(
                    "group name must not be empty".to_string(),
                ));
            }
            if name == OTHER_GROUP {
                return Err(ArchiveError::InvalidConfig(format!(
                    "group name `{}` is reserved for ungrouped items",
                    OTHER_GROUP
                )));
            }
            if !names.insert(name) {
                return Err(ArchiveError::InvalidConfig(format!(
                    "duplicate group name `{}`",
                    name
                )));
            }
        }

        for section in &self.sections {
            if section.path.trim().is_empty() {
                return Err(ArchiveError::InvalidConfig(format!(
                    "section `{}` has an empty path",
                    section.label
                )));
            }
            if section.label.trim().is_empty() {
                return Err(ArchiveError::InvalidConfig(format!(
                    "section `{}` has an empty label",
                    section.path
                )));
            }
        }

        Ok(())
    }

    /// Normalize a value using aliases. Returns the canonical form.
    pub fn normalize<'a>(&'a self, value: &'a str) -> &'a str {
        self.aliases.normalize(value)
    }

    /// Normalize a list of values, preserving order and removing duplicates.
    pub fn normalize_list<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        self.aliases.normalize_list(values)
    }
}
