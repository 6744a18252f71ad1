//! Section filters.
//!
//! Section pages select publications with a simple predicate. This is
//! independent of the index grouping: a publication may appear on its topic
//! page and inside a group on the index.

use archive_domain::Publication;

use crate::config::{ArchiveConfig, SectionFilter};

/// Criteria for selecting publications. Unset criteria match everything;
/// set criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationFilter<'a> {
    /// Keep records whose normalized tags contain this (normalized) tag
    pub tag: Option<&'a str>,
    /// Keep records with (`true`) or without (`false`) a course name
    pub has_course: Option<bool>,
}

impl<'a> PublicationFilter<'a> {
    pub fn tag(tag: &'a str) -> Self {
        Self {
            tag: Some(tag),
            has_course: None,
        }
    }

    pub fn has_course(has_course: bool) -> Self {
        Self {
            tag: None,
            has_course: Some(has_course),
        }
    }

    /// Test a single publication.
    pub fn matches(&self, publication: &Publication, config: &ArchiveConfig) -> bool {
        if let Some(tag) = self.tag.filter(|t| !t.is_empty()) {
            let wanted = config.normalize(tag);
            let has_tag = publication
                .tags
                .iter()
                .any(|t| config.normalize(t) == wanted);
            if !has_tag {
                return false;
            }
        }

        match self.has_course {
            Some(expected) => publication.has_course() == expected,
            None => true,
        }
    }
}

impl<'a> From<&'a SectionFilter> for PublicationFilter<'a> {
    fn from(filter: &'a SectionFilter) -> Self {
        Self {
            tag: filter.tag.as_deref(),
            has_course: filter.has_course,
        }
    }
}

/// Filter publications by criteria, keeping input order.
pub fn filter_publications<'p>(
    publications: &'p [Publication],
    config: &ArchiveConfig,
    tag: Option<&str>,
    has_course: Option<bool>,
) -> Vec<&'p Publication> {
    let filter = PublicationFilter { tag, has_course };
    publications
        .iter()
        .filter(|p| filter.matches(p, config))
        .collect()
}
