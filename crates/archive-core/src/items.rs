//! Content-tree item shapes handed to the templating layer.
//!
//! Items are plain data: no markup, no escaping. Text fields that went
//! through the alias table carry canonical forms.

use archive_domain::Publication;
use serde::Serialize;

use crate::config::ArchiveConfig;
use crate::course::Course;

/// A standalone publication on the index or a section page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationItem {
    pub title: String,
    /// Empty string when the record has no URL
    pub url: String,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

/// A course as it appears among publications on the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseItem {
    pub title: String,
    pub slug: String,
    pub school: String,
    pub year: i32,
    pub lecture_count: usize,
    pub is_course: bool,
}

/// One entry of a year bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupItem {
    Publication(PublicationItem),
    Course(CourseItem),
}

impl GroupItem {
    pub fn title(&self) -> &str {
        match self {
            GroupItem::Publication(item) => &item.title,
            GroupItem::Course(item) => &item.title,
        }
    }

    pub fn is_course(&self) -> bool {
        matches!(self, GroupItem::Course(_))
    }
}

/// A lecture inside a course card or course page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LectureItem {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    /// Normalized section name; only present on course pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// A course with its lectures, as listed on the teaching index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCard {
    pub title: String,
    pub slug: String,
    pub year: i32,
    pub lecture_count: usize,
    pub lectures: Vec<LectureItem>,
}

/// Convert publication to item for the index or a section page.
pub fn publication_item(publication: &Publication, config: &ArchiveConfig) -> PublicationItem {
    let authors = publication
        .author_names()
        .iter()
        .map(|name| config.normalize(name).to_string())
        .collect();

    PublicationItem {
        title: publication.title.clone(),
        url: publication.url.clone().unwrap_or_default(),
        authors,
        tags: config.normalize_list(&publication.tags),
        pdf: publication.pdf.clone(),
    }
}

/// Convert course to item for the index.
pub fn course_item(course: &Course, config: &ArchiveConfig) -> CourseItem {
    CourseItem {
        title: config.normalize(&course.name).to_string(),
        slug: course.slug.clone(),
        school: course.school.clone(),
        year: course.year,
        lecture_count: course.lecture_count(),
        is_course: true,
    }
}

/// Convert lecture to item for a course card.
pub fn lecture_item(lecture: &Publication) -> LectureItem {
    LectureItem {
        title: lecture.title.clone(),
        url: lecture.url.clone().unwrap_or_default(),
        pdf: lecture.pdf.clone(),
        section: None,
    }
}

/// Convert lecture to item for a course page, with its normalized section.
pub fn lecture_page_item(lecture: &Publication, config: &ArchiveConfig) -> LectureItem {
    LectureItem {
        section: Some(
            lecture
                .section
                .as_deref()
                .map(|s| config.normalize(s).to_string())
                .unwrap_or_default(),
        ),
        ..lecture_item(lecture)
    }
}

/// Convert course to card with lectures for the teaching index.
pub fn course_card(course: &Course, config: &ArchiveConfig) -> CourseCard {
    CourseCard {
        title: config.normalize(&course.name).to_string(),
        slug: course.slug.clone(),
        year: course.year,
        lecture_count: course.lecture_count(),
        lectures: course.lectures.iter().map(lecture_item).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archive_domain::Author;
    use archive_tags::AliasTable;

    fn config() -> ArchiveConfig {
        let mut config = ArchiveConfig::new("A");
        config.aliases = AliasTable::new()
            .with("ml", ["ML", "machine-learning"])
            .with("Ivan Petrov", ["I. Petrov"]);
        config
    }

    #[test]
    fn test_publication_item() {
        let pub_ = Publication::new("p", "journalArticle", 2020, "Paper")
            .with_tags(["ML", "ml", "rust"])
            .with_authors(vec![
                Author::new("I.", "Petrov"),
                Author::new("", ""),
                Author::new("Ada", "Lovelace"),
            ])
            .with_pdf("/pdf/paper.pdf");
        let item = publication_item(&pub_, &config());
        assert_eq!(item.url, "");
        assert_eq!(item.tags, vec!["ml", "rust"]);
        assert_eq!(item.authors, vec!["Ivan Petrov", "Ada Lovelace"]);
        assert_eq!(item.pdf.as_deref(), Some("/pdf/paper.pdf"));
    }

    #[test]
    fn test_publication_item_json_shape() {
        let pub_ = Publication::new("p", "journalArticle", 2020, "Paper").with_url("https://x.org");
        let json = serde_json::to_value(GroupItem::Publication(publication_item(&pub_, &config()))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Paper", "url": "https://x.org", "authors": [], "tags": []})
        );
    }

    #[test]
    fn test_lecture_page_item_section() {
        let lecture = Publication::new("l", "presentation", 2020, "Intro").with_section("machine-learning");
        assert_eq!(lecture_page_item(&lecture, &config()).section.as_deref(), Some("ml"));
        let plain = Publication::new("l", "presentation", 2020, "Intro");
        assert_eq!(lecture_page_item(&plain, &config()).section.as_deref(), Some(""));
        assert_eq!(lecture_item(&plain).section, None);
    }
}
