//! Publication domain model

use super::{author_display_names, is_course_type, Author, PartialDate, PublicationType};
use serde::{Deserialize, Deserializer, Serialize};

/// Publication language, reduced to the two the site distinguishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    /// Normalize a free-text language code ("ru", "ru-RU", "Russian", "en").
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(code) if code.to_lowercase().contains("ru") => Language::Russian,
            _ => Language::English,
        }
    }
}

impl From<Option<String>> for Language {
    fn from(code: Option<String>) -> Self {
        Language::from_code(code.as_deref())
    }
}

/// A publication (paper, talk, lecture, web post).
///
/// Field names follow the `publications.json` export: the course name is
/// stored as `series` and the website override as `websiteType`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(
        rename = "websiteType",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub website_type: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub pdf: Option<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(
        rename = "series",
        alias = "course",
        default,
        deserialize_with = "empty_as_none"
    )]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub section: Option<String>,
    #[serde(
        rename = "presentationType",
        default,
        deserialize_with = "empty_as_none"
    )]
    pub presentation_type: Option<String>,
}

impl Publication {
    /// Create a new publication with required fields
    pub fn new(
        id: impl Into<String>,
        entry_type: impl Into<String>,
        year: i32,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entry_type: entry_type.into(),
            website_type: None,
            year,
            month: None,
            day: None,
            title: title.into(),
            authors: Vec::new(),
            tags: Vec::new(),
            url: None,
            pdf: None,
            language: Language::English,
            course: None,
            school: None,
            section: None,
            presentation_type: None,
        }
    }

    /// Builder method to set month and day
    pub fn with_date(mut self, month: Option<u32>, day: Option<u32>) -> Self {
        self.month = month;
        self.day = day;
        self
    }

    /// Builder method to set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set authors
    pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_pdf(mut self, pdf: impl Into<String>) -> Self {
        self.pdf = Some(pdf.into());
        self
    }

    /// Builder method to attach the record to a course at a school.
    ///
    /// Blank names are stored as absent, the same as in the export.
    pub fn with_course(mut self, course: impl Into<String>, school: Option<&str>) -> Self {
        self.course = non_blank(course.into());
        self.school = school.map(str::to_string).and_then(non_blank);
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_presentation_type(mut self, presentation_type: impl Into<String>) -> Self {
        self.presentation_type = Some(presentation_type.into());
        self
    }

    pub fn with_website_type(mut self, website_type: impl Into<String>) -> Self {
        self.website_type = Some(website_type.into());
        self
    }

    /// The category used for classification.
    ///
    /// A website sub-type, when present, replaces the primary type.
    pub fn effective_type(&self) -> String {
        match &self.website_type {
            Some(website) => website.to_lowercase(),
            None => self.entry_type.clone(),
        }
    }

    /// Typed category, [`PublicationType::Unrecognized`] when unmapped.
    pub fn pub_type(&self) -> PublicationType {
        PublicationType::from_type_str(&self.effective_type())
    }

    /// Icon class for this publication's category.
    pub fn icon(&self) -> &'static str {
        self.pub_type().icon()
    }

    /// The publication's (possibly partial) date.
    pub fn date(&self) -> PartialDate {
        PartialDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Sort key for chronological ordering: `(year, month or 0, day or 0)`.
    pub fn date_sort_key(&self) -> (i32, u32, u32) {
        self.date().sort_key()
    }

    /// Whether the record names a course.
    pub fn has_course(&self) -> bool {
        self.course.is_some()
    }

    /// Whether the record is a lecture that belongs in a course: it names a
    /// course and its presentation sub-type is course-eligible.
    pub fn is_course_lecture(&self) -> bool {
        self.has_course()
            && self
                .presentation_type
                .as_deref()
                .is_some_and(is_course_type)
    }

    /// Display names of all named authors.
    pub fn author_names(&self) -> Vec<String> {
        author_display_names(&self.authors)
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Treat blank strings in the export as absent values.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(non_blank))
}
