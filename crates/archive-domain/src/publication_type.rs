//! Publication categories and their presentation data.
//!
//! Categories map to fixed data through static tables rather than per-type
//! behaviour.

use std::fmt;

/// Icon class for categories without an entry in [`TYPE_ICONS`].
pub const DEFAULT_ICON: &str = "fa-file";

/// Typed publication category.
///
/// The first group mirrors the bibliography service's item types, the second
/// the lowercase website sub-types used to re-type web resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PublicationType {
    JournalArticle,
    Presentation,
    Thesis,
    ConferencePaper,
    Book,
    BookSection,
    BlogPost,
    VideoRecording,
    Webpage,
    Report,
    Preprint,
    MagazineArticle,
    // Website sub-types
    GitHub,
    Colab,
    Habr,
    Miro,
    Telegraph,
    /// Any category string without a mapping
    Unrecognized,
}

/// Category string ↔ typed category.
const TYPE_NAMES: &[(PublicationType, &str)] = &[
    (PublicationType::JournalArticle, "journalArticle"),
    (PublicationType::Presentation, "presentation"),
    (PublicationType::Thesis, "thesis"),
    (PublicationType::ConferencePaper, "conferencePaper"),
    (PublicationType::Book, "book"),
    (PublicationType::BookSection, "bookSection"),
    (PublicationType::BlogPost, "blogPost"),
    (PublicationType::VideoRecording, "videoRecording"),
    (PublicationType::Webpage, "webpage"),
    (PublicationType::Report, "report"),
    (PublicationType::Preprint, "preprint"),
    (PublicationType::MagazineArticle, "magazineArticle"),
    (PublicationType::GitHub, "github"),
    (PublicationType::Colab, "colab"),
    (PublicationType::Habr, "habr"),
    (PublicationType::Miro, "miro"),
    (PublicationType::Telegraph, "telegraph"),
];

/// Category → icon class.
pub const TYPE_ICONS: &[(PublicationType, &str)] = &[
    (PublicationType::JournalArticle, "fa-file-alt"),
    (PublicationType::Presentation, "fa-chalkboard-teacher"),
    (PublicationType::Thesis, "fa-user-graduate"),
    (PublicationType::ConferencePaper, "fa-file-alt"),
    (PublicationType::Book, "fa-book"),
    (PublicationType::BookSection, "fa-book-open"),
    (PublicationType::BlogPost, "fa-globe"),
    (PublicationType::VideoRecording, "fa-video"),
    (PublicationType::Webpage, "fa-link"),
    (PublicationType::Report, "fa-file-contract"),
    (PublicationType::Preprint, "fa-file-alt"),
    (PublicationType::MagazineArticle, "fa-book-open"),
    (PublicationType::GitHub, "fa-github"),
    (PublicationType::Colab, "fa-google"),
    (PublicationType::Habr, "fa-heading"),
    (PublicationType::Miro, "fa-object-group"),
    (PublicationType::Telegraph, "fa-telegram"),
];

/// Categories counted as research output in the site stats.
pub const RESEARCH_TYPES: &[PublicationType] = &[
    PublicationType::JournalArticle,
    PublicationType::ConferencePaper,
    PublicationType::Thesis,
    PublicationType::Preprint,
    PublicationType::Report,
];

/// Presentation sub-types that may be folded into a course.
pub const COURSE_TYPES: &[&str] = &["Lecture", "GitHub"];

impl PublicationType {
    /// Map a raw category string, never failing.
    pub fn from_type_str(value: &str) -> Self {
        TYPE_NAMES
            .iter()
            .find(|(_, name)| *name == value)
            .map(|(t, _)| *t)
            .unwrap_or(PublicationType::Unrecognized)
    }

    /// The category string, `"unrecognized"` for the sentinel.
    pub fn as_str(&self) -> &'static str {
        TYPE_NAMES
            .iter()
            .find(|(t, _)| t == self)
            .map(|(_, name)| *name)
            .unwrap_or("unrecognized")
    }

    /// Icon class for this category.
    pub fn icon(&self) -> &'static str {
        TYPE_ICONS
            .iter()
            .find(|(t, _)| t == self)
            .map(|(_, icon)| *icon)
            .unwrap_or(DEFAULT_ICON)
    }

    pub fn is_research(&self) -> bool {
        RESEARCH_TYPES.contains(self)
    }

    pub fn is_recognized(&self) -> bool {
        *self != PublicationType::Unrecognized
    }
}

impl fmt::Display for PublicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a presentation sub-type may become a course lecture.
pub fn is_course_type(presentation_type: &str) -> bool {
    COURSE_TYPES.contains(&presentation_type)
}
