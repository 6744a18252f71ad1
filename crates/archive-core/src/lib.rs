//! archive-core: aggregation core for the publication archive site
//!
//! This library turns a flat list of bibliographic records into the content
//! tree of a static site:
//! - Course synthesis from lecture records sharing a (course, school) pair
//! - Tag-based grouping of the main index with first-match-wins deduplication
//! - Year bucketing with deterministic, most-recent-first ordering
//! - Section filters for single-topic pages
//! - Teaching index and per-course pages
//!
//! Inputs are an already validated publication list and an [`ArchiveConfig`];
//! fetching records and rendering templates happen elsewhere.

pub mod config;
pub mod course;
pub mod data;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod items;
pub mod site;

pub use config::{ArchiveConfig, Contacts, Group, Section, SectionFilter, SiteConfig, OTHER_GROUP};
pub use course::{compute_courses, group_courses_by_school, Course, CourseSection};
pub use data::PublicationsData;
pub use error::{ArchiveError, Result};
pub use filter::{filter_publications, PublicationFilter};
pub use grouping::{
    assign_groups, group_by_year, group_items, group_publications_by_year, GroupAssignment,
    GroupingSession, ItemGroup, YearBucket,
};
pub use items::{CourseCard, CourseItem, GroupItem, LectureItem, PublicationItem};
pub use site::{
    build_site, compute_stats, standalone_publications, AboutPage, CoursePage, IndexPage,
    NavItem, SchoolCourses, SectionPage, SiteContent, Stats, TeachingIndex,
};

// Re-export the record model for convenience
pub use archive_domain::{Author, Language, Publication, PublicationType};
pub use archive_identifiers::slugify;
pub use archive_tags::AliasTable;
