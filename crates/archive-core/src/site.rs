//! Site content assembly.
//!
//! [`build_site`] is the single entry point from inputs to the content tree:
//! it computes courses, groups the index, filters section pages and lays out
//! the teaching area. The result is plain data for an external templater.

use archive_domain::Publication;
use serde::Serialize;
use tracing::info;

use crate::config::{ArchiveConfig, Contacts, Section};
use crate::course::{compute_courses, group_courses_by_school, Course};
use crate::filter::{filter_publications, PublicationFilter};
use crate::grouping::{group_items, group_publications_by_year, ItemGroup, YearBucket};
use crate::items::{course_card, lecture_page_item, CourseCard, LectureItem};

/// Site statistics shown beside the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Research-type publications only
    pub paper_count: usize,
    pub course_count: usize,
    /// 0 when there are no publications
    pub year_min: i32,
    pub year_max: i32,
}

/// Navigation entry for a configured section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub path: String,
    pub label: String,
}

/// Main index page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    pub title: String,
    pub layout: String,
    pub stats: Stats,
    pub nav: Vec<NavItem>,
    pub groups: Vec<ItemGroup>,
}

/// A filtered section page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPage {
    /// Section path without surrounding slashes
    pub path: String,
    pub title: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub publications_count: usize,
    pub years: Vec<YearBucket>,
}

/// Courses taught at one school
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCourses {
    pub name: String,
    pub courses: Vec<CourseCard>,
}

/// Teaching index listing all courses by school
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeachingIndex {
    pub title: String,
    pub layout: String,
    pub courses_count: usize,
    pub schools: Vec<SchoolCourses>,
}

/// Page of a single course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoursePage {
    pub title: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub layout: String,
    pub slug: String,
    pub school: String,
    pub year: i32,
    pub lecture_count: usize,
    pub lectures: Vec<LectureItem>,
}

/// About page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutPage {
    pub title: String,
    #[serde(rename = "type")]
    pub page_type: String,
    pub contacts: Contacts,
    pub bio: String,
}

/// Everything the templating layer renders for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContent {
    pub index: IndexPage,
    pub sections: Vec<SectionPage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teaching: Option<TeachingIndex>,
    pub courses: Vec<CoursePage>,
    pub about: AboutPage,
}

/// Compute statistics for the index margin.
pub fn compute_stats(publications: &[Publication], courses: &[Course]) -> Stats {
    let years = || publications.iter().map(|p| p.year);
    Stats {
        paper_count: publications
            .iter()
            .filter(|p| p.pub_type().is_research())
            .count(),
        course_count: courses.len(),
        year_min: years().min().unwrap_or(0),
        year_max: years().max().unwrap_or(0),
    }
}

/// Publications that appear on the index on their own: records without a
/// course name. Records naming a course reach the index only through their
/// course, or not at all when their presentation type is not course-eligible.
pub fn standalone_publications(
    publications: &[Publication],
    config: &ArchiveConfig,
) -> Vec<Publication> {
    filter_publications(publications, config, None, Some(false))
        .into_iter()
        .cloned()
        .collect()
}

/// Build the main index page.
pub fn build_index(
    publications: &[Publication],
    courses: &[Course],
    config: &ArchiveConfig,
    stats: Stats,
) -> IndexPage {
    let standalone = standalone_publications(publications, config);
    let groups = group_items(&standalone, courses, config);

    let counts: Vec<String> = groups
        .iter()
        .map(|g| format!("{}: {}", g.name, g.item_count()))
        .collect();
    info!(groups = %counts.join(", "), "Generated index");

    IndexPage {
        title: "Publications".to_string(),
        layout: "index".to_string(),
        stats,
        nav: config
            .sections
            .iter()
            .map(|s| NavItem {
                path: s.path.clone(),
                label: s.label.clone(),
            })
            .collect(),
        groups,
    }
}

/// Build a section page, or `None` for a section with no usable path.
pub fn build_section(
    section: &Section,
    publications: &[Publication],
    config: &ArchiveConfig,
) -> Option<SectionPage> {
    let path = section.clean_path();
    if path.is_empty() {
        return None;
    }

    let filter = section
        .filter
        .as_ref()
        .map(PublicationFilter::from)
        .unwrap_or_default();
    let selected = filter_publications(publications, config, filter.tag, filter.has_course);

    info!(section = %path, publications = selected.len(), "Generated section");

    Some(SectionPage {
        path: path.to_string(),
        title: section.label.clone(),
        page_type: "publications".to_string(),
        publications_count: selected.len(),
        years: group_publications_by_year(&selected, config),
    })
}

/// Build the teaching index: schools ordered by their most recent lecture,
/// courses within a school likewise.
pub fn build_teaching(courses: &[Course], config: &ArchiveConfig) -> TeachingIndex {
    let mut by_school = group_courses_by_school(courses);

    by_school.sort_by(|(_, a), (_, b)| latest_of(b).cmp(&latest_of(a)));

    let schools: Vec<SchoolCourses> = by_school
        .into_iter()
        .map(|(school, mut school_courses)| {
            school_courses.sort_by(|a, b| b.latest_date().cmp(&a.latest_date()));
            SchoolCourses {
                name: school.to_string(),
                courses: school_courses
                    .into_iter()
                    .map(|c| course_card(c, config))
                    .collect(),
            }
        })
        .collect();

    info!(courses = courses.len(), schools = schools.len(), "Generated teaching index");

    TeachingIndex {
        title: "Teaching".to_string(),
        layout: "teaching/list".to_string(),
        courses_count: courses.len(),
        schools,
    }
}

fn latest_of(courses: &[&Course]) -> (i32, u32, u32) {
    courses
        .iter()
        .map(|c| c.latest_date())
        .max()
        .unwrap_or((0, 0, 0))
}

/// Build the page of one course.
pub fn build_course_page(course: &Course, config: &ArchiveConfig) -> CoursePage {
    CoursePage {
        title: config.normalize(&course.name).to_string(),
        page_type: "course".to_string(),
        layout: "course/single".to_string(),
        slug: course.slug.clone(),
        school: course.school.clone(),
        year: course.year,
        lecture_count: course.lecture_count(),
        lectures: course
            .lectures
            .iter()
            .map(|l| lecture_page_item(l, config))
            .collect(),
    }
}

/// Build the about page from site metadata.
pub fn build_about(config: &ArchiveConfig) -> AboutPage {
    AboutPage {
        title: "About".to_string(),
        page_type: "about".to_string(),
        contacts: config.site.contacts.clone().unwrap_or_default(),
        bio: config.site.bio.clone().unwrap_or_default(),
    }
}

/// Build the whole content tree from publications and config.
///
/// Sections with path `/` are the index itself. A section filtering on
/// `has_course: true` produces the teaching area instead of a flat list.
pub fn build_site(publications: &[Publication], config: &ArchiveConfig) -> SiteContent {
    let courses = compute_courses(publications, config);
    let stats = compute_stats(publications, &courses);
    let index = build_index(publications, &courses, config, stats);

    let mut sections = Vec::new();
    let mut teaching = None;
    for section in config.sections.iter().filter(|s| !s.is_root()) {
        if section.is_teaching() {
            if teaching.is_none() {
                teaching = Some(build_teaching(&courses, config));
            }
        } else if let Some(page) = build_section(section, publications, config) {
            sections.push(page);
        }
    }

    let course_pages: Vec<CoursePage> = courses
        .iter()
        .map(|c| build_course_page(c, config))
        .collect();
    if teaching.is_some() {
        info!(count = course_pages.len(), "Generated course pages");
    }

    SiteContent {
        index,
        sections,
        teaching,
        courses: course_pages,
        about: build_about(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_stats() {
        let pubs = vec![
            Publication::new("a", "journalArticle", 2015, "A"),
            Publication::new("b", "presentation", 2021, "B"),
            Publication::new("c", "thesis", 2018, "C"),
        ];
        let stats = compute_stats(&pubs, &[]);
        assert_eq!(
            stats,
            Stats {
                paper_count: 2,
                course_count: 0,
                year_min: 2015,
                year_max: 2021
            }
        );
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats.year_min, 0);
        assert_eq!(stats.year_max, 0);
    }

    #[test]
    fn test_standalone_excludes_any_record_naming_a_course() {
        let config = ArchiveConfig::new("A");
        let pubs = vec![
            Publication::new("talk", "presentation", 2022, "Keynote")
                .with_course("SysConf", None)
                .with_presentation_type("Conference talk"),
            Publication::new("paper", "journalArticle", 2021, "Paper"),
        ];
        let standalone = standalone_publications(&pubs, &config);
        assert_eq!(standalone.len(), 1);
        assert_eq!(standalone[0].id, "paper");

        let index = build_index(&pubs, &[], &config, compute_stats(&pubs, &[]));
        let total: usize = index.groups.iter().map(ItemGroup::item_count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_section_page_serializes_path() {
        let config = ArchiveConfig::new("A");
        let section = Section {
            path: "/talks/".to_string(),
            label: "Talks".to_string(),
            filter: None,
            group_by: vec!["year".to_string()],
        };
        let pubs = vec![Publication::new("t", "presentation", 2022, "Talk")];
        let page = build_section(&section, &pubs, &config).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["path"], "talks");
        assert_eq!(json["publications_count"], 1);
    }

    #[test]
    fn test_section_with_root_like_path_is_skipped() {
        let config = ArchiveConfig::new("A");
        let section = Section {
            path: "//".to_string(),
            label: "Nothing".to_string(),
            filter: None,
            group_by: vec!["year".to_string()],
        };
        assert!(build_section(&section, &[], &config).is_none());
    }

    #[test]
    fn test_about_defaults() {
        let about = build_about(&ArchiveConfig::new("A"));
        assert_eq!(about.bio, "");
        assert_eq!(about.contacts, Contacts::default());
    }
}
