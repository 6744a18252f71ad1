//! Course synthesis
//!
//! Lecture records sharing a (course, school) pair are folded into a
//! [`Course`]. Courses are recomputed from scratch on every run; the slug is a
//! deterministic function of (year, school, name).

use std::collections::{BTreeMap, BTreeSet, HashSet};

use archive_domain::Publication;
use archive_identifiers::{make_slug_unique, slugify};
use archive_tags::AliasTable;
use tracing::{info, warn};

use crate::config::ArchiveConfig;

/// Lectures of one course section, in course order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSection {
    /// Normalized section name, empty for unsectioned lectures
    pub name: String,
    pub lectures: Vec<Publication>,
}

/// A course computed from its lectures.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub slug: String,
    pub name: String,
    /// Normalized school name, empty when no lecture names one
    pub school: String,
    /// Year of the earliest lecture
    pub year: i32,
    /// Lectures ordered by date, then title
    pub lectures: Vec<Publication>,
    /// Sections in order of first appearance
    pub sections: Vec<CourseSection>,
}

impl Course {
    /// Create a course from its (non-empty) list of lectures.
    ///
    /// Section names are normalized through `aliases`.
    pub fn from_lectures(
        name: &str,
        school: &str,
        mut lectures: Vec<Publication>,
        aliases: &AliasTable,
    ) -> Self {
        lectures.sort_by(|a, b| {
            a.date_sort_key()
                .cmp(&b.date_sort_key())
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });

        let year = lectures.iter().map(|l| l.year).min().unwrap_or_default();

        let mut sections: Vec<CourseSection> = Vec::new();
        for lecture in &lectures {
            let section_name = lecture
                .section
                .as_deref()
                .map(|s| aliases.normalize(s))
                .unwrap_or("");
            match sections.iter_mut().find(|s| s.name == section_name) {
                Some(section) => section.lectures.push(lecture.clone()),
                None => sections.push(CourseSection {
                    name: section_name.to_string(),
                    lectures: vec![lecture.clone()],
                }),
            }
        }

        Self {
            slug: Self::base_slug(year, school, name),
            name: name.to_string(),
            school: school.to_string(),
            year,
            lectures,
            sections,
        }
    }

    /// Slug from year, school and name: `2020-mit-operating-systems`.
    pub fn base_slug(year: i32, school: &str, name: &str) -> String {
        let mut parts = vec![year.to_string()];
        for part in [slugify(school), slugify(name)] {
            if !part.is_empty() {
                parts.push(part);
            }
        }
        parts.join("-")
    }

    /// Union of all lecture tags (raw, not normalized).
    pub fn tags(&self) -> BTreeSet<&str> {
        self.lectures
            .iter()
            .flat_map(|l| l.tags.iter().map(String::as_str))
            .collect()
    }

    /// Date of the latest lecture, for recency ordering.
    pub fn latest_date(&self) -> (i32, u32, u32) {
        self.lectures
            .iter()
            .map(Publication::date_sort_key)
            .max()
            .unwrap_or((0, 0, 0))
    }

    pub fn lecture_count(&self) -> usize {
        self.lectures.len()
    }

    /// Find a section by normalized name ("" for unsectioned lectures).
    pub fn section(&self, name: &str) -> Option<&CourseSection> {
        self.sections.iter().find(|s| s.name == name)
    }
}

/// Compute courses from publications.
///
/// Only records that name a course and carry a course-eligible presentation
/// sub-type become lectures; other records with a course-like field (a
/// conference talk naming its venue) stay standalone. Courses come back sorted
/// by year descending, then name, then school.
pub fn compute_courses(publications: &[Publication], config: &ArchiveConfig) -> Vec<Course> {
    let mut groups: BTreeMap<(String, String), Vec<Publication>> = BTreeMap::new();
    for lecture in publications.iter().filter(|p| p.is_course_lecture()) {
        let course_name = lecture
            .course
            .as_deref()
            .map(|c| config.normalize(c))
            .unwrap_or_default();
        let school_name = lecture
            .school
            .as_deref()
            .map(|s| config.normalize(s))
            .unwrap_or_default();
        groups
            .entry((course_name.to_string(), school_name.to_string()))
            .or_default()
            .push(lecture.clone());
    }

    let mut courses: Vec<Course> = groups
        .into_iter()
        .map(|((name, school), lectures)| {
            Course::from_lectures(&name, &school, lectures, &config.aliases)
        })
        .collect();

    courses.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.school.cmp(&b.school))
    });

    let mut slugs: HashSet<String> = HashSet::with_capacity(courses.len());
    for course in &mut courses {
        let unique = make_slug_unique(&course.slug, &slugs);
        if unique != course.slug {
            warn!(
                course = %course.name,
                school = %course.school,
                slug = %course.slug,
                assigned = %unique,
                "Course slug collision"
            );
            course.slug = unique;
        }
        slugs.insert(course.slug.clone());
    }

    info!(
        courses = courses.len(),
        lectures = courses.iter().map(Course::lecture_count).sum::<usize>(),
        "Computed courses"
    );
    courses
}

/// Group courses by school, keeping the input order within each school.
pub fn group_courses_by_school(courses: &[Course]) -> Vec<(&str, Vec<&Course>)> {
    let mut by_school: Vec<(&str, Vec<&Course>)> = Vec::new();
    for course in courses {
        match by_school.iter_mut().find(|(school, _)| *school == course.school) {
            Some((_, list)) => list.push(course),
            None => by_school.push((course.school.as_str(), vec![course])),
        }
    }
    by_school
}
