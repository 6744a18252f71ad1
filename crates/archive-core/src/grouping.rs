//! Grouping and deduplication for the main index.
//!
//! Configured groups are applied in order and the first match wins: a
//! publication or course claimed by one group is never offered to a later
//! group or to the residual "Other" group. The claimed-item sets live in a
//! [`GroupingSession`] that exists for exactly one grouping pass.

use std::collections::{BTreeMap, HashSet};

use archive_domain::Publication;
use serde::Serialize;
use tracing::debug;

use crate::config::{ArchiveConfig, Group, OTHER_GROUP};
use crate::course::Course;
use crate::items::{course_item, publication_item, GroupItem};

/// Items of one year within a group, most recent first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearBucket {
    pub year: i32,
    pub items: Vec<GroupItem>,
}

/// A named group of year buckets, newest year first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemGroup {
    pub name: String,
    pub years: Vec<YearBucket>,
}

impl ItemGroup {
    /// Number of items across all year buckets.
    pub fn item_count(&self) -> usize {
        self.years.iter().map(|y| y.items.len()).sum()
    }
}

/// Publications and courses assigned to one group, before rendering.
#[derive(Debug, Clone)]
pub struct GroupAssignment<'a> {
    pub name: String,
    pub publications: Vec<&'a Publication>,
    pub courses: Vec<&'a Course>,
}

impl GroupAssignment<'_> {
    pub fn is_empty(&self) -> bool {
        self.publications.is_empty() && self.courses.is_empty()
    }
}

/// State of one grouping pass: which publications and courses are taken.
pub struct GroupingSession<'a> {
    config: &'a ArchiveConfig,
    seen_publications: HashSet<&'a str>,
    seen_courses: HashSet<&'a str>,
}

impl<'a> GroupingSession<'a> {
    pub fn new(config: &'a ArchiveConfig) -> Self {
        Self {
            config,
            seen_publications: HashSet::new(),
            seen_courses: HashSet::new(),
        }
    }

    /// Claim every unclaimed publication and course matching `group`.
    ///
    /// A publication matches when its normalized tags intersect the group's
    /// normalized tags; a course matches on the union of its lecture tags.
    pub fn claim(
        &mut self,
        group: &Group,
        publications: &'a [Publication],
        courses: &'a [Course],
    ) -> GroupAssignment<'a> {
        let config = self.config;
        let group_tags = config
            .aliases
            .normalize_set(group.tags.iter().map(String::as_str));

        let mut matched_publications = Vec::new();
        for publication in publications {
            if self.seen_publications.contains(publication.id.as_str()) {
                continue;
            }
            let tags = config
                .aliases
                .normalize_set(publication.tags.iter().map(String::as_str));
            if !tags.is_disjoint(&group_tags) {
                self.seen_publications.insert(publication.id.as_str());
                matched_publications.push(publication);
            }
        }

        let mut matched_courses = Vec::new();
        for course in courses {
            if self.seen_courses.contains(course.slug.as_str()) {
                continue;
            }
            let tags = config.aliases.normalize_set(course.tags());
            if !tags.is_disjoint(&group_tags) {
                self.seen_courses.insert(course.slug.as_str());
                matched_courses.push(course);
            }
        }

        debug!(
            group = %group.name,
            publications = matched_publications.len(),
            courses = matched_courses.len(),
            "Matched group"
        );

        GroupAssignment {
            name: group.name.clone(),
            publications: matched_publications,
            courses: matched_courses,
        }
    }

    /// Everything not claimed so far, as the residual group.
    pub fn remainder(
        &self,
        publications: &'a [Publication],
        courses: &'a [Course],
    ) -> GroupAssignment<'a> {
        GroupAssignment {
            name: OTHER_GROUP.to_string(),
            publications: publications
                .iter()
                .filter(|p| !self.seen_publications.contains(p.id.as_str()))
                .collect(),
            courses: courses
                .iter()
                .filter(|c| !self.seen_courses.contains(c.slug.as_str()))
                .collect(),
        }
    }
}

/// Partition publications and courses into the configured groups plus
/// "Other". Groups that end up empty are omitted.
pub fn assign_groups<'a>(
    publications: &'a [Publication],
    courses: &'a [Course],
    config: &'a ArchiveConfig,
) -> Vec<GroupAssignment<'a>> {
    let mut session = GroupingSession::new(config);
    let mut assignments: Vec<GroupAssignment<'a>> = config
        .groups
        .iter()
        .map(|group| session.claim(group, publications, courses))
        .filter(|assignment| !assignment.is_empty())
        .collect();

    let other = session.remainder(publications, courses);
    if !other.is_empty() {
        assignments.push(other);
    }
    assignments
}

/// Group standalone publications and courses by tags, then by year.
pub fn group_items(
    publications: &[Publication],
    courses: &[Course],
    config: &ArchiveConfig,
) -> Vec<ItemGroup> {
    assign_groups(publications, courses, config)
        .into_iter()
        .map(|assignment| ItemGroup {
            years: group_by_year(&assignment.publications, &assignment.courses, config),
            name: assignment.name,
        })
        .collect()
}

/// Bucket publications and courses by year, newest year first.
///
/// Within a year, publications (by date) and courses (by latest lecture date)
/// are interleaved most recent first; equal dates fall back to title order.
pub fn group_by_year(
    publications: &[&Publication],
    courses: &[&Course],
    config: &ArchiveConfig,
) -> Vec<YearBucket> {
    let mut by_year: BTreeMap<i32, Vec<((i32, u32, u32), GroupItem)>> = BTreeMap::new();

    for publication in publications {
        let item = GroupItem::Publication(publication_item(publication, config));
        by_year
            .entry(publication.year)
            .or_default()
            .push((publication.date_sort_key(), item));
    }

    for course in courses {
        let item = GroupItem::Course(course_item(course, config));
        by_year
            .entry(course.year)
            .or_default()
            .push((course.latest_date(), item));
    }

    into_year_buckets(by_year)
}

/// Bucket publications alone by year, for section pages.
pub fn group_publications_by_year(
    publications: &[&Publication],
    config: &ArchiveConfig,
) -> Vec<YearBucket> {
    group_by_year(publications, &[], config)
}

fn into_year_buckets(
    by_year: BTreeMap<i32, Vec<((i32, u32, u32), GroupItem)>>,
) -> Vec<YearBucket> {
    by_year
        .into_iter()
        .rev()
        .map(|(year, mut entries)| {
            entries.sort_by(|(key_a, item_a), (key_b, item_b)| {
                key_b.cmp(key_a).then_with(|| item_a.title().cmp(item_b.title()))
            });
            YearBucket {
                year,
                items: entries.into_iter().map(|(_, item)| item).collect(),
            }
        })
        .collect()
}
