//! Course synthesis integration tests

mod common;

use archive_core::{compute_courses, AliasTable, ArchiveConfig, Course, Publication};
use common::fixtures::{lecture, load_config_fixture, load_publications_fixture};
use proptest::prelude::*;
use rstest::rstest;

fn config() -> ArchiveConfig {
    ArchiveConfig::new("Jane Doe")
}

fn lecture_titles(course: &Course) -> Vec<&str> {
    course.lectures.iter().map(|l| l.title.as_str()).collect()
}

#[test]
fn test_course_spanning_two_years() {
    let pubs = vec![
        lecture("l2", 2020, "Threads", "Systems", Some("MIT")).with_date(Some(2), Some(3)),
        lecture("l1", 2019, "Intro", "Systems", Some("MIT")).with_date(Some(9), Some(1)),
    ];

    let courses = compute_courses(&pubs, &config());

    assert_eq!(courses.len(), 1);
    let course = &courses[0];
    assert_eq!(course.year, 2019);
    assert_eq!(course.slug, "2019-mit-systems");
    assert_eq!(course.school, "MIT");
    assert_eq!(lecture_titles(course), vec!["Intro", "Threads"]);
}

#[test]
fn test_single_lecture_course() {
    let pubs = vec![lecture("l1", 2021, "Only", "Seminar", None)];
    let courses = compute_courses(&pubs, &config());
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].slug, "2021-seminar");
    assert_eq!(courses[0].school, "");
    assert_eq!(courses[0].lecture_count(), 1);
}

#[rstest]
#[case(Some("Conference talk"))]
#[case(Some("Seminar"))]
#[case(None)]
fn test_ineligible_presentation_types_are_not_lectures(#[case] presentation_type: Option<&str>) {
    let mut talk = Publication::new("t1", "presentation", 2022, "Talk").with_course("SysConf", None);
    if let Some(kind) = presentation_type {
        talk = talk.with_presentation_type(kind);
    }
    assert!(compute_courses(&[talk], &config()).is_empty());
}

#[test]
fn test_github_material_joins_course() {
    let pubs = vec![
        lecture("l1", 2020, "Intro", "Systems", Some("MIT")),
        Publication::new("g1", "webpage", 2020, "Labs")
            .with_website_type("GitHub")
            .with_course("Systems", Some("MIT"))
            .with_presentation_type("GitHub"),
    ];
    let courses = compute_courses(&pubs, &config());
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].lecture_count(), 2);
}

#[test]
fn test_missing_school_is_its_own_course() {
    let pubs = vec![
        lecture("l1", 2020, "Intro", "Systems", Some("MIT")),
        lecture("l2", 2020, "Intro", "Systems", None),
    ];
    let courses = compute_courses(&pubs, &config());
    assert_eq!(courses.len(), 2);
    let slugs: Vec<&str> = courses.iter().map(|c| c.slug.as_str()).collect();
    assert!(slugs.contains(&"2020-mit-systems"));
    assert!(slugs.contains(&"2020-systems"));
}

#[test]
fn test_aliases_merge_course_and_school_names() {
    let mut config = config();
    config.aliases = AliasTable::new()
        .with("Operating Systems", ["OS"])
        .with("MIT", ["Massachusetts Institute of Technology"]);
    let pubs = vec![
        lecture("l1", 2020, "Intro", "OS", Some("MIT")),
        lecture("l2", 2020, "Files", "Operating Systems", Some("Massachusetts Institute of Technology")),
    ];

    let courses = compute_courses(&pubs, &config);

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Operating Systems");
    assert_eq!(courses[0].slug, "2020-mit-operating-systems");
}

#[test]
fn test_courses_sorted_newest_first() {
    let pubs = vec![
        lecture("a", 2018, "A", "Old", None),
        lecture("b", 2022, "B", "New", None),
        lecture("c", 2020, "C", "Mid", None),
    ];
    let years: Vec<i32> = compute_courses(&pubs, &config()).iter().map(|c| c.year).collect();
    assert_eq!(years, vec![2022, 2020, 2018]);
}

#[test]
fn test_fixture_courses() {
    let config = load_config_fixture();
    let pubs = load_publications_fixture();

    let courses = compute_courses(&pubs, &config);

    assert_eq!(courses.len(), 2);
    let ml = &courses[0];
    assert_eq!(ml.slug, "2022-mashinnoe-obuchenie");
    assert_eq!(ml.school, "");

    let os = &courses[1];
    assert_eq!(os.name, "Operating Systems");
    assert_eq!(os.school, "SPbPU");
    assert_eq!(os.year, 2020);
    assert_eq!(os.slug, "2020-spbpu-operating-systems");
    assert_eq!(
        lecture_titles(os),
        vec!["Introduction", "Processes", "File systems", "Lab assignments"]
    );
    let sections: Vec<(&str, usize)> = os
        .sections
        .iter()
        .map(|s| (s.name.as_str(), s.lectures.len()))
        .collect();
    assert_eq!(sections, vec![("Basics", 2), ("Storage", 1), ("", 1)]);
    assert_eq!(os.latest_date(), (2021, 3, 0));
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_course_year_is_earliest_lecture(years in prop::collection::vec(2000i32..2030, 1..12)) {
        let pubs: Vec<Publication> = years
            .iter()
            .enumerate()
            .map(|(i, year)| lecture(&format!("l{}", i), *year, &format!("Lecture {}", i), "Systems", Some("MIT")))
            .collect();

        let courses = compute_courses(&pubs, &config());

        prop_assert_eq!(courses.len(), 1);
        prop_assert_eq!(courses[0].year, *years.iter().min().unwrap());
        prop_assert_eq!(courses[0].lecture_count(), years.len());
        let keys: Vec<_> = courses[0].lectures.iter().map(Publication::date_sort_key).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]), "lectures out of order: {:?}", keys);
    }
}
