//! Test fixture loading utilities

use std::path::PathBuf;

use archive_core::{ArchiveConfig, Publication, PublicationsData};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load the sample archive.yaml
#[allow(dead_code)]
pub fn load_config_fixture() -> ArchiveConfig {
    ArchiveConfig::load(fixture_path("archive.yaml")).expect("archive.yaml fixture is valid")
}

/// Load the sample publications.json
#[allow(dead_code)]
pub fn load_publications_fixture() -> Vec<Publication> {
    PublicationsData::load(fixture_path("publications.json"))
        .expect("publications.json fixture is valid")
        .publications
}

/// A lecture record eligible for course synthesis
#[allow(dead_code)]
pub fn lecture(id: &str, year: i32, title: &str, course: &str, school: Option<&str>) -> Publication {
    Publication::new(id, "presentation", year, title)
        .with_course(course, school)
        .with_presentation_type("Lecture")
}

/// A standalone record with tags
#[allow(dead_code)]
pub fn paper(id: &str, year: i32, tags: &[&str]) -> Publication {
    Publication::new(id, "journalArticle", year, format!("Paper {}", id))
        .with_tags(tags.iter().copied())
}
