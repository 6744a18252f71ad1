//! Publication list input (`publications.json`)

use std::collections::HashSet;
use std::path::Path;

use archive_domain::{validate_publication, Publication};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ArchiveError, Result};

/// Container for publications.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationsData {
    pub publications: Vec<Publication>,
}

impl PublicationsData {
    pub fn new(publications: Vec<Publication>) -> Self {
        Self { publications }
    }

    /// Parse publications from a JSON string.
    ///
    /// Records that fail validation (no resolvable year, bad month/day, no id)
    /// are dropped with a warning so aggregation only sees well-formed input.
    /// Ids must be unique: a later record reusing an id is dropped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: PublicationsData = serde_json::from_str(json)?;
        let total = raw.publications.len();

        let mut seen_ids: HashSet<String> = HashSet::with_capacity(total);
        let publications: Vec<Publication> = raw
            .publications
            .into_iter()
            .filter(|publication| {
                if seen_ids.contains(&publication.id) {
                    warn!(
                        id = %publication.id,
                        title = %publication.title,
                        "Skipping publication: duplicate id"
                    );
                    return false;
                }
                let errors: Vec<_> = validate_publication(publication)
                    .into_iter()
                    .filter(|e| e.is_error())
                    .collect();
                if errors.is_empty() {
                    seen_ids.insert(publication.id.clone());
                    return true;
                }
                for error in &errors {
                    warn!(
                        id = %publication.id,
                        title = %publication.title,
                        field = %error.field,
                        "Skipping publication: {}",
                        error.message
                    );
                }
                false
            })
            .collect();

        if publications.len() < total {
            info!(
                kept = publications.len(),
                skipped = total - publications.len(),
                "Filtered invalid publications"
            );
        }

        Ok(Self { publications })
    }

    /// Load publications from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ArchiveError::io(path, e))?;
        let data = Self::from_json_str(&json)?;
        info!(path = ?path, count = data.publications.len(), "Loaded publications");
        Ok(data)
    }

    /// Serialize back to the export format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }
}
