//! Author representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents an author of a publication
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

impl Author {
    /// Create a new author from first and last name
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Format as "First Last" for display.
    ///
    /// Falls back to whichever part is present, or an empty string.
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{} {}", first, last),
            (true, false) => last.to_string(),
            (false, true) => first.to_string(),
            (true, true) => String::new(),
        }
    }

    /// True when both name parts are blank.
    pub fn is_empty(&self) -> bool {
        self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Display names of the given authors, skipping authors with no name.
pub fn author_display_names(authors: &[Author]) -> Vec<String> {
    authors
        .iter()
        .filter(|a| !a.is_empty())
        .map(Author::display_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Author::new("Alan", "Turing").display_name(), "Alan Turing");
        assert_eq!(Author::new("", "Turing").display_name(), "Turing");
        assert_eq!(Author::new("Alan", "").display_name(), "Alan");
        assert_eq!(Author::new("", "").display_name(), "");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(Author::new("Ada", "Lovelace").to_string(), "Ada Lovelace");
    }

    #[test]
    fn test_author_display_names_skips_empty() {
        let authors = vec![
            Author::new("Ada", "Lovelace"),
            Author::new("", " "),
            Author::new("", "Hopper"),
        ];
        assert_eq!(author_display_names(&authors), vec!["Ada Lovelace", "Hopper"]);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let author: Author = serde_json::from_str(r#"{"firstName": "Grace"}"#).unwrap();
        assert_eq!(author.first_name, "Grace");
        assert_eq!(author.last_name, "");
    }
}
