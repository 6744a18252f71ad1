//! Alias tables (variant → canonical form).

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One canonical value and the variants that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub canonical: String,
    pub variants: Vec<String>,
}

/// A mapping from spelling variants to canonical values.
///
/// Entries keep their declaration order. When a string is claimed by more
/// than one entry (as a variant, or as a variant of one entry and the
/// canonical name of a later one) the earliest entry wins.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    lookup: HashMap<String, String>,
}

impl AliasTable {
    /// Create an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canonical value with its variants.
    pub fn add<I, S>(&mut self, canonical: &str, variants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variants: Vec<String> = variants.into_iter().map(Into::into).collect();

        self.lookup
            .entry(canonical.to_string())
            .or_insert_with(|| canonical.to_string());
        for variant in &variants {
            self.lookup
                .entry(variant.clone())
                .or_insert_with(|| canonical.to_string());
        }

        self.entries.push(AliasEntry {
            canonical: canonical.to_string(),
            variants,
        });
    }

    /// Builder form of [`AliasTable::add`].
    pub fn with<I, S>(mut self, canonical: &str, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add(canonical, variants);
        self
    }

    /// Resolve a value to its canonical form, returning the value itself if
    /// no entry claims it.
    pub fn normalize<'a>(&'a self, value: &'a str) -> &'a str {
        self.lookup.get(value).map(|s| s.as_str()).unwrap_or(value)
    }

    /// Normalize every value, keeping first-seen order and dropping
    /// duplicates that appear after normalization.
    pub fn normalize_list<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(values.len());
        let mut result = Vec::with_capacity(values.len());
        for value in values {
            let normalized = self.normalize(value.as_ref());
            if seen.insert(normalized) {
                result.push(normalized.to_string());
            }
        }
        result
    }

    /// Normalize values into a set, for intersection tests.
    pub fn normalize_set<'a, I>(&'a self, values: I) -> HashSet<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        values.into_iter().map(|v| self.normalize(v)).collect()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AliasTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.canonical, &entry.variants)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AliasTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AliasTableVisitor)
    }
}

/// Reads `canonical: [variants]` pairs in document order.
struct AliasTableVisitor;

impl<'de> Visitor<'de> for AliasTableVisitor {
    type Value = AliasTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from canonical values to lists of variants")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = AliasTable::new();
        while let Some((canonical, variants)) = access.next_entry::<String, Option<Vec<String>>>()? {
            table.add(&canonical, variants.unwrap_or_default());
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ml_table() -> AliasTable {
        AliasTable::new()
            .with("ml", ["machine-learning", "ML"])
            .with("os", ["operating-systems"])
    }

    #[rstest]
    #[case("ML", "ml")]
    #[case("machine-learning", "ml")]
    #[case("ml", "ml")]
    #[case("operating-systems", "os")]
    #[case("Ml", "Ml")]
    #[case("unknown", "unknown")]
    fn normalize_resolves_variants(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(ml_table().normalize(input), expected);
    }

    #[test]
    fn normalize_list_dedupes_in_order() {
        let table = ml_table();
        let values = ["ML", "os", "machine-learning", "rust", "operating-systems"];
        assert_eq!(table.normalize_list(&values), vec!["ml", "os", "rust"]);
    }

    #[test]
    fn normalize_list_empty() {
        let values: [&str; 0] = [];
        assert!(ml_table().normalize_list(&values).is_empty());
    }

    #[test]
    fn earliest_entry_wins() {
        let table = AliasTable::new()
            .with("first", ["shared", "second"])
            .with("second", ["shared"]);
        assert_eq!(table.normalize("shared"), "first");
        assert_eq!(table.normalize("second"), "first");
    }

    #[test]
    fn deserialize_keeps_declaration_order() {
        let json = r#"{"zeta": ["z"], "alpha": ["a", "A"], "mid": null}"#;
        let table: AliasTable = serde_json::from_str(json).unwrap();
        let canonicals: Vec<&str> = table.entries().iter().map(|e| e.canonical.as_str()).collect();
        assert_eq!(canonicals, vec!["zeta", "alpha", "mid"]);
        assert_eq!(table.normalize("A"), "alpha");
        assert_eq!(table.normalize("mid"), "mid");
    }

    #[test]
    fn serialize_roundtrip() {
        let table = ml_table();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"ml":["machine-learning","ML"],"os":["operating-systems"]}"#);
    }
}
