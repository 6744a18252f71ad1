//! Slug generation
//!
//! Provides functions for turning titles and names into ASCII, URL-safe
//! identifiers, with support for collision detection and uniquification.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::translit::transliterate;

lazy_static! {
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9\s-]").unwrap();
    static ref SEPARATORS: Regex = Regex::new(r"[\s_]+").unwrap();
    static ref HYPHENS: Regex = Regex::new(r"-+").unwrap();
}

/// Convert text to an ASCII URL-safe slug.
///
/// - Lowercases and transliterates Cyrillic to Latin
/// - Folds diacritics (`é` → `e`)
/// - Drops everything outside `[a-z0-9]`, whitespace and `-`
/// - Joins words with single hyphens, no leading or trailing hyphen
///
/// Text in scripts without a transliteration table is dropped by the
/// character filter rather than rejected. `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let latin = transliterate(&lowered);

    let folded: String = latin.nfkd().filter(|c| !is_combining_mark(*c)).collect();

    let kept = DISALLOWED.replace_all(&folded, "");
    let joined = SEPARATORS.replace_all(&kept, "-");
    HYPHENS.replace_all(&joined, "-").trim_matches('-').to_string()
}

/// Make a slug unique by appending a numeric suffix if needed.
///
/// The first free candidate of `base`, `base-2`, `base-3`, ... is returned.
pub fn make_slug_unique(base: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(base) {
        return base.to_string();
    }

    let mut counter = 2;
    loop {
        let candidate = format!("{}-{}", base, counter);
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
