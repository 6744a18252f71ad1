//! Identifier generation for archive pages
//!
//! This crate turns arbitrary-script titles and names into stable identifiers:
//! - Transliteration of Cyrillic text to Latin
//! - Slug generation (ASCII, lowercase, hyphen-separated)
//! - Slug uniquification against an existing key set

pub mod slug;
pub mod translit;

pub use slug::*;
pub use translit::*;
