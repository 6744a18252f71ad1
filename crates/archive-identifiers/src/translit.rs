//! Transliteration of non-Latin scripts
//!
//! Only Cyrillic (Russian and Ukrainian letters) has a table. Text in any
//! other script passes through untouched.

use std::borrow::Cow;

/// Lowercase Cyrillic letter to Latin sequence.
///
/// Hard and soft signs map to nothing.
const CYRILLIC: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "e"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "ju"),
    ('я', "ja"),
    ('і', "i"),
    ('ї', "ji"),
    ('є', "je"),
    ('ґ', "g"),
];

/// Scripts the transliterator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cyrillic,
}

/// Detect a script with a transliteration table in `text`.
///
/// Returns `None` when nothing in the text needs transliterating.
pub fn detect_script(text: &str) -> Option<Script> {
    text.chars()
        .any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
        .then_some(Script::Cyrillic)
}

/// Transliterate `text` to Latin.
///
/// Expects lowercased input. Characters without a table entry are kept as is,
/// so the result may still contain non-ASCII text.
pub fn transliterate(text: &str) -> Cow<'_, str> {
    match detect_script(text) {
        Some(Script::Cyrillic) => {
            let mut out = String::with_capacity(text.len());
            for c in text.chars() {
                match lookup(c) {
                    Some(latin) => out.push_str(latin),
                    None => out.push(c),
                }
            }
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

fn lookup(c: char) -> Option<&'static str> {
    CYRILLIC
        .iter()
        .find(|(cyr, _)| *cyr == c)
        .map(|(_, latin)| *latin)
}
