//! archive-tags: canonicalization of free-text labels.
//!
//! Tags, author names, course and school names arrive with spelling variants
//! (`ML`, `machine-learning`, `ml`). An [`AliasTable`] maps each variant to one
//! canonical form so grouping and filtering compare like with like.

pub mod alias;

pub use alias::*;
