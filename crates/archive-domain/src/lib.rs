//! Publication archive domain types
//!
//! This crate provides the record model the archive generator works on:
//! - Publication: a paper, talk, lecture or web post with partial date
//! - Author: first/last name pair
//! - PublicationType: typed category with icon and research/course classification
//! - Partial dates: parsing of `YYYY[/MM[/DD]]` strings from bibliography exports
//! - Validation: required-field checks run before records reach aggregation

pub mod author;
pub mod date;
pub mod publication;
pub mod publication_type;
pub mod validation;

pub use author::*;
pub use date::*;
pub use publication::*;
pub use publication_type::*;
pub use validation::*;
