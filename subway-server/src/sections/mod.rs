//! Ordered station sequence for a single line.
//!
//! A line runs from its up terminus (first station) to its down terminus
//! (last station). Insertions and removals are validated before the
//! sequence is touched, so a failed operation never leaves a partial change.

mod error;
mod list;

pub use error::SectionError;
pub use list::{MIN_SECTION_LEN, SectionList};
