//! Domain types: dictionary characters and alternate radical forms.

pub mod alternative;
pub mod chachar;

pub use alternative::{Alternative, NewAlternative};
pub use chachar::{Chachar, ChacharPatch, NewChachar};

/// Row identifier shared by both tables.
pub type EntryId = i64;
