//! Validation rules enforced before every write.
//!
//! Field rules (`field`) check a single payload in isolation. Integrity
//! rules (`integrity`) are existence/reference checks over a snapshot of
//! both collections; the store runs them inside the write transaction.

mod error;
pub mod field;
pub mod integrity;

pub use error::ValidationError;
pub use field::FieldRules;
