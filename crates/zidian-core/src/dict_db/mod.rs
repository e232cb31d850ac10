//! Persistent dictionary database (SQLite via sqlx).
//!
//! Stores the two collections (characters and alternate radical forms) and
//! runs the validation rules inside each write transaction, so a check and
//! its write are atomic.

pub mod db;
pub mod snapshot;

mod alternatives;
mod chachars;

pub use db::DictDb;
pub use snapshot::Snapshot;

#[cfg(test)]
mod tests;
