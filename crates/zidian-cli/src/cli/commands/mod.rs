//! CLI command handlers. Each command is in its own file for clarity.

mod add;
mod alt_add;
mod alt_list;
mod alt_remove;
mod list;
mod remove;
mod show;
mod update;

pub use add::run_add;
pub use alt_add::run_alt_add;
pub use alt_list::run_alt_list;
pub use alt_remove::run_alt_remove;
pub use list::run_list;
pub use remove::run_remove;
pub use show::run_show;
pub use update::run_update;

/// Render an optional reference glyph for table output.
pub(crate) fn dash(field: Option<&str>) -> &str {
    field.unwrap_or("-")
}
