//! Character CRUD, split into reads and writes.

mod read;
mod write;

pub(crate) use read::fetch_all;
