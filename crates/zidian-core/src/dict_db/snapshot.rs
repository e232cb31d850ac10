//! In-memory snapshot of both collections for the integrity checks.

use anyhow::Result;
use sqlx::SqliteConnection;

use crate::model::{Alternative, Chachar};

use super::db::DictDb;

/// Both collections as loaded at one point in time. Writes take a snapshot
/// inside their transaction; `DictDb::snapshot` exposes one for callers
/// (export, dry-run checks).
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub chachars: Vec<Chachar>,
    pub alternatives: Vec<Alternative>,
}

pub(crate) async fn load_snapshot(conn: &mut SqliteConnection) -> Result<Snapshot> {
    let chachars = super::chachars::fetch_all(&mut *conn).await?;
    let alternatives = super::alternatives::fetch_all(&mut *conn).await?;
    Ok(Snapshot {
        chachars,
        alternatives,
    })
}

impl DictDb {
    /// Load both collections.
    pub async fn snapshot(&self) -> Result<Snapshot> {
        let mut conn = self.pool.acquire().await?;
        load_snapshot(&mut conn).await
    }
}
