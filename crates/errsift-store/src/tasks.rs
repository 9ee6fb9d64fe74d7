//! Task table access - the filtered error query

use crate::StoreError;
use errsift_domain::{ErrorRecord, LatestSeen, Timestamp};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Result of one error query against the task table
#[derive(Debug, Clone)]
pub struct QueryBatch {
    /// Matching records, ordered by creation time descending
    pub records: Vec<ErrorRecord>,

    /// The maximum creation time among the returned rows, or
    /// [`LatestSeen::NoneFound`] when the query matched zero rows
    pub latest_seen: LatestSeen,
}

/// Read-only SQLite access to the task table
///
/// The table is owned by the task runner, not by this tool; `TaskStore`
/// only ever selects from it. The expected columns are `task_id` (text),
/// `created_at` (text in the fixed `YYYY-MM-DD HH:MM:SS.ffffff` layout) and
/// `error_text` (nullable text).
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// TaskStore instance.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open the task database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection
    ///
    /// Useful for in-memory databases in tests, where the fixture and the
    /// store must share one connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Query error rows created strictly after `lower_bound`
    ///
    /// Selects rows whose `error_text` is non-null and non-empty. A non-empty
    /// `keyword` additionally requires a case-insensitive substring match on
    /// the error text; an empty keyword applies no text filter. Results are
    /// ordered by creation time descending, so the first row carries the
    /// newest creation time.
    pub fn query_errors(
        &self,
        keyword: &str,
        lower_bound: Timestamp,
    ) -> Result<QueryBatch, StoreError> {
        let mut sql = String::from(
            "SELECT task_id, created_at, error_text FROM tasks
             WHERE error_text IS NOT NULL AND error_text != '' AND created_at > ?",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        // The fixed layout is lexicographically chronological, so the
        // strictly-greater-than bound works as a plain string comparison.
        params.push(Box::new(lower_bound.to_string()));

        if !keyword.is_empty() {
            // instr instead of LIKE keeps `%` and `_` in keywords literal
            sql.push_str(" AND instr(lower(error_text), lower(?)) > 0");
            params.push(Box::new(keyword.to_string()));
        }

        sql.push_str(" ORDER BY created_at DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let records = stmt
            .query_map(&param_refs[..], |row| {
                let created_at: String = row.get(1)?;
                // A row that does not carry a well-formed creation time
                // cannot participate in watermark tracking; abort the query.
                Timestamp::parse(&created_at).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        1,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })?;

                Ok(ErrorRecord {
                    task_id: row.get(0)?,
                    created_at,
                    error_text: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let latest_seen = match records.first() {
            Some(newest) => LatestSeen::Observed(Timestamp::parse(&newest.created_at)?),
            None => LatestSeen::NoneFound,
        };

        debug!(
            keyword = %keyword,
            lower_bound = %lower_bound,
            rows = records.len(),
            "task query complete"
        );

        Ok(QueryBatch {
            records,
            latest_seen,
        })
    }
}
