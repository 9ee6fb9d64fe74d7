//! Timestamp module - fixed-layout creation times and their ordering

use chrono::NaiveDateTime;
use std::fmt;
use thiserror::Error;

/// The one layout every timestamp in the system uses: the task table's
/// `created_at` column, the watermark file, and serialized records all carry
/// `YYYY-MM-DD HH:MM:SS.ffffff` with microsecond precision.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Error returned when a timestamp string does not match [`TIMESTAMP_LAYOUT`].
///
/// A malformed timestamp is fatal to a run: a watermark that cannot be parsed
/// cannot be trusted as a query lower bound.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid timestamp {text:?}: expected `YYYY-MM-DD HH:MM:SS.ffffff`")]
pub struct ParseError {
    /// The text that failed to parse
    pub text: String,
    /// Underlying parser failure
    #[source]
    pub source: chrono::ParseError,
}

/// A creation timestamp in the fixed microsecond layout
///
/// Ordering is chronological. The `Display` impl re-renders the exact layout
/// accepted by [`Timestamp::parse`], so a timestamp round-trips through its
/// string form unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parse a timestamp from the fixed layout
    ///
    /// # Examples
    ///
    /// ```
    /// use errsift_domain::Timestamp;
    ///
    /// let ts = Timestamp::parse("2024-01-02 10:00:00.000000").unwrap();
    /// assert_eq!(ts.to_string(), "2024-01-02 10:00:00.000000");
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        NaiveDateTime::parse_from_str(text, TIMESTAMP_LAYOUT)
            .map(Self)
            .map_err(|source| ParseError {
                text: text.to_string(),
                source,
            })
    }

    /// The Unix epoch, used as the lower bound when no watermark exists yet
    pub fn epoch() -> Self {
        Self(NaiveDateTime::UNIX_EPOCH)
    }

    /// True if `self` is strictly later than `other`
    ///
    /// Equal timestamps are not "after" each other; a record created at
    /// exactly the watermark time is already processed.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_LAYOUT))
    }
}
