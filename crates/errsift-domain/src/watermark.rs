//! Watermark module - the "last seen" lower bound and its fold rule

use crate::timestamp::Timestamp;
use std::fmt;

/// The creation time of the most recently processed record
///
/// `Unset` means no run has persisted anything yet; for query purposes it
/// compares as earlier than everything, so the first run returns all
/// historical error rows. Across successful runs the persisted watermark is
/// monotonically non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watermark {
    /// No watermark has been persisted yet
    Unset,
    /// The newest creation time processed so far
    At(Timestamp),
}

/// The newest creation time one query observed
///
/// `NoneFound` is an explicit "the query matched zero rows" case. It is not
/// "older than everything": when folding per-keyword results into a combined
/// watermark it is skipped entirely, so a keyword with no matches can neither
/// regress nor advance the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatestSeen {
    /// The query matched zero rows
    NoneFound,
    /// The maximum creation time among the returned rows
    Observed(Timestamp),
}

impl Watermark {
    /// The lower bound to use in a strictly-greater-than query filter
    ///
    /// `Unset` maps to the epoch, so every historical row qualifies.
    pub fn lower_bound(&self) -> Timestamp {
        match self {
            Watermark::Unset => Timestamp::epoch(),
            Watermark::At(ts) => *ts,
        }
    }

    /// Fold one query's [`LatestSeen`] into this candidate watermark
    ///
    /// Only a strictly later observation replaces the current value;
    /// `NoneFound` leaves the candidate untouched.
    pub fn advance(&mut self, seen: LatestSeen) {
        let LatestSeen::Observed(ts) = seen else {
            return;
        };
        match self {
            Watermark::Unset => *self = Watermark::At(ts),
            Watermark::At(current) => {
                if ts.is_after(current) {
                    *self = Watermark::At(ts);
                }
            }
        }
    }

    /// True if a timestamp has been recorded
    pub fn is_set(&self) -> bool {
        matches!(self, Watermark::At(_))
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Watermark::Unset => write!(f, "(unset)"),
            Watermark::At(ts) => write!(f, "{}", ts),
        }
    }
}
