//! Result-count check against the server-reported total.
//!
//! A mismatch is advisory: it is logged and reported, never corrected.

use tracing::warn;

use crate::search::SearchResponse;

/// Outcome of comparing the returned items with the reported total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    Complete,
    Incomplete { received: usize, expected: i64 },
}

impl Completeness {
    pub fn is_complete(&self) -> bool {
        matches!(self, Completeness::Complete)
    }

    /// Advisory message for an incomplete result, `None` when complete.
    pub fn message(&self) -> Option<String> {
        match self {
            Completeness::Complete => None,
            Completeness::Incomplete { received, expected } => Some(format!(
                "Incomplete results. Received {} of {} search results. Increase items per page in search request",
                received, expected
            )),
        }
    }
}

/// True when the response holds exactly as many items as the server reported.
pub fn is_complete(resp: &SearchResponse) -> bool {
    i64::try_from(resp.items.len()).map_or(false, |len| len == resp.total)
}

/// Compare counts and log a warning when they differ.
pub fn check(resp: &SearchResponse) -> Completeness {
    let result = if is_complete(resp) {
        Completeness::Complete
    } else {
        Completeness::Incomplete {
            received: resp.items.len(),
            expected: resp.total,
        }
    };

    if let Some(message) = result.message() {
        warn!("{}", message);
    }

    result
}
