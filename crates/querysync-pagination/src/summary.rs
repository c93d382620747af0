//! The results-summary line written by the grid renderer.
//!
//! Two shapes are produced upstream: the literal `No results found.` and
//! `Showing <start> to <end> of <total> results found` (1-indexed,
//! inclusive). A `start` of 0 means the requested page lies past the last
//! page of results.

use std::str::FromStr;
use std::sync::LazyLock;

use querysync_core::error::Error;
use regex::Regex;

pub const NO_RESULTS: &str = "No results found.";

static SHOWING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Showing ([0-9]+) to ([0-9]+) of ([0-9]+) results found").expect("Invalid summary regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsSummary {
    NoResults,
    Showing { start: u64, end: u64, total: u64 },
}

impl ResultsSummary {
    /// The past-the-last-page sentinel.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ResultsSummary::Showing { start: 0, .. })
    }
}

impl FromStr for ResultsSummary {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text == NO_RESULTS {
            return Ok(ResultsSummary::NoResults);
        }
        let caps = SHOWING_REGEX.captures(text).ok_or_else(|| Error::MalformedSummary(text.to_string()))?;
        let number = |i: usize| -> Result<u64, Error> {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| Error::MalformedSummary(text.to_string()))
        };
        Ok(ResultsSummary::Showing { start: number(1)?, end: number(2)?, total: number(3)? })
    }
}
