//! Host framework glue
//!
//! `assert_that` panics with an "Expected / but" report, the way test
//! runners expect a failed assertion to look. `check` returns the same
//! information as data for hosts that format results themselves.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::description::Description;
use crate::matcher::Matcher;

/// Outcome of one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matched: bool,
    /// What the matcher requires
    pub expected: String,
    /// Why the value failed; `None` when it matched
    pub mismatch: Option<String>,
}

impl MatchReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected: {}", self.expected)?;
        if let Some(mismatch) = &self.mismatch {
            write!(f, "\n     but: {}", mismatch)?;
        }
        Ok(())
    }
}

/// Evaluate once, describing the mismatch if there is one
pub fn check<T, M>(actual: &T, matcher: &M) -> MatchReport
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    let matched = matcher.matches(actual);
    let mismatch = (!matched).then(|| {
        let mut description = Description::new();
        matcher.describe_mismatch(actual, &mut description);
        description.into_string()
    });

    let report = MatchReport {
        matched,
        expected: Description::of(matcher),
        mismatch,
    };
    debug!(matched = report.matched, expected = %report.expected, "matcher evaluated");
    report
}

#[track_caller]
pub fn assert_that<T, M>(actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    assert_that_with_reason("", actual, matcher);
}

#[track_caller]
pub fn assert_that_with_reason<T, M>(reason: &str, actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    let report = check(actual, matcher);
    if !report.matched {
        panic!("{reason}\n{report}");
    }
}
