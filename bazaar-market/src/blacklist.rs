//! Blacklist lookups

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `GET /api/scammer/<username>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ScammerStatus {
    #[serde(default)]
    pub safe: Option<bool>,
}

/// Outcome shown on the blacklist screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Scammer,
    Clean,
}

impl From<ScammerStatus> for Verdict {
    /// Only an explicit `safe: false` flags the user; a missing field reads as clean.
    fn from(status: ScammerStatus) -> Self {
        match status.safe {
            Some(false) => Verdict::Scammer,
            _ => Verdict::Clean,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Scammer => f.write_str("scammer"),
            Verdict::Clean => f.write_str("clean"),
        }
    }
}

/// Trim the search box input and drop the first `@`.
///
/// Returns `None` for blank input, in which case no lookup is made.
pub fn normalize_username(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replacen('@', "", 1))
}
