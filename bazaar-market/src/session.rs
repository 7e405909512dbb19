//! Per-user session state
//!
//! Theme and user identity are loaded once at startup (config file, command-line flags) and
//! passed to whatever needs them. The theme is fixed for a run; only the identity can be
//! replaced afterwards.

use crate::error::MarketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(MarketError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Session {
    theme: Theme,
    user_id: Option<String>,
}

impl Session {
    pub fn new(theme: Theme, user_id: Option<String>) -> Self {
        let user_id = user_id.filter(|id| !id.trim().is_empty());
        Self { theme, user_id }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Replace the identity, e.g. when a user id arrives on the command line.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        self.user_id = (!user_id.trim().is_empty()).then_some(user_id);
        self
    }
}
