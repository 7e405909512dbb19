//! Listing categories and their type filters

use crate::error::MarketError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Top-level listing tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MainCategory {
    #[default]
    Services,
    BuySell,
    Other,
}

impl MainCategory {
    pub const ALL: [MainCategory; 3] = [
        MainCategory::Services,
        MainCategory::BuySell,
        MainCategory::Other,
    ];

    /// Wire name used in `cat=` and in the ad's `category` field.
    pub fn as_str(self) -> &'static str {
        match self {
            MainCategory::Services => "services",
            MainCategory::BuySell => "buysell",
            MainCategory::Other => "other",
        }
    }

    /// Type filters offered under this category, excluding `all`.
    pub fn type_filters(self) -> &'static [&'static str] {
        match self {
            MainCategory::Services => &["designer", "script", "voice", "other"],
            MainCategory::BuySell => &["konechka", "channel", "video", "adsense", "templates"],
            MainCategory::Other => &[
                "education",
                "courses",
                "cheats",
                "mods",
                "niche",
                "schemes",
                "boost",
            ],
        }
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainCategory {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| MarketError::UnknownCategory(s.to_string()))
    }
}

/// Type filter within a category. `All` sends no `f1` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// Parse a filter name, checking it belongs to `category`.
    pub fn parse(category: MainCategory, name: &str) -> Result<Self, MarketError> {
        if name == "all" {
            return Ok(TypeFilter::All);
        }
        if category.type_filters().contains(&name) {
            Ok(TypeFilter::Only(name.to_string()))
        } else {
            Err(MarketError::UnknownTypeFilter {
                category: category.to_string(),
                filter: name.to_string(),
            })
        }
    }

    pub fn as_param(&self) -> Option<&str> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Only(name) => Some(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_names() {
        assert_eq!("buysell".parse::<MainCategory>(), Ok(MainCategory::BuySell));
        assert!("trade".parse::<MainCategory>().is_err());
    }

    #[test]
    fn all_filter_has_no_param() {
        let filter = TypeFilter::parse(MainCategory::Services, "all").unwrap();
        assert_eq!(filter, TypeFilter::All);
        assert_eq!(filter.as_param(), None);
    }

    #[test]
    fn filters_are_scoped_to_their_category() {
        assert!(TypeFilter::parse(MainCategory::Services, "designer").is_ok());
        let err = TypeFilter::parse(MainCategory::Services, "mods").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown type filter 'mods' for category services"
        );
    }
}
