//! Expense categories
//!
//! The tracker offers a fixed set of categories, but an expense stores its
//! category as plain text and the model accepts any non-empty value. This
//! module names the known set and the chart colour for each.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour used for categories outside the known set
pub const FALLBACK_COLOR: &str = "#cccccc";

/// One of the categories offered when recording an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Grocery,
    #[serde(rename = "Dining out")]
    DiningOut,
    Transportation,
    Bills,
    Shopping,
    General,
}

impl Category {
    /// All known categories in display order
    pub const ALL: [Category; 6] = [
        Category::Grocery,
        Category::DiningOut,
        Category::Transportation,
        Category::Bills,
        Category::Shopping,
        Category::General,
    ];

    /// The stored text for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grocery => "Grocery",
            Self::DiningOut => "Dining out",
            Self::Transportation => "Transportation",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::General => "General",
        }
    }

    /// Chart colour for this category
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Grocery => "#8884d8",
            Self::DiningOut => "#82ca9d",
            Self::Transportation => "#ffc658",
            Self::Bills => "#ff8042",
            Self::Shopping => "#a4de6c",
            Self::General => "#d0ed57",
        }
    }

    /// Check whether a stored category string is one of the known set
    pub fn is_known(name: &str) -> bool {
        Self::ALL.iter().any(|c| c.as_str() == name)
    }

    /// Chart colour for an arbitrary stored category string
    pub fn color_for(name: &str) -> &'static str {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == name)
            .map(|c| c.color())
            .unwrap_or(FALLBACK_COLOR)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive; "dining-out" and "dining_out" are accepted too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ").to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
