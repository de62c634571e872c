//! Common domain type definitions
//!
//! This module contains the identifier aliases and enum types shared by the
//! member model, the wire DTOs and the relationship table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a family member, unique within one tree
pub type MemberId = i64;

/// Identifier of a family tree
pub type TreeId = i64;

/// Gender of a family member
///
/// Only `Male` and `Female` take part in the parent ordering convention;
/// any other wire value becomes `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl Gender {
    /// Wire representation of this gender
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s {
            "MALE" => Self::Male,
            "FEMALE" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome reported by the edit surface when an editor closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edited record was saved and the tree must be reloaded
    Changed,
    /// The editor closed without saving
    Unchanged,
}

impl From<bool> for EditOutcome {
    fn from(is_changed: bool) -> Self {
        if is_changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}
