//! Building (node payload) types

use crate::error::Result;
use crate::limits::{validate_building_code, validate_building_name};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Short identifier of a building, e.g. "MC" or "DC"
///
/// Ordering and equality are lexicographic on the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingCode(String);

impl BuildingCode {
    /// Create a code, rejecting empty, spaced or over-long input
    pub fn parse(s: &str) -> Result<Self> {
        validate_building_code(s)?;
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BuildingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for BuildingCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BuildingCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildingCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BuildingCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for BuildingCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BuildingCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A campus building
///
/// Immutable once built. Identity is the code: two buildings with the same
/// code are the same building as far as any graph is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    code: BuildingCode,
    name: String,
}

impl Building {
    /// Create a new building
    pub fn new(code: impl Into<BuildingCode>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Create a building after validating both fields
    pub fn try_new(code: &str, name: &str) -> Result<Self> {
        let code = BuildingCode::parse(code)?;
        validate_building_name(name)?;
        Ok(Self::new(code, name.trim()))
    }

    pub fn code(&self) -> &BuildingCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Building {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Building {}

impl PartialOrd for Building {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Building {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.code.cmp(&other.code)
    }
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.code, self.name)
    }
}
