//! Edge (connector) types

use crate::building::BuildingCode;
use serde::{Deserialize, Serialize};

/// A typed link between two buildings, e.g. a tunnel or a skyway
///
/// Endpoints are stored by code, which is the stable handle of a node inside a
/// graph. The from/to orientation is kept for display only: matching,
/// traversal and graph equality all treat the edge as undirected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint as given to `add_edge`
    pub from: BuildingCode,

    /// Second endpoint as given to `add_edge`
    pub to: BuildingCode,

    /// Type of connector (e.g., "tunnel", "skyway")
    pub connector: String,
}

impl Edge {
    pub fn new(
        from: impl Into<BuildingCode>,
        to: impl Into<BuildingCode>,
        connector: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            connector: connector.into(),
        }
    }

    /// True if either endpoint has this code
    pub fn touches(&self, code: &str) -> bool {
        self.from == code || self.to == code
    }

    /// True if the edge joins the unordered pair {a, b}
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The endpoint across from `code`, if the edge touches it
    pub fn other_end(&self, code: &str) -> Option<&BuildingCode> {
        if self.from == code {
            Some(&self.to)
        } else if self.to == code {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Orientation-free key: (smaller code, larger code, connector)
    pub fn undirected_key(&self) -> (&BuildingCode, &BuildingCode, &str) {
        if self.from <= self.to {
            (&self.from, &self.to, self.connector.as_str())
        } else {
            (&self.to, &self.from, self.connector.as_str())
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -[{}]- {}", self.from, self.connector, self.to)
    }
}
