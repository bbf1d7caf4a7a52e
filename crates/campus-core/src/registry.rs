//! Building registry: the owner of every Building a graph can reference

use crate::building::{Building, BuildingCode};
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of campus buildings keyed by code
///
/// Graphs hold shared handles (`Arc<Building>`) handed out by the registry and
/// never construct buildings themselves. Codes are unique within a registry.
#[derive(Debug, Default)]
pub struct BuildingRegistry {
    buildings: BTreeMap<BuildingCode, Arc<Building>>,
}

impl BuildingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new building
    pub fn insert(&mut self, code: &str, name: &str) -> Result<Arc<Building>> {
        let building = Building::try_new(code, name)?;
        if self.buildings.contains_key(code) {
            return Err(Error::DuplicateBuilding(code.to_string()));
        }

        let building = Arc::new(building);
        self.buildings
            .insert(building.code().clone(), Arc::clone(&building));
        tracing::debug!("Registered building {}", building);
        Ok(building)
    }

    /// Drop the registry's handle to a building
    ///
    /// Graphs still referencing it keep it alive; callers are expected to
    /// remove the matching nodes first.
    pub fn remove(&mut self, code: &str) -> Option<Arc<Building>> {
        let removed = self.buildings.remove(code);
        if removed.is_some() {
            tracing::debug!("Removed building {} from registry", code);
        }
        removed
    }

    /// Look up a building by code
    pub fn find_building(&self, code: &str) -> Option<Arc<Building>> {
        self.buildings.get(code).cloned()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.buildings.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Iterate buildings in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Building>> {
        self.buildings.values()
    }
}
