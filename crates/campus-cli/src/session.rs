//! Harness session: one building registry and two maps

use std::io::Write;
use std::num::NonZeroUsize;

use campus_core::{BuildingRegistry, Error, Graph, PathQuery};

use crate::command::{Command, MapSlot};
use crate::output::PathReport;

/// State shared by every command of a harness run
#[derive(Debug)]
pub struct Session {
    registry: BuildingRegistry,
    maps: [Graph; 2],
    current: MapSlot,
    max_paths: Option<NonZeroUsize>,
}

impl Session {
    pub fn new(max_paths: Option<NonZeroUsize>) -> Self {
        Self {
            registry: BuildingRegistry::new(),
            maps: [Graph::new(), Graph::new()],
            current: MapSlot::One,
            max_paths,
        }
    }

    pub fn registry(&self) -> &BuildingRegistry {
        &self.registry
    }

    pub fn map(&self, slot: MapSlot) -> &Graph {
        &self.maps[slot.index()]
    }

    pub fn current(&self) -> MapSlot {
        self.current
    }

    /// Register a building and add it to map 1, as bulk loading does
    pub fn load_building(&mut self, code: &str, name: &str) -> campus_core::Result<()> {
        let building = self.registry.insert(code, name)?;
        self.maps[MapSlot::One.index()].add_node(building)
    }

    /// Add an edge to map 1, as bulk loading does
    pub fn load_edge(&mut self, from: &str, to: &str, connector: &str) -> campus_core::Result<()> {
        self.maps[MapSlot::One.index()].add_edge(from, to, connector)
    }

    /// Run one command, writing its report to `out`
    ///
    /// Domain failures are reported to `out` and leave the session intact;
    /// only I/O errors on `out` are returned.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> anyhow::Result<()> {
        tracing::debug!("Executing {:?} on map {}", command, self.current.number());

        match command {
            Command::SelectMap(slot) => {
                self.current = *slot;
            }
            Command::AddBuilding { code, name } => {
                if let Err(err) = self.registry.insert(code, name) {
                    writeln!(out, "Couldn't add building {}: {}", code, err)?;
                }
            }
            Command::Wreck { code } => {
                for map in &mut self.maps {
                    map.remove_node(code);
                }
                if self.registry.remove(code).is_none() {
                    writeln!(out, "Couldn't find building {}", code)?;
                }
            }
            Command::Find { code } => match self.current_map().find_building(code) {
                Some(building) => writeln!(out, "{}\n", building)?,
                None => writeln!(out, "Couldn't find building {}", code)?,
            },
            Command::AddNode { code } => match self.registry.find_building(code) {
                Some(building) => {
                    if let Err(err) = self.current_map_mut().add_node(building) {
                        writeln!(out, "{}", err)?;
                    }
                }
                None => writeln!(out, "Couldn't find building {}", code)?,
            },
            Command::RemoveNode { code } => {
                if self.current_map_mut().remove_node(code).is_none() {
                    writeln!(out, "Couldn't find node {}", code)?;
                }
            }
            Command::AddEdge {
                from,
                to,
                connector,
            } => {
                if let Err(err) = self.current_map_mut().add_edge(from, to, connector) {
                    writeln!(out, "{}", err)?;
                }
            }
            Command::RemoveEdge { from, to } => {
                if self.current_map_mut().remove_edge(from, to).is_none() {
                    writeln!(out, "Couldn't find edge between {} and {}", from, to)?;
                }
            }
            Command::DeleteGraph => {
                self.current_map_mut().delete_graph();
            }
            Command::Copy => {
                let copy = self.current_map().clone();
                write!(out, "{}", copy)?;
            }
            Command::Assign { target, source } => {
                if target == source {
                    tracing::info!("Ignoring assignment of map {} to itself", target.number());
                    writeln!(out, "Map {} assigned to itself; nothing to do.", target.number())?;
                } else {
                    let (dst, src) = self.pair_mut(*target);
                    dst.assign(src);
                    write!(out, "{}", dst)?;
                }
            }
            Command::Compare => {
                if self.maps[0] == self.maps[1] {
                    writeln!(out, "Maps 1 and 2 are equal.")?;
                } else {
                    writeln!(out, "Maps 1 and 2 are NOT equal.")?;
                }
            }
            Command::Paths { from, to, all } => {
                self.write_paths(from, to, *all, out)?;
            }
            Command::Print => {
                write!(out, "{}", self.current_map())?;
            }
        }

        Ok(())
    }

    fn write_paths<W: Write>(&self, from: &str, to: &str, all: bool, out: &mut W) -> anyhow::Result<()> {
        let mut query = PathQuery::new(from, to);
        if all {
            query = query.all_paths();
        }
        if let Some(max) = self.max_paths {
            query = query.with_limit(max);
        }

        match self.current_map().search(&query) {
            Ok(paths) => {
                let report = PathReport {
                    from,
                    to,
                    all,
                    paths,
                };
                write!(out, "{}", report)?;
            }
            Err(Error::NotFound(code)) => writeln!(out, "Couldn't find building {}", code)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
        Ok(())
    }

    fn current_map(&self) -> &Graph {
        &self.maps[self.current.index()]
    }

    fn current_map_mut(&mut self) -> &mut Graph {
        &mut self.maps[self.current.index()]
    }

    /// Target map mutably, the other map shared
    fn pair_mut(&mut self, target: MapSlot) -> (&mut Graph, &Graph) {
        let [one, two] = &mut self.maps;
        match target {
            MapSlot::One => (one, &*two),
            MapSlot::Two => (two, &*one),
        }
    }
}
