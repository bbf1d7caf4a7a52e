//! Campus map graph: buildings as nodes, typed connectors as edges

use crate::building::{Building, BuildingCode};
use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::limits::validate_connector;
use crate::paths::{Path, PathQuery, PathSearch};
use std::sync::Arc;

/// A graph-local wrapper around a shared Building
///
/// Dropping a node never drops the building itself; the registry owns it.
#[derive(Debug, Clone)]
pub(crate) struct GraphNode {
    building: Arc<Building>,
}

impl GraphNode {
    fn new(building: Arc<Building>) -> Self {
        Self { building }
    }

    pub fn building(&self) -> &Arc<Building> {
        &self.building
    }

    pub fn code(&self) -> &BuildingCode {
        self.building.code()
    }
}

/// Graph of buildings and the connectors between them
///
/// Invariants kept by every operation:
/// - nodes are unique by code and stored in ascending code order
/// - every edge endpoint names a node currently in the graph
///
/// `Clone` yields an independent graph: node and edge storage is copied,
/// while both graphs keep pointing at the same registry-owned buildings.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Node Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a building at its sorted position
    pub fn add_node(&mut self, building: Arc<Building>) -> Result<()> {
        match self.position(building.code().as_str()) {
            Ok(_) => Err(Error::DuplicateNode(building.code().to_string())),
            Err(idx) => {
                tracing::debug!("Adding node {} at index {}", building.code(), idx);
                self.nodes.insert(idx, GraphNode::new(building));
                Ok(())
            }
        }
    }

    /// Remove a node and every edge touching it
    ///
    /// Returns the building the node wrapped, or None if no node has the code.
    pub fn remove_node(&mut self, code: &str) -> Option<Arc<Building>> {
        let idx = self.position(code).ok()?;
        let node = self.nodes.remove(idx);

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(code));
        tracing::debug!(
            "Removed node {} and {} incident edges",
            code,
            before - self.edges.len()
        );

        Some(node.building)
    }

    /// Look up the building stored under a code
    pub fn find_building(&self, code: &str) -> Option<&Arc<Building>> {
        self.position(code)
            .ok()
            .map(|idx| self.nodes[idx].building())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_ok()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edge Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Connect two existing nodes
    ///
    /// Both codes must name nodes in this graph. Parallel edges and self-loops
    /// are accepted.
    pub fn add_edge(&mut self, code1: &str, code2: &str, connector: &str) -> Result<()> {
        validate_connector(connector)?;
        let from = self.node_code(code1)?;
        let to = self.node_code(code2)?;

        tracing::debug!("Adding edge {} -[{}]- {}", from, connector, to);
        self.edges.push(Edge::new(from, to, connector));
        Ok(())
    }

    /// Remove the earliest-inserted edge joining {code1, code2}
    pub fn remove_edge(&mut self, code1: &str, code2: &str) -> Option<Edge> {
        let pos = self
            .edges
            .iter()
            .position(|edge| edge.connects(code1, code2))?;
        let edge = self.edges.remove(pos);
        tracing::debug!("Removed edge {}", edge);
        Some(edge)
    }

    /// Remove all nodes and edges
    pub fn delete_graph(&mut self) {
        tracing::debug!(
            "Deleting graph with {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
        self.edges.clear();
        self.nodes.clear();
    }

    /// Replace this graph's contents with a copy of `other`
    pub fn assign(&mut self, other: &Graph) {
        self.clone_from(other);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Buildings in ascending code order
    pub fn buildings(&self) -> impl Iterator<Item = &Arc<Building>> {
        self.nodes.iter().map(GraphNode::building)
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges with an endpoint at `code`, in insertion order
    pub fn edges_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |edge| edge.touches(code))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Path Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Lazily enumerate simple paths between two nodes
    pub fn paths<'a>(&'a self, from: &str, to: &str) -> Result<PathSearch<'a>> {
        PathSearch::new(self, from, to)
    }

    /// Collect the first path (`all == false`) or every simple path
    pub fn find_paths(&self, from: &str, to: &str, all: bool) -> Result<Vec<Path>> {
        let mut query = PathQuery::new(from, to);
        if all {
            query = query.all_paths();
        }
        self.search(&query)
    }

    /// Run a path query, honouring its mode and result cap
    pub fn search(&self, query: &PathQuery) -> Result<Vec<Path>> {
        let search = self.paths(&query.from, &query.to)?;
        let paths: Vec<Path> = search.take(query.effective_limit()).collect();

        tracing::debug!(
            "Found {} path(s) from {} to {} (all: {})",
            paths.len(),
            query.from,
            query.to,
            query.all
        );
        Ok(paths)
    }

    fn position(&self, code: &str) -> std::result::Result<usize, usize> {
        self.nodes
            .binary_search_by(|node| node.code().as_str().cmp(code))
    }

    fn node_code(&self, code: &str) -> Result<BuildingCode> {
        self.position(code)
            .map(|idx| self.nodes[idx].code().clone())
            .map_err(|_| Error::InvalidEdgeEndpoint(code.to_string()))
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.nodes.len() != other.nodes.len() || self.edges.len() != other.edges.len() {
            return false;
        }

        let same_nodes = self
            .nodes
            .iter()
            .zip(&other.nodes)
            .all(|(a, b)| a.code() == b.code());
        if !same_nodes {
            return false;
        }

        let mut ours: Vec<_> = self.edges.iter().map(Edge::undirected_key).collect();
        let mut theirs: Vec<_> = other.edges.iter().map(Edge::undirected_key).collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

impl Eq for Graph {}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for node in &self.nodes {
            let code = node.code().as_str();
            writeln!(f, "{}", node.building())?;

            let links: Vec<String> = self
                .edges_of(code)
                .filter_map(|edge| {
                    edge.other_end(code)
                        .map(|other| format!("{} ({})", other, edge.connector))
                })
                .collect();
            if !links.is_empty() {
                writeln!(f, "Connects to: {}", links.join(", "))?;
            }

            writeln!(f)?;
        }
        Ok(())
    }
}
