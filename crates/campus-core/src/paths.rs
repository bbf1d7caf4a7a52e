//! Simple-path enumeration between two buildings

use crate::building::BuildingCode;
use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::num::NonZeroUsize;
use serde::{Deserialize, Serialize};

/// Path query builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathQuery {
    /// Origin building code
    pub from: String,

    /// Destination building code
    pub to: String,

    /// Return every simple path instead of stopping at the first
    #[serde(default)]
    pub all: bool,

    /// Cap on the number of paths returned (None = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<NonZeroUsize>,
}

impl PathQuery {
    /// Query for the first path from `from` to `to`
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            all: false,
            limit: None,
        }
    }

    /// Enumerate every simple path
    pub fn all_paths(mut self) -> Self {
        self.all = true;
        self
    }

    /// Stop after `max` paths
    pub fn with_limit(mut self, max: NonZeroUsize) -> Self {
        self.limit = Some(max);
        self
    }

    /// Number of paths the search may emit
    pub fn effective_limit(&self) -> usize {
        let cap = self.limit.map_or(usize::MAX, NonZeroUsize::get);
        if self.all {
            cap
        } else {
            cap.min(1)
        }
    }
}

/// One hop of a path: the connector taken and the building reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub connector: String,
    pub to: BuildingCode,
}

/// A simple path through the graph, start to end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub start: BuildingCode,
    pub hops: Vec<Hop>,
}

impl Path {
    /// Building codes along the path, origin first
    pub fn codes(&self) -> impl Iterator<Item = &BuildingCode> {
        std::iter::once(&self.start).chain(self.hops.iter().map(|hop| &hop.to))
    }

    /// Connector types along the path, in travel order
    pub fn connectors(&self) -> impl Iterator<Item = &str> {
        self.hops.iter().map(|hop| hop.connector.as_str())
    }

    /// Last building on the path
    pub fn end(&self) -> &BuildingCode {
        self.hops.last().map_or(&self.start, |hop| &hop.to)
    }

    /// Number of hops
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// True for the single-building path from a node to itself
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)?;
        for hop in &self.hops {
            write!(f, " -[{}]-> {}", hop.connector, hop.to)?;
        }
        Ok(())
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub trails_expanded: usize,
    pub edges_examined: usize,
    pub paths_found: usize,
}

/// A partial path on the worklist, borrowing from the graph
#[derive(Debug, Clone)]
struct Trail<'g> {
    nodes: Vec<&'g BuildingCode>,
    edges: Vec<&'g Edge>,
}

impl<'g> Trail<'g> {
    fn tail(&self) -> &'g BuildingCode {
        self.nodes[self.nodes.len() - 1]
    }

    fn visits(&self, code: &BuildingCode) -> bool {
        self.nodes.iter().any(|node| *node == code)
    }

    fn extend(&self, edge: &'g Edge, next: &'g BuildingCode) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(next);

        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);

        Self { nodes, edges }
    }

    fn to_path(&self) -> Path {
        let hops = self
            .edges
            .iter()
            .zip(&self.nodes[1..])
            .map(|(edge, to)| Hop {
                connector: edge.connector.clone(),
                to: (*to).clone(),
            })
            .collect();

        Path {
            start: self.nodes[0].clone(),
            hops,
        }
    }
}

/// Depth-first enumeration of simple paths
///
/// Partial paths live on a stack. A trail whose tail is the destination is
/// emitted and not extended further; otherwise it is extended across every
/// incident edge whose far end is not already on the trail. Incident edges are
/// explored in insertion order, so results are deterministic for a given
/// graph. Each call to `next` resumes the search where the previous one
/// stopped, which makes "first path only" a plain `next()`.
///
/// The number of simple paths grows factorially with graph density; callers
/// on large graphs should bound the iterator (see `PathQuery::with_limit`).
#[derive(Debug)]
pub struct PathSearch<'g> {
    graph: &'g Graph,
    target: &'g BuildingCode,
    stack: Vec<Trail<'g>>,
    stats: SearchStats,
}

impl<'g> PathSearch<'g> {
    /// Start a search, failing if either endpoint is not a node of `graph`
    pub fn new(graph: &'g Graph, from: &str, to: &str) -> Result<Self> {
        let origin = graph
            .find_building(from)
            .ok_or_else(|| Error::NotFound(from.to_string()))?
            .code();
        let target = graph
            .find_building(to)
            .ok_or_else(|| Error::NotFound(to.to_string()))?
            .code();

        tracing::debug!("Starting path search: {} -> {}", origin, target);

        Ok(Self {
            graph,
            target,
            stack: vec![Trail {
                nodes: vec![origin],
                edges: Vec::new(),
            }],
            stats: SearchStats::default(),
        })
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// True once every simple path has been produced
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Iterator for PathSearch<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        let graph = self.graph;
        while let Some(trail) = self.stack.pop() {
            self.stats.trails_expanded += 1;
            let tail = trail.tail();

            if tail == self.target {
                self.stats.paths_found += 1;
                return Some(trail.to_path());
            }

            let mut extensions = Vec::new();
            for edge in graph.edges_of(tail.as_str()) {
                self.stats.edges_examined += 1;
                if let Some(next) = edge.other_end(tail.as_str()) {
                    if !trail.visits(next) {
                        extensions.push(trail.extend(edge, next));
                    }
                }
            }

            // Reversed so the earliest-inserted edge is popped first
            self.stack.extend(extensions.into_iter().rev());
        }

        tracing::trace!(
            "Path search exhausted after {} trails, {} paths",
            self.stats.trails_expanded,
            self.stats.paths_found
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::Building;
    use std::sync::Arc;

    fn create_test_graph() -> Graph {
        let mut graph = Graph::new();
        for code in ["A", "B", "C", "D", "E"] {
            graph
                .add_node(Arc::new(Building::new(code, format!("Building {}", code))))
                .unwrap();
        }

        // A --tunnel-- B --skyway-- C
        // |                         |
        // +-------bridge-- E --tunnel+
        // D is isolated
        graph.add_edge("A", "B", "tunnel").unwrap();
        graph.add_edge("B", "C", "skyway").unwrap();
        graph.add_edge("A", "E", "bridge").unwrap();
        graph.add_edge("E", "C", "tunnel").unwrap();
        graph
    }

    fn render(paths: &[Path]) -> Vec<String> {
        paths.iter().map(Path::to_string).collect()
    }

    #[test]
    fn test_single_path_with_connectors() {
        let mut graph = Graph::new();
        for code in ["A", "B", "C"] {
            graph.add_node(Arc::new(Building::new(code, code))).unwrap();
        }
        graph.add_edge("A", "B", "tunnel").unwrap();
        graph.add_edge("B", "C", "skyway").unwrap();

        let all = graph.find_paths("A", "C", true).unwrap();
        assert_eq!(all.len(), 1);
        let codes: Vec<&str> = all[0].codes().map(BuildingCode::as_str).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
        let connectors: Vec<&str> = all[0].connectors().collect();
        assert_eq!(connectors, vec!["tunnel", "skyway"]);

        let first = graph.find_paths("A", "C", false).unwrap();
        assert_eq!(first, all);
    }

    #[test]
    fn test_all_paths_depth_first_order() {
        let graph = create_test_graph();
        let paths = graph.find_paths("A", "C", true).unwrap();

        assert_eq!(
            render(&paths),
            vec![
                "A -[tunnel]-> B -[skyway]-> C",
                "A -[bridge]-> E -[tunnel]-> C",
            ]
        );
    }

    #[test]
    fn test_first_path_only() {
        let graph = create_test_graph();
        let paths = graph.find_paths("A", "C", false).unwrap();

        assert_eq!(render(&paths), vec!["A -[tunnel]-> B -[skyway]-> C"]);
    }

    #[test]
    fn test_first_path_stops_search() {
        let graph = create_test_graph();
        let mut search = graph.paths("A", "C").unwrap();

        assert!(search.next().is_some());
        assert!(!search.is_exhausted());
        assert_eq!(search.stats().paths_found, 1);
    }

    #[test]
    fn test_disconnected_yields_nothing() {
        let graph = create_test_graph();

        assert!(graph.find_paths("A", "D", true).unwrap().is_empty());
        assert!(graph.find_paths("A", "D", false).unwrap().is_empty());
    }

    #[test]
    fn test_self_path() {
        let graph = create_test_graph();
        let paths = graph.find_paths("A", "A", true).unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
        assert_eq!(paths[0].end().as_str(), "A");
        assert_eq!(paths[0].to_string(), "A");
    }

    #[test]
    fn test_unknown_endpoints() {
        let graph = create_test_graph();

        assert_eq!(
            graph.find_paths("A", "ZZZZ", true).unwrap_err(),
            Error::NotFound("ZZZZ".to_string())
        );
        assert_eq!(
            graph.find_paths("ZZZZ", "A", true).unwrap_err(),
            Error::NotFound("ZZZZ".to_string())
        );
    }

    #[test]
    fn test_cycles_do_not_repeat_nodes() {
        let mut graph = create_test_graph();
        graph.add_edge("B", "E", "tunnel").unwrap();
        graph.add_edge("C", "C", "stairs").unwrap();

        let paths = graph.find_paths("A", "C", true).unwrap();
        assert_eq!(paths.len(), 4);
        for path in &paths {
            let mut codes: Vec<&BuildingCode> = path.codes().collect();
            let len = codes.len();
            codes.sort();
            codes.dedup();
            assert_eq!(codes.len(), len, "repeated node in {}", path);
            assert_eq!(path.end().as_str(), "C");
        }
    }

    #[test]
    fn test_parallel_edges_give_distinct_paths() {
        let mut graph = create_test_graph();
        graph.add_edge("B", "A", "skyway").unwrap();

        let paths = graph.find_paths("A", "B", true).unwrap();
        assert_eq!(
            render(&paths),
            vec![
                "A -[tunnel]-> B",
                "A -[bridge]-> E -[tunnel]-> C -[skyway]-> B",
                "A -[skyway]-> B",
            ]
        );
    }

    #[test]
    fn test_query_limit() {
        let graph = create_test_graph();

        let one = NonZeroUsize::new(1).unwrap();
        let query = PathQuery::new("A", "C").all_paths().with_limit(one);
        assert_eq!(graph.search(&query).unwrap().len(), 1);

        let query = PathQuery::new("A", "C").with_limit(NonZeroUsize::new(5).unwrap());
        assert_eq!(query.effective_limit(), 1);
    }

    #[test]
    fn test_limited_query_still_finds_a_path() {
        let graph = create_test_graph();

        let query = PathQuery::new("A", "C").all_paths().with_limit(NonZeroUsize::MIN);
        assert_eq!(query.effective_limit(), 1);
        assert!(!graph.search(&query).unwrap().is_empty());

        let zero: std::result::Result<PathQuery, _> =
            serde_json::from_str(r#"{"from":"A","to":"C","all":true,"limit":0}"#);
        assert!(zero.is_err());
    }

    #[test]
    fn test_path_serializes() {
        let graph = create_test_graph();
        let paths = graph.find_paths("A", "C", false).unwrap();
        let json = serde_json::to_value(&paths[0]).unwrap();

        assert_eq!(json["start"], "A");
        assert_eq!(json["hops"][0]["connector"], "tunnel");
        assert_eq!(json["hops"][1]["to"], "C");
    }
}
