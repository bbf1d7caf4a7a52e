//! Output formatting utilities

use std::fmt;

use campus_core::{Building, Edge, Graph, Path};
use clap::ValueEnum;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format output based on format type
pub fn format_output<T: Serialize + fmt::Display>(data: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Text => data.to_string(),
    }
}

/// Serializable view of a whole graph
#[derive(Serialize)]
pub struct GraphReport<'a> {
    #[serde(skip)]
    graph: &'a Graph,
    buildings: Vec<&'a Building>,
    edges: &'a [Edge],
}

impl<'a> GraphReport<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            buildings: graph.buildings().map(|b| &**b).collect(),
            edges: graph.edges(),
        }
    }
}

impl fmt::Display for GraphReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.graph)
    }
}

/// Result of a path query
#[derive(Serialize)]
pub struct PathReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub all: bool,
    pub paths: Vec<Path>,
}

impl fmt::Display for PathReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Paths from {} to {} are: ", self.from, self.to)?;
        if self.paths.is_empty() {
            writeln!(f, "  (no path)")?;
        }
        for path in &self.paths {
            writeln!(f, "  {}", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(Arc::new(Building::new("MC", "Mathematics and Computer"))).unwrap();
        graph.add_node(Arc::new(Building::new("DC", "Davis Centre"))).unwrap();
        graph.add_edge("MC", "DC", "tunnel").unwrap();
        graph
    }

    #[test]
    fn test_graph_report_json() {
        let graph = graph();
        let json = format_output(&GraphReport::new(&graph), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["buildings"][0]["code"], "DC");
        assert_eq!(value["edges"][0]["connector"], "tunnel");
    }

    #[test]
    fn test_graph_report_text() {
        let graph = graph();
        let text = format_output(&GraphReport::new(&graph), OutputFormat::Text);

        assert_eq!(text, graph.to_string());
    }

    #[test]
    fn test_path_report_text() {
        let graph = graph();
        let report = PathReport {
            from: "DC",
            to: "MC",
            all: true,
            paths: graph.find_paths("DC", "MC", true).unwrap(),
        };

        assert_eq!(
            format_output(&report, OutputFormat::Text),
            "Paths from DC to MC are: \n  DC -[tunnel]-> MC\n"
        );
    }
}
