//! Campus Core - Graph engine for campus maps
//!
//! This crate provides the building types, the building registry, and the
//! campus graph with its simple-path search.

pub mod building;
pub mod edge;
pub mod error;
pub mod graph;
pub mod limits;
pub mod paths;
pub mod registry;

pub use building::{Building, BuildingCode};
pub use edge::Edge;
pub use error::{Error, Result};
pub use graph::Graph;
pub use limits::ValidationError;
pub use paths::{Hop, Path, PathQuery, PathSearch, SearchStats};
pub use registry::BuildingRegistry;
