//! # Fukugen - Workflow Graph Reconstruction Engine
//!
//! **Fukugen** rebuilds a fully-formed, renderable node-link graph from a flat,
//! execution-oriented "dataflow map" (node id -> class name + resolved input
//! values/links). The input format carries no ports, no link objects, and no
//! positions; Fukugen infers a bidirectional port/link graph from the
//! unidirectional input-only description, distinguishes literal configuration
//! values from graph edges, fabricates output ports the source format never
//! mentions, and places every node deterministically in 2-D space - all while
//! tolerating node types the running host does not recognize.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical internal model of the dataflow map and is
//! independent of the host editor that eventually renders the result:
//!
//! 1.  **Parse**: load the dataflow JSON into a [`DataflowMap`](dataflow::DataflowMap),
//!     an ordered model that keeps the document order of nodes and of each
//!     node's declared inputs.
//! 2.  **Inject a registry**: implement [`TypeRegistry`](registry::TypeRegistry)
//!     (or use the map-backed [`StaticTypeRegistry`](registry::StaticTypeRegistry))
//!     to tell the engine which node classes the host knows and in which order
//!     each class serializes its literal parameters.
//! 3.  **Convert**: run [`Converter`](convert::Converter) to obtain a
//!     [`RenderGraph`](graph::RenderGraph) with synthesized ports, dense link
//!     ids, and a deterministic column-packed layout.
//! 4.  **Hand off**: pass the graph to a [`HostLoader`](host::HostLoader) sink,
//!     typically with flags requesting the host's missing-node / missing-model
//!     dialogs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fukugen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = std::fs::read_to_string("path/to/dataflow.json")?;
//!     let map = DataflowMap::from_json_str(&json)?;
//!
//!     // A registry describing the host's known node classes.
//!     let mut registry = StaticTypeRegistry::new();
//!     registry.register("KSampler", ["seed", "steps", "cfg"]);
//!
//!     let artifacts = Converter::builder(map, &registry).build().convert();
//!     println!(
//!         "reconstructed {} nodes, {} links ({} edges dropped)",
//!         artifacts.graph.nodes.len(),
//!         artifacts.graph.links.len(),
//!         artifacts.dropped_edges,
//!     );
//!
//!     let serialized = serde_json::to_string_pretty(&artifacts.graph)?;
//!     println!("{serialized}");
//!     Ok(())
//! }
//! ```
//!
//! ## Tolerance guarantees
//!
//! A conversion never aborts because of a single malformed node or edge: node
//! classes missing from the registry are kept and marked disabled
//! ([`NodeMode::Disabled`](graph::NodeMode)), edges whose source id does not
//! resolve are dropped (and counted), and a failed widget-order lookup falls
//! back to the declared literal order for that node only. The only hard error
//! is a structurally invalid input document.

pub mod convert;
pub mod dataflow;
pub mod error;
pub mod graph;
pub mod host;
pub mod prelude;
pub mod registry;
