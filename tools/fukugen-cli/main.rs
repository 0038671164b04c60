use clap::Parser;
use fukugen::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// The registry description file maps each known node class to its widget
// order. It is only used here to build a `StaticTypeRegistry`.

#[derive(Deserialize)]
struct RawRegistry(HashMap<String, Vec<String>>);

/// A workflow graph reconstruction CLI: rebuilds a renderable node-link graph
/// from a flat dataflow map.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the dataflow map JSON file
    dataflow_path: String,

    /// Path to a registry description JSON file (class name -> widget order).
    /// Without one, every node class is treated as unknown.
    #[arg(short, long)]
    registry: Option<String>,

    /// Path to a pack metadata JSON file (class name -> { registryId, version })
    /// for missing-node annotation
    #[arg(short, long)]
    metadata: Option<String>,

    /// Write the reconstructed graph to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the graph JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let dataflow_json = fs::read_to_string(&cli.dataflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read dataflow file '{}': {}",
            &cli.dataflow_path, e
        ))
    });

    let mut registry = StaticTypeRegistry::new();
    if let Some(registry_path) = &cli.registry {
        let registry_json = fs::read_to_string(registry_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read registry file '{}': {}",
                registry_path, e
            ))
        });
        let raw: RawRegistry = serde_json::from_str(&registry_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse registry JSON: {}", e)));
        for (class_type, widget_order) in raw.0 {
            registry.register(class_type, widget_order);
        }
    }

    let pack_index = cli.metadata.as_ref().map(|metadata_path| {
        let metadata_json = fs::read_to_string(metadata_path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read metadata file '{}': {}",
                metadata_path, e
            ))
        });
        PackIndex::from_json_str(&metadata_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse metadata: {}", e)))
    });

    // --- 2. Parsing ---
    let map = DataflowMap::from_json_str(&dataflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse dataflow: {}", e)));
    let node_count = map.len();

    // --- 3. Conversion ---
    let convert_start = Instant::now();
    let mut converter = Converter::builder(map, &registry);
    if let Some(index) = &pack_index {
        converter = converter.with_pack_index(index);
    }
    let artifacts = converter.build().convert();
    let convert_duration = convert_start.elapsed();

    // --- 4. Output ---
    let serialized = if cli.pretty {
        serde_json::to_string_pretty(&artifacts.graph)
    } else {
        serde_json::to_string(&artifacts.graph)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));

    match &cli.output {
        Some(output_path) => {
            fs::write(output_path, serialized).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", output_path, e))
            });
            println!("Wrote reconstructed graph to {}", output_path);
        }
        None => println!("{}", serialized),
    }

    // --- 5. Summary ---
    let unknown_nodes = artifacts
        .graph
        .nodes
        .iter()
        .filter(|n| !n.is_known_type)
        .count();

    eprintln!("\n--- Reconstruction Summary ---");
    eprintln!("Input Nodes:       {}", node_count);
    eprintln!("Links Synthesized: {}", artifacts.graph.links.len());
    eprintln!("Unknown Classes:   {}", unknown_nodes);
    eprintln!("Dropped Edges:     {}", artifacts.dropped_edges);
    eprintln!("------------------------------");
    eprintln!("Conversion:        {:?}", convert_duration);
    eprintln!("Total Execution:   {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
