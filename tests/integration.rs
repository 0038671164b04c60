//! End-to-end tests: JSON in, host-ready graph JSON out.
mod common;
use common::*;
use fukugen::prelude::*;
use serde_json::json;
use std::cell::RefCell;

const TEXT_TO_IMAGE_JSON: &str = r#"{
    "4": {
        "class_type": "CheckpointLoaderSimple",
        "inputs": {"ckpt_name": "sd15.safetensors"},
        "_meta": {"title": "Load Checkpoint"}
    },
    "6": {
        "class_type": "CLIPTextEncode",
        "inputs": {"text": "a scenic mountain lake at dawn", "clip": ["4", 1]}
    },
    "7": {
        "class_type": "CLIPTextEncode",
        "inputs": {"text": "blurry, low quality", "clip": ["4", 1]}
    },
    "5": {
        "class_type": "EmptyLatentImage",
        "inputs": {"width": 512, "height": 512, "batch_size": 1}
    },
    "3": {
        "class_type": "KSampler",
        "inputs": {
            "seed": 42, "steps": 20, "cfg": 7.5,
            "sampler_name": "euler", "scheduler": "normal", "denoise": 1.0,
            "model": ["4", 0], "positive": ["6", 0],
            "negative": ["7", 0], "latent_image": ["5", 0]
        }
    },
    "8": {
        "class_type": "VAEDecode",
        "inputs": {"samples": ["3", 0], "vae": ["4", 2]}
    },
    "9": {
        "class_type": "SaveImage",
        "inputs": {"filename_prefix": "fukugen", "images": ["8", 0]}
    }
}"#;

#[test]
fn test_end_to_end_text_to_image() {
    let map = DataflowMap::from_json_str(TEXT_TO_IMAGE_JSON).unwrap();
    let registry = create_registry();
    let artifacts = Converter::builder(map, &registry).build().convert();
    let graph = artifacts.graph;

    assert_eq!(graph.nodes.len(), 7);
    assert_eq!(graph.links.len(), 9);
    assert_eq!(artifacts.dropped_edges, 0);
    assert_eq!(graph.last_node_id, 10);
    assert_eq!(graph.last_link_id, 9);

    // The checkpoint loader feeds three different consumers across three
    // slots: model (0), clip (1), vae (2).
    let loader = graph.nodes.iter().find(|n| n.id == 4).unwrap();
    assert_eq!(loader.outputs.len(), 3);
    assert_eq!(loader.title.as_deref(), Some("Load Checkpoint"));
    assert_eq!(loader.widgets_values, vec![json!("sd15.safetensors")]);
    // Slot 1 (clip) is referenced by both text encoders.
    assert_eq!(loader.outputs[1].links.len(), 2);

    let sampler = graph.nodes.iter().find(|n| n.id == 3).unwrap();
    assert_eq!(sampler.inputs.len(), 4);
    assert_eq!(
        sampler.inputs.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        ["model", "positive", "negative", "latent_image"]
    );
    assert_eq!(
        sampler.widgets_values,
        vec![
            json!(42),
            json!(20),
            json!(7.5),
            json!("euler"),
            json!("normal"),
            json!(1.0)
        ]
    );
}

#[test]
fn test_serialized_wire_format() {
    let map = DataflowMap::from_json_str(TEXT_TO_IMAGE_JSON).unwrap();
    let graph = convert(map, &create_registry());
    let value = serde_json::to_value(&graph).unwrap();

    assert_eq!(value["last_node_id"], json!(10));
    assert_eq!(value["last_link_id"], json!(9));
    assert_eq!(value["version"], json!(0.4));
    assert_eq!(value["groups"], json!([]));
    assert_eq!(value["config"], json!({}));
    assert_eq!(value["extra"], json!({}));

    // Links are 6-element arrays.
    let first_link = &value["links"][0];
    assert!(first_link.is_array());
    assert_eq!(first_link.as_array().unwrap().len(), 6);
    assert_eq!(first_link[5], json!("unknown"));

    // Nodes carry the full host schema.
    let node = &value["nodes"][0];
    for field in [
        "id", "type", "pos", "size", "flags", "order", "mode", "inputs", "outputs", "properties",
        "widgets_values",
    ] {
        assert!(node.get(field).is_some(), "node is missing field '{field}'");
    }
    assert_eq!(node["type"], json!("CheckpointLoaderSimple"));
    assert_eq!(node["mode"], json!(0));
    assert_eq!(node["flags"], json!({}));

    let input = &value["nodes"][1]["inputs"][0];
    assert_eq!(input["name"], json!("clip"));
    assert_eq!(input["type"], json!("unknown"));
    assert_eq!(input["link"], json!(0));

    let output = &value["nodes"][0]["outputs"][0];
    assert!(output.get("slot_index").is_some());
    assert!(output["links"].is_array());
}

struct RecordingHost {
    calls: RefCell<Vec<(usize, LoadFlags)>>,
}

impl HostLoader for RecordingHost {
    fn load(&self, graph: &RenderGraph, flags: LoadFlags) {
        self.calls.borrow_mut().push((graph.nodes.len(), flags));
    }
}

#[test]
fn test_convert_and_load_hands_off_with_dialog_flags() {
    let map = DataflowMap::from_json_str(TEXT_TO_IMAGE_JSON).unwrap();
    let registry = create_registry();
    let host = RecordingHost {
        calls: RefCell::new(Vec::new()),
    };

    let graph = convert_and_load(map, &registry, None, &host);

    let calls = host.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, graph.nodes.len());
    assert!(calls[0].1.show_missing_nodes_dialog);
    assert!(calls[0].1.show_missing_models_dialog);
}

#[test]
fn test_mixed_unknown_nodes_survive_end_to_end() {
    let json = r#"{
        "1": {"class_type": "CheckpointLoaderSimple", "inputs": {"ckpt_name": "x.safetensors"}},
        "2": {
            "class_type": "SomeCustomUpscaler",
            "inputs": {"scale": 2, "model": ["1", 0], "bogus": ["404", 0]}
        }
    }"#;
    let map = DataflowMap::from_json_str(json).unwrap();
    let registry = create_registry();

    let mut index = PackIndex::new();
    index.insert(
        "SomeCustomUpscaler",
        PackMetadata {
            registry_id: "vendor/upscalers".to_string(),
            version: None,
        },
    );

    let artifacts = Converter::builder(map, &registry)
        .with_pack_index(&index)
        .build()
        .convert();

    // The unknown node is disabled yet wired, the dangling edge is dropped,
    // and the annotation pass points at the installable pack.
    let custom = &artifacts.graph.nodes[1];
    assert_eq!(custom.mode, NodeMode::Disabled);
    assert_eq!(custom.inputs.len(), 1);
    assert_eq!(custom.widgets_values, vec![json!(2)]);
    assert_eq!(artifacts.dropped_edges, 1);
    assert_eq!(artifacts.graph.links.len(), 1);
    assert_eq!(
        custom.properties.get("cnr_id"),
        Some(&json!("vendor/upscalers"))
    );
}
