//! Common test utilities for building dataflow maps and registries.
use fukugen::error::RegistryError;
use fukugen::prelude::*;
use serde_json::json;

/// Builds a `DataflowNode` from a class name and `(field, raw value)` pairs,
/// classifying each value exactly as the JSON parser would.
#[allow(dead_code)]
pub fn node(class_type: &str, inputs: &[(&str, serde_json::Value)]) -> DataflowNode {
    let mut node = DataflowNode::new(class_type);
    for (field, value) in inputs {
        node.inputs.push(*field, InputValue::classify(value.clone()));
    }
    node
}

/// A registry covering the node classes of the canonical text-to-image flow,
/// with each class's widget order.
#[allow(dead_code)]
pub fn create_registry() -> StaticTypeRegistry {
    let mut registry = StaticTypeRegistry::new();
    registry.register("CheckpointLoaderSimple", ["ckpt_name"]);
    registry.register("CLIPTextEncode", ["text"]);
    registry.register("EmptyLatentImage", ["width", "height", "batch_size"]);
    registry.register(
        "KSampler",
        ["seed", "steps", "cfg", "sampler_name", "scheduler", "denoise"],
    );
    registry.register("VAEDecode", [] as [&str; 0]);
    registry.register("SaveImage", ["filename_prefix"]);
    registry.register("Foo", [] as [&str; 0]);
    registry.register("A", [] as [&str; 0]);
    registry.register("B", [] as [&str; 0]);
    registry
}

/// The canonical text-to-image dataflow: checkpoint loader feeding two CLIP
/// encodes and a sampler, decoded and saved.
#[allow(dead_code)]
pub fn create_text_to_image_map() -> DataflowMap {
    let mut map = DataflowMap::default();
    map.insert(
        "4",
        node("CheckpointLoaderSimple", &[("ckpt_name", json!("sd15.safetensors"))]),
    );
    map.insert(
        "6",
        node(
            "CLIPTextEncode",
            &[
                ("text", json!("a scenic mountain lake at dawn")),
                ("clip", json!(["4", 1])),
            ],
        ),
    );
    map.insert(
        "7",
        node(
            "CLIPTextEncode",
            &[("text", json!("blurry, low quality")), ("clip", json!(["4", 1]))],
        ),
    );
    map.insert(
        "5",
        node(
            "EmptyLatentImage",
            &[
                ("width", json!(512)),
                ("height", json!(512)),
                ("batch_size", json!(1)),
            ],
        ),
    );
    map.insert(
        "3",
        node(
            "KSampler",
            &[
                ("seed", json!(42)),
                ("steps", json!(20)),
                ("cfg", json!(7.5)),
                ("sampler_name", json!("euler")),
                ("scheduler", json!("normal")),
                ("denoise", json!(1.0)),
                ("model", json!(["4", 0])),
                ("positive", json!(["6", 0])),
                ("negative", json!(["7", 0])),
                ("latent_image", json!(["5", 0])),
            ],
        ),
    );
    map.insert(
        "8",
        node(
            "VAEDecode",
            &[("samples", json!(["3", 0])), ("vae", json!(["4", 2]))],
        ),
    );
    map.insert(
        "9",
        node(
            "SaveImage",
            &[("filename_prefix", json!("fukugen")), ("images", json!(["8", 0]))],
        ),
    );
    map
}

/// A registry that claims to know every class but whose widget-order
/// introspection always fails, for testing the fallback path.
#[allow(dead_code)]
pub struct FailingRegistry;

impl TypeRegistry for FailingRegistry {
    fn has(&self, _class_type: &str) -> bool {
        true
    }

    fn widget_order(&self, class_type: &str) -> std::result::Result<Vec<String>, RegistryError> {
        Err(RegistryError::IntrospectionFailed {
            class_type: class_type.to_string(),
            message: "transient instance construction failed".to_string(),
        })
    }
}
