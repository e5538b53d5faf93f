//! Reconstruction of the device/structure graph from a `put` payload.
//!
//! Both wire shapes are reduced to the same intermediate form: a list of
//! [`Node`]s, each a target (device, structure or metadata) plus a blob of
//! raw attributes. Root keys are split on `/`, so the nested key `"devices"`
//! and the flat key `"devices/cameras/<id>"` walk the same routes. A single
//! [`GraphBuilder`] then merges the nodes and decodes the typed models.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::{DeviceClass, DeviceCollection, GlobalUpdate, Metadata};

const DEVICES: &str = "devices";
const STRUCTURES: &str = "structures";
const METADATA: &str = "metadata";

/// Where a blob of attributes belongs in the update graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Target {
    Device { class: DeviceClass, id: String },
    Structure { id: String },
    Metadata,
}

/// Raw attributes routed to one target
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub target: Target,
    pub attributes: Map<String, Value>,
}

/// Split a slash-delimited path, dropping empty segments
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Reduce a `put` payload to nodes in payload order
pub(crate) fn collect_nodes(mut root: Map<String, Value>) -> Vec<Node> {
    let mut nodes = Vec::new();

    // Firebase-style envelope: {"path": "/", "data": {...}}
    let envelope_path = match root.get("path") {
        Some(Value::String(path)) if root.contains_key("data") => Some(path.clone()),
        _ => None,
    };

    match envelope_path {
        Some(path) => {
            let data = root.remove("data").unwrap_or(Value::Null);
            route(&split_path(&path), data, &mut nodes);
        }
        None => route(&[], Value::Object(root), &mut nodes),
    }

    nodes
}

fn route(path: &[&str], value: Value, nodes: &mut Vec<Node>) {
    match path {
        [] => {
            let Some(entries) = object_at(path, value) else {
                return;
            };
            for (key, child) in entries {
                let segments = split_path(&key);
                if segments.is_empty() {
                    debug!(key = %key, "Ignoring empty path key");
                    continue;
                }
                route(&segments, child, nodes);
            }
        }
        [DEVICES] => {
            let Some(classes) = object_at(path, value) else {
                return;
            };
            for (class, devices) in classes {
                route(&[DEVICES, class.as_str()], devices, nodes);
            }
        }
        [DEVICES, class, rest @ ..] => {
            let Some(class) = DeviceClass::from_segment(class) else {
                debug!(class = %class, "Ignoring unknown device class");
                return;
            };
            match rest {
                [] => {
                    let Some(devices) = object_at(path, value) else {
                        return;
                    };
                    for (id, attributes) in devices {
                        let target = Target::Device { class, id };
                        push_object(target, attributes, nodes);
                    }
                }
                [id] => {
                    let target = Target::Device {
                        class,
                        id: id.to_string(),
                    };
                    push_object(target, value, nodes);
                }
                [id, field] => {
                    let target = Target::Device {
                        class,
                        id: id.to_string(),
                    };
                    push_field(target, field, value, nodes);
                }
                _ => ignore(path),
            }
        }
        [STRUCTURES] => {
            let Some(structures) = object_at(path, value) else {
                return;
            };
            for (id, attributes) in structures {
                push_object(Target::Structure { id }, attributes, nodes);
            }
        }
        [STRUCTURES, id] => {
            let target = Target::Structure { id: id.to_string() };
            push_object(target, value, nodes);
        }
        [STRUCTURES, id, field] => {
            let target = Target::Structure { id: id.to_string() };
            push_field(target, field, value, nodes);
        }
        [METADATA] => push_object(Target::Metadata, value, nodes),
        [METADATA, field] => push_field(Target::Metadata, field, value, nodes),
        _ => ignore(path),
    }
}

fn object_at(path: &[&str], value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => {
            ignore(path);
            None
        }
    }
}

fn push_object(target: Target, value: Value, nodes: &mut Vec<Node>) {
    match value {
        Value::Object(attributes) => nodes.push(Node { target, attributes }),
        _ => debug!(node = ?target, "Ignoring non-object attributes"),
    }
}

fn push_field(target: Target, field: &str, value: Value, nodes: &mut Vec<Node>) {
    let mut attributes = Map::new();
    attributes.insert(field.to_string(), value);
    nodes.push(Node { target, attributes });
}

fn ignore(path: &[&str]) {
    debug!(path = %path.join("/"), "Ignoring unrecognised path");
}

/// Attribute objects keyed by id, in first-seen order
type Entries = Map<String, Value>;

/// Merges nodes per target and decodes the typed update
#[derive(Debug, Default)]
pub(crate) struct GraphBuilder {
    thermostats: Entries,
    smoke_co_alarms: Entries,
    cameras: Entries,
    structures: Entries,
    metadata: Map<String, Value>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a node; later attributes overwrite earlier ones for the same target
    pub fn insert(&mut self, node: Node) {
        match node.target {
            Target::Device { class, id } => {
                let entries = match class {
                    DeviceClass::Thermostats => &mut self.thermostats,
                    DeviceClass::SmokeCoAlarms => &mut self.smoke_co_alarms,
                    DeviceClass::Cameras => &mut self.cameras,
                };
                merge_into(entries, id, node.attributes);
            }
            Target::Structure { id } => merge_into(&mut self.structures, id, node.attributes),
            Target::Metadata => self.metadata.extend(node.attributes),
        }
    }

    pub fn build(self) -> GlobalUpdate {
        let metadata = if self.metadata.is_empty() {
            Metadata::default()
        } else {
            serde_json::from_value(Value::Object(self.metadata)).unwrap_or_else(|err| {
                warn!(error = %err, "Dropping metadata with unexpected attribute types");
                Metadata::default()
            })
        };

        GlobalUpdate {
            devices: DeviceCollection {
                thermostats: decode_entries(
                    self.thermostats,
                    "device_id",
                    DeviceClass::Thermostats.as_str(),
                ),
                smoke_co_alarms: decode_entries(
                    self.smoke_co_alarms,
                    "device_id",
                    DeviceClass::SmokeCoAlarms.as_str(),
                ),
                cameras: decode_entries(self.cameras, "device_id", DeviceClass::Cameras.as_str()),
            },
            metadata,
            structures: decode_entries(self.structures, "structure_id", STRUCTURES),
        }
    }
}

/// Build a `GlobalUpdate` from a parsed `put` payload
pub(crate) fn build_update(root: Map<String, Value>) -> GlobalUpdate {
    let mut builder = GraphBuilder::new();
    for node in collect_nodes(root) {
        builder.insert(node);
    }
    builder.build()
}

fn merge_into(entries: &mut Entries, id: String, attributes: Map<String, Value>) {
    match entries.get_mut(&id) {
        Some(Value::Object(current)) => current.extend(attributes),
        _ => {
            entries.insert(id, Value::Object(attributes));
        }
    }
}

fn decode_entries<T: DeserializeOwned>(entries: Entries, id_field: &str, section: &str) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|(id, value)| {
            let Value::Object(mut attributes) = value else {
                return None;
            };
            if !attributes.contains_key(id_field) {
                attributes.insert(id_field.to_string(), Value::String(id.clone()));
            }
            match serde_json::from_value(Value::Object(attributes)) {
                Ok(model) => Some(model),
                Err(err) => {
                    warn!(section, id = %id, error = %err, "Dropping entry with unexpected attribute types");
                    None
                }
            }
        })
        .collect()
}
