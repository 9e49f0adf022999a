//! Record Store
//!
//! Normalized client cache with optimistic layers.
//!
//! Every object in a payload that carries a string `id` becomes a record
//! keyed by that id; the place it appeared in holds `{"__ref": id}` instead.
//! Objects without an id stay inline. Publishing merges fields into existing
//! records, so a payload that only carries `{id, text}` leaves every other
//! field of the record alone.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use super::mutation::Updater;

/// Record holding the fields of the root query
pub const ROOT_ID: &str = "client:root";

/// Record receiving the top-level fields of mutation payloads
pub const MUTATION_ROOT_ID: &str = "client:mutationRoot";

const REF_KEY: &str = "__ref";

pub type Record = Map<String, Value>;

/// Flat map of normalized records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSource {
    records: HashMap<String, Record>,
}

impl RecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `payload` and merge its top-level fields into `root_id`.
    /// Non-object payloads carry no fields and are ignored.
    pub fn publish(&mut self, root_id: &str, payload: &Value) {
        if let Value::Object(fields) = self.normalize(payload) {
            self.merge(root_id, fields);
        }
    }

    fn normalize(&mut self, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let fields: Record = map
                    .iter()
                    .map(|(key, child)| (key.clone(), self.normalize(child)))
                    .collect();
                match map.get("id") {
                    Some(Value::String(id)) => {
                        self.merge(id, fields);
                        reference(id)
                    }
                    _ => Value::Object(fields),
                }
            }
            Value::Array(items) => Value::Array(items.iter().map(|item| self.normalize(item)).collect()),
            scalar => scalar.clone(),
        }
    }

    fn merge(&mut self, id: &str, fields: Record) {
        self.records.entry(id.to_string()).or_default().extend(fields);
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove a record. References to it read back as `null`.
    pub fn delete(&mut self, id: &str) {
        self.records.remove(id);
    }

    /// Set a scalar field on an existing record
    pub fn set_field(&mut self, id: &str, field: &str, value: Value) {
        if let Some(record) = self.records.get_mut(id) {
            record.insert(field.to_string(), value);
        }
    }

    /// Add `delta` to an integer field of an existing record
    pub fn increment_field(&mut self, id: &str, field: &str, delta: i64) {
        if let Some(record) = self.records.get_mut(id) {
            let current = record.get(field).and_then(Value::as_i64).unwrap_or(0);
            record.insert(field.to_string(), json!(current + delta));
        }
    }

    /// Read a record with all references resolved
    pub fn read(&self, id: &str) -> Option<Value> {
        let mut visiting = Vec::new();
        self.read_record(id, &mut visiting)
    }

    fn read_record(&self, id: &str, visiting: &mut Vec<String>) -> Option<Value> {
        if visiting.iter().any(|seen| seen == id) {
            return None;
        }
        let record = self.records.get(id)?;
        visiting.push(id.to_string());
        let fields = record
            .iter()
            .map(|(key, value)| (key.clone(), self.denormalize(value, visiting)))
            .collect();
        visiting.pop();
        Some(Value::Object(fields))
    }

    fn denormalize(&self, value: &Value, visiting: &mut Vec<String>) -> Value {
        match value {
            Value::Object(map) => match as_reference(map) {
                Some(id) => self.read_record(id, visiting).unwrap_or(Value::Null),
                None => Value::Object(
                    map.iter()
                        .map(|(key, child)| (key.clone(), self.denormalize(child, visiting)))
                        .collect(),
                ),
            },
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.denormalize(item, visiting)).collect())
            }
            scalar => scalar.clone(),
        }
    }

    /// Append an edge to the connection stored under `parent_id.field`.
    ///
    /// The edge node is normalized like any published payload. Does nothing
    /// when the parent record or its connection is missing.
    pub fn append_edge(&mut self, parent_id: &str, field: &str, edge: &Value) {
        if !self.has_connection(parent_id, field) {
            return;
        }
        let normalized = self.normalize(edge);
        if let Some(edges) = self.edges_mut(parent_id, field) {
            edges.push(normalized);
        }
    }

    /// Drop every edge whose node references `node_id`
    pub fn remove_edge(&mut self, parent_id: &str, field: &str, node_id: &str) {
        if let Some(edges) = self.edges_mut(parent_id, field) {
            edges.retain(|edge| edge_node_id(edge) != Some(node_id));
        }
    }

    fn has_connection(&self, parent_id: &str, field: &str) -> bool {
        self.records
            .get(parent_id)
            .and_then(|record| record.get(field))
            .and_then(|connection| connection.get("edges"))
            .map_or(false, Value::is_array)
    }

    fn edges_mut(&mut self, parent_id: &str, field: &str) -> Option<&mut Vec<Value>> {
        self.records
            .get_mut(parent_id)?
            .get_mut(field)?
            .get_mut("edges")?
            .as_array_mut()
    }
}

fn reference(id: &str) -> Value {
    json!({ REF_KEY: id })
}

fn as_reference(map: &Record) -> Option<&str> {
    if map.len() != 1 {
        return None;
    }
    map.get(REF_KEY).and_then(Value::as_str)
}

fn edge_node_id(edge: &Value) -> Option<&str> {
    let node = edge.get("node")?;
    node.get(REF_KEY)
        .or_else(|| node.get("id"))
        .and_then(Value::as_str)
}

/// Identifier of an optimistic layer
pub type LayerId = u64;

#[derive(Debug)]
struct OptimisticLayer {
    id: LayerId,
    payload: Option<Value>,
    updater: Option<Updater>,
}

/// Server-confirmed records plus the optimistic layers still in flight.
///
/// The visible source is the base with every pending layer re-applied in
/// submission order, so settling one layer never disturbs the others.
#[derive(Debug, Default)]
pub struct Store {
    base: RecordSource,
    layers: Vec<OptimisticLayer>,
    visible: RecordSource,
    next_layer: LayerId,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the UI should render
    pub fn source(&self) -> &RecordSource {
        &self.visible
    }

    /// Server-confirmed records only
    pub fn base(&self) -> &RecordSource {
        &self.base
    }

    pub fn pending_layers(&self) -> usize {
        self.layers.len()
    }

    /// Publish query data under the root record
    pub fn publish_query(&mut self, data: &Value) {
        self.base.publish(ROOT_ID, data);
        self.rebuild();
    }

    /// Register an in-flight mutation and apply its optimistic payload
    pub fn push_optimistic(&mut self, payload: Option<Value>, updater: Option<Updater>) -> LayerId {
        let id = self.next_layer;
        self.next_layer += 1;
        if let Some(payload) = &payload {
            apply_payload(&mut self.visible, payload, updater);
        }
        self.layers.push(OptimisticLayer { id, payload, updater });
        id
    }

    /// Replace a layer with the authoritative server payload
    pub fn commit(&mut self, layer: LayerId, data: &Value, updater: Option<Updater>) {
        self.layers.retain(|pending| pending.id != layer);
        apply_payload(&mut self.base, data, updater);
        self.rebuild();
    }

    /// Discard a layer, returning the visible records to what they were
    /// without it. Returns false when the layer was already settled.
    pub fn rollback(&mut self, layer: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|pending| pending.id != layer);
        if self.layers.len() == before {
            return false;
        }
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        let mut visible = self.base.clone();
        for layer in &self.layers {
            if let Some(payload) = &layer.payload {
                apply_payload(&mut visible, payload, layer.updater);
            }
        }
        self.visible = visible;
    }
}

fn apply_payload(source: &mut RecordSource, payload: &Value, updater: Option<Updater>) {
    source.publish(MUTATION_ROOT_ID, payload);
    if let Some(update) = updater {
        update(source, payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_list_payload() -> Value {
        json!({
            "viewer": {
                "id": "VXNlcjptZQ==",
                "totalCount": 2,
                "todos": {
                    "edges": [
                        { "cursor": "c0", "node": { "id": "t1", "text": "old", "complete": false } },
                        { "cursor": "c1", "node": { "id": "t2", "text": "other", "complete": true } }
                    ]
                }
            }
        })
    }

    #[test]
    fn test_publish_normalizes_records() {
        let mut source = RecordSource::new();
        source.publish(ROOT_ID, &todo_list_payload());

        assert!(source.contains("t1"));
        assert!(source.contains("t2"));
        assert!(source.contains("VXNlcjptZQ=="));
        assert_eq!(source.get("t1").unwrap()["text"], "old");
        assert_eq!(source.get(ROOT_ID).unwrap()["viewer"], json!({ "__ref": "VXNlcjptZQ==" }));
    }

    #[test]
    fn test_read_resolves_references() {
        let mut source = RecordSource::new();
        source.publish(ROOT_ID, &todo_list_payload());

        let root = source.read(ROOT_ID).unwrap();
        assert_eq!(root["viewer"]["todos"]["edges"][1]["node"]["text"], "other");
    }

    #[test]
    fn test_partial_payload_keeps_other_fields() {
        let mut source = RecordSource::new();
        source.publish(ROOT_ID, &todo_list_payload());
        source.publish(MUTATION_ROOT_ID, &json!({ "renameTodo": { "todo": { "id": "t1", "text": "new" } } }));

        let todo = source.read("t1").unwrap();
        assert_eq!(todo["text"], "new");
        assert_eq!(todo["complete"], false);
    }

    #[test]
    fn test_deleted_record_reads_as_null() {
        let mut source = RecordSource::new();
        source.publish(ROOT_ID, &todo_list_payload());
        source.delete("t1");

        let root = source.read(ROOT_ID).unwrap();
        assert!(root["viewer"]["todos"]["edges"][0]["node"].is_null());
    }

    #[test]
    fn test_append_and_remove_edge() {
        let mut source = RecordSource::new();
        source.publish(ROOT_ID, &todo_list_payload());

        source.append_edge(
            "VXNlcjptZQ==",
            "todos",
            &json!({ "cursor": "c2", "node": { "id": "t3", "text": "third", "complete": false } }),
        );
        source.remove_edge("VXNlcjptZQ==", "todos", "t1");

        let viewer = source.read("VXNlcjptZQ==").unwrap();
        let edges = viewer["todos"]["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0]["node"]["id"], "t2");
        assert_eq!(edges[1]["node"]["text"], "third");
    }

    #[test]
    fn test_append_edge_without_connection_is_ignored() {
        let mut source = RecordSource::new();
        source.append_edge("missing", "todos", &json!({ "node": { "id": "t9" } }));
        assert!(source.is_empty());
    }

    #[test]
    fn test_increment_field() {
        let mut source = RecordSource::new();
        source.publish(ROOT_ID, &todo_list_payload());
        source.increment_field("VXNlcjptZQ==", "totalCount", -1);
        assert_eq!(source.get("VXNlcjptZQ==").unwrap()["totalCount"], 1);
    }

    #[test]
    fn test_optimistic_layer_is_visible_but_not_in_base() {
        let mut store = Store::new();
        store.publish_query(&todo_list_payload());

        store.push_optimistic(Some(json!({ "renameTodo": { "todo": { "id": "t1", "text": "new" } } })), None);

        assert_eq!(store.source().get("t1").unwrap()["text"], "new");
        assert_eq!(store.base().get("t1").unwrap()["text"], "old");
        assert_eq!(store.pending_layers(), 1);
    }

    #[test]
    fn test_rollback_restores_previous_state() {
        let mut store = Store::new();
        store.publish_query(&todo_list_payload());
        let layer = store.push_optimistic(Some(json!({ "renameTodo": { "todo": { "id": "t1", "text": "new" } } })), None);

        assert!(store.rollback(layer));
        assert_eq!(store.source().get("t1").unwrap()["text"], "old");
        assert!(!store.rollback(layer));
    }

    #[test]
    fn test_commit_replaces_prediction_with_server_data() {
        let mut store = Store::new();
        store.publish_query(&todo_list_payload());
        let layer = store.push_optimistic(Some(json!({ "renameTodo": { "todo": { "id": "t1", "text": "new" } } })), None);

        store.commit(
            layer,
            &json!({ "renameTodo": { "todo": { "id": "t1", "text": "new (server)", "complete": false } } }),
            None,
        );

        assert_eq!(store.pending_layers(), 0);
        assert_eq!(store.source().get("t1").unwrap()["text"], "new (server)");
        assert_eq!(store.base().get("t1").unwrap()["text"], "new (server)");
    }

    #[test]
    fn test_settling_one_layer_keeps_later_layers() {
        let mut store = Store::new();
        store.publish_query(&todo_list_payload());
        let first = store.push_optimistic(Some(json!({ "renameTodo": { "todo": { "id": "t1", "text": "a" } } })), None);
        store.push_optimistic(Some(json!({ "renameTodo": { "todo": { "id": "t2", "text": "b" } } })), None);

        store.rollback(first);

        assert_eq!(store.source().get("t1").unwrap()["text"], "old");
        assert_eq!(store.source().get("t2").unwrap()["text"], "b");
    }

    fn drop_t1(source: &mut RecordSource, _payload: &Value) {
        source.remove_edge("VXNlcjptZQ==", "todos", "t1");
        source.delete("t1");
    }

    #[test]
    fn test_updater_runs_for_optimistic_and_server_payloads() {
        let mut store = Store::new();
        store.publish_query(&todo_list_payload());
        let layer = store.push_optimistic(Some(json!({})), Some(drop_t1));
        assert!(!store.source().contains("t1"));
        assert!(store.base().contains("t1"));

        store.commit(layer, &json!({}), Some(drop_t1));
        assert!(!store.base().contains("t1"));
    }
}
