//! Normalizing record store.
//!
//! Published payloads are flattened into records. Objects with an `id`
//! become records keyed by that id; objects without one get a client id
//! derived from their parent and field name.

use super::record::{DataId, Record, RecordSource};
use super::StoreError;
use serde_json::{json, Map, Value};

pub const ROOT_ID: &str = "client:root";

#[derive(Debug)]
pub struct Store {
    source: RecordSource,
    publish_count: u64,
}

fn object_id(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl Store {
    pub fn new(source: RecordSource) -> Self {
        Self {
            source,
            publish_count: 0,
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&Record> {
        self.source.get(id)
    }

    pub fn root(&self) -> Option<&Record> {
        self.lookup(ROOT_ID)
    }

    pub fn record_count(&self) -> usize {
        self.source.len()
    }

    pub fn publish_count(&self) -> u64 {
        self.publish_count
    }

    /// Normalize `payload` under the root record. Returns the ids touched.
    pub fn publish(&mut self, payload: &Value) -> Result<Vec<DataId>, StoreError> {
        let obj = payload.as_object().ok_or(StoreError::NotAnObject)?;
        let mut updated = Vec::new();
        self.normalize(ROOT_ID.to_string(), obj, &mut updated);
        self.publish_count += 1;
        tracing::debug!(records = updated.len(), total = self.source.len(), "store publish");
        Ok(updated)
    }

    fn normalize(&mut self, id: DataId, obj: &Map<String, Value>, updated: &mut Vec<DataId>) {
        let mut record = Record::new(id.clone());
        for (key, value) in obj {
            if key == "__typename" {
                record.typename = value.as_str().map(str::to_string);
                continue;
            }
            let field = self.normalize_value(&id, key, value, updated);
            record.fields.insert(key.clone(), field);
        }
        self.source.merge(record);
        updated.push(id);
    }

    fn normalize_value(
        &mut self,
        parent: &str,
        key: &str,
        value: &Value,
        updated: &mut Vec<DataId>,
    ) -> Value {
        match value {
            Value::Object(obj) => {
                let child = object_id(obj).unwrap_or_else(|| format!("{}:{}", parent, key));
                self.normalize(child.clone(), obj, updated);
                json!({ "__ref": child })
            }
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| self.normalize_value(parent, &format!("{}:{}", key, i), item, updated))
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }
}
