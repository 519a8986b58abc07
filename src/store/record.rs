use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

pub type DataId = String;

/// One normalized record. Links to other records are stored as
/// `{"__ref": "<id>"}` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: DataId,
    pub typename: Option<String>,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<DataId>) -> Self {
        Self {
            id: id.into(),
            typename: None,
            fields: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordSource {
    records: HashMap<DataId, Record>,
}

impl RecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Insert `record`, merging its fields over any existing record.
    pub fn merge(&mut self, record: Record) {
        match self.records.get_mut(&record.id) {
            Some(existing) => {
                if record.typename.is_some() {
                    existing.typename = record.typename;
                }
                existing.fields.extend(record.fields);
            }
            None => {
                self.records.insert(record.id.clone(), record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
