use serde::Serialize;

pub type Record = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Document {
    One(Record),
    Many(Vec<Record>),
}
