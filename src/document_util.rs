use crate::common_util::record_hint;
use crate::document::{Document, Record};
use crate::error::Error;

pub fn from_json_str(json_str: &str) -> Result<Document, Error> {
    let json_val: serde_json::Value = serde_json::from_str(json_str)?;
    build_document(json_val)
}

pub fn to_json_string(document: &Document) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(document)?)
}

fn build_document(json_val: serde_json::Value) -> Result<Document, Error> {
    match json_val {
        serde_json::Value::Object(record) => Ok(Document::One(record)),
        serde_json::Value::Array(elements) => {
            let mut records = Vec::with_capacity(elements.len());
            for (index, element) in elements.into_iter().enumerate() {
                records.push(build_record(element, index)?);
            }
            Ok(Document::Many(records))
        }
        _ => Err(Error::DocumentMustBeRecordOrSequence {
            path_hint: record_hint(None),
        }),
    }
}

fn build_record(json_val: serde_json::Value, index: usize) -> Result<Record, Error> {
    match json_val {
        serde_json::Value::Object(record) => Ok(record),
        _ => Err(Error::RecordMustBeMap {
            path_hint: record_hint(Some(index)),
        }),
    }
}
