use crate::common_util::field_hint;
use crate::document::{Document, Record};
use crate::error::Error;
use crate::rules::RuleSet;
use itertools::Itertools;
use log::{debug, info};

pub const PATH_FIELD: &str = "path";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RewriteStats {
    pub records_seen: usize,
    pub records_changed: usize,
    pub labels_replaced: usize,
}

pub fn rewrite(document: &mut Document, rules: &RuleSet) -> Result<RewriteStats, Error> {
    let mut stats = RewriteStats::default();
    let mut changed_labels = Vec::new();

    match document {
        Document::One(record) => {
            rewrite_record(record, None, rules, &mut stats, &mut changed_labels)?
        }
        Document::Many(records) => {
            for (index, record) in records.iter_mut().enumerate() {
                rewrite_record(record, Some(index), rules, &mut stats, &mut changed_labels)?;
            }
        }
    }

    if stats.labels_replaced > 0 {
        info!(
            "replaced {} label(s) in {} of {} record(s): {}",
            stats.labels_replaced,
            stats.records_changed,
            stats.records_seen,
            changed_labels.iter().unique().join(", ")
        );
    } else {
        info!("no matching labels in {} record(s)", stats.records_seen);
    }

    Ok(stats)
}

fn rewrite_record(
    record: &mut Record,
    index: Option<usize>,
    rules: &RuleSet,
    stats: &mut RewriteStats,
    changed_labels: &mut Vec<String>,
) -> Result<(), Error> {
    stats.records_seen += 1;

    let path_val = match record.get_mut(PATH_FIELD) {
        Some(path_val) => path_val,
        None => return Ok(()),
    };

    let elements = match path_val {
        serde_json::Value::Array(elements) => elements,
        _ => {
            return Err(Error::PathMustBeSequence {
                path_hint: field_hint(index, PATH_FIELD),
            })
        }
    };

    let mut replaced_here = 0;
    for element in elements.iter_mut() {
        // non-string elements never match a rule and pass through untouched
        let label = match element.as_str() {
            Some(label) => label,
            None => continue,
        };

        if let Some(canonical) = rules.relabel(label) {
            debug!(
                "{}: {:?} -> {:?}",
                field_hint(index, PATH_FIELD),
                label,
                canonical
            );
            changed_labels.push(label.to_string());
            *element = serde_json::Value::String(canonical.to_string());
            replaced_here += 1;
        }
    }

    if replaced_here > 0 {
        stats.records_changed += 1;
        stats.labels_replaced += replaced_here;
    }

    Ok(())
}
