use std::io;
use thiserror;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid JSON")]
    InvalidJson(#[from] serde_json::Error),
    #[error("invalid YAML")]
    InvalidYaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("at {path_hint}: document must be a record or a sequence of records")]
    DocumentMustBeRecordOrSequence { path_hint: String },
    #[error("at {path_hint}: every element of a document sequence must be a record")]
    RecordMustBeMap { path_hint: String },
    #[error("at {path_hint}: value must be a sequence of labels")]
    PathMustBeSequence { path_hint: String },
    #[error("at {path_hint}: rules must be a mapping from old label to new label")]
    RulesMustBeMap { path_hint: String },
    #[error("at {path_hint}: rule labels must be of type string")]
    RuleLabelMustBeString { path_hint: String },
    #[error("at {path_hint}: rule label must not be empty")]
    EmptyRuleLabel { path_hint: String },
    #[error("conflicting rules: label {label:?} is both rewritten and a rewrite target")]
    ConflictingRules { label: String },
    #[error("rule set must contain at least one rule")]
    EmptyRuleSet,
}
