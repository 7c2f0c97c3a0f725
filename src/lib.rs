pub mod common_util;
pub mod document;
pub mod document_util;
pub mod error;
pub mod rewrite;
pub mod rules;
pub mod rules_util;
pub mod store;
