use crate::document::Document;
use crate::document_util;
use crate::error::Error;
use log::info;
use std::fs;
use std::path::Path;

pub fn load(path: &Path) -> Result<Document, Error> {
    info!("Reading catalog file: {}", path.display());
    let json_str = fs::read_to_string(path)?;
    document_util::from_json_str(&json_str)
}

pub fn save(document: &Document, path: &Path) -> Result<(), Error> {
    // serialize fully before touching the file so a failure cannot leave a partial write
    let json_str = document_util::to_json_string(document)?;
    info!("Writing catalog file: {}", path.display());
    fs::write(path, json_str)?;
    Ok(())
}
