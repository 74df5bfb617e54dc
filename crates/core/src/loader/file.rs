use crate::error::Result;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A `.gz` suffix marks a gzip-compressed catalog file.
pub fn is_compressed_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Read a local catalog file, gunzipping it when the path says so.
pub fn read_catalog_file(path: &Path) -> Result<Vec<u8>> {
    if !is_compressed_path(path) {
        return Ok(std::fs::read(path)?);
    }

    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(bytes)
}
