//! Permissive text decoding.

use std::path::Path;

use unisql_core::errors::ScanError;

/// Decode `bytes` as UTF-8, dropping every invalid byte sequence.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Read a whole script, tolerating undecodable bytes.
pub fn read_script(path: &Path) -> Result<String, ScanError> {
    let bytes = std::fs::read(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_permissive(&bytes))
}
