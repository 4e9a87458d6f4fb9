use crate::error::{CliError, CliResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One pixel to paint: position, color, and the space's mint.
#[derive(Debug, Clone, Deserialize)]
pub struct PixelRow {
    pub x: i64,
    pub y: i64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub mint: String,
}

/// One owned space to register.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceRow {
    pub x: i64,
    pub y: i64,
    pub mint: String,
}

/// Read and deserialize a headered CSV file, rejecting empty input.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> CliResult<Vec<T>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "{} has no rows",
            path.display()
        )));
    }
    Ok(rows)
}
