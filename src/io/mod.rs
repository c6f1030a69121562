//! Molecule readers and descriptor writers.
//!
//! Input comes in two multi-record text formats, SD files (`.sdf`/`.mol`)
//! and STR connection tables (`.str`). Output is plain whitespace-delimited
//! text, one file per descriptor configuration and output kind.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::model::molecule::Molecule;

pub mod error;

mod sdf {
    pub mod reader;
}

mod str_file {
    pub mod reader;
}

mod descriptors {
    pub mod writer;
}

pub use descriptors::writer::{
    matrix_file_name, molecule_lists_file_name, vocabulary_file_name, write_matrix,
    write_molecule_lists, write_set, write_vocabulary,
};
pub use error::Error;

/// Supported molecule file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Sdf,
    Str,
}

impl Format {
    /// Infers the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let unsupported = || Error::UnsupportedFormat(path.display().to_string());
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(unsupported)?
            .to_lowercase();
        match ext.as_str() {
            "sdf" | "mol" => Ok(Format::Sdf),
            "str" => Ok(Format::Str),
            _ => Err(unsupported()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Sdf => write!(f, "SDF"),
            Format::Str => write!(f, "STR"),
        }
    }
}

/// Reads every molecule record from a buffered source.
pub struct MoleculeReader<R> {
    reader: R,
    format: Format,
}

impl<R: BufRead> MoleculeReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    pub fn read(self) -> Result<Vec<Molecule>, Error> {
        match self.format {
            Format::Sdf => sdf::reader::read(self.reader),
            Format::Str => str_file::reader::read(self.reader),
        }
    }
}

/// Opens `path` and reads it in `format`, or in the format implied by its
/// extension when `format` is `None`.
pub fn read_path(path: &Path, format: Option<Format>) -> Result<Vec<Molecule>, Error> {
    let format = match format {
        Some(f) => f,
        None => Format::from_path(path)?,
    };
    let file = File::open(path)?;
    let molecules = MoleculeReader::new(BufReader::new(file), format).read()?;
    info!(
        "read {} molecules from {} ({})",
        molecules.len(),
        path.display(),
        format
    );
    Ok(molecules)
}
