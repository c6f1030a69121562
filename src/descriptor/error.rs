//! Error types for descriptor generation.
//!
//! Errors fall into two groups. Configuration errors (walk length or marker
//! level out of range, malformed pipeline file) are raised before any
//! computation starts. Structural errors describe a molecule that cannot be
//! turned into a [`MolecularGraph`](super::MolecularGraph); the corpus
//! pipeline either aborts on them or skips the molecule, depending on the
//! configured [`FailurePolicy`](super::FailurePolicy).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running the descriptor pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A walk length outside `1..=3` was requested.
    #[error("unsupported walk length {0}: walks must span 1 to 3 atoms")]
    InvalidWalkLength(usize),

    /// A marker detail level outside `1..=3` was requested.
    #[error("unsupported marker level {0}: expected 1, 2 or 3")]
    InvalidMarkerLevel(u8),

    /// Failed to parse a pipeline configuration TOML document.
    #[error("failed to parse pipeline configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to read a pipeline configuration file from disk.
    #[error("failed to read pipeline configuration '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bond references atoms that cannot form a graph edge.
    ///
    /// Covers out-of-range indices, bonds from an atom to itself and
    /// repeated bonds between the same pair.
    #[error("invalid bond between atoms {i} and {j} in molecule '{molecule}': {detail}")]
    InvalidBond {
        /// Name of the offending molecule.
        molecule: String,
        /// First atom index.
        i: usize,
        /// Second atom index.
        j: usize,
        /// Description of the problem.
        detail: String,
    },

    /// An atom's element symbol cannot be encoded in a two-character marker block.
    #[error("atom {index} in molecule '{molecule}' has unsupported element symbol '{symbol}'")]
    UnsupportedElement {
        /// Name of the offending molecule.
        molecule: String,
        /// Atom index.
        index: usize,
        /// The symbol as read from input.
        symbol: String,
    },

    /// An atom has more bonds than a single marker digit can express.
    #[error("atom {index} in molecule '{molecule}' has {degree} bonds (at most 9 supported)")]
    DegreeOverflow {
        /// Name of the offending molecule.
        molecule: String,
        /// Atom index.
        index: usize,
        /// Number of incident bonds.
        degree: usize,
    },
}

impl Error {
    /// Creates an [`InvalidBond`](Error::InvalidBond) error.
    pub fn invalid_bond(
        molecule: impl Into<String>,
        i: usize,
        j: usize,
        details: impl Into<String>,
    ) -> Self {
        Self::InvalidBond {
            molecule: molecule.into(),
            i,
            j,
            detail: details.into(),
        }
    }

    /// Returns `true` for errors that must stop the run before any molecule
    /// is processed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidWalkLength(_)
                | Error::InvalidMarkerLevel(_)
                | Error::ConfigParse(_)
                | Error::ConfigRead { .. }
        )
    }

    /// Returns `true` for errors tied to a single malformed molecule.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::InvalidBond { .. } | Error::UnsupportedElement { .. } | Error::DegreeOverflow { .. }
        )
    }
}
