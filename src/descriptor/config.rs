use super::error::Error;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Number of atoms in an enumerated walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "usize")]
pub enum WalkLength {
    One = 1,
    Two = 2,
    Three = 3,
}

impl WalkLength {
    #[inline]
    pub fn atoms(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for WalkLength {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(WalkLength::One),
            2 => Ok(WalkLength::Two),
            3 => Ok(WalkLength::Three),
            other => Err(Error::InvalidWalkLength(other)),
        }
    }
}

impl fmt::Display for WalkLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.atoms())
    }
}

/// How much of an atom's environment its marker encodes.
///
/// Levels are cumulative: each one adds a marker position on top of the
/// previous level, positions not covered are written as `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum MarkerLevel {
    /// Element symbol and bond count.
    Element = 1,
    /// Adds the bond-signature letter.
    Bonds = 2,
    /// Adds the ring/chain/junction letter.
    Topology = 3,
}

impl MarkerLevel {
    #[inline]
    pub fn level(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn includes(self, other: MarkerLevel) -> bool {
        self >= other
    }
}

impl TryFrom<u8> for MarkerLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MarkerLevel::Element),
            2 => Ok(MarkerLevel::Bonds),
            3 => Ok(MarkerLevel::Topology),
            other => Err(Error::InvalidMarkerLevel(other)),
        }
    }
}

impl fmt::Display for MarkerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// One (walk length, marker level) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct DescriptorConfig {
    pub walk_length: WalkLength,
    pub marker_level: MarkerLevel,
}

impl DescriptorConfig {
    pub fn new(walk_length: WalkLength, marker_level: MarkerLevel) -> Self {
        Self {
            walk_length,
            marker_level,
        }
    }

    /// Validates raw knob values and builds a configuration.
    pub fn from_raw(walk_length: usize, marker_level: u8) -> Result<Self, Error> {
        Ok(Self::new(
            WalkLength::try_from(walk_length)?,
            MarkerLevel::try_from(marker_level)?,
        ))
    }

    /// Short identifier used in output file names, e.g. `k2m1`.
    pub fn id(&self) -> String {
        format!("k{}m{}", self.walk_length, self.marker_level)
    }

    /// The fixed battery of six configurations: walk lengths 2 and 3 at each
    /// marker level, ordered by level first.
    pub fn standard_battery() -> Vec<Self> {
        let mut configs = Vec::with_capacity(6);
        for level in [MarkerLevel::Element, MarkerLevel::Bonds, MarkerLevel::Topology] {
            for length in [WalkLength::Two, WalkLength::Three] {
                configs.push(Self::new(length, level));
            }
        }
        configs
    }
}

impl fmt::Display for DescriptorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// What the corpus pipeline does with a molecule whose graph cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run at the first structural error.
    #[default]
    Abort,
    /// Log the molecule, leave it out of the corpus and keep going.
    Skip,
}

/// Which descriptor files are produced for each configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSelection {
    pub vocabulary: bool,
    pub molecule_lists: bool,
    pub matrix: bool,
}

impl Default for OutputSelection {
    fn default() -> Self {
        Self {
            vocabulary: true,
            molecule_lists: false,
            matrix: true,
        }
    }
}

impl OutputSelection {
    pub fn is_empty(&self) -> bool {
        !(self.vocabulary || self.molecule_lists || self.matrix)
    }
}

/// Full run configuration, loadable from TOML.
///
/// ```toml
/// on_invalid = "skip"
///
/// [[configurations]]
/// walk_length = 3
/// marker_level = 3
///
/// [outputs]
/// molecule_lists = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub configurations: Vec<DescriptorConfig>,
    pub on_invalid: FailurePolicy,
    pub outputs: OutputSelection,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            configurations: DescriptorConfig::standard_battery(),
            on_invalid: FailurePolicy::default(),
            outputs: OutputSelection::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
