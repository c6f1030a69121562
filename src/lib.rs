//! Chain-fingerprint descriptors for small-molecule sets.
//!
//! Every molecule is viewed as a graph of atoms and bonds. Short walks of one
//! to three bonded atoms are enumerated, each atom along a walk is labelled
//! with a fixed-width marker, and the concatenated markers form a canonical
//! *chain name*. Counting chain names per molecule gives a histogram; the
//! union of all histograms defines the columns of a molecule × chain-type
//! count matrix suitable as a feature matrix for structure–property models.
//!
//! # Quick Start
//!
//! ```
//! use chainprint::{Atom, Bond, BondOrder, Molecule};
//! use chainprint::{Corpus, DescriptorConfig, FailurePolicy, MarkerLevel, WalkLength};
//!
//! let mut mol = Molecule::new("A2");
//! mol.atoms.push(Atom::new("C", [0.0, 0.0, 0.0]));
//! mol.atoms.push(Atom::new("O", [1.4, 0.0, 0.0]));
//! mol.bonds.push(Bond::new(0, 1, BondOrder::Single));
//!
//! let corpus = Corpus::prepare(vec![mol], FailurePolicy::Abort)?;
//! let set = corpus.describe(&DescriptorConfig::new(WalkLength::Two, MarkerLevel::Element));
//!
//! assert_eq!(set.corpus_vocabulary.get("C_1**O_1**"), 1);
//! assert_eq!((set.matrix.rows(), set.matrix.cols()), (1, 1));
//! assert_eq!(set.matrix.get(0, 0), 1);
//! # Ok::<(), chainprint::DescriptorError>(())
//! ```
//!
//! # Markers
//!
//! A marker is five characters: the element symbol padded to two with `_`,
//! the bond count, a bond-signature letter (`s`, `d`, `t`, `w`) and a
//! topology letter (`c` chain, `r` ring, `s` junction). The [`MarkerLevel`]
//! decides how many of the last two positions are filled; the rest read `*`.
//!
//! # Module Organization
//!
//! - [`io`]: SDF and STR readers, descriptor text writers
//! - [`Corpus`]: Graph construction once per molecule, then any number of
//!   [`DescriptorConfig`]s
//! - [`PipelineConfig`]: Configurations, failure policy and output selection,
//!   loadable from TOML

mod descriptor;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::molecule::{Bond, Molecule};
pub use model::types::{BondOrder, ParseBondOrderError};

pub use descriptor::{
    ChainName, Corpus, DescriptorConfig, DescriptorMatrix, DescriptorSet, FailurePolicy,
    MARKER_WIDTH, MAX_DEGREE, MarkerLevel, MolecularGraph, OutputSelection, PipelineConfig,
    SkippedMolecule, Topology, Vocabulary, WalkLength, Walk, chain_name, classify,
    corpus_vocabulary, describe, marker, molecule_vocabulary, unify_reversed,
};

pub use descriptor::Error as DescriptorError;
