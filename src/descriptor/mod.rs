mod classify;
mod config;
mod error;
mod graph;
mod matrix;
mod naming;
mod pipeline;
mod vocabulary;

pub use classify::{Topology, classify};
pub use config::{
    DescriptorConfig, FailurePolicy, MarkerLevel, OutputSelection, PipelineConfig, WalkLength,
};
pub use error::Error;
pub use graph::{MAX_DEGREE, MolecularGraph, Walk};
pub use matrix::{DescriptorMatrix, corpus_vocabulary};
pub use naming::{ChainName, MARKER_WIDTH, chain_name, marker};
pub use pipeline::{Corpus, DescriptorSet, SkippedMolecule};
pub use vocabulary::{Vocabulary, molecule_vocabulary, unify_reversed};

use crate::model::molecule::Molecule;

/// Runs every configuration of `config` over `molecules`.
///
/// Returns the prepared corpus alongside the per-configuration results so
/// callers can report skipped molecules.
pub fn describe(
    molecules: Vec<Molecule>,
    config: &PipelineConfig,
) -> Result<(Corpus, Vec<DescriptorSet>), Error> {
    let corpus = Corpus::prepare(molecules, config.on_invalid)?;

    let sets = corpus.describe_all(&config.configurations);

    Ok((corpus, sets))
}
