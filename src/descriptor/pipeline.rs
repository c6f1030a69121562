//! Corpus-level driver for the descriptor stack.
//!
//! A [`Corpus`] owns the parsed molecules together with their graphs. Graphs
//! are built exactly once in [`Corpus::prepare`] and shared, read-only, by
//! every configuration passed to [`Corpus::describe`]. Per-molecule work runs
//! on the rayon pool; merging into the corpus vocabulary is serial.

use super::config::{DescriptorConfig, FailurePolicy};
use super::error::Error;
use super::graph::MolecularGraph;
use super::matrix::{DescriptorMatrix, corpus_vocabulary};
use super::vocabulary::{Vocabulary, molecule_vocabulary};
use crate::model::molecule::Molecule;
use log::{debug, info, warn};
use rayon::prelude::*;

/// A molecule left out of the corpus under [`FailurePolicy::Skip`].
#[derive(Debug)]
pub struct SkippedMolecule {
    /// Position of the molecule in the input sequence.
    pub index: usize,
    pub name: String,
    pub error: Error,
}

#[derive(Debug)]
struct Entry {
    molecule: Molecule,
    graph: MolecularGraph,
}

/// Validated molecules ready for descriptor generation.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<Entry>,
    skipped: Vec<SkippedMolecule>,
}

/// Everything produced for one configuration.
#[derive(Debug, Clone)]
pub struct DescriptorSet {
    pub config: DescriptorConfig,
    /// Row labels, in corpus order.
    pub molecule_names: Vec<String>,
    pub molecule_vocabularies: Vec<Vocabulary>,
    pub corpus_vocabulary: Vocabulary,
    pub matrix: DescriptorMatrix,
}

impl Corpus {
    /// Builds one graph per molecule.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], returns the structural error of the
    /// first invalid molecule in input order. Under [`FailurePolicy::Skip`]
    /// this never fails; invalid molecules are logged and recorded in
    /// [`skipped`](Self::skipped).
    pub fn prepare(molecules: Vec<Molecule>, policy: FailurePolicy) -> Result<Self, Error> {
        let total = molecules.len();
        let built: Vec<(Molecule, Result<MolecularGraph, Error>)> = molecules
            .into_par_iter()
            .map(|molecule| {
                let graph = MolecularGraph::from_molecule(&molecule);
                (molecule, graph)
            })
            .collect();

        let mut corpus = Corpus::default();
        for (index, (molecule, graph)) in built.into_iter().enumerate() {
            match graph {
                Ok(graph) => corpus.entries.push(Entry { molecule, graph }),
                Err(error) => match policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Skip => {
                        warn!("skipping molecule #{} '{}': {}", index + 1, molecule.name, error);
                        corpus.skipped.push(SkippedMolecule {
                            index,
                            name: molecule.name,
                            error,
                        });
                    }
                },
            }
        }

        info!(
            "prepared {} of {} molecules ({} skipped)",
            corpus.len(),
            total,
            corpus.skipped.len()
        );
        Ok(corpus)
    }

    /// Number of molecules that made it into the corpus.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn skipped(&self) -> &[SkippedMolecule] {
        &self.skipped
    }

    pub fn molecules(&self) -> impl Iterator<Item = &Molecule> + '_ {
        self.entries.iter().map(|e| &e.molecule)
    }

    pub fn graph(&self, index: usize) -> Option<&MolecularGraph> {
        self.entries.get(index).map(|e| &e.graph)
    }

    /// Local vocabularies, corpus vocabulary and matrix for `config`.
    pub fn describe(&self, config: &DescriptorConfig) -> DescriptorSet {
        let molecule_vocabularies: Vec<Vocabulary> = self
            .entries
            .par_iter()
            .map(|e| molecule_vocabulary(&e.molecule, &e.graph, config))
            .collect();

        let corpus_vocabulary = corpus_vocabulary(&molecule_vocabularies);
        let matrix = DescriptorMatrix::assemble(&molecule_vocabularies, &corpus_vocabulary);

        debug!(
            "{}: {} walks, {} chain types over {} molecules",
            config,
            corpus_vocabulary.total(),
            corpus_vocabulary.len(),
            matrix.rows()
        );

        DescriptorSet {
            config: *config,
            molecule_names: self.molecules().map(|m| m.name.clone()).collect(),
            molecule_vocabularies,
            corpus_vocabulary,
            matrix,
        }
    }

    /// Runs every configuration, returning results in the order given.
    pub fn describe_all(&self, configs: &[DescriptorConfig]) -> Vec<DescriptorSet> {
        let sets: Vec<DescriptorSet> = configs.par_iter().map(|c| self.describe(c)).collect();
        info!("computed {} descriptor configurations", sets.len());
        sets
    }
}
