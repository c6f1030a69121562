//! Chain-name histograms.

use super::config::DescriptorConfig;
use super::graph::MolecularGraph;
use super::naming::{self, ChainName};
use crate::model::molecule::Molecule;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Mapping from canonical chain name to occurrence count.
///
/// Iteration is in lexicographic name order, which is also the column order
/// of every [`DescriptorMatrix`](super::DescriptorMatrix) built from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    counts: BTreeMap<ChainName, u32>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every name in `names`.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = ChainName>,
    {
        let mut vocabulary = Self::new();
        for name in names {
            vocabulary.add(name, 1);
        }
        vocabulary
    }

    pub(crate) fn add(&mut self, name: ChainName, count: u32) {
        *self.counts.entry(name).or_insert(0) += count;
    }

    /// Count recorded for `name`, or 0 if absent.
    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// Number of distinct chain names.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ChainName, u32> {
        self.counts.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &ChainName> {
        self.counts.keys()
    }

    /// Sum of all counts, i.e. the number of named walks.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Adds every count of `other` into `self`.
    pub fn merge(&mut self, other: &Vocabulary) {
        for (name, &count) in other {
            self.add(name.clone(), count);
        }
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = (&'a ChainName, &'a u32);
    type IntoIter = btree_map::Iter<'a, ChainName, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Molecule-wide reversal unification.
///
/// For every pair `k < i`, when the blocks of name `i` are the reverse of
/// the blocks of name `k`, name `k` is overwritten with name `i`. Later names
/// therefore win and propagate back to earlier reversed duplicates.
pub fn unify_reversed(mut names: Vec<ChainName>) -> Vec<ChainName> {
    for i in 0..names.len() {
        for k in 0..i {
            if is_block_reverse(&names[i], &names[k]) {
                names[k] = names[i].clone();
            }
        }
    }
    names
}

fn is_block_reverse(a: &ChainName, b: &ChainName) -> bool {
    a.len() == b.len() && a.blocks().eq(b.blocks().rev())
}

/// Local vocabulary of one molecule under `config`.
///
/// Names every deduplicated walk, applies [`unify_reversed`] over the whole
/// list and counts the result. An empty molecule yields an empty vocabulary.
pub fn molecule_vocabulary(
    molecule: &Molecule,
    graph: &MolecularGraph,
    config: &DescriptorConfig,
) -> Vocabulary {
    let names: Vec<ChainName> = graph
        .all_walks(config.walk_length)
        .iter()
        .map(|walk| naming::chain_name(molecule, graph, walk, config.marker_level))
        .collect();

    Vocabulary::from_names(unify_reversed(names))
}
