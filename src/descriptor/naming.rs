//! Per-atom markers and chain names.
//!
//! A marker is a fixed five-character block:
//!
//! | chars | content                                                       |
//! |-------|---------------------------------------------------------------|
//! | 0–1   | element symbol, right-padded with `_` to two characters       |
//! | 2     | bond count (always present)                                   |
//! | 3     | bond signature `s`/`d`/`t`/`w` from [`MarkerLevel::Bonds`], else `*` |
//! | 4     | topology `c`/`r`/`s` from [`MarkerLevel::Topology`], else `*`   |
//!
//! A chain name is the concatenation of the markers along a walk, oriented so
//! that its first block never compares greater than its last block.

use super::config::MarkerLevel;
use super::graph::MolecularGraph;
use crate::model::molecule::Molecule;
use crate::model::types::BondOrder;
use std::borrow::Borrow;
use std::fmt;

/// Width in bytes of one marker block.
pub const MARKER_WIDTH: usize = 5;

const UNSET: char = '*';

/// Canonical name of an atom chain: a sequence of [`MARKER_WIDTH`] blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainName(String);

impl ChainName {
    pub(crate) fn from_blocks<S: AsRef<str>>(blocks: &[S]) -> Self {
        Self(blocks.iter().map(AsRef::as_ref).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of atoms in the chain.
    pub fn len(&self) -> usize {
        self.0.len() / MARKER_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The per-atom marker blocks, in chain order.
    pub fn blocks(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        (0..self.len()).map(move |k| &self.0[k * MARKER_WIDTH..(k + 1) * MARKER_WIDTH])
    }
}

impl Borrow<str> for ChainName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the marker of atom `atom` at detail `level`.
pub fn marker(
    molecule: &Molecule,
    graph: &MolecularGraph,
    atom: usize,
    level: MarkerLevel,
) -> String {
    let mut out = String::with_capacity(MARKER_WIDTH);

    let symbol = &molecule.atoms[atom].symbol;
    out.push_str(symbol);
    if symbol.len() < 2 {
        out.push('_');
    }

    // Degree never exceeds MAX_DEGREE once the graph is built.
    let degree = graph.degree(atom) as u32;
    out.push(char::from_digit(degree, 10).unwrap_or(UNSET));

    out.push(if level.includes(MarkerLevel::Bonds) {
        bond_signature(graph, atom)
    } else {
        UNSET
    });

    out.push(if level.includes(MarkerLevel::Topology) {
        graph.topology(atom).code()
    } else {
        UNSET
    });

    out
}

/// Letter summarising the orders of an atom's bonds.
///
/// `s` when every bond is single (including no bonds at all). Otherwise the
/// first order present in the priority double, triple, other wins, so a
/// double + triple centre reads `d`.
fn bond_signature(graph: &MolecularGraph, atom: usize) -> char {
    let mut all_single = true;
    let mut seen = [false; 3];
    for n in graph.neighbors(atom) {
        match graph.bond_order(atom, n) {
            BondOrder::Single => {}
            BondOrder::Double => {
                all_single = false;
                seen[0] = true;
            }
            BondOrder::Triple => {
                all_single = false;
                seen[1] = true;
            }
            BondOrder::Other => {
                all_single = false;
                seen[2] = true;
            }
        }
    }

    if all_single {
        return 's';
    }
    ['d', 't', 'w']
        .into_iter()
        .zip(seen)
        .find_map(|(letter, present)| present.then_some(letter))
        .unwrap_or('?')
}

/// Names the chain traced by `walk`.
///
/// Markers are concatenated in walk order; if the first block compares
/// greater than the last, the first and last blocks trade places. Middle
/// blocks never influence the orientation.
pub fn chain_name(
    molecule: &Molecule,
    graph: &MolecularGraph,
    walk: &[usize],
    level: MarkerLevel,
) -> ChainName {
    let mut blocks: Vec<String> = walk
        .iter()
        .map(|&atom| marker(molecule, graph, atom, level))
        .collect();

    if let (Some(first), Some(last)) = (blocks.first(), blocks.last()) {
        if first > last {
            let end = blocks.len() - 1;
            blocks.swap(0, end);
        }
    }

    ChainName::from_blocks(&blocks)
}
