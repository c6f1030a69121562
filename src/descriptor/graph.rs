//! Adjacency-matrix view of a molecule.
//!
//! [`MolecularGraph`] is built once per molecule and shared by every
//! descriptor configuration: walk length and marker level only change how
//! atoms are labelled, never the topology. Per-atom ring/chain/junction
//! classes are computed lazily on first use and cached for the lifetime of
//! the graph.

use super::classify::{self, Topology};
use super::config::WalkLength;
use super::error::Error;
use crate::model::molecule::Molecule;
use crate::model::types::BondOrder;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Highest bond count that fits in the single degree digit of a marker.
pub const MAX_DEGREE: usize = 9;

/// An ordered sequence of bonded atom indices.
pub type Walk = Vec<usize>;

/// Dense symmetric bond-order matrix.
///
/// Kept separate from [`MolecularGraph`] so the classifier can hold a
/// mutable scratch copy and cut edges in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Adjacency {
    n: usize,
    cells: Vec<Option<BondOrder>>,
}

impl Adjacency {
    fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![None; n * n],
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> Option<BondOrder> {
        self.cells[i * self.n + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, order: Option<BondOrder>) {
        self.cells[i * self.n + j] = order;
        self.cells[j * self.n + i] = order;
    }

    pub(crate) fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells[v * self.n..(v + 1) * self.n]
            .iter()
            .enumerate()
            .filter_map(|(w, cell)| cell.map(|_| w))
    }

    /// Marks every vertex reachable from `start` by depth-first traversal.
    pub(crate) fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut visited = vec![false; self.n];
        let mut stack = vec![start];
        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            stack.extend(self.neighbors(v).filter(|&w| !visited[w]));
        }
        visited
    }
}

/// Read-only graph over a molecule's atoms and bonds.
#[derive(Debug)]
pub struct MolecularGraph {
    adjacency: Adjacency,
    topology: OnceLock<Vec<Topology>>,
}

impl MolecularGraph {
    /// Builds the graph of `molecule`, validating everything the naming
    /// stage relies on.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBond`] if a bond points outside the atom list, joins
    ///   an atom to itself, or repeats an already bonded pair.
    /// - [`Error::UnsupportedElement`] if a symbol is empty, longer than two
    ///   characters, or not ASCII.
    /// - [`Error::DegreeOverflow`] if an atom has more than [`MAX_DEGREE`] bonds.
    pub fn from_molecule(molecule: &Molecule) -> Result<Self, Error> {
        let n = molecule.atom_count();

        for (index, atom) in molecule.atoms.iter().enumerate() {
            let symbol = &atom.symbol;
            let valid = !symbol.is_empty()
                && symbol.len() <= 2
                && symbol.bytes().all(|b| b.is_ascii_graphic());
            if !valid {
                return Err(Error::UnsupportedElement {
                    molecule: molecule.name.clone(),
                    index,
                    symbol: symbol.clone(),
                });
            }
        }

        let mut adjacency = Adjacency::new(n);
        for bond in &molecule.bonds {
            if bond.i >= n || bond.j >= n {
                return Err(Error::invalid_bond(
                    &molecule.name,
                    bond.i,
                    bond.j,
                    format!("atom index out of bounds (n_atoms = {})", n),
                ));
            }
            if bond.i == bond.j {
                return Err(Error::invalid_bond(
                    &molecule.name,
                    bond.i,
                    bond.j,
                    "atom is bonded to itself",
                ));
            }
            if adjacency.get(bond.i, bond.j).is_some() {
                return Err(Error::invalid_bond(
                    &molecule.name,
                    bond.i,
                    bond.j,
                    "pair is bonded more than once",
                ));
            }
            adjacency.set(bond.i, bond.j, Some(bond.order));
        }

        for index in 0..n {
            let degree = adjacency.neighbors(index).count();
            if degree > MAX_DEGREE {
                return Err(Error::DegreeOverflow {
                    molecule: molecule.name.clone(),
                    index,
                    degree,
                });
            }
        }

        Ok(Self {
            adjacency,
            topology: OnceLock::new(),
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Bond order between `i` and `j`, or `None` if they are not bonded.
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> Option<BondOrder> {
        self.adjacency.get(i, j)
    }

    #[inline]
    pub fn is_bonded(&self, i: usize, j: usize) -> bool {
        self.cell(i, j).is_some()
    }

    /// Bond order between two atoms that are known to be bonded.
    ///
    /// # Panics
    ///
    /// Panics if `i` and `j` are not bonded. Asking for a missing bond is a
    /// bug in the caller, not a property of the input data.
    pub fn bond_order(&self, i: usize, j: usize) -> BondOrder {
        match self.cell(i, j) {
            Some(order) => order,
            None => panic!("no bond between atoms {i} and {j}"),
        }
    }

    /// Bonded neighbours of `v`, in ascending index order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.neighbors(v)
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).count()
    }

    /// Vertices reachable from `v` over the unmodified graph, as a membership mask.
    pub fn reachable_set(&self, v: usize) -> Vec<bool> {
        self.adjacency.reachable_from(v)
    }

    /// Walks of `length` atoms starting at `v`.
    ///
    /// Length-3 walks exclude an immediate return to `v` but are otherwise
    /// unconstrained.
    pub fn walks_from(&self, v: usize, length: WalkLength) -> Vec<Walk> {
        match length {
            WalkLength::One => vec![vec![v]],
            WalkLength::Two => self.neighbors(v).map(|n| vec![v, n]).collect(),
            WalkLength::Three => self
                .neighbors(v)
                .flat_map(|n1| {
                    self.neighbors(n1)
                        .filter(move |&n2| n2 != v)
                        .map(move |n2| vec![v, n1, n2])
                })
                .collect(),
        }
    }

    /// Every walk of `length` atoms in the graph, with each walk/reverse pair
    /// reduced to whichever of the two is listed first.
    pub fn all_walks(&self, length: WalkLength) -> Vec<Walk> {
        let mut kept: HashSet<Walk> = HashSet::new();
        let mut walks = Vec::new();
        for v in 0..self.vertex_count() {
            for walk in self.walks_from(v, length) {
                let reversed: Walk = walk.iter().rev().copied().collect();
                if kept.contains(&reversed) {
                    continue;
                }
                kept.insert(walk.clone());
                walks.push(walk);
            }
        }
        walks
    }

    /// Structural role of atom `v`.
    pub fn topology(&self, v: usize) -> Topology {
        self.topology
            .get_or_init(|| classify::classify_all(&self.adjacency))[v]
    }

    pub(crate) fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }
}
