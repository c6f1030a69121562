//! Ring / chain / junction classification of atoms.
//!
//! An incident bond of atom `v` is a *bridge* when cutting it changes the set
//! of vertices reachable from `v`, and a *non-bridge* when an alternative path
//! survives the cut (so `v` sits on a cycle through that bond). The class of
//! `v` follows from the tally over all of its bonds:
//!
//! | non-bridges | bridges | class                |
//! |-------------|---------|----------------------|
//! | 0           | any     | [`Topology::Chain`]  |
//! | ≥ 1         | 0       | [`Topology::Ring`]   |
//! | ≥ 1         | ≥ 1     | [`Topology::Junction`] |
//!
//! Isolated atoms therefore classify as chains.

use super::graph::{Adjacency, MolecularGraph};

/// Structural role of an atom within its molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Chain,
    Ring,
    Junction,
}

impl Topology {
    /// Marker letter for this class.
    pub fn code(self) -> char {
        match self {
            Topology::Chain => 'c',
            Topology::Ring => 'r',
            Topology::Junction => 's',
        }
    }
}

/// Classifies a single atom of `graph`.
///
/// Uses the graph's cached classification, which is computed for all atoms
/// on first request.
pub fn classify(graph: &MolecularGraph, v: usize) -> Topology {
    graph.topology(v)
}

/// Classifies every atom, reusing one scratch matrix for all edge cuts.
pub(crate) fn classify_all(adjacency: &Adjacency) -> Vec<Topology> {
    let mut scratch = Scratch::new(adjacency);
    (0..adjacency.len()).map(|v| scratch.classify(v)).collect()
}

struct Scratch {
    adjacency: Adjacency,
}

impl Scratch {
    fn new(adjacency: &Adjacency) -> Self {
        Self {
            adjacency: adjacency.clone(),
        }
    }

    fn classify(&mut self, v: usize) -> Topology {
        let reference = self.adjacency.reachable_from(v);
        let neighbors: Vec<usize> = self.adjacency.neighbors(v).collect();

        let mut bridges = 0usize;
        let mut cycle_edges = 0usize;
        for e in neighbors {
            if self.is_bridge(v, e, &reference) {
                bridges += 1;
            } else {
                cycle_edges += 1;
            }
        }

        if cycle_edges == 0 {
            Topology::Chain
        } else if bridges == 0 {
            Topology::Ring
        } else {
            Topology::Junction
        }
    }

    /// Cuts `v–e`, probes reachability from `v`, and restores the edge.
    fn is_bridge(&mut self, v: usize, e: usize, reference: &[bool]) -> bool {
        let saved = self.adjacency.get(v, e);
        self.adjacency.set(v, e, None);
        let reachable = self.adjacency.reachable_from(v);
        self.adjacency.set(v, e, saved);
        reachable != reference
    }
}
