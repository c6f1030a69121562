use super::atom::Atom;
use super::types::BondOrder;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize, order: BondOrder) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2, order }
        } else {
            Self { i: idx2, j: idx1, order }
        }
    }

    #[inline]
    pub fn touches(&self, atom: usize) -> bool {
        self.i == atom || self.j == atom
    }
}

/// One input record: a named set of atoms (index = position) and the bonds
/// between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns `true` if a bond between the two atoms is already present.
    pub fn has_bond(&self, a: usize, b: usize) -> bool {
        let key = Bond::new(a, b, BondOrder::Single);
        self.bonds.iter().any(|bond| bond.i == key.i && bond.j == key.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_new_normalizes_endpoints() {
        let bond = Bond::new(5, 2, BondOrder::Double);
        assert_eq!((bond.i, bond.j), (2, 5));
        assert!(bond.touches(2));
        assert!(bond.touches(5));
        assert!(!bond.touches(3));
    }

    #[test]
    fn molecule_counts_and_lookup() {
        let mut mol = Molecule::new("ethanol");
        mol.atoms.push(Atom::new("C", [0.0; 3]).with_hydrogens(3));
        mol.atoms.push(Atom::new("C", [1.5, 0.0, 0.0]).with_hydrogens(2));
        mol.atoms.push(Atom::new("O", [2.0, 1.0, 0.0]).with_hydrogens(1));
        mol.bonds.push(Bond::new(0, 1, BondOrder::Single));
        mol.bonds.push(Bond::new(2, 1, BondOrder::Single));

        assert_eq!(mol.atom_count(), 3);
        assert_eq!(mol.bond_count(), 2);
        assert!(mol.has_bond(1, 2));
        assert!(mol.has_bond(1, 0));
        assert!(!mol.has_bond(0, 2));
        assert_eq!(mol.atoms[2].hydrogen_count, 1);
    }

    #[test]
    fn default_molecule_is_empty() {
        let mol = Molecule::new("nothing");
        assert!(mol.is_empty());
        assert_eq!(mol.name, "nothing");
    }
}
