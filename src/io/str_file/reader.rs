//! Reader for the STR connection-table format.
//!
//! Each record starts with a `name atomCount` header, followed by one line
//! per atom:
//!
//! ```text
//! index symbol[h] [h] skip link link link link link link x y z
//! ```
//!
//! A symbol token longer than two characters carries the hydrogen count in
//! its tail (`Cl2`); otherwise the count is the next token. A link of `0` is
//! empty; any other link encodes the 1-based partner index followed by a
//! single bond-order digit (`123` is atom 12, order 3). Every bond appears on
//! both partners' lines and is kept only from the lower-indexed side.

use crate::io::{Format, error::Error};
use crate::model::{
    atom::Atom,
    molecule::{Bond, Molecule},
    types::BondOrder,
};
use std::io::BufRead;

const LINKS_PER_ATOM: usize = 6;

pub fn read<R: BufRead>(reader: R) -> Result<Vec<Molecule>, Error> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));
    let mut molecules = Vec::new();

    while let Some((ln, line)) = lines.next() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (name, atom_count) = parse_header(&line, ln)?;
        let mut molecule = Molecule::new(name);

        for position in 0..atom_count {
            let (atom_ln, atom_line) = lines.next().ok_or_else(|| {
                Error::parse(
                    Format::Str,
                    ln + position + 1,
                    format!(
                        "record '{}' ended after {} of {} atoms",
                        molecule.name, position, atom_count
                    ),
                )
            })?;
            let atom_line = atom_line?;
            parse_atom_line(&atom_line, atom_ln, position, &mut molecule)?;
        }

        molecules.push(molecule);
    }

    Ok(molecules)
}

fn parse_header(line: &str, ln: usize) -> Result<(&str, usize), Error> {
    let mut tokens = line.split_whitespace();
    let name = tokens
        .next()
        .ok_or_else(|| Error::parse(Format::Str, ln, "missing molecule name"))?;
    let count = tokens
        .next()
        .ok_or_else(|| Error::parse(Format::Str, ln, "missing atom count"))?
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Str, ln, "invalid atom count"))?;
    Ok((name, count))
}

fn parse_atom_line(
    line: &str,
    ln: usize,
    position: usize,
    molecule: &mut Molecule,
) -> Result<(), Error> {
    let mut tokens = line.split_whitespace();
    let mut next = |what: &str| {
        tokens
            .next()
            .ok_or_else(|| Error::parse(Format::Str, ln, format!("missing {what}")))
    };

    let index = next("atom index")?
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Str, ln, "invalid atom index"))?;
    if index != position + 1 {
        return Err(Error::parse(
            Format::Str,
            ln,
            format!("atom index {index} does not match its position {}", position + 1),
        ));
    }
    let atom = index - 1;

    let symbol_token = next("element symbol")?;
    let (symbol, hydrogens) = match symbol_token.char_indices().nth(2) {
        Some((split, _)) => (&symbol_token[..split], &symbol_token[split..]),
        None => (symbol_token, next("hydrogen count")?),
    };
    let hydrogen_count = hydrogens
        .parse::<u32>()
        .map_err(|_| Error::parse(Format::Str, ln, "invalid hydrogen count"))?;

    next("reserved field")?;

    for _ in 0..LINKS_PER_ATOM {
        let token = next("link field")?;
        if let Some((partner, order)) = parse_link(token, ln)? {
            if atom < partner {
                molecule.bonds.push(Bond::new(atom, partner, order));
            }
        }
    }

    let mut position_xyz = [0.0; 3];
    for (slot, axis) in position_xyz.iter_mut().zip(["x", "y", "z"]) {
        *slot = next(format!("{axis} coordinate").as_str())?
            .parse::<f64>()
            .map_err(|_| Error::parse(Format::Str, ln, format!("invalid {axis} coordinate")))?;
    }

    molecule
        .atoms
        .push(Atom::new(symbol, position_xyz).with_hydrogens(hydrogen_count));
    Ok(())
}

/// Decodes one link field into a 0-based partner index and bond order.
fn parse_link(token: &str, ln: usize) -> Result<Option<(usize, BondOrder)>, Error> {
    let value = token
        .parse::<u64>()
        .map_err(|_| Error::parse(Format::Str, ln, format!("invalid link field '{token}'")))?;
    if value == 0 {
        return Ok(None);
    }

    let (partner, order) = token.split_at(token.len() - 1);
    let partner = partner
        .parse::<usize>()
        .ok()
        .filter(|&p| p > 0)
        .ok_or_else(|| {
            Error::parse(
                Format::Str,
                ln,
                format!("link field '{token}' has no partner index"),
            )
        })?;
    let order = order
        .parse::<BondOrder>()
        .map_err(|e| Error::parse(Format::Str, ln, e.to_string()))?;

    Ok(Some((partner - 1, order)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const FORMALDEHYDE_AND_CHLOROMETHANE: &str = "\
formaldehyde 2
1 C 2 0 22 0 0 0 0 0 0.000 0.000 0.000
2 O 0 0 12 0 0 0 0 0 1.200 0.000 0.000

chloromethane 2
1 C 3 0 21 0 0 0 0 0 0.000 0.000 0.000
2 Cl0 0 11 0 0 0 0 0 1.780 0.000 0.000
";

    #[test]
    fn reads_records_and_keeps_each_bond_once() {
        let mols = read(Cursor::new(FORMALDEHYDE_AND_CHLOROMETHANE)).unwrap();
        assert_eq!(mols.len(), 2);

        let formaldehyde = &mols[0];
        assert_eq!(formaldehyde.name, "formaldehyde");
        assert_eq!(formaldehyde.atoms[0].hydrogen_count, 2);
        assert_eq!(formaldehyde.bonds, vec![Bond::new(0, 1, BondOrder::Double)]);

        let chloromethane = &mols[1];
        assert_eq!(chloromethane.atoms[1].symbol, "Cl");
        assert_eq!(chloromethane.atoms[1].hydrogen_count, 0);
        assert_eq!(chloromethane.atoms[0].hydrogen_count, 3);
        assert_eq!(chloromethane.bond_count(), 1);
        assert!((chloromethane.atoms[1].position[0] - 1.78).abs() < 1e-9);
    }

    #[test]
    fn folds_flagged_bond_orders() {
        let text = "\
ethyne 2
1 C 1 0 27 0 0 0 0 0 0 0 0
2 C 1 0 17 0 0 0 0 0 1.2 0 0
";
        let mols = read(Cursor::new(text)).unwrap();
        assert_eq!(mols[0].bonds[0].order, BondOrder::Triple);
    }

    #[test]
    fn multi_digit_partner_indices() {
        let mut text = String::from("chain 12\n");
        for i in 1..=12 {
            let link = match i {
                1 => "121",
                12 => "11",
                _ => "0",
            };
            text.push_str(&format!("{i} C 0 0 {link} 0 0 0 0 0 0 0 0\n"));
        }
        let mols = read(Cursor::new(text)).unwrap();
        assert_eq!(mols[0].bonds, vec![Bond::new(0, 11, BondOrder::Single)]);
    }

    #[test]
    fn rejects_truncated_record() {
        let text = "broken 3\n1 C 0 0 0 0 0 0 0 0 0 0 0\n";
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Parse { format: Format::Str, .. }));
        assert!(err.to_string().contains("1 of 3"));
    }

    #[test]
    fn rejects_missing_fields() {
        let text = "short 1\n1 C 0 0 0 0\n";
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn rejects_unknown_bond_order_digit() {
        let text = "odd 2\n1 C 0 0 29 0 0 0 0 0 0 0 0\n2 C 0 0 19 0 0 0 0 0 0 0 0\n";
        assert!(read(Cursor::new(text)).is_err());
    }

    #[test]
    fn rejects_mismatched_atom_index() {
        let text = "swapped 1\n2 C 0 0 0 0 0 0 0 0 0 0 0\n";
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }
}
