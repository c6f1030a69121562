use crate::io::{Format, error::Error};
use crate::model::{
    atom::Atom,
    molecule::{Bond, Molecule},
    types::BondOrder,
};
use std::io::BufRead;

const RECORD_END: &str = "$$$$";

/// Reads every record of a V2000 SD file.
///
/// A blank name line at the start of a record ends the input.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<Molecule>, Error> {
    let lines = collect_lines(reader)?;
    let mut cursor = 0;
    let mut molecules = Vec::new();

    while cursor < lines.len() {
        let (name_no, name) = &lines[cursor];
        if name.trim().is_empty() {
            break;
        }
        let molecule = read_record(&lines, &mut cursor, *name_no)?;
        molecules.push(molecule);
        skip_to_record_end(&lines, &mut cursor);
    }

    Ok(molecules)
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|v| (i + 1, v)).map_err(Error::from))
        .collect()
}

fn read_record(
    lines: &[(usize, String)],
    cursor: &mut usize,
    start_no: usize,
) -> Result<Molecule, Error> {
    let header = lines.get(*cursor..*cursor + 4).ok_or_else(|| {
        Error::parse(
            Format::Sdf,
            start_no,
            "record must contain a header block and a counts line",
        )
    })?;
    let mut molecule = Molecule::new(header[0].1.trim_end());

    let (counts_no, counts_line) = &header[3];
    if counts_line.contains("V3000") {
        return Err(Error::parse(Format::Sdf, *counts_no, "V3000 is not supported"));
    }
    let (atom_count, bond_count) = parse_counts(counts_line, *counts_no)?;
    *cursor += 4;

    let block_end = *cursor + atom_count + bond_count;
    if lines.len() < block_end {
        return Err(Error::parse(
            Format::Sdf,
            lines.last().map(|(ln, _)| *ln).unwrap_or(*counts_no),
            format!(
                "record '{}' ended before atoms/bonds were fully specified",
                molecule.name
            ),
        ));
    }

    let atom_lines = &lines[*cursor..*cursor + atom_count];
    molecule.atoms = atom_lines
        .iter()
        .map(|(ln, raw)| parse_atom(raw, *ln))
        .collect::<Result<_, _>>()?;
    *cursor += atom_count;

    let bond_lines = &lines[*cursor..*cursor + bond_count];
    molecule.bonds = bond_lines
        .iter()
        .map(|(ln, raw)| parse_bond(raw, *ln, atom_count))
        .collect::<Result<_, _>>()?;
    *cursor += bond_count;

    Ok(molecule)
}

fn skip_to_record_end(lines: &[(usize, String)], cursor: &mut usize) {
    while *cursor < lines.len() {
        let is_end = lines[*cursor].1.trim_end() == RECORD_END;
        *cursor += 1;
        if is_end {
            break;
        }
    }
}

fn parse_counts(line: &str, line_no: usize) -> Result<(usize, usize), Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(Error::parse(
            Format::Sdf,
            line_no,
            "counts line must contain atom and bond counts",
        ));
    }
    let atoms = tokens[0]
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, line_no, "invalid atom count"))?;
    let bonds = tokens[1]
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, line_no, "invalid bond count"))?;
    Ok((atoms, bonds))
}

fn parse_atom(raw: &str, ln: usize) -> Result<Atom, Error> {
    let tokens: Vec<_> = raw.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::parse(
            Format::Sdf,
            ln,
            "atom line must contain coordinates and an element symbol",
        ));
    }
    let mut position = [0.0; 3];
    for (axis, (slot, token)) in position.iter_mut().zip(&tokens[..3]).enumerate() {
        *slot = token.parse::<f64>().map_err(|_| {
            Error::parse(
                Format::Sdf,
                ln,
                format!("invalid {} coordinate in atom line", ['x', 'y', 'z'][axis]),
            )
        })?;
    }
    Ok(Atom::new(tokens[3], position))
}

fn parse_bond(raw: &str, ln: usize, atom_count: usize) -> Result<Bond, Error> {
    let tokens: Vec<_> = raw.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(Error::parse(Format::Sdf, ln, "invalid bond line"));
    }

    let a1 = tokens[0]
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, ln, "invalid first atom index"))?;
    let a2 = tokens[1]
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Sdf, ln, "invalid second atom index"))?;
    let order = tokens[2]
        .parse::<BondOrder>()
        .map_err(|e| Error::parse(Format::Sdf, ln, e.to_string()))?;

    if a1 == 0 || a2 == 0 || a1 > atom_count || a2 > atom_count {
        return Err(Error::parse(
            Format::Sdf,
            ln,
            "bond references atom outside declared range",
        ));
    }

    Ok(Bond::new(a1 - 1, a2 - 1, order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_RECORDS: &str = "\
methanol
  chainprint

  2  1  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.4000    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
M  END
> <ID>
42

$$$$
acetylene chloride
  chainprint

  3  2  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.2000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    2.9000    0.0000    0.0000 Cl  0  0  0  0  0  0  0  0  0  0  0  0
  1  2  7  0  0  0  0
  2  3  1  0  0  0  0
M  END
$$$$
";

    #[test]
    fn reads_multiple_records() {
        let mols = read(Cursor::new(TWO_RECORDS)).unwrap();
        assert_eq!(mols.len(), 2);

        assert_eq!(mols[0].name, "methanol");
        assert_eq!(mols[0].atom_count(), 2);
        assert_eq!(mols[0].bonds, vec![Bond::new(0, 1, BondOrder::Single)]);
        assert!((mols[0].atoms[1].position[0] - 1.4).abs() < 1e-9);

        assert_eq!(mols[1].name, "acetylene chloride");
        assert_eq!(mols[1].atoms[2].symbol, "Cl");
        assert_eq!(mols[1].atoms[2].hydrogen_count, 0);
        // Code 7 folds to triple.
        assert_eq!(mols[1].bonds[0].order, BondOrder::Triple);
    }

    #[test]
    fn blank_name_line_ends_input() {
        let text = format!("{TWO_RECORDS}\nignored trailing text\n");
        assert_eq!(read(Cursor::new(text)).unwrap().len(), 2);
    }

    #[test]
    fn empty_input_yields_no_molecules() {
        assert!(read(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn last_record_without_terminator_is_accepted() {
        let text = "\
water
x

  1  0  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 O   0  0  0
M  END
";
        let mols = read(Cursor::new(text)).unwrap();
        assert_eq!(mols.len(), 1);
        assert_eq!(mols[0].atoms[0].symbol, "O");
    }

    #[test]
    fn rejects_out_of_range_bond() {
        let text = "\
bad
x

  2  1
    0.0 0.0 0.0 C
    1.0 0.0 0.0 C
  1  3  1
$$$$
";
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 7, .. }));
    }

    #[test]
    fn rejects_unknown_bond_order_code() {
        let text = "\
bad
x

  2  1
    0.0 0.0 0.0 C
    1.0 0.0 0.0 C
  1  2  9
$$$$
";
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(err.to_string().contains("bond order"));
    }

    #[test]
    fn rejects_truncated_record() {
        let text = "\
short
x

  3  0
    0.0 0.0 0.0 C
";
        assert!(matches!(
            read(Cursor::new(text)),
            Err(Error::Parse { format: Format::Sdf, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let text = "\
bad
x

  1  0
    abc 0.0 0.0 C
";
        let err = read(Cursor::new(text)).unwrap_err();
        assert!(err.to_string().contains("x coordinate"));
    }
}
