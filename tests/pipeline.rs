use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use chainprint::io::{Format, MoleculeReader, read_path, write_set};
use chainprint::{
    Corpus, DescriptorConfig, DescriptorError, FailurePolicy, MarkerLevel, MolecularGraph,
    OutputSelection, PipelineConfig, Topology, WalkLength, chain_name, classify, describe,
    molecule_vocabulary, unify_reversed,
};

const CORPUS_SDF: &str = "\
A2
  chainprint

  2  1  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.4300    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
M  END
$$$$
cyclopropane
  chainprint

  3  3  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.5100    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    0.7550    1.3077    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
  2  3  1  0  0  0  0
  3  1  1  0  0  0  0
M  END
$$$$
methylcyclopropanone
  chainprint

  6  6  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.5100    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    0.7550    1.3077    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    2.5000    1.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
   -1.4000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
   -2.1000    1.2000    0.0000 N   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0  0  0  0
  2  3  1  0  0  0  0
  3  1  1  0  0  0  0
  2  4  2  0  0  0  0
  1  5  1  0  0  0  0
  5  6  3  0  0  0  0
M  END
$$$$
";

fn molecules() -> Vec<chainprint::Molecule> {
    MoleculeReader::new(Cursor::new(CORPUS_SDF), Format::Sdf)
        .read()
        .unwrap()
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chainprint-it-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn adjacency_is_symmetric_with_empty_diagonal() {
    for mol in molecules() {
        let g = MolecularGraph::from_molecule(&mol).unwrap();
        for i in 0..g.vertex_count() {
            assert!(!g.is_bonded(i, i));
            for j in 0..g.vertex_count() {
                assert_eq!(g.cell(i, j), g.cell(j, i));
            }
        }
    }
}

#[test]
fn chain_names_ignore_traversal_direction() {
    for mol in molecules() {
        let g = MolecularGraph::from_molecule(&mol).unwrap();
        for length in [WalkLength::Two, WalkLength::Three] {
            for v in 0..g.vertex_count() {
                for walk in g.walks_from(v, length) {
                    let reversed: Vec<usize> = walk.iter().rev().copied().collect();
                    for level in [MarkerLevel::Element, MarkerLevel::Bonds, MarkerLevel::Topology] {
                        assert_eq!(
                            chain_name(&mol, &g, &walk, level),
                            chain_name(&mol, &g, &reversed, level)
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn atom_classes_on_ring_with_substituents() {
    let mols = molecules();
    let g = MolecularGraph::from_molecule(&mols[2]).unwrap();
    assert_eq!(classify(&g, 0), Topology::Junction);
    assert_eq!(classify(&g, 1), Topology::Junction);
    assert_eq!(classify(&g, 2), Topology::Ring);
    assert_eq!(classify(&g, 3), Topology::Chain);
    assert_eq!(classify(&g, 4), Topology::Chain);
    assert_eq!(classify(&g, 5), Topology::Chain);

    let ring = MolecularGraph::from_molecule(&mols[1]).unwrap();
    assert!((0..3).all(|v| classify(&ring, v) == Topology::Ring));
}

#[test]
fn unification_is_idempotent_on_real_names() {
    let mols = molecules();
    let g = MolecularGraph::from_molecule(&mols[2]).unwrap();
    let names: Vec<_> = g
        .all_walks(WalkLength::Three)
        .iter()
        .map(|w| chain_name(&mols[2], &g, w, MarkerLevel::Topology))
        .collect();
    let once = unify_reversed(names);
    assert_eq!(unify_reversed(once.clone()), once);
}

#[test]
fn matrix_cells_equal_local_counts_and_rows_sum_to_walks() {
    let corpus = Corpus::prepare(molecules(), FailurePolicy::Abort).unwrap();
    for set in corpus.describe_all(&DescriptorConfig::standard_battery()) {
        assert_eq!(set.matrix.rows(), 3);
        assert_eq!(set.matrix.cols(), set.corpus_vocabulary.len());
        for (r, mol) in corpus.molecules().enumerate() {
            let g = corpus.graph(r).unwrap();
            let local = molecule_vocabulary(mol, g, &set.config);
            for (c, name) in set.matrix.columns().iter().enumerate() {
                assert_eq!(set.matrix.get(r, c), local.get(name.as_str()));
            }
            let row_sum: u64 = set.matrix.row(r).iter().map(|&v| u64::from(v)).sum();
            assert_eq!(row_sum, g.all_walks(set.config.walk_length).len() as u64);
        }
    }
}

#[test]
fn walk_length_bounds_are_enforced() {
    for bad in [0, 4] {
        assert!(matches!(
            DescriptorConfig::from_raw(bad, 1),
            Err(DescriptorError::InvalidWalkLength(k)) if k == bad
        ));
    }
    for good in 1..=3 {
        assert!(DescriptorConfig::from_raw(good, 1).is_ok());
    }
}

#[test]
fn two_atom_scenario() {
    let mols = molecules();
    let corpus = Corpus::prepare(vec![mols[0].clone()], FailurePolicy::Abort).unwrap();
    let set = corpus.describe(&DescriptorConfig::new(WalkLength::Two, MarkerLevel::Element));

    assert_eq!(set.corpus_vocabulary.len(), 1);
    assert_eq!(set.corpus_vocabulary.get("C_1**O_1**"), 1);
    assert_eq!((set.matrix.rows(), set.matrix.cols()), (1, 1));
    assert_eq!(set.matrix.get(0, 0), 1);
}

#[test]
fn triangle_scenario_marks_every_atom_as_ring() {
    let mols = molecules();
    let corpus = Corpus::prepare(vec![mols[1].clone()], FailurePolicy::Abort).unwrap();
    for length in [WalkLength::Two, WalkLength::Three] {
        let set = corpus.describe(&DescriptorConfig::new(length, MarkerLevel::Topology));
        for name in set.corpus_vocabulary.names() {
            assert!(name.blocks().all(|b| b.ends_with('r')), "{name}");
        }
    }
}

#[test]
fn invalid_molecule_is_skipped_or_aborts() {
    let mut mols = molecules();
    mols[1].bonds.push(chainprint::Bond::new(0, 0, chainprint::BondOrder::Single));

    assert!(Corpus::prepare(mols.clone(), FailurePolicy::Abort).is_err());

    let corpus = Corpus::prepare(mols, FailurePolicy::Skip).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.skipped()[0].name, "cyclopropane");
}

#[test]
fn end_to_end_files_from_disk() {
    let dir = scratch_dir("e2e");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("corpus.sdf");
    fs::write(&input, CORPUS_SDF).unwrap();

    let molecules = read_path(&input, None).unwrap();
    let config = PipelineConfig::from_toml_str(
        r#"
        [[configurations]]
        walk_length = 2
        marker_level = 1

        [outputs]
        molecule_lists = true
        "#,
    )
    .unwrap();

    let (corpus, sets) = describe(molecules, &config).unwrap();
    assert!(corpus.skipped().is_empty());
    assert_eq!(sets.len(), 1);

    let out = dir.join("descriptors");
    let written = write_set(&out, &sets[0], &config.outputs).unwrap();
    assert_eq!(written.len(), 3);

    let vocabulary = fs::read_to_string(out.join("allChainsk2m1.txt")).unwrap();
    let mut previous = String::new();
    for line in vocabulary.lines() {
        let (name, count) = line.split_once(": ").unwrap();
        assert_eq!(name.len() % 5, 0);
        assert!(count.parse::<u32>().unwrap() > 0);
        assert!(name > previous.as_str());
        previous = name.to_string();
    }

    let matrix = fs::read_to_string(out.join("matrk2m1.txt")).unwrap();
    let rows: Vec<&str> = matrix.lines().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3], "");
    for row in &rows[..3] {
        assert!(row.ends_with(' '));
        assert_eq!(row.split_whitespace().count(), sets[0].matrix.cols());
    }

    let lists = fs::read_to_string(out.join("molVertChainsk2m1.txt")).unwrap();
    assert!(lists.starts_with("A2:\nC_1**O_1**: 1\n"));
    assert!(lists.contains("cyclopropane:\n"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn default_outputs_skip_molecule_lists() {
    let dir = scratch_dir("defaults");
    let corpus = Corpus::prepare(molecules(), FailurePolicy::Abort).unwrap();
    let set = corpus.describe(&DescriptorConfig::new(WalkLength::Three, MarkerLevel::Bonds));

    let written = write_set(&dir, &set, &OutputSelection::default()).unwrap();
    assert_eq!(written, vec![dir.join("allChainsk3m2.txt"), dir.join("matrk3m2.txt")]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn linear_chain_and_isolated_atoms_classify_as_chain() {
    let mut mol = chainprint::Molecule::new("XYZ+W");
    for symbol in ["C", "N", "O", "Cl"] {
        mol.atoms.push(chainprint::Atom::new(symbol, [0.0; 3]));
    }
    mol.bonds.push(chainprint::Bond::new(0, 1, chainprint::BondOrder::Single));
    mol.bonds.push(chainprint::Bond::new(1, 2, chainprint::BondOrder::Single));

    let g = MolecularGraph::from_molecule(&mol).unwrap();
    assert!((0..4).all(|v| classify(&g, v) == Topology::Chain));
}
