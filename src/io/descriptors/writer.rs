use crate::descriptor::{DescriptorMatrix, DescriptorSet, OutputSelection, Vocabulary};
use crate::io::error::Error;
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one `name: count` line per vocabulary entry.
pub fn write_vocabulary<W: Write>(mut writer: W, vocabulary: &Vocabulary) -> Result<(), Error> {
    for (name, count) in vocabulary {
        writeln!(writer, "{name}: {count}")?;
    }
    Ok(())
}

/// Writes a `name:` line per molecule followed by its local vocabulary.
pub fn write_molecule_lists<W: Write>(
    mut writer: W,
    names: &[String],
    vocabularies: &[Vocabulary],
) -> Result<(), Error> {
    for (name, vocabulary) in names.iter().zip(vocabularies) {
        writeln!(writer, "{name}:")?;
        write_vocabulary(&mut writer, vocabulary)?;
    }
    Ok(())
}

/// Writes one line per row with every cell followed by a space, then a
/// closing blank line.
pub fn write_matrix<W: Write>(mut writer: W, matrix: &DescriptorMatrix) -> Result<(), Error> {
    for row in matrix.iter_rows() {
        for cell in row {
            write!(writer, "{cell} ")?;
        }
        writeln!(writer)?;
    }
    writeln!(writer)?;
    Ok(())
}

pub fn vocabulary_file_name(id: &str) -> String {
    format!("allChains{id}.txt")
}

pub fn molecule_lists_file_name(id: &str) -> String {
    format!("molVertChains{id}.txt")
}

pub fn matrix_file_name(id: &str) -> String {
    format!("matr{id}.txt")
}

/// Writes the selected outputs of `set` into `dir`, creating it if needed.
///
/// Returns the paths written, in vocabulary, lists, matrix order.
pub fn write_set(
    dir: &Path,
    set: &DescriptorSet,
    selection: &OutputSelection,
) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(dir)?;
    let id = set.config.id();
    let mut written = Vec::new();

    if selection.vocabulary {
        let path = dir.join(vocabulary_file_name(&id));
        write_file(&path, |w| write_vocabulary(w, &set.corpus_vocabulary))?;
        written.push(path);
    }
    if selection.molecule_lists {
        let path = dir.join(molecule_lists_file_name(&id));
        write_file(&path, |w| {
            write_molecule_lists(w, &set.molecule_names, &set.molecule_vocabularies)
        })?;
        written.push(path);
    }
    if selection.matrix {
        let path = dir.join(matrix_file_name(&id));
        write_file(&path, |w| write_matrix(w, &set.matrix))?;
        written.push(path);
    }

    Ok(written)
}

fn write_file<F>(path: &Path, body: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), Error>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    body(&mut writer)?;
    writer.flush()?;
    debug!("wrote {}", path.display());
    Ok(())
}
