use super::naming::ChainName;
use super::vocabulary::Vocabulary;

/// Union of all local vocabularies, with counts summed across molecules.
pub fn corpus_vocabulary(locals: &[Vocabulary]) -> Vocabulary {
    let mut corpus = Vocabulary::new();
    for local in locals {
        corpus.merge(local);
    }
    corpus
}

/// Dense molecule × chain-type count table.
///
/// Row `r` belongs to the `r`-th molecule of the corpus; column `c` to the
/// `c`-th name of the corpus vocabulary in its iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorMatrix {
    columns: Vec<ChainName>,
    rows: usize,
    cells: Vec<u32>,
}

impl DescriptorMatrix {
    /// Lays out `locals` against the columns of `corpus`.
    ///
    /// Names missing from a molecule's local vocabulary read as 0.
    pub fn assemble(locals: &[Vocabulary], corpus: &Vocabulary) -> Self {
        let columns: Vec<ChainName> = corpus.names().cloned().collect();
        let mut cells = Vec::with_capacity(locals.len() * columns.len());
        for local in locals {
            cells.extend(columns.iter().map(|name| local.get(name.as_str())));
        }
        Self {
            columns,
            rows: locals.len(),
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ChainName] {
        &self.columns
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.cols() + col]
    }

    pub fn row(&self, row: usize) -> &[u32] {
        let cols = self.cols();
        &self.cells[row * cols..(row + 1) * cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(names: &[&[&str]]) -> Vocabulary {
        Vocabulary::from_names(names.iter().map(|blocks| ChainName::from_blocks(*blocks)))
    }

    #[test]
    fn corpus_sums_counts() {
        let a = vocab(&[&["C_1**", "O_1**"], &["C_1**", "O_1**"]]);
        let b = vocab(&[&["C_1**", "O_1**"], &["C_1**", "N_1**"]]);
        let corpus = corpus_vocabulary(&[a, b]);
        assert_eq!(corpus.get("C_1**O_1**"), 3);
        assert_eq!(corpus.get("C_1**N_1**"), 1);
    }

    #[test]
    fn cells_match_local_counts() {
        let locals = vec![
            vocab(&[&["C_1**", "O_1**"], &["C_1**", "O_1**"]]),
            vocab(&[&["C_1**", "N_1**"]]),
            Vocabulary::new(),
        ];
        let corpus = corpus_vocabulary(&locals);
        let matrix = DescriptorMatrix::assemble(&locals, &corpus);

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 2);
        for (r, local) in locals.iter().enumerate() {
            for (c, name) in matrix.columns().iter().enumerate() {
                assert_eq!(matrix.get(r, c), local.get(name.as_str()));
            }
            let row_sum: u64 = matrix.row(r).iter().map(|&v| u64::from(v)).sum();
            assert_eq!(row_sum, local.total());
        }
        assert_eq!(matrix.row(2), &[0, 0]);
    }

    #[test]
    fn columns_follow_vocabulary_order() {
        let locals = vec![vocab(&[&["O_1**"], &["C_1**"], &["N_1**"]])];
        let corpus = corpus_vocabulary(&locals);
        let matrix = DescriptorMatrix::assemble(&locals, &corpus);
        let cols: Vec<_> = matrix.columns().iter().map(ChainName::as_str).collect();
        assert_eq!(cols, ["C_1**", "N_1**", "O_1**"]);
        assert_eq!(matrix.iter_rows().count(), 1);
    }

    #[test]
    fn empty_corpus_has_no_columns() {
        let locals = vec![Vocabulary::new(), Vocabulary::new()];
        let matrix = DescriptorMatrix::assemble(&locals, &corpus_vocabulary(&locals));
        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 0);
        assert!(matrix.row(1).is_empty());
    }
}
