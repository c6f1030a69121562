use std::io::{self, Write};

use chainprint::{Corpus, DescriptorSet, SkippedMolecule};

use crate::util::text::ellipsize;

const INDENT: &str = "      ";
const MAX_SKIPPED_ROWS: usize = 10;

pub fn print_corpus_summary(read: usize, corpus: &Corpus) {
    let atoms: usize = corpus.molecules().map(|m| m.atom_count()).sum();
    let bonds: usize = corpus.molecules().map(|m| m.bond_count()).sum();

    let rows = [
        ("Molecules Read", read.to_string()),
        ("Molecules Used", corpus.len().to_string()),
        ("Skipped", corpus.skipped().len().to_string()),
        ("Total Atoms", atoms.to_string()),
        ("Total Bonds", bonds.to_string()),
    ];

    let mut out = io::stderr().lock();
    print_kv_table(&mut out, "Corpus Summary", &rows);
}

/// One row per configuration: walks named, distinct chain types, matrix shape.
pub fn print_descriptor_summary(sets: &[DescriptorSet]) {
    let widths = [6usize, 10, 10, 13];
    let mut out = io::stderr().lock();

    let _ = writeln!(out, "{INDENT}┌─ Descriptor Summary ─┐");
    rule(&mut out, '┌', '┬', '┐', &widths);
    let _ = writeln!(
        out,
        "{INDENT}│ {:<w0$} │ {:>w1$} │ {:>w2$} │ {:>w3$} │",
        "Config",
        "Walks",
        "Types",
        "Matrix",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3]
    );
    rule(&mut out, '├', '┼', '┤', &widths);

    for set in sets {
        let shape = format!("{} × {}", set.matrix.rows(), set.matrix.cols());
        let _ = writeln!(
            out,
            "{INDENT}│ {:<w0$} │ {:>w1$} │ {:>w2$} │ {:>w3$} │",
            set.config.id(),
            set.corpus_vocabulary.total(),
            set.corpus_vocabulary.len(),
            ellipsize(&shape, widths[3]),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3]
        );
    }

    rule(&mut out, '└', '┴', '┘', &widths);
}

pub fn print_skipped(skipped: &[SkippedMolecule]) {
    if skipped.is_empty() {
        return;
    }
    let widths = [6usize, 16, 28];
    let mut out = io::stderr().lock();

    let _ = writeln!(out, "{INDENT}┌─ Skipped Molecules ─┐");
    rule(&mut out, '┌', '┬', '┐', &widths);
    let _ = writeln!(
        out,
        "{INDENT}│ {:>w0$} │ {:<w1$} │ {:<w2$} │",
        "#",
        "Name",
        "Reason",
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2]
    );
    rule(&mut out, '├', '┼', '┤', &widths);

    for entry in skipped.iter().take(MAX_SKIPPED_ROWS) {
        let _ = writeln!(
            out,
            "{INDENT}│ {:>w0$} │ {:<w1$} │ {:<w2$} │",
            entry.index + 1,
            ellipsize(&entry.name, widths[1]),
            ellipsize(&entry.error.to_string(), widths[2]),
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        );
    }
    if skipped.len() > MAX_SKIPPED_ROWS {
        let more = format!("({} more)", skipped.len() - MAX_SKIPPED_ROWS);
        let _ = writeln!(
            out,
            "{INDENT}│ {:>w0$} │ {:<w1$} │ {:<w2$} │",
            "...",
            "...",
            more,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2]
        );
    }

    rule(&mut out, '└', '┴', '┘', &widths);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let widths = [16usize, 20];

    let _ = writeln!(out, "{INDENT}┌─ {title} ─┐");
    rule(out, '┌', '┬', '┐', &widths);
    for (key, value) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<kw$} │ {:>vw$} │",
            ellipsize(key, widths[0]),
            ellipsize(value, widths[1]),
            kw = widths[0],
            vw = widths[1]
        );
    }
    rule(out, '└', '┴', '┘', &widths);
}

fn rule(out: &mut impl Write, left: char, join: char, right: char, widths: &[usize]) {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    let _ = writeln!(
        out,
        "{INDENT}{left}{}{right}",
        segments.join(&join.to_string())
    );
}
