use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Suggestions derived from the typed library errors in the chain, falling
/// back to message sniffing when none are present.
fn hints_for(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();
    let mut typed = false;

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<chainprint::io::Error>() {
            typed = true;
            io_hints(e, &mut hints);
        } else if let Some(e) = cause.downcast_ref::<chainprint::DescriptorError>() {
            typed = true;
            descriptor_hints(e, &mut hints);
        }
    }

    if !typed {
        fallback_hints(err, &mut hints);
    }
    hints
}

fn io_hints(err: &chainprint::io::Error, hints: &mut Vec<String>) {
    use chainprint::io::{Error as IoError, Format};

    match err {
        IoError::Io { source } => std_io_hints(source, hints),

        IoError::Parse { format, line, .. } => {
            hints.push(format!("The {format} parser stopped near line {line}"));
            hints.push("Inspect the file around that line for malformed records".into());
            match format {
                Format::Sdf => {
                    hints.push("SDF: each record needs a name line, two header lines and a V2000 counts line".into());
                    hints.push("SDF: bond lines use 1-based atom indices and order codes 1-8".into());
                }
                Format::Str => {
                    hints.push("STR: atom lines need index, symbol, hydrogens, one reserved field, six links and x y z".into());
                    hints.push("STR: a link is the partner index followed by one bond-order digit".into());
                }
            }
        }

        IoError::UnsupportedFormat(_) => {
            hints.push("Supported inputs: .sdf / .mol (SD file) and .str".into());
            hints.push("Use --format sdf|str for files with other extensions".into());
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check read access on the input and write access on --output-dir".into());
        }
        ErrorKind::InvalidData => {
            hints.push("File is not valid UTF-8 text".into());
            hints.push("Verify the file is not binary, compressed or truncated".into());
        }
        _ => {
            hints.push("I/O operation failed".into());
            hints.push("Check file paths, permissions and disk space".into());
        }
    }
}

fn descriptor_hints(err: &chainprint::DescriptorError, hints: &mut Vec<String>) {
    use chainprint::DescriptorError as E;

    match err {
        E::InvalidWalkLength(_) => {
            hints.push("Walk lengths must be 1, 2 or 3 atoms (-k)".into());
        }
        E::InvalidMarkerLevel(_) => {
            hints.push("Marker levels are 1 (element), 2 (+bond signature) or 3 (+topology) (-m)".into());
        }
        E::ConfigParse(_) => {
            hints.push("The --config file has invalid TOML or unknown values".into());
            hints.push("Expected keys: configurations, on_invalid, outputs".into());
        }
        E::ConfigRead { .. } => {
            hints.push("Check that the --config path exists and is readable".into());
        }
        E::InvalidBond { molecule, .. } => {
            hints.push(format!("Molecule '{molecule}' has a bond that cannot form a graph edge"));
            hints.push("Use --skip-invalid to leave such molecules out of the matrix".into());
        }
        E::UnsupportedElement { symbol, .. } => {
            hints.push(format!("Element symbol '{symbol}' does not fit a two-character marker"));
            hints.push("Use --skip-invalid to leave such molecules out of the matrix".into());
        }
        E::DegreeOverflow { degree, .. } => {
            hints.push(format!("An atom has {degree} bonds; markers encode at most 9"));
            hints.push("Use --skip-invalid to leave such molecules out of the matrix".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let text = err
        .chain()
        .map(|c| c.to_string().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    if text.contains("no molecules") {
        hints.push("The input file contained no molecule records".into());
        hints.push("Check that --format matches the file contents".into());
    } else if text.contains("not a directory") {
        hints.push("Point --output-dir at a directory, not a file".into());
    } else if text.contains("outputs are disabled") {
        hints.push("Drop --no-vocabulary or --no-matrix, or add --molecule-lists".into());
    } else if text.contains("thread") {
        hints.push("The thread pool could not be configured; try a smaller -j".into());
    }
}
