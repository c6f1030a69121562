mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{print_corpus_summary, print_descriptor_summary, print_skipped};

/// Whether decorated output (banner, spinners, tables) goes to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    /// Decorated output only when stderr is a terminal and `--quiet` is off.
    pub fn for_stderr(quiet: bool) -> Self {
        Self {
            interactive: !quiet && crate::io::stderr_is_tty(),
        }
    }
}
