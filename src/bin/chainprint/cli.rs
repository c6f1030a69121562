use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "chainprint",
    about = "Chain-fingerprint descriptors for small-molecule sets",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub descriptors: DescriptorOptions,

    #[command(flatten)]
    pub outputs: OutputOptions,

    #[command(flatten)]
    pub run: RunOptions,
}

/// Input and output locations.
#[derive(Args)]
pub struct IoOptions {
    /// Molecule file (.sdf, .mol or .str)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving the descriptor files (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = "descriptors")]
    pub output_dir: PathBuf,

    /// Input format (inferred from extension if not specified)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Which descriptor configurations to compute.
#[derive(Args)]
#[command(next_help_heading = "Descriptor Selection")]
pub struct DescriptorOptions {
    /// Walk length in atoms (1-3), repeatable
    ///
    /// Combined with every --marker-level; defaults to 2 and 3 when only
    /// marker levels are given.
    #[arg(short = 'k', long = "walk-length", value_name = "K", action = clap::ArgAction::Append)]
    pub walk_lengths: Vec<usize>,

    /// Marker detail level (1-3), repeatable
    ///
    /// Defaults to 1, 2 and 3 when only walk lengths are given.
    #[arg(short = 'm', long = "marker-level", value_name = "M", action = clap::ArgAction::Append)]
    pub marker_levels: Vec<u8>,

    /// Pipeline configuration file (TOML); command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Which files are written per configuration.
#[derive(Args)]
#[command(next_help_heading = "Output Selection")]
pub struct OutputOptions {
    /// Also write per-molecule chain lists (molVertChains*.txt)
    #[arg(long)]
    pub molecule_lists: bool,

    /// Do not write corpus vocabularies (allChains*.txt)
    #[arg(long)]
    pub no_vocabulary: bool,

    /// Do not write descriptor matrices (matr*.txt)
    #[arg(long)]
    pub no_matrix: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Execution")]
pub struct RunOptions {
    /// Skip molecules with invalid structure instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Worker threads (defaults to the number of logical CPUs)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// MDL SD file (V2000)
    #[value(alias = "mol")]
    Sdf,
    /// STR connection table
    Str,
}

impl From<InputFormat> for chainprint::io::Format {
    fn from(value: InputFormat) -> Self {
        match value {
            InputFormat::Sdf => chainprint::io::Format::Sdf,
            InputFormat::Str => chainprint::io::Format::Str,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
