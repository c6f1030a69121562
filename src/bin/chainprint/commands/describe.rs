use anyhow::{Context, Result, bail};
use log::{info, warn};

use chainprint::io::{Format, read_path, write_set};
use chainprint::{Corpus, DescriptorSet, FailurePolicy, PipelineConfig};

use crate::cli::Cli;
use crate::config::build_pipeline_config;
use crate::display::{
    Context as DisplayContext, Progress, print_corpus_summary, print_descriptor_summary,
    print_skipped,
};
use crate::io::{prepare_output_dir, resolve_input_format};

const TOTAL_STEPS: u8 = 3;

pub fn run_describe(cli: Cli, ctx: DisplayContext) -> Result<()> {
    let config = build_pipeline_config(&cli.descriptors, &cli.outputs, &cli.run)?;
    let format = resolve_input_format(&cli.io.input, cli.io.format.map(Into::into))?;

    if let Some(threads) = cli.run.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the worker thread pool")?;
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading molecules");
    let molecules = read_path(&cli.io.input, Some(format))
        .with_context(|| format!("Failed to read molecules from {}", cli.io.input.display()))?;
    if molecules.is_empty() {
        bail!("Input contains no molecules: {}", cli.io.input.display());
    }
    let read = molecules.len();
    let corpus = Corpus::prepare(molecules, config.on_invalid)
        .context("Failed to build molecular graphs")?;
    progress.complete_step("Reading molecules", &read_details(format, read, &corpus, &config));

    if ctx.interactive {
        print_corpus_summary(read, &corpus);
        print_skipped(corpus.skipped());
    }
    if corpus.is_empty() {
        bail!("No valid molecules left after skipping invalid records");
    }

    progress.step("Computing descriptors");
    let sets = corpus.describe_all(&config.configurations);
    progress.complete_step("Computing descriptors", &describe_details(&sets));

    if ctx.interactive {
        print_descriptor_summary(&sets);
    }

    progress.step("Writing output");
    let written = write_outputs(&cli, &config, &sets)?;
    progress.complete_step(
        "Writing output",
        &[format!(
            "{} files → {}",
            written,
            cli.io.output_dir.display()
        )],
    );

    progress.finish();

    Ok(())
}

fn read_details(format: Format, read: usize, corpus: &Corpus, config: &PipelineConfig) -> Vec<String> {
    let mut details = vec![
        format!("Parse {format} file ({read} records)"),
        format!("Build {} molecular graphs", corpus.len()),
    ];
    if config.on_invalid == FailurePolicy::Skip && !corpus.skipped().is_empty() {
        details.push(format!("Skip {} invalid molecules", corpus.skipped().len()));
    }
    details
}

fn describe_details(sets: &[DescriptorSet]) -> Vec<String> {
    sets.iter()
        .map(|set| {
            format!(
                "{}: {} chain types",
                set.config.id(),
                set.corpus_vocabulary.len()
            )
        })
        .collect()
}

fn write_outputs(cli: &Cli, config: &PipelineConfig, sets: &[DescriptorSet]) -> Result<usize> {
    let dir = &cli.io.output_dir;
    prepare_output_dir(dir)?;

    let mut count = 0;
    for set in sets {
        let paths = write_set(dir, set, &config.outputs)
            .with_context(|| format!("Failed to write descriptors for {}", set.config))?;
        count += paths.len();
    }

    if count == 0 {
        warn!("no descriptor files were written");
    }
    info!("wrote {} files to {}", count, dir.display());
    Ok(count)
}
