use anyhow::{Context, Result, bail};

use chainprint::{DescriptorConfig, FailurePolicy, PipelineConfig};

use crate::cli::{DescriptorOptions, OutputOptions, RunOptions};

const DEFAULT_WALK_LENGTHS: [usize; 2] = [2, 3];
const DEFAULT_MARKER_LEVELS: [u8; 3] = [1, 2, 3];

/// Merges the optional TOML file with command-line overrides.
pub fn build_pipeline_config(
    descriptors: &DescriptorOptions,
    outputs: &OutputOptions,
    run: &RunOptions,
) -> Result<PipelineConfig> {
    let mut config = match &descriptors.config {
        Some(path) => PipelineConfig::from_path(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    if !descriptors.walk_lengths.is_empty() || !descriptors.marker_levels.is_empty() {
        config.configurations =
            cross_product(&descriptors.walk_lengths, &descriptors.marker_levels)?;
    }

    if run.skip_invalid {
        config.on_invalid = FailurePolicy::Skip;
    }

    if outputs.molecule_lists {
        config.outputs.molecule_lists = true;
    }
    if outputs.no_vocabulary {
        config.outputs.vocabulary = false;
    }
    if outputs.no_matrix {
        config.outputs.matrix = false;
    }

    if config.configurations.is_empty() {
        bail!("No descriptor configurations selected");
    }
    if config.outputs.is_empty() {
        bail!("All outputs are disabled; nothing would be written");
    }

    Ok(config)
}

/// Every (K, M) pair, ordered by marker level first, without repeats.
fn cross_product(lengths: &[usize], levels: &[u8]) -> Result<Vec<DescriptorConfig>> {
    let lengths = if lengths.is_empty() {
        &DEFAULT_WALK_LENGTHS[..]
    } else {
        lengths
    };
    let levels = if levels.is_empty() {
        &DEFAULT_MARKER_LEVELS[..]
    } else {
        levels
    };

    let mut configs: Vec<DescriptorConfig> = Vec::with_capacity(lengths.len() * levels.len());
    for &m in levels {
        for &k in lengths {
            let config = DescriptorConfig::from_raw(k, m)
                .context("Invalid descriptor configuration on the command line")?;
            if !configs.contains(&config) {
                configs.push(config);
            }
        }
    }
    Ok(configs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn build(args: &[&str]) -> Result<PipelineConfig> {
        let mut argv = vec!["chainprint", "set.sdf"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        build_pipeline_config(&cli.descriptors, &cli.outputs, &cli.run)
    }

    fn ids(config: &PipelineConfig) -> Vec<String> {
        config.configurations.iter().map(DescriptorConfig::id).collect()
    }

    #[test]
    fn no_flags_runs_the_standard_battery() {
        let config = build(&[]).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn walk_length_only_expands_over_all_levels() {
        let config = build(&["-k", "3"]).unwrap();
        assert_eq!(ids(&config), ["k3m1", "k3m2", "k3m3"]);
    }

    #[test]
    fn cross_product_drops_repeats() {
        let config = build(&["-k", "2", "-k", "2", "-m", "1", "-m", "3"]).unwrap();
        assert_eq!(ids(&config), ["k2m1", "k2m3"]);
    }

    #[test]
    fn invalid_knob_is_a_descriptor_error() {
        let err = build(&["-k", "4"]).unwrap_err();
        let root = err.root_cause().to_string();
        assert!(root.contains("walk length 4"));
        assert!(err.chain().any(|e| e.downcast_ref::<chainprint::DescriptorError>().is_some()));
    }

    #[test]
    fn output_flags_override_defaults() {
        let config = build(&["--molecule-lists", "--no-matrix", "--skip-invalid"]).unwrap();
        assert!(config.outputs.molecule_lists);
        assert!(config.outputs.vocabulary);
        assert!(!config.outputs.matrix);
        assert_eq!(config.on_invalid, FailurePolicy::Skip);
    }

    #[test]
    fn disabling_everything_is_rejected() {
        assert!(build(&["--no-matrix", "--no-vocabulary"]).is_err());
    }
}
