//! Extract command implementation.

use crate::cli::Cli;
use crate::commands::usage;
use crate::error::add_pipeline_context;
use crate::output::OutputFormatter;
use crate::progress::StageReporter;
use anyhow::Result;
use savextract_core::InvocationRequest;
use savextract_core::OffzipExtractor;
use savextract_core::Pipeline;
use savextract_core::PipelineConfig;
use savextract_core::PipelinePolicy;
use std::process::ExitCode;

fn config_from_args(cli: &Cli) -> PipelineConfig {
    PipelineConfig {
        policy: PipelinePolicy {
            transform_names: !cli.keep_name,
            copy_companion_image: !cli.no_image,
            allow_docs_override: true,
        },
        ..Default::default()
    }
}

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    let Some(source) = &cli.source else {
        return Ok(usage::execute(formatter));
    };

    if !cli.extra.is_empty() {
        let ignored: Vec<String> = cli.extra.iter().map(|p| p.display().to_string()).collect();
        formatter.format_warning(&format!("ignoring extra arguments: {}", ignored.join(" ")));
    }
    if cli.docs && cli.destination.is_some() {
        formatter.format_warning("-docs given, ignoring the destination argument");
    }

    let extractor = cli
        .tool
        .as_ref()
        .map_or_else(OffzipExtractor::default, OffzipExtractor::new);
    let pipeline = Pipeline::new(extractor, config_from_args(cli));
    let request = InvocationRequest::new(source, cli.destination.clone()).with_docs_dir(cli.docs);

    let show_spinner = !cli.quiet && !cli.json && StageReporter::should_show();
    let report = {
        let mut reporter = StageReporter::new(formatter, show_spinner);
        add_pipeline_context(pipeline.run(&request, &mut reporter), source)?
    };

    formatter.format_pipeline_result(&report)?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::normalize_args;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["savextract"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(normalize_args(argv)).unwrap()
    }

    #[test]
    fn test_default_policy_from_args() {
        let config = config_from_args(&parse(&["-ns", "a.sav"]));
        assert_eq!(config.policy, PipelinePolicy::default());
    }

    #[test]
    fn test_policy_flags_from_args() {
        let config = config_from_args(&parse(&["-ns", "a.sav", "--keep-name", "--no-image"]));
        assert!(!config.policy.transform_names);
        assert!(!config.policy.copy_companion_image);
        assert!(config.policy.allow_docs_override);
    }
}
