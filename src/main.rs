use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use wingconv::cli::{self, logger, Args, CliConfig, CliUtils};
use wingconv::conversion::{convert_batch, ConversionEngine};
use wingconv::ConversionError;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ConversionError>() {
                Some(conversion_err) => cli::handle_error(conversion_err),
                None => CliUtils::show_error(&format!("{:#}", err)),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;

    match config.single_file() {
        Some((input, output)) => {
            let engine = ConversionEngine::new(config.conversion_config.clone());
            let metadata = engine.convert(&input, &output)?;
            if config.want_stats() {
                eprintln!(
                    "{}",
                    CliUtils::format_statistics(&input.display().to_string(), &metadata)
                );
            }
            Ok(())
        }
        None => convert_datasets(&config),
    }
}

fn convert_datasets(config: &CliConfig) -> Result<()> {
    let datasets = config.datasets();
    let report = convert_batch(
        &datasets,
        &config.args.data_dir,
        &config.conversion_config,
        config.continue_on_error(),
        &mut std::io::stdout().lock(),
    )?;

    if config.want_stats() {
        for (dataset, metadata) in &report.converted {
            eprintln!("{}", CliUtils::format_statistics(dataset.name, metadata));
        }
    }

    if !report.is_success() {
        for (dataset, err) in &report.failed {
            CliUtils::show_error(&format!("{}: {}", dataset.name, err.user_message()));
        }
        return Err(anyhow::anyhow!(
            "{} of {} datasets failed",
            report.failed.len(),
            datasets.len()
        ));
    }

    Ok(())
}
