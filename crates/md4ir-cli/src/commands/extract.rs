use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::utils::output::{output_path, write_output};
use crate::utils::parser;
use crate::utils::progress::CliProgressHandler;
use md4ir::core::io::columns::ColumnFile;
use md4ir::engine::aggregate::derived_name;
use md4ir::engine::error::EngineError;
use md4ir::engine::progress::ProgressReporter;
use md4ir::workflows::extract::{self, ExtractionTarget};
use tracing::info;

pub fn run(args: ExtractArgs) -> Result<()> {
    let target = parse_target(&args)?;
    let name = args.name.unwrap_or_else(|| derived_name(&args.file));
    let output = output_path(&name, &target.label());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the extraction workflow...");
    let series = extract::run(&args.file, &target, &reporter)?;

    write_output::<ColumnFile>(&series, &output)?;
    println!("✓ {} values written to: {}", series.len(), output.display());
    Ok(())
}

fn parse_target(args: &ExtractArgs) -> Result<ExtractionTarget> {
    let to_argument_error = |e: parser::ParseError| CliError::Argument(e.to_string());

    let atoms = args
        .atoms
        .as_deref()
        .map(parser::parse_index_list)
        .transpose()
        .map_err(to_argument_error)?
        .unwrap_or_default();
    let centroid = args
        .centroid
        .as_deref()
        .map(parser::parse_centroid)
        .transpose()
        .map_err(to_argument_error)?;

    ExtractionTarget::from_one_based(&atoms, centroid)
        .map_err(|e| CliError::Core(EngineError::from(e)))
}
