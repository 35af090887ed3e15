use crate::cli::SpectrumArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::output::{output_path, write_output};
use crate::utils::progress::CliProgressHandler;
use md4ir::core::io::spectrum::SpectrumFile;
use md4ir::engine::progress::ProgressReporter;
use md4ir::workflows;
use tracing::{error, info, warn};

pub fn run(args: SpectrumArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app = build_config(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Computing {} spectrum group(s)...", app.groups.len());
    let outcomes =
        workflows::spectrum::run(&app.groups, &app.core_config, app.policy, &reporter)?;

    let total = outcomes.len();
    let mut failed = 0;
    for outcome in outcomes {
        match outcome.result {
            Ok(spectrum) => {
                let path = output_path(&outcome.name, "spectrum");
                if let Err(e) = write_output::<SpectrumFile>(&spectrum, &path) {
                    error!("Could not write spectrum '{}': {}", outcome.name, e);
                    eprintln!("✗ {}: {}", outcome.name, e);
                    failed += 1;
                    continue;
                }
                match spectrum.peak() {
                    Some((wavenumber, _)) => println!(
                        "✓ Spectrum written to: {} (strongest band at {:.1} cm-1)",
                        path.display(),
                        wavenumber
                    ),
                    None => println!("✓ Spectrum written to: {}", path.display()),
                }
            }
            Err(e) => {
                warn!("Skipping output for group '{}'.", outcome.name);
                eprintln!("✗ {}: {}", outcome.name, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::GroupsFailed { failed, total });
    }
    Ok(())
}
