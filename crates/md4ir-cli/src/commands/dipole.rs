use crate::cli::DipoleArgs;
use crate::error::Result;
use crate::utils::output::{output_path, write_output};
use crate::utils::progress::CliProgressHandler;
use md4ir::core::io::columns::ColumnFile;
use md4ir::engine::aggregate::derived_name;
use md4ir::engine::progress::ProgressReporter;
use md4ir::workflows::dipole;
use tracing::info;

pub fn run(args: DipoleArgs) -> Result<()> {
    let name = args.name.unwrap_or_else(|| derived_name(&args.file));
    let output = output_path(&name, "dipoles");

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the dipole workflow...");
    let dipoles = dipole::run(&args.file, &args.charges, &reporter)?;

    write_output::<ColumnFile>(&dipoles, &output)?;
    println!(
        "✓ {} dipole moments written to: {}",
        dipoles.len(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use md4ir::engine::error::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn dipoles_are_written_as_vector_rows() {
        let dir = tempdir().unwrap();
        let traj = dir.path().join("nacl.xyz");
        let charges = dir.path().join("charges");
        fs::write(
            &traj,
            "2\n\nNa 0.0 0.0 0.0\nCl 1.0 0.0 0.0\n2\n\nNa 0.0 0.0 0.0\nCl 0.0 2.0 0.0\n",
        )
        .unwrap();
        fs::write(&charges, "0.5\n-0.5\n").unwrap();

        run(DipoleArgs {
            file: traj,
            charges,
            name: None,
        })
        .unwrap();

        let written = fs::read_to_string(dir.path().join("nacl_dipoles.txt")).unwrap();
        assert_eq!(
            written,
            "-0.500000 0.000000 0.000000\n0.000000 -1.000000 0.000000\n"
        );
    }

    #[test]
    fn nothing_is_written_when_charges_do_not_match() {
        let dir = tempdir().unwrap();
        let traj = dir.path().join("nacl.xyz");
        let charges = dir.path().join("charges");
        fs::write(&traj, "2\n\nNa 0.0 0.0 0.0\nCl 1.0 0.0 0.0\n").unwrap();
        fs::write(&charges, "1.0\n").unwrap();

        let result = run(DipoleArgs {
            file: traj,
            charges,
            name: None,
        });
        assert!(matches!(
            result,
            Err(CliError::Core(ref e)) if e.kind() == ErrorKind::InconsistentTrajectory
        ));
        assert!(!dir.path().join("nacl_dipoles.txt").exists());
    }
}
