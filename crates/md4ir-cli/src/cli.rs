use clap::{Args, Parser, Subcommand};
use md4ir::engine::config::SpectralMethod;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Eno Paenurk",
    version,
    about = "md4ir - infrared spectra and geometric observables from molecular dynamics trajectories.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to compute spectrum groups in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a bond length, angle, dihedral or centroid track from an xyz trajectory.
    #[command(alias = "extract-geometry")]
    Extract(ExtractArgs),
    /// Compute the dipole moment of every frame from partial charges.
    #[command(alias = "compute-dipole")]
    Dipole(DipoleArgs),
    /// Compute vibrational spectra from time series files.
    #[command(visible_alias = "spec", alias = "compute-spectrum")]
    Spectrum(SpectrumArgs),
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Trajectory file in xyz format.
    #[arg(short, long, default_value = "traj.xyz", value_name = "PATH")]
    pub file: PathBuf,

    /// Comma-separated 1-based atom indices: 2 for a bond, 3 for an angle, 4 for a dihedral.
    #[arg(short, long, value_name = "I,J[,K[,L]]")]
    pub atoms: Option<String>,

    /// Two comma-separated 1-based atom indices whose midpoint joins the selection as its
    /// last site. Without --atoms the centroid coordinates themselves are written.
    #[arg(short, long, value_name = "A,B")]
    pub centroid: Option<String>,

    /// Basename for the output file. Defaults to the trajectory path without extension.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,
}

/// Arguments for the `dipole` subcommand.
#[derive(Args, Debug)]
pub struct DipoleArgs {
    /// Trajectory file in xyz format.
    #[arg(short, long, default_value = "traj.xyz", value_name = "PATH")]
    pub file: PathBuf,

    /// File with one partial charge per line, in trajectory atom order.
    #[arg(short, long, default_value = "charges", value_name = "PATH")]
    pub charges: PathBuf,

    /// Basename for the output file. Defaults to the trajectory path without extension.
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,
}

/// Arguments for the `spectrum` subcommand.
#[derive(Args, Debug)]
pub struct SpectrumArgs {
    /// Data file (dipoles, bond lengths, ...). Repeat -f for separate spectra; give a
    /// comma-separated list to average replicate runs into one spectrum.
    #[arg(short = 'f', long = "file", required = true, value_name = "PATH[,PATH...]")]
    pub files: Vec<String>,

    /// Basename for the output files. Defaults to each group's first file without extension;
    /// with several groups the outputs are numbered NAME_1, NAME_2, ...
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Spectrum Overrides ---
    /// Scaling factor for the wavenumbers of the computed spectrum.
    #[arg(short, long, value_name = "FLOAT")]
    pub scale: Option<f64>,

    /// Simulation timestep in fs.
    #[arg(long, value_name = "FS")]
    pub timestep: Option<f64>,

    /// Start of the analysed time window in ps.
    #[arg(long, value_name = "PS")]
    pub time_start: Option<f64>,

    /// End of the analysed time window in ps.
    #[arg(long, value_name = "PS")]
    pub time_end: Option<f64>,

    /// Lower wavenumber bound in cm-1 (exclusive).
    #[arg(long, value_name = "CM-1")]
    pub wn_start: Option<f64>,

    /// Upper wavenumber bound in cm-1 (exclusive).
    #[arg(long, value_name = "CM-1")]
    pub wn_end: Option<f64>,

    /// Spectrum calculation method.
    #[arg(long, value_name = "METHOD")]
    pub method: Option<SpectralMethod>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S spectrum.timestep=1.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Stop at the first failing group and write nothing.
    #[arg(long)]
    pub fail_fast: bool,
}
