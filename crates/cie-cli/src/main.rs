//! cie - colorimetry from the command line
//!
//! Converts reflectance curves and sRGB code values to XYZ, CIELAB and RGB.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cie")]
#[command(author, version, about = "Spectral and sRGB colorimetry")]
#[command(long_about = "
Converts spectral reflectance and sRGB values through CIE XYZ to CIELAB,
sRGB and CIE RGB, using built-in or user-supplied reference tables.

Examples:
  cie spectral 0.77 0.80 0.83 ...        # 31 samples, 400-700 nm at 10 nm
  cie spectral < tile.txt                # samples from stdin
  cie lab 176.88 165.84 9.55             # sRGB (0-255) to Lab (D50)
  cie --json lab 255 0 0                 # machine-readable output
  cie reference > tables.yaml            # dump built-in tables
  cie --reference tables.yaml spectral < tile.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Reference data override (YAML, same layout as `cie reference`)
    #[arg(long, global = true, value_name = "FILE")]
    reference: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Spectral reflectance to XYZ, Lab, sRGB and CIE RGB
    #[command(visible_alias = "s")]
    Spectral(SpectralArgs),

    /// sRGB code values to CIELAB
    #[command(visible_alias = "l")]
    Lab(LabArgs),

    /// Print the active reference data
    Reference,
}

#[derive(Args)]
struct SpectralArgs {
    /// Reflectance samples; read from stdin when omitted
    #[arg(allow_negative_numbers = true, value_parser = parse_finite)]
    values: Vec<f64>,
}

#[derive(Args)]
struct LabArgs {
    /// Red (0-255)
    #[arg(allow_negative_numbers = true, value_parser = parse_finite)]
    r: f64,
    /// Green (0-255)
    #[arg(allow_negative_numbers = true, value_parser = parse_finite)]
    g: f64,
    /// Blue (0-255)
    #[arg(allow_negative_numbers = true, value_parser = parse_finite)]
    b: f64,
}

/// `f64` argument that rejects `NaN` and infinities.
fn parse_finite(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(format!("'{}' is not a finite number", s)),
        Err(e) => Err(e.to_string()),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data = commands::load_reference(cli.reference.as_deref())?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Spectral(args) => {
            commands::spectral::run(args, &data, cli.json, io::stdin().lock(), &mut out)
        }
        Commands::Lab(args) => commands::lab::run(args, &data, cli.json, &mut out),
        Commands::Reference => commands::reference::run(&data, cli.json, &mut out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lab_negative() {
        let cli = Cli::try_parse_from(["cie", "lab", "-5", "10", "300"]).unwrap();
        match cli.command {
            Commands::Lab(args) => assert_eq!((args.r, args.g, args.b), (-5.0, 10.0, 300.0)),
            _ => panic!("expected lab"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cie", "spectral", "0.5", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Spectral(args) => assert_eq!(args.values, vec![0.5]),
            _ => panic!("expected spectral"),
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["cie", "lab", "1", "x", "3"]).is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Cli::try_parse_from(["cie", "lab", "1", "NaN", "3"]).is_err());
        assert!(Cli::try_parse_from(["cie", "spectral", "0.5", "inf"]).is_err());
        assert_eq!(parse_finite("-0.25"), Ok(-0.25));
    }
}
