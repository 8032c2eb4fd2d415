//! `PixPak` CLI - pack directories into PNG images and back

pub mod commands;
pub mod progress;

use std::process::ExitCode;

use clap::Parser;
use commands::Commands;

/// Exit status for bad arguments
pub const EXIT_USAGE: u8 = 1;

/// Exit status for a failed operation
pub const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "pixpak", version)]
#[command(about = "PixPak: pack files into a lossless PNG image", long_about = None)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the `PixPak` CLI
pub fn run_cli() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here, on stdout
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    // Setup logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PngCompression;
    use std::path::Path;

    #[test]
    fn test_parse_compress() {
        let cli = Cli::try_parse_from([
            "pixpak",
            "compress",
            "input",
            "out.png",
            "--compression",
            "best",
            "--data-url",
        ])
        .unwrap();

        match cli.command {
            Commands::Compress {
                source,
                destination,
                compression,
                data_url,
                quiet,
            } => {
                assert_eq!(source, Path::new("input"));
                assert_eq!(destination, Path::new("out.png"));
                assert_eq!(compression, PngCompression::Best);
                assert!(data_url);
                assert!(!quiet);
            }
            _ => panic!("expected compress"),
        }
    }

    #[test]
    fn test_compress_defaults() {
        let cli = Cli::try_parse_from(["pixpak", "compress", "in", "out.png"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Compress {
                compression: PngCompression::Default,
                data_url: false,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_extract_verbose() {
        let cli = Cli::try_parse_from(["pixpak", "extract", "-q", "out.png", "dest", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Extract { quiet: true, .. }));
    }

    #[test]
    fn test_default_paths() {
        let cli = Cli::try_parse_from(["pixpak", "compress"]).unwrap();
        match cli.command {
            Commands::Compress {
                source,
                destination,
                ..
            } => {
                assert_eq!(source, Path::new("./input"));
                assert_eq!(destination, Path::new("./out.png"));
            }
            _ => panic!("expected compress"),
        }

        let cli = Cli::try_parse_from(["pixpak", "compress", "only-source"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Compress { ref source, ref destination, .. }
                if source.as_path() == Path::new("only-source")
                    && destination.as_path() == Path::new("./out.png")
        ));

        let cli = Cli::try_parse_from(["pixpak", "extract"]).unwrap();
        match cli.command {
            Commands::Extract {
                source,
                destination,
                ..
            } => {
                assert_eq!(source, Path::new("./out.png"));
                assert_eq!(destination, Path::new("./output"));
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_usage_errors() {
        assert!(Cli::try_parse_from(["pixpak"]).is_err());
        assert!(Cli::try_parse_from(["pixpak", "compress", "a", "b", "extra"]).is_err());
        assert!(Cli::try_parse_from(["pixpak", "list"]).is_err());
        assert!(
            Cli::try_parse_from(["pixpak", "compress", "a", "b", "--compression", "ultra"])
                .is_err()
        );
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["pixpak", "--help"]).err().unwrap();
        assert!(!err.use_stderr());
    }
}
