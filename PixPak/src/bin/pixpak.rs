//! `PixPak` command-line binary

fn main() -> std::process::ExitCode {
    pixpak::cli::run_cli()
}
