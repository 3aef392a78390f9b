// Entrypoint for the CLI application.
// - Keeps `main` small: parse the command line and hand it to the UI layer.
// - Returning `anyhow::Result` prints the error and exits with a non-zero
//   status; success exits with zero.

use clap::Parser;
use wire_cli::{cli::Cli, config::AppInfo, ui};

fn main() -> anyhow::Result<()> {
    // Verbosity via RUST_LOG, e.g. `RUST_LOG=wire_cli=debug`.
    pretty_env_logger::init();

    let app = AppInfo::from_cargo();
    let cli = Cli::parse();

    ui::run(&app, &cli)
}
