use clap::Parser;
use finboard::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
