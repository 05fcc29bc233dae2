//! Prints the Euclidean norm of a vector, prompting in a loop when run without arguments.

use clap::Parser;
use std::process::ExitCode;
use vecalg::cli::{self, VectorArgs};
use vecalg::commands::Utility;

fn main() -> ExitCode {
    cli::init_logging();
    let args = VectorArgs::parse();
    cli::run(Utility::Magnitude, &args.components)
}
