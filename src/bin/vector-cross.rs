use clap::Parser;
use std::process::ExitCode;
use vecalg::cli::{self, VectorArgs};
use vecalg::commands::Utility;

fn main() -> ExitCode {
    cli::init_logging();
    let args = VectorArgs::parse();
    cli::run(Utility::Cross, &args.components)
}
