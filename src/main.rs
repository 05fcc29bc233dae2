//! Umbrella command for the vector utilities.
//!
//! `vecalg <utility> [COMPONENT]...` behaves exactly like the matching
//! standalone `vector-<utility>` binary, including the interactive prompt
//! when no components are given.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use vecalg::cli::{self, VectorArgs};
use vecalg::commands::Utility;

#[derive(Parser)]
#[command(name = "vecalg")]
#[command(version)]
#[command(about = "Elementary vector algebra from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Euclidean norm of one vector
    Magnitude(VectorArgs),
    /// Sum of elementwise products across vectors separated by `;`
    Product(VectorArgs),
    /// Cross product of two 3D vectors given as six components
    Cross(VectorArgs),
    /// Angle in degrees between two vectors separated by `;`
    Angle(VectorArgs),
    /// Projection of the first half of the components onto the second half
    Projection(VectorArgs),
    /// Solve for the `x` component that makes the two halves orthogonal
    Orthogonal(VectorArgs),
}

impl Commands {
    fn split(self) -> (Utility, VectorArgs) {
        match self {
            Commands::Magnitude(args) => (Utility::Magnitude, args),
            Commands::Product(args) => (Utility::Product, args),
            Commands::Cross(args) => (Utility::Cross, args),
            Commands::Angle(args) => (Utility::Angle, args),
            Commands::Projection(args) => (Utility::Projection, args),
            Commands::Orthogonal(args) => (Utility::Orthogonal, args),
        }
    }
}

fn main() -> ExitCode {
    cli::init_logging();
    let (utility, args) = Cli::parse().command.split();
    log::debug!("running {} with {:?}", utility.name(), args.components);
    cli::run(utility, &args.components)
}
