pub mod types;
pub mod validation;

use clap::Parser;
pub use types::{Args, CleanArgs};

#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    CleanArgs {
        rounds: args.rounds_json,
        host: args.host,
        port: args.port,
    }
}
