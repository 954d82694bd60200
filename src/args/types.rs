use clap::Parser;

use crate::model::RoundsConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Courses and round journal entries to serve, as json.
    #[arg(
        short = 'r',
        long,
        value_name = "ROUNDS_JSON",
        value_parser = crate::args::validation::check_readable_rounds_json
    )]
    pub rounds_json: RoundsConfig,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub rounds: RoundsConfig,
    pub host: String,
    pub port: u16,
}
