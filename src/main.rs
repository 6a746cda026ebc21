use clap::Parser;

use commandments::cli::Cli;
use commandments::commands::run_check;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_check(&cli));
}
