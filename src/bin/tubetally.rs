use clap::Parser;
use tubetally_core::cli::{self, Cli};
use tubetally_core::exit::TallyExit;
use tubetally_core::{logging, reporting};

fn main() -> TallyExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let result = cli::execute(&cli, &cwd);
    match &result {
        Ok(outcome) => reporting::print_outcome(outcome, cli.verbose),
        Err(e) => reporting::print_error(e),
    }
    TallyExit::from(result)
}
