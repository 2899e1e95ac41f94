use anyhow::Result;

use owl_ranking::cli::{Cli, Command};
use owl_ranking::{handle_judge, handle_reset, handle_simulate, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Judge { threshold } => handle_judge(&cli.options, *threshold),
        Command::Standings { json } => handle_standings(&cli.options, *json),
        Command::Simulate { seed } => handle_simulate(&cli.options, *seed),
        Command::Reset => handle_reset(&cli.options),
    }
}
