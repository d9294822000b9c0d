use clap::{Parser, Subcommand};

use self::{maps::MapsArg, solve::SolveArg};

mod maps;
mod solve;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve a route across an obstacle field
    Solve(#[clap(flatten)] SolveArg),
    /// List the built-in maps
    Maps(#[clap(flatten)] MapsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Solve(arg) => solve::run(&arg),
        Mode::Maps(arg) => maps::run(&arg),
    }
}
