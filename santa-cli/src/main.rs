mod cli;
mod config;
mod mail;
mod matching;

use clap::Parser;
use colored::*;

fn main() {
    env_logger::init();

    let args = cli::Cli::parse();
    if let Err(err) = cli::handler::run(args) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
