//! Command-line surface

pub mod handler;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "santa-cli",
    version,
    about = "Draws secret santa pairs and notifies each giver by email"
)]
pub struct Cli {
    /// Path to the participant file
    #[arg(long, value_name = "PATH", default_value = "participants.toml")]
    pub participants: PathBuf,

    /// Path to the mail settings file
    #[arg(long, value_name = "PATH", default_value = "mail.toml")]
    pub mail: PathBuf,

    /// Send the notification emails over SMTP
    #[arg(long, conflicts_with = "dry_run")]
    pub send: bool,

    /// Compose and print the emails without transmitting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the computed giver -> receiver pairs
    #[arg(long)]
    pub pairs: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
