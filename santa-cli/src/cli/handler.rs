//! Run orchestration: configuration -> matching -> printing -> notification

use anyhow::Result;
use colored::*;

use super::Cli;
use crate::config::MailConfig;
use crate::mail::{DryRunMailer, Mailer, SmtpMailer};
use crate::{config, mail, matching};

/// Execute one full run from parsed arguments
pub fn run(args: Cli) -> Result<()> {
    // Handle --no-color flag
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate arguments; clap already enforces this, but a conflicting pair
    // must be a configuration error before any work happens
    if args.send && args.dry_run {
        anyhow::bail!("Cannot specify both --send and --dry-run");
    }

    let participants = config::load_participants(&args.participants)?;
    log::info!("loaded {} participants", participants.len());

    // All configuration is vetted before any matching attempt; the mail
    // config is only needed (and only loaded) when a mail mode is active
    let mail_setup: Option<(MailConfig, Box<dyn Mailer>)> = if args.send || args.dry_run {
        let mail_config = config::load_mail(&args.mail)?;

        let mailer: Box<dyn Mailer> = if args.send {
            Box::new(SmtpMailer::from_config(&mail_config.smtp)?)
        } else {
            Box::new(DryRunMailer)
        };

        Some((mail_config, mailer))
    } else {
        None
    };

    let mut rng = rand::rng();
    let assignments = matching::assign(&participants, &mut rng)?;
    log::info!("matching succeeded for {} pairs", assignments.len());

    if args.pairs {
        for assignment in &assignments {
            println!(
                "{} {} {}",
                assignment.giver.name.bright_green(),
                "->".dimmed(),
                assignment.receiver.name.bright_green()
            );
        }
    }

    if let Some((mail_config, mailer)) = mail_setup {
        mail::notify(mailer.as_ref(), &mail_config, &assignments)?;
    }

    Ok(())
}
