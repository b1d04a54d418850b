//! Mail transport collaborators: real SMTP delivery and a dry-run stand-in

use anyhow::{Context, Result};
use colored::*;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::message::Email;
use crate::config::SmtpConfig;

/// The delivery seam: accepts a composed message and either delivers it or
/// fails with a delivery error
pub trait Mailer {
    fn deliver(&self, email: &Email) -> Result<()>;
}

/// Delivers over SMTP via lettre. The transport is built once from the
/// config and reused for the whole send loop.
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    /// Build the transport from config. No connection is opened here; lettre
    /// connects lazily on the first send.
    pub fn from_config(config: &SmtpConfig) -> Result<Self> {
        let mut builder = if config.tls {
            SmtpTransport::relay(&config.host)
                .with_context(|| format!("Failed to set up TLS relay to {}", config.host))?
        } else {
            // Plaintext, for local relays and test servers
            SmtpTransport::builder_dangerous(&config.host)
        };
        builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(SmtpMailer {
            transport: builder.build(),
        })
    }
}

impl Mailer for SmtpMailer {
    fn deliver(&self, email: &Email) -> Result<()> {
        let message = Message::builder()
            .from(parse_mailbox(&email.from)?)
            .to(parse_mailbox(&email.to)?)
            .subject(&email.subject)
            .body(email.body.clone())
            .context("Failed to build SMTP message")?;

        self.transport
            .send(&message)
            .with_context(|| format!("Failed to send message to {}", email.to))?;

        log::info!("sent message to {}", email.to);
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse()
        .with_context(|| format!("Invalid email address: {address}"))
}

/// Prints composed messages instead of transmitting them
pub struct DryRunMailer;

impl DryRunMailer {
    /// The full message block as printed, minus the colored frame
    fn format(email: &Email) -> String {
        format!(
            "From: {}\nTo: {}\nSubject: {}\n\n{}",
            email.from, email.to, email.subject, email.body
        )
    }
}

impl Mailer for DryRunMailer {
    fn deliver(&self, email: &Email) -> Result<()> {
        println!("{}", "--- message (dry-run) ---".dimmed());
        println!("{}", Self::format(email));
        println!("{}", "-------------------------".dimmed());
        Ok(())
    }
}
