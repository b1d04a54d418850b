//! Configuration loading and validation
//!
//! Two TOML files feed a run: the participant list and the mail settings.
//! Everything is validated here, before any matching attempt, so that bad
//! input is always reported as a configuration error rather than surfacing
//! later as a spurious matching or delivery failure.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::matching::Participant;

/// Validation failures for the participant file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("participant list is empty")]
    NoParticipants,
    #[error("duplicate participant name: {name}")]
    DuplicateName { name: String },
    #[error("participant '{name}' is missing a value for '{field}'")]
    BlankField { name: String, field: &'static str },
    #[error("participant '{name}' excludes unknown name: {exclude}")]
    UnknownExclusion { name: String, exclude: String },
}

#[derive(Debug, Deserialize)]
struct ParticipantsConfig {
    #[serde(default, rename = "participant")]
    participants: Vec<ParticipantEntry>,
}

#[derive(Debug, Deserialize)]
struct ParticipantEntry {
    name: String,
    email: String,
    address: String,
    #[serde(default)]
    excludes: Vec<String>,
}

/// Mail settings: message headers, body template, and SMTP transport config
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// From header for every message
    pub from: String,
    /// Subject header for every message
    pub subject: String,
    /// Body template containing the `{giver}`, `{receiver}` and `{address}`
    /// placeholders
    pub body: String,
    pub smtp: SmtpConfig,
}

/// Transport settings, passed opaquely to the mail transport
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub tls: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Load and validate the participant file
pub fn load_participants(path: &Path) -> Result<Vec<Participant>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read participant file: {}", path.display()))?;

    parse_participants(&content)
        .with_context(|| format!("Invalid participant file: {}", path.display()))
}

/// Load and validate the mail settings file
pub fn load_mail(path: &Path) -> Result<MailConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read mail config file: {}", path.display()))?;

    parse_mail(&content).with_context(|| format!("Invalid mail config file: {}", path.display()))
}

fn parse_participants(content: &str) -> Result<Vec<Participant>> {
    let config: ParticipantsConfig =
        toml::from_str(content).context("Failed to parse participant TOML")?;

    if config.participants.is_empty() {
        return Err(ConfigError::NoParticipants.into());
    }

    let mut names = HashSet::new();
    for entry in &config.participants {
        check_not_blank(entry, &entry.name, "name")?;
        check_not_blank(entry, &entry.email, "email")?;
        check_not_blank(entry, &entry.address, "address")?;

        if !names.insert(entry.name.as_str()) {
            return Err(ConfigError::DuplicateName {
                name: entry.name.clone(),
            }
            .into());
        }
    }

    // Exclusions may only reference names present in the collection
    for entry in &config.participants {
        for exclude in &entry.excludes {
            if !names.contains(exclude.as_str()) {
                return Err(ConfigError::UnknownExclusion {
                    name: entry.name.clone(),
                    exclude: exclude.clone(),
                }
                .into());
            }
        }
    }

    Ok(config
        .participants
        .into_iter()
        .map(|entry| {
            Participant::new(entry.name, entry.email, entry.address).with_excludes(entry.excludes)
        })
        .collect())
}

fn parse_mail(content: &str) -> Result<MailConfig> {
    let config: MailConfig = toml::from_str(content).context("Failed to parse mail TOML")?;

    if config.body.trim().is_empty() {
        anyhow::bail!("mail body template is empty");
    }

    Ok(config)
}

fn check_not_blank(entry: &ParticipantEntry, value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::BlankField {
            name: if entry.name.trim().is_empty() {
                "<unnamed>".to_string()
            } else {
                entry.name.clone()
            },
            field,
        }
        .into());
    }
    Ok(())
}
