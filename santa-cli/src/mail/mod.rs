// Notifier: renders one message per assignment and hands it to a Mailer
//
// Sending is sequential and fail-fast: the first delivery error aborts the
// remaining loop. Messages already handed off stay sent; nothing is retried.

pub mod message;
pub mod transport;

pub use message::{Email, compose, render_body};
pub use transport::{DryRunMailer, Mailer, SmtpMailer};

use anyhow::{Context, Result};

use crate::config::MailConfig;
use crate::matching::Assignment;

/// Compose and deliver one message per assignment
pub fn notify(mailer: &dyn Mailer, config: &MailConfig, assignments: &[Assignment]) -> Result<()> {
    for assignment in assignments {
        let email = compose(config, assignment);
        mailer.deliver(&email).with_context(|| {
            format!("Failed to notify '{}', aborting", assignment.giver.name)
        })?;
    }

    log::info!("delivered {} messages", assignments.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmtpConfig;
    use crate::matching::Participant;
    use std::cell::RefCell;

    struct RecordingMailer {
        sent: RefCell<Vec<Email>>,
        fail_after: Option<usize>,
    }

    impl RecordingMailer {
        fn new() -> Self {
            RecordingMailer {
                sent: RefCell::new(Vec::new()),
                fail_after: None,
            }
        }

        fn failing_after(count: usize) -> Self {
            RecordingMailer {
                sent: RefCell::new(Vec::new()),
                fail_after: Some(count),
            }
        }
    }

    impl Mailer for RecordingMailer {
        fn deliver(&self, email: &Email) -> Result<()> {
            if Some(self.sent.borrow().len()) == self.fail_after {
                anyhow::bail!("relay rejected the message");
            }
            self.sent.borrow_mut().push(email.clone());
            Ok(())
        }
    }

    fn make_config() -> MailConfig {
        MailConfig {
            from: "santa@example.com".to_string(),
            subject: "Your draw".to_string(),
            body: "Hi {giver}, you give to {receiver} at {address}.".to_string(),
            smtp: SmtpConfig {
                host: "localhost".to_string(),
                port: 25,
                tls: false,
                username: None,
                password: None,
            },
        }
    }

    fn make_assignments() -> Vec<Assignment> {
        let alice = Participant::new("alice", "alice@example.com", "1 Main St");
        let bob = Participant::new("bob", "bob@example.com", "2 Oak Ave");
        vec![
            Assignment {
                giver: alice.clone(),
                receiver: bob.clone(),
            },
            Assignment {
                giver: bob,
                receiver: alice,
            },
        ]
    }

    #[test]
    fn test_notify_sends_one_message_per_assignment() {
        let mailer = RecordingMailer::new();
        notify(&mailer, &make_config(), &make_assignments()).unwrap();

        let sent = mailer.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "alice@example.com");
        assert_eq!(sent[0].body, "Hi alice, you give to bob at 2 Oak Ave.");
        assert_eq!(sent[1].to, "bob@example.com");
        assert_eq!(sent[1].body, "Hi bob, you give to alice at 1 Main St.");
    }

    #[test]
    fn test_notify_aborts_on_first_delivery_error() {
        let mailer = RecordingMailer::failing_after(1);
        let err = notify(&mailer, &make_config(), &make_assignments()).unwrap_err();

        // First message went out; the failure stopped the rest of the loop
        assert_eq!(mailer.sent.borrow().len(), 1);
        assert!(err.to_string().contains("bob"));
    }

    #[test]
    fn test_notify_with_no_assignments_sends_nothing() {
        let mailer = RecordingMailer::new();
        notify(&mailer, &make_config(), &[]).unwrap();
        assert!(mailer.sent.borrow().is_empty());
    }
}
