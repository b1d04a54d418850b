//! Message rendering: placeholder substitution and header construction

use crate::config::MailConfig;
use crate::matching::Assignment;

pub const GIVER_PLACEHOLDER: &str = "{giver}";
pub const RECEIVER_PLACEHOLDER: &str = "{receiver}";
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// A fully composed message, ready to hand to a [`Mailer`](super::Mailer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Substitute every placeholder occurrence in the body template.
///
/// A template without placeholders passes through unchanged.
pub fn render_body(template: &str, assignment: &Assignment) -> String {
    template
        .replace(GIVER_PLACEHOLDER, &assignment.giver.name)
        .replace(RECEIVER_PLACEHOLDER, &assignment.receiver.name)
        .replace(ADDRESS_PLACEHOLDER, &assignment.receiver.address)
}

/// Compose the message for one assignment: headers from config plus the
/// giver's identity, body from the rendered template
pub fn compose(config: &MailConfig, assignment: &Assignment) -> Email {
    Email {
        from: config.from.clone(),
        to: assignment.giver.email.clone(),
        subject: config.subject.clone(),
        body: render_body(&config.body, assignment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmtpConfig;
    use crate::matching::Participant;

    fn make_assignment() -> Assignment {
        Assignment {
            giver: Participant::new("alice", "alice@example.com", "1 Main St"),
            receiver: Participant::new("bob", "bob@example.com", "2 Oak Ave"),
        }
    }

    fn make_config(body: &str) -> MailConfig {
        MailConfig {
            from: "santa@example.com".to_string(),
            subject: "Your draw".to_string(),
            body: body.to_string(),
            smtp: SmtpConfig {
                host: "localhost".to_string(),
                port: 25,
                tls: false,
                username: None,
                password: None,
            },
        }
    }

    #[test]
    fn test_render_replaces_all_placeholders() {
        let rendered = render_body(
            "Hi {giver}! You give to {receiver}. Ship to: {address}",
            &make_assignment(),
        );

        assert_eq!(rendered, "Hi alice! You give to bob. Ship to: 2 Oak Ave");
        assert!(!rendered.contains('{'));
    }

    #[test]
    fn test_render_replaces_repeated_occurrences() {
        let rendered = render_body("{receiver} {receiver} {giver}", &make_assignment());
        assert_eq!(rendered, "bob bob alice");
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        let template = "No placeholders here.";
        assert_eq!(render_body(template, &make_assignment()), template);
    }

    #[test]
    fn test_compose_headers_from_config_and_giver() {
        let email = compose(&make_config("{giver} -> {receiver}"), &make_assignment());

        assert_eq!(email.from, "santa@example.com");
        assert_eq!(email.to, "alice@example.com");
        assert_eq!(email.subject, "Your draw");
        assert_eq!(email.body, "alice -> bob");
    }
}
