use std::collections::HashSet;

/// A person taking part in the exchange, keyed by their unique name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique display name, used as the matching key
    pub name: String,
    /// Where the assignment notification is sent
    pub email: String,
    /// Free-text postal address, substituted into the message body
    pub address: String,
    /// Names this participant must not give to (self is always implied)
    pub excludes: HashSet<String>,
}

impl Participant {
    /// Create a participant with an empty exclusion set
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Participant {
            name: name.into(),
            email: email.into(),
            address: address.into(),
            excludes: HashSet::new(),
        }
    }

    /// Builder-style helper to attach exclusions
    pub fn with_excludes<I, S>(mut self, excludes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes = excludes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `receiver` is a forbidden receiver for this participant.
    /// Self-matching is forbidden even when not listed explicitly.
    pub fn forbids(&self, receiver: &str) -> bool {
        receiver == self.name || self.excludes.contains(receiver)
    }
}

/// A resolved giver → receiver pairing for one exchange cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}
