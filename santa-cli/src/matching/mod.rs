// Matching service for drawing secret santa pairs
//
// Pure business logic, decoupled from the CLI and the mail layer: a
// randomized greedy pass over the participants, retried wholesale until it
// produces a complete assignment or the attempt budget runs out.

pub mod core;
pub mod models;

// Re-export commonly used types
pub use models::{Assignment, Participant};

use rand::Rng;
use thiserror::Error;

/// Attempt budget for the randomized matcher
pub const MAX_ATTEMPTS: usize = 1000;

/// The matcher ran out of attempts without a complete assignment
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(
        "no valid assignment found after {attempts} attempts; \
         the exclusion lists may be unsatisfiable - try removing some exclusions"
    )]
    Infeasible { attempts: usize },
}

/// Draw a complete giver → receiver assignment.
///
/// The result is a bijection over the participants with no self-match and no
/// excluded pair. Randomness comes from the injected `rng`, so callers that
/// need reproducibility can pass a seeded generator.
pub fn assign<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
) -> Result<Vec<Assignment>, MatchError> {
    assign_with_budget(participants, rng, MAX_ATTEMPTS)
}

/// Like [`assign`] but with an explicit attempt budget
pub fn assign_with_budget<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
    max_attempts: usize,
) -> Result<Vec<Assignment>, MatchError> {
    let ordered = core::order_by_constraint(participants);

    for _ in 0..max_attempts {
        if let Some(assignments) = core::run_attempt(&ordered, participants, rng) {
            return Ok(assignments);
        }
    }

    Err(MatchError::Infeasible {
        attempts: max_attempts,
    })
}
