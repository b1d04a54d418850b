//! Core matching functions: giver ordering and single-attempt assignment

use rand::Rng;
use rand::seq::IndexedRandom;

use super::models::{Assignment, Participant};

/// Order givers by descending exclusion-set size.
///
/// The most-constrained participants draw first, while the receiver pool is
/// still large; this markedly improves the odds that a greedy random pass
/// completes without cornering itself. Ties keep input order (stable sort).
pub fn order_by_constraint(participants: &[Participant]) -> Vec<&Participant> {
    let mut ordered: Vec<&Participant> = participants.iter().collect();
    ordered.sort_by(|a, b| b.excludes.len().cmp(&a.excludes.len()));
    ordered
}

/// Run one full greedy pass over all givers.
///
/// Draws a receiver uniformly at random from the remaining pool for each
/// giver in turn. Returns `None` as soon as any giver has no eligible
/// receiver left: the attempt is abandoned wholesale, never partially. The
/// receiver pool lives only in this call frame and is discarded with it.
pub fn run_attempt<R: Rng + ?Sized>(
    ordered: &[&Participant],
    all: &[Participant],
    rng: &mut R,
) -> Option<Vec<Assignment>> {
    let mut pool: Vec<&Participant> = all.iter().collect();
    let mut assignments = Vec::with_capacity(ordered.len());

    for giver in ordered {
        let eligible: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, receiver)| !giver.forbids(&receiver.name))
            .map(|(idx, _)| idx)
            .collect();

        // A cornered giver fails the whole attempt, not just this draw
        let chosen_idx = *eligible.choose(rng)?;
        let receiver = pool.swap_remove(chosen_idx);

        assignments.push(Assignment {
            giver: (*giver).clone(),
            receiver: receiver.clone(),
        });
    }

    Some(assignments)
}
