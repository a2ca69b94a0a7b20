//! Random selection of the next quiz question.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use super::question::{Question, QuestionId};

/// Pick one question uniformly among `candidates` whose id is not in `previous`.
///
/// Returns `None` once every candidate has been played.
pub fn pick_question<R: Rng + ?Sized>(
    candidates: &[Question],
    previous: &[QuestionId],
    rng: &mut R,
) -> Option<Question> {
    let seen: HashSet<QuestionId> = previous.iter().copied().collect();
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    unseen.choose(rng).map(|q| (*q).clone())
}
