mod scoring;

pub use scoring::overall_score;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CandidateId, CommentMap, RatingMap};

/// A saved assessment for one candidate. At most one exists per candidate
/// id at any time; saving again replaces the prior record wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub candidate_id: CandidateId,
    pub ratings: RatingMap,
    pub comments: CommentMap,
    pub recommendation: String,
    pub overall_score: f64,
    pub evaluated_at: DateTime<Utc>,
}

/// In-memory collection of evaluations with upsert semantics, keyed by
/// candidate id. State lives for the process only.
#[derive(Debug, Default)]
pub struct EvaluationStore {
    evaluations: Vec<Evaluation>,
}

impl EvaluationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or wholesale-replace the evaluation for `candidate_id`,
    /// returning the stored record.
    ///
    /// The overall score is always recomputed from `ratings` here; callers
    /// never supply it. The id is not cross-checked against the schedule:
    /// an evaluation for an unknown candidate is kept and simply never
    /// surfaces in the leaderboard join. A replaced record keeps its
    /// position in the collection.
    pub fn upsert(
        &mut self,
        candidate_id: CandidateId,
        ratings: RatingMap,
        comments: CommentMap,
        recommendation: String,
    ) -> Evaluation {
        let evaluation = Evaluation {
            overall_score: scoring::overall_score(&ratings),
            candidate_id,
            ratings,
            comments,
            recommendation,
            evaluated_at: Utc::now(),
        };

        match self
            .evaluations
            .iter_mut()
            .find(|existing| existing.candidate_id == evaluation.candidate_id)
        {
            Some(existing) => *existing = evaluation.clone(),
            None => self.evaluations.push(evaluation.clone()),
        }

        evaluation
    }

    /// Current evaluations in insertion/replacement order.
    pub fn all(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn find(&self, candidate_id: &CandidateId) -> Option<&Evaluation> {
        self.evaluations
            .iter()
            .find(|evaluation| evaluation.candidate_id == *candidate_id)
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }
}
