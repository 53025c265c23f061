use serde::Serialize;

use super::domain::{Candidate, CandidateId, CandidateUpdate, CommentMap, RatingMap};
use super::evaluation::{Evaluation, EvaluationStore};
use super::export::{self, ExportError, ExportFile};
use super::leaderboard::{self, TopContenderView};
use super::schedule::ScheduleStore;

/// One in-process dashboard session owning the schedule and evaluation
/// state. Everything here is transient; nothing outlives the process.
#[derive(Debug, Default)]
pub struct DashboardSession {
    schedule: ScheduleStore,
    evaluations: EvaluationStore,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session preloaded with the standard weekly roster.
    pub fn seeded() -> Self {
        Self {
            schedule: ScheduleStore::seeded(),
            evaluations: EvaluationStore::new(),
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.schedule.candidates()
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        self.evaluations.all()
    }

    pub fn add_candidate(&mut self) -> Candidate {
        self.schedule.add()
    }

    pub fn update_candidate(&mut self, candidate_id: &CandidateId, update: CandidateUpdate) {
        self.schedule.update(candidate_id, update);
    }

    /// Save (insert or replace) the evaluation for a candidate id and
    /// return the stored record.
    pub fn save_evaluation(
        &mut self,
        candidate_id: CandidateId,
        ratings: RatingMap,
        comments: CommentMap,
        recommendation: String,
    ) -> Evaluation {
        self.evaluations
            .upsert(candidate_id, ratings, comments, recommendation)
    }

    /// Current leaderboard, recomputed from both stores on every call.
    pub fn top_contenders(&self) -> Vec<TopContenderView> {
        leaderboard::top_contenders(&self.schedule, &self.evaluations)
    }

    /// Headline numbers for the dashboard cards.
    pub fn summary(&self) -> DashboardSummary {
        let mut roles: Vec<&str> = self
            .schedule
            .candidates()
            .iter()
            .map(|candidate| candidate.role.as_str())
            .collect();
        roles.sort_unstable();
        roles.dedup();

        let evaluations = self.evaluations.all();
        let average_score = if evaluations.is_empty() {
            0.0
        } else {
            let total: f64 = evaluations
                .iter()
                .map(|evaluation| evaluation.overall_score)
                .sum();
            (total / evaluations.len() as f64 * 10.0).round() / 10.0
        };

        DashboardSummary {
            scheduled_interviews: self.schedule.len(),
            open_positions: roles.len(),
            evaluations_recorded: evaluations.len(),
            average_score,
        }
    }

    pub fn schedule_export(&self) -> Result<ExportFile, ExportError> {
        export::schedule_csv(self.schedule.candidates())
    }

    /// Evaluation sheet for one candidate; `None` when the id is unknown
    /// to the schedule or the candidate has not been evaluated yet.
    pub fn evaluation_export(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Option<ExportFile>, ExportError> {
        let Some(candidate) = self.schedule.find(candidate_id) else {
            return Ok(None);
        };
        let Some(evaluation) = self.evaluations.find(candidate_id) else {
            return Ok(None);
        };

        export::evaluation_csv(candidate, evaluation).map(Some)
    }

    pub fn schedule_document(&self) -> String {
        export::schedule_document(self.schedule.candidates())
    }

    pub fn evaluation_document(&self, candidate_id: &CandidateId) -> Option<String> {
        let candidate = self.schedule.find(candidate_id)?;
        let evaluation = self.evaluations.find(candidate_id)?;
        Some(export::evaluation_document(candidate, evaluation))
    }
}

/// Headline stats over the current session, shaped for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub scheduled_interviews: usize,
    pub open_positions: usize,
    pub evaluations_recorded: usize,
    pub average_score: f64,
}
