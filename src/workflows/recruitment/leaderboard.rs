use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Candidate, CandidateId, InterviewFormat, RatingMap};
use super::evaluation::{Evaluation, EvaluationStore};
use super::schedule::ScheduleStore;

/// The leaderboard never shows more than this many candidates.
pub const TOP_CONTENDERS_LIMIT: usize = 5;

/// Presentation tier for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Strong,
    Good,
    Standard,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            Self::Excellent
        } else if score >= 4.0 {
            Self::Strong
        } else if score >= 3.5 {
            Self::Good
        } else {
            Self::Standard
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Strong => "strong",
            Self::Good => "good",
            Self::Standard => "standard",
        }
    }
}

/// One leaderboard row: a candidate joined with their current evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct TopContenderView {
    pub rank: usize,
    pub candidate_id: CandidateId,
    pub name: String,
    pub role: String,
    pub date: String,
    pub interviewers: String,
    pub format: InterviewFormat,
    pub format_label: &'static str,
    pub overall_score: f64,
    pub tier: ScoreTier,
    pub tier_label: &'static str,
    pub ratings: RatingMap,
    pub recommendation: String,
    pub evaluated_at: DateTime<Utc>,
}

/// Join current evaluations to the roster, highest score first, truncated
/// to the top five. Evaluations whose candidate id is not on the schedule
/// are dropped. The list is recomputed from the stores on every call;
/// equal scores keep evaluation insertion order.
pub fn top_contenders(
    schedule: &ScheduleStore,
    evaluations: &EvaluationStore,
) -> Vec<TopContenderView> {
    let mut ranked: Vec<(&Candidate, &Evaluation)> = evaluations
        .all()
        .iter()
        .filter_map(|evaluation| {
            schedule
                .find(&evaluation.candidate_id)
                .map(|candidate| (candidate, evaluation))
        })
        .collect();

    ranked.sort_by(|a, b| b.1.overall_score.total_cmp(&a.1.overall_score));
    ranked.truncate(TOP_CONTENDERS_LIMIT);

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, (candidate, evaluation))| to_view(index + 1, candidate, evaluation))
        .collect()
}

fn to_view(rank: usize, candidate: &Candidate, evaluation: &Evaluation) -> TopContenderView {
    let tier = ScoreTier::from_score(evaluation.overall_score);

    TopContenderView {
        rank,
        candidate_id: candidate.id.clone(),
        name: candidate.name.clone(),
        role: candidate.role.clone(),
        date: candidate.date.clone(),
        interviewers: candidate.interviewers.clone(),
        format: candidate.format,
        format_label: candidate.format.label(),
        overall_score: evaluation.overall_score,
        tier,
        tier_label: tier.label(),
        ratings: evaluation.ratings.clone(),
        recommendation: evaluation.recommendation.clone(),
        evaluated_at: evaluation.evaluated_at,
    }
}
