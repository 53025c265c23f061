//! Interview scheduling, weighted rubric evaluation, and candidate ranking.
//!
//! The modules here hold the whole recruitment dashboard state for one
//! process: a schedule of upcoming interviews, the evaluations captured
//! against them, and the derived leaderboard and export surfaces.

pub mod domain;
pub mod evaluation;
pub mod export;
pub mod leaderboard;
pub mod rubric;
pub mod schedule;
mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    ratings_from_labels, Candidate, CandidateId, CandidateUpdate, CommentMap, InterviewFormat,
    RatingMap, RubricCategory,
};
pub use evaluation::{overall_score, Evaluation, EvaluationStore};
pub use export::{ExportError, ExportFile, SCHEDULE_EXPORT_FILE};
pub use leaderboard::{top_contenders, ScoreTier, TopContenderView, TOP_CONTENDERS_LIMIT};
pub use rubric::{RubricCategoryGuide, RubricCriterion, RubricGuide};
pub use schedule::ScheduleStore;
pub use session::{DashboardSession, DashboardSummary};
