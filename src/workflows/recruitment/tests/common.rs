use crate::workflows::recruitment::domain::{
    Candidate, CandidateId, CommentMap, InterviewFormat, RatingMap, RubricCategory,
};
use crate::workflows::recruitment::evaluation::{Evaluation, EvaluationStore};
use crate::workflows::recruitment::schedule::ScheduleStore;

pub(super) fn ratings(values: [u8; 5]) -> RatingMap {
    RubricCategory::ordered().into_iter().zip(values).collect()
}

pub(super) fn uniform_ratings(level: u8) -> RatingMap {
    ratings([level; 5])
}

pub(super) fn comment_for(category: RubricCategory, text: &str) -> CommentMap {
    let mut comments = CommentMap::new();
    comments.insert(category, text.to_string());
    comments
}

pub(super) fn scheduled_ids(store: &ScheduleStore) -> Vec<CandidateId> {
    store
        .candidates()
        .iter()
        .map(|candidate| candidate.id.clone())
        .collect()
}

pub(super) fn sample_candidate(id: &str, name: &str, interviewers: &str) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        name: name.to_string(),
        role: "Oncology Nurse".to_string(),
        date: "2025-01-27".to_string(),
        time: "11:00".to_string(),
        interviewers: interviewers.to_string(),
        format: InterviewFormat::Virtual,
    }
}

pub(super) fn evaluation_from(
    candidate_id: &CandidateId,
    ratings: RatingMap,
    recommendation: &str,
) -> Evaluation {
    let mut store = EvaluationStore::new();
    store.upsert(
        candidate_id.clone(),
        ratings,
        CommentMap::new(),
        recommendation.to_string(),
    )
}
