use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

use super::domain::{Candidate, CandidateId, CandidateUpdate, InterviewFormat};

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:04}"))
}

/// In-memory interview schedule: candidates in creation order, mutated only
/// through `add` and field-level `update`. There is no delete operation.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    candidates: Vec<Candidate>,
}

struct CandidateSeed {
    name: &'static str,
    role: &'static str,
    date: &'static str,
    time: &'static str,
    interviewers: &'static str,
    format: InterviewFormat,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard weekly roster the dashboard opens with. Ids are drawn
    /// from the same process-wide sequence as `add`, so rosters and added
    /// candidates never collide.
    pub fn seeded() -> Self {
        let candidates = standard_roster()
            .into_iter()
            .map(|seed| Candidate {
                id: next_candidate_id(),
                name: seed.name.to_string(),
                role: seed.role.to_string(),
                date: seed.date.to_string(),
                time: seed.time.to_string(),
                interviewers: seed.interviewers.to_string(),
                format: seed.format,
            })
            .collect();

        Self { candidates }
    }

    /// Append a placeholder candidate with a freshly assigned id and return
    /// it. The interview date defaults to today.
    pub fn add(&mut self) -> Candidate {
        let candidate = Candidate {
            id: next_candidate_id(),
            name: "New Candidate".to_string(),
            role: "Position TBD".to_string(),
            date: Local::now().date_naive().to_string(),
            time: "09:00".to_string(),
            interviewers: "TBD".to_string(),
            format: InterviewFormat::Virtual,
        };

        self.candidates.push(candidate.clone());
        candidate
    }

    /// Replace exactly one field of the matching candidate. Unknown ids are
    /// a silent no-op; the schedule never fails an edit.
    pub fn update(&mut self, candidate_id: &CandidateId, update: CandidateUpdate) {
        let Some(candidate) = self
            .candidates
            .iter_mut()
            .find(|candidate| candidate.id == *candidate_id)
        else {
            return;
        };

        match update {
            CandidateUpdate::Name(value) => candidate.name = value,
            CandidateUpdate::Role(value) => candidate.role = value,
            CandidateUpdate::Date(value) => candidate.date = value,
            CandidateUpdate::Time(value) => candidate.time = value,
            CandidateUpdate::Interviewers(value) => candidate.interviewers = value,
            CandidateUpdate::Format(value) => candidate.format = value,
        }
    }

    /// Candidates in store order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn find(&self, candidate_id: &CandidateId) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.id == *candidate_id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

fn standard_roster() -> Vec<CandidateSeed> {
    vec![
        CandidateSeed {
            name: "Dr. Sarah Chen",
            role: "Clinical Research Coordinator",
            date: "2025-01-27",
            time: "09:00",
            interviewers: "Dr. Martinez, Ms. Johnson",
            format: InterviewFormat::InPerson,
        },
        CandidateSeed {
            name: "Michael Rodriguez",
            role: "Oncology Nurse",
            date: "2025-01-27",
            time: "11:00",
            interviewers: "Director Thompson, CNO Davis",
            format: InterviewFormat::Virtual,
        },
        CandidateSeed {
            name: "Dr. Amanda Foster",
            role: "Medical Oncologist",
            date: "2025-01-28",
            time: "14:00",
            interviewers: "Chief Medical Officer, Dr. Williams",
            format: InterviewFormat::InPerson,
        },
        CandidateSeed {
            name: "James Park",
            role: "Clinical Data Manager",
            date: "2025-01-29",
            time: "10:30",
            interviewers: "IT Director, Quality Manager",
            format: InterviewFormat::Virtual,
        },
        CandidateSeed {
            name: "Dr. Lisa Wong",
            role: "Radiation Oncologist",
            date: "2025-01-30",
            time: "13:00",
            interviewers: "Department Head, Dr. Kumar",
            format: InterviewFormat::InPerson,
        },
    ]
}
