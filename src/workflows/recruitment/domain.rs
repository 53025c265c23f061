use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for scheduled candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// How the interview is conducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewFormat {
    InPerson,
    Virtual,
}

impl InterviewFormat {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InPerson => "In-Person",
            Self::Virtual => "Virtual",
        }
    }
}

/// One row of the interview schedule.
///
/// `date` and `time` are agreed-format strings (`YYYY-MM-DD`, 24h `HH:MM`)
/// and are deliberately not validated beyond presence; malformed values
/// pass through to reports and exports as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub role: String,
    pub date: String,
    pub time: String,
    pub interviewers: String,
    pub format: InterviewFormat,
}

/// Field-level replacement payload for `ScheduleStore::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateUpdate {
    Name(String),
    Role(String),
    Date(String),
    Time(String),
    Interviewers(String),
    Format(InterviewFormat),
}

/// The five fixed evaluation dimensions and their weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RubricCategory {
    TechnicalExpertise,
    CommunicationSkills,
    CulturalFit,
    ProblemSolving,
    Professionalism,
}

impl RubricCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::TechnicalExpertise,
            Self::CommunicationSkills,
            Self::CulturalFit,
            Self::ProblemSolving,
            Self::Professionalism,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TechnicalExpertise => "Technical Expertise",
            Self::CommunicationSkills => "Communication Skills",
            Self::CulturalFit => "Cultural Fit",
            Self::ProblemSolving => "Problem-Solving",
            Self::Professionalism => "Professionalism",
        }
    }

    /// Weight of the category in whole percent. The five weights sum to 100.
    pub const fn weight_percent(self) -> u32 {
        match self {
            Self::TechnicalExpertise => 25,
            Self::CommunicationSkills => 20,
            Self::CulturalFit => 20,
            Self::ProblemSolving => 20,
            Self::Professionalism => 15,
        }
    }

    /// Resolve a loosely-typed category label, ignoring case and padding.
    /// Returns `None` for anything outside the fixed five.
    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
    }
}

/// Per-category integer ratings in [1, 5], possibly partial.
pub type RatingMap = BTreeMap<RubricCategory, u8>;

/// Per-category free-text observations; independent of `RatingMap`.
pub type CommentMap = BTreeMap<RubricCategory, String>;

/// Build a `RatingMap` from loose label/rating pairs. Labels that do not
/// resolve to a fixed category are dropped, so stray keys can never reach
/// the weighted score.
pub fn ratings_from_labels<'a, I>(entries: I) -> RatingMap
where
    I: IntoIterator<Item = (&'a str, u8)>,
{
    entries
        .into_iter()
        .filter_map(|(label, rating)| {
            RubricCategory::from_label(label).map(|category| (category, rating))
        })
        .collect()
}
