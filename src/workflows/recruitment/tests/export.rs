use super::common::*;
use crate::workflows::recruitment::domain::RubricCategory;
use crate::workflows::recruitment::evaluation::EvaluationStore;
use crate::workflows::recruitment::export::{
    evaluation_csv, evaluation_document, evaluation_export_file_name, schedule_csv,
    schedule_document, SCHEDULE_EXPORT_FILE,
};

#[test]
fn schedule_csv_renders_header_and_quotes_interviewer_lists() {
    let candidates = [sample_candidate(
        "cand-a",
        "Dr. Sarah Chen",
        "Dr. Martinez, Ms. Johnson",
    )];

    let file = schedule_csv(&candidates).expect("schedule serializes");

    assert_eq!(file.file_name, SCHEDULE_EXPORT_FILE);
    let mut lines = file.contents.lines();
    assert_eq!(
        lines.next(),
        Some("Candidate Name,Role Applied For,Date,Time,Interviewer(s),Interview Format")
    );
    assert_eq!(
        lines.next(),
        Some("Dr. Sarah Chen,Oncology Nurse,2025-01-27,11:00,\"Dr. Martinez, Ms. Johnson\",Virtual")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn comma_bearing_names_parse_back_as_a_single_field() {
    let candidates = [sample_candidate("cand-c", "Dr. A, B", "Panel")];

    let file = schedule_csv(&candidates).expect("schedule serializes");

    let mut reader = csv::Reader::from_reader(file.contents.as_bytes());
    let row = reader
        .records()
        .next()
        .expect("one data row")
        .expect("row parses");
    assert_eq!(row.len(), 6);
    assert_eq!(row.get(0), Some("Dr. A, B"));
}

#[test]
fn empty_schedule_yields_a_header_only_csv() {
    let file = schedule_csv(&[]).expect("empty schedule serializes");

    assert_eq!(
        file.contents,
        "Candidate Name,Role Applied For,Date,Time,Interviewer(s),Interview Format\n"
    );
}

#[test]
fn evaluation_csv_renders_the_sheet_with_not_rated_fallbacks() {
    let candidate = sample_candidate("cand-a", "James Park", "IT Director, Quality Manager");
    let mut partial = ratings([4, 5, 4, 4, 4]);
    partial.remove(&RubricCategory::Professionalism);
    let evaluation = evaluation_from(&candidate.id, partial, "Hire");

    let file = evaluation_csv(&candidate, &evaluation).expect("sheet serializes");

    assert_eq!(file.file_name, "evaluation-rubric-james-park.csv");
    let contents = file.contents.as_str();
    assert!(contents.starts_with("Icon Oncology - Candidate Evaluation Rubric\n"));
    assert!(contents.contains("Candidate Name,James Park\n"));
    assert!(contents.contains("Position,Oncology Nurse\n"));
    assert!(contents.contains("Interview Date,2025-01-27\n"));
    assert!(contents.contains("Category,Rating,Weight,Comments\n"));
    assert!(contents.contains("Technical Expertise,4,(25%),"));
    assert!(contents.contains("Professionalism,Not Rated,(15%),"));
    assert!(contents.contains("Overall Score,4.2/5.0\n"));
    assert!(contents.contains("Final Recommendation,Hire\n"));
}

#[test]
fn evaluation_csv_quotes_comments_with_commas() {
    let candidate = sample_candidate("cand-b", "Dr. Amanda Foster", "CMO");
    let mut store = EvaluationStore::new();
    let evaluation = store.upsert(
        candidate.id.clone(),
        uniform_ratings(5),
        comment_for(
            RubricCategory::TechnicalExpertise,
            "Sharp, current, and thorough",
        ),
        "Offer".to_string(),
    );

    let file = evaluation_csv(&candidate, &evaluation).expect("sheet serializes");

    assert!(file
        .contents
        .contains("Technical Expertise,5,(25%),\"Sharp, current, and thorough\""));
}

#[test]
fn evaluation_file_names_slug_the_candidate_name() {
    assert_eq!(
        evaluation_export_file_name("Dr. Sarah Chen"),
        "evaluation-rubric-dr.-sarah-chen.csv"
    );
    assert_eq!(
        evaluation_export_file_name("  Elena   Vasquez "),
        "evaluation-rubric-elena-vasquez.csv"
    );
}

#[test]
fn schedule_document_lists_each_interview() {
    let candidates = [
        sample_candidate("cand-a", "Dr. Sarah Chen", "Dr. Martinez"),
        sample_candidate("cand-b", "James Park", "IT Director"),
    ];

    let document = schedule_document(&candidates);

    assert!(document
        .starts_with("Weekly Interview Schedule\nIcon Oncology - Recruitment Department\n\n"));
    assert!(
        document.contains("- Dr. Sarah Chen | Oncology Nurse | 2025-01-27 11:00 | Dr. Martinez | Virtual")
    );
    assert!(document.contains("- James Park |"));
    assert!(document.ends_with('\n'));
}

#[test]
fn empty_schedule_document_says_so() {
    let document = schedule_document(&[]);

    assert!(document.contains("No interviews scheduled"));
}

#[test]
fn evaluation_document_spells_out_descriptors_and_comments() {
    let candidate = sample_candidate("cand-a", "Michael Rodriguez", "CNO Davis");
    let mut store = EvaluationStore::new();
    let mut map = ratings([5, 4, 3, 2, 1]);
    map.remove(&RubricCategory::Professionalism);
    let evaluation = store.upsert(
        candidate.id.clone(),
        map,
        comment_for(RubricCategory::CulturalFit, "Lives the patient-first mindset"),
        "Hire".to_string(),
    );

    let document = evaluation_document(&candidate, &evaluation);

    assert!(document.contains("Candidate: Michael Rodriguez"));
    assert!(document.contains("- Technical Expertise (25%): 5/5 (Exceptional)"));
    assert!(document.contains("- Communication Skills (20%): 4/5 (Proficient)"));
    assert!(document.contains("- Cultural Fit (20%): 3/5 (Competent)"));
    assert!(document.contains("  Comments: Lives the patient-first mindset"));
    assert!(document.contains("- Problem-Solving (20%): 2/5 (Developing)"));
    assert!(document.contains("- Professionalism (15%): Not Rated"));
    assert!(document.contains("Overall Score: 3.6/5.0"));
    assert!(document.contains("Final Recommendation: Hire"));
}

#[test]
fn evaluation_document_omits_an_empty_recommendation() {
    let candidate = sample_candidate("cand-a", "Dr. Lisa Wong", "Department Head");
    let evaluation = evaluation_from(&candidate.id, uniform_ratings(4), "");

    let document = evaluation_document(&candidate, &evaluation);

    assert!(document.contains("Overall Score: 4.0/5.0"));
    assert!(!document.contains("Final Recommendation:"));
}
