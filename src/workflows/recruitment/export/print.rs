use super::super::domain::{Candidate, RubricCategory};
use super::super::evaluation::Evaluation;
use super::super::rubric::RubricGuide;

/// Printable text rendering of the schedule view for the host print flow.
pub fn schedule_document(candidates: &[Candidate]) -> String {
    let mut lines = vec![
        "Weekly Interview Schedule".to_string(),
        "Icon Oncology - Recruitment Department".to_string(),
        String::new(),
    ];

    if candidates.is_empty() {
        lines.push("No interviews scheduled".to_string());
    } else {
        for candidate in candidates {
            lines.push(format!(
                "- {} | {} | {} {} | {} | {}",
                candidate.name,
                candidate.role,
                candidate.date,
                candidate.time,
                candidate.interviewers,
                candidate.format.label()
            ));
        }
    }

    lines.join("\n") + "\n"
}

/// Printable text rendering of one candidate's evaluation sheet, with the
/// rubric descriptor spelled out next to each rating.
pub fn evaluation_document(candidate: &Candidate, evaluation: &Evaluation) -> String {
    let guide = RubricGuide::standard();
    let mut lines = vec![
        "Candidate Evaluation Rubric".to_string(),
        "Icon Oncology - Healthcare Professional Assessment".to_string(),
        String::new(),
        format!("Candidate: {}", candidate.name),
        format!("Position: {}", candidate.role),
        format!("Interview Date: {}", candidate.date),
        String::new(),
    ];

    for category in RubricCategory::ordered() {
        let heading = format!("{} ({}%)", category.label(), category.weight_percent());
        let line = match evaluation.ratings.get(&category) {
            Some(rating) => {
                let descriptor = guide
                    .for_category(category)
                    .and_then(|category_guide| category_guide.descriptor_for(*rating));
                match descriptor {
                    Some(descriptor) => format!("- {heading}: {rating}/5 ({descriptor})"),
                    None => format!("- {heading}: {rating}/5"),
                }
            }
            None => format!("- {heading}: Not Rated"),
        };
        lines.push(line);

        if let Some(comment) = evaluation.comments.get(&category) {
            if !comment.is_empty() {
                lines.push(format!("  Comments: {comment}"));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("Overall Score: {:.1}/5.0", evaluation.overall_score));
    if !evaluation.recommendation.is_empty() {
        lines.push(format!(
            "Final Recommendation: {}",
            evaluation.recommendation
        ));
    }

    lines.join("\n") + "\n"
}
