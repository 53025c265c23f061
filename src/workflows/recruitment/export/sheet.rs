use csv::{Writer, WriterBuilder};

use super::super::domain::{Candidate, RubricCategory};
use super::super::evaluation::Evaluation;
use super::{ExportError, ExportFile};

/// Fixed download name for the schedule export.
pub const SCHEDULE_EXPORT_FILE: &str = "icon-oncology-interview-schedule.csv";

pub(crate) const EVALUATION_EXPORT_TITLE: &str = "Icon Oncology - Candidate Evaluation Rubric";

/// The schedule table as CSV, one row per candidate in store order. Fields
/// with embedded commas (interviewer lists, most often) are quoted by the
/// writer rather than left to corrupt the row.
pub fn schedule_csv(candidates: &[Candidate]) -> Result<ExportFile, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record([
        "Candidate Name",
        "Role Applied For",
        "Date",
        "Time",
        "Interviewer(s)",
        "Interview Format",
    ])?;

    for candidate in candidates {
        writer.write_record([
            candidate.name.as_str(),
            candidate.role.as_str(),
            candidate.date.as_str(),
            candidate.time.as_str(),
            candidate.interviewers.as_str(),
            candidate.format.label(),
        ])?;
    }

    Ok(ExportFile {
        file_name: SCHEDULE_EXPORT_FILE.to_string(),
        contents: contents_from(writer)?,
    })
}

/// One candidate's evaluation sheet: preamble, the five category rows with
/// `Not Rated` fallbacks, then the overall score and final recommendation.
/// Rows vary in width, so the writer runs in flexible mode.
pub fn evaluation_csv(
    candidate: &Candidate,
    evaluation: &Evaluation,
) -> Result<ExportFile, ExportError> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer.write_record([EVALUATION_EXPORT_TITLE])?;
    // The writer renders a separator row as a single quoted empty field.
    writer.write_record([""])?;
    writer.write_record(["Candidate Name", candidate.name.as_str()])?;
    writer.write_record(["Position", candidate.role.as_str()])?;
    writer.write_record(["Interview Date", candidate.date.as_str()])?;
    writer.write_record([""])?;
    writer.write_record(["Category", "Rating", "Weight", "Comments"])?;

    for category in RubricCategory::ordered() {
        let rating = evaluation
            .ratings
            .get(&category)
            .map(|rating| rating.to_string())
            .unwrap_or_else(|| "Not Rated".to_string());
        let weight = format!("({}%)", category.weight_percent());
        let comment = evaluation
            .comments
            .get(&category)
            .map(String::as_str)
            .unwrap_or("");

        writer.write_record([category.label(), rating.as_str(), weight.as_str(), comment])?;
    }

    let score = format!("{:.1}/5.0", evaluation.overall_score);
    writer.write_record([""])?;
    writer.write_record(["Overall Score", score.as_str()])?;
    writer.write_record(["Final Recommendation", evaluation.recommendation.as_str()])?;

    Ok(ExportFile {
        file_name: evaluation_export_file_name(&candidate.name),
        contents: contents_from(writer)?,
    })
}

/// Download name for an evaluation sheet: the candidate name lowercased
/// with whitespace runs collapsed to single hyphens.
pub fn evaluation_export_file_name(candidate_name: &str) -> String {
    let slug = candidate_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    format!("evaluation-rubric-{slug}.csv")
}

fn contents_from(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
