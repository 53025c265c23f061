use clap::{Args, Parser, Subcommand};
use recruit_desk::config::AppConfig;
use recruit_desk::error::AppError;
use recruit_desk::telemetry;
use recruit_desk::workflows::recruitment::{
    overall_score, ratings_from_labels, CandidateId, CandidateUpdate, CommentMap,
    DashboardSession, InterviewFormat, RubricCategory, RubricGuide, ScoreTier, TopContenderView,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Recruitment Dashboard",
    about = "Icon Oncology interview scheduling and candidate evaluation from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through a seeded evaluation round and print the dashboard (default command)
    Demo(DemoArgs),
    /// Inspect and export the weekly interview schedule
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
    /// Inspect the scoring rubric and compute weighted scores
    Rubric {
        #[command(subcommand)]
        command: RubricCommand,
    },
}

#[derive(Args, Debug, Default)]
struct DemoArgs {
    /// Write the schedule and evaluation CSV exports to this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ScheduleCommand {
    /// Print the weekly interview schedule
    Report(ScheduleReportArgs),
    /// Write the schedule as a CSV file
    Export(ScheduleExportArgs),
}

#[derive(Args, Debug, Default)]
struct ScheduleReportArgs {
    /// Emit the schedule as pretty-printed JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct ScheduleExportArgs {
    /// Target directory for the CSV (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum RubricCommand {
    /// Print the scoring anchors for one or all categories
    Guide(RubricGuideArgs),
    /// Compute the weighted overall score for a set of ratings
    Score(RubricScoreArgs),
}

#[derive(Args, Debug, Default)]
struct RubricGuideArgs {
    /// Restrict the guide to one category by label, e.g. "Cultural Fit"
    #[arg(long, value_parser = parse_category)]
    category: Option<RubricCategory>,
    /// Emit the guide as pretty-printed JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RubricScoreArgs {
    /// Category rating as LABEL=RATING, e.g. --rating "Cultural Fit=4" (repeatable)
    #[arg(long = "rating", value_parser = parse_rating, required = true)]
    ratings: Vec<(String, u8)>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "recruitment dashboard starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args),
        Command::Schedule {
            command: ScheduleCommand::Report(args),
        } => run_schedule_report(args),
        Command::Schedule {
            command: ScheduleCommand::Export(args),
        } => run_schedule_export(args, &config),
        Command::Rubric {
            command: RubricCommand::Guide(args),
        } => run_rubric_guide(args),
        Command::Rubric {
            command: RubricCommand::Score(args),
        } => run_rubric_score(args),
    }
}

fn parse_category(raw: &str) -> Result<RubricCategory, String> {
    RubricCategory::from_label(raw)
        .ok_or_else(|| format!("unknown rubric category '{}'", raw.trim()))
}

fn parse_rating(raw: &str) -> Result<(String, u8), String> {
    let (label, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=RATING, got '{raw}'"))?;

    let rating = value
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{}' as a rating ({err})", value.trim()))?;
    if !(1..=5).contains(&rating) {
        return Err(format!("rating {rating} is outside the 1-5 scale"));
    }

    Ok((label.trim().to_string(), rating))
}

fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { export_dir } = args;

    println!("Recruitment dashboard demo");
    let mut session = DashboardSession::seeded();

    // Walk-in referral picked up by the scheduling desk mid-week.
    let walk_in = session.add_candidate();
    session.update_candidate(&walk_in.id, CandidateUpdate::Name("Elena Vasquez".to_string()));
    session.update_candidate(
        &walk_in.id,
        CandidateUpdate::Role("Oncology Pharmacist".to_string()),
    );
    session.update_candidate(&walk_in.id, CandidateUpdate::Date("2025-01-31".to_string()));
    session.update_candidate(&walk_in.id, CandidateUpdate::Time("15:30".to_string()));
    session.update_candidate(
        &walk_in.id,
        CandidateUpdate::Interviewers("Pharmacy Director, Dr. Okafor".to_string()),
    );
    session.update_candidate(&walk_in.id, CandidateUpdate::Format(InterviewFormat::InPerson));

    render_schedule(&session);

    let scheduled: Vec<(CandidateId, String)> = session
        .candidates()
        .iter()
        .map(|candidate| (candidate.id.clone(), candidate.name.clone()))
        .collect();

    println!("\nPanel evaluations recorded");
    for ((candidate_id, name), round) in scheduled.into_iter().zip(demo_evaluations()) {
        let ratings = ratings_from_labels(round.ratings.iter().copied());

        let mut comments = CommentMap::new();
        if let Some(category) = RubricCategory::from_label(round.highlight_category) {
            comments.insert(category, round.highlight_comment.to_string());
        }

        let record = session.save_evaluation(
            candidate_id,
            ratings,
            comments,
            round.recommendation.to_string(),
        );
        info!(
            candidate = %record.candidate_id.0,
            score = record.overall_score,
            "evaluation recorded"
        );
        println!(
            "- {}: {:.1}/5.0 | {}",
            name, record.overall_score, record.recommendation
        );
    }

    render_leaderboard(&session.top_contenders());

    let summary = session.summary();
    println!("\nDashboard summary payload");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(dir) = export_dir {
        println!("\nExports");
        let schedule_file = session.schedule_export()?;
        let path = schedule_file.write_to(&dir)?;
        info!(path = %path.display(), "schedule export written");
        println!("- {}", path.display());

        for candidate in session.candidates() {
            if let Some(file) = session.evaluation_export(&candidate.id)? {
                let path = file.write_to(&dir)?;
                info!(path = %path.display(), "evaluation export written");
                println!("- {}", path.display());
            }
        }
    }

    Ok(())
}

fn run_schedule_report(args: ScheduleReportArgs) -> Result<(), AppError> {
    let ScheduleReportArgs { json } = args;
    let session = DashboardSession::seeded();

    if json {
        println!("{}", serde_json::to_string_pretty(session.candidates())?);
        return Ok(());
    }

    print!("{}", session.schedule_document());
    Ok(())
}

fn run_schedule_export(args: ScheduleExportArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScheduleExportArgs { out_dir } = args;
    let out_dir = out_dir.unwrap_or_else(|| config.export.out_dir.clone());

    let session = DashboardSession::seeded();
    let file = session.schedule_export()?;
    let path = file.write_to(&out_dir)?;

    info!(path = %path.display(), "schedule export written");
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_rubric_guide(args: RubricGuideArgs) -> Result<(), AppError> {
    let RubricGuideArgs { category, json } = args;
    let guide = RubricGuide::standard();

    if json {
        let payload = match category {
            Some(category) => serde_json::to_string_pretty(&guide.for_category(category))?,
            None => serde_json::to_string_pretty(guide.categories())?,
        };
        println!("{payload}");
        return Ok(());
    }

    for category_guide in guide.categories() {
        if let Some(wanted) = category {
            if category_guide.category != wanted {
                continue;
            }
        }

        println!(
            "{} ({}% of overall score)",
            category_guide.category.label(),
            category_guide.category.weight_percent()
        );
        for criterion in &category_guide.criteria {
            println!(
                "  {} - {}: {}",
                criterion.level, criterion.descriptor, criterion.description
            );
        }
        println!();
    }

    Ok(())
}

fn run_rubric_score(args: RubricScoreArgs) -> Result<(), AppError> {
    let RubricScoreArgs { ratings } = args;

    for (label, _) in &ratings {
        if RubricCategory::from_label(label).is_none() {
            println!("Ignoring unknown category '{label}'");
        }
    }

    let parsed = ratings_from_labels(
        ratings
            .iter()
            .map(|(label, rating)| (label.as_str(), *rating)),
    );
    for (category, rating) in &parsed {
        println!(
            "- {} ({}%): {}/5",
            category.label(),
            category.weight_percent(),
            rating
        );
    }

    let score = overall_score(&parsed);
    let tier = ScoreTier::from_score(score);
    println!("Weighted score: {score:.1}/5.0 ({})", tier.label());

    Ok(())
}

fn render_schedule(session: &DashboardSession) {
    println!("\nThis week's interviews");
    for candidate in session.candidates() {
        println!(
            "- {} | {} | {} | {} {} | {} | {}",
            candidate.id.0,
            candidate.name,
            candidate.role,
            candidate.date,
            candidate.time,
            candidate.interviewers,
            candidate.format.label()
        );
    }
}

fn render_leaderboard(contenders: &[TopContenderView]) {
    if contenders.is_empty() {
        println!("\nTop contenders: none evaluated yet");
        return;
    }

    println!("\nTop contenders");
    for view in contenders {
        println!(
            "- #{} {} ({}) | {:.1}/5.0 | {} | {}",
            view.rank, view.name, view.role, view.overall_score, view.tier_label, view.recommendation
        );
    }
}

struct DemoEvaluation {
    ratings: [(&'static str, u8); 5],
    highlight_category: &'static str,
    highlight_comment: &'static str,
    recommendation: &'static str,
}

fn demo_evaluations() -> Vec<DemoEvaluation> {
    vec![
        DemoEvaluation {
            ratings: [
                ("Technical Expertise", 5),
                ("Communication Skills", 5),
                ("Cultural Fit", 4),
                ("Problem-Solving", 5),
                ("Professionalism", 4),
            ],
            highlight_category: "Technical Expertise",
            highlight_comment: "Deep knowledge of current trial protocols.",
            recommendation: "Strong hire. Extend an offer this week.",
        },
        DemoEvaluation {
            ratings: [
                ("Technical Expertise", 4),
                ("Communication Skills", 3),
                ("Cultural Fit", 4),
                ("Problem-Solving", 4),
                ("Professionalism", 5),
            ],
            highlight_category: "Communication Skills",
            highlight_comment: "Solid answers, though panel follow-ups ran long.",
            recommendation: "Hire. Pair with a senior mentor for the first quarter.",
        },
        DemoEvaluation {
            ratings: [
                ("Technical Expertise", 3),
                ("Communication Skills", 4),
                ("Cultural Fit", 3),
                ("Problem-Solving", 3),
                ("Professionalism", 4),
            ],
            highlight_category: "Problem-Solving",
            highlight_comment: "Needed prompting on the escalation scenario.",
            recommendation: "Hold for a second-round clinical panel.",
        },
    ]
}
