use recruit_desk::workflows::recruitment::{
    ratings_from_labels, CandidateId, CandidateUpdate, CommentMap, DashboardSession,
    InterviewFormat, RatingMap, RubricCategory, ScoreTier, SCHEDULE_EXPORT_FILE,
    TOP_CONTENDERS_LIMIT,
};

fn ratings(values: [u8; 5]) -> RatingMap {
    RubricCategory::ordered().into_iter().zip(values).collect()
}

fn scheduled_ids(session: &DashboardSession) -> Vec<CandidateId> {
    session
        .candidates()
        .iter()
        .map(|candidate| candidate.id.clone())
        .collect()
}

#[test]
fn seeded_dashboard_walks_through_an_evaluation_round() {
    let mut session = DashboardSession::seeded();
    assert_eq!(session.candidates().len(), 5);

    let ids = scheduled_ids(&session);
    session.save_evaluation(
        ids[0].clone(),
        ratings([5, 5, 4, 5, 4]),
        CommentMap::new(),
        "Advance to offer".to_string(),
    );
    session.save_evaluation(
        ids[2].clone(),
        ratings([4, 4, 4, 4, 4]),
        CommentMap::new(),
        "Second round".to_string(),
    );
    session.save_evaluation(
        ids[3].clone(),
        ratings([3, 3, 4, 3, 3]),
        CommentMap::new(),
        "Keep warm".to_string(),
    );

    let board = session.top_contenders();
    assert_eq!(board.len(), 3);
    assert!(board
        .windows(2)
        .all(|pair| pair[0].overall_score >= pair[1].overall_score));
    assert_eq!(board[0].candidate_id, ids[0]);
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[0].tier, ScoreTier::Excellent);

    let summary = session.summary();
    assert_eq!(summary.scheduled_interviews, 5);
    assert_eq!(summary.evaluations_recorded, 3);
}

#[test]
fn re_evaluation_replaces_the_previous_score() {
    let mut session = DashboardSession::seeded();
    let first = scheduled_ids(&session).remove(0);

    session.save_evaluation(
        first.clone(),
        ratings([2, 2, 2, 2, 2]),
        CommentMap::new(),
        "Decline".to_string(),
    );
    session.save_evaluation(
        first,
        ratings([5, 5, 5, 5, 5]),
        CommentMap::new(),
        "Re-interviewed. Offer.".to_string(),
    );

    assert_eq!(session.evaluations().len(), 1);
    let board = session.top_contenders();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].overall_score, 5.0);
    assert_eq!(board[0].recommendation, "Re-interviewed. Offer.");
}

#[test]
fn walk_in_candidates_join_the_board_once_evaluated() {
    let mut session = DashboardSession::seeded();
    let added = session.add_candidate();

    session.update_candidate(&added.id, CandidateUpdate::Name("Elena Vasquez".to_string()));
    session.update_candidate(&added.id, CandidateUpdate::Format(InterviewFormat::InPerson));

    let labeled = ratings_from_labels([
        ("Technical Expertise", 5),
        ("communication skills", 5),
        ("Cultural Fit", 5),
        ("Problem-Solving", 5),
        ("Professionalism", 5),
        ("Bedside Charisma", 1),
    ]);
    session.save_evaluation(added.id.clone(), labeled, CommentMap::new(), "Offer".to_string());

    let board = session.top_contenders();
    assert_eq!(board[0].name, "Elena Vasquez");
    assert_eq!(board[0].format_label, "In-Person");
    assert_eq!(board[0].overall_score, 5.0);
}

#[test]
fn the_board_truncates_at_the_limit_in_insertion_order() {
    let mut session = DashboardSession::seeded();
    session.add_candidate();
    session.add_candidate();
    let ids = scheduled_ids(&session);

    // Alternate 4.0 and 3.0 across seven candidates; only one of the three
    // 3.0 evaluations fits on the board, and it must be the earliest.
    for (offset, id) in ids.iter().enumerate() {
        let level = if offset % 2 == 0 { 4 } else { 3 };
        session.save_evaluation(
            id.clone(),
            ratings([level; 5]),
            CommentMap::new(),
            String::new(),
        );
    }

    let board = session.top_contenders();
    assert_eq!(board.len(), TOP_CONTENDERS_LIMIT);

    let scores: Vec<f64> = board.iter().map(|view| view.overall_score).collect();
    assert_eq!(scores, [4.0, 4.0, 4.0, 4.0, 3.0]);
    assert_eq!(board[4].candidate_id, ids[1]);
    assert!(board.iter().all(|view| view.candidate_id != ids[3]));
    assert!(board.iter().all(|view| view.candidate_id != ids[5]));
}

#[test]
fn schedule_export_matches_the_current_roster() {
    let mut session = DashboardSession::seeded();
    let added = session.add_candidate();
    session.update_candidate(&added.id, CandidateUpdate::Name("Elena Vasquez".to_string()));

    let file = session.schedule_export().expect("schedule serializes");

    assert_eq!(file.file_name, SCHEDULE_EXPORT_FILE);
    assert_eq!(file.contents.lines().count(), 1 + session.candidates().len());
    assert!(file.contents.contains("Elena Vasquez"));
}
