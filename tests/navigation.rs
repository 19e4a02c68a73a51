//! End-to-end navigation tests: validation gating, history, skip tracking,
//! tracker events, and submission.
mod common;
use common::*;
use keiro::prelude::*;
use serde_json::json;

#[test]
fn test_scenario_a_branch_jump_skips_pages() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();

    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Moved(2)
    );
    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Moved(4)
    );

    assert_eq!(navigation.current_page(), 4);
    assert_eq!(navigation.history(), &[1, 2, 4]);
    assert_eq!(navigation.skipped_pages(), vec![3]);
    assert_eq!(navigation.active_path(), vec![1, 2, 4]);
}

#[test]
fn test_scenario_b_default_advances_linearly() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("yes"));
    let mut tracker = RecordingTracker::default();

    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Moved(2)
    );
    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Moved(3)
    );

    assert_eq!(navigation.history(), &[1, 2, 3]);
    assert!(navigation.skipped_pages().is_empty());
}

#[test]
fn test_linear_history_and_reverse_retreat() {
    let mut navigation = NavigationController::new(build(linear_form(5)));
    let answers = MapValueProvider::new();
    let mut tracker = RecordingTracker::default();

    for expected in 2..=5 {
        assert_eq!(
            navigation.advance(&answers, &AlwaysValid, &mut tracker),
            AdvanceOutcome::Moved(expected)
        );
    }
    // N forward moves leave N+1 history entries.
    assert_eq!(navigation.history().len(), 5);

    assert_eq!(navigation.retreat(&mut tracker), Some(4));
    assert_eq!(navigation.retreat(&mut tracker), Some(3));
    assert_eq!(navigation.retreat(&mut tracker), Some(2));
    assert_eq!(navigation.retreat(&mut tracker), Some(1));
    // Only the first visited page remains: no-op.
    assert_eq!(navigation.retreat(&mut tracker), None);
    assert_eq!(navigation.current_page(), 1);
}

#[test]
fn test_retreat_retraces_jumps_not_a_counter() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();

    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    assert_eq!(navigation.current_page(), 4);

    // Backward from page 4 lands on page 2, not page 3.
    assert_eq!(navigation.retreat(&mut tracker), Some(2));
    assert_eq!(navigation.retreat(&mut tracker), Some(1));
}

#[test]
fn test_validation_failure_mutates_nothing() {
    let mut navigation = NavigationController::new(build(linear_form(3)));
    let answers = MapValueProvider::new();
    let validator = RejectingValidator {
        rejected_page: 2,
        first_invalid: "consent",
    };
    let mut tracker = RecordingTracker::default();

    assert_eq!(
        navigation.advance(&answers, &validator, &mut tracker),
        AdvanceOutcome::Moved(2)
    );
    let history_before = navigation.history().to_vec();

    assert_eq!(
        navigation.advance(&answers, &validator, &mut tracker),
        AdvanceOutcome::Blocked {
            first_invalid: "consent".to_string()
        }
    );
    assert_eq!(navigation.current_page(), 2);
    assert_eq!(navigation.history(), history_before.as_slice());
    assert!(!navigation.is_submitted());
}

#[test]
fn test_tracker_events_for_branch_jump() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();

    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    navigation.advance(&answers, &AlwaysValid, &mut tracker);

    assert_eq!(
        tracker.events,
        vec![
            TrackedEvent::PageChange(2),
            TrackedEvent::BranchJump {
                from: 2,
                to: 4,
                field_id: "followup".to_string(),
                matched_value: Some(FieldValue::Text("no".to_string())),
            },
            TrackedEvent::PageChange(4),
        ]
    );
}

#[test]
fn test_plain_advance_emits_no_branch_jump() {
    let mut navigation = NavigationController::new(build(linear_form(4)));
    let answers = MapValueProvider::new();
    let mut tracker = RecordingTracker::default();

    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    assert!(tracker.branch_jumps().is_empty());
}

#[test]
fn test_submit_rule_ends_navigation() {
    let form = FormDefinition {
        pages: vec![
            page_with_field(
                "p1",
                field(
                    "eligible",
                    FieldKind::Radio,
                    Some(json!({
                        "enabled": true,
                        "rules": [ { "matchValue": "no", "action": "submit" } ],
                        "defaultAction": "nextPage"
                    })),
                ),
            ),
            plain_page("p2"),
        ],
    };
    let mut navigation = NavigationController::new(build(form));
    let answers = one_answer("eligible", json!("no"));
    let mut tracker = RecordingTracker::default();

    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Submitted
    );
    assert!(navigation.is_submitted());

    // Terminal: no further navigation in either direction.
    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Submitted
    );
    assert_eq!(navigation.retreat(&mut tracker), None);
    assert_eq!(navigation.current_page(), 1);
}

#[test]
fn test_advancing_past_the_last_page_submits() {
    let mut navigation = NavigationController::new(build(linear_form(2)));
    let answers = MapValueProvider::new();
    let mut tracker = RecordingTracker::default();

    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Moved(2)
    );
    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Submitted
    );
}

#[test]
fn test_linear_advance_onto_thank_you_page_submits() {
    let form = FormDefinition {
        pages: vec![plain_page("p1"), thank_you_page("thanks")],
    };
    let mut navigation = NavigationController::new(build(form));
    let answers = MapValueProvider::new();
    let mut tracker = RecordingTracker::default();

    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Submitted
    );
}

#[test]
fn test_current_page_stays_in_range() {
    let pages = build(branching_form());
    let total = pages.total_pages();
    let mut navigation = NavigationController::new(pages);
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();

    loop {
        let in_range =
            navigation.current_page() >= 1 && navigation.current_page() <= total;
        assert!(in_range, "current page left [1, total]");
        match navigation.advance(&answers, &AlwaysValid, &mut tracker) {
            AdvanceOutcome::Moved(_) => {}
            _ => break,
        }
    }
}

#[test]
fn test_preview_does_not_mutate_state() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();

    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    let history_before = navigation.history().to_vec();

    let preview = navigation.preview(&answers);
    assert!(matches!(preview, Transition::GoToPage { target: 4, .. }));
    assert_eq!(navigation.current_page(), 2);
    assert_eq!(navigation.history(), history_before.as_slice());
    assert!(navigation.skipped_pages().is_empty());
}

#[test]
fn test_reset_repositions_with_sole_history_entry() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();

    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    navigation.advance(&answers, &AlwaysValid, &mut tracker);

    navigation.reset(3);
    assert_eq!(navigation.current_page(), 3);
    assert_eq!(navigation.history(), &[3]);
    assert_eq!(navigation.active_path(), vec![3]);
    assert!(navigation.skipped_pages().is_empty());

    // Reset clamps an out-of-range restore target.
    navigation.reset(42);
    assert_eq!(navigation.current_page(), 4);
}

#[test]
fn test_snapshot_restore_round_trip() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();

    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    let snapshot = navigation.snapshot();

    let mut resumed = NavigationController::new(build(branching_form()));
    resumed.restore(snapshot);

    assert_eq!(resumed.current_page(), 4);
    assert_eq!(resumed.history(), &[1, 2, 4]);
    assert_eq!(resumed.active_path(), vec![1, 2, 4]);
    assert_eq!(resumed.skipped_pages(), vec![3]);
    assert_eq!(resumed.retreat(&mut tracker), Some(2));
}

#[test]
fn test_snapshot_serializes_for_host_storage() {
    let mut navigation = NavigationController::new(build(branching_form()));
    let answers = one_answer("followup", json!("no"));
    let mut tracker = RecordingTracker::default();
    navigation.advance(&answers, &AlwaysValid, &mut tracker);

    let snapshot = navigation.snapshot();
    let encoded = serde_json::to_string(&snapshot).unwrap();
    let decoded: NavigationSnapshot = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_revisiting_a_skipped_page_unskips_it() {
    let form = FormDefinition {
        pages: vec![
            plain_page("p1"),
            page_with_field(
                "p2",
                field(
                    "jump",
                    FieldKind::Select,
                    Some(json!({
                        "enabled": true,
                        "rules": [
                            { "matchValue": "far", "action": "goToPage", "targetPage": 5 },
                            { "matchValue": "back", "action": "goToPage", "targetPage": 3 }
                        ],
                        "defaultAction": "nextPage"
                    })),
                ),
            ),
            plain_page("p3"),
            plain_page("p4"),
            plain_page("p5"),
        ],
    };
    let mut navigation = NavigationController::new(build(form));
    let mut tracker = RecordingTracker::default();

    let mut answers = one_answer("jump", json!("far"));
    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    navigation.advance(&answers, &AlwaysValid, &mut tracker);
    assert_eq!(navigation.skipped_pages(), vec![3, 4]);

    // Walk back to page 2, change the answer, and take the shorter jump.
    navigation.retreat(&mut tracker);
    answers.set("jump", json!("back"));
    assert_eq!(
        navigation.advance(&answers, &AlwaysValid, &mut tracker),
        AdvanceOutcome::Moved(3)
    );
    assert_eq!(navigation.skipped_pages(), vec![4]);
    assert!(navigation.active_path().contains(&3));
}
