use dioxus::prelude::ReadableExt;
use lesson_core::model::{LessonStage, PollChoice};

use super::test_harness::{drive_dom, setup_view_harness, ViewHarness};
use crate::vm::LessonIntent;

fn dispatch(harness: &mut ViewHarness, intent: LessonIntent) {
    harness.handles.dispatch().call(intent);
    drive_dom(&mut harness.dom);
}

/// Poll answered, checklist picked and submitted. Lands on the review stage.
fn advance_to_review(harness: &mut ViewHarness) {
    dispatch(harness, LessonIntent::AnswerPoll(PollChoice::ReportSmoke));
    dispatch(harness, LessonIntent::ToggleChecklist(0));
    dispatch(harness, LessonIntent::ToggleChecklist(2));
    dispatch(harness, LessonIntent::SubmitChecklist);
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_starts_with_later_sections_hidden() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Introducing Independent"), "missing title in {html}");
    assert!(html.contains("drive.google.com"), "missing video embed in {html}");
    assert!(html.contains("Question 1"), "missing poll in {html}");
    assert!(html.contains("Report the smoke"), "missing poll option in {html}");
    assert!(!html.contains("Question 2"), "checklist leaked in {html}");
    assert!(!html.contains("Don’t be surprised"), "explanation leaked in {html}");
    assert!(!html.contains("Review Questions"), "review leaked in {html}");
    assert!(!html.contains("Next Lesson"), "cta leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn poll_answer_reveals_explanation_and_checklist() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();

    dispatch(&mut harness, LessonIntent::AnswerPoll(PollChoice::ContinueSurvey));
    let html = harness.render();

    assert!(html.contains("poll-btn poll-btn--picked"), "pick not highlighted in {html}");
    assert!(html.contains("Don’t be surprised"), "missing explanation in {html}");
    assert!(html.contains("[Choose all that apply]"), "missing checklist hint in {html}");
    assert!(html.contains("Check Answers"), "missing submit in {html}");
    assert!(!html.contains("Review Questions"), "review leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn repicking_the_poll_moves_the_highlight() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();

    dispatch(&mut harness, LessonIntent::AnswerPoll(PollChoice::ContinueSurvey));
    dispatch(&mut harness, LessonIntent::AnswerPoll(PollChoice::ReportSmoke));

    let state = harness.handles.state();
    assert_eq!(state.read().poll_answer(), Some(PollChoice::ReportSmoke));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_submission_changes_nothing() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();

    dispatch(&mut harness, LessonIntent::AnswerPoll(PollChoice::ReportSmoke));
    dispatch(&mut harness, LessonIntent::SubmitChecklist);
    let html = harness.render();

    assert!(html.contains("Check Answers"), "submit vanished in {html}");
    assert!(!html.contains("Review Questions"), "review leaked in {html}");
    let state = harness.handles.state();
    assert!(!state.read().checklist_submitted());
}

#[tokio::test(flavor = "current_thread")]
async fn grading_marks_rows_chips_and_feedback() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();

    dispatch(&mut harness, LessonIntent::AnswerPoll(PollChoice::ReportSmoke));
    dispatch(&mut harness, LessonIntent::ToggleChecklist(0));
    dispatch(&mut harness, LessonIntent::ToggleChecklist(3));
    dispatch(&mut harness, LessonIntent::SubmitChecklist);
    let html = harness.render();

    assert!(html.contains("checklist-row--affirmed"), "missing affirmed row in {html}");
    assert!(html.contains("GOOD"), "missing GOOD chip in {html}");
    assert!(html.contains("checklist-row--flagged"), "missing flagged row in {html}");
    assert!(html.contains("OPS"), "missing OPS chip in {html}");
    assert!(html.contains("checklist-row--missed"), "missing missed row in {html}");
    assert!(html.contains("If you chose answers A, B, or C"), "missing feedback in {html}");
    assert!(html.contains("Critical Thinking"), "missing definition box in {html}");
    assert!(html.contains("Review Questions"), "missing review block in {html}");
    assert!(!html.contains("Check Answers"), "submit still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submitted_checklist_ignores_further_toggles() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    advance_to_review(&mut harness);

    let before = harness.render();
    dispatch(&mut harness, LessonIntent::ToggleChecklist(1));
    dispatch(&mut harness, LessonIntent::SubmitChecklist);
    let after = harness.render();

    assert_eq!(before, after, "locked checklist must not re-render differently");
}

#[tokio::test(flavor = "current_thread")]
async fn both_true_false_answers_keep_the_green_panel() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    advance_to_review(&mut harness);

    dispatch(&mut harness, LessonIntent::AnswerTrueFalse(false));
    let html = harness.render();
    assert!(html.contains("Nope, it’s true."), "missing false-branch copy in {html}");
    assert!(html.contains("review-feedback--positive"), "panel not positive in {html}");
    assert!(html.contains("tf-btn--affirmed"), "true button not affirmed in {html}");

    // First answer sticks.
    dispatch(&mut harness, LessonIntent::AnswerTrueFalse(true));
    let html = harness.render();
    assert!(html.contains("Nope, it’s true."), "answer was overwritten in {html}");

    let mut harness = setup_view_harness(false);
    harness.rebuild();
    advance_to_review(&mut harness);
    dispatch(&mut harness, LessonIntent::AnswerTrueFalse(true));
    let html = harness.render();
    assert!(html.contains("Yes, that’s true."), "missing true-branch copy in {html}");
    assert!(html.contains("review-feedback--positive"), "panel not positive in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_final_pick_shows_the_correction_and_the_cta() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    advance_to_review(&mut harness);

    dispatch(&mut harness, LessonIntent::AnswerReviewChoice(2));
    let html = harness.render();

    assert!(html.contains("Close, the correct answer is A."), "missing correction in {html}");
    assert!(html.contains("review-feedback--negative"), "panel not negative in {html}");
    assert!(html.contains("review-option--affirmed"), "correct option not shown in {html}");
    assert!(html.contains("review-option--flagged"), "wrong pick not flagged in {html}");
    assert!(html.contains("Next Lesson"), "missing cta in {html}");

    // The pick is final.
    dispatch(&mut harness, LessonIntent::AnswerReviewChoice(0));
    let html = harness.render();
    assert!(html.contains("Close, the correct answer is A."), "pick was overwritten in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn correct_final_pick_praises_and_completes() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    advance_to_review(&mut harness);

    dispatch(&mut harness, LessonIntent::AnswerReviewChoice(0));
    let html = harness.render();

    assert!(html.contains("Excellent!"), "missing praise in {html}");
    assert!(html.contains("review-feedback--positive"), "panel not positive in {html}");
    assert!(html.contains("Next Lesson"), "missing cta in {html}");

    let state = harness.handles.state();
    assert_eq!(state.read().stage(), LessonStage::Complete);
}

#[tokio::test(flavor = "current_thread")]
async fn the_true_false_review_is_optional_for_completion() {
    let mut harness = setup_view_harness(false);
    harness.rebuild();
    advance_to_review(&mut harness);

    dispatch(&mut harness, LessonIntent::AnswerReviewChoice(1));
    let html = harness.render();

    assert!(html.contains("Next Lesson"), "cta should not wait on the true/false answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_bar_is_opt_in_and_tracks_steps() {
    let mut harness = setup_view_harness(true);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("progress-track"), "missing progress bar in {html}");
    assert!(html.contains("width: 0%"), "missing empty fill in {html}");

    dispatch(&mut harness, LessonIntent::AnswerPoll(PollChoice::ReportSmoke));
    let html = harness.render();
    assert!(html.contains("width: 25%"), "missing first step fill in {html}");

    let mut harness = setup_view_harness(false);
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("progress-track"), "progress bar should be off in {html}");
}
