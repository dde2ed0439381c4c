use lesson_core::model::{
    ChecklistQuestion, LessonState, OptionAppraisal, PollChoice, Verdict, CHECKLIST_LEN,
};

//
// ─── INTENTS ──────────────────────────────────────────────────────────────────
//

/// Every way user input can change the lesson state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    AnswerPoll(PollChoice),
    ToggleChecklist(usize),
    SubmitChecklist,
    AnswerTrueFalse(bool),
    AnswerReviewChoice(usize),
}

/// Applies one intent to the state. The state machine rejects re-entry and
/// out-of-range indices; a rejected intent leaves the view unchanged, which
/// is exactly what the hidden or locked control promised.
pub fn apply_intent(state: &mut LessonState, intent: LessonIntent) {
    match intent {
        LessonIntent::AnswerPoll(choice) => state.answer_poll(choice),
        LessonIntent::ToggleChecklist(index) => {
            let _ = state.toggle_checklist(index);
        }
        LessonIntent::SubmitChecklist => {
            let _ = state.submit_checklist();
        }
        LessonIntent::AnswerTrueFalse(value) => {
            let _ = state.answer_true_false(value);
        }
        LessonIntent::AnswerReviewChoice(index) => {
            let _ = state.answer_review_choice(index);
        }
    }
}

//
// ─── PRESENTATION MAPPING ─────────────────────────────────────────────────────
//

/// Result chip shown at the right edge of a graded checklist row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecklistChip {
    Good,
    Ops,
}

impl ChecklistChip {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ChecklistChip::Good => "GOOD",
            ChecklistChip::Ops => "OPS",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ChecklistChip::Good => "chip chip--good",
            ChecklistChip::Ops => "chip chip--ops",
        }
    }
}

/// One checklist row, fully resolved for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistRowVm {
    pub label: &'static str,
    pub row_class: &'static str,
    pub marker_class: &'static str,
    pub marker_glyph: Option<&'static str>,
    pub chip: Option<ChecklistChip>,
}

/// Maps the checklist to row view-models. Before submission rows track the
/// live selection; afterwards they carry the graded styling.
#[must_use]
pub fn checklist_rows(question: &ChecklistQuestion, state: &LessonState) -> Vec<ChecklistRowVm> {
    let appraisals = state.checklist_appraisals();
    (0..CHECKLIST_LEN)
        .map(|index| {
            let label = question.options[index];
            match appraisals {
                None => {
                    if state.is_selected(index) {
                        ChecklistRowVm {
                            label,
                            row_class: "checklist-row checklist-row--picked",
                            marker_class: "checklist-marker checklist-marker--picked",
                            marker_glyph: Some("✓"),
                            chip: None,
                        }
                    } else {
                        ChecklistRowVm {
                            label,
                            row_class: "checklist-row",
                            marker_class: "checklist-marker",
                            marker_glyph: None,
                            chip: None,
                        }
                    }
                }
                Some(appraisals) => match appraisals[index] {
                    OptionAppraisal::AffirmedCorrect => ChecklistRowVm {
                        label,
                        row_class: "checklist-row checklist-row--affirmed",
                        marker_class: "checklist-marker checklist-marker--affirmed",
                        marker_glyph: Some("✓"),
                        chip: Some(ChecklistChip::Good),
                    },
                    OptionAppraisal::FlaggedMistake => ChecklistRowVm {
                        label,
                        row_class: "checklist-row checklist-row--flagged",
                        marker_class: "checklist-marker checklist-marker--flagged",
                        marker_glyph: Some("✕"),
                        chip: Some(ChecklistChip::Ops),
                    },
                    OptionAppraisal::MissedCorrect => ChecklistRowVm {
                        label,
                        row_class: "checklist-row checklist-row--missed",
                        marker_class: "checklist-marker",
                        marker_glyph: None,
                        chip: None,
                    },
                    OptionAppraisal::Dimmed => ChecklistRowVm {
                        label,
                        row_class: "checklist-row checklist-row--dimmed",
                        marker_class: "checklist-marker",
                        marker_glyph: None,
                        chip: None,
                    },
                },
            }
        })
        .collect()
}

/// One option row of the final review question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewOptionVm {
    pub letter: char,
    pub label: &'static str,
    pub row_class: &'static str,
}

/// Maps the final review options. Once answered, the correct option is
/// highlighted whether or not it was picked; a wrong pick is flagged and the
/// rest fade out.
#[must_use]
pub fn review_choice_rows(
    options: &[&'static str],
    correct_index: usize,
    picked: Option<usize>,
) -> Vec<ReviewOptionVm> {
    options
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let row_class = match picked {
                None => "review-option",
                Some(_) if index == correct_index => "review-option review-option--affirmed",
                Some(picked) if index == picked => "review-option review-option--flagged",
                Some(_) => "review-option review-option--dimmed",
            };
            ReviewOptionVm {
                letter: option_letter(index),
                label,
                row_class,
            }
        })
        .collect()
}

/// Letter marker for a fixed option list ("A.", "B.", ...).
#[must_use]
pub fn option_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

#[must_use]
pub fn poll_button_class(choice: PollChoice, picked: Option<PollChoice>) -> &'static str {
    if picked == Some(choice) {
        "poll-btn poll-btn--picked"
    } else {
        "poll-btn"
    }
}

/// After the true/false review is answered, the "True" button is highlighted
/// as the right answer no matter which button was pressed.
#[must_use]
pub fn true_false_button_class(is_true_button: bool, answered: bool) -> &'static str {
    if !answered {
        "tf-btn"
    } else if is_true_button {
        "tf-btn tf-btn--affirmed"
    } else {
        "tf-btn tf-btn--dimmed"
    }
}

#[must_use]
pub fn review_feedback_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Correct => "review-feedback review-feedback--positive",
        Verdict::Incorrect => "review-feedback review-feedback--negative",
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
