use thiserror::Error;

//
// ─── CONSTANTS ────────────────────────────────────────────────────────────────
//

/// Number of options in the choose-all-that-apply checklist.
pub const CHECKLIST_LEN: usize = 4;

/// Index of the checklist distractor, the only option that is not correct.
pub const CHECKLIST_DISTRACTOR: usize = 3;

/// Number of options in the final review question.
pub const REVIEW_CHOICE_LEN: usize = 4;

/// Index of the correct option of the final review question.
pub const REVIEW_CHOICE_CORRECT: usize = 0;

/// The correct value of the true/false review question.
pub const TRUE_FALSE_CORRECT: bool = true;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors from lesson progression transitions.
///
/// Every variant leaves the state untouched. The screen keeps invalid
/// transitions unreachable (hidden sections, disabled buttons), so callers
/// that still hit one may discard the error; the state layer is the
/// authority either way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LessonError {
    #[error("Option index {0} is out of range.")]
    OptionOutOfRange(usize),

    #[error("Selections are locked once submitted.")]
    SelectionsLocked,

    #[error("Cannot submit an empty selection.")]
    EmptySubmission,

    #[error("Selections were already submitted.")]
    AlreadySubmitted,

    #[error("Question was already answered.")]
    AlreadyAnswered,
}

//
// ─── ANSWER TYPES ─────────────────────────────────────────────────────────────
//

/// The two reactions offered by the warm-up poll under the video.
///
/// Neither is graded; the poll exists to commit the learner to a position
/// before the explanation lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollChoice {
    ReportSmoke,
    ContinueSurvey,
}

/// Outcome of a graded single-answer question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// How a single checklist option renders once the checklist is graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAppraisal {
    /// Selected and correct.
    AffirmedCorrect,
    /// Selected and incorrect.
    FlaggedMistake,
    /// Correct but left unselected.
    MissedCorrect,
    /// Incorrect and left alone.
    Dimmed,
}

/// Classifies one graded option from its selection and correctness.
#[must_use]
pub fn appraise_option(selected: bool, correct: bool) -> OptionAppraisal {
    match (selected, correct) {
        (true, true) => OptionAppraisal::AffirmedCorrect,
        (true, false) => OptionAppraisal::FlaggedMistake,
        (false, true) => OptionAppraisal::MissedCorrect,
        (false, false) => OptionAppraisal::Dimmed,
    }
}

/// Whether a checklist option counts as correct.
#[must_use]
pub fn checklist_option_is_correct(index: usize) -> bool {
    index != CHECKLIST_DISTRACTOR
}

//
// ─── STAGE ────────────────────────────────────────────────────────────────────
//

/// The furthest section group revealed so far.
///
/// Derived from answers, never stored: a section group becomes visible only
/// when every earlier answer is terminal, so sections cannot be skipped no
/// matter how transitions are interleaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LessonStage {
    /// Only the video and the poll are open.
    Poll,
    /// The explanation and the checklist are revealed.
    Explanation,
    /// Graded checklist feedback and both review questions are revealed.
    Review,
    /// The next-lesson call-to-action is revealed.
    Complete,
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Completed-step counter behind the cosmetic progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonProgress {
    completed: u8,
}

impl LessonProgress {
    /// Steps that count: poll answered, checklist submitted, and each
    /// review question answered.
    pub const TOTAL_STEPS: u8 = 4;

    #[must_use]
    pub fn completed(self) -> u8 {
        self.completed
    }

    /// Completed share in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.completed) / f32::from(Self::TOTAL_STEPS)
    }

    /// Completed share as a whole percentage, for width styling.
    #[must_use]
    pub fn percent(self) -> u8 {
        self.completed * (100 / Self::TOTAL_STEPS)
    }
}

//
// ─── LESSON STATE ─────────────────────────────────────────────────────────────
//

/// Answer state for the four prompts of the lesson screen.
///
/// Created fresh when the screen mounts, mutated synchronously by
/// user-input events, discarded on unmount. Nothing here is persisted.
/// Everything the screen shows — visibility, grading, progress — is a pure
/// function of this record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonState {
    poll_answer: Option<PollChoice>,
    checklist_selected: [bool; CHECKLIST_LEN],
    checklist_submitted: bool,
    true_false_answer: Option<bool>,
    review_choice: Option<usize>,
}

impl LessonState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    //
    // ─── TRANSITIONS ─────────────────────────────────────────────────────
    //

    /// Records the poll reaction. There is no lock: picking again before
    /// moving on simply overwrites the earlier choice.
    pub fn answer_poll(&mut self, choice: PollChoice) {
        self.poll_answer = Some(choice);
    }

    /// Flips membership of `index` in the checklist selection.
    ///
    /// # Errors
    ///
    /// `OptionOutOfRange` for an unknown index, `SelectionsLocked` once the
    /// checklist has been submitted.
    pub fn toggle_checklist(&mut self, index: usize) -> Result<(), LessonError> {
        if index >= CHECKLIST_LEN {
            return Err(LessonError::OptionOutOfRange(index));
        }
        if self.checklist_submitted {
            return Err(LessonError::SelectionsLocked);
        }
        self.checklist_selected[index] = !self.checklist_selected[index];
        Ok(())
    }

    /// Freezes the checklist selection and unlocks grading.
    ///
    /// # Errors
    ///
    /// `EmptySubmission` when nothing is selected, `AlreadySubmitted` on a
    /// repeat call.
    pub fn submit_checklist(&mut self) -> Result<(), LessonError> {
        if self.checklist_submitted {
            return Err(LessonError::AlreadySubmitted);
        }
        if self.selected_count() == 0 {
            return Err(LessonError::EmptySubmission);
        }
        self.checklist_submitted = true;
        Ok(())
    }

    /// Records the true/false review answer, once.
    ///
    /// # Errors
    ///
    /// `AlreadyAnswered` once a value has landed.
    pub fn answer_true_false(&mut self, value: bool) -> Result<(), LessonError> {
        if self.true_false_answer.is_some() {
            return Err(LessonError::AlreadyAnswered);
        }
        self.true_false_answer = Some(value);
        Ok(())
    }

    /// Records the final review pick, once.
    ///
    /// # Errors
    ///
    /// `OptionOutOfRange` for an unknown index, `AlreadyAnswered` once a
    /// pick has landed.
    pub fn answer_review_choice(&mut self, index: usize) -> Result<(), LessonError> {
        if index >= REVIEW_CHOICE_LEN {
            return Err(LessonError::OptionOutOfRange(index));
        }
        if self.review_choice.is_some() {
            return Err(LessonError::AlreadyAnswered);
        }
        self.review_choice = Some(index);
        Ok(())
    }

    //
    // ─── READ ACCESS ─────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn poll_answer(&self) -> Option<PollChoice> {
        self.poll_answer
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.checklist_selected.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.checklist_selected.iter().filter(|on| **on).count()
    }

    #[must_use]
    pub fn checklist_submitted(&self) -> bool {
        self.checklist_submitted
    }

    /// Whether the submit affordance should be live.
    #[must_use]
    pub fn can_submit_checklist(&self) -> bool {
        !self.checklist_submitted && self.selected_count() > 0
    }

    #[must_use]
    pub fn true_false_answer(&self) -> Option<bool> {
        self.true_false_answer
    }

    #[must_use]
    pub fn review_choice(&self) -> Option<usize> {
        self.review_choice
    }

    //
    // ─── DERIVED VIEWS ───────────────────────────────────────────────────
    //

    /// The reveal gate. Each arm requires every earlier answer to be
    /// terminal, so the ordering holds for any call sequence.
    #[must_use]
    pub fn stage(&self) -> LessonStage {
        if self.poll_answer.is_none() {
            return LessonStage::Poll;
        }
        if !self.checklist_submitted {
            return LessonStage::Explanation;
        }
        if self.review_choice.is_none() {
            return LessonStage::Review;
        }
        LessonStage::Complete
    }

    /// Per-option grading of the checklist. `None` until submitted.
    #[must_use]
    pub fn checklist_appraisals(&self) -> Option<[OptionAppraisal; CHECKLIST_LEN]> {
        if !self.checklist_submitted {
            return None;
        }
        let mut out = [OptionAppraisal::Dimmed; CHECKLIST_LEN];
        for (index, slot) in out.iter_mut().enumerate() {
            *slot = appraise_option(
                self.checklist_selected[index],
                checklist_option_is_correct(index),
            );
        }
        Some(out)
    }

    /// Verdict for the true/false review. `None` until answered.
    #[must_use]
    pub fn true_false_verdict(&self) -> Option<Verdict> {
        self.true_false_answer.map(|answer| {
            if answer == TRUE_FALSE_CORRECT {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            }
        })
    }

    /// Verdict for the final review pick. `None` until answered.
    #[must_use]
    pub fn review_choice_verdict(&self) -> Option<Verdict> {
        self.review_choice.map(|pick| {
            if pick == REVIEW_CHOICE_CORRECT {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            }
        })
    }

    #[must_use]
    pub fn progress(&self) -> LessonProgress {
        let steps = [
            self.poll_answer.is_some(),
            self.checklist_submitted,
            self.true_false_answer.is_some(),
            self.review_choice.is_some(),
        ];
        let completed = steps.iter().filter(|done| **done).count() as u8;
        LessonProgress { completed }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
