mod content;
mod lesson;

pub use content::{
    ChecklistFeedback, ChecklistQuestion, ChoiceReview, ContentError, ExplanationCopy,
    LessonContent, PollQuestion, TrueFalseReview, VideoEmbed,
};

pub use lesson::{
    appraise_option, checklist_option_is_correct, LessonError, LessonProgress, LessonStage,
    LessonState, OptionAppraisal, PollChoice, Verdict, CHECKLIST_DISTRACTOR, CHECKLIST_LEN,
    REVIEW_CHOICE_CORRECT, REVIEW_CHOICE_LEN, TRUE_FALSE_CORRECT,
};
