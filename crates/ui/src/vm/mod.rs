mod lesson_vm;

pub use lesson_vm::{
    apply_intent, checklist_rows, option_letter, poll_button_class, review_choice_rows,
    review_feedback_class, true_false_button_class, ChecklistChip, ChecklistRowVm, LessonIntent,
    ReviewOptionVm,
};
