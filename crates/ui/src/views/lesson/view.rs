use dioxus::document::eval;
use dioxus::prelude::*;

use lesson_core::model::{LessonStage, LessonState, PollChoice, REVIEW_CHOICE_CORRECT};

use crate::context::AppContext;
use crate::vm::{apply_intent, checklist_rows, review_choice_rows, LessonIntent};

use super::scripts::scroll_into_view_script;
use super::sections::{
    ChecklistSection, ExplanationSection, LessonHeader, NextLessonCta, PollSection, ReviewSection,
    VideoSection,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn LessonView() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.lesson_content();
    let progress_enabled = ctx.progress_bar_enabled();

    let state = use_signal(LessonState::new);
    let mut last_scroll_poll = use_signal(|| None::<PollChoice>);
    let mut last_scroll_submitted = use_signal(|| false);
    let mut last_scroll_review = use_signal(|| None::<usize>);

    // Each newly revealed section gets scrolled into view once its trigger
    // field changes. The scripts defer past the reveal animation and ignore
    // targets that are already gone.
    use_effect(move || {
        let (poll, submitted, review) = {
            let state = state.read();
            (
                state.poll_answer(),
                state.checklist_submitted(),
                state.review_choice(),
            )
        };
        if last_scroll_poll() == poll
            && last_scroll_submitted() == submitted
            && last_scroll_review() == review
        {
            return;
        }
        if poll.is_some() && last_scroll_poll() != poll {
            let _ = eval(&scroll_into_view_script("lesson-explanation"));
        }
        if submitted && !last_scroll_submitted() {
            let _ = eval(&scroll_into_view_script("lesson-feedback"));
        }
        if review.is_some() && last_scroll_review() != review {
            let _ = eval(&scroll_into_view_script("lesson-next"));
        }
        last_scroll_poll.set(poll);
        last_scroll_submitted.set(submitted);
        last_scroll_review.set(review);
    });

    let dispatch_intent = use_callback(move |intent: LessonIntent| {
        let mut state = state;
        apply_intent(&mut state.write(), intent);
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent, state);
            }
        }
    }

    let state_read = state.read();
    let stage = state_read.stage();
    let poll_picked = state_read.poll_answer();
    let submitted = state_read.checklist_submitted();
    let can_submit = state_read.can_submit_checklist();
    let rows = checklist_rows(&content.checklist, &state_read);
    let tf_answer = state_read.true_false_answer();
    let choice_verdict = state_read.review_choice_verdict();
    let review_rows = review_choice_rows(
        &content.choice_review.options,
        REVIEW_CHOICE_CORRECT,
        state_read.review_choice(),
    );
    let progress_percent = state_read.progress().percent();

    rsx! {
        section { class: "lesson-card animate-rise",
            if progress_enabled {
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {progress_percent}%" }
                }
            }
            LessonHeader {
                title_accent: content.title_accent,
                title_rest: content.title_rest,
            }
            VideoSection {
                title: content.video.title(),
                url: content.video.url().to_string(),
            }
            div { class: "lesson-flow",
                PollSection {
                    question: content.poll.clone(),
                    picked: poll_picked,
                    on_intent: dispatch_intent,
                }
                if stage >= LessonStage::Explanation {
                    ExplanationSection { copy: content.explanation.clone() }
                    ChecklistSection {
                        question: content.checklist.clone(),
                        rows,
                        submitted,
                        can_submit,
                        feedback: content.checklist_feedback.clone(),
                        on_intent: dispatch_intent,
                    }
                }
                if stage >= LessonStage::Review {
                    ReviewSection {
                        heading: content.review_heading,
                        true_false: content.true_false.clone(),
                        true_false_answer: tf_answer,
                        choice: content.choice_review.clone(),
                        choice_rows: review_rows,
                        choice_verdict,
                        on_intent: dispatch_intent,
                    }
                }
                if stage == LessonStage::Complete {
                    NextLessonCta { label: content.next_lesson_label }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    state: Rc<RefCell<Option<Signal<LessonState>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LessonIntent>, state: Signal<LessonState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn state(&self) -> Signal<LessonState> {
        (*self.state.borrow()).expect("lesson state registered")
    }
}
