use dioxus::prelude::*;

use lesson_core::model::{
    ChecklistFeedback, ChecklistQuestion, ChoiceReview, ExplanationCopy, PollChoice, PollQuestion,
    TrueFalseReview, Verdict,
};

use crate::vm::{
    poll_button_class, review_feedback_class, true_false_button_class, ChecklistRowVm,
    LessonIntent, ReviewOptionVm,
};

#[component]
pub(super) fn LessonHeader(title_accent: &'static str, title_rest: &'static str) -> Element {
    rsx! {
        header { class: "lesson-header",
            h1 { class: "lesson-title",
                span { class: "lesson-title__accent", "{title_accent}" }
                br {}
                span { class: "lesson-title__rest", "{title_rest}" }
            }
            div { class: "lesson-rule" }
        }
    }
}

#[component]
pub(super) fn VideoSection(title: &'static str, url: String) -> Element {
    rsx! {
        section { class: "video-section",
            div { class: "video-frame",
                iframe {
                    class: "video-frame__iframe",
                    src: "{url}",
                    title: "{title}",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        }
    }
}

#[component]
pub(super) fn PollSection(
    question: PollQuestion,
    picked: Option<PollChoice>,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        section { class: "prompt-block",
            div { class: "prompt-heading",
                span { class: "q-icon", "?" }
                h2 { "Question 1" }
            }
            p { class: "prompt-text", "{question.prompt}" }
            div { class: "poll-grid",
                PollButton {
                    letter: "A.",
                    label: question.report_label,
                    choice: PollChoice::ReportSmoke,
                    picked,
                    on_intent,
                }
                PollButton {
                    letter: "B.",
                    label: question.continue_label,
                    choice: PollChoice::ContinueSurvey,
                    picked,
                    on_intent,
                }
            }
        }
    }
}

#[component]
fn PollButton(
    letter: &'static str,
    label: &'static str,
    choice: PollChoice,
    picked: Option<PollChoice>,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        button {
            class: "{poll_button_class(choice, picked)}",
            r#type: "button",
            onclick: move |_| on_intent.call(LessonIntent::AnswerPoll(choice)),
            span { class: "poll-btn__letter", "{letter}" }
            span { " {label}" }
        }
    }
}

#[component]
pub(super) fn ExplanationSection(copy: ExplanationCopy) -> Element {
    rsx! {
        section { class: "callout callout--accent animate-fade", id: "lesson-explanation",
            p { class: "callout-lead", "{copy.lead}" }
            p { "{copy.background}" }
            div { class: "findings",
                p { class: "findings-heading", "{copy.findings_heading}" }
                ul { class: "finding-list",
                    for (index, finding) in copy.findings.into_iter().enumerate() {
                        li { key: "{index}", "{finding}" }
                    }
                }
            }
            p { "{copy.takeaway}" }
            p { class: "warning-note", "{copy.warning}" }
            p { "{copy.definition}" }
        }
    }
}

#[component]
pub(super) fn ChecklistSection(
    question: ChecklistQuestion,
    rows: Vec<ChecklistRowVm>,
    submitted: bool,
    can_submit: bool,
    feedback: ChecklistFeedback,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        section { class: "prompt-block prompt-block--ruled animate-fade",
            div { class: "prompt-heading",
                span { class: "q-icon", "?" }
                h2 { "Question 2" }
            }
            p { class: "prompt-text",
                "{question.prompt}"
                br {}
                span { class: "prompt-hint", "{question.hint}" }
            }
            div { class: "checklist",
                for (index, row) in rows.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "{row.row_class}",
                        r#type: "button",
                        disabled: submitted,
                        onclick: move |_| on_intent.call(LessonIntent::ToggleChecklist(index)),
                        span { class: "{row.marker_class}",
                            if let Some(glyph) = row.marker_glyph {
                                "{glyph}"
                            }
                        }
                        span { class: "checklist-label", "{row.label}" }
                        if let Some(chip) = row.chip {
                            span { class: "{chip.class()}", "{chip.label()}" }
                        }
                    }
                }
            }
            if submitted {
                ChecklistFeedbackBlock { feedback }
            } else {
                button {
                    class: "submit-btn",
                    id: "lesson-submit",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: move |_| on_intent.call(LessonIntent::SubmitChecklist),
                    "{question.submit_label}"
                }
            }
        }
    }
}

#[component]
fn ChecklistFeedbackBlock(feedback: ChecklistFeedback) -> Element {
    rsx! {
        div { class: "feedback animate-fade", id: "lesson-feedback",
            div { class: "callout callout--teal",
                p { class: "callout-lead", "{feedback.lead}" }
                p { "{feedback.pivot}" }
                div { class: "definition-box",
                    p { class: "definition-box__title", "{feedback.definition_title}" }
                    p { "{feedback.definition_body}" }
                }
                p { "{feedback.expectations_intro}" }
                ul { class: "finding-list",
                    for (index, item) in feedback.expectations.into_iter().enumerate() {
                        li { key: "{index}", "{item}" }
                    }
                }
            }
            div { class: "traditions",
                p { "{feedback.traditions_intro}" }
                ul { class: "tradition-list",
                    for (index, item) in feedback.traditions.into_iter().enumerate() {
                        li { key: "{index}",
                            span { class: "dot" }
                            "{item}"
                        }
                    }
                }
                div { class: "outlook",
                    span { class: "info-icon", "i" }
                    p { class: "outlook__text", "{feedback.outlook}" }
                }
            }
        }
    }
}

#[component]
pub(super) fn ReviewSection(
    heading: &'static str,
    true_false: TrueFalseReview,
    true_false_answer: Option<bool>,
    choice: ChoiceReview,
    choice_rows: Vec<ReviewOptionVm>,
    choice_verdict: Option<Verdict>,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    rsx! {
        section { class: "review-block animate-fade",
            h2 { class: "review-heading", "{heading}" }
            TrueFalseBlock { review: true_false, answered: true_false_answer, on_intent }
            ChoiceReviewBlock {
                review: choice,
                rows: choice_rows,
                verdict: choice_verdict,
                on_intent,
            }
        }
    }
}

#[component]
fn TrueFalseBlock(
    review: TrueFalseReview,
    answered: Option<bool>,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    let locked = answered.is_some();
    rsx! {
        div { class: "review-item",
            p { class: "review-prompt",
                span { class: "review-qtag", "Q1:" }
                "{review.prompt}"
            }
            div { class: "tf-row",
                button {
                    class: "{true_false_button_class(true, locked)}",
                    r#type: "button",
                    disabled: locked,
                    onclick: move |_| on_intent.call(LessonIntent::AnswerTrueFalse(true)),
                    "{review.true_label}"
                }
                button {
                    class: "{true_false_button_class(false, locked)}",
                    r#type: "button",
                    disabled: locked,
                    onclick: move |_| on_intent.call(LessonIntent::AnswerTrueFalse(false)),
                    "{review.false_label}"
                }
            }
            if let Some(answer) = answered {
                div { class: "review-feedback review-feedback--positive",
                    "{review.feedback_for(answer)}"
                }
            }
        }
    }
}

#[component]
fn ChoiceReviewBlock(
    review: ChoiceReview,
    rows: Vec<ReviewOptionVm>,
    verdict: Option<Verdict>,
    on_intent: EventHandler<LessonIntent>,
) -> Element {
    let locked = verdict.is_some();
    rsx! {
        div { class: "review-item",
            p { class: "review-prompt",
                span { class: "review-qtag", "Q2:" }
                "{review.prompt}"
            }
            div { class: "checklist",
                for (index, row) in rows.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "{row.row_class}",
                        r#type: "button",
                        disabled: locked,
                        onclick: move |_| on_intent.call(LessonIntent::AnswerReviewChoice(index)),
                        span { class: "review-option__letter", "{row.letter}." }
                        span { "{row.label}" }
                    }
                }
            }
            if let Some(verdict) = verdict {
                div { class: "{review_feedback_class(verdict)}",
                    span { class: "feedback-glyph",
                        if verdict.is_correct() { "✓" } else { "✕" }
                    }
                    p {
                        if verdict.is_correct() {
                            "{review.correct_feedback}"
                        } else {
                            "{review.incorrect_feedback}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn NextLessonCta(label: &'static str) -> Element {
    rsx! {
        div { class: "cta-row animate-rise", id: "lesson-next",
            // Affordance only for now. Wiring it to a second lesson means
            // adding that lesson's route first.
            button { class: "cta", r#type: "button",
                span { "{label}" }
                span { class: "cta__arrow", "→" }
            }
        }
    }
}
