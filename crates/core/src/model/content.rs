use thiserror::Error;
use url::Url;

use crate::model::lesson::{PollChoice, CHECKLIST_LEN, REVIEW_CHOICE_LEN};

//
// ─── ERRORS (content validation) ───────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Video URL is not a valid absolute URL: {0}")]
    InvalidVideoUrl(String),
}

//
// ─── VIDEO ─────────────────────────────────────────────────────────────────────
//

/// The embedded clip shown above the questions, framed portrait (9:16).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    title: &'static str,
    url: Url,
}

impl VideoEmbed {
    /// # Errors
    ///
    /// `InvalidVideoUrl` when `raw_url` does not parse as an absolute URL.
    pub fn new(title: &'static str, raw_url: &str) -> Result<Self, ContentError> {
        let url =
            Url::parse(raw_url).map_err(|_| ContentError::InvalidVideoUrl(raw_url.to_owned()))?;
        Ok(Self { title, url })
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

//
// ─── QUESTION COPY ─────────────────────────────────────────────────────────────
//

/// The ungraded warm-up poll under the video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollQuestion {
    pub prompt: &'static str,
    pub report_label: &'static str,
    pub continue_label: &'static str,
}

impl PollQuestion {
    #[must_use]
    pub fn label_for(&self, choice: PollChoice) -> &'static str {
        match choice {
            PollChoice::ReportSmoke => self.report_label,
            PollChoice::ContinueSurvey => self.continue_label,
        }
    }
}

/// The explanation block revealed by the poll answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationCopy {
    pub lead: &'static str,
    pub background: &'static str,
    pub findings_heading: &'static str,
    pub findings: [&'static str; 3],
    pub takeaway: &'static str,
    pub warning: &'static str,
    pub definition: &'static str,
}

/// The choose-all-that-apply checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistQuestion {
    pub prompt: &'static str,
    pub hint: &'static str,
    pub options: [&'static str; CHECKLIST_LEN],
    pub submit_label: &'static str,
}

/// The long-form feedback revealed by checklist submission. The copy is
/// fixed; it does not react to which options were picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistFeedback {
    pub lead: &'static str,
    pub pivot: &'static str,
    pub definition_title: &'static str,
    pub definition_body: &'static str,
    pub expectations_intro: &'static str,
    pub expectations: [&'static str; 3],
    pub traditions_intro: &'static str,
    pub traditions: [&'static str; 5],
    pub outlook: &'static str,
}

/// The true/false review question, with one feedback line per answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalseReview {
    pub prompt: &'static str,
    pub true_label: &'static str,
    pub false_label: &'static str,
    pub answered_true_feedback: &'static str,
    pub answered_false_feedback: &'static str,
}

impl TrueFalseReview {
    #[must_use]
    pub fn feedback_for(&self, answer: bool) -> &'static str {
        if answer {
            self.answered_true_feedback
        } else {
            self.answered_false_feedback
        }
    }
}

/// The final single-pick review question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceReview {
    pub prompt: &'static str,
    pub options: [&'static str; REVIEW_CHOICE_LEN],
    pub correct_feedback: &'static str,
    pub incorrect_feedback: &'static str,
}

//
// ─── LESSON CONTENT ────────────────────────────────────────────────────────────
//

/// Everything the lesson screen renders, assembled once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContent {
    pub title_accent: &'static str,
    pub title_rest: &'static str,
    pub video: VideoEmbed,
    pub poll: PollQuestion,
    pub explanation: ExplanationCopy,
    pub checklist: ChecklistQuestion,
    pub checklist_feedback: ChecklistFeedback,
    pub review_heading: &'static str,
    pub true_false: TrueFalseReview,
    pub choice_review: ChoiceReview,
    pub next_lesson_label: &'static str,
}

impl LessonContent {
    /// The built-in "Smoke Filled Room" lesson.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded video URL does not validate.
    pub fn smoke_filled_room() -> Result<Self, ContentError> {
        Ok(Self {
            title_accent: "Introducing Independent",
            title_rest: "And Critical Thinking",
            video: VideoEmbed::new(
                "Smoke Filled Room Experiment",
                "https://drive.google.com/file/d/136mOSiGLAGqqenq2rPDV68wPrEuxjCWD/preview",
            )?,
            poll: PollQuestion {
                prompt: "If you were the student in the video, would you report the smoke \
                         or continue taking the survey?",
                report_label: "Report the smoke",
                continue_label: "Continue taking the survey",
            },
            explanation: ExplanationCopy {
                lead: "Don’t be surprised, but the actual answer isn’t so simple.",
                background: "According to a famous study known as the Smoke Filled Room \
                             Experiment, your response would depend on a) whether or not you \
                             are alone in the room and b) assuming you’re not alone, whether \
                             or not the other participants are also wondering what to do.",
                findings_heading: "In the original experiment:",
                findings: [
                    "When alone in the room, 75% of participants reported smoke",
                    "When seated with two other participants, 38% reported smoke",
                    "When seated with two people the researchers instructed not to respond, \
                     only 10% reported smoke",
                ],
                takeaway: "Those findings demonstrate that most people need social proof, \
                           they look to others when deciding how to interpret a situation; \
                           and that leads to a diffusion of responsibility, meaning they \
                           won’t act before someone else does (also called “Bystander \
                           Effect”).",
                warning: "That doesn’t bode well for independent thinking.",
                definition: "Independent thinking is the ability to form your own ideas as \
                             opposed to adopting the views of others, and, as you will learn \
                             later in this unit, is intrinsic to living a Jewish life.",
            },
            checklist: ChecklistQuestion {
                prompt: "Even if you’re an independent thinker, how do you know you’re right?",
                hint: "[Choose all that apply]",
                options: [
                    "You look for evidence before making a decision",
                    "You test your ideas by asking, “What else could be an explanation?”",
                    "You consider whether your answer fits the situation",
                    "You assume you’re right because you don’t follow the crowd",
                ],
                submit_label: "Check Answers",
            },
            checklist_feedback: ChecklistFeedback {
                lead: "If you chose answers A, B, or C, you’re on the right track, as \
                       opposed to D, which is maybe just a testament to your rebellious \
                       nature (not necessarily a bad thing, but also not necessarily an \
                       indicator of truthfulness).",
                pivot: "The point here is that in addition to being an independent thinker, \
                        you also want to be a critical thinker.",
                definition_title: "Critical Thinking",
                definition_body: "The ability to analyze ideas, claims, and information; to \
                                  evaluate evidence, spot assumptions, and test logic. You \
                                  judge the veracity of whatever it is you’re examining.",
                expectations_intro: "With that in mind, in this unit, you will learn that, \
                                     as a Jew, you are expected to be both an independent \
                                     and critical thinker. That means:",
                expectations: [
                    "Being comfortable asking uncomfortable questions",
                    "Being independent-minded",
                    "Gathering evidence, taking logical steps, and coming to conclusions on \
                     your own",
                ],
                traditions_intro: "Both independent and critical thinking have starring \
                                   roles in Jewish scholarship and tradition, and in this \
                                   unit you will discover that those ways of thinking are:",
                traditions: [
                    "The point of the first of the Ten Commandments",
                    "Taken as a given when Jewish ideas are taught and explained",
                    "Taught to Jewish children at an early age",
                    "Incorporated into Jewish holiday observance and customs",
                    "An important part of living a Jewish life",
                ],
                outlook: "In the next lessons, you will explore the ideas of social \
                          conditioning, leaps of faith, belief, knowledge, and what — within \
                          the context of being an independent and critical thinker — is \
                          considered the foundation for Jewish thought.",
            },
            review_heading: "Review Questions",
            true_false: TrueFalseReview {
                prompt: "True or False: Following the crowd can sometimes prevent \
                         independent thinking because you may rely on others to interpret a \
                         situation instead of forming your own view.",
                true_label: "True",
                false_label: "False",
                answered_true_feedback: "Yes, that’s true. Following the crowd could be an \
                                         impediment to independent thought.",
                // Kept in the affirming green panel on purpose: the screen corrects the
                // learner without scolding. TODO: confirm with the content owner whether
                // the False branch should get corrective styling instead.
                answered_false_feedback: "Nope, it’s true. Following the crowd could be an \
                                          impediment to independent thought.",
            },
            choice_review: ChoiceReview {
                prompt: "You come up with a strong initial explanation for why something \
                         happened, but you want to avoid jumping to conclusions. What’s the \
                         best way to think more critically about it?",
                options: [
                    "Ask yourself what assumptions you’re making and whether the evidence \
                     actually supports them",
                    "Stick with your first explanation because it “feels right”",
                    "Look for someone else’s opinion and use that as your guide",
                    "Dismiss alternative explanations so you don’t get confused",
                ],
                correct_feedback: "Excellent! Look at your assumptions and see if the \
                                   evidence supports them.",
                incorrect_feedback: "Close, the correct answer is A. Ask yourself what \
                                     assumptions you’re making and whether the evidence \
                                     actually supports them.",
            },
            next_lesson_label: "Next Lesson",
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
