//! Domain model for the lesson screen: answer state, reveal gating,
//! grading, and the fixed lesson content. No I/O, no UI types.

#![forbid(unsafe_code)]

pub mod model;

pub use model::{LessonContent, LessonState};
