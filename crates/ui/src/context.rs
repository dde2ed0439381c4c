use std::sync::Arc;

use lesson_core::model::LessonContent;

pub trait UiApp: Send + Sync {
    fn lesson_content(&self) -> Arc<LessonContent>;
    fn progress_bar_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    lesson_content: Arc<LessonContent>,
    progress_bar_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            lesson_content: app.lesson_content(),
            progress_bar_enabled: app.progress_bar_enabled(),
        }
    }

    #[must_use]
    pub fn lesson_content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.lesson_content)
    }

    #[must_use]
    pub fn progress_bar_enabled(&self) -> bool {
        self.progress_bar_enabled
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
