use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lesson_core::model::LessonContent;

use crate::context::{build_app_context, UiApp};
use crate::views::lesson::LessonTestHandles;
use crate::views::LessonView;

struct TestApp {
    content: Arc<LessonContent>,
    progress_bar: bool,
}

impl UiApp for TestApp {
    fn lesson_content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.content)
    }

    fn progress_bar_enabled(&self) -> bool {
        self.progress_bar
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: LessonTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { LessonView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: LessonTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(progress_bar: bool) -> ViewHarness {
    let content = Arc::new(LessonContent::smoke_filled_room().expect("built-in lesson"));
    let handles = LessonTestHandles::default();
    let app = Arc::new(TestApp {
        content,
        progress_bar,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
