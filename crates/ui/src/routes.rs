use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::LessonView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LessonView)] Lesson {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        // Dark backdrop with the lesson card floating on top.
        div { class: "backdrop",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
