/// Delay before scrolling so the reveal animation has settled and layout is
/// final. Matches the fade-in duration order of magnitude, not tied to it.
const SCROLL_SETTLE_MS: u32 = 300;

/// Smooth-scrolls the element with `target_id` into view after a short
/// settle delay. The element may be gone by the time the timer fires (view
/// torn down), so the lookup result is guarded.
pub(super) fn scroll_into_view_script(target_id: &str) -> String {
    format!(
        r#"(function() {{
            setTimeout(() => {{
                const el = document.getElementById({target_id:?});
                if (el) el.scrollIntoView({{ behavior: "smooth", block: "start" }});
            }}, {delay});
        }})();"#,
        target_id = target_id,
        delay = SCROLL_SETTLE_MS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_quotes_the_target_and_guards_the_lookup() {
        let js = scroll_into_view_script("lesson-next");
        assert!(js.contains(r#"getElementById("lesson-next")"#));
        assert!(js.contains("if (el)"));
        assert!(js.contains("300"));
    }
}
