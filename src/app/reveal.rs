use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::reveal::RevealLatch;

/// Slides its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    /// Seconds to wait after the element becomes visible.
    #[prop(optional)]
    delay: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let latch = RwSignal::new(RevealLatch::default());

    Effect::new(move |_| {
        let visible = visible.get();
        let mut next = latch.get_untracked();
        if next.observe(visible) {
            latch.set(next);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {class}")
            class=("revealed", move || latch.with(RevealLatch::is_shown))
            style=format!("transition-delay: {delay:.2}s;")
        >
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_markup_starts_hidden() {
        let html = Owner::new().with(|| {
            view! {
                <Reveal delay=0.3 class="h-full">
                    <p>"hello"</p>
                </Reveal>
            }
            .to_html()
        });
        assert!(html.contains("reveal h-full"));
        assert!(!html.contains("revealed"));
        assert!(html.contains("transition-delay: 0.30s;"));
        assert!(html.contains("<p>hello</p>"));
    }
}
