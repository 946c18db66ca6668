use leptos::{ev, html, prelude::*};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::motion::tilt::{PointerSample, TiltConfig, TiltInput, TiltState};

/// Wraps its children in a surface that leans away from the pointer.
#[component]
pub fn TiltCard(
    #[prop(optional)] config: TiltConfig,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let state = RwSignal::new(TiltState::default());

    _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if state.with_untracked(TiltState::is_settled) {
            return;
        }
        state.update(|s| s.advance(&config, args.delta / 1000.0));
    });

    let on_move = move |ev: ev::MouseEvent| {
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let sample = PointerSample {
            x: f64::from(ev.client_x()) - rect.left(),
            y: f64::from(ev.client_y()) - rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        state.update(|s| s.apply(&config, TiltInput::Move(sample)));
    };
    let on_leave = move |_: ev::MouseEvent| {
        state.update(|s| s.apply(&config, TiltInput::Leave));
    };

    view! {
        <div
            node_ref=node_ref
            class=format!("relative {class}")
            style=move || {
                state
                    .with(|s| {
                        format!(
                            "transform-style: preserve-3d; will-change: transform; transform: {};",
                            s.transform(&config),
                        )
                    })
            }
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            {children()}
            {config
                .glare
                .then(|| {
                    view! {
                        <div
                            class="pointer-events-none absolute inset-0 rounded-full mix-blend-overlay"
                            style=move || state.with(TiltState::glare_style)
                            aria-hidden="true"
                        ></div>
                    }
                })}
        </div>
    }
}
