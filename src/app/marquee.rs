use leptos::{ev, html, prelude::*};
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::content::TechItem;
use crate::motion::marquee::{displayed, MarqueeConfig, MarqueeInput, MarqueeState};

/// Endless, draggable strip of technology icons.
#[component]
pub fn TechMarquee(
    #[prop(into)] items: Vec<TechItem>,
    #[prop(default = 30.0)] speed: f64,
    #[prop(default = true)] pause_on_hover: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = MarqueeConfig {
        speed,
        pause_on_hover,
        ..MarqueeConfig::default()
    };
    let count = items.len();
    let strip_ref = NodeRef::<html::Div>::new();
    let state = RwSignal::new(MarqueeState::default());
    // items only care when the hovered index changes, not every frame
    let hovered = Memo::new(move |_| state.with(|s| s.hovered_item));

    _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if count == 0 || state.with_untracked(|s| s.is_paused(&config)) {
            return;
        }
        state.update(|s| s.advance(&config, count, args.delta / 1000.0));
    });

    let send = move |input: MarqueeInput| state.update(|s| s.apply(&config, input));

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if let Some(el) = strip_ref.get_untracked() {
            _ = el.set_pointer_capture(ev.pointer_id());
        }
        send(MarqueeInput::DragStart {
            pointer_x: f64::from(ev.client_x()),
        });
    };
    let on_pointer_move = move |ev: ev::PointerEvent| {
        if state.with_untracked(MarqueeState::is_dragging) {
            send(MarqueeInput::DragMove {
                pointer_x: f64::from(ev.client_x()),
            });
        }
    };
    let on_pointer_up = move |_: ev::PointerEvent| send(MarqueeInput::DragEnd);

    let item_width = config.item_span - ITEM_GAP;
    let tiles = displayed(&items)
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let is_hovered = move || hovered.get() == Some(index);
            view! {
                <div
                    class="group relative flex flex-col items-center gap-3 flex-shrink-0 transition-transform duration-300 hover:scale-110 hover:-translate-y-1"
                    style=format!("width: {item_width}px;")
                    on:mouseenter=move |_| send(MarqueeInput::ItemEnter(index))
                    on:mouseleave=move |_| send(MarqueeInput::ItemLeave(index))
                >
                    <div class="relative flex h-16 w-16 items-center justify-center rounded-xl bg-[var(--glass-bg)] backdrop-blur-xl border border-[var(--glass-border)] shadow-[0_8px_32px_var(--glass-shadow)] transition-all duration-300 group-hover:shadow-[0_12px_40px_var(--glass-shadow)] group-hover:border-[var(--glow-primary)]">
                        <img
                            src=item.icon
                            alt=""
                            draggable="false"
                            class="h-8 w-8 pointer-events-none"
                        />
                        <div
                            class="pointer-events-none absolute inset-0 rounded-xl transition-opacity duration-300 blur-md"
                            class=("opacity-100", is_hovered)
                            class=("opacity-0", move || !is_hovered())
                            style="background: radial-gradient(circle at center, var(--glow-primary) 0%, transparent 70%);"
                        ></div>
                    </div>
                    <span
                        class="absolute -bottom-8 left-1/2 -translate-x-1/2 whitespace-nowrap px-3 py-1 rounded-md text-xs bg-[var(--glass-bg)] backdrop-blur-xl border border-[var(--glass-border)] shadow-[0_4px_16px_var(--glass-shadow)] pointer-events-none transition-all duration-200"
                        class=("opacity-100", is_hovered)
                        class=("opacity-0", move || !is_hovered())
                        class=("-mt-2.5", move || !is_hovered())
                    >
                        {item.name}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            class=format!("relative overflow-hidden py-8 {class}")
            on:mouseenter=move |_| send(MarqueeInput::PointerEnter)
            on:mouseleave=move |_| send(MarqueeInput::PointerLeave)
        >
            <div
                node_ref=strip_ref
                class="flex cursor-grab active:cursor-grabbing select-none touch-pan-y pb-8"
                style=move || {
                    format!("gap: {ITEM_GAP}px; transform: {};", state.with(MarqueeState::transform))
                }
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_up
            >
                {tiles}
            </div>
        </div>
    }
}

/// Horizontal gap between tiles; tile width is `item_span - ITEM_GAP`.
const ITEM_GAP: f64 = 32.0;
