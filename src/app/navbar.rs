use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::theme::ThemeToggle;
use crate::content::{NavItem, INITIALS, NAV_ITEMS};

/// Window scroll (px) after which the bar gets its glass backing.
const SCROLLED_AFTER: f64 = 50.0;

/// Smooth-scrolls to the element matching `selector`. Returns false (and does
/// nothing) when no such element exists.
pub fn scroll_to_anchor(selector: &str) -> bool {
    let Ok(Some(el)) = document().query_selector(selector) else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_AFTER);
    let (menu_open, set_menu_open) = signal(false);

    let nav_click = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        if scroll_to_anchor(href) {
            set_menu_open.set(false);
        }
    };

    let nav_link = move |item: NavItem, class: &'static str| {
        view! {
            <a href=item.href on:click=move |ev| nav_click(ev, item.href) class=class>
                {item.label}
                <span class="absolute -bottom-1 left-0 h-0.5 w-0 group-hover:w-full transition-all duration-300 bg-gradient-to-r from-cyan-500 via-orange-500 to-fuchsia-500"></span>
            </a>
        }
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 transition-all duration-300 animate-slide-down">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div
                    class="flex justify-between items-center py-4 rounded-xl transition-all duration-300"
                    class=(
                        ["my-2", "px-4", "backdrop-blur-lg", "bg-[var(--glass-bg)]", "border", "border-[var(--glass-border)]", "shadow-[0_4px_16px_var(--glass-shadow)]"],
                        move || scrolled.get(),
                    )
                >
                    <a
                        href="#home"
                        on:click=move |ev| nav_click(ev, "#home")
                        class="relative group cursor-pointer transition-transform hover:scale-105 active:scale-95"
                    >
                        <span class="text-2xl font-bold bg-gradient-to-r from-cyan-500 via-orange-500 to-fuchsia-500 bg-clip-text text-transparent">
                            {INITIALS}
                        </span>
                        <span class="absolute -bottom-1 left-0 h-0.5 w-0 group-hover:w-full transition-all duration-300 bg-gradient-to-r from-purple-500/0 via-purple-500 to-purple-500/0 dark:from-white/0 dark:via-white/50 dark:to-white/0"></span>
                    </a>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| {
                                nav_link(
                                    item,
                                    "relative group transition-colors text-gray-700 hover:text-gray-900 dark:text-white/80 dark:hover:text-white",
                                )
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>

                    <div class="flex md:hidden items-center gap-4">
                        <ThemeToggle />
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            class="p-2 text-2xl text-gray-900 dark:text-white"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-40 md:hidden backdrop-blur-xl bg-white/95 dark:bg-slate-900/95 animate-slide-in-right">
                <div class="flex flex-col items-center justify-center h-full gap-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            nav_link(
                                item,
                                "relative group text-2xl transition-colors text-gray-900 hover:text-cyan-600 dark:text-white dark:hover:text-gray-300",
                            )
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
