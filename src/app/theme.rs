use std::time::Duration;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{Theme, ThemeSettings, ThemeStore, STORAGE_KEY, TRANSITION_MS};

const TRANSITION_CLASS: &str = "theme-transition";

/// `localStorage["theme"]`, with an empty string standing for "nothing saved".
#[derive(Debug, Clone, Copy)]
struct LocalThemeStore {
    saved: Signal<String>,
    set_saved: WriteSignal<String>,
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        let saved = self.saved.get_untracked();
        if saved.is_empty() {
            None
        } else {
            Some(saved)
        }
    }

    fn save(&self, theme: Theme) {
        self.set_saved.set(theme.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    settings: StoredValue<ThemeSettings<LocalThemeStore>>,
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.settings.update_value(|s| {
            s.toggle();
        });
        self.sync();
    }

    fn follow_system(&self, prefers_dark: bool) {
        self.settings.update_value(|s| {
            s.follow_system(prefers_dark);
        });
        self.sync();
    }

    fn sync(&self) {
        let theme = self.settings.with_value(|s| s.theme());
        if self.theme.get_untracked() != theme {
            self.theme.set(theme);
        }
    }
}

/// Loads the saved theme and makes it available to the whole tree.
pub fn provide_theme() -> ThemeContext {
    let (saved, set_saved, _) = use_local_storage::<String, FromToStringCodec>(STORAGE_KEY);
    let prefers_dark = use_preferred_dark();

    let store = LocalThemeStore { saved, set_saved };
    let settings = ThemeSettings::load(store, prefers_dark.get_untracked(), Theme::default());
    let ctx = ThemeContext {
        theme: RwSignal::new(settings.theme()),
        settings: StoredValue::new(settings),
    };
    provide_context(ctx);

    Effect::new(move |_| ctx.follow_system(prefers_dark.get()));

    Effect::new(move |prev: Option<Theme>| {
        let theme = ctx.theme.get();
        apply_theme(theme, prev.is_some());
        theme
    });

    ctx
}

fn apply_theme(theme: Theme, animate: bool) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    if animate {
        _ = classes.add_1(TRANSITION_CLASS);
        set_timeout(
            || {
                if let Some(root) = document().document_element() {
                    _ = root.class_list().remove_1(TRANSITION_CLASS);
                }
            },
            Duration::from_millis(TRANSITION_MS),
        );
    }
    _ = classes.toggle_with_force("dark", theme.is_dark());
    log::debug!("theme set to {theme}");
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            on:click=move |_| ctx.toggle()
            aria-label="Toggle theme"
            class="relative p-2 rounded-full text-xl backdrop-blur-sm transition-transform duration-300 hover:rotate-12 hover:scale-110 bg-gray-900/5 border border-gray-900/10 text-gray-900 dark:bg-white/10 dark:border-white/10 dark:text-white"
        >
            // icons switch through the `dark` class so SSR markup never differs
            <span class="hidden dark:inline">"☀"</span>
            <span class="inline dark:hidden">"☾"</span>
        </button>
    }
}
