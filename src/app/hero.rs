use leptos::prelude::*;

use super::glass::{GlassCard, GlassVariant, GlowButton, GlowVariant};
use super::navbar::scroll_to_anchor;
use super::tilt::TiltCard;
use crate::content::{OWNER, PROFILE_IMAGE, RESUME_FILE, RESUME_PATH, SOCIAL_LINKS, TAGLINE};
use crate::motion::tilt::TiltConfig;

#[component]
pub fn Hero() -> impl IntoView {
    let portrait_tilt = TiltConfig {
        max_tilt: 10.0,
        ..TiltConfig::default()
    };

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-20"
        >
            <div class="max-w-5xl w-full mx-auto section-content">
                <GlassCard variant=GlassVariant::Elevated noise=true class="p-8 sm:p-12 text-center">
                    <div class="mb-8 flex justify-center">
                        <TiltCard config=portrait_tilt class="rounded-full">
                            <div class="relative w-40 h-40 sm:w-48 sm:h-48 rounded-full p-1 bg-gradient-to-br from-cyan-400 via-orange-400 to-fuchsia-500">
                                <img
                                    src=PROFILE_IMAGE
                                    alt=OWNER
                                    class="w-full h-full rounded-full object-cover border-4 border-white dark:border-black"
                                />
                            </div>
                        </TiltCard>
                    </div>

                    <span class="inline-block mb-6 px-4 py-2 rounded-full text-sm backdrop-blur-xl bg-[var(--glass-bg)] border border-[var(--glass-border)] text-gray-700 dark:text-white/80">
                        "👋 Welcome to my portfolio"
                    </span>

                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-extrabold mb-6 leading-tight">
                        <span class="text-gray-900 dark:text-white">"Hi, I'm "</span>
                        <span class="bg-gradient-to-r from-cyan-500 via-orange-500 to-fuchsia-500 bg-clip-text text-transparent">
                            {OWNER}
                        </span>
                    </h1>

                    <p class="max-w-2xl mx-auto mb-10 text-lg sm:text-xl text-gray-700 dark:text-white/70">
                        {TAGLINE}
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                        <GlowButton
                            variant=GlowVariant::Primary
                            on_click=Callback::new(|_| {
                                scroll_to_anchor("#projects");
                            })
                        >
                            "View My Work"
                        </GlowButton>
                        <GlowButton variant=GlowVariant::Secondary href=RESUME_PATH download=RESUME_FILE>
                            "Download CV"
                        </GlowButton>
                    </div>

                    <div class="flex gap-4 justify-center">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="p-3 rounded-full backdrop-blur-xl bg-[var(--glass-bg)] border border-[var(--glass-border)] transition-transform duration-300 hover:scale-110 hover:-translate-y-1"
                                    >
                                        <img src=link.icon.src() alt="" class="w-6 h-6 dark:invert" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        type="button"
                        class="mt-16 inline-flex flex-col items-center gap-2 text-sm text-gray-600 dark:text-white/60 animate-bounce"
                        on:click=move |_| {
                            scroll_to_anchor("#about");
                        }
                    >
                        "Scroll to explore"
                        <span aria-hidden="true">"↓"</span>
                    </button>
                </GlassCard>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_hero_sits_on_elevated_noise_panel() {
        let html = Owner::new().with(|| view! { <Hero /> }.to_html());
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains(GlassVariant::Elevated.class()));
        assert!(html.contains(r#"filter="url(#noise)""#));
        assert!(html.contains("View My Work"));
    }
}
