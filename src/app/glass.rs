use leptos::{either::Either, prelude::*};

use super::reveal::Reveal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlassVariant {
    #[default]
    Default,
    Elevated,
    Flat,
}

impl GlassVariant {
    pub fn class(self) -> &'static str {
        match self {
            GlassVariant::Default => "shadow-[0_8px_32px_var(--glass-shadow)] backdrop-blur-xl",
            GlassVariant::Elevated => "shadow-[0_16px_48px_var(--glass-shadow)] backdrop-blur-2xl",
            GlassVariant::Flat => "shadow-[0_4px_16px_var(--glass-shadow)] backdrop-blur-lg",
        }
    }
}

/// Frosted card with a refraction sheen on hover.
#[component]
pub fn GlassCard(
    #[prop(optional)] variant: GlassVariant,
    #[prop(optional)] noise: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!(
            "group relative overflow-hidden rounded-xl transition-all duration-300 ease-out {} {class}",
            variant.class(),
        )>
            <div
                class="pointer-events-none absolute inset-0 opacity-0 transition-opacity duration-300 bg-[var(--glass-refraction)] group-hover:opacity-100"
                aria-hidden="true"
            ></div>
            {noise
                .then(|| {
                    view! {
                        <svg
                            class="pointer-events-none absolute inset-0 h-full w-full opacity-[0.15]"
                            aria-hidden="true"
                        >
                            <filter id="noise">
                                <feTurbulence
                                    type="fractalNoise"
                                    baseFrequency="0.8"
                                    numOctaves="4"
                                    stitchTiles="stitch"
                                />
                                <feColorMatrix type="saturate" values="0" />
                            </filter>
                            <rect width="100%" height="100%" filter="url(#noise)" />
                        </svg>
                    }
                })}
            <div class="relative z-10">{children()}</div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlowVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}

impl GlowVariant {
    fn color(self) -> &'static str {
        match self {
            GlowVariant::Primary => "var(--glow-primary)",
            GlowVariant::Secondary => "var(--glow-secondary)",
            GlowVariant::Accent => "var(--glow-accent)",
            GlowVariant::Success => "var(--glow-success)",
            GlowVariant::Warning => "var(--glow-warning)",
            GlowVariant::Error => "var(--glow-error)",
        }
    }
}

const GLOW_BUTTON_CLASS: &str = "relative inline-flex items-center justify-center px-6 py-3 rounded-lg font-medium transition-all duration-300 hover:scale-[1.02] active:scale-[0.97] bg-[var(--glass-bg)] backdrop-blur-xl border border-[var(--glass-border)] text-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

/// Glass button with a coloured halo. Renders an `<a>` when `href` is set.
#[component]
pub fn GlowButton(
    #[prop(optional)] variant: GlowVariant,
    #[prop(default = true)] glow: bool,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] download: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let color = variant.color();
    let style = if glow {
        format!("box-shadow: 0 0 20px -5px {color}, 0 4px 12px var(--glass-shadow);")
    } else {
        "box-shadow: 0 4px 12px var(--glass-shadow);".to_string()
    };
    let class = format!("group {GLOW_BUTTON_CLASS} {class}");
    let inner = view! {
        {glow
            .then(|| {
                view! {
                    <span
                        class="pointer-events-none absolute inset-0 rounded-lg opacity-0 transition-opacity duration-300 group-hover:opacity-100"
                        style=format!(
                            "background: radial-gradient(circle at center, color-mix(in srgb, {color} 25%, transparent) 0%, transparent 70%);",
                        )
                        aria-hidden="true"
                    ></span>
                }
            })}
        <span class="relative z-10 flex items-center gap-2">{children()}</span>
    };

    match href {
        Some(href) => Either::Left(view! {
            <a href=href download=download class=class style=style>
                {inner}
            </a>
        }),
        None => Either::Right(view! {
            <button
                type="button"
                class=class
                style=style
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                {inner}
            </button>
        }),
    }
}

/// Gradient section title with the tri-colour underline.
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <div class="mb-8">
                <h2 class="text-4xl sm:text-5xl font-extrabold mb-4 pb-1 leading-tight bg-gradient-to-r from-gray-300 via-black to-gray-300 dark:from-white dark:via-gray-300 dark:to-gray-500 bg-clip-text text-transparent">
                    {title}
                </h2>
                <div class="w-24 h-1 mx-auto rounded-full bg-gradient-to-r from-cyan-400 via-orange-400 to-fuchsia-400 dark:from-cyan-500 dark:via-orange-500 dark:to-fuchsia-500"></div>
            </div>
            <p class="max-w-2xl mx-auto text-gray-700 dark:text-white/70">{subtitle}</p>
        </Reveal>
    }
}
