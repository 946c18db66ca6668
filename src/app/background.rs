use leptos::prelude::*;

use crate::motion::particles::particle_field;

const PARTICLE_COUNT: usize = 50;

/// (position, colour, animation delay in seconds)
const ORBS: [(&str, &str, f64); 4] = [
    ("top-1/4 -left-32 w-96 h-96", "from-cyan-400/30 to-blue-500/20", 0.0),
    ("top-1/2 -right-32 w-[28rem] h-[28rem]", "from-fuchsia-500/30 to-purple-500/20", 2.0),
    ("bottom-0 left-1/3 w-80 h-80", "from-orange-400/30 to-pink-500/20", 4.0),
    ("top-10 right-1/4 w-64 h-64", "from-emerald-400/20 to-cyan-500/20", 6.0),
];

#[component]
pub fn GradientOrbs() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {ORBS
                .into_iter()
                .map(|(position, colour, delay)| {
                    view! {
                        <div
                            class=format!(
                                "absolute rounded-full blur-3xl bg-gradient-to-br animate-orb-pulse {position} {colour}",
                            )
                            style=format!("animation-delay: {delay}s;")
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ParticleField() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {particle_field(PARTICLE_COUNT)
                .into_iter()
                .map(|p| {
                    view! {
                        <span
                            class="absolute rounded-full bg-gray-900/40 dark:bg-white/60 animate-float"
                            style=p.style()
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
