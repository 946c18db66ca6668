use leptos::prelude::*;

use super::glass::{GlassCard, GlassVariant, SectionHeading};
use super::reveal::Reveal;
use crate::content::{Project, PROJECTS};
use crate::motion::reveal::stagger_delay;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title="Featured Projects"
                    subtitle="A selection of things I've designed and built"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| project_card(i, project))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn project_card(index: usize, project: Project) -> impl IntoView {
    view! {
        <Reveal delay=stagger_delay(index) class="h-full">
            <GlassCard variant=GlassVariant::Elevated noise=true class="h-full">
                <div class="relative h-48 overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-bold mb-2 text-gray-900 dark:text-white">{project.title}</h3>
                    <p class="mb-4 text-gray-600 dark:text-white/70">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 rounded-full text-xs bg-[var(--glass-bg)] border border-[var(--glass-border)] text-gray-700 dark:text-white/80">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-4 text-sm font-medium">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-gray-700 hover:text-cyan-600 dark:text-white/80 dark:hover:text-cyan-400 transition-colors"
                        >
                            <img src="/icons/github.svg" alt="" class="w-4 h-4 dark:invert" />
                            "Code"
                        </a>
                        <a
                            href=project.demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-gray-700 hover:text-fuchsia-600 dark:text-white/80 dark:hover:text-fuchsia-400 transition-colors"
                        >
                            "Live Demo ↗"
                        </a>
                    </div>
                </div>
            </GlassCard>
        </Reveal>
    }
}
