use leptos::prelude::*;

use super::glass::{GlassCard, GlassVariant, SectionHeading};
use super::reveal::Reveal;
use crate::content::{Experience, EXPERIENCE, HIGHLIGHTS, STATS};
use crate::motion::reveal::stagger_delay;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title="About Me"
                    subtitle="Passionate about creating exceptional digital experiences that make a difference"
                />

                <Reveal class="grid lg:grid-cols-2 gap-12 mb-20">
                    <div class="space-y-6 text-gray-700 dark:text-white/80">
                        <h3 class="text-2xl font-bold text-gray-900 dark:text-white">
                            "Building the web, one pixel at a time"
                        </h3>
                        <p>
                            "I'm a developer who enjoys the whole stack: shaping interfaces, wiring up services and turning data into something people can act on."
                        </p>
                        <p>
                            "When I'm not writing code I'm usually sketching layouts, tinkering with design tools or reading about machine learning."
                        </p>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        {STATS
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <GlassCard variant=GlassVariant::Flat class="p-6 text-center">
                                        <div class="text-3xl font-extrabold mb-2 bg-gradient-to-r from-cyan-500 via-orange-500 to-fuchsia-500 bg-clip-text text-transparent">
                                            {stat.value}
                                        </div>
                                        <div class="text-sm text-gray-600 dark:text-white/60">
                                            {stat.label}
                                        </div>
                                    </GlassCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 mb-24">
                    {HIGHLIGHTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, highlight)| {
                            view! {
                                <Reveal delay=stagger_delay(i) class="h-full">
                                    <GlassCard class="p-6 h-full">
                                        <h4 class="text-lg font-semibold mb-2 text-gray-900 dark:text-white">
                                            {highlight.title}
                                        </h4>
                                        <p class="text-gray-600 dark:text-white/70">
                                            {highlight.description}
                                        </p>
                                    </GlassCard>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <h3 class="text-3xl font-bold text-center mb-12 text-gray-900 dark:text-white">
                    "Experience"
                </h3>
                <ol class="relative max-w-4xl mx-auto border-l-2 border-[var(--glass-border)] space-y-12">
                    {EXPERIENCE.into_iter().map(timeline_entry).collect_view()}
                </ol>
            </div>
        </section>
    }
}

fn timeline_entry(job: Experience) -> impl IntoView {
    view! {
        <li class="ml-8">
            <span class="absolute -left-[9px] mt-2 w-4 h-4 rounded-full bg-gradient-to-br from-cyan-400 to-fuchsia-500"></span>
            <Reveal>
                <GlassCard variant=GlassVariant::Elevated class="p-6">
                    <div class="flex items-center gap-4 mb-4">
                        <img
                            src=job.logo
                            alt=job.company
                            class="w-12 h-12 rounded-lg object-contain bg-white p-1"
                        />
                        <div>
                            <h4 class="text-xl font-bold text-gray-900 dark:text-white">{job.role}</h4>
                            <p class="text-gray-600 dark:text-white/60">
                                {format!("{} · {}", job.company, job.period)}
                            </p>
                        </div>
                    </div>
                    <ul class="list-disc pl-5 space-y-2 mb-4 text-gray-700 dark:text-white/80">
                        {job.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                    </ul>
                    <div class="flex flex-wrap gap-2">
                        {job
                            .stack
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 rounded-full text-xs bg-[var(--glass-bg)] border border-[var(--glass-border)] text-gray-700 dark:text-white/80">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </GlassCard>
            </Reveal>
        </li>
    }
}
