use leptos::prelude::*;

use super::glass::{GlassCard, SectionHeading};
use super::marquee::TechMarquee;
use super::reveal::Reveal;
use crate::content::{Proficiency, Skill, SkillCategory, SKILL_CATEGORIES, TECH_STACK};
use crate::motion::reveal::stagger_delay;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title="Skills & Technologies"
                    subtitle="The tools I reach for every day"
                />
                <TechMarquee items=TECH_STACK.to_vec() speed=80.0 class="mb-16" />
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .enumerate()
                        .map(|(i, category)| category_card(i, category))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn category_card(index: usize, category: SkillCategory) -> impl IntoView {
    view! {
        <Reveal delay=stagger_delay(index) class="h-full">
            <GlassCard class="p-6 h-full">
                <h3 class="text-xl font-bold mb-6 text-gray-900 dark:text-white">{category.title}</h3>
                <ul class="space-y-4">
                    {category.skills.iter().copied().map(skill_row).collect_view()}
                </ul>
            </GlassCard>
        </Reveal>
    }
}

fn skill_row(skill: Skill) -> impl IntoView {
    let filled = skill.proficiency.dots();
    view! {
        <li class="flex items-center justify-between gap-4">
            <span class="text-gray-800 dark:text-white/90">{skill.name}</span>
            <div class="flex items-center gap-3">
                <span class=format!(
                    "px-2 py-0.5 rounded-full text-xs font-medium {}",
                    skill.proficiency.badge_class(),
                )>{skill.proficiency.label()}</span>
                <span class="flex gap-1" aria-label=format!("{filled} of {}", Proficiency::MAX_DOTS)>
                    {(0..Proficiency::MAX_DOTS)
                        .map(|i| {
                            let class = if i < filled {
                                "w-2 h-2 rounded-full bg-gradient-to-r from-cyan-500 to-fuchsia-500"
                            } else {
                                "w-2 h-2 rounded-full bg-gray-300 dark:bg-white/20"
                            };
                            view! { <span class=class></span> }
                        })
                        .collect_view()}
                </span>
            </div>
        </li>
    }
}
