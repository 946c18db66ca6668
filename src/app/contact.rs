use std::time::Duration;

use leptos::{ev::SubmitEvent, prelude::*};

use super::glass::{GlassCard, GlassVariant, SectionHeading};
use super::reveal::Reveal;
use crate::contact::{ContactStatus, StatusBanner, SubmitReceipt, BANNER_SECS};
use crate::content::{CONTACT_CHANNELS, SOCIAL_LINKS};

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<SubmitReceipt, ServerFnError> {
    use crate::contact::{ContactConfig, ContactError, ContactForm};

    let form = ContactForm {
        name,
        email,
        message,
    };
    let config = use_context::<ContactConfig>()
        .ok_or_else(|| ServerFnError::new(ContactError::NotConfigured))?;

    match config.submit(form, chrono::Utc::now()).await {
        Ok(receipt) => {
            tracing::info!(received_at = %receipt.received_at, "contact message delivered");
            Ok(receipt)
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact message not delivered");
            Err(ServerFnError::new(e))
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind or just want to say hi? My inbox is always open."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <Reveal class="space-y-6">
                        {CONTACT_CHANNELS
                            .into_iter()
                            .map(|channel| {
                                view! {
                                    <a href=channel.href class="block">
                                        <GlassCard variant=GlassVariant::Flat class="p-6 flex items-center gap-4">
                                            <span class="flex items-center justify-center w-12 h-12 rounded-full text-xl bg-gradient-to-br from-cyan-500/20 to-fuchsia-500/20 text-gray-900 dark:text-white">
                                                {channel.icon}
                                            </span>
                                            <div>
                                                <div class="text-sm text-gray-600 dark:text-white/60">
                                                    {channel.label}
                                                </div>
                                                <div class="font-medium text-gray-900 dark:text-white">
                                                    {channel.value}
                                                </div>
                                            </div>
                                        </GlassCard>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <GlassCard variant=GlassVariant::Elevated noise=true class="p-8">
                            <h3 class="text-2xl font-bold mb-4 text-gray-900 dark:text-white">
                                "Let's Connect"
                            </h3>
                            <p class="mb-6 text-gray-700 dark:text-white/70">
                                "I'm open to freelance work, full-time roles and interesting side projects."
                            </p>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .into_iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="p-3 rounded-full bg-[var(--glass-bg)] border border-[var(--glass-border)] transition-transform duration-300 hover:scale-110"
                                            >
                                                <img src=link.icon.src() alt="" class="w-5 h-5 dark:invert" />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </GlassCard>
                    </Reveal>
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-[var(--glass-bg)] border border-[var(--glass-border)] backdrop-blur-xl text-gray-900 dark:text-white placeholder-gray-500 dark:placeholder-white/40 focus:outline-none focus:ring-2 focus:ring-cyan-500/50 transition-all";

#[component]
fn MessageForm() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let pending = submit.pending();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let banner = RwSignal::new(StatusBanner::default());

    Effect::new(move |_| {
        let Some(result) = submit.value().get() else {
            return;
        };
        let status = ContactStatus::from_result(&result);
        match &result {
            Ok(receipt) => {
                log::debug!("contact message accepted at {}", receipt.received_at);
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(e) => log::warn!("contact submission failed: {e}"),
        }
        let Some(generation) = banner.try_update(|b| b.show(status)) else {
            return;
        };
        set_timeout(
            move || {
                _ = banner.try_update(|b| b.dismiss(generation));
            },
            Duration::from_secs(BANNER_SECS),
        );
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        submit.dispatch(SubmitContact {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        });
    };

    let status_banner = move || {
        let status = banner.with(|b| b.status);
        status
            .message()
            .map(|text| {
                let class = if status == ContactStatus::Success {
                    "mb-6 p-4 rounded-lg border bg-emerald-100 border-emerald-300 text-emerald-800 dark:bg-emerald-500/20 dark:border-emerald-400/30 dark:text-emerald-200"
                } else {
                    "mb-6 p-4 rounded-lg border bg-red-100 border-red-300 text-red-800 dark:bg-red-500/20 dark:border-red-400/30 dark:text-red-200"
                };
                view! {
                    <div role="status" class=class>
                        {text}
                    </div>
                }
            })
    };

    view! {
        <Reveal delay=0.2>
            <GlassCard variant=GlassVariant::Elevated class="p-8">
                {status_banner}
                <form on:submit=on_submit class="space-y-6">
                    <div>
                        <label for="contact-name" class="block mb-2 text-sm font-medium text-gray-700 dark:text-white/80">
                            "Name"
                        </label>
                        <input
                            id="contact-name"
                            type="text"
                            required
                            placeholder="Your name"
                            class=INPUT_CLASS
                            prop:value=name
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="contact-email" class="block mb-2 text-sm font-medium text-gray-700 dark:text-white/80">
                            "Email"
                        </label>
                        <input
                            id="contact-email"
                            type="email"
                            required
                            placeholder="you@example.com"
                            class=INPUT_CLASS
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="contact-message" class="block mb-2 text-sm font-medium text-gray-700 dark:text-white/80">
                            "Message"
                        </label>
                        <textarea
                            id="contact-message"
                            required
                            rows="5"
                            placeholder="Tell me about your project"
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=message
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full relative inline-flex items-center justify-center px-6 py-3 rounded-lg font-medium text-white bg-gradient-to-r from-cyan-500 via-orange-500 to-fuchsia-500 transition-all duration-300 hover:scale-[1.02] active:scale-[0.97] disabled:opacity-50 disabled:pointer-events-none"
                    >
                        {move || if pending.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </GlassCard>
        </Reveal>
    }
}
