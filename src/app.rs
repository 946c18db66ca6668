mod about;
mod background;
mod contact;
mod glass;
mod hero;
mod marquee;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod theme;
mod tilt;

pub use contact::SubmitContact;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER;
use crate::theme::{preload_script, Theme};
use about::About;
use background::{GradientOrbs, ParticleField};
use contact::Contact;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                // sets the `dark` class from storage before the stylesheet paints
                <script inner_html=preload_script(Theme::default())></script>
                <noscript>
                    <style>".reveal { opacity: 1; transform: none; }"</style>
                </noscript>
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/glass-portfolio.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        <Title text=format!("{OWNER} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is one scrolling page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white dark:bg-black transition-colors duration-500">
            <GradientOrbs />
            <div class="fixed inset-0 z-0">
                <ParticleField />
            </div>
            <Navbar />
            <main class="relative z-10">
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

fn build_year() -> &'static str {
    env!("BUILD_TIME").get(..4).unwrap_or("2025")
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 py-8 text-center text-gray-600 dark:text-white/60">
            <div class="max-w-7xl mx-auto px-4">
                <p>{format!("© {} | {OWNER}. All rights reserved.", build_year())}</p>
            </div>
        </footer>
    }
}
