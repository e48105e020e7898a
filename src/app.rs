mod achievements;
mod contact;
mod dev_setup;
mod education;
mod github;
mod header;
mod hero;
mod projects;
mod skills;
mod snippets;
mod terminal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::mode::{provide_dev_mode, DEV_MODE_CLASS};
use crate::theme::{provide_theme, DARK_CLASS};

use achievements::Achievements;
use contact::Contact;
use dev_setup::DevSetup;
use education::Education;
use github::GithubStatsPanel;
use header::Header;
use hero::Hero;
use projects::{ProjectPage, Projects};
use skills::Skills;
use snippets::CodeSnippets;
use terminal::InteractiveTerminal;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
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
    let dev_mode = provide_dev_mode();
    let theme = provide_theme();

    // Both toggles surface as classes on the document root so the stylesheet
    // can restyle sections that have no dedicated developer-mode branch.
    let root_class = move || {
        let mut classes = Vec::new();
        if theme.is_dark.get() {
            classes.push(DARK_CLASS);
        }
        if dev_mode.mode().get().is_developer() {
            classes.push(DEV_MODE_CLASS);
        }
        classes.join(" ")
    };

    view! {
        <Html attr:class=root_class />

        // sets the document title
        <Title formatter=|title| format!("Bethe Bayou - {title}") />

        <Router>
            <Header />
            <main id="main-content" class="pt-16 min-h-screen bg-background text-foreground">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects/:id") view=ProjectPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Skills />
        <Projects />
        <Education />
        <Achievements />
        <DevSetup />
        <CodeSnippets />
        <InteractiveTerminal />
        <GithubStatsPanel />
        <Contact />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        log::error!(
            "404: no route matches {}",
            location.pathname.get_untracked()
        );
    });
    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-muted mb-6">"Oops! The page you're looking for doesn't exist."</p>
                <A href="/" attr:class="underline hover:opacity-70">
                    "Return to Home"
                </A>
            </div>
        </div>
    }
}
