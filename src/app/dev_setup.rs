use leptos::{either::Either, prelude::*};

use crate::mode::use_dev_mode;

struct SetupCategory {
    title: &'static str,
    glyph: &'static str,
    items: &'static [&'static str],
}

static SETUP_CATEGORIES: [SetupCategory; 4] = [
    SetupCategory {
        title: "Editor & IDE",
        glyph: "</>",
        items: &[
            "VS Code",
            "Extensions: Prettier, ESLint, GitLens",
            "Theme: One Dark Pro",
        ],
    },
    SetupCategory {
        title: "Terminal",
        glyph: ">_",
        items: &["Windows Terminal", "PowerShell", "Oh My Posh", "Git Bash"],
    },
    SetupCategory {
        title: "Development Tools",
        glyph: "⚙",
        items: &["Node.js", "Git", "Docker", "Postman", "MongoDB Compass"],
    },
    SetupCategory {
        title: "Design & Prototyping",
        glyph: "◧",
        items: &["Figma", "Canva", "ColorPick"],
    },
];

#[component]
pub fn DevSetup() -> impl IntoView {
    let is_dev = use_dev_mode();
    let (selected, set_selected) = signal(0usize);

    view! {
        <section id="dev-setup" class="py-6">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    {move || {
                        if is_dev.get() {
                            Either::Left(view! { <SetupConfig selected set_selected /> })
                        } else {
                            Either::Right(view! { <SetupGrid /> })
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SetupGrid() -> impl IntoView {
    view! {
        <div class="text-center mb-6">
            <h2 class="text-2xl font-bold mb-2 uppercase tracking-wider">"Development Setup"</h2>
            <p class="text-sm text-muted">"Tools and environment I use daily"</p>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            {SETUP_CATEGORIES
                .iter()
                .map(|category| {
                    view! {
                        <div class="border-2 border-muted/30 rounded-lg p-6 bg-card transition-all duration-300 hover:scale-105">
                            <div class="flex items-center gap-3 mb-4">
                                <span class="font-mono">{category.glyph}</span>
                                <h3 class="text-lg font-semibold">{category.title}</h3>
                            </div>
                            <ul class="space-y-2">
                                {category
                                    .items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="text-sm text-muted flex items-start gap-2">
                                                <span class="mt-1">"·"</span>
                                                {*item}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SetupConfig(selected: ReadSignal<usize>, set_selected: WriteSignal<usize>) -> impl IntoView {
    view! {
        <div class="mb-4 border-2 border-foreground/20 p-3 bg-background font-mono text-xs">
            <span class="text-green">"$"</span>
            <span class="ml-2">"cat ~/.config/setup.toml"</span>
        </div>

        <div class="border-2 border-foreground/30 bg-background font-mono">
            <div class="flex flex-wrap border-b-2 border-foreground/20">
                {SETUP_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, category)| {
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == i {
                                        "px-3 py-2 text-xs bg-foreground text-background"
                                    } else {
                                        "px-3 py-2 text-xs hover:bg-foreground/10"
                                    }
                                }
                                on:click=move |_| set_selected.set(i)
                            >
                                {format!("[{}]", category.title.to_lowercase().replace(" & ", "_").replace(' ', "_"))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let category = &SETUP_CATEGORIES[selected.get()];
                view! {
                    <div class="p-4 text-sm">
                        {category
                            .items
                            .iter()
                            .enumerate()
                            .map(|(n, item)| {
                                view! {
                                    <div class="flex gap-3 py-0.5">
                                        <span class="text-muted">{format!("{:>2} |", n + 1)}</span>
                                        <span>{*item}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            }}
            <div class="px-4 py-2 border-t-2 border-foreground/10 text-xs text-muted">
                {move || {
                    let category = &SETUP_CATEGORIES[selected.get()];
                    format!("{} · {} entries", category.title, category.items.len())
                }}
            </div>
        </div>
    }
}
