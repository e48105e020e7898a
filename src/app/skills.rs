use leptos::{either::Either, prelude::*};

use crate::mode::use_dev_mode;

pub(crate) struct Skill {
    pub name: &'static str,
    icon: &'static str,
}

pub(crate) static SKILLS: [Skill; 14] = [
    Skill {
        name: "C++",
        icon: "https://cdn.simpleicons.org/cplusplus/000000",
    },
    Skill {
        name: "Java",
        icon: "fab fa-java",
    },
    Skill {
        name: "Python",
        icon: "https://cdn.simpleicons.org/python/000000",
    },
    Skill {
        name: "JavaScript",
        icon: "https://cdn.simpleicons.org/javascript/000000",
    },
    Skill {
        name: "SQL",
        icon: "https://cdn.simpleicons.org/mysql/000000",
    },
    Skill {
        name: "HTML",
        icon: "https://cdn.simpleicons.org/html5/000000",
    },
    Skill {
        name: "CSS",
        icon: "fab fa-css3",
    },
    Skill {
        name: "Figma",
        icon: "https://cdn.simpleicons.org/figma/000000",
    },
    Skill {
        name: "Node.js",
        icon: "https://cdn.simpleicons.org/nodedotjs/000000",
    },
    Skill {
        name: "Express.js",
        icon: "https://cdn.simpleicons.org/express/000000",
    },
    Skill {
        name: "MongoDB",
        icon: "https://cdn.simpleicons.org/mongodb/000000",
    },
    Skill {
        name: "Jupyter",
        icon: "https://cdn.simpleicons.org/jupyter/000000",
    },
    Skill {
        name: "Pandas",
        icon: "https://cdn.simpleicons.org/pandas/000000",
    },
    Skill {
        name: "NumPy",
        icon: "https://cdn.simpleicons.org/numpy/000000",
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    let is_dev = use_dev_mode();

    view! {
        <section id="skills" class="py-20">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    {move || {
                        if is_dev.get() {
                            Either::Left(view! { <SkillsListing /> })
                        } else {
                            Either::Right(view! { <SkillsGrid /> })
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillsGrid() -> impl IntoView {
    view! {
        <h2 class="text-2xl font-medium mb-12 text-center uppercase tracking-wider">"My Skills"</h2>
        <div class="grid grid-cols-3 sm:grid-cols-4 md:grid-cols-5 lg:grid-cols-7 gap-6">
            {SKILLS
                .iter()
                .map(|skill| {
                    view! {
                        <div class="group relative border border-muted/30 rounded-lg p-6 bg-card flex flex-col items-center justify-center transition-all duration-300 hover:-translate-y-1 hover:shadow-lg">
                            {if skill.icon.starts_with("fab ") {
                                Either::Left(
                                    view! {
                                        <i class=format!(
                                            "{} text-2xl transition-transform group-hover:scale-110",
                                            skill.icon,
                                        )></i>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <img
                                            src=skill.icon
                                            alt=skill.name
                                            class="w-8 h-8 transition-transform group-hover:scale-110 dark:invert"
                                        />
                                    },
                                )
                            }}
                            <span class="absolute -bottom-5 left-1/2 -translate-x-1/2 opacity-0 group-hover:opacity-100 transition-opacity bg-card border border-muted/30 px-3 py-1 rounded-lg text-xs font-medium whitespace-nowrap">
                                {skill.name}
                            </span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillsListing() -> impl IntoView {
    view! {
        <div class="mb-4 border-2 border-foreground/20 p-3 bg-background font-mono text-xs">
            <span class="text-green">"$"</span>
            <span class="ml-2">"cat skills.txt"</span>
        </div>
        <div class="border-2 border-foreground/30 bg-background font-mono">
            <div class="bg-foreground/10 px-4 py-2 border-b-2 border-foreground/20 text-xs">
                "SKILLS.txt"
            </div>
            <div class="p-4 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-2 text-sm">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <div class="flex items-center gap-2 border border-foreground/10 px-2 py-1">
                                <span class="text-muted text-xs">
                                    {format!("{:02}", i + 1)}
                                </span>
                                <span>{skill.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="px-4 py-2 border-t-2 border-foreground/10 text-xs text-muted">
                {format!("{} entries", SKILLS.len())}
            </div>
        </div>
    }
}
