use leptos::{either::Either, prelude::*};

use crate::mode::use_dev_mode;

struct Achievement {
    title: &'static str,
    org: &'static str,
    year: &'static str,
    description: &'static str,
    badge: &'static str,
    level: &'static str,
}

static ACHIEVEMENTS: [Achievement; 3] = [
    Achievement {
        title: "AI Research Intern",
        org: "iCog Labs",
        year: "2025",
        description: "Contributing to cutting-edge AI research",
        badge: "RESEARCH",
        level: "ADVANCED",
    },
    Achievement {
        title: "Full-Stack Developer",
        org: "Professional",
        year: "Ongoing",
        description: "Building production-ready applications",
        badge: "DEVELOPER",
        level: "PROFESSIONAL",
    },
    Achievement {
        title: "Software Engineering Student",
        org: "AAiT",
        year: "2024-2028",
        description: "Pursuing B.Sc. in Software Engineering",
        badge: "STUDENT",
        level: "ACTIVE",
    },
];

#[component]
pub fn Achievements() -> impl IntoView {
    let is_dev = use_dev_mode();

    view! {
        <section id="achievements" class="py-6">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    {move || {
                        if is_dev.get() {
                            Either::Left(view! { <BadgeBoard /> })
                        } else {
                            Either::Right(view! { <AchievementGrid /> })
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AchievementGrid() -> impl IntoView {
    view! {
        <div class="text-center mb-6">
            <h2 class="text-2xl font-bold mb-2 uppercase tracking-wider">
                "Achievements & Certifications"
            </h2>
            <p class="text-sm text-muted">"Milestones and recognition"</p>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            {ACHIEVEMENTS
                .iter()
                .map(|achievement| {
                    view! {
                        <div class="border-2 border-muted/30 rounded-lg p-6 bg-card h-full transition-all duration-300 hover:-translate-y-1 hover:shadow-lg">
                            <div class="flex items-start gap-4">
                                <span class="text-2xl text-yellow flex-shrink-0">"★"</span>
                                <div>
                                    <h3 class="text-lg font-semibold mb-1">{achievement.title}</h3>
                                    <p class="text-sm text-muted mb-2">
                                        {format!("{} • {}", achievement.org, achievement.year)}
                                    </p>
                                    <p class="text-xs text-muted">{achievement.description}</p>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn BadgeBoard() -> impl IntoView {
    view! {
        <div class="mb-4 border-2 border-foreground/20 p-3 bg-background font-mono text-xs">
            <span class="text-muted">"$"</span>
            <span class="ml-2">"ls achievements/ --badges"</span>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
            {ACHIEVEMENTS
                .iter()
                .enumerate()
                .map(|(i, achievement)| {
                    view! {
                        <div class="border-2 border-foreground/30 overflow-hidden bg-background">
                            <div class="bg-foreground/10 px-4 py-3 border-b-2 border-foreground/20">
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center gap-3">
                                        <div class="p-2 border-2 border-foreground/30 bg-background text-yellow">
                                            "★"
                                        </div>
                                        <div>
                                            <div class="text-sm font-bold font-mono">
                                                {achievement.title}
                                            </div>
                                            <div class="text-xs text-muted font-mono">
                                                {achievement.org}
                                            </div>
                                        </div>
                                    </div>
                                    <div class="text-right">
                                        <div class="px-2 py-1 border-2 border-foreground/30 bg-background text-xs font-mono mb-1">
                                            {achievement.badge}
                                        </div>
                                        <div class="text-xs font-mono text-green">
                                            {achievement.level}
                                        </div>
                                    </div>
                                </div>
                            </div>

                            <div class="p-4">
                                <div class="mb-3 text-xs text-muted">{achievement.description}</div>
                                <div class="space-y-2 text-xs font-mono">
                                    <div class="flex justify-between border-t-2 border-foreground/10 pt-2">
                                        <span class="text-muted">"Year:"</span>
                                        <span>{achievement.year}</span>
                                    </div>
                                    <div class="flex justify-between">
                                        <span class="text-muted">"Status:"</span>
                                        <span class="text-green">"● ACTIVE"</span>
                                    </div>
                                    <div class="flex justify-between">
                                        <span class="text-muted">"ID:"</span>
                                        <span>{format!("ACH_{:03}", i + 1)}</span>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <div class="mt-4 border-2 border-foreground/20 p-3 bg-background">
            <div class="flex items-center justify-between text-xs font-mono">
                <div class="flex items-center gap-4 text-muted">
                    <span>{format!("Total Achievements: {}", ACHIEVEMENTS.len())}</span>
                    <span>{format!("Active: {}", ACHIEVEMENTS.len())}</span>
                </div>
                <span class="text-green">"ALL VERIFIED"</span>
            </div>
        </div>
    }
}
