use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use crate::mode::use_dev_mode;

pub(crate) struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub github: &'static str,
    pub live: &'static str,
    pub tech: &'static [&'static str],
    pub in_progress: bool,
    pub detail: Option<ProjectDetail>,
}

pub(crate) struct ProjectDetail {
    pub full_description: &'static str,
    pub features: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub learnings: &'static [&'static str],
    pub screenshots: &'static [(&'static str, &'static str)],
}

pub(crate) static PROJECTS: [Project; 4] = [
    Project {
        id: "fintrack",
        title: "FinTrack - Personal Finance Manager",
        description: "A comprehensive personal finance management application for tracking expenses, income, and budgets with real-time analytics, built with user and admin dashboards for different access levels.",
        image: "/images/fintrack/1.png",
        github: "https://github.com/bethe19/fintrack",
        live: "https://fintrack-bethe.vercel.app",
        tech: &["React", "Node.js", "Express", "PostgreSQL"],
        in_progress: false,
        detail: Some(ProjectDetail {
            full_description: "FinTrack is a comprehensive personal finance management application designed to help users track their expenses, income, and budgets effectively. Built with modern web technologies, it provides an intuitive interface for managing financial data with real-time analytics and insights. The application features both user and admin dashboards, offering different levels of access and functionality for various user roles.",
            features: &[
                "Real-time expense and income tracking",
                "Budget creation and monitoring",
                "Interactive charts and financial analytics",
                "Multi-category expense classification",
                "Admin dashboard for user management",
                "Secure user authentication and authorization",
                "Responsive design for mobile and desktop",
                "Data export and reporting capabilities",
            ],
            challenges: &[
                "Implementing secure authentication and role-based access control",
                "Designing an intuitive UI for complex financial data visualization",
                "Optimizing database queries for real-time analytics",
                "Creating responsive charts that work across all devices",
                "Managing state efficiently across multiple components",
            ],
            learnings: &[
                "Advanced React patterns and state management",
                "Building RESTful APIs with Node.js",
                "Database design and optimization",
                "Implementing secure authentication systems",
                "Creating responsive and accessible UI components",
            ],
            screenshots: &[
                ("/images/fintrack/1.png", "Dashboard Overview"),
                ("/images/fintrack/2.png", "Expense Tracking Interface"),
                ("/images/fintrack/3.png", "Budget Management"),
                ("/images/fintrack/admin.png", "Admin Dashboard"),
                ("/images/fintrack/admin2.png", "User Management Panel"),
            ],
        }),
    },
    Project {
        id: "moodie",
        title: "Moodie - Mood based Movie Discovery Web App",
        description: "Built with HTML, CSS, and JavaScript, integrated with the TMDB API. Features real-time movie search and interactive card hover animations. Moodie is a web platform built for movie enthusiasts to discover, browse, and keep track of films in a seamless way.",
        image: "/images/moodie.png",
        github: "https://github.com/bethe19/moodie-movie-site",
        live: "https://moodie-neon.vercel.app",
        tech: &["HTML", "CSS", "JavaScript", "TMDB API"],
        in_progress: false,
        detail: None,
    },
    Project {
        id: "notie",
        title: "Notie - Simple Note Taking App",
        description: "A lightweight, user-friendly note-taking application designed to help users capture ideas, tasks, and reminders efficiently. Built from scratch with HTML, CSS, and JavaScript to practice DOM manipulation and localStorage.",
        image: "/images/notie.png",
        github: "https://github.com/bethe19/notie",
        live: "https://notie-ashen.vercel.app/",
        tech: &["HTML", "CSS", "JavaScript"],
        in_progress: false,
        detail: None,
    },
    Project {
        id: "scoutai",
        title: "ScoutAI - Football Talent Analysis",
        description: "Custom AI project concept to analyze football talent. Aimed at building a mid-level AI model for practical scouting applications that turns raw performance metrics into actionable insights for scouts, coaches, and players.",
        image: "/images/scoutai.webp",
        github: "#",
        live: "#",
        tech: &["Python", "Machine Learning"],
        in_progress: true,
        detail: None,
    },
];

fn wrap_prev(index: usize) -> usize {
    if index == 0 {
        PROJECTS.len() - 1
    } else {
        index - 1
    }
}

fn wrap_next(index: usize) -> usize {
    (index + 1) % PROJECTS.len()
}

#[component]
pub fn Projects() -> impl IntoView {
    let is_dev = use_dev_mode();
    let (selected, set_selected) = signal(0usize);

    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-6">
                <div class="max-w-6xl mx-auto">
                    {move || {
                        if is_dev.get() {
                            Either::Left(view! { <ProjectInspector selected set_selected /> })
                        } else {
                            Either::Right(view! { <ProjectCarousel selected set_selected /> })
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCarousel(selected: ReadSignal<usize>, set_selected: WriteSignal<usize>) -> impl IntoView {
    view! {
        <h2 class="text-2xl font-medium mb-12 text-center uppercase tracking-wider">"Projects"</h2>
        <div class="relative">
            <div class="flex items-center gap-3">
                <button
                    class="px-3 py-2 border border-muted/40 rounded-md hover:bg-foreground hover:text-background transition-colors"
                    aria-label="Previous project"
                    on:click=move |_| set_selected.update(|i| *i = wrap_prev(*i))
                >
                    "‹"
                </button>
                <div class="flex-1">
                    {move || {
                        let project = &PROJECTS[selected.get()];
                        view! { <ProjectCard project /> }
                    }}
                </div>
                <button
                    class="px-3 py-2 border border-muted/40 rounded-md hover:bg-foreground hover:text-background transition-colors"
                    aria-label="Next project"
                    on:click=move |_| set_selected.update(|i| *i = wrap_next(*i))
                >
                    "›"
                </button>
            </div>
            <div class="flex justify-center gap-2 mt-6">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == i {
                                        "w-2.5 h-2.5 rounded-full bg-foreground"
                                    } else {
                                        "w-2.5 h-2.5 rounded-full bg-muted/40 hover:bg-muted"
                                    }
                                }
                                aria-label=format!("Show {}", project.title)
                                on:click=move |_| set_selected.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group border border-muted/30 rounded-md overflow-hidden bg-card transition-all duration-300 hover:-translate-y-1 hover:shadow-lg">
            <div class="flex flex-col md:flex-row">
                <div class="md:w-80 flex-shrink-0">
                    <div class="relative aspect-video md:aspect-[4/3.5] overflow-hidden bg-muted/10">
                        <img
                            src=project.image
                            alt=project.title
                            loading="lazy"
                            class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                        />
                    </div>
                </div>
                <div class="flex-1 p-5 flex flex-col justify-between">
                    <div>
                        <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                        <p class="text-sm text-muted">{project.description}</p>
                        <div class="flex flex-wrap gap-2 mt-3">
                            {project
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="rounded-md px-2 py-1 bg-muted/20 text-xs">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex gap-3 mt-4">
                        {if project.in_progress {
                            Either::Left(
                                view! {
                                    <span class="px-3 py-1.5 text-sm rounded-md bg-muted/20 text-muted cursor-default">
                                        "In Progress"
                                    </span>
                                },
                            )
                        } else {
                            Either::Right(
                                view! {
                                    <a
                                        href=project.github
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-3 py-1.5 text-sm border border-muted/40 rounded-md hover:bg-foreground hover:text-background transition-colors"
                                    >
                                        "GitHub"
                                    </a>
                                    <a
                                        href=project.live
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="px-3 py-1.5 text-sm bg-foreground text-background rounded-md hover:opacity-90 transition-opacity"
                                    >
                                        "Live Preview"
                                    </a>
                                },
                            )
                        }}
                        {project
                            .detail
                            .as_ref()
                            .map(|_| {
                                view! {
                                    <A
                                        href=format!("/projects/{}", project.id)
                                        attr:class="px-3 py-1.5 text-sm underline hover:opacity-70"
                                    >
                                        "Details"
                                    </A>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectInspector(selected: ReadSignal<usize>, set_selected: WriteSignal<usize>) -> impl IntoView {
    view! {
        <div class="mb-4 border-2 border-foreground/20 p-3 bg-background font-mono text-xs">
            <span class="text-green">"$"</span>
            <span class="ml-2">"ls projects/ --detail"</span>
        </div>
        <div class="border-2 border-foreground/30 bg-background font-mono">
            <div class="flex flex-wrap border-b-2 border-foreground/20">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
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
                                {format!("{}/", project.id)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let project = &PROJECTS[selected.get()];
                view! {
                    <div class="p-4 text-sm space-y-2">
                        <div>
                            <span class="text-muted">"title: "</span>
                            {project.title}
                        </div>
                        <div>
                            <span class="text-muted">"stack: "</span>
                            {project.tech.join(", ")}
                        </div>
                        <div>
                            <span class="text-muted">"status: "</span>
                            <span class=if project.in_progress {
                                "text-yellow"
                            } else {
                                "text-green"
                            }>
                                {if project.in_progress { "● IN PROGRESS" } else { "● SHIPPED" }}
                            </span>
                        </div>
                        <p class="text-muted leading-relaxed pt-2">{project.description}</p>
                        <div class="flex gap-4 pt-2 text-xs">
                            {(!project.in_progress)
                                .then(|| {
                                    view! {
                                        <a
                                            href=project.github
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-cyan hover:underline"
                                        >
                                            "[source]"
                                        </a>
                                        <a
                                            href=project.live
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-cyan hover:underline"
                                        >
                                            "[live]"
                                        </a>
                                    }
                                })}
                            {project
                                .detail
                                .as_ref()
                                .map(|_| {
                                    view! {
                                        <A
                                            href=format!("/projects/{}", project.id)
                                            attr:class="text-cyan hover:underline"
                                        >
                                            "[readme]"
                                        </A>
                                    }
                                })}
                        </div>
                    </div>
                }
            }}
            <div class="px-4 py-2 border-t-2 border-foreground/10 text-xs text-muted">
                {format!(
                    "{} projects, {} shipped",
                    PROJECTS.len(),
                    PROJECTS.iter().filter(|p| !p.in_progress).count(),
                )}
            </div>
        </div>
    }
}

/// Detail route for projects that carry extended documentation.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || params.get().get("id").unwrap_or_default();

    view! {
        {move || {
            let id = project_id();
            let project = PROJECTS.iter().find(|p| p.id == id);
            match project.and_then(|p| p.detail.as_ref().map(|d| (p, d))) {
                Some((project, detail)) => Either::Left(view! { <ProjectDetailView project detail /> }),
                None => {
                    Either::Right(
                        view! {
                            <Title text="Project Not Found" />
                            <div class="min-h-screen flex items-center justify-center px-4">
                                <div class="text-center">
                                    <h1 class="text-4xl font-bold mb-4">"Project Not Found"</h1>
                                    <p class="text-muted mb-6">
                                        "The project you're looking for doesn't exist or doesn't have detailed information."
                                    </p>
                                    <A href="/" attr:class="underline hover:opacity-70">
                                        "Back to Home"
                                    </A>
                                </div>
                            </div>
                        },
                    )
                }
            }
        }}
    }
}

#[component]
fn ProjectDetailView(
    project: &'static Project,
    detail: &'static ProjectDetail,
) -> impl IntoView {
    view! {
        <Title text=project.title />
        <div class="min-h-screen bg-background">
            <div class="border-b border-muted/30">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
                    <A href="/" attr:class="inline-block mb-6 text-sm hover:opacity-70">
                        "← Back"
                    </A>
                    <div class="max-w-4xl">
                        <h1 class="text-4xl sm:text-5xl font-bold mb-4">{project.title}</h1>
                        <p class="text-lg text-muted mb-6">{detail.full_description}</p>
                        <div class="flex flex-wrap gap-2 mb-6">
                            {project
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-3 py-1.5 text-sm rounded-md bg-muted/20 dev-mode:rounded-none dev-mode:border-2 dev-mode:border-foreground/10">
                                            {*tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex flex-wrap gap-3">
                            <a
                                href=project.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 border border-muted/40 rounded-md hover:bg-foreground hover:text-background transition-colors"
                            >
                                "View on GitHub"
                            </a>
                            <a
                                href=project.live
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 bg-foreground text-background rounded-md hover:opacity-90 transition-opacity"
                            >
                                "Live Demo"
                            </a>
                        </div>
                    </div>
                </div>
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="max-w-6xl mx-auto">
                    <section class="mb-16">
                        <h2 class="text-3xl font-bold mb-6">"Project Screenshots"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {detail
                                .screenshots
                                .iter()
                                .map(|(src, caption)| {
                                    view! {
                                        <div class="group rounded-xl overflow-hidden shadow-lg hover:shadow-2xl transition-all duration-300 dev-mode:rounded-none dev-mode:border-2 dev-mode:border-foreground/10">
                                            <div class="relative aspect-[16/10] overflow-hidden bg-muted/10">
                                                <img
                                                    src=*src
                                                    alt=*caption
                                                    loading="lazy"
                                                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                                                />
                                            </div>
                                            <div class="p-3 bg-card">
                                                <p class="text-sm text-muted text-center">{*caption}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section class="mb-16">
                        <h2 class="text-3xl font-bold mb-6">"Key Features"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {detail
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <div class="flex items-start gap-3 p-4 rounded-lg bg-card border border-muted/30 dev-mode:rounded-none dev-mode:border-2">
                                            <div class="w-2 h-2 rounded-full bg-foreground mt-2 flex-shrink-0 dev-mode:rounded-none"></div>
                                            <p>{*feature}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section class="mb-16">
                        <h2 class="text-3xl font-bold mb-6">"Challenges & Solutions"</h2>
                        <div class="space-y-4">
                            {detail
                                .challenges
                                .iter()
                                .map(|challenge| {
                                    view! {
                                        <div class="p-5 rounded-lg bg-muted/10 border-l-4 border-foreground dev-mode:rounded-none">
                                            <p>{*challenge}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <section class="mb-16">
                        <h2 class="text-3xl font-bold mb-6">"What I Learned"</h2>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                            {detail
                                .learnings
                                .iter()
                                .map(|learning| {
                                    view! {
                                        <div class="p-4 rounded-lg bg-card border border-muted/30 hover:shadow-md transition-shadow dev-mode:rounded-none dev-mode:border-2">
                                            <p class="text-sm">{*learning}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn carousel_navigation_wraps_in_both_directions() {
        assert_eq!(wrap_prev(0), PROJECTS.len() - 1);
        assert_eq!(wrap_next(PROJECTS.len() - 1), 0);
        assert_eq!(wrap_next(0), 1);
        assert_eq!(wrap_prev(2), 1);
    }

    #[test]
    fn in_progress_projects_have_no_outbound_links() {
        for project in PROJECTS.iter().filter(|p| p.in_progress) {
            assert_eq!(project.github, "#");
            assert_eq!(project.live, "#");
        }
    }
}
