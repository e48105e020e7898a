use chrono::{DateTime, Utc};
use leptos::{either::EitherOf3, prelude::*};

use crate::github::{
    fetch_stats, progress_percent, GithubStats, COMMITS_CEILING, FOLLOWERS_CEILING,
    FOLLOWING_CEILING, GITHUB_USERNAME, LINES_OF_CODE_CEILING, PROJECTS_CEILING, REPOS_CEILING,
};
use crate::mode::use_dev_mode;

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %e, %Y").to_string()
}

#[component]
pub fn GithubStatsPanel() -> impl IntoView {
    let is_dev = use_dev_mode();
    // Tracks the mode flag: flipping to developer mode starts the fetch,
    // normal mode never touches the network.
    let stats = LocalResource::new(move || {
        let enabled = is_dev.get();
        async move {
            if !enabled {
                return None;
            }
            Some(fetch_stats(GITHUB_USERNAME).await)
        }
    });

    let status_line = move || match stats.get().flatten() {
        None => EitherOf3::A(view! { <span class="text-yellow">"..."</span> }),
        Some(Ok(_)) => EitherOf3::B(view! {
            <span class="text-green">"✓ GitHub data and statistics loaded successfully"</span>
        }),
        Some(Err(e)) => EitherOf3::C(view! { <span class="text-red">{format!("✗ {e}")}</span> }),
    };

    view! {
        <Show when=move || is_dev.get()>
            <section id="github-stats" class="py-6">
                <div class="container mx-auto px-6">
                    <div class="max-w-6xl mx-auto">
                        <div class="mb-4 border-2 border-foreground/20 p-3 bg-background font-mono text-xs">
                            <div class="flex items-center gap-2 mb-2">
                                <span class="text-green">"$"</span>
                                <span>
                                    {format!("gh api user --username {GITHUB_USERNAME} --stats")}
                                </span>
                            </div>
                            {status_line}
                        </div>

                        <Transition fallback=move || {
                            view! {
                                <div class="border-2 border-foreground/30 p-6 bg-background">
                                    <div class="flex items-center justify-center h-32">
                                        <div class="text-sm font-mono text-muted">
                                            "Loading GitHub data..."
                                        </div>
                                    </div>
                                </div>
                            }
                        }>
                            {move || Suspend::new(async move {
                                match stats.await {
                                    None => EitherOf3::A(()),
                                    Some(Err(e)) => {
                                        EitherOf3::B(
                                            view! {
                                                <div class="border-2 border-foreground/30 p-6 bg-background">
                                                    <div class="text-center text-red font-mono">
                                                        {e.to_string()}
                                                    </div>
                                                </div>
                                            },
                                        )
                                    }
                                    Some(Ok(stats)) => EitherOf3::C(view! { <StatsCard stats /> }),
                                }
                            })}
                        </Transition>
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[component]
fn StatsCard(stats: GithubStats) -> impl IntoView {
    let user = stats.user.clone();
    let tiles: [(&'static str, u64, u64, &'static str); 6] = [
        ("Lines of Code", stats.lines_of_code, LINES_OF_CODE_CEILING, "bg-blue"),
        ("Git Commits", stats.commits, COMMITS_CEILING, "bg-green"),
        ("Projects Completed", stats.original_repos, PROJECTS_CEILING, "bg-yellow"),
        ("Repos Contributed", stats.total_repos, REPOS_CEILING, "bg-red"),
        ("Followers", user.followers, FOLLOWERS_CEILING, "bg-purple"),
        ("Following", user.following, FOLLOWING_CEILING, "bg-cyan"),
    ];

    view! {
        <div class="border-2 border-foreground/30 overflow-hidden bg-background">
            <div class="bg-foreground/10 px-4 py-3 border-b-2 border-foreground/20 flex items-center justify-between font-mono text-xs">
                <span>"GITHUB_STATS.json"</span>
                <span class="text-green">"● ACTIVE"</span>
            </div>

            <div class="p-3">
                <div class="grid md:grid-cols-5 gap-3">
                    <div class="md:col-span-1">
                        <div class="border-2 border-foreground/20 p-1.5 bg-background mb-2">
                            <img
                                src=user.avatar_url.clone()
                                alt=user.name.clone().unwrap_or_else(|| user.login.clone())
                                class="w-full h-auto border-2 border-foreground/10"
                            />
                        </div>
                        <div class="space-y-1 text-xs font-mono">
                            <div class="flex justify-between border-b border-foreground/10 pb-1">
                                <span class="text-muted">"@"</span>
                                <span class="font-bold">{user.login.clone()}</span>
                            </div>
                            {user
                                .location
                                .clone()
                                .map(|location| {
                                    view! {
                                        <div class="flex justify-between text-[10px]">
                                            <span class="text-muted">"Loc:"</span>
                                            <span class="truncate ml-1">{location}</span>
                                        </div>
                                    }
                                })}
                            <div class="flex justify-between text-[10px] border-t border-foreground/10 pt-1">
                                <span class="text-muted">"Joined:"</span>
                                <span>{format_date(&user.created_at)}</span>
                            </div>
                        </div>
                    </div>

                    <div class="md:col-span-2 flex flex-col">
                        <div class="text-[10px] font-mono text-muted mb-1.5">"[BIO]"</div>
                        <div class="border-2 border-foreground/20 p-2.5 bg-background flex-1 flex flex-col">
                            <p class="text-xs font-mono leading-relaxed mb-2.5 flex-1">
                                {user.bio.clone().unwrap_or_else(|| "No bio available".to_string())}
                            </p>
                            <a
                                href=user.html_url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-1.5 px-2.5 py-1 border-2 border-foreground/20 text-[10px] font-mono self-start hover:bg-foreground/10"
                            >
                                "VIEW PROFILE"
                            </a>
                        </div>
                    </div>

                    <div class="md:col-span-2 flex flex-col">
                        <div class="text-[10px] font-mono text-muted mb-1.5">"[STATISTICS]"</div>
                        <div class="grid grid-cols-2 gap-2 flex-1">
                            {tiles
                                .into_iter()
                                .enumerate()
                                .map(|(i, (label, value, ceiling, bar_class))| {
                                    view! { <StatTile index=i label value ceiling bar_class /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <div class="bg-foreground/5 px-4 py-2 border-t-2 border-foreground/10 flex items-center justify-between text-xs font-mono">
                <div class="text-muted">
                    {format!(
                        "Last updated: {} | Source: GitHub API",
                        format_date(&user.updated_at),
                    )}
                </div>
                <div class="text-muted">"Status: ONLINE"</div>
            </div>
        </div>
    }
}

#[component]
fn StatTile(
    index: usize,
    label: &'static str,
    value: u64,
    ceiling: u64,
    bar_class: &'static str,
) -> impl IntoView {
    let percent = progress_percent(value, ceiling);

    view! {
        <div class="border-2 border-foreground/20 p-2 bg-background flex flex-col">
            <div class="flex items-center gap-1 mb-1.5">
                <span class="text-[10px] font-mono uppercase">{label}</span>
            </div>
            <div class="mb-1.5 flex-1 flex items-center">
                <span class="text-lg font-bold font-mono">{format_count(value)}</span>
            </div>
            <div class="w-full bg-foreground/10 border border-foreground/20 mb-1 overflow-hidden h-[3px]">
                <div
                    class=format!("h-full {bar_class}")
                    style=format!("width: {percent:.0}%")
                ></div>
            </div>
            <div class="text-[9px] font-mono text-muted">{format!("ID: {:02}", index + 1)}</div>
        </div>
    }
}

/// Thousands separators for counter display.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_render_with_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
