use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

pub const GITHUB_USERNAME: &str = "bethe19";

const API_BASE: &str = "https://api.github.com";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Heuristic: one KiB of repository content counts as 50 lines of code.
const LINES_PER_KB: u64 = 50;
/// How many non-fork repositories get their commit history queried; the rest
/// are extrapolated linearly from the sample.
const COMMIT_SAMPLE_SIZE: usize = 10;
/// Courtesy pause between per-repository commit lookups to stay under the
/// unauthenticated rate limit.
const COMMIT_LOOKUP_DELAY_MS: u32 = 100;

// Progress-bar ceilings per counter; bars cap at 100%.
pub const LINES_OF_CODE_CEILING: u64 = 100_000;
pub const COMMITS_CEILING: u64 = 2_000;
pub const PROJECTS_CEILING: u64 = 50;
pub const REPOS_CEILING: u64 = 50;
pub const FOLLOWERS_CEILING: u64 = 1_000;
pub const FOLLOWING_CEILING: u64 = 500;

/// Aggregates are fetched at most once per page load; repeated developer-mode
/// toggles reuse the cached result.
static STATS_CACHE: LazyLock<DashMap<String, GithubStats>> = LazyLock::new(DashMap::new);

#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub avatar_url: String,
    pub html_url: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub size: u64,
    pub fork: bool,
}

#[derive(Debug, Clone)]
pub struct GithubStats {
    pub user: GithubUser,
    pub lines_of_code: u64,
    pub commits: u64,
    pub original_repos: u64,
    pub total_repos: u64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Failed to fetch user data")]
    Profile,
    #[error("Failed to fetch repos")]
    Repos,
}

pub fn estimate_lines_of_code(total_size_kb: u64) -> u64 {
    total_size_kb * LINES_PER_KB
}

/// Linear extrapolation of a sampled commit count to all `original_count`
/// repositories: `C + round((C / s) * (K - s))`, with the sampled total `C`
/// returned unchanged when the sample already covers every repository.
pub fn extrapolate_commits(sampled: u64, sample_size: usize, original_count: usize) -> u64 {
    if sample_size == 0 || original_count <= sample_size {
        return sampled;
    }
    let avg = sampled as f64 / sample_size as f64;
    sampled + (avg * (original_count - sample_size) as f64).round() as u64
}

/// Percentage for a counter's progress bar, capped at 100.
pub fn progress_percent(value: u64, ceiling: u64) -> f64 {
    if ceiling == 0 {
        return 100.0;
    }
    ((value as f64 / ceiling as f64) * 100.0).min(100.0)
}

/// Pulls the last page number out of a GitHub `Link` pagination header. With
/// `per_page=1` that number is the commit count.
fn last_page_from_link(link: &str) -> Option<u64> {
    link.split(',').find_map(|part| {
        let (target, rel) = part.split_once(';')?;
        if !rel.contains("rel=\"last\"") {
            return None;
        }
        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        let (_, query) = target.split_once('?')?;
        query.split('&').find_map(|kv| {
            let (key, value) = kv.split_once('=')?;
            if key == "page" {
                value.parse().ok()
            } else {
                None
            }
        })
    })
}

async fn fetch_commit_count(
    client: &reqwest::Client,
    username: &str,
    repo: &str,
) -> Option<u64> {
    let resp = client
        .get(format!("{API_BASE}/repos/{username}/{repo}/commits"))
        .query(&[("per_page", "1")])
        .header("Accept", ACCEPT)
        .send()
        .await
        .ok()?;
    if !resp.status().is_success() {
        return None;
    }
    if let Some(link) = resp.headers().get("link").and_then(|v| v.to_str().ok()) {
        if let Some(last_page) = last_page_from_link(link) {
            return Some(last_page);
        }
    }
    // No pagination header means zero or one commit
    let commits: Vec<serde_json::Value> = resp.json().await.ok()?;
    Some(if commits.is_empty() { 0 } else { 1 })
}

/// Fetches the profile and repository list for `username` and derives the
/// aggregate counters. Profile/repo failures surface as [`StatsError`]; a
/// failed per-repository commit lookup is skipped and only lowers accuracy.
pub async fn fetch_stats(username: &str) -> Result<GithubStats, StatsError> {
    if let Some(cached) = STATS_CACHE.get(username) {
        return Ok(cached.clone());
    }

    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{API_BASE}/users/{username}"))
        .header("Accept", ACCEPT)
        .send()
        .await
        .map_err(|e| {
            log::error!("github profile request failed: {e}");
            StatsError::Profile
        })?;
    if !resp.status().is_success() {
        return Err(StatsError::Profile);
    }
    let user: GithubUser = resp.json().await.map_err(|_| StatsError::Profile)?;

    let resp = client
        .get(format!("{API_BASE}/users/{username}/repos"))
        .query(&[("per_page", "100"), ("sort", "updated")])
        .header("Accept", ACCEPT)
        .send()
        .await
        .map_err(|e| {
            log::error!("github repos request failed: {e}");
            StatsError::Repos
        })?;
    if !resp.status().is_success() {
        return Err(StatsError::Repos);
    }
    let repos: Vec<GithubRepo> = resp.json().await.map_err(|_| StatsError::Repos)?;

    let total_repos = repos.len() as u64;
    let total_size_kb: u64 = repos.iter().map(|r| r.size).sum();
    let original: Vec<&GithubRepo> = repos.iter().filter(|r| !r.fork).collect();

    let sample = &original[..original.len().min(COMMIT_SAMPLE_SIZE)];
    let mut sampled_commits = 0;
    for repo in sample {
        match fetch_commit_count(&client, username, &repo.name).await {
            Some(count) => sampled_commits += count,
            None => log::debug!("skipping commit count for {}", repo.name),
        }
        gloo_timers::future::TimeoutFuture::new(COMMIT_LOOKUP_DELAY_MS).await;
    }

    let stats = GithubStats {
        lines_of_code: estimate_lines_of_code(total_size_kb),
        commits: extrapolate_commits(sampled_commits, sample.len(), original.len()),
        original_repos: original.len() as u64,
        total_repos,
        user,
    };
    STATS_CACHE.insert(username.to_string(), stats.clone());
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrapolates_beyond_the_sample() {
        // 40 commits over 10 sampled repos, 25 original repos total:
        // 40 + round(4.0 * 15) = 100
        assert_eq!(extrapolate_commits(40, 10, 25), 100);
    }

    #[test]
    fn extrapolation_rounds_the_projected_share() {
        // 7 commits over 10 sampled repos, 13 original repos total:
        // 7 + round(0.7 * 3) = 7 + 2
        assert_eq!(extrapolate_commits(7, 10, 13), 9);
    }

    #[test]
    fn sample_covering_all_repos_is_exact() {
        assert_eq!(extrapolate_commits(42, 7, 7), 42);
        assert_eq!(extrapolate_commits(42, 10, 3), 42);
    }

    #[test]
    fn empty_sample_extrapolates_to_nothing() {
        assert_eq!(extrapolate_commits(0, 0, 25), 0);
    }

    #[test]
    fn lines_of_code_scale_with_repo_size() {
        assert_eq!(estimate_lines_of_code(0), 0);
        assert_eq!(estimate_lines_of_code(1_234), 61_700);
    }

    #[test]
    fn progress_is_proportional_below_the_ceiling() {
        assert_eq!(progress_percent(500, 2_000), 25.0);
        assert_eq!(progress_percent(0, 2_000), 0.0);
    }

    #[test]
    fn progress_never_exceeds_one_hundred() {
        assert_eq!(progress_percent(5_000, 2_000), 100.0);
        assert_eq!(progress_percent(2_000, 2_000), 100.0);
        assert_eq!(progress_percent(1, 0), 100.0);
    }

    #[test]
    fn link_header_yields_the_last_page() {
        let link = "<https://api.github.com/repositories/123/commits?per_page=1&page=2>; rel=\"next\", \
                    <https://api.github.com/repositories/123/commits?per_page=1&page=347>; rel=\"last\"";
        assert_eq!(last_page_from_link(link), Some(347));
    }

    #[test]
    fn link_header_without_last_rel_is_ignored() {
        let link = "<https://api.github.com/repositories/123/commits?per_page=1&page=2>; rel=\"next\"";
        assert_eq!(last_page_from_link(link), None);
        assert_eq!(last_page_from_link("not a link header"), None);
    }
}
