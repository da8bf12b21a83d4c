use crate::error::GitHubError;
use regex::Regex;
use std::sync::LazyLock;

static PR_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?github\.com/(?P<owner>[\w.-]+)/(?P<repo>[\w.-]+)/pull/(?P<number>\d+)(?P<rest>[/?#]\S*)?$",
    )
    .expect("pull request pattern is valid")
});

static REVIEW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:#pullrequestreview-|/reviews/)(?P<id>\d+)").expect("review pattern is valid")
});

/// Where a pull request (and optionally one review on it) lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub review_id: Option<u64>,
}

impl PullRequestLocator {
    /// Parse `https://github.com/{owner}/{repo}/pull/{n}`, optionally followed by
    /// `/files`, a query, or a `#pullrequestreview-{id}` fragment.
    pub fn parse(url: &str) -> Result<Self, GitHubError> {
        let invalid = || GitHubError::InvalidUrl(url.to_string());
        let caps = PR_URL_RE.captures(url.trim()).ok_or_else(invalid)?;

        let number = caps["number"].parse::<u64>().map_err(|_| invalid())?;
        let review_id = caps
            .name("rest")
            .and_then(|rest| REVIEW_RE.captures(rest.as_str()))
            .and_then(|c| c["id"].parse::<u64>().ok());

        Ok(Self {
            owner: caps["owner"].to_string(),
            repo: caps["repo"].to_string(),
            number,
            review_id,
        })
    }

    /// REST path for `gh api`: all review comments, or one review's comments.
    pub fn comments_endpoint(&self) -> String {
        match self.review_id {
            Some(review) => format!(
                "repos/{}/{}/pulls/{}/reviews/{}/comments",
                self.owner, self.repo, self.number, review
            ),
            None => format!(
                "repos/{}/{}/pulls/{}/comments",
                self.owner, self.repo, self.number
            ),
        }
    }
}

impl std::fmt::Display for PullRequestLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)?;
        if let Some(review) = self.review_id {
            write!(f, " (review {})", review)?;
        }
        Ok(())
    }
}
