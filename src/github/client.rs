use super::PullRequestLocator;
use crate::error::GitHubError;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Thin wrapper over `gh api`; authentication is whatever `gh` is logged in with.
pub struct GhClient {
    binary: PathBuf,
}

impl GhClient {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Fetch review comments as raw JSON. With `--paginate`, `gh` prints one
    /// array per page back to back.
    pub fn fetch_comments(&self, locator: &PullRequestLocator) -> Result<String, GitHubError> {
        let endpoint = locator.comments_endpoint();
        debug!("Fetching {} via {}", endpoint, self.binary.display());

        let mut cmd = Command::new(&self.binary);
        cmd.arg("api").arg("--paginate").arg(&endpoint);

        let output = cmd.output().map_err(GitHubError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitHubError::GhCli(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
