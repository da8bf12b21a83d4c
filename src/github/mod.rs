mod client;
mod locator;

pub use client::GhClient;
pub use locator::PullRequestLocator;
