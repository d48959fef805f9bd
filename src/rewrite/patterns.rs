use memchr::memmem;
use regex::{NoExpand, Regex};

use std::borrow::Cow;

use crate::config::Config;
use crate::core::constants::github;
use crate::core::error::Result;

/// Compiled blob/tree link patterns for one repository and source branch,
/// together with their literal replacements.
#[derive(Debug, Clone)]
pub struct UrlPatterns {
    blob: Regex,
    tree: Regex,
    blob_replacement: String,
    tree_replacement: String,
    repo_prefix: String,
}

impl UrlPatterns {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.repo, &config.source_branch, &config.target_branch)
    }

    pub fn new(repo: &str, source_branch: &str, target_branch: &str) -> Result<Self> {
        Ok(Self {
            blob: Regex::new(&link_pattern(repo, github::BLOB, source_branch))?,
            tree: Regex::new(&link_pattern(repo, github::TREE, source_branch))?,
            blob_replacement: link_url(repo, github::BLOB, target_branch),
            tree_replacement: link_url(repo, github::TREE, target_branch),
            repo_prefix: format!("{}{}/", github::URL_PREFIX, repo),
        })
    }

    pub fn blob(&self) -> &Regex {
        &self.blob
    }

    pub fn tree(&self) -> &Regex {
        &self.tree
    }

    /// Cheap check before running either regex: every match starts with
    /// `https://github.com/<repo>/`.
    pub fn could_match(&self, content: &str) -> bool {
        memmem::find(content.as_bytes(), self.repo_prefix.as_bytes()).is_some()
    }

    /// Rewrite every blob link, then every tree link. Borrowed when nothing
    /// matched.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if !self.could_match(content) {
            return Cow::Borrowed(content);
        }

        let after_blob = self
            .blob
            .replace_all(content, NoExpand(&self.blob_replacement));

        let after_tree = match self
            .tree
            .replace_all(&after_blob, NoExpand(&self.tree_replacement))
        {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };

        match after_tree {
            Some(rewritten) => Cow::Owned(rewritten),
            None => after_blob,
        }
    }
}

/// `https://github\.com/<repo>/<kind>/<branch>/` with repo and branch escaped.
fn link_pattern(repo: &str, kind: &str, branch: &str) -> String {
    format!(
        "{}{}/{}/{}/",
        regex::escape(github::URL_PREFIX),
        regex::escape(repo),
        kind,
        regex::escape(branch)
    )
}

fn link_url(repo: &str, kind: &str, branch: &str) -> String {
    format!("{}{}/{}/{}/", github::URL_PREFIX, repo, kind, branch)
}
