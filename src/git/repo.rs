// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository access.

use crate::commit::CommitMessage;
use crate::error::{GitError, LintError, Result};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                LintError::Git(GitError::NotARepository {
                    path: path.to_path_buf(),
                })
            } else {
                LintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        tracing::debug!("Opened repository at {:?}", repo.path());
        Ok(Self { inner: repo })
    }

    /// Get the message of the HEAD commit.
    pub fn head_message(&self) -> Result<String> {
        let head = self.inner.head().map_err(|e| match e.code() {
            git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound => {
                LintError::Git(GitError::NoCommits)
            }
            _ => LintError::Git(GitError::from(e)),
        })?;

        let commit = head
            .peel_to_commit()
            .map_err(|e| LintError::Git(GitError::from(e)))?;

        let message = commit.message().ok_or_else(|| {
            LintError::Git(GitError::InvalidMessage {
                commit: commit.id().to_string(),
            })
        })?;

        tracing::debug!("Read message of commit {}", commit.id());
        Ok(message.to_string())
    }
}

/// Provides the latest commit message of a repository.
pub trait MessageSource {
    /// Return the latest commit message for the repository at `path`.
    ///
    /// Fails with a [`GitError`] when no message is available.
    fn latest_message(&self, path: &Path) -> Result<CommitMessage>;
}

/// Message source backed by libgit2.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitSource;

impl MessageSource for GitSource {
    fn latest_message(&self, path: &Path) -> Result<CommitMessage> {
        get_latest_commit_message(path).map(CommitMessage::from)
    }
}

/// Get the latest commit message of the repository containing `path`.
pub fn get_latest_commit_message(path: &Path) -> Result<String> {
    let repo = Repository::open(path)?;
    repo.head_message()
}
