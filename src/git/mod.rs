// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Retrieves the latest commit message of a repository.

mod repo;

pub use repo::{get_latest_commit_message, GitSource, MessageSource, Repository};
