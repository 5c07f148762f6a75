// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling.

mod message;

pub use message::{CommitMessage, TypePrefix, ALLOWED_TYPES};
