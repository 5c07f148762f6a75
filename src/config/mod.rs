// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitlint.
//!
//! This module handles locating and parsing the optional configuration
//! file. A missing file means defaults.

mod loader;
mod schema;

pub use loader::{find_config_file_from, load_config, load_config_from, parse_config};
pub use schema::*;
