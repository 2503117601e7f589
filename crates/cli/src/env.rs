// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable access.
//!
//! Names are generated by `build.rs` so every caller agrees on spelling.

/// Environment variable names.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Whether a variable is set to any value (including empty).
pub fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

/// Whether we are running under an AI agent or CI, where color is unwanted.
pub fn is_agent_environment() -> bool {
    [names::CLAUDE_CODE, names::CODEX, names::CURSOR, names::CI]
        .iter()
        .any(|name| is_set(name))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
