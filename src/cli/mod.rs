//! CLI support for jg
//!
//! Provides programmatic access to the `jg` pipeline (substitutions, compile,
//! evaluate, encode) for embedding in other tools.

mod docs;
mod generate;

pub use docs::{ABOUT, HELP};
pub use generate::{GenerateOptions, build_evaluator, execute_generate, parse_substitution};

use std::io;

use crate::CompileError;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Generator or substitution value failed to compile
    #[error("{0}")]
    Compile(#[from] CompileError),

    /// `-s` argument without a `NAME=` prefix
    #[error("Invalid substitution {0:?}: expected NAME=VALUE")]
    InvalidSubstitution(String),

    /// JSON encoding error
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Nothing to compile
    #[error("No generator expressions provided. Pass them as arguments or pipe them to stdin.")]
    NoInput,
}
