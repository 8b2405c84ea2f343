//! Top-level diagnostic error type for autodoc.
//!
//! Each area defines its own error enum with miette `#[diagnostic]` derives;
//! [`AutodocError`] wraps them transparently so codes and help text reach
//! the user unchanged.

use miette::Diagnostic;
use thiserror::Error;

use crate::grammar::GrammarError;
use crate::settings::SettingsError;

#[derive(Debug, Error, Diagnostic)]
pub enum AutodocError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Settings(#[from] SettingsError),

    #[error("failed to read declarations: {path}")]
    #[diagnostic(
        code(autodoc::input::read),
        help("Pass a readable JSON file, or \"-\" to read from standard input.")
    )]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse declarations: {path}: {message}")]
    #[diagnostic(
        code(autodoc::input::parse),
        help(
            "The input must be a JSON array of declarations, each with at least \
             \"kind\" and \"name\", e.g. [{{\"kind\": \"method\", \"name\": \"GetUser\", \"type\": \"User\"}}]."
        )
    )]
    InputParse { path: String, message: String },

    #[error("failed to encode output: {message}")]
    #[diagnostic(code(autodoc::output::encode))]
    OutputEncode { message: String },
}

/// Result type alias for autodoc operations.
pub type AutodocResult<T> = std::result::Result<T, AutodocError>;
