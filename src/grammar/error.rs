//! Diagnostic error types for reading type references.
//!
//! Synthesis itself never fails: a shape it does not understand degrades to
//! its bare name. These errors only come out of [`TypeShape`] parsing, where a
//! host or the CLI hands us a type reference spelled as source text.
//!
//! [`TypeShape`]: super::shape::TypeShape

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while reading a type reference into a [`super::shape::TypeShape`].
#[derive(Debug, Error, Diagnostic)]
pub enum GrammarError {
    #[error("empty type reference")]
    #[diagnostic(
        code(autodoc::grammar::empty_input),
        help("Provide a type name such as \"int\", \"User[]\" or \"List<string>\".")
    )]
    EmptyInput,

    #[error("type reference \"{input}\" ended early: expected {expected}")]
    #[diagnostic(
        code(autodoc::grammar::unexpected_end),
        help("Check that every '<' has a matching '>' and every '[' a matching ']'.")
    )]
    UnexpectedEnd { input: String, expected: String },

    #[error("unexpected '{found}' at offset {offset} in type reference \"{input}\"")]
    #[diagnostic(
        code(autodoc::grammar::unexpected_char),
        help(
            "Type references are identifiers, dotted names, generic arguments in \
             angle brackets and trailing '[]' array ranks, e.g. \"Dictionary<int, User[]>\"."
        )
    )]
    UnexpectedChar {
        input: String,
        found: char,
        offset: usize,
    },

    #[error("generic type \"{name}\" has no type arguments")]
    #[diagnostic(
        code(autodoc::grammar::empty_type_arguments),
        help("Write at least one type argument between the angle brackets, e.g. \"{name}<int>\".")
    )]
    EmptyTypeArguments { name: String },
}

/// Result type for grammar operations.
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;
