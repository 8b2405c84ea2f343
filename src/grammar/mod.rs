//! Comment-text synthesis: the natural-language side of autodoc.
//!
//! Everything in this module is pure. Builders borrow their word maps and
//! pluralizer, take options by value and return fresh strings; nothing here
//! reads global state or performs I/O, so one set of builders can serve any
//! number of threads.
//!
//! ## Pipeline
//!
//! ```text
//! member name ──→ split ──→ summary ──────────────┐
//!                              │                   │
//!                          translate          GeneratedComment
//!                              │                   │
//! TypeShape ───→ returns ──→ generic ──→ plural ───┘
//! ```
//!
//! - [`split`]: identifier → words, with acronym handling
//! - [`plural`]: head-of-phrase pluralization with irregulars
//! - [`translate`]: user word maps, markup-safe
//! - [`returns`] and [`generic`]: type shape → "a list of users"
//! - [`summary`]: member name → "Gets the shipping address."
//!
//! ## Usage
//!
//! ```rust
//! use autodoc::grammar::{CommentBuilder, Pluralizer, ReturnTypeBuilderOptions, TypeShape};
//! use autodoc::grammar::translate::default_word_maps;
//! use autodoc::grammar::Translator;
//!
//! let maps = Translator::new(&default_word_maps());
//! let pluralizer = Pluralizer::new();
//! let builder = CommentBuilder::new(&maps, &pluralizer);
//!
//! let shape: TypeShape = "List<List<int>>".parse().unwrap();
//! let phrase = builder.build_comment(&shape, &ReturnTypeBuilderOptions::default());
//! assert_eq!(phrase.text, "A list of lists of integers.");
//! ```

pub mod error;
pub mod generic;
pub mod lexicon;
pub mod morpho;
pub mod options;
pub mod plural;
pub mod returns;
pub mod shape;
pub mod split;
pub mod summary;
pub mod translate;

pub use error::{GrammarError, GrammarResult};
pub use options::{ReturnTypeBuilderOptions, ReturnsStyle};
pub use plural::Pluralizer;
pub use returns::{CommentBuilder, Phrase, PhraseKind};
pub use shape::{GenericKind, TypeShape, WrapperKind};
pub use split::split;
pub use summary::{ShapeHints, SummaryBuilder, SummaryOptions};
pub use translate::{Translator, WordCondition, WordMap};
