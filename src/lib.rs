// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # autodoc
//!
//! Natural-language XML documentation comments for class-based languages.
//! Given a declaration's name, kind and spelled type shapes, autodoc writes
//! the `<summary>`, `<param>`, `<typeparam>`, `<returns>` and `<value>` text a
//! careful author would, and merges it into any comment already present.
//!
//! ## Architecture
//!
//! - **Grammar** (`grammar`): word splitting, pluralization, word maps,
//!   type-shape phrasing and summary sentences; pure and infallible
//! - **Declarations** (`declaration`): the host-facing input model
//! - **Comments** (`comment`, `merge`, `render`): the output model, the
//!   create/update merge policy and `///` XML rendering
//! - **Generator** (`generator`): one immutable [`settings::Settings`] value
//!   driving the grammar for whole declarations
//! - **Batch** (`batch`): parallel generation over JSON input
//!
//! ## Library usage
//!
//! ```
//! use autodoc::declaration::{Declaration, MemberKind};
//! use autodoc::generator::DocGenerator;
//! use autodoc::settings::Settings;
//!
//! let generator = DocGenerator::new(Settings::default());
//! let decl = Declaration::new(MemberKind::Method, "GetOrders")
//!     .with_type("Task<List<Order>>".parse().unwrap());
//!
//! let comment = generator.synthesize(&decl);
//! assert_eq!(comment.summary, "Get the orders.");
//! assert_eq!(comment.returns.as_deref(), Some("Returns a Task of a list of orders."));
//! ```

pub mod batch;
pub mod comment;
pub mod declaration;
pub mod error;
pub mod generator;
pub mod grammar;
pub mod merge;
pub mod render;
pub mod settings;
