//! Type-shape comment builder: describes "a value of this shape" in prose.
//!
//! [`CommentBuilder::build_comment`] walks a [`TypeShape`] recursively:
//!
//! - leaves become a starting word plus the (optionally cref-linked) name:
//!   `"An integer"`, `"A <see cref=\"User\"/>"`
//! - arrays become `"an array of users"`
//! - recognized generics go to the container processor in [`super::generic`]
//! - unrecognized generics degrade to their bare identifier
//!
//! The builder only borrows its translator and pluralizer; every call is a
//! pure function of its inputs.

use super::generic;
use super::morpho;
use super::options::ReturnTypeBuilderOptions;
use super::plural::Pluralizer;
use super::shape::{GenericKind, TypeShape};
use super::split;
use super::translate::Translator;

/// What kind of text a [`Phrase`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseKind {
    /// Prose, possibly with cref markup; eligible for casing.
    PlainText,
    /// A `<![CDATA[...]]>` passthrough of the source spelling; never re-cased.
    EscapedLiteral,
}

/// Result of describing a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    pub kind: PhraseKind,
}

impl Phrase {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PhraseKind::PlainText,
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: PhraseKind::EscapedLiteral,
        }
    }

    pub fn is_escaped_literal(&self) -> bool {
        self.kind == PhraseKind::EscapedLiteral
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Builds natural-language descriptions of type shapes.
#[derive(Debug, Clone, Copy)]
pub struct CommentBuilder<'a> {
    pub(super) translator: &'a Translator,
    pub(super) pluralizer: &'a Pluralizer,
}

impl<'a> CommentBuilder<'a> {
    pub fn new(translator: &'a Translator, pluralizer: &'a Pluralizer) -> Self {
        Self {
            translator,
            pluralizer,
        }
    }

    /// Describe `shape`. Never fails: unknown shapes fall back to their name.
    pub fn build_comment(&self, shape: &TypeShape, options: &ReturnTypeBuilderOptions) -> Phrase {
        if !options.use_natural_language
            && matches!(shape, TypeShape::Generic(..) | TypeShape::Array(_))
        {
            return Phrase::literal(format!("<![CDATA[{shape}]]>"));
        }

        let text = match shape {
            TypeShape::Named(name) if options.is_type_parameter(name) => {
                self.type_parameter_reference(name, options)
            }
            TypeShape::Named(name) | TypeShape::Qualified(name) | TypeShape::Predefined(name) => {
                self.leaf(name, options)
            }
            TypeShape::Array(element) => self.array(element, options),
            TypeShape::Generic(name, args) => match shape.generic_kind() {
                Some(GenericKind::List | GenericKind::ReadOnlyCollection) => {
                    generic::list_comment(self, shape, options)
                }
                Some(GenericKind::Dictionary) => generic::dictionary_comment(self, args, options),
                Some(GenericKind::Wrapper(kind)) if args.len() == 1 => {
                    generic::wrapper_comment(self, kind, &args[0], options)
                }
                Some(GenericKind::Wrapper(kind)) => {
                    generic::multi_wrapper_comment(self, kind, args, options)
                }
                Some(GenericKind::Unrecognized) | None => self.leaf(name, options),
            },
        };

        Phrase::plain(text)
    }

    /// Apply the configured word maps.
    pub fn translate(&self, phrase: &str) -> String {
        self.translator.apply(phrase)
    }

    /// Starting word for a phrase whose plain (markup-free) text is `plain`,
    /// including its trailing space. Empty when starting words are off.
    pub fn starting_word(&self, plain: &str, options: &ReturnTypeBuilderOptions) -> String {
        if !options.include_starting_word {
            return String::new();
        }
        let Some(first) = plain.split_whitespace().next() else {
            return String::new();
        };

        let words = split::split(first);
        let lead_word = words.first().cloned().unwrap_or_default();
        let last_word = words.last().map(String::as_str).unwrap_or(first);
        let whole_leaf = !plain.trim().contains(' ');
        let word = if whole_leaf && self.pluralizer.is_plural(last_word) {
            "the"
        } else {
            morpho::article(&lead_word)
        };

        if options.use_proper_casing {
            format!("{} ", morpho::capitalize(word))
        } else {
            format!("{word} ")
        }
    }

    /// Trim, optionally terminate (root calls only) and case the result.
    pub(super) fn finish(
        &self,
        text: &str,
        options: &ReturnTypeBuilderOptions,
        terminate: bool,
    ) -> String {
        let mut out = text.trim().to_string();
        if terminate && options.is_root_return_type {
            out = morpho::terminate(&out);
        }
        if options.use_proper_casing {
            out = morpho::capitalize(&out);
        }
        out
    }

    /// Text for a single list entry: cref markup or natural lower-case words.
    pub(super) fn entry_text(&self, shape: &TypeShape, options: &ReturnTypeBuilderOptions) -> String {
        let text = self
            .build_comment(shape, &options.nested().with_starting_word(false))
            .into_text();
        natural_entry(&text)
    }

    fn leaf(&self, name: &str, options: &ReturnTypeBuilderOptions) -> String {
        let name = name.trim();
        if name.is_empty() {
            return String::new();
        }

        let plain = self.translate(name);
        let display = if options.include_crefs {
            cref(name)
        } else {
            plain.clone()
        };

        let text = format!("{}{display}", self.starting_word(&plain, options));
        self.finish(&text, options, false)
    }

    fn type_parameter_reference(&self, name: &str, options: &ReturnTypeBuilderOptions) -> String {
        let text = format!(
            "{}<typeparamref name=\"{name}\"/>",
            self.starting_word(name, options)
        );
        self.finish(&text, options, false)
    }

    fn array(&self, element: &TypeShape, options: &ReturnTypeBuilderOptions) -> String {
        let element_text = self.entry_text(element, options);
        let phrase = format!(
            "array of {}",
            self.pluralizer.force_pluralization(&element_text)
        );
        let text = format!("{}{phrase}", self.starting_word(&phrase, options));
        self.finish(&text, options, false)
    }
}

/// `<see cref="name"/>`.
pub fn cref(name: &str) -> String {
    format!("<see cref=\"{name}\"/>")
}

/// Lower-case a bare identifier into words (`"UserAccount"` → `"user account"`),
/// leaving phrases and markup alone apart from lower-casing phrases.
pub(super) fn natural_entry(text: &str) -> String {
    if text.contains('<') {
        return text.to_string();
    }
    if text.contains(' ') {
        return text
            .split(' ')
            .map(split::sentence_case)
            .collect::<Vec<_>>()
            .join(" ");
    }
    split::split(text)
        .iter()
        .map(|w| split::sentence_case(w))
        .collect::<Vec<_>>()
        .join(" ")
}
