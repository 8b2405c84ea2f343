//! Summary sentences from member names.
//!
//! A member name is split into words, lower-cased and run through the word
//! maps, then given an opening that depends on the member kind:
//!
//! | Member                        | Summary                                  |
//! |-------------------------------|------------------------------------------|
//! | class, struct, record, enum   | The shipping address.                    |
//! | interface `IUserStore`        | The user store interface.                |
//! | constructor                   | Initializes a new instance of the X class. |
//! | property (get / get+set)      | Gets (or sets) the shipping address.     |
//! | boolean property              | Gets a value indicating whether is valid. |
//! | method opening with a verb    | Load the user.                           |
//! | boolean method                | Determines whether is valid.             |
//! | void method                   | Executes the welcome.                    |
//! | other methods                 | Gets the user count.                     |
//!
//! Name words are never pluralized here; only container shapes are.

use super::lexicon;
use super::morpho;
use super::options::{ReturnTypeBuilderOptions, ReturnsStyle};
use super::returns::{self, CommentBuilder};
use super::shape::{self, GenericKind, TypeShape};
use super::split;
use crate::declaration::MemberKind;

/// Summary-level switches, taken from the active settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryOptions {
    pub include_crefs: bool,
    pub exclude_async_suffix: bool,
    /// Append "and return ..." for methods returning a wrapper type.
    pub mention_return: bool,
    pub use_natural_language: bool,
}

/// What the summary builder may know about a member's type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeHints<'s> {
    /// Return type for methods, property or field type otherwise.
    pub return_type: Option<&'s TypeShape>,
    pub has_getter: bool,
    pub has_setter: bool,
}

impl<'s> ShapeHints<'s> {
    pub fn returning(shape: &'s TypeShape) -> Self {
        Self {
            return_type: Some(shape),
            has_getter: true,
            has_setter: false,
        }
    }

    fn is_boolean(&self) -> bool {
        self.return_type.is_some_and(TypeShape::is_boolean)
    }

    /// `void`, no return type, or a non-generic `Task`.
    fn returns_nothing(&self) -> bool {
        match self.return_type {
            None => true,
            Some(shape) => {
                shape.is_void() || (shape.is_task_like() && !matches!(shape, TypeShape::Generic(..)))
            }
        }
    }
}

pub struct SummaryBuilder<'a> {
    comments: CommentBuilder<'a>,
    options: SummaryOptions,
}

impl<'a> SummaryBuilder<'a> {
    pub fn new(comments: CommentBuilder<'a>, options: SummaryOptions) -> Self {
        Self { comments, options }
    }

    /// One summary sentence for a member. Empty when the name has no words.
    pub fn build_summary(&self, kind: MemberKind, name: &str, hints: ShapeHints<'_>) -> String {
        let name = name.trim();
        if kind == MemberKind::Constructor {
            return self.constructor_summary(name);
        }

        let source = match kind {
            MemberKind::Interface => shape::strip_interface_prefix(name),
            _ => name,
        };
        let phrase = self.phrase(source);
        if phrase.is_empty() {
            return String::new();
        }

        let sentence = match kind {
            MemberKind::Interface => format!("the {phrase} interface"),
            MemberKind::Property => property_sentence(&phrase, &hints),
            MemberKind::Method => self.method_sentence(&phrase, &hints),
            _ => format!("the {phrase}"),
        };

        finish_sentence(&sentence)
    }

    /// `<param>` text: "The user id." or, for booleans, "If true, is enabled."
    pub fn build_parameter(&self, name: &str, shape: Option<&TypeShape>) -> String {
        let phrase = self.phrase(name.trim().trim_start_matches('@'));
        if phrase.is_empty() {
            return String::new();
        }
        if shape.is_some_and(TypeShape::is_boolean) {
            finish_sentence(&format!("if true, {phrase}"))
        } else {
            finish_sentence(&format!("the {phrase}"))
        }
    }

    /// `<typeparam>` text: "The type of the key." for `TKey`.
    pub fn build_type_parameter(&self, name: &str) -> String {
        let name = name.trim();
        if name.is_empty() {
            return String::new();
        }
        let stem = match name.strip_prefix('T') {
            Some(rest) if rest.chars().next().is_some_and(char::is_uppercase) => rest,
            Some("") => return finish_sentence("the type parameter"),
            _ => name,
        };
        finish_sentence(&format!("the type of the {}", self.phrase(stem)))
    }

    /// Lower-cased, translated words of an identifier.
    fn phrase(&self, name: &str) -> String {
        let mut words = split::split(name);
        if self.options.exclude_async_suffix
            && words.len() > 1
            && words.last().is_some_and(|w| w.eq_ignore_ascii_case("async"))
        {
            words.pop();
        }
        let lowered: Vec<String> = words.iter().map(|w| split::sentence_case(w)).collect();
        self.comments.translate(&lowered.join(" "))
    }

    fn constructor_summary(&self, type_name: &str) -> String {
        if type_name.is_empty() {
            return String::new();
        }
        let name = if self.options.include_crefs {
            returns::cref(type_name)
        } else {
            type_name.to_string()
        };
        format!("Initializes a new instance of the {name} class.")
    }

    fn method_sentence(&self, phrase: &str, hints: &ShapeHints<'_>) -> String {
        let mut words = phrase.split_whitespace();
        let first = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        let mut sentence = if lexicon::is_opening_verb(first) {
            match rest.first() {
                None => first.to_string(),
                Some(next) if lexicon::is_function_word(next) || lexicon::is_verb(next) => {
                    format!("{first} {}", rest.join(" "))
                }
                Some(_) => format!("{first} the {}", rest.join(" ")),
            }
        } else if hints.is_boolean() {
            format!("determines whether {phrase}")
        } else if hints.returns_nothing() {
            format!("executes the {phrase}")
        } else {
            format!("gets the {phrase}")
        };

        if let Some(clause) = self.return_clause(hints) {
            sentence.push(' ');
            sentence.push_str(&clause);
        }
        sentence
    }

    /// "and return a Task of type User" for wrapper-returning methods.
    fn return_clause(&self, hints: &ShapeHints<'_>) -> Option<String> {
        if !self.options.mention_return {
            return None;
        }
        let shape = hints.return_type?;
        if !matches!(shape.generic_kind(), Some(GenericKind::Wrapper(_))) {
            return None;
        }
        let options = ReturnTypeBuilderOptions::default()
            .with_natural_language(self.options.use_natural_language)
            .with_crefs(self.options.include_crefs)
            .with_returns_style(ReturnsStyle::Chained)
            .with_proper_casing(false);
        let phrase = self.comments.build_comment(shape, &options);
        if phrase.is_escaped_literal() || phrase.is_empty() {
            return None;
        }
        Some(phrase.into_text())
    }
}

fn property_sentence(phrase: &str, hints: &ShapeHints<'_>) -> String {
    let verb = match (hints.has_getter, hints.has_setter) {
        (true, true) => "gets or sets",
        (false, true) => "sets",
        _ => "gets",
    };
    if hints.is_boolean() {
        format!("{verb} a value indicating whether {phrase}")
    } else {
        format!("{verb} the {phrase}")
    }
}

fn finish_sentence(sentence: &str) -> String {
    morpho::capitalize(&morpho::terminate(sentence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::plural::Pluralizer;
    use crate::grammar::translate::{self, Translator, WordMap};

    fn with_builder<R>(options: SummaryOptions, f: impl FnOnce(&SummaryBuilder<'_>) -> R) -> R {
        let maps = Translator::new(&translate::default_word_maps());
        let pluralizer = Pluralizer::new();
        let builder = SummaryBuilder::new(CommentBuilder::new(&maps, &pluralizer), options);
        f(&builder)
    }

    fn natural() -> SummaryOptions {
        SummaryOptions {
            use_natural_language: true,
            ..SummaryOptions::default()
        }
    }

    fn summary(kind: MemberKind, name: &str, hints: ShapeHints<'_>) -> String {
        with_builder(natural(), |b| b.build_summary(kind, name, hints))
    }

    #[test]
    fn type_declarations() {
        let none = ShapeHints::default();
        assert_eq!(summary(MemberKind::Class, "UserService", none), "The user service.");
        assert_eq!(summary(MemberKind::Record, "OrderDto", none), "The order data transfer object.");
        assert_eq!(
            summary(MemberKind::Interface, "IUserStore", none),
            "The user store interface."
        );
        assert_eq!(summary(MemberKind::Enum, "HTTPStatus", none), "The HTTP status.");
    }

    #[test]
    fn constructors() {
        let none = ShapeHints::default();
        assert_eq!(
            summary(MemberKind::Constructor, "UserService", none),
            "Initializes a new instance of the UserService class."
        );
        let crefs = SummaryOptions {
            include_crefs: true,
            ..natural()
        };
        assert_eq!(
            with_builder(crefs, |b| b.build_summary(MemberKind::Constructor, "UserService", none)),
            "Initializes a new instance of the <see cref=\"UserService\"/> class."
        );
    }

    #[test]
    fn properties() {
        let string = TypeShape::predefined("string");
        let getter = ShapeHints::returning(&string);
        assert_eq!(
            summary(MemberKind::Property, "ShippingAddress", getter),
            "Gets the shipping address."
        );
        let both = ShapeHints {
            has_setter: true,
            ..getter
        };
        assert_eq!(
            summary(MemberKind::Property, "ShippingAddress", both),
            "Gets or sets the shipping address."
        );

        let flag = TypeShape::predefined("bool");
        assert_eq!(
            summary(MemberKind::Property, "IsValid", ShapeHints::returning(&flag)),
            "Gets a value indicating whether is valid."
        );
    }

    #[test]
    fn methods_by_return_type() {
        let flag = TypeShape::predefined("bool");
        let void = TypeShape::predefined("void");
        let int = TypeShape::predefined("int");
        assert_eq!(
            summary(MemberKind::Method, "IsValid", ShapeHints::returning(&flag)),
            "Determines whether is valid."
        );
        assert_eq!(
            summary(MemberKind::Method, "Welcome", ShapeHints::returning(&void)),
            "Executes the welcome."
        );
        assert_eq!(
            summary(MemberKind::Method, "UserCount", ShapeHints::returning(&int)),
            "Gets the user count."
        );
    }

    #[test]
    fn methods_opening_with_a_verb() {
        let void = TypeShape::predefined("void");
        let hints = ShapeHints::returning(&void);
        assert_eq!(summary(MemberKind::Method, "LoadUser", hints), "Load the user.");
        assert_eq!(summary(MemberKind::Method, "SendToQueue", hints), "Send to queue.");
        assert_eq!(summary(MemberKind::Method, "TryParse", hints), "Try parse.");
        assert_eq!(summary(MemberKind::Method, "Refresh", hints), "Refresh.");
    }

    #[test]
    fn word_maps_can_supply_the_verb() {
        let string = TypeShape::predefined("string");
        assert_eq!(
            summary(MemberKind::Method, "ToString", ShapeHints::returning(&string)),
            "Converts to string."
        );
    }

    #[test]
    fn async_suffix_is_dropped_when_configured() {
        let task = TypeShape::named("Task");
        let hints = ShapeHints::returning(&task);
        assert_eq!(
            summary(MemberKind::Method, "SaveChangesAsync", hints),
            "Save the changes async."
        );
        let drop = SummaryOptions {
            exclude_async_suffix: true,
            ..natural()
        };
        assert_eq!(
            with_builder(drop, |b| b.build_summary(MemberKind::Method, "SaveChangesAsync", hints)),
            "Save the changes."
        );
    }

    #[test]
    fn return_clause_is_chained() {
        let task: TypeShape = "Task<User>".parse().unwrap();
        let options = SummaryOptions {
            mention_return: true,
            exclude_async_suffix: true,
            ..natural()
        };
        assert_eq!(
            with_builder(options, |b| {
                b.build_summary(MemberKind::Method, "LoadUserAsync", ShapeHints::returning(&task))
            }),
            "Load the user and return a Task of type User."
        );
    }

    #[test]
    fn parameters() {
        let flag = TypeShape::predefined("bool");
        with_builder(natural(), |b| {
            assert_eq!(b.build_parameter("userId", None), "The user id.");
            assert_eq!(b.build_parameter("isEnabled", Some(&flag)), "If true, is enabled.");
            assert_eq!(b.build_parameter("@event", None), "The event.");
            assert_eq!(b.build_parameter("", None), "");
        });
    }

    #[test]
    fn type_parameters() {
        with_builder(natural(), |b| {
            assert_eq!(b.build_type_parameter("TKey"), "The type of the key.");
            assert_eq!(b.build_type_parameter("TResult"), "The type of the result.");
            assert_eq!(b.build_type_parameter("T"), "The type parameter.");
        });
    }

    #[test]
    fn custom_word_maps_apply_to_summaries() {
        let maps = Translator::new(&[WordMap::new("Repo", "repository")]);
        let pluralizer = Pluralizer::new();
        let builder = SummaryBuilder::new(CommentBuilder::new(&maps, &pluralizer), natural());
        assert_eq!(
            builder.build_summary(MemberKind::Class, "UserRepo", ShapeHints::default()),
            "The user repository."
        );
    }

    #[test]
    fn empty_names_produce_nothing() {
        assert_eq!(summary(MemberKind::Method, "", ShapeHints::default()), "");
        assert_eq!(summary(MemberKind::Constructor, "  ", ShapeHints::default()), "");
    }
}
