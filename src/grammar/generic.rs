//! Generic container phrasing: lists, dictionaries and Task-like wrappers.
//!
//! Collection shapes are flattened into a word list, outermost container
//! first, one entry per nesting level:
//!
//! ```text
//! List<List<int>>  →  ["list", "list", "integer"]
//!                  →  ["list", "lists", "integers"]   (every entry after the first is plural)
//!                  →  "a list of lists of integers"
//! ```
//!
//! Flattening stops at dictionaries and wrappers: a nested dictionary
//! contributes only its container word.

use super::morpho;
use super::options::{ReturnTypeBuilderOptions, ReturnsStyle};
use super::returns::{self, CommentBuilder};
use super::shape::{self, GenericKind, TypeShape, WrapperKind};

/// One descriptive entry per nesting level, outermost first.
pub fn collect_words(
    builder: &CommentBuilder<'_>,
    shape: &TypeShape,
    options: &ReturnTypeBuilderOptions,
) -> Vec<String> {
    match shape {
        TypeShape::Generic(name, args) => match shape.generic_kind() {
            Some(GenericKind::List | GenericKind::ReadOnlyCollection) => {
                let mut words = vec![shape::container_word(name)];
                if let Some(inner) = args.first() {
                    words.extend(collect_words(builder, inner, options));
                }
                words
            }
            Some(GenericKind::Dictionary) => vec![shape::container_word(name)],
            Some(GenericKind::Wrapper(kind)) => vec![kind.type_name().to_lowercase()],
            Some(GenericKind::Unrecognized) | None => {
                vec![returns::natural_entry(shape::simple_name(name))]
            }
        },
        TypeShape::Array(element) => {
            let mut words = vec!["array".to_string()];
            words.extend(collect_words(builder, element, options));
            words
        }
        leaf => vec![builder.entry_text(leaf, options)],
    }
}

/// Join collected words: the first stays singular, the rest are pluralized.
pub fn join_words(builder: &CommentBuilder<'_>, words: &[String]) -> String {
    let entries: Vec<String> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| !w.is_empty())
        .map(|(i, w)| {
            if i == 0 {
                w.clone()
            } else {
                builder.pluralizer.force_pluralization(w)
            }
        })
        .collect();
    builder.translate(&entries.join(" of "))
}

/// `List<T>`-like and read-only collection shapes.
pub fn list_comment(
    builder: &CommentBuilder<'_>,
    shape: &TypeShape,
    options: &ReturnTypeBuilderOptions,
) -> String {
    let words = collect_words(builder, shape, options);
    let phrase = join_words(builder, &words);
    let text = format!("{}{phrase}", builder.starting_word(&phrase, options));
    builder.finish(&text, options, true)
}

/// Two-argument dictionaries, phrased through the options' template.
pub fn dictionary_comment(
    builder: &CommentBuilder<'_>,
    args: &[TypeShape],
    options: &ReturnTypeBuilderOptions,
) -> String {
    let [key, value] = args else {
        return String::new();
    };

    let key_text = builder
        .build_comment(key, &options.nested().with_starting_word(false))
        .into_text();
    let value_words = collect_words(builder, value, options);
    let value_text = join_words(builder, &value_words);

    let text = options
        .dictionary_template
        .replace("{0}", &key_text)
        .replace("{1}", &value_text);
    builder.finish(&text, options, true)
}

/// Opening of a wrapper phrase: "returns a Task of type ".
fn wrapper_prefix(
    kind: WrapperKind,
    elide_type: bool,
    options: &ReturnTypeBuilderOptions,
) -> String {
    let name = kind.type_name();
    let wrapper = if options.include_crefs {
        returns::cref(name)
    } else {
        name.to_string()
    };
    let verb = match (options.is_root_return_type, options.returns_style) {
        (false, _) => "",
        (true, ReturnsStyle::Leading) => "returns ",
        (true, ReturnsStyle::Chained) => "and return ",
    };
    let of = if elide_type { "of " } else { "of type " };
    format!("{verb}{} {wrapper} {of}", morpho::article(name))
}

/// Close a wrapper phrase: exactly one period for a leading root sentence,
/// none when chained into a larger sentence or nested.
fn wrapper_finish(text: &str, options: &ReturnTypeBuilderOptions) -> String {
    let body = text.trim().trim_end_matches('.').trim_end();
    match (options.is_root_return_type, options.returns_style) {
        (true, ReturnsStyle::Leading) => {
            let sentence = morpho::terminate(body);
            if options.use_proper_casing {
                morpho::capitalize(&sentence)
            } else {
                sentence
            }
        }
        _ => body.to_string(),
    }
}

/// `Task<T>`, `ValueTask<T>`, `ActionResult<T>`.
pub fn wrapper_comment(
    builder: &CommentBuilder<'_>,
    kind: WrapperKind,
    arg: &TypeShape,
    options: &ReturnTypeBuilderOptions,
) -> String {
    let elide_type = arg
        .generic_kind()
        .is_some_and(|k| k.is_collection() || matches!(k, GenericKind::Wrapper(_)));

    let prefix = wrapper_prefix(kind, elide_type, options);
    let inner = builder
        .build_comment(
            arg,
            &options
                .nested()
                .with_starting_word(elide_type)
                .with_returns_style(ReturnsStyle::Leading),
        )
        .into_text();

    wrapper_finish(&format!("{prefix}{inner}"), options)
}

/// Task-likes with several type arguments: "X and a Y and a Z".
pub fn multi_wrapper_comment(
    builder: &CommentBuilder<'_>,
    kind: WrapperKind,
    args: &[TypeShape],
    options: &ReturnTypeBuilderOptions,
) -> String {
    let item_options = options.nested().with_starting_word(false);
    let article_options = options.nested().with_starting_word(true);

    let items: Vec<String> = args
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            let text = builder.build_comment(arg, &item_options).into_text();
            if i == 0 {
                text
            } else {
                let plain = builder.translate(arg.leaf_name());
                format!("{}{text}", builder.starting_word(&plain, &article_options))
            }
        })
        .collect();

    let prefix = wrapper_prefix(kind, false, options);
    wrapper_finish(
        &format!("{prefix}{}", morpho::join_repeated(&items, "and")),
        options,
    )
}
