//! End-to-end integration tests for autodoc.
//!
//! These tests drive the public API the way a host does: declarations in,
//! merged comments and rendered `///` XML out, with settings loaded from a
//! TOML file.

use autodoc::batch;
use autodoc::comment::{DocComment, DocEntry};
use autodoc::declaration::{Declaration, MemberKind};
use autodoc::generator::DocGenerator;
use autodoc::grammar::translate::{WordCondition, WordMap};
use autodoc::grammar::{
    self, CommentBuilder, Pluralizer, ReturnTypeBuilderOptions, Translator, TypeShape,
};
use autodoc::merge::MergeAction;
use autodoc::render;
use autodoc::settings::Settings;

fn shape(src: &str) -> TypeShape {
    src.parse().unwrap()
}

fn describe(src: &str, options: &ReturnTypeBuilderOptions) -> String {
    let settings = Settings::default();
    let translator = Translator::new(&settings.word_maps);
    let pluralizer = Pluralizer::new();
    CommentBuilder::new(&translator, &pluralizer)
        .build_comment(&shape(src), options)
        .text
}

#[test]
fn worked_examples() {
    let root = ReturnTypeBuilderOptions::default();
    assert_eq!(grammar::split("HTTPServerName"), ["HTTP", "Server", "Name"]);
    assert_eq!(
        grammar::split("already_lowercase_name"),
        ["Already", "Lowercase", "Name"]
    );
    assert_eq!(Pluralizer::new().pluralize("error", None), "error");
    assert_eq!(describe("List<int>", &root), "A list of integers.");
    assert_eq!(describe("List<List<int>>", &root), "A list of lists of integers.");
    assert_eq!(
        describe("Dictionary<int, List<string>>", &root),
        "A dictionary with a key of type integer and a value of type list of strings."
    );
    assert_eq!(
        describe("Task<string>", &root.clone().with_crefs(true)),
        "Returns a <see cref=\"Task\"/> of type <see cref=\"string\"/>."
    );
    assert!(grammar::split("").is_empty());
}

#[test]
fn full_method_comment_renders_as_xml() {
    let generator = DocGenerator::new(Settings {
        include_crefs: true,
        ..Settings::default()
    });
    let decl = Declaration::new(MemberKind::Method, "FindOrders")
        .with_type(shape("IEnumerable<Order>"))
        .with_parameter("customerId", Some(shape("Guid")))
        .with_parameter("includeArchived", Some(shape("bool")));

    let outcome = generator.document(&decl);
    assert_eq!(outcome.action, MergeAction::Create);
    assert_eq!(
        render::to_xml(&outcome.comment, "    "),
        "    /// <summary>\n\
         \x20   /// Find the orders.\n\
         \x20   /// </summary>\n\
         \x20   /// <param name=\"customerId\">The customer id.</param>\n\
         \x20   /// <param name=\"includeArchived\">If true, include archived.</param>\n\
         \x20   /// <returns>A list of <see cref=\"Order\"/>.</returns>\n"
    );
}

#[test]
fn regeneration_is_idempotent() {
    let generator = DocGenerator::new(Settings::default());
    let decl = Declaration::new(MemberKind::Method, "GetAccountsAsync")
        .with_type(shape("Task<IReadOnlyList<Account>>"))
        .with_parameter("ownerId", Some(shape("int")))
        .with_existing(DocComment {
            summary: Some("Loads every account of an owner.".into()),
            remarks: Some("Results are cached.".into()),
            ..Default::default()
        });

    let first = generator.document(&decl);
    let again = Declaration {
        existing: Some(first.comment.clone()),
        ..decl.clone()
    };
    let second = generator.document(&again);

    assert_eq!(first.comment, second.comment);
    assert_eq!(
        render::to_xml(&first.comment, ""),
        render::to_xml(&second.comment, "")
    );
    assert_eq!(
        first.comment.summary.as_deref(),
        Some("Loads every account of an owner.")
    );
    assert_eq!(first.comment.remarks.as_deref(), Some("Results are cached."));
    assert_eq!(
        first.comment.returns.as_deref(),
        Some("Returns a Task of a read only list of accounts.")
    );
}

#[test]
fn stale_parameters_are_replaced() {
    let generator = DocGenerator::new(Settings::default());
    let decl = Declaration::new(MemberKind::Method, "Rename")
        .with_type(shape("void"))
        .with_parameter("newName", Some(shape("string")))
        .with_existing(DocComment {
            summary: Some("Renames the item.".into()),
            params: vec![DocEntry::new("name", "Old parameter.")],
            ..Default::default()
        });

    let outcome = generator.document(&decl);
    assert_eq!(outcome.comment.params, vec![DocEntry::new("newName", "The new name.")]);
    assert!(outcome.comment.returns.is_none());
}

#[test]
fn settings_file_drives_generation() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("autodoc.toml");

    let settings = Settings {
        exclude_async_suffix: true,
        summary_mentions_return: true,
        word_maps: vec![
            WordMap::new("Repo", "repository"),
            WordMap::new("To", "Converts to").when(WordCondition::LeadingWord),
        ],
        ..Settings::default()
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);

    let generator = DocGenerator::new(loaded);
    let decl = Declaration::new(MemberKind::Method, "LoadRepoAsync").with_type(shape("Task<Repo>"));
    assert_eq!(
        generator.synthesize(&decl).summary,
        "Load the repository and return a Task of type Repository."
    );
}

#[test]
fn missing_settings_file_is_a_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Settings::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(
        err,
        autodoc::settings::SettingsError::ConfigRead { .. }
    ));
}

#[test]
fn batch_from_json_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("decls.json");
    std::fs::write(
        &path,
        r#"[
            { "kind": "interface", "name": "IOrderStore" },
            { "kind": "constructor", "name": "OrderStore" },
            { "kind": "property", "name": "IsReadOnly", "type": "bool" },
            { "kind": "method", "name": "OrdersById", "type": "Dictionary<Guid, Order[]>",
              "type_parameters": [], "is_public": false }
        ]"#,
    )
    .unwrap();

    let decls = batch::read_declarations(&path).unwrap();
    let entries = batch::generate_all(&DocGenerator::new(Settings::default()), &decls);
    let summaries: Vec<Option<&str>> = entries
        .iter()
        .map(|e| e.outcome.as_ref().and_then(|o| o.comment.summary.as_deref()))
        .collect();

    assert_eq!(
        summaries,
        [
            Some("The order store interface."),
            Some("Initializes a new instance of the OrderStore class."),
            Some("Gets a value indicating whether is read only."),
            Some("Gets the orders by id."),
        ]
    );
    assert_eq!(
        entries[3]
            .outcome
            .as_ref()
            .and_then(|o| o.comment.returns.as_deref()),
        Some("A dictionary with a key of type Guid and a value of type array of orders.")
    );
}

#[test]
fn generator_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocGenerator>();
    assert_send_sync::<Settings>();
}
