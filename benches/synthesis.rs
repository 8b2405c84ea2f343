//! Benchmarks for comment synthesis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use autodoc::declaration::{Declaration, MemberKind};
use autodoc::generator::DocGenerator;
use autodoc::grammar::translate::{self, Translator};
use autodoc::grammar::{self, CommentBuilder, Pluralizer, ReturnTypeBuilderOptions, TypeShape};
use autodoc::settings::Settings;

fn bench_split(c: &mut Criterion) {
    c.bench_function("split_identifier", |bench| {
        bench.iter(|| black_box(grammar::split(black_box("getHTTPResponseCodeAsync"))))
    });
}

fn bench_build_comment(c: &mut Criterion) {
    let maps = Translator::new(&translate::default_word_maps());
    let pluralizer = Pluralizer::new();
    let builder = CommentBuilder::new(&maps, &pluralizer);
    let options = ReturnTypeBuilderOptions::default();
    let nested: TypeShape = "Task<Dictionary<string, List<IReadOnlyList<int>>>>"
        .parse()
        .unwrap();

    c.bench_function("build_comment_nested_generic", |bench| {
        bench.iter(|| black_box(builder.build_comment(&nested, &options)))
    });
}

fn bench_translate(c: &mut Criterion) {
    let translator = Translator::new(&translate::default_word_maps());
    let phrase = "a dictionary with a key of type <see cref=\"int\"/> and a value of type int";

    c.bench_function("translator_apply", |bench| {
        bench.iter(|| black_box(translator.apply(black_box(phrase))))
    });
}

fn bench_document(c: &mut Criterion) {
    let generator = DocGenerator::new(Settings::default());
    let decl = Declaration::new(MemberKind::Method, "GetOrdersByCustomerAsync")
        .with_type("Task<List<Order>>".parse().unwrap())
        .with_parameter("customerId", Some("Guid".parse().unwrap()))
        .with_type_parameter("TKey");

    c.bench_function("document_method", |bench| {
        bench.iter(|| black_box(generator.document(&decl)))
    });
}

criterion_group!(
    benches,
    bench_split,
    bench_build_comment,
    bench_translate,
    bench_document
);
criterion_main!(benches);
