use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qpath::render::{Renderer, SimpleNamespaceRegistry};
use qpath::{Path, PathRelationship};

fn parse(text: &str) -> Path {
    text.parse().expect("benchmark path")
}

fn deep_path(depth: usize) -> Path {
    let body: Vec<String> = (0..depth).map(|i| format!("jcr:n{i}")).collect();
    parse(&format!("/{}", body.join("/")))
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("prefixed", |b| {
        b.iter(|| black_box("/jcr:system/nt:unstructured[2]/child").parse::<Path>());
    });

    group.bench_function("expanded", |b| {
        b.iter(|| black_box("/{http://example.com/ns}a/{http://example.com/ns}b").parse::<Path>());
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let already = parse("/a/b/c/d");
    let with_dots = parse("/a/b/../c/./d");
    let many_dots = parse("/a/b/c/d/../../e/f");
    let relative = parse("../../a/./b/..");

    // Already normalized paths return without rebuilding
    group.bench_function("already_normalized", |b| {
        b.iter(|| black_box(&already).normalized());
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| black_box(&with_dots).normalized());
    });

    group.bench_function("many_dots", |b| {
        b.iter(|| black_box(&many_dots).normalized());
    });

    group.bench_function("relative", |b| {
        b.iter(|| black_box(&relative).normalized());
    });

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let ancestor = parse("/users/test/projects/qpath");
    let descendant = parse("/users/test/projects/qpath/src/path");
    let unrelated1 = parse("/users/test/projects/qpath/src");
    let unrelated2 = parse("/users/test/projects/other");

    group.bench_function("ancestor", |b| {
        b.iter(|| PathRelationship::between(black_box(&ancestor), black_box(&descendant)));
    });

    group.bench_function("descendant", |b| {
        b.iter(|| PathRelationship::between(black_box(&descendant), black_box(&ancestor)));
    });

    group.bench_function("same", |b| {
        b.iter(|| PathRelationship::between(black_box(&ancestor), black_box(&ancestor)));
    });

    group.bench_function("unrelated", |b| {
        b.iter(|| PathRelationship::between(black_box(&unrelated1), black_box(&unrelated2)));
    });

    group.bench_function("root", |b| {
        b.iter(|| PathRelationship::between(black_box(&Path::ROOT), black_box(&descendant)));
    });

    group.bench_function("common_ancestor", |b| {
        b.iter(|| black_box(&unrelated1).common_ancestor(black_box(&unrelated2)));
    });

    group.finish();
}

fn bench_relativize(c: &mut Criterion) {
    let mut group = c.benchmark_group("relativize");

    for depth in [1, 4, 16] {
        let base = deep_path(depth);
        let target = parse("/jcr:n0/jcr:other");
        group.bench_with_input(BenchmarkId::new("relative_to", depth), &base, |b, base| {
            b.iter(|| black_box(&target).relative_to(black_box(base)));
        });

        let relative = Path::parent_references(depth);
        group.bench_with_input(BenchmarkId::new("resolve", depth), &base, |b, base| {
            b.iter(|| black_box(base).resolve(black_box(&relative)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let registry = SimpleNamespaceRegistry::default();

    for depth in [1, 4, 16] {
        let path = deep_path(depth);
        group.bench_with_input(BenchmarkId::new("prefixed", depth), &path, |b, path| {
            b.iter(|| Renderer::prefixed(Some(&registry)).render(black_box(path)));
        });
        group.bench_with_input(BenchmarkId::new("expanded", depth), &path, |b, path| {
            b.iter(|| black_box(path).to_string());
        });
    }

    group.bench_function("root", |b| {
        b.iter(|| black_box(&Path::ROOT).string_with(None, None, None));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_normalize,
    bench_relationship,
    bench_relativize,
    bench_render
);
criterion_main!(benches);
