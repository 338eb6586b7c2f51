use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use charforge_characters::{CharacterName, CharacterRegistry};

fn bench_name_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("name_validation");

    let candidates = [
        ("short", "Jack"),
        ("spaced", "Leonardo da Vinci"),
        ("max_length", "Abcdefghijklmnopqrstuvwxyzabcdef"),
        ("rejected_late", "Leonardo da Vinci  the Second"),
    ];

    for (label, candidate) in candidates {
        group.bench_with_input(BenchmarkId::from_parameter(label), candidate, |b, candidate| {
            b.iter(|| CharacterName::parse(black_box(*candidate)).is_ok());
        });
    }

    group.finish();
}

fn bench_create_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("create_and_release", |b| {
        let registry = CharacterRegistry::shared();
        b.iter(|| {
            registry
                .create(black_box("Leonardo da Vinci"), black_box(1000), black_box(20))
                .map(|c| c.release())
        });
    });

    group.bench_function("create_default_and_release", |b| {
        let registry = CharacterRegistry::shared();
        b.iter(|| registry.create_default().release());
    });

    group.finish();
}

criterion_group!(benches, bench_name_validation, bench_create_release);
criterion_main!(benches);
