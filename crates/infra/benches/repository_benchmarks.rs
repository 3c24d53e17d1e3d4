use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::Arc;

use packrat_core::SequentialIdGenerator;
use packrat_infra::repository::{BlockingRepository, InMemoryRepository};
use packrat_packing::{Item, ItemQuery};

type ItemRepo = BlockingRepository<Item, i64, ItemQuery>;

fn item_repo() -> ItemRepo {
    let repo: InMemoryRepository<Item, i64, ItemQuery> =
        InMemoryRepository::new(SequentialIdGenerator::new());
    BlockingRepository::new(Arc::new(repo)).unwrap()
}

fn seeded(count: usize) -> ItemRepo {
    let repo = item_repo();
    for i in 0..count {
        let name = if i % 10 == 0 { "tent" } else { "sock" };
        repo.create(Item::temporary(i as i64, name)).unwrap();
    }
    repo
}

fn bench_operation_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("operation_latency");
    group.sample_size(1000);

    group.bench_function("create", |b| {
        let repo = item_repo();
        b.iter(|| black_box(repo.create(Item::temporary(0, "tent")).unwrap()));
    });

    group.bench_function("read_hit", |b| {
        let repo = item_repo();
        let stored = repo.create(Item::temporary(0, "tent")).unwrap();
        b.iter(|| black_box(repo.read(&stored.id).unwrap()));
    });

    group.bench_function("update", |b| {
        let repo = item_repo();
        let stored = repo.create(Item::temporary(0, "tent")).unwrap();
        b.iter(|| black_box(repo.update(stored.renamed("tarp")).unwrap()));
    });

    group.bench_function("create_then_destroy", |b| {
        let repo = item_repo();
        b.iter(|| {
            let stored = repo.create(Item::temporary(0, "tent")).unwrap();
            repo.destroy(&stored.id).unwrap();
        });
    });

    group.finish();
}

fn bench_read_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all");

    for count in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered", count), count, |b, &count| {
            let repo = seeded(count);
            b.iter(|| black_box(repo.read_all(None).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("by_name", count), count, |b, &count| {
            let repo = seeded(count);
            let query = ItemQuery::named("tent");
            b.iter(|| black_box(repo.read_all(Some(&query)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_operation_latency, bench_read_all);
criterion_main!(benches);
