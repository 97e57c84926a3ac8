use chanwatch::{EventCounter, HistoryEntry, HistoryStore};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

// Steady-state throughput: every record on a full window pays for one
// eviction plus one push, which is the hot path in a busy conversation.

fn record_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");
    group.throughput(Throughput::Elements(1));

    group.bench_function("record_full_window", |b| {
        let store = HistoryStore::new(100);
        let mut id = 0u64;
        for _ in 0..100 {
            id += 1;
            store.record_message(1, HistoryEntry { id, author_id: 1 }).unwrap();
        }
        b.iter(|| {
            id += 1;
            store.record_message(1, HistoryEntry { id, author_id: 1 }).unwrap();
        })
    });

    group.bench_function("remove_miss_fast_path", |b| {
        let store = HistoryStore::new(100);
        for id in 1000..1100 {
            store.record_message(1, HistoryEntry { id, author_id: 1 }).unwrap();
        }
        b.iter(|| {
            // Below the oldest retained id: skipped without a rebuild.
            store.remove_message(1, 5);
        })
    });

    group.finish();
}

fn counter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("events");
    group.throughput(Throughput::Elements(1));

    group.bench_function("tick_existing", |b| {
        let counter = EventCounter::new();
        counter.tick("message_create");
        b.iter(|| counter.tick("message_create"))
    });

    group.finish();
}

criterion_group!(benches, record_benchmark, counter_benchmark);
criterion_main!(benches);
