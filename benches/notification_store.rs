// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification store and the pending relay.
//!
//! Measures the performance of:
//! - Adding and removing entries in a populated store
//! - Progress sampling across every visible entry
//! - Parking and draining the pending slot on disk

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;
use taskdeck::app::storage::FileStorage;
use taskdeck::ui::notifications::{
    Entry, Kind, Manager, Notification, PendingNotification, Relay,
};
use tokio::time::Instant;

fn populated(count: usize) -> Manager {
    let now = Instant::now();
    let mut manager = Manager::new();
    for i in 0..count {
        manager.push(Entry::new(
            Notification::info(format!("notification {i}")),
            Duration::from_secs(5),
            now,
        ));
    }
    manager
}

/// Benchmark push + remove of the newest entry.
fn bench_push_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_store");

    for size in [1, 16, 128] {
        group.bench_function(format!("push_remove_{size}"), |b| {
            b.iter_batched(
                || populated(size),
                |mut manager| {
                    let id = manager.push(Entry::new(
                        Notification::success("saved"),
                        Duration::from_secs(5),
                        Instant::now(),
                    ));
                    black_box(manager.remove(id));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark one sampling pass over the store.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_store");
    let mut manager = populated(32);
    let ids: Vec<_> = manager.visible().map(Entry::id).collect();

    group.bench_function("sample_all_32", |b| {
        b.iter(|| {
            let now = Instant::now();
            for id in &ids {
                black_box(manager.sample(*id, now));
            }
        });
    });

    group.finish();
}

/// Benchmark parking then draining the on-disk slot.
fn bench_relay(c: &mut Criterion) {
    let mut group = c.benchmark_group("pending_relay");
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let relay = Relay::new(Arc::new(FileStorage::new(dir.path())));
    let record = PendingNotification::new(Kind::Success, "Welcome back!")
        .with_title("Login Successful.")
        .with_duration(Duration::from_millis(5_000));

    group.bench_function("write_drain", |b| {
        b.iter(|| {
            if relay.write(&record).is_ok() {
                black_box(relay.drain());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_remove, bench_sample, bench_relay);
criterion_main!(benches);
