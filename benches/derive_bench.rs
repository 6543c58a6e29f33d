use std::collections::HashMap;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use sysmon::app::{App, SortMode, sort_rows};
use sysmon::config::Config;
use sysmon::system::collector::Collector;
use sysmon::system::derive::Deriver;
use sysmon::system::procfs::ProcFs;
use sysmon::system::snapshot::{Cycle, ProcessSample, SystemSnapshot};
use sysmon::ui;

const PAGE_SIZE: u64 = 4096;

fn make_samples(n: usize, tick_offset: u64) -> Vec<ProcessSample> {
    (0..n)
        .map(|i| {
            let pid = i as u32 + 1;
            ProcessSample {
                pid,
                uid: (i % 8) as u32,
                owner: format!("u{}", i % 8),
                command: format!("proc_{i}"),
                cpu_ticks_user: (i as u64 % 97) * 3 + tick_offset,
                cpu_ticks_system: i as u64 % 13,
                resident_pages: ((n - i) as u64 + 1) * 16,
                virtual_size_bytes: ((n - i) as u64 + 1) * 1024 * 1024,
            }
        })
        .collect()
}

fn system(total_ticks: u64) -> SystemSnapshot {
    SystemSnapshot {
        total_ticks,
        total_memory_kb: 16_000_000,
    }
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_500_1000_2000");

    for size in [500usize, 1000, 2000] {
        let first = make_samples(size, 0);
        let second = make_samples(size, 5);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(first, second),
            |b, (first, second)| {
                b.iter(|| {
                    let mut deriver = Deriver::new(1_000, PAGE_SIZE);
                    deriver.derive(system(2_000), black_box(first.clone()));
                    let cycle = deriver.derive(system(3_000), black_box(second.clone()));
                    black_box(cycle);
                })
            },
        );
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_rows_500_1000_2000");

    for size in [500usize, 1000, 2000] {
        let mut deriver = Deriver::new(1_000, PAGE_SIZE);
        deriver.derive(system(2_000), make_samples(size, 0));
        let rows = deriver.derive(system(3_000), make_samples(size, 5)).rows;

        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| {
                for mode in [SortMode::Cpu, SortMode::Memory, SortMode::Pid] {
                    let mut sorted = black_box(rows.clone());
                    sort_rows(&mut sorted, mode);
                    black_box(sorted);
                }
            })
        });
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_500_1000_2000");

    for size in [500usize, 1000, 2000] {
        let collector = Collector::with_parts(
            ProcFs::new("/nonexistent/sysmon-bench"),
            Box::new(HashMap::<u32, String>::new()),
            PAGE_SIZE,
        );
        let mut app = App::with_collector(Config::default(), collector);
        let mut deriver = Deriver::new(1_000, PAGE_SIZE);
        deriver.derive(system(2_000), make_samples(size, 0));
        let cycle: Cycle = deriver.derive(system(3_000), make_samples(size, 5));
        app.apply_cycle(cycle);

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let backend = TestBackend::new(160, 50);
                let mut terminal = Terminal::new(backend).expect("bench terminal init failed");
                terminal
                    .draw(|frame| ui::draw(frame, &mut app))
                    .expect("bench draw failed");
                black_box(terminal.backend());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derive, bench_sort, bench_draw);
criterion_main!(benches);
