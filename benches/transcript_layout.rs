use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eventsync::core::message::{MessageLog, Sender};
use eventsync::ui::layout::layout_transcript;
use eventsync::ui::theme::Theme;
use std::hint::black_box;

fn make_log(n_pairs: usize, base: &str) -> MessageLog {
    let mut log = MessageLog::new();
    for i in 0..n_pairs {
        log.append(Sender::User, &format!("{base} #{i}"));
        log.append(
            Sender::Bot,
            &format!("{base} see https://example.com/events/{i} for details"),
        );
    }
    log
}

fn bench_transcript_layout(c: &mut Criterion) {
    let base = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";
    let theme = Theme::dark();

    for &pairs in &[100usize, 400usize] {
        let log = make_log(pairs, base);
        let mut group = c.benchmark_group(format!("transcript_layout_pairs{}", pairs));
        group.throughput(Throughput::Elements(log.len() as u64));

        for width in [80u16, 120u16] {
            group.bench_function(BenchmarkId::new("idle", width), |b| {
                b.iter(|| layout_transcript(black_box(log.as_slice()), None, &theme, width))
            });
        }

        // Typing indicator adds one trailing row
        group.bench_function(BenchmarkId::new("typing", 80u16), |b| {
            b.iter(|| layout_transcript(black_box(log.as_slice()), Some(1), &theme, 80))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_transcript_layout);
criterion_main!(benches);
