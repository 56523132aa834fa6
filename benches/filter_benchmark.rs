//! Filtering and view-model benchmarks.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qlv::model::{QuestionId, QuestionRecord};
use qlv::state::{filtered, ControllerOptions, QuestionListController};

/// Build a large collection by cycling the sample questions with fresh ids.
fn generate_records(count: u32) -> Vec<QuestionRecord> {
    let sample = qlv::source::sample_questions();
    (1..=count)
        .map(|i| {
            let base = &sample[(i as usize - 1) % sample.len()];
            let id = QuestionId::new(i).expect("valid id");
            QuestionRecord::new(id, format!("{} #{}", base.question(), i), base.answer())
        })
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    let records = generate_records(10_000);

    c.bench_function("filter_10k_common_term", |b| {
        b.iter(|| black_box(filtered(black_box(&records), black_box("capital"))))
    });

    c.bench_function("filter_10k_no_match", |b| {
        b.iter(|| black_box(filtered(black_box(&records), black_box("xyznonexistent"))))
    });
}

fn benchmark_search_keystrokes(c: &mut Criterion) {
    let records = generate_records(10_000);

    // Typing then erasing a term: one filter pass plus reconcile per keystroke.
    c.bench_function("controller_type_and_erase_term", |b| {
        b.iter(|| {
            let mut controller =
                QuestionListController::new(records.clone(), ControllerOptions::default());
            controller.toggle_all();
            let term = "capital of";
            for end in (1..=term.len()).chain((0..term.len()).rev()) {
                controller.set_search_term(&term[..end]);
            }
            black_box(controller.selection().len())
        })
    });
}

fn benchmark_view_model(c: &mut Criterion) {
    let records = generate_records(10_000);
    let mut controller = QuestionListController::new(records, ControllerOptions::default());
    for _ in 0..100 {
        controller.load_more();
    }
    controller.toggle_full_view();

    c.bench_function("view_model_1000_rows_full_view", |b| {
        b.iter(|| black_box(controller.view_model().visible_rows.len()))
    });
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_search_keystrokes,
    benchmark_view_model
);
criterion_main!(benches);
