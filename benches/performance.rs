use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_core::core::services::SummaryService;
use expense_core::domain::{Expense, ExpenseCategory, PeriodSelection};
use expense_core::storage::json_backend::{load_expenses_from_path, save_expenses_to_path};
use tempfile::tempdir;

fn build_sample_expenses(count: usize) -> Vec<Expense> {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|idx| {
            let category = ExpenseCategory::ALL[idx % ExpenseCategory::ALL.len()];
            Expense::new(
                format!("Expense {idx}"),
                5.0 + (idx % 100) as f64,
                start_date + Duration::days((idx % 730) as i64),
                category.as_str(),
            )
        })
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let expenses = build_sample_expenses(black_box(10_000));
    let reference = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

    c.bench_function("report_this_month_10k", |b| {
        b.iter(|| {
            let report = SummaryService::report(&expenses, &PeriodSelection::ThisMonth, reference);
            black_box(report);
        })
    });

    c.bench_function("report_all_time_10k", |b| {
        b.iter(|| {
            let report = SummaryService::report(&expenses, &PeriodSelection::All, reference);
            black_box(report);
        })
    });
}

fn bench_expense_io(c: &mut Criterion) {
    let expenses = build_sample_expenses(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("expenses.json");

    c.bench_function("expenses_save_10k", |b| {
        b.iter(|| {
            save_expenses_to_path(&expenses, &file_path).expect("save expenses");
        })
    });

    save_expenses_to_path(&expenses, &file_path).expect("seed");

    c.bench_function("expenses_load_10k", |b| {
        b.iter(|| {
            let loaded = load_expenses_from_path(&file_path).expect("load expenses");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_summary, bench_expense_io);
criterion_main!(benches);
