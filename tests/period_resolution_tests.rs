use chrono::{Datelike, Duration, NaiveDate, Weekday};
use expense_core::core::services::PeriodService;
use expense_core::core::{Clock, FixedClock};
use expense_core::domain::{PeriodSelection, TrailingDays};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const COMPARABLE_TAGS: [&str; 10] = [
    "thisWeek",
    "thisMonth",
    "thisYear",
    "7days",
    "14days",
    "30days",
    "60days",
    "90days",
    "lastMonth",
    "lastYear",
];

fn sample_references() -> Vec<NaiveDate> {
    vec![
        date(2024, 1, 1),
        date(2024, 2, 29),
        date(2024, 3, 15),
        date(2024, 3, 31),
        date(2023, 12, 31),
        date(2025, 6, 1),
    ]
}

#[test]
fn previous_window_ends_the_day_before_current_starts() {
    for reference in sample_references() {
        for tag in COMPARABLE_TAGS {
            let windows = PeriodService::resolve(&PeriodSelection::from_tag(tag), reference);
            assert_eq!(
                windows.previous.end,
                windows.current.start - Duration::days(1),
                "{tag} on {reference}"
            );
            assert!(windows.current.start <= windows.current.end, "{tag}");
            assert!(windows.has_comparison(), "{tag}");
        }
    }
}

#[test]
fn rolling_periods_end_on_the_reference_date() {
    let reference = date(2024, 3, 15);
    for tag in ["thisWeek", "thisMonth", "thisYear", "7days", "30days", "90days"] {
        let windows = PeriodService::resolve(&PeriodSelection::from_tag(tag), reference);
        assert_eq!(windows.current.end, reference, "{tag}");
    }
}

#[test]
fn resolution_is_deterministic() {
    let reference = date(2024, 7, 4);
    for tag in COMPARABLE_TAGS {
        let selection = PeriodSelection::from_tag(tag);
        assert_eq!(
            PeriodService::resolve(&selection, reference),
            PeriodService::resolve(&selection, reference)
        );
    }
}

#[test]
fn this_week_starts_on_sunday() {
    for reference in sample_references() {
        let windows = PeriodService::resolve(&PeriodSelection::ThisWeek, reference);
        assert_eq!(windows.current.start.weekday(), Weekday::Sun);
        assert_eq!(windows.previous.days(), 7);
    }
}

#[test]
fn trailing_day_windows_have_equal_length() {
    let reference = date(2024, 3, 15);
    for days in [
        TrailingDays::Seven,
        TrailingDays::Fourteen,
        TrailingDays::Thirty,
        TrailingDays::Sixty,
        TrailingDays::Ninety,
    ] {
        let windows = PeriodService::resolve(&PeriodSelection::LastDays(days), reference);
        assert_eq!(windows.current.days(), days.days());
        assert_eq!(windows.previous.days(), days.days());
    }
}

#[test]
fn custom_range_compares_against_equal_preceding_span() {
    let selection = PeriodSelection::from_state("custom", Some("2024-01-10"), Some("2024-01-20"));
    let windows = PeriodService::resolve(&selection, date(2024, 6, 1));
    assert_eq!(windows.current.start, date(2024, 1, 10));
    assert_eq!(windows.current.end, date(2024, 1, 20));
    assert_eq!(windows.previous.start, date(2023, 12, 30));
    assert_eq!(windows.previous.end, date(2024, 1, 9));
}

#[test]
fn incomplete_custom_state_means_all_time() {
    let reference = date(2024, 3, 15);
    for (start, end) in [
        (None, Some("2024-01-20")),
        (Some("2024-01-10"), None),
        (Some("garbage"), Some("2024-01-20")),
        (Some("2024-01-20"), Some("2024-01-10")),
    ] {
        let selection = PeriodSelection::from_state("custom", start, end);
        assert_eq!(selection, PeriodSelection::All);
        let windows = PeriodService::resolve(&selection, reference);
        assert!(!windows.has_comparison());
        assert_eq!(windows.current.end, reference);
    }
}

#[test]
fn last_month_in_january_reaches_into_previous_year() {
    let windows = PeriodService::resolve(&PeriodSelection::LastMonth, date(2024, 1, 15));
    assert_eq!(windows.current.start, date(2023, 12, 1));
    assert_eq!(windows.current.end, date(2023, 12, 31));
    assert_eq!(windows.previous.start, date(2023, 11, 1));
    assert_eq!(windows.previous.end, date(2023, 11, 30));
}

#[test]
fn resolve_now_reads_the_clock() {
    let clock = FixedClock::new(date(2024, 3, 15));
    let windows = PeriodService::resolve_now(&PeriodSelection::ThisMonth, &clock);
    assert_eq!(windows.current.start, date(2024, 3, 1));
    assert_eq!(windows.current.end, clock.today());
}
