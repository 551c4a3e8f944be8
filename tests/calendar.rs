use chrono::NaiveDate;
use egui_kittest::kittest::Queryable as _;
use egui_kittest::Harness;
use egui_schedule::{CalendarView, YearMonth};

fn calendar_harness() -> Harness<'static, Option<NaiveDate>> {
    Harness::new_ui_state(
        |ui, selected: &mut Option<NaiveDate>| {
            ui.add(
                CalendarView::new(selected)
                    .id_salt("test_calendar")
                    .start_month(YearMonth::new(2025, 6)),
            );
        },
        None,
    )
}

#[test]
fn clicking_a_day_reports_the_date() {
    let mut harness = calendar_harness();

    harness.get_by_label("15").click();
    harness.run();

    assert_eq!(*harness.state(), NaiveDate::from_ymd_opt(2025, 6, 15));
}

#[test]
fn navigation_keeps_the_external_selection() {
    let mut harness = calendar_harness();

    harness.get_by_label("15").click();
    harness.run();
    harness.get_by_label(">").click();
    harness.run();

    // Panics if the displayed month did not advance.
    harness.get_by_label("July 2025");
    assert_eq!(*harness.state(), NaiveDate::from_ymd_opt(2025, 6, 15));
}

#[test]
fn navigating_forward_then_back_returns_to_the_start() {
    let mut harness = calendar_harness();

    harness.get_by_label(">").click();
    harness.run();
    harness.get_by_label("July 2025");

    harness.get_by_label("<").click();
    harness.run();
    harness.get_by_label("June 2025");
}

#[test]
fn navigation_rolls_over_the_year() {
    let mut harness = Harness::new_ui_state(
        |ui, selected: &mut Option<NaiveDate>| {
            ui.add(
                CalendarView::new(selected)
                    .id_salt("test_calendar")
                    .start_month(YearMonth::new(2025, 12)),
            );
        },
        None,
    );

    harness.get_by_label(">").click();
    harness.run();
    harness.get_by_label("January 2026");
}
