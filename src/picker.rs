use chrono::NaiveDate;
use egui::{Button, RichText, Ui};

use crate::{CalendarView, TimePickerView, TimeRange};

/// Everything the user has picked so far.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Selection {
    /// The chosen day, if any. A date must be chosen before confirming.
    pub date: Option<NaiveDate>,
    /// Start and end slots; defaults to midnight through 03:00.
    pub times: TimeRange,
}

impl Selection {
    /// Hours between start and end, derived on every call.
    pub fn duration_hours(&self) -> f32 {
        self.times.duration_hours()
    }
}

/// Which of the two views the tab toggle shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ActiveView {
    #[default]
    Date,
    Time,
}

/// Reported when the user leaves the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    Confirmed,
    Cancelled,
}

/// A "schedule a meeting" screen: [`CalendarView`] and [`TimePickerView`]
/// behind a Date/Time tab toggle, with a summary and confirm/cancel actions.
///
/// The screen owns the combined [`Selection`]. [`DateTimePicker::ui`] returns
/// a [`PickerEvent`] when the user confirms or cancels; what happens next is
/// up to the caller — the screen only resets its selection.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// # let mut picker = egui_schedule::DateTimePicker::new();
/// if let Some(event) = picker.ui(ui) {
///     // Hand `event` and the confirmed selection to the application.
/// }
/// # });
/// ```
#[derive(Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DateTimePicker {
    selection: Selection,
    active_view: ActiveView,
}

impl DateTimePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn formatted_date(&self) -> String {
        self.selection
            .date
            .map_or_else(|| "Select Date".to_owned(), |date| {
                date.format("%A, %B %-d, %Y").to_string()
            })
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Option<PickerEvent> {
        let mut event = None;

        ui.vertical_centered(|ui| {
            ui.heading("Schedule Meeting");
            ui.label(RichText::new("Select your preferred date and time").weak());
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_view, ActiveView::Date, "Date");
            ui.selectable_value(&mut self.active_view, ActiveView::Time, "Time");
        });
        ui.separator();

        match self.active_view {
            ActiveView::Date => {
                ui.add(CalendarView::new(&mut self.selection.date).id_salt("datetime_picker"));
            }
            ActiveView::Time => {
                ui.add(TimePickerView::new(&mut self.selection.times));
            }
        }

        ui.separator();
        ui.label(RichText::new("Selection Summary").strong());
        ui.label(format!("Date: {}", self.formatted_date()));
        ui.label(format!(
            "Time: {} - {}",
            self.selection.times.start, self.selection.times.end
        ));
        let hours = self.selection.duration_hours();
        ui.label(format!(
            "Duration: {hours} hour{}",
            if hours == 1.0 { "" } else { "s" }
        ));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                event = Some(PickerEvent::Cancelled);
            }
            let can_confirm = self.selection.date.is_some();
            if ui
                .add_enabled(can_confirm, Button::new("Confirm"))
                .clicked()
            {
                event = Some(PickerEvent::Confirmed);
            }
        });

        if event.is_some() {
            self.selection = Selection::default();
        }
        event
    }
}
