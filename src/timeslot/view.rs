use egui::{RichText, Ui, Widget};

use super::{TimeDial, TimeRange};

/// Durations offered as one-click shortcuts, in hours.
const QUICK_DURATIONS: [f32; 6] = [0.5, 1.0, 1.5, 2.0, 3.0, 4.0];

/// Start and end time dials with quick-duration shortcuts.
///
/// The time range is borrowed from the caller; the headline duration is
/// recomputed from it every frame, so there is never a stale duration to
/// observe. Picking either slot or a shortcut marks the response changed.
pub struct TimePickerView<'a> {
    range: &'a mut TimeRange,
    dial_diameter: f32,
}

impl<'a> TimePickerView<'a> {
    pub fn new(range: &'a mut TimeRange) -> Self {
        Self {
            range,
            dial_diameter: 160.0,
        }
    }

    /// Size of each dial in points. (Default: 160.0)
    #[inline]
    pub fn dial_diameter(mut self, dial_diameter: f32) -> Self {
        self.dial_diameter = dial_diameter;
        self
    }
}

impl Widget for TimePickerView<'_> {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let range = self.range;
        let mut changed = false;

        let mut response = ui
            .vertical(|ui| {
                ui.vertical_centered(|ui| {
                    ui.strong("Select Duration & Time");
                    let hours = range.duration_hours();
                    ui.label(
                        RichText::new(format!(
                            "{hours} hour{} • Meeting Duration",
                            if hours == 1.0 { "" } else { "s" }
                        ))
                        .weak(),
                    );
                });
                ui.add_space(4.0);

                ui.columns(2, |columns| {
                    columns[0].vertical_centered(|ui| {
                        ui.label(RichText::new("Start Time").weak());
                        ui.strong(range.start.to_string());
                        changed |= ui
                            .add(TimeDial::new(&mut range.start).diameter(self.dial_diameter))
                            .changed();
                    });
                    columns[1].vertical_centered(|ui| {
                        ui.label(RichText::new("End Time").weak());
                        ui.strong(range.end.to_string());
                        changed |= ui
                            .add(TimeDial::new(&mut range.end).diameter(self.dial_diameter))
                            .changed();
                    });
                });
                ui.add_space(4.0);

                ui.label(RichText::new("Quick Duration").weak());
                ui.horizontal_wrapped(|ui| {
                    for hours in QUICK_DURATIONS {
                        let selected = range.duration_hours() == hours;
                        if ui.selectable_label(selected, format!("{hours}h")).clicked() {
                            *range = range.with_duration(hours);
                            changed = true;
                        }
                    }
                });
            })
            .response;

        if changed {
            response.mark_changed();
        }
        response
    }
}
