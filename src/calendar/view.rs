use chrono::{Datelike as _, NaiveDate};
use egui::{Button, ComboBox, Grid, RichText, Ui, Vec2, Widget};

use super::{month_grid, month_name, CalendarCell, YearMonth, DAY_NAMES};

#[derive(Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
struct CalendarViewState {
    year: i32,
    month: u32,
    setup: bool,
}

/// A month calendar for selecting a single day.
///
/// The widget owns only its displayed month (persisted in egui memory); the
/// selected date is borrowed from the caller and survives month navigation.
/// The response is marked changed when a day is clicked.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// let mut selected: Option<chrono::NaiveDate> = None;
/// if ui.add(egui_schedule::CalendarView::new(&mut selected)).changed() {
///     // `selected` now holds the clicked day.
/// }
/// # });
/// ```
pub struct CalendarView<'a> {
    selection: &'a mut Option<NaiveDate>,
    id_salt: Option<&'a str>,
    start_month: Option<YearMonth>,
    show_year_picker: bool,
}

impl<'a> CalendarView<'a> {
    pub fn new(selection: &'a mut Option<NaiveDate>) -> Self {
        Self {
            selection,
            id_salt: None,
            start_month: None,
            show_year_picker: true,
        }
    }

    /// Add id source.
    /// Must be set if multiple calendar views are in the same Ui.
    #[inline]
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = Some(id_salt);
        self
    }

    /// Month shown when the widget first appears. (Default: the current month)
    #[inline]
    pub fn start_month(mut self, start_month: YearMonth) -> Self {
        self.start_month = Some(start_month);
        self
    }

    /// Show a year dropdown next to the month title. (Default: true)
    #[inline]
    pub fn show_year_picker(mut self, show_year_picker: bool) -> Self {
        self.show_year_picker = show_year_picker;
        self
    }
}

impl Widget for CalendarView<'_> {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let id = ui.make_persistent_id(self.id_salt);
        let today = chrono::offset::Utc::now().date_naive();

        let mut state = ui
            .data_mut(|data| data.get_persisted::<CalendarViewState>(id))
            .unwrap_or_default();
        if !state.setup {
            let start = self.start_month.unwrap_or_else(YearMonth::current);
            state.year = start.year();
            state.month = start.month();
            state.setup = true;
        }

        let mut changed = false;
        let mut response = ui
            .vertical(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("<").on_hover_text("previous month").clicked() {
                        let prev = YearMonth::new(state.year, state.month).prev();
                        state.year = prev.year();
                        state.month = prev.month();
                    }

                    ui.strong(format!("{} {}", month_name(state.month), state.year));

                    if self.show_year_picker {
                        ComboBox::from_id_salt(id.with("year"))
                            .selected_text(state.year.to_string())
                            .show_ui(ui, |ui| {
                                for year in today.year() - 5..today.year() + 10 {
                                    ui.selectable_value(&mut state.year, year, year.to_string());
                                }
                            });
                    }

                    if ui.button(">").on_hover_text("next month").clicked() {
                        let next = YearMonth::new(state.year, state.month).next();
                        state.year = next.year();
                        state.month = next.month();
                    }
                });

                let cell_size = Vec2::new(28.0, 22.0);
                Grid::new(id.with("grid"))
                    .num_columns(7)
                    .min_col_width(cell_size.x)
                    .spacing(Vec2::splat(2.0))
                    .show(ui, |ui| {
                        for name in DAY_NAMES {
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(name).small().weak());
                            });
                        }
                        ui.end_row();

                        for (i, cell) in month_grid(state.year, state.month).iter().enumerate() {
                            match cell {
                                CalendarCell::Empty => {
                                    ui.label("");
                                }
                                CalendarCell::Day(date) => {
                                    let selected = *self.selection == Some(*date);
                                    let fill_color = if selected {
                                        ui.visuals().selection.bg_fill
                                    } else {
                                        ui.visuals().extreme_bg_color
                                    };
                                    let text_color = if selected {
                                        ui.visuals().selection.stroke.color
                                    } else {
                                        ui.visuals().widgets.inactive.text_color()
                                    };

                                    let button_response = ui.add_sized(
                                        cell_size,
                                        Button::new(
                                            RichText::new(date.day().to_string())
                                                .color(text_color),
                                        )
                                        .fill(fill_color),
                                    );

                                    if *date == today {
                                        // Encircle today's date
                                        let stroke = ui.visuals().widgets.inactive.fg_stroke;
                                        ui.painter().circle_stroke(
                                            button_response.rect.center(),
                                            8.0,
                                            stroke,
                                        );
                                    }

                                    if button_response.clicked() {
                                        *self.selection = Some(*date);
                                        changed = true;
                                    }
                                }
                            }
                            if (i + 1) % 7 == 0 {
                                ui.end_row();
                            }
                        }
                    });
            })
            .response;

        ui.data_mut(|data| data.insert_persisted(id, state));

        if changed {
            response.mark_changed();
        }
        response
    }
}
