use std::f32::consts::TAU;

use egui::{Align2, FontId, Pos2, Sense, Stroke, Ui, Vec2, Widget, WidgetInfo, WidgetType};

use super::{TimeSlot, SLOT_COUNT};

/// Angle of the marker for a slot index, with index 0 at the 12 o'clock
/// position and indices increasing clockwise.
pub fn marker_angle(index: usize, slot_count: usize) -> f32 {
    index as f32 / slot_count as f32 * TAU - TAU / 4.0
}

/// The slot index nearest to a point on a dial centered at `center`.
///
/// Inverse of [`marker_angle`]: clicking exactly on a rendered marker
/// reselects that marker's slot.
pub fn slot_index_at(pos: Pos2, center: Pos2, slot_count: usize) -> usize {
    let v = pos - center;
    let mut angle = v.y.atan2(v.x) + TAU / 4.0;
    if angle < 0.0 {
        angle += TAU;
    }
    ((angle / TAU * slot_count as f32).round() as usize) % slot_count
}

/// A clock-face dial that snaps clicks to the nearest half-hour slot.
///
/// Paints a rim with hour labels every three hours, a hand from the center to
/// the selected slot, and a marker dot on the rim. Clicking anywhere picks
/// the slot nearest to the pointer and marks the response changed.
pub struct TimeDial<'a> {
    slot: &'a mut TimeSlot,
    diameter: f32,
}

impl<'a> TimeDial<'a> {
    pub fn new(slot: &'a mut TimeSlot) -> Self {
        Self {
            slot,
            diameter: 160.0,
        }
    }

    /// Outer size of the dial in points. (Default: 160.0)
    #[inline]
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }
}

impl Widget for TimeDial<'_> {
    fn ui(self, ui: &mut Ui) -> egui::Response {
        let desired_size = Vec2::splat(self.diameter);
        let (mut response, painter) = ui.allocate_painter(desired_size, Sense::click());
        let center = response.rect.center();
        let radius = self.diameter / 2.0 - 8.0;

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let picked = TimeSlot::from_index(slot_index_at(pos, center, SLOT_COUNT));
                if picked != *self.slot {
                    *self.slot = picked;
                    response.mark_changed();
                }
            }
        }
        response.widget_info(|| {
            WidgetInfo::labeled(WidgetType::Button, ui.is_enabled(), self.slot.to_string())
        });

        if ui.is_rect_visible(response.rect) {
            let visuals = ui.style().interact(&response);
            let accent = ui.visuals().selection.bg_fill;

            painter.circle_stroke(center, radius, visuals.bg_stroke);

            for hour in (0..24).step_by(3) {
                let angle = marker_angle(hour * 2, SLOT_COUNT);
                painter.text(
                    center + (radius - 16.0) * Vec2::angled(angle),
                    Align2::CENTER_CENTER,
                    format!("{hour:02}"),
                    FontId::proportional(11.0),
                    ui.visuals().weak_text_color(),
                );
            }

            let marker = center + radius * Vec2::angled(marker_angle(self.slot.index(), SLOT_COUNT));
            painter.line_segment([center, marker], Stroke::new(2.0, accent.linear_multiply(0.5)));
            painter.circle_filled(marker, 6.0, accent);
            painter.circle_filled(center, 3.0, accent);
        }

        response
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn marker_pos(center: Pos2, radius: f32, index: usize) -> Pos2 {
        center + radius * Vec2::angled(marker_angle(index, SLOT_COUNT))
    }

    #[test]
    fn clicking_a_marker_reselects_its_slot() {
        let center = pos2(120.0, 120.0);
        for index in 0..SLOT_COUNT {
            let pos = marker_pos(center, 100.0, index);
            assert_eq!(slot_index_at(pos, center, SLOT_COUNT), index);
        }
    }

    #[test]
    fn cardinal_directions() {
        let center = pos2(0.0, 0.0);
        // Screen coordinates: y grows downwards.
        assert_eq!(slot_index_at(pos2(0.0, -100.0), center, SLOT_COUNT), 0); // 00:00
        assert_eq!(slot_index_at(pos2(100.0, 0.0), center, SLOT_COUNT), 12); // 06:00
        assert_eq!(slot_index_at(pos2(0.0, 100.0), center, SLOT_COUNT), 24); // 12:00
        assert_eq!(slot_index_at(pos2(-100.0, 0.0), center, SLOT_COUNT), 36); // 18:00
    }

    #[test]
    fn clicks_snap_to_the_nearest_slot() {
        let center = pos2(120.0, 120.0);
        // Slightly past the 06:00 marker still rounds back to it.
        let near = marker_pos(center, 100.0, 12) + Vec2::new(0.0, 2.0);
        assert_eq!(slot_index_at(near, center, SLOT_COUNT), 12);
    }
}
