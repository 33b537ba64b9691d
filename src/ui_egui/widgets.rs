//! Circular progress indicator shared by the protein and timer displays.

use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui};

const ARC_SEGMENTS: usize = 96;

pub struct ProgressRing<'a> {
    pub diameter: f32,
    pub thickness: f32,
    /// Filled share, 0..=100.
    pub percent: f32,
    pub fill: Color32,
    pub track: Color32,
    pub label: &'a str,
    pub label_size: f32,
    pub text_color: Color32,
}

impl ProgressRing<'_> {
    pub fn show(self, ui: &mut Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(vec2(self.diameter, self.diameter), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = (self.diameter - self.thickness) / 2.0;

        painter.circle_stroke(center, radius, Stroke::new(self.thickness, self.track));

        let fraction = (self.percent / 100.0).clamp(0.0, 1.0);
        if fraction > 0.0 {
            let points = arc_points(center, radius, fraction);
            painter.add(Shape::line(points, Stroke::new(self.thickness, self.fill)));
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            self.label,
            FontId::proportional(self.label_size),
            self.text_color,
        );

        response
    }
}

/// Points along a clockwise arc starting at twelve o'clock.
fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let steps = ((ARC_SEGMENTS as f32 * fraction).ceil() as usize).max(1);
    (0..=steps)
        .map(|i| {
            let angle = -FRAC_PI_2 + TAU * fraction * (i as f32 / steps as f32);
            pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}
