use conway::Surface;
use egui::{Color32, Painter, Pos2, Rect, Stroke};

/// Draws grid output through an egui painter.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.painter.line_segment([from, to], Stroke::new(1.0, color));
    }
}
