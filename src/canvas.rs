// canvas.rs - Painter backed by a browser 2D context
//
// Path and transform calls only throw on non-finite or negative sizes,
// which the renderer never produces, so their results are dropped.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::render::Painter;

impl Painter for CanvasRenderingContext2d {
    fn clear(&mut self, w: f64, h: f64) { self.clear_rect(0.0, 0.0, w, h); }
    fn save(&mut self) { CanvasRenderingContext2d::save(self); }
    fn restore(&mut self) { CanvasRenderingContext2d::restore(self); }
    fn translate(&mut self, x: f64, y: f64) { let _ = CanvasRenderingContext2d::translate(self, x, y); }
    fn rotate(&mut self, angle: f64) { let _ = CanvasRenderingContext2d::rotate(self, angle); }
    fn scale(&mut self, x: f64, y: f64) { let _ = CanvasRenderingContext2d::scale(self, x, y); }

    fn set_alpha(&mut self, alpha: f64) { self.set_global_alpha(alpha); }
    fn set_fill(&mut self, style: &str) { self.set_fill_style_str(style); }
    fn set_stroke(&mut self, style: &str) { self.set_stroke_style_str(style); }
    fn set_line_width(&mut self, width: f64) { CanvasRenderingContext2d::set_line_width(self, width); }
    fn set_round_caps(&mut self) { self.set_line_cap("round"); }
    fn set_font(&mut self, font: &str) { CanvasRenderingContext2d::set_font(self, font); }
    fn set_text_align(&mut self, align: &str) { CanvasRenderingContext2d::set_text_align(self, align); }
    fn set_text_baseline(&mut self, baseline: &str) { CanvasRenderingContext2d::set_text_baseline(self, baseline); }

    fn begin_path(&mut self) { CanvasRenderingContext2d::begin_path(self); }

    fn arc(&mut self, x: f64, y: f64, r: f64, start: f64, end: f64) {
        let _ = CanvasRenderingContext2d::arc(self, x, y, r, start, end);
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, rotation: f64) {
        let _ = CanvasRenderingContext2d::ellipse(self, x, y, rx, ry, rotation, 0.0, TAU);
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64) {
        let _ = self.round_rect_with_f64(x, y, w, h, r);
    }

    fn move_to(&mut self, x: f64, y: f64) { CanvasRenderingContext2d::move_to(self, x, y); }
    fn line_to(&mut self, x: f64, y: f64) { CanvasRenderingContext2d::line_to(self, x, y); }

    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn fill(&mut self) { CanvasRenderingContext2d::fill(self); }
    fn stroke(&mut self) { CanvasRenderingContext2d::stroke(self); }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = CanvasRenderingContext2d::fill_text(self, text, x, y);
    }
}
