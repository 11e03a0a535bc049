use crate::color::{css_rgb, hsb_to_rgb};
use crate::constants::*;
use field_core::{Alignment, Backdrop, Bounds, DrawnPoint, TextLayout, TextMeasure};
use web_sys as web;

#[inline]
fn css_font(font_size: f32) -> String {
    format!("{}px {}, {}", font_size, FONT_FAMILY, FALLBACK_FONT_FAMILY)
}

#[inline]
fn text_align(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Center => "center",
        Alignment::Left => "left",
        Alignment::Right => "right",
    }
}

/// Draws frames onto a 2D canvas context.
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn clear(&self, width: f64, height: f64) {
        self.ctx.set_fill_style_str(BACKGROUND_COLOR);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    pub fn draw_backdrop(&self, backdrop: &Backdrop, color: &str) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_font(&css_font(backdrop.font_size));
        ctx.set_text_align(text_align(backdrop.alignment));
        ctx.set_text_baseline("alphabetic");
        ctx.set_fill_style_str(color);
        let leading = (backdrop.font_size * backdrop.line_spacing) as f64;
        for (i, line) in backdrop.text.split('\n').enumerate() {
            _ = ctx.fill_text(line, backdrop.x as f64, backdrop.y as f64 + i as f64 * leading);
        }
        ctx.restore();
    }

    /// One filled square per point, side `unit / 2`, rotated and scaled about
    /// its centre.
    pub fn draw_points(&self, points: &[DrawnPoint], unit: f32) {
        let ctx = &self.ctx;
        let side = (unit / 2.0) as f64;
        for p in points {
            let t = &p.transform;
            ctx.save();
            _ = ctx.translate(p.point.x as f64, p.point.y as f64);
            // The rotation grows without bound; reduce it before going to radians.
            _ = ctx.rotate((t.rotation_offset.rem_euclid(360.0) as f64).to_radians());
            _ = ctx.scale(t.scale_factor as f64, t.scale_factor as f64);
            ctx.set_fill_style_str(&css_rgb(hsb_to_rgb(t.hue, t.saturation, t.brightness)));
            ctx.fill_rect(-side / 2.0, -side / 2.0, side, side);
            ctx.restore();
        }
    }

    pub fn draw_permission_notice(&self, width: f64, height: f64) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_fill_style_str(NOTICE_COLOR);
        ctx.set_font(&format!("{}px {}", NOTICE_FONT_PX, FALLBACK_FONT_FAMILY));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        _ = ctx.fill_text(PERMISSION_NOTICE, width / 2.0, height / 2.0);
        ctx.restore();
    }
}

/// Text measurement through the canvas, used until the font file has loaded.
pub struct CanvasMeasure {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasMeasure {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasMeasure {
    fn measure_bounds(&self, text: &str, layout: &TextLayout) -> Bounds {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_font(&css_font(layout.font_size));
        ctx.set_text_align(text_align(layout.alignment));
        ctx.set_text_baseline("alphabetic");
        let (mut left, mut top) = (f64::INFINITY, f64::INFINITY);
        let (mut right, mut bottom) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (i, line) in text.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Ok(m) = ctx.measure_text(line) else {
                continue;
            };
            let baseline = i as f64 * layout.leading() as f64;
            left = left.min(-m.actual_bounding_box_left());
            right = right.max(m.actual_bounding_box_right());
            top = top.min(baseline - m.actual_bounding_box_ascent());
            bottom = bottom.max(baseline + m.actual_bounding_box_descent());
        }
        ctx.restore();
        if left > right {
            return Bounds::default();
        }
        Bounds {
            x: left as f32,
            y: top as f32,
            w: (right - left) as f32,
            h: (bottom - top) as f32,
        }
    }
}
