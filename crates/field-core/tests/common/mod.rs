// Deterministic glyph host for host-side tests: every visible character is a
// rectangle 0.6em wide, 0.7em above and 0.2em below the baseline.

#![allow(dead_code)]
use field_core::ttf::sample_polyline;
use field_core::{
    Bounds, FieldError, Orientation, OutlinePoint, OutlineSource, SignalSource, TextLayout,
    TextMeasure,
};
use glam::Vec2;

pub struct BoxGlyphs;

const ADVANCE: f32 = 0.6;
const ASCENT: f32 = 0.7;
const DESCENT: f32 = 0.2;

fn glyph_boxes(text: &str, layout: &TextLayout, anchor: Vec2) -> Vec<(Vec2, Vec2)> {
    let fs = layout.font_size;
    let mut boxes = Vec::new();
    for (line_no, line) in text.split('\n').enumerate() {
        let width = line.chars().count() as f32 * ADVANCE * fs;
        let mut pen = anchor.x + layout.alignment.line_offset(width);
        let baseline = anchor.y + line_no as f32 * layout.leading();
        for c in line.chars() {
            if !c.is_whitespace() {
                boxes.push((
                    Vec2::new(pen, baseline - ASCENT * fs),
                    Vec2::new(pen + ADVANCE * fs, baseline + DESCENT * fs),
                ));
            }
            pen += ADVANCE * fs;
        }
    }
    boxes
}

impl TextMeasure for BoxGlyphs {
    fn measure_bounds(&self, text: &str, layout: &TextLayout) -> Bounds {
        let boxes = glyph_boxes(text, layout, Vec2::ZERO);
        if boxes.is_empty() {
            return Bounds::default();
        }
        let min = boxes.iter().fold(Vec2::splat(f32::INFINITY), |m, b| m.min(b.0));
        let max = boxes.iter().fold(Vec2::splat(f32::NEG_INFINITY), |m, b| m.max(b.1));
        Bounds {
            x: min.x,
            y: min.y,
            w: max.x - min.x,
            h: max.y - min.y,
        }
    }
}

impl OutlineSource for BoxGlyphs {
    fn outline_to_points(
        &self,
        text: &str,
        layout: &TextLayout,
        anchor: Vec2,
        sample_rate: f32,
    ) -> Result<Vec<OutlinePoint>, FieldError> {
        let mut out = Vec::new();
        if sample_rate <= 0.0 {
            return Ok(out);
        }
        for (lo, hi) in glyph_boxes(text, layout, anchor) {
            let contour = [
                lo,
                Vec2::new(hi.x, lo.y),
                hi,
                Vec2::new(lo.x, hi.y),
                lo,
            ];
            sample_polyline(&contour, 1.0 / sample_rate, &mut out);
        }
        Ok(out)
    }
}

/// Host whose font failed to load.
pub struct BrokenFont;

impl OutlineSource for BrokenFont {
    fn outline_to_points(
        &self,
        _text: &str,
        _layout: &TextLayout,
        _anchor: Vec2,
        _sample_rate: f32,
    ) -> Result<Vec<OutlinePoint>, FieldError> {
        Err(FieldError::OutlineUnavailable("font failed to load".into()))
    }
}

/// Signal source that always reports the same readings.
pub struct FixedSignals {
    pub audio_level: f32,
    pub orientation: Orientation,
}

impl SignalSource for FixedSignals {
    fn read_audio_level(&self) -> f32 {
        self.audio_level
    }

    fn read_orientation(&self) -> Orientation {
        self.orientation
    }
}
