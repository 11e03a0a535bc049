//! TrueType/OpenType glyph host backed by `ttf-parser`.
//!
//! Lays text out line by line (split on `\n`, baselines `font_size *
//! line_spacing` apart), measures the union of glyph boxes and samples the
//! flattened outlines at a fixed arc-length spacing of `1 / sample_rate`.

use crate::constants::CURVE_SEGMENTS;
use crate::error::FieldError;
use crate::fit::{Bounds, TextLayout, TextMeasure};
use crate::outline::{OutlinePoint, OutlineSource};
use glam::Vec2;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

pub struct TtfFont {
    data: Vec<u8>,
    index: u32,
}

impl TtfFont {
    /// Takes ownership of the raw font file, rejecting data that does not parse.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, FieldError> {
        Face::parse(&data, 0).map_err(|e| FieldError::OutlineUnavailable(e.to_string()))?;
        Ok(Self { data, index: 0 })
    }

    fn face(&self) -> Result<Face<'_>, FieldError> {
        Face::parse(&self.data, self.index)
            .map_err(|e| FieldError::OutlineUnavailable(e.to_string()))
    }
}

/// A glyph positioned on the canvas: its id and the pen origin on the baseline.
struct Placed {
    glyph: GlyphId,
    origin: Vec2,
}

fn place_glyphs(
    face: &Face<'_>,
    text: &str,
    layout: &TextLayout,
    anchor: Vec2,
) -> (Vec<Placed>, f32) {
    let scale = layout.font_size / f32::from(face.units_per_em().max(1));
    let mut placed = Vec::new();
    for (line_no, line) in text.split('\n').enumerate() {
        let glyphs: Vec<GlyphId> = line
            .chars()
            .filter(|c| !c.is_control())
            .map(|c| face.glyph_index(c).unwrap_or(GlyphId(0)))
            .collect();
        let line_width: f32 = glyphs
            .iter()
            .map(|g| f32::from(face.glyph_hor_advance(*g).unwrap_or(0)))
            .sum::<f32>()
            * scale;
        let baseline = anchor.y + line_no as f32 * layout.leading();
        let mut pen = anchor.x + layout.alignment.line_offset(line_width);
        for glyph in glyphs {
            placed.push(Placed {
                glyph,
                origin: Vec2::new(pen, baseline),
            });
            pen += f32::from(face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
        }
    }
    (placed, scale)
}

impl TextMeasure for TtfFont {
    fn measure_bounds(&self, text: &str, layout: &TextLayout) -> Bounds {
        let Ok(face) = self.face() else {
            return Bounds::default();
        };
        let (placed, scale) = place_glyphs(&face, text, layout, Vec2::ZERO);
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for p in &placed {
            // Whitespace has no box.
            let Some(r) = face.glyph_bounding_box(p.glyph) else {
                continue;
            };
            min = min.min(Vec2::new(
                p.origin.x + f32::from(r.x_min) * scale,
                p.origin.y - f32::from(r.y_max) * scale,
            ));
            max = max.max(Vec2::new(
                p.origin.x + f32::from(r.x_max) * scale,
                p.origin.y - f32::from(r.y_min) * scale,
            ));
        }
        if min.x > max.x {
            return Bounds::default();
        }
        Bounds {
            x: min.x,
            y: min.y,
            w: max.x - min.x,
            h: max.y - min.y,
        }
    }
}

impl OutlineSource for TtfFont {
    fn outline_to_points(
        &self,
        text: &str,
        layout: &TextLayout,
        anchor: Vec2,
        sample_rate: f32,
    ) -> Result<Vec<OutlinePoint>, FieldError> {
        let face = self.face()?;
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Ok(Vec::new());
        }
        let step = 1.0 / sample_rate;
        let (placed, scale) = place_glyphs(&face, text, layout, anchor);
        let mut out = Vec::new();
        for p in placed {
            let mut collector = ContourCollector::new(p.origin, scale);
            if face.outline_glyph(p.glyph, &mut collector).is_none() {
                continue;
            }
            collector.finish();
            for contour in &collector.contours {
                sample_polyline(contour, step, &mut out);
            }
        }
        Ok(out)
    }
}

/// Flattens glyph outlines into closed polylines in canvas space (y down).
struct ContourCollector {
    contours: Vec<Vec<Vec2>>,
    current: Vec<Vec2>,
    origin: Vec2,
    scale: f32,
}

impl ContourCollector {
    fn new(origin: Vec2, scale: f32) -> Self {
        Self {
            contours: Vec::new(),
            current: Vec::new(),
            origin,
            scale,
        }
    }

    #[inline]
    fn map(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(self.origin.x + x * self.scale, self.origin.y - y * self.scale)
    }

    fn last(&self) -> Vec2 {
        self.current.last().copied().unwrap_or(self.origin)
    }

    fn finish(&mut self) {
        let contour = std::mem::take(&mut self.current);
        if contour.len() > 1 {
            self.contours.push(contour);
        }
    }
}

impl OutlineBuilder for ContourCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.finish();
        let p = self.map(x, y);
        self.current.push(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.current.push(p);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = self.last();
        let c = self.map(x1, y1);
        let p1 = self.map(x, y);
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            self.current.push(p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t));
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = self.last();
        let c1 = self.map(x1, y1);
        let c2 = self.map(x2, y2);
        let p1 = self.map(x, y);
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            self.current.push(
                p0 * (u * u * u)
                    + c1 * (3.0 * u * u * t)
                    + c2 * (3.0 * u * t * t)
                    + p1 * (t * t * t),
            );
        }
    }

    fn close(&mut self) {
        let first = self.current.first().copied();
        if let Some(first) = first.filter(|f| Some(*f) != self.current.last().copied()) {
            self.current.push(first);
        }
        self.finish();
    }
}

/// Emits points every `step` units of arc length along `points`, starting at
/// the first vertex. Each point carries the direction of its segment in degrees.
pub fn sample_polyline(points: &[Vec2], step: f32, out: &mut Vec<OutlinePoint>) {
    if points.len() < 2 || !(step.is_finite() && step > 0.0) {
        return;
    }
    let total: f32 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    let last_seg = points.len() - 2;
    let mut seg = 0usize;
    let mut seg_start = 0.0f32;
    let mut k = 0usize;
    loop {
        let d = k as f32 * step;
        if d >= total {
            break;
        }
        while seg < last_seg {
            let len = points[seg].distance(points[seg + 1]);
            if seg_start + len > d {
                break;
            }
            seg_start += len;
            seg += 1;
        }
        let (a, b) = (points[seg], points[seg + 1]);
        let len = a.distance(b);
        let t = if len > 0.0 {
            ((d - seg_start) / len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let dir = b - a;
        out.push(OutlinePoint {
            position: a.lerp(b, t),
            angle: Some(dir.y.atan2(dir.x).to_degrees()),
        });
        k += 1;
    }
}
