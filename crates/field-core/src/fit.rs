//! Font-size and anchor fitting for text of arbitrary shape inside a canvas.
//!
//! Bounds are measured twice: once at a small reference size to derive the
//! scale ratio, then again at the final size to position the anchor.

use crate::config::{Alignment, CanvasExtent, TextFitConfig};
use crate::constants::{
    FIT_MARGIN, LEFT_ANCHOR_FRACTION, REFERENCE_FONT_SIZE, RIGHT_ANCHOR_FRACTION,
};
use crate::error::FieldError;
use glam::Vec2;

/// Axis-aligned text bounds relative to the draw anchor. `y` is the offset of
/// the top edge from the first baseline (negative for glyphs above it).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.w.is_finite() && self.h.is_finite()) || self.w <= 0.0 || self.h <= 0.0
    }
}

/// Typesetting parameters shared by measuring and outline sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextLayout {
    pub font_size: f32,
    pub line_spacing: f32,
    pub alignment: Alignment,
}

impl TextLayout {
    /// Distance between consecutive baselines.
    #[inline]
    pub fn leading(&self) -> f32 {
        self.font_size * self.line_spacing
    }
}

/// Host capability that measures laid-out text.
pub trait TextMeasure {
    fn measure_bounds(&self, text: &str, layout: &TextLayout) -> Bounds;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    pub font_size: f32,
    pub anchor: Vec2,
}

pub fn fit(
    config: &TextFitConfig,
    extent: CanvasExtent,
    measure: &dyn TextMeasure,
) -> Result<FitResult, FieldError> {
    let extent = extent.validate()?;
    let font_size = fit_font_size(config, extent, measure);
    let bounds = measure.measure_bounds(
        &config.text,
        &TextLayout {
            font_size,
            line_spacing: config.line_spacing,
            alignment: config.alignment,
        },
    );
    Ok(FitResult {
        font_size,
        anchor: anchor_for(bounds, config.alignment, extent),
    })
}

fn fit_font_size(
    config: &TextFitConfig,
    extent: CanvasExtent,
    measure: &dyn TextMeasure,
) -> f32 {
    let reference = measure.measure_bounds(
        &config.text,
        &TextLayout {
            font_size: REFERENCE_FONT_SIZE,
            line_spacing: config.line_spacing,
            alignment: Alignment::Center,
        },
    );
    if reference.is_degenerate() {
        log::debug!("[fit] degenerate reference bounds for {:?}", config.text);
        return REFERENCE_FONT_SIZE;
    }
    let width_ratio = extent.width / reference.w;
    let height_ratio = extent.height / reference.h;
    let ratio = width_ratio.min(height_ratio) * FIT_MARGIN;
    REFERENCE_FONT_SIZE * ratio * config.scale_factor
}

/// Anchor for the first baseline so the measured box sits vertically centred.
pub fn anchor_for(bounds: Bounds, alignment: Alignment, extent: CanvasExtent) -> Vec2 {
    let x = match alignment {
        Alignment::Center => extent.width / 2.0,
        Alignment::Left => extent.width * LEFT_ANCHOR_FRACTION,
        Alignment::Right => extent.width * RIGHT_ANCHOR_FRACTION,
    };
    let y = extent.height / 2.0 - bounds.y - bounds.h / 2.0;
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Box10;
    impl TextMeasure for Box10 {
        fn measure_bounds(&self, _text: &str, layout: &TextLayout) -> Bounds {
            let s = layout.font_size / 10.0;
            Bounds {
                x: -20.0 * s,
                y: -8.0 * s,
                w: 40.0 * s,
                h: 10.0 * s,
            }
        }
    }

    #[test]
    fn anchor_x_follows_alignment() {
        let extent = CanvasExtent::new(1000.0, 500.0);
        let b = Bounds {
            x: 0.0,
            y: -40.0,
            w: 100.0,
            h: 50.0,
        };
        assert_eq!(anchor_for(b, Alignment::Center, extent), Vec2::new(500.0, 265.0));
        assert_eq!(anchor_for(b, Alignment::Left, extent).x, 100.0);
        assert_eq!(anchor_for(b, Alignment::Right, extent).x, 900.0);
    }

    #[test]
    fn wide_text_is_limited_by_width() {
        let cfg = TextFitConfig {
            text: "wide".into(),
            scale_factor: 1.0,
            line_spacing: 1.0,
            alignment: Alignment::Center,
        };
        let r = fit(&cfg, CanvasExtent::new(400.0, 400.0), &Box10).unwrap();
        // width ratio 10, height ratio 40 -> 10 * 0.9 * 10
        assert!((r.font_size - 90.0).abs() < 1e-4);
    }
}
