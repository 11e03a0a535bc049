//! Outline sampling: turns fitted text into an ordered field of points.

use crate::config::Alignment;
use crate::error::FieldError;
use crate::fit::{FitResult, TextLayout};
use glam::Vec2;

/// A point as returned by the host outline capability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlinePoint {
    pub position: Vec2,
    /// Outline direction in degrees, when the host can provide it.
    pub angle: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f32,
    pub y: f32,
    pub index: usize,
    /// Outline direction at this point, degrees.
    pub tangent_angle: f32,
}

pub type PointField = Vec<SamplePoint>;

/// Host capability that converts laid-out text into outline sample points.
///
/// `sample_rate` is points per unit of outline length. Implementations must
/// return the same sequence for the same inputs and must never return fewer
/// points for a higher rate.
pub trait OutlineSource {
    fn outline_to_points(
        &self,
        text: &str,
        layout: &TextLayout,
        anchor: Vec2,
        sample_rate: f32,
    ) -> Result<Vec<OutlinePoint>, FieldError>;
}

pub fn sample(
    text: &str,
    fit: &FitResult,
    line_spacing: f32,
    alignment: Alignment,
    density: f32,
    outlines: Option<&dyn OutlineSource>,
) -> Result<PointField, FieldError> {
    let outlines = outlines
        .ok_or_else(|| FieldError::OutlineUnavailable("no outline source loaded".into()))?;
    let layout = TextLayout {
        font_size: fit.font_size,
        line_spacing,
        alignment,
    };
    let raw = outlines.outline_to_points(text, &layout, fit.anchor, density.max(0.0))?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, p)| SamplePoint {
            x: p.position.x,
            y: p.position.y,
            index,
            tangent_angle: p.angle.unwrap_or(0.0),
        })
        .collect())
}
