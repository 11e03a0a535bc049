//! One animation frame: fit, sample, snapshot the signals, map every point.
//!
//! Nothing is cached between calls; the caller owns the frame counter and
//! the density setting.

use crate::config::{Alignment, CanvasExtent, TextFitConfig};
use crate::error::FieldError;
use crate::fit::{fit, FitResult, TextMeasure};
use crate::outline::{sample, OutlineSource, SamplePoint};
use crate::signals::{SignalSnapshot, SignalSource};
use crate::transform::{transform, PointVisualTransform};

#[derive(Clone, Debug)]
pub struct FrameRequest<'a> {
    pub config: &'a TextFitConfig,
    pub extent: CanvasExtent,
    /// Sampling rate, see `DensitySetting::sampling_rate`.
    pub density: f32,
    pub frame_counter: u64,
}

/// Text drawn beneath and/or above the point field.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub text: String,
    pub font_size: f32,
    pub line_spacing: f32,
    pub alignment: Alignment,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawnPoint {
    pub point: SamplePoint,
    pub transform: PointVisualTransform,
}

#[derive(Clone, Debug)]
pub struct Frame {
    pub fit: FitResult,
    pub backdrop: Backdrop,
    pub signals: SignalSnapshot,
    pub points: Vec<DrawnPoint>,
    /// Reference size for a drawn point; squares are `unit / 2` wide.
    pub unit: f32,
    /// Set when the outline capability failed and `points` is empty.
    pub outline_error: Option<FieldError>,
}

pub fn render_frame(
    request: &FrameRequest<'_>,
    measure: &dyn TextMeasure,
    outlines: Option<&dyn OutlineSource>,
    signals: &dyn SignalSource,
) -> Result<Frame, FieldError> {
    let config = request.config;
    let fit = fit(config, request.extent, measure)?;

    let (field, outline_error) = match sample(
        &config.text,
        &fit,
        config.line_spacing,
        config.alignment,
        request.density,
        outlines,
    ) {
        Ok(field) => (field, None),
        Err(e) => {
            log::debug!("[frame] backdrop only: {e}");
            (Vec::new(), Some(e))
        }
    };

    let snapshot = signals.snapshot();
    let points = field
        .into_iter()
        .map(|point| DrawnPoint {
            point,
            transform: transform(&point, &snapshot, request.frame_counter),
        })
        .collect();

    Ok(Frame {
        fit,
        backdrop: Backdrop {
            text: config.text.clone(),
            font_size: fit.font_size,
            line_spacing: config.line_spacing,
            alignment: config.alignment,
            x: fit.anchor.x,
            y: fit.anchor.y,
        },
        signals: snapshot,
        points,
        unit: request.extent.point_unit(),
        outline_error,
    })
}
