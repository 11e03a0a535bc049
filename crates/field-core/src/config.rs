//! Text and canvas configuration consumed by the fitter and sampler.

use crate::constants::UNIT_DIVISOR;
use crate::error::FieldError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Center,
    Left,
    Right,
}

impl FromStr for Alignment {
    type Err = FieldError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" | "centro" => Ok(Alignment::Center),
            "left" | "sinistra" => Ok(Alignment::Left),
            "right" | "destra" => Ok(Alignment::Right),
            _ => Err(FieldError::InvalidAlignment(s.to_string())),
        }
    }
}

impl Alignment {
    /// Parse an alignment name, falling back to `Center` for unknown values.
    /// The fallback is logged so a typo in the configuration is visible.
    pub fn parse_or_center(s: &str) -> Alignment {
        match s.parse() {
            Ok(a) => a,
            Err(e) => {
                log::warn!("{e}; falling back to center");
                Alignment::Center
            }
        }
    }

    /// Horizontal offset of a line of `line_width` relative to its anchor x.
    #[inline]
    pub fn line_offset(self, line_width: f32) -> f32 {
        match self {
            Alignment::Left => 0.0,
            Alignment::Center => -line_width / 2.0,
            Alignment::Right => -line_width,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextFitConfig {
    pub text: String,
    pub scale_factor: f32,
    pub line_spacing: f32,
    pub alignment: Alignment,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasExtent {
    pub width: f32,
    pub height: f32,
}

impl CanvasExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> Result<Self, FieldError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(FieldError::InvalidExtent {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Reference size for the drawn points: a tenth of the shorter side.
    #[inline]
    pub fn point_unit(self) -> f32 {
        (self.width / UNIT_DIVISOR).min(self.height / UNIT_DIVISOR)
    }
}

/// Full sketch configuration as supplied by the host page.
#[derive(Clone, Debug)]
pub struct SketchConfig {
    pub text: String,
    pub scale_factor: f32,
    pub line_spacing: f32,
    pub alignment: Alignment,
    pub font_path: String,
    pub show_text_under: bool,
    pub show_text_over: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            text: "Hi :)".to_string(),
            scale_factor: 0.8,
            line_spacing: 0.7,
            alignment: Alignment::Center,
            font_path: "./assets/InputMonoCondensed-BoldItalic.ttf".to_string(),
            show_text_under: true,
            show_text_over: false,
        }
    }
}

impl SketchConfig {
    pub fn fit_config(&self) -> TextFitConfig {
        TextFitConfig {
            text: self.text.clone(),
            scale_factor: self.scale_factor,
            line_spacing: self.line_spacing,
            alignment: self.alignment,
        }
    }
}
