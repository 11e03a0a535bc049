// Page wiring and drawing constants for the web frontend.
//
// Element ids mirror the static page; colours are CSS strings handed to the
// 2D canvas context.

// Canvas
pub const CANVAS_ID: &str = "app-canvas";

// Intro panel and control buttons
pub const INTRO_ID: &str = "intro";
pub const START_BUTTON_ID: &str = "start";
pub const CONTROL_BUTTON_CLASS: &str = "control-button";
pub const CONTROL_DESCRIPTION_CLASS: &str = "control-description-container";

// Colours
pub const BACKGROUND_COLOR: &str = "#ffffff";
pub const TEXT_UNDER_COLOR: &str = "deeppink";
pub const TEXT_OVER_COLOR: &str = "#ffffff";
pub const NOTICE_COLOR: &str = "#000000";

// Permission notice
pub const PERMISSION_NOTICE: &str = "Please grant sensor permissions";
pub const NOTICE_FONT_PX: f64 = 24.0;

// Family the fetched font file is registered under in document.fonts
pub const FONT_FAMILY: &str = "InputMonoCondensed";
pub const FALLBACK_FONT_FAMILY: &str = "monospace";

// Microphone analyser
pub const ANALYSER_FFT_SIZE: u32 = 1024;

// Frame pacing: skip ticks that arrive sooner than this after the last frame
pub const FRAME_INTERVAL_SEC: f32 = 1.0 / field_core::constants::TARGET_FPS;
pub const FRAME_PACING_SLACK_SEC: f32 = 0.005; // absorbs requestAnimationFrame jitter
