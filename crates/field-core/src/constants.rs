// Shared fitting/sampling/mapping tuning constants used by the core and the web frontend.

// Text fitting
pub const REFERENCE_FONT_SIZE: f32 = 10.0; // measured first, avoids degenerate size-0 bounds
pub const FIT_MARGIN: f32 = 0.9; // fraction of the canvas the text may occupy
pub const LEFT_ANCHOR_FRACTION: f32 = 0.1; // 10% margin from the left edge
pub const RIGHT_ANCHOR_FRACTION: f32 = 0.9; // 10% margin from the right edge

// Point density (sampling rate = value / DENSITY_DIVISOR)
pub const DENSITY_DEFAULT: f32 = 1.0;
pub const DENSITY_STEP: f32 = 0.1;
pub const DENSITY_MIN: f32 = 0.1;
pub const DENSITY_MAX: f32 = 3.0;
pub const DENSITY_DIVISOR: f32 = 10.0;

// Microphone sensitivity
pub const SENSITIVITY_DEFAULT: f32 = 1.0;
pub const SENSITIVITY_STEP: f32 = 0.5;
pub const SENSITIVITY_MIN: f32 = 0.1;

// Orientation -> colour mapping domains (degrees)
// Alpha outside HUE_DOMAIN wraps mod 360 first; 360 itself maps to hue 360.
pub const HUE_DOMAIN: [f32; 2] = [0.0, 360.0];
pub const HUE_RANGE: [f32; 2] = [0.0, 360.0];
pub const TILT_DOMAIN: [f32; 2] = [0.0, 90.0];
pub const SATURATION_RANGE: [f32; 2] = [50.0, 100.0];
pub const BRIGHTNESS_RANGE: [f32; 2] = [50.0, 100.0];

// Scale response
pub const AUDIO_SCALE_GAIN: f32 = 10.0; // audio level dominates the scale response
pub const GAMMA_SCALE_BOOST: f32 = 0.5; // max extra scale from a full left/right tilt

// Point drawing unit = min(w, h) / UNIT_DIVISOR; the square side is unit / 2
pub const UNIT_DIVISOR: f32 = 10.0;

// Outline flattening
pub const CURVE_SEGMENTS: usize = 16; // line segments per quadratic/cubic curve

// Frame pacing
pub const TARGET_FPS: f32 = 30.0;
