// Host-side tests for the TrueType glyph host against a real font with
// non-zero side bearings (DejaVu Sans Mono, see fonts/LICENSE-DejaVu.txt).

use field_core::constants::{DENSITY_MAX, DENSITY_MIN, FIT_MARGIN};
use field_core::*;
use glam::Vec2;

const EXTENTS: [(f32, f32); 4] = [
    (800.0, 600.0),
    (300.0, 1200.0),
    (1.0, 1.0),
    (1920.0, 1080.0),
];
const ALIGNMENTS: [Alignment; 3] = [Alignment::Center, Alignment::Left, Alignment::Right];

fn font() -> TtfFont {
    TtfFont::from_bytes(include_bytes!("fonts/DejaVuSansMono.ttf").to_vec()).unwrap()
}

fn config(text: &str, alignment: Alignment) -> TextFitConfig {
    TextFitConfig {
        text: text.into(),
        scale_factor: 1.0,
        line_spacing: 0.7,
        alignment,
    }
}

fn layout_for(cfg: &TextFitConfig, fit: &FitResult) -> TextLayout {
    TextLayout {
        font_size: fit.font_size,
        line_spacing: cfg.line_spacing,
        alignment: cfg.alignment,
    }
}

/// Fitted bounds relative to the margin box, per axis.
fn margin_usage(cfg: &TextFitConfig, w: f32, h: f32) -> (f32, f32, Bounds, FitResult) {
    let font = font();
    let fit = fit(cfg, CanvasExtent::new(w, h), &font).unwrap();
    let b = font.measure_bounds(&cfg.text, &layout_for(cfg, &fit));
    (b.w / (w * FIT_MARGIN), b.h / (h * FIT_MARGIN), b, fit)
}

#[test]
fn glyph_bounds_include_side_bearings() {
    let font = font();
    let at = |alignment| TextLayout {
        font_size: 10.0,
        line_spacing: 0.7,
        alignment,
    };
    let left = font.measure_bounds("Hi :)", &at(Alignment::Left));
    // 'H' starts 137/2048 em in; ')' ends 426/2048 em short of its advance.
    assert!((left.x - 137.0 * 10.0 / 2048.0).abs() < 1e-4);
    assert!((left.w - 5602.0 * 10.0 / 2048.0).abs() < 1e-3);
    // 'i' rises 1556 units, ')' drops 270 below the baseline.
    assert!((left.y + 1556.0 * 10.0 / 2048.0).abs() < 1e-4);
    assert!((left.h - 1826.0 * 10.0 / 2048.0).abs() < 1e-3);

    let center = font.measure_bounds("Hi :)", &at(Alignment::Center));
    assert!((center.w - left.w).abs() < 1e-4);
    assert!((center.x - (left.x - 5.0 * 1233.0 * 10.0 / 2048.0 / 2.0)).abs() < 1e-3);
}

#[test]
fn single_line_fits_the_margin_for_every_alignment() {
    for alignment in ALIGNMENTS {
        let cfg = config("Hi :)", alignment);
        for (w, h) in EXTENTS {
            let (uw, uh, b, fit) = margin_usage(&cfg, w, h);
            assert!(uw <= 1.0 + 1e-4, "{alignment:?} {w}x{h}: width use {uw}");
            assert!(uh <= 1.0 + 1e-4, "{alignment:?} {w}x{h}: height use {uh}");
            // width-limited at every extent above
            assert!(uw > 1.0 - 1e-3, "{alignment:?} {w}x{h}: width use {uw}");
            let centre_y = fit.anchor.y + b.y + b.h / 2.0;
            assert!((centre_y - h / 2.0).abs() <= h * 1e-4);
        }
    }
}

#[test]
fn multi_line_side_alignments_can_exceed_the_margin_slightly() {
    // The reference pass is centred; left/right lines of unequal length then
    // expose different side bearings on the box edges at the final size.
    for (w, h) in EXTENTS {
        let (center, _, _, _) = margin_usage(&config("two\nlines", Alignment::Center), w, h);
        assert!((center - 1.0).abs() < 1e-3, "center {w}x{h}: {center}");
        for alignment in [Alignment::Left, Alignment::Right] {
            let (uw, uh, _, _) = margin_usage(&config("two\nlines", alignment), w, h);
            assert!(uw <= 1.02, "{alignment:?} {w}x{h}: width use {uw}");
            assert!(uh <= 1.0 + 1e-4, "{alignment:?} {w}x{h}: height use {uh}");
        }
    }
}

#[test]
fn point_count_grows_with_density() {
    let font = font();
    let cfg = config("Hi :)", Alignment::Center);
    let fit = fit(&cfg, CanvasExtent::new(800.0, 600.0), &font).unwrap();

    let mut density = DensitySetting::default();
    density.set(DENSITY_MIN);
    let mut counts = Vec::new();
    loop {
        let field = sample(
            &cfg.text,
            &fit,
            cfg.line_spacing,
            cfg.alignment,
            density.sampling_rate(),
            Some(&font),
        )
        .unwrap();
        counts.push(field.len());
        if density.value() >= DENSITY_MAX {
            break;
        }
        density.increase();
    }
    assert!(counts[0] > 0);
    assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");
    assert!(counts[counts.len() - 1] > 10 * counts[0], "{counts:?}");
}

#[test]
fn sampling_is_deterministic() {
    let font = font();
    let cfg = config("Hi :)\nthere", Alignment::Left);
    let fit = fit(&cfg, CanvasExtent::new(1024.0, 768.0), &font).unwrap();
    let run = || {
        let field = sample(&cfg.text, &fit, 0.7, Alignment::Left, 0.13, Some(&font));
        field.unwrap()
    };
    let (a, b) = (run(), run());
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn lines_are_laid_out_independently_per_alignment() {
    let font = font();
    let anchor = Vec2::new(400.0, 250.0);
    for alignment in ALIGNMENTS {
        let layout = TextLayout {
            font_size: 120.0,
            line_spacing: 0.7,
            alignment,
        };
        let both = font
            .outline_to_points("two\nlines", &layout, anchor, 0.2)
            .unwrap();
        let mut expected = font.outline_to_points("two", &layout, anchor, 0.2).unwrap();
        let second = Vec2::new(anchor.x, anchor.y + layout.leading());
        expected.extend(font.outline_to_points("lines", &layout, second, 0.2).unwrap());
        assert_eq!(both, expected, "{alignment:?}");
    }
}

#[test]
fn side_alignments_keep_outlines_on_their_side_of_the_anchor() {
    let font = font();
    let anchor = Vec2::new(400.0, 250.0);
    let points = |alignment| {
        let layout = TextLayout {
            font_size: 120.0,
            line_spacing: 0.7,
            alignment,
        };
        let field = font.outline_to_points("two\nlines", &layout, anchor, 0.2);
        field.unwrap().iter().map(|p| p.position.x).collect::<Vec<f32>>()
    };
    // Every glyph used here has non-negative side bearings.
    let left = points(Alignment::Left);
    assert!(left.iter().all(|&x| x >= anchor.x - 1e-2));
    let right = points(Alignment::Right);
    assert!(right.iter().all(|&x| x <= anchor.x + 1e-2));
    let center = points(Alignment::Center);
    assert!(center.iter().any(|&x| x < anchor.x));
    assert!(center.iter().any(|&x| x > anchor.x));
}

#[test]
fn control_characters_and_missing_glyphs_do_not_fail() {
    let font = font();
    let layout = TextLayout {
        font_size: 50.0,
        line_spacing: 1.0,
        alignment: Alignment::Center,
    };
    let tabbed = font
        .outline_to_points("a\tb", &layout, Vec2::ZERO, 0.1)
        .unwrap();
    let plain = font.outline_to_points("ab", &layout, Vec2::ZERO, 0.1).unwrap();
    assert_eq!(tabbed, plain);
    assert!(font
        .outline_to_points("\u{10FFFF}", &layout, Vec2::ZERO, 0.1)
        .is_ok());
}
