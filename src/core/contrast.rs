//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! Every function here is pure and total: malformed colors are read as black rather
//! than rejected, so a live color picker can call them on each keystroke.

use crate::domain::model::{
    Color, ConformanceLevel, ContrastRatio, ContrastVerdict, Luminance, Rgb, TextSize,
};

const LINEAR_THRESHOLD: f64 = 0.03928;
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;
const FLARE: f64 = 0.05;

fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn rgb_luminance(rgb: Rgb) -> Luminance {
    RED_WEIGHT * srgb_to_linear(rgb.r)
        + GREEN_WEIGHT * srgb_to_linear(rgb.g)
        + BLUE_WEIGHT * srgb_to_linear(rgb.b)
}

pub fn relative_luminance(color: &Color) -> Luminance {
    rgb_luminance(color.rgb())
}

/// `(lighter + 0.05) / (darker + 0.05)`; argument order does not matter.
pub fn contrast_ratio(a: &Color, b: &Color) -> ContrastRatio {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}

pub fn meets_aa(ratio: ContrastRatio, is_large_text: bool) -> bool {
    meets_level(
        ratio,
        ConformanceLevel::Aa,
        TextSize::from_large_flag(is_large_text),
    )
}

pub fn meets_level(ratio: ContrastRatio, level: ConformanceLevel, text_size: TextSize) -> bool {
    ratio >= level.minimum_ratio(text_size)
}

pub fn verdict_for(ratio: ContrastRatio) -> ContrastVerdict {
    ContrastVerdict {
        ratio,
        aa: meets_level(ratio, ConformanceLevel::Aa, TextSize::Normal),
        aa_large: meets_level(ratio, ConformanceLevel::Aa, TextSize::Large),
        aaa: meets_level(ratio, ConformanceLevel::Aaa, TextSize::Normal),
        aaa_large: meets_level(ratio, ConformanceLevel::Aaa, TextSize::Large),
    }
}

pub fn evaluate(foreground: &Color, background: &Color) -> ContrastVerdict {
    verdict_for(contrast_ratio(foreground, background))
}

// Plain-type entry points for UI callers that hold raw strings and numbers.

pub fn get_luminance(hex: &str) -> f64 {
    rgb_luminance(Rgb::parse_lenient(hex))
}

pub fn get_contrast(hex1: &str, hex2: &str) -> f64 {
    contrast_ratio(&Color::from(hex1), &Color::from(hex2))
}

pub fn passes_wcag(contrast: f64, large: Option<bool>) -> bool {
    meets_aa(contrast, large.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ratio(a: &str, b: &str) -> f64 {
        get_contrast(a, b)
    }

    #[test]
    fn test_black_and_white_luminance() {
        assert!(get_luminance("#000000").abs() < EPS);
        assert!((get_luminance("#ffffff") - 1.0).abs() < EPS);
        assert!((get_luminance("ffffff") - 1.0).abs() < EPS);
    }

    #[test]
    fn test_primary_luminance_matches_weights() {
        assert!((get_luminance("#ff0000") - 0.2126).abs() < EPS);
        assert!((get_luminance("#00ff00") - 0.7152).abs() < EPS);
        assert!((get_luminance("#0000ff") - 0.0722).abs() < EPS);
    }

    #[test]
    fn test_linear_segment_below_threshold() {
        // 10/255 = 0.0392 is under the 0.03928 knee
        let expected = (10.0 / 255.0) / 12.92;
        assert!((srgb_to_linear(10) - expected).abs() < EPS);
        assert!(srgb_to_linear(11) > expected);
    }

    #[test]
    fn test_malformed_colors_read_as_black() {
        assert!(get_luminance("").abs() < EPS);
        assert!(get_luminance("xyz-qq").abs() < EPS);
        assert!((ratio("zzzzzz", "#ffffff") - 21.0).abs() < 1e-6);
    }

    #[test]
    fn test_max_contrast() {
        assert!((ratio("#000000", "#ffffff") - 21.0).abs() < 1e-6);
    }

    #[test]
    fn test_same_color_is_one() {
        for hex in ["#000000", "#ffffff", "#2563eb", "#777777", "#fff", ""] {
            assert!((ratio(hex, hex) - 1.0).abs() < EPS, "{}", hex);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("#222222", "#ffffff"),
            ("#777777", "#cccccc"),
            ("#ff0000", "#00ff00"),
            ("#2563eb", "bogus"),
        ];
        for (a, b) in pairs {
            assert!((ratio(a, b) - ratio(b, a)).abs() < EPS);
        }
    }

    #[test]
    fn test_ratio_stays_in_range() {
        let samples = [
            "#000000", "#0a0a0a", "#767676", "#2563eb", "#ffff00", "#ffffff", "#fff",
        ];
        for a in samples {
            for b in samples {
                let r = ratio(a, b);
                assert!((1.0..=21.0 + 1e-9).contains(&r), "{} vs {} -> {}", a, b, r);
            }
        }
    }

    #[test]
    fn test_aa_boundaries_are_inclusive() {
        assert!(meets_aa(4.5, false));
        assert!(!meets_aa(4.49, false));
        assert!(meets_aa(3.0, true));
        assert!(!meets_aa(2.99, true));
    }

    #[test]
    fn test_passes_wcag_defaults_to_normal_text() {
        assert!(!passes_wcag(3.5, None));
        assert!(passes_wcag(3.5, Some(true)));
        assert!(!passes_wcag(3.5, Some(false)));
    }

    #[test]
    fn test_dark_gray_on_white() {
        let c = ratio("#222222", "#ffffff");
        assert!((c - 15.91).abs() < 0.01);
        assert!(passes_wcag(c, None));
    }

    #[test]
    fn test_light_gray_pair_fails() {
        let c = ratio("#777777", "#cccccc");
        assert!((c - 2.79).abs() < 0.01);
        assert!(!passes_wcag(c, None));
        assert!(!passes_wcag(c, Some(true)));
    }

    #[test]
    fn test_white_on_brand_blue_passes() {
        let c = ratio("#ffffff", "#2563eb");
        assert!((c - 5.17).abs() < 0.01);
        assert!(passes_wcag(c, None));
    }

    #[test]
    fn test_verdict_levels() {
        let v = evaluate(&Color::from("#595959"), &Color::from("#ffffff"));
        assert!(v.aa && v.aa_large && v.aaa && v.aaa_large);

        let v = evaluate(&Color::from("#ff0000"), &Color::from("#ffffff"));
        assert!(!v.aa);
        assert!(v.aa_large);
        assert!(!v.aaa);
        assert!(!v.aaa_large);
        assert!(v.passes(ConformanceLevel::Aa, TextSize::Large));
    }
}
