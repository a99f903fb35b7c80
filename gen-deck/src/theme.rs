//! Brand palette and color math.
//!
//! Colors are kept as packed RGB hex values so the palette reads like the
//! web stylesheet it was lifted from; `color`/`blend`/`lerp` convert to
//! printpdf's float colors at the call site. PDF fills are opaque, so the
//! deck's translucent panels are pre-blended against the background dark.

use printpdf::{Color, Rgb};

pub const DARK_950: u32 = 0x020617;
pub const DARK_900: u32 = 0x0f172a;
pub const DARK_700: u32 = 0x334155;
pub const DARK_600: u32 = 0x475569;
pub const DARK_500: u32 = 0x64748b;

pub const SOLAR_500: u32 = 0x0ea5e9;
pub const SOLAR_400: u32 = 0x38bdf8;

pub const AMBER_500: u32 = 0xf59e0b;
pub const AMBER_400: u32 = 0xfbbf24;

pub const EMERALD_400: u32 = 0x34d399;

pub const WHITE: u32 = 0xffffff;
pub const LIGHT_TEXT: u32 = 0xe2e8f0;
pub const MUTED_TEXT: u32 = 0x94a3b8;

/// Unpack a hex color into 0.0-1.0 channels.
pub fn channels(hex: u32) -> (f64, f64, f64) {
    let r = ((hex >> 16) & 0xff) as f64 / 255.0;
    let g = ((hex >> 8) & 0xff) as f64 / 255.0;
    let b = (hex & 0xff) as f64 / 255.0;
    (r, g, b)
}

pub fn color(hex: u32) -> Color {
    let (r, g, b) = channels(hex);
    Color::Rgb(Rgb::new(r as f32, g as f32, b as f32, None))
}

/// `fg` at `alpha` composited over `bg`.
pub fn blend(fg: u32, bg: u32, alpha: f64) -> Color {
    let (fr, fg_, fb) = channels(fg);
    let (br, bg_, bb) = channels(bg);
    Color::Rgb(Rgb::new(
        (fr * alpha + br * (1.0 - alpha)) as f32,
        (fg_ * alpha + bg_ * (1.0 - alpha)) as f32,
        (fb * alpha + bb * (1.0 - alpha)) as f32,
        None,
    ))
}

/// Linear interpolation between two palette colors.
pub fn lerp(a: u32, b: u32, t: f64) -> Color {
    let (ar, ag, ab) = channels(a);
    let (br, bg, bb) = channels(b);
    let rest = 1.0 - t;
    Color::Rgb(Rgb::new(
        (ar * rest + br * t) as f32,
        (ag * rest + bg * t) as f32,
        (ab * rest + bb * t) as f32,
        None,
    ))
}

/// Standard translucent panel fill, pre-blended over the page dark.
pub fn panel_fill() -> Color {
    blend(DARK_900, DARK_950, 0.6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_of(color: Color) -> (f64, f64, f64) {
        match color {
            Color::Rgb(rgb) => (rgb.r.into(), rgb.g.into(), rgb.b.into()),
            _ => panic!("expected rgb color"),
        }
    }

    #[test]
    fn test_channels() {
        assert_eq!(channels(0xffffff), (1.0, 1.0, 1.0));
        assert_eq!(channels(0x000000), (0.0, 0.0, 0.0));
        let (r, g, b) = channels(0xff8000);
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(rgb_of(blend(WHITE, DARK_950, 1.0)), channels(WHITE));
        assert_eq!(rgb_of(blend(WHITE, DARK_950, 0.0)), channels(DARK_950));
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(rgb_of(lerp(DARK_950, DARK_900, 0.0)), channels(DARK_950));
        assert_eq!(rgb_of(lerp(DARK_950, DARK_900, 1.0)), channels(DARK_900));
    }

    #[test]
    fn test_color_math_is_deterministic() {
        // The renderer consults no external state: the same inputs must give
        // identical drawing parameters on every run.
        for hex in [DARK_950, SOLAR_400, AMBER_500, MUTED_TEXT] {
            assert_eq!(rgb_of(color(hex)), rgb_of(color(hex)));
            assert_eq!(rgb_of(lerp(hex, WHITE, 0.3)), rgb_of(lerp(hex, WHITE, 0.3)));
        }
    }
}
