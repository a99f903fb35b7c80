//! Drawing primitives over a printpdf page layer.
//!
//! Coordinates are millimeters from the bottom-left corner of an A4 page,
//! font sizes are points. Composite helpers (stat boxes, feature rows,
//! timeline dots) encode the deck's recurring visual vocabulary so page
//! procedures stay mostly content.

use crate::theme;
use anyhow::Result;
use printpdf::utils::{calculate_points_for_circle, calculate_points_for_rect};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocumentReference,
    PdfLayerReference, Polygon,
};

pub const PAGE_W: f64 = 210.0;
pub const PAGE_H: f64 = 297.0;

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Average glyph advance for builtin Helvetica, in em. The builtin fonts
/// ship without metrics, so centering works off this estimate; close enough
/// for slide headings.
const AVG_CHAR_WIDTH_EM: f64 = 0.5;

#[derive(Clone)]
pub struct Fonts {
    pub regular: IndirectFontRef,
    pub bold: IndirectFontRef,
    pub oblique: IndirectFontRef,
}

impl Fonts {
    pub fn load(doc: &PdfDocumentReference) -> Result<Self> {
        let load = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| anyhow::anyhow!("Failed to load builtin font: {e}"))
        };
        Ok(Self {
            regular: load(BuiltinFont::Helvetica)?,
            bold: load(BuiltinFont::HelveticaBold)?,
            oblique: load(BuiltinFont::HelveticaOblique)?,
        })
    }
}

pub struct Canvas {
    layer: PdfLayerReference,
    pub fonts: Fonts,
}

impl Canvas {
    pub fn new(layer: PdfLayerReference, fonts: Fonts) -> Self {
        Self { layer, fonts }
    }

    // Primitives

    pub fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.layer.set_fill_color(color);
        self.layer.add_polygon(Polygon {
            rings: vec![calculate_points_for_rect(
                Mm(w as f32),
                Mm(h as f32),
                Mm((x + w / 2.0) as f32),
                Mm((y + h / 2.0) as f32),
            )],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    pub fn stroke_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color, thickness_pt: f64) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(thickness_pt as f32);
        self.layer.add_polygon(Polygon {
            rings: vec![calculate_points_for_rect(
                Mm(w as f32),
                Mm(h as f32),
                Mm((x + w / 2.0) as f32),
                Mm((y + h / 2.0) as f32),
            )],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        });
    }

    pub fn fill_circle(&self, cx: f64, cy: f64, r: f64, color: Color) {
        self.layer.set_fill_color(color);
        self.layer.add_polygon(Polygon {
            rings: vec![calculate_points_for_circle(Mm(r as f32), Mm(cx as f32), Mm(cy as f32))],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    pub fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, thickness_pt: f64) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(thickness_pt as f32);
        self.layer.add_line(Line {
            points: vec![
                (printpdf::Point::new(Mm(x1 as f32), Mm(y1 as f32)), false),
                (printpdf::Point::new(Mm(x2 as f32), Mm(y2 as f32)), false),
            ],
            is_closed: false,
        });
    }

    pub fn text(&self, s: &str, size_pt: f64, x: f64, y: f64, font: &IndirectFontRef, hex: u32) {
        self.layer.set_fill_color(theme::color(hex));
        self.layer.use_text(s, size_pt as f32, Mm(x as f32), Mm(y as f32), font);
    }

    pub fn text_centered(
        &self,
        s: &str,
        size_pt: f64,
        cx: f64,
        y: f64,
        font: &IndirectFontRef,
        hex: u32,
    ) {
        let x = cx - est_text_width_mm(s, size_pt) / 2.0;
        self.text(s, size_pt, x, y, font, hex);
    }

    // Composites

    /// Dark gradient page background with a faint glow at the top edge.
    pub fn gradient_bg(&self) {
        let steps = 40;
        for i in 0..steps {
            let t = i as f64 / steps as f64;
            let strip_h = PAGE_H / steps as f64;
            let y = PAGE_H - strip_h * (i + 1) as f64;
            self.fill_rect(
                0.0,
                y,
                PAGE_W,
                strip_h + 0.2,
                theme::lerp(theme::DARK_950, theme::DARK_900, t),
            );
        }
        self.fill_circle(
            PAGE_W / 2.0,
            PAGE_H + 35.0,
            140.0,
            theme::blend(theme::SOLAR_500, theme::DARK_950, 0.03),
        );
    }

    /// Sun mark: amber disc with eight rays.
    pub fn sun_icon(&self, cx: f64, cy: f64, size: f64) {
        self.fill_circle(cx, cy, size * 0.35, theme::color(theme::AMBER_500));
        for angle in (0..360).step_by(45) {
            let rad = f64::from(angle).to_radians();
            let (sin, cos) = rad.sin_cos();
            self.line(
                cx + cos * size * 0.5,
                cy + sin * size * 0.5,
                cx + cos * size * 0.7,
                cy + sin * size * 0.7,
                theme::color(theme::AMBER_400),
                1.5,
            );
        }
    }

    pub fn accent_line(&self, x: f64, y: f64, width: f64, hex: u32) {
        self.line(x, y, x + width, y, theme::color(hex), 2.0);
    }

    /// Page number + accent line + title block at the top of a section page.
    pub fn section_header(&self, number: &str, title: &str, subtitle: &str, accent: u32) {
        let y = PAGE_H - 25.0;
        self.text(number, 11.0, 18.0, y, &self.fonts.bold, accent);
        self.accent_line(25.0, y + 1.5, 11.0, accent);
        self.text(title, 22.0, 18.0, y - 12.0, &self.fonts.bold, theme::WHITE);
        if !subtitle.is_empty() {
            self.text(
                subtitle,
                10.0,
                18.0,
                y - 20.0,
                &self.fonts.regular,
                theme::MUTED_TEXT,
            );
        }
    }

    /// Translucent panel with a subtle colored border.
    pub fn panel(&self, x: f64, y: f64, w: f64, h: f64, border: u32) {
        self.fill_rect(x, y, w, h, theme::panel_fill());
        self.stroke_rect(x, y, w, h, theme::blend(border, theme::DARK_950, 0.2), 0.5);
    }

    /// Metric box: large number over a muted label.
    pub fn stat_box(&self, x: f64, y: f64, number: &str, label: &str, accent: u32) {
        self.panel(x, y, 42.0, 25.0, accent);
        self.text_centered(number, 20.0, x + 21.0, y + 13.0, &self.fonts.bold, accent);
        self.text_centered(
            label,
            8.0,
            x + 21.0,
            y + 5.0,
            &self.fonts.regular,
            theme::MUTED_TEXT,
        );
    }

    /// Icon dot + bold title + muted description on one row.
    pub fn feature_row(&self, x: f64, y: f64, title: &str, desc: &str, accent: u32) {
        self.fill_circle(x + 3.5, y + 2.0, 3.5, theme::blend(accent, theme::DARK_950, 0.15));
        self.fill_circle(x + 3.5, y + 2.0, 1.2, theme::color(accent));
        self.text(title, 10.5, x + 10.0, y + 2.5, &self.fonts.bold, theme::WHITE);
        self.text(desc, 8.5, x + 10.0, y - 2.5, &self.fonts.regular, theme::MUTED_TEXT);
    }

    /// Roadmap dot with year label above the caption.
    pub fn timeline_dot(&self, x: f64, y: f64, label: &str, sublabel: &str, active: bool) {
        if active {
            self.fill_circle(x, y, 3.5, theme::blend(theme::SOLAR_400, theme::DARK_950, 0.3));
        }
        let dot = if active { theme::SOLAR_400 } else { theme::DARK_600 };
        self.fill_circle(x, y, 2.2, theme::color(dot));
        let label_color = if active { theme::WHITE } else { theme::MUTED_TEXT };
        self.text_centered(label, 9.0, x, y - 7.5, &self.fonts.bold, label_color);
        self.text_centered(sublabel, 7.0, x, y - 12.0, &self.fonts.regular, theme::MUTED_TEXT);
    }

    /// Bullet lines in reading order; returns the y below the last line.
    pub fn bullet_list(&self, x: f64, mut y: f64, items: &[&str], size_pt: f64, hex: u32) -> f64 {
        for item in items {
            self.text(&format!("\u{2022} {item}"), size_pt, x, y, &self.fonts.regular, hex);
            y -= size_pt * 0.55;
        }
        y
    }
}

/// Estimated rendered width of a Helvetica string, in millimeters.
pub fn est_text_width_mm(s: &str, size_pt: f64) -> f64 {
    s.chars().count() as f64 * size_pt * AVG_CHAR_WIDTH_EM * PT_TO_MM
}

/// Greedy word wrap at a character budget per line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line = word.to_string();
        } else if line.chars().count() + 1 + word.chars().count() <= max_chars {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(line);
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_short() {
        assert_eq!(wrap_text("hello world", 75), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_breaks_at_budget() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 75).is_empty());
        assert!(wrap_text("   ", 75).is_empty());
    }

    #[test]
    fn test_wrap_text_is_deterministic() {
        let text = "Generar 10 propuestas solares con la plataforma para clientes reales.";
        assert_eq!(wrap_text(text, 40), wrap_text(text, 40));
    }

    #[test]
    fn test_est_text_width_scales() {
        let narrow = est_text_width_mm("abc", 10.0);
        let wide = est_text_width_mm("abcdef", 10.0);
        assert!((wide - narrow * 2.0).abs() < 1e-9);
        assert!(est_text_width_mm("abc", 20.0) > narrow);
    }
}
