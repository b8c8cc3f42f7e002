//! Fixed visual theme for the calculator window.
//!
//! The app ships one light palette (cyan accent over pale neutrals, with a
//! dark results card) rather than following the desktop appearance, so the
//! colors are applied once at startup into the gpui-component global theme.

use gpui::{App, Hsla, rgb};
use gpui_component::Theme;

/// Brand colors, shared with the components that paint outside the themed
/// widget set (results card, readouts).
pub mod palette {
    /// Strong cyan used for the accent, readouts, and primary buttons.
    pub const ACCENT: u32 = 0x26c2ae;
    /// Very dark cyan: results card background and primary text.
    pub const CARD: u32 = 0x00474b;
    /// Dark grayish cyan for labels.
    pub const TEXT_MUTED: u32 = 0x5e7a7d;
    /// Grayish cyan for secondary captions.
    pub const TEXT_FAINT: u32 = 0x7f9d9f;
    /// Light grayish cyan window backdrop.
    pub const BACKDROP: u32 = 0xc5e4e7;
    /// Near-white field and card surface.
    pub const SURFACE: u32 = 0xf3f9fa;
    pub const WHITE: u32 = 0xffffff;
    /// Muted orange for the zero-people error.
    pub const ERROR: u32 = 0xe17052;
}

fn hover_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.05 } else { 0.05 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

fn active_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.10 } else { 0.10 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

/// Writes the calculator palette into the gpui-component global theme.
pub fn apply_splitter_theme(cx: &mut App) {
    let accent: Hsla = rgb(palette::ACCENT).into();
    let card: Hsla = rgb(palette::CARD).into();
    let surface: Hsla = rgb(palette::SURFACE).into();
    let backdrop: Hsla = rgb(palette::BACKDROP).into();
    let muted_text: Hsla = rgb(palette::TEXT_MUTED).into();
    let faint_text: Hsla = rgb(palette::TEXT_FAINT).into();
    let white: Hsla = rgb(palette::WHITE).into();
    let error: Hsla = rgb(palette::ERROR).into();

    let colors = &mut Theme::global_mut(cx).colors;

    // ── Primary (accent cyan) ─────────────────────────────────────
    colors.primary = accent;
    colors.primary_foreground = card;
    colors.primary_hover = hover_variant(accent);
    colors.primary_active = active_variant(accent);

    // ── Background / foreground ───────────────────────────────────
    colors.background = backdrop;
    colors.foreground = card;
    colors.accent = surface;
    colors.accent_foreground = card;

    // ── Secondary / muted / popover ───────────────────────────────
    colors.secondary = surface;
    colors.secondary_foreground = muted_text;
    colors.secondary_hover = hover_variant(surface);
    colors.secondary_active = active_variant(surface);
    colors.muted = surface;
    colors.muted_foreground = faint_text;
    colors.popover = white;
    colors.popover_foreground = card;

    // ── Borders / focus / selection ───────────────────────────────
    colors.border = backdrop;
    colors.input = backdrop;
    colors.ring = accent;
    colors.selection = backdrop;
    colors.caret = accent;

    // ── Semantic ──────────────────────────────────────────────────
    colors.danger = error;
    colors.danger_foreground = white;
    colors.danger_hover = hover_variant(error);
    colors.danger_active = active_variant(error);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_gray(l: f32) -> Hsla {
        Hsla {
            h: 0.0,
            s: 0.0,
            l,
            a: 1.0,
        }
    }

    fn assert_close(
        actual: f32,
        expected: f32,
    ) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn hover_darkens_light_colors_and_lightens_dark_ones() {
        assert_close(hover_variant(mid_gray(0.8)).l, 0.75);
        assert_close(hover_variant(mid_gray(0.2)).l, 0.25);
    }

    #[test]
    fn active_shifts_twice_as_far_as_hover() {
        assert_close(active_variant(mid_gray(0.8)).l, 0.70);
        assert_close(active_variant(mid_gray(0.2)).l, 0.30);
    }

    #[test]
    fn variants_stay_inside_the_unit_range() {
        assert_close(hover_variant(mid_gray(1.0)).l, 0.95);
        assert_close(active_variant(mid_gray(0.0)).l, 0.10);
        assert!(active_variant(mid_gray(0.98)).l <= 1.0);
    }
}
