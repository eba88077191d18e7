//! Usage fraction to color mapping.
//!
//! Pure functions only; callers own any theme state.

use serde::Serialize;

use crate::filter::TalentFilterMode;
use crate::ratings::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels rounded and clamped to 0..=255.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| c.round().clamp(0.0, 255.0) as u8)
    }

    /// CSS `rgb(...)`, or `rgba(...)` when `alpha < 1`.
    pub fn to_css(self, alpha: f64) -> String {
        let [r, g, b] = self.to_rgb8();
        if alpha < 1.0 {
            format!("rgba({}, {}, {}, {})", r, g, b, alpha)
        } else {
            format!("rgb({}, {}, {})", r, g, b)
        }
    }
}

/// Color at zero usage.
pub const LOW_USAGE: Color = Color::new(175.0, 55.0, 0.0);
/// Color at full usage.
pub const HIGH_USAGE: Color = Color::new(100.0, 175.0, 125.0);

/// Dark UI palette shades blended into talent backgrounds and borders.
const DARK_BORDER: Color = dark_shade(4);
const DARK_BACKGROUND: Color = dark_shade(5);

const RANK_ZERO_FILTER: Color = Color::new(200.0, 50.0, 50.0);
const ACTIVE_FILTER: Color = Color::new(255.0, 180.0, 50.0);

/// Shade `index` of the 10-step dark ramp from (175, 191, 190) at 0 to
/// (23, 28, 34) at 7.
const fn dark_shade(index: u32) -> Color {
    let t = index as f64 / 7.0;
    Color::new(
        175.0 + (23.0 - 175.0) * t,
        191.0 + (28.0 - 191.0) * t,
        190.0 + (34.0 - 190.0) * t,
    )
}

pub fn lerp_color(from: Color, to: Color, delta: f64) -> Color {
    Color::new(
        lerp(from.r, to.r, delta),
        lerp(from.g, to.g, delta),
        lerp(from.b, to.b, delta),
    )
}

/// Blend from [`LOW_USAGE`] toward [`HIGH_USAGE`]. The fraction is applied
/// twice so low usage stays close to the low color.
pub fn usage_color(fraction: f64) -> Color {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    let high = lerp_color(LOW_USAGE, HIGH_USAGE, fraction);
    lerp_color(LOW_USAGE, high, fraction)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TalentColors {
    pub color: Color,
    pub border: Color,
    pub background: Color,
    pub border_hover: Color,
    pub background_hover: Color,
}

/// Colors of a talent icon given its usage and filter mode. Filtered talents
/// use a fixed highlight instead of the usage color.
pub fn talent_colors(fraction: f64, mode: TalentFilterMode) -> TalentColors {
    let (color, border_strength, background_strength) = match mode {
        TalentFilterMode::None => (usage_color(fraction), 0.3, 0.2),
        TalentFilterMode::RankZero => (RANK_ZERO_FILTER, 0.5, 0.3),
        _ => (ACTIVE_FILTER, 0.5, 0.3),
    };
    TalentColors {
        color,
        border: lerp_color(color, DARK_BORDER, 1.0 - border_strength),
        background: lerp_color(color, DARK_BACKGROUND, 1.0 - background_strength),
        border_hover: lerp_color(color, DARK_BORDER, 0.8 - border_strength),
        background_hover: lerp_color(color, DARK_BACKGROUND, 0.8 - background_strength),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_color_endpoints() {
        assert_eq!(usage_color(0.0), LOW_USAGE);
        assert_eq!(usage_color(1.0).to_rgb8(), [100, 175, 125]);
    }

    #[test]
    fn test_usage_color_midpoint() {
        // high = (137.5, 115, 62.5); result = lerp(low, high, 0.5)
        let c = usage_color(0.5);
        assert!((c.r - 156.25).abs() < 1e-9);
        assert!((c.g - 85.0).abs() < 1e-9);
        assert!((c.b - 31.25).abs() < 1e-9);
    }

    #[test]
    fn test_usage_color_clamps() {
        assert_eq!(usage_color(-3.0), usage_color(0.0));
        assert_eq!(usage_color(7.5), usage_color(1.0));
        assert_eq!(usage_color(f64::NAN), usage_color(0.0));
    }

    #[test]
    fn test_css() {
        assert_eq!(LOW_USAGE.to_css(1.0), "rgb(175, 55, 0)");
        assert_eq!(LOW_USAGE.to_css(0.5), "rgba(175, 55, 0, 0.5)");
    }

    #[test]
    fn test_talent_colors_by_mode() {
        assert_eq!(talent_colors(0.2, TalentFilterMode::None).color, usage_color(0.2));
        assert_eq!(talent_colors(0.2, TalentFilterMode::RankZero).color, RANK_ZERO_FILTER);
        assert_eq!(talent_colors(0.2, TalentFilterMode::RankTwoAndUp).color, ACTIVE_FILTER);

        let colors = talent_colors(1.0, TalentFilterMode::RankOneAndUp);
        assert_eq!(colors.border, lerp_color(ACTIVE_FILTER, DARK_BORDER, 0.5));
    }
}
