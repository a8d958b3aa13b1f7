//! RGBA color type and the shared dark-theme palette.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use qubes_claw_media::draw::Color;
/// let accent = Color::rgb(88, 166, 255);
/// assert_eq!(accent, qubes_claw_media::draw::ACCENT);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Returns the color as 8-bit channels, dropping alpha.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }

    /// Sets this color as the Cairo source.
    pub fn apply(self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Canvas background
pub const BG: Color = Color::rgb(15, 17, 23);
/// Primary foreground text
pub const FG: Color = Color::rgb(230, 237, 243);
/// Secondary text (descriptions, comments)
pub const SOFT: Color = Color::rgb(139, 148, 158);
pub const BLUE: Color = Color::rgb(56, 132, 244);
pub const GREEN: Color = Color::rgb(63, 185, 80);
pub const ORANGE: Color = Color::rgb(227, 139, 40);
pub const RED: Color = Color::rgb(218, 54, 51);
pub const PURPLE: Color = Color::rgb(137, 87, 229);
/// Card outlines, rules and the watermark
pub const BORDER: Color = Color::rgb(48, 54, 61);
/// Card fill
pub const CARD_BG: Color = Color::rgb(22, 27, 34);
/// Links and product name
pub const ACCENT: Color = Color::rgb(88, 166, 255);
/// Badge text
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Footer bars on diagrams
pub const FOOTER_BG: Color = Color::rgb(20, 22, 28);
/// Header and footer bars on posts
pub const BAR_BG: Color = Color::rgb(10, 12, 18);
/// Item cards and the terminal title bar
pub const PANEL_BG: Color = Color::rgb(30, 35, 42);
/// Terminal window body
pub const TERMINAL_BG: Color = Color::rgb(13, 15, 20);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_round_trips_through_eight_bit_channels() {
        assert_eq!(ACCENT.to_rgb8(), [88, 166, 255]);
        assert_eq!(BG.to_rgb8(), [15, 17, 23]);
        assert_eq!(WHITE.a, 1.0);
    }
}
