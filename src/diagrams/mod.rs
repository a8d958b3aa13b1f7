//! The three architecture diagrams.
//!
//! Each diagram is a fixed sequence of drawing calls on a dark 1200x675
//! canvas, saved as `<name>.png` in the output directory.

pub mod architecture;
pub mod persistence;
pub mod security;

use crate::draw::render::{self, BadgeStyle};
use crate::draw::{ACCENT, BORDER, Canvas, Color, FG, FOOTER_BG, FontStyle, SOFT, WIDTH};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::Rect;
use std::path::{Path, PathBuf};

/// One of the generated diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagram {
    Architecture,
    Persistence,
    Security,
}

impl Diagram {
    /// All diagrams in generation order.
    pub const ALL: [Diagram; 3] = [
        Diagram::Architecture,
        Diagram::Persistence,
        Diagram::Security,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Diagram::Architecture => "architecture.png",
            Diagram::Persistence => "persistence.png",
            Diagram::Security => "security.png",
        }
    }

    /// Renders this diagram into `out_dir` and returns the written path.
    pub fn render(self, out_dir: &Path, theme: &Theme) -> Result<PathBuf, RenderError> {
        match self {
            Diagram::Architecture => architecture::render(out_dir, theme),
            Diagram::Persistence => persistence::render(out_dir, theme),
            Diagram::Security => security::render(out_dir, theme),
        }
    }
}

/// Renders every diagram in order, stopping at the first failure.
pub fn render_all(out_dir: &Path, theme: &Theme) -> Result<Vec<PathBuf>, RenderError> {
    Diagram::ALL
        .iter()
        .map(|diagram| diagram.render(out_dir, theme))
        .collect()
}

/// Saves a finished diagram and prints the confirmation line.
fn finish(canvas: Canvas<'_>, out_dir: &Path, diagram: Diagram) -> Result<PathBuf, RenderError> {
    let (width, height) = (canvas.width(), canvas.height());
    let path = out_dir.join(diagram.file_name());
    canvas.save_png(&path)?;
    println!("  {} ({}x{})", diagram.file_name(), width, height);
    Ok(path)
}

/// Heading, optional subtitle and the rule underneath.
fn draw_title(canvas: &Canvas<'_>, title: &str, subtitle: Option<&str>) {
    render::text(canvas, 40, 24, title, FontStyle::Bold, 22.0, FG);
    if let Some(subtitle) = subtitle {
        render::text(canvas, 40, 54, subtitle, FontStyle::Text, 13.0, SOFT);
    }
    render::line(canvas, 40, 76, WIDTH - 40, 76, BORDER, 1.0);
}

/// Repository URL in the bottom-right corner.
fn draw_watermark(canvas: &Canvas<'_>, theme: &Theme) {
    render::text(
        canvas,
        canvas.width() - 200,
        canvas.height() - 22,
        &theme.branding.repository,
        FontStyle::Code,
        10.0,
        BORDER,
    );
}

/// Branding bar: product name, one-line description and a few badges.
///
/// `(text_x, text_y)` places the product name; the description sits 25px
/// below it.
fn draw_footer(
    canvas: &Canvas<'_>,
    theme: &Theme,
    bounds: Rect,
    (text_x, text_y): (i32, i32),
    description: &str,
    badges: &[(i32, i32, &str, Color)],
) {
    render::rounded_rect(canvas, bounds, FOOTER_BG, Some(BORDER), 8.0);
    render::text(
        canvas,
        text_x,
        text_y,
        &theme.branding.product,
        FontStyle::Bold,
        18.0,
        ACCENT,
    );
    render::text(
        canvas,
        text_x,
        text_y + 25,
        description,
        FontStyle::Text,
        13.0,
        SOFT,
    );
    for &(x, y, label, color) in badges {
        render::badge(canvas, x, y, label, color, &BadgeStyle::DIAGRAM);
    }
}

/// Draws badges left to right starting at `x`, separated by `gap` pixels.
///
/// Returns the x position after the last badge and its trailing gap.
fn badge_row(canvas: &Canvas<'_>, x: i32, y: i32, items: &[(&str, Color)], gap: i32) -> i32 {
    let mut cursor = x;
    for &(label, color) in items {
        let width = render::badge(canvas, cursor, y, label, color, &BadgeStyle::DIAGRAM);
        cursor += width as i32 + gap;
    }
    cursor
}
