//! Cairo/Pango drawing primitives shared by diagrams and posts.

use super::canvas::Canvas;
use super::color::{CARD_BG, Color, FG, SOFT, WHITE};
use super::font::FontStyle;
use crate::util::{self, Rect};
use std::f64::consts::PI;

/// Outline width used by every card and box
const OUTLINE_WIDTH: f64 = 2.0;
/// Arrowhead length and base width
const ARROWHEAD_SIZE: f64 = 8.0;

/// Padding and placement for a badge pill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeStyle {
    /// Font size in pixels (code style)
    pub size: f64,
    /// Added to the text ink width
    pub pad_x: f64,
    /// Added to the text ink height
    pub pad_y: f64,
    pub radius: f64,
}

impl BadgeStyle {
    /// Compact badge used inside diagrams.
    pub const DIAGRAM: BadgeStyle = BadgeStyle {
        size: 10.0,
        pad_x: 12.0,
        pad_y: 6.0,
        radius: 3.0,
    };

    /// Roomier badge used on posts, at the given font size.
    pub const fn post(size: f64) -> Self {
        BadgeStyle {
            size,
            pad_x: 14.0,
            pad_y: 8.0,
            radius: 4.0,
        }
    }
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self::post(11.0)
    }
}

/// Text ink box in pixels, relative to the layout origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtents {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

fn layout_for(canvas: &Canvas<'_>, text: &str, style: FontStyle, size: f64) -> pango::Layout {
    let font = canvas.fonts().resolve(style, size);
    log::trace!("Text '{}' using {}", text, font);

    let layout = pangocairo::functions::create_layout(canvas.context());
    layout.set_font_description(Some(&font.description()));
    layout.set_text(text);
    layout
}

/// Measures the ink bounds of `text` as it would be drawn.
pub fn measure_text(canvas: &Canvas<'_>, text: &str, style: FontStyle, size: f64) -> TextExtents {
    let layout = layout_for(canvas, text, style, size);
    let (ink, _logical) = layout.pixel_extents();
    TextExtents {
        x: ink.x(),
        y: ink.y(),
        width: ink.width(),
        height: ink.height(),
    }
}

/// Draws a single line of text with its layout box's top-left at (x, y).
pub fn text(
    canvas: &Canvas<'_>,
    x: i32,
    y: i32,
    text: &str,
    style: FontStyle,
    size: f64,
    color: Color,
) {
    let ctx = canvas.context();
    let layout = layout_for(canvas, text, style, size);

    ctx.save().ok();
    color.apply(ctx);
    ctx.move_to(x as f64, y as f64);
    pangocairo::functions::show_layout(ctx, &layout);
    ctx.restore().ok();
}

fn rounded_rect_path(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, radius: f64) {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    if r <= 0.0 {
        ctx.rectangle(x, y, w, h);
        return;
    }

    ctx.new_sub_path();
    ctx.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    ctx.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    ctx.arc(x + r, y + h - r, r, PI / 2.0, PI);
    ctx.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    ctx.close_path();
}

/// Draws a filled rectangle with rounded corners and an optional 2px outline.
///
/// `bounds` corners are inclusive; the outline is drawn inside them.
pub fn rounded_rect(
    canvas: &Canvas<'_>,
    bounds: Rect,
    fill: Color,
    outline: Option<Color>,
    radius: f64,
) {
    if !bounds.is_valid() {
        return;
    }

    let ctx = canvas.context();
    let x = bounds.x0 as f64;
    let y = bounds.y0 as f64;
    let w = bounds.width() as f64;
    let h = bounds.height() as f64;

    ctx.save().ok();
    fill.apply(ctx);
    rounded_rect_path(ctx, x, y, w, h, radius);
    let _ = ctx.fill();

    if let Some(outline) = outline {
        let half = OUTLINE_WIDTH / 2.0;
        outline.apply(ctx);
        ctx.set_line_width(OUTLINE_WIDTH);
        rounded_rect_path(
            ctx,
            x + half,
            y + half,
            (w - OUTLINE_WIDTH).max(0.0),
            (h - OUTLINE_WIDTH).max(0.0),
            (radius - half).max(0.0),
        );
        let _ = ctx.stroke();
    }
    ctx.restore().ok();
}

/// Draws a straight line. Odd widths are snapped to pixel centres.
pub fn line(canvas: &Canvas<'_>, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, width: f64) {
    let ctx = canvas.context();
    let offset = if (width.round() as i32) % 2 == 1 {
        0.5
    } else {
        0.0
    };

    ctx.save().ok();
    color.apply(ctx);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.move_to(x1 as f64 + offset, y1 as f64 + offset);
    ctx.line_to(x2 as f64 + offset, y2 as f64 + offset);
    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Fills a closed polygon.
pub fn polygon(canvas: &Canvas<'_>, points: &[(f64, f64)], color: Color) {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return;
    };

    let ctx = canvas.context();
    ctx.save().ok();
    color.apply(ctx);
    ctx.move_to(x0, y0);
    for &(x, y) in rest {
        ctx.line_to(x, y);
    }
    ctx.close_path();
    let _ = ctx.fill();
    ctx.restore().ok();
}

/// Fills a circle centred on (cx, cy).
pub fn dot(canvas: &Canvas<'_>, cx: i32, cy: i32, radius: f64, color: Color) {
    let ctx = canvas.context();
    ctx.save().ok();
    color.apply(ctx);
    ctx.arc(cx as f64, cy as f64, radius, 0.0, 2.0 * PI);
    let _ = ctx.fill();
    ctx.restore().ok();
}

/// Draws a pill-shaped badge and returns the width it occupies.
///
/// The pill is sized from the ink bounds of `label` plus the style's padding,
/// so callers can chain badges left to right: `x += badge(..) + gap`. The
/// label's ink is centred inside the padding.
pub fn badge(
    canvas: &Canvas<'_>,
    x: i32,
    y: i32,
    label: &str,
    color: Color,
    style: &BadgeStyle,
) -> f64 {
    let extents = measure_text(canvas, label, FontStyle::Code, style.size);
    let width = extents.width as f64 + style.pad_x;
    let height = extents.height as f64 + style.pad_y;

    rounded_rect(
        canvas,
        Rect::new(x, y, x + width as i32, y + height as i32),
        color,
        None,
        style.radius,
    );
    text(
        canvas,
        x + (style.pad_x / 2.0) as i32 - extents.x,
        y + (style.pad_y / 2.0) as i32 - extents.y,
        label,
        FontStyle::Code,
        style.size,
        WHITE,
    );

    width
}

/// Draws a 2px line from (x1, y1) to (x2, y2) with a filled arrowhead at the
/// destination and an optional label above the midpoint.
pub fn arrow(
    canvas: &Canvas<'_>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
    label: Option<&str>,
) {
    line(canvas, x1, y1, x2, y2, color, 2.0);

    if let Some(head) =
        util::arrowhead_triangle(x1 as f64, y1 as f64, x2 as f64, y2 as f64, ARROWHEAD_SIZE)
    {
        polygon(canvas, &head, color);
    }

    if let Some(label) = label {
        let mx = (x1 + x2) / 2;
        let my = (y1 + y2) / 2;
        text(canvas, mx + 4, my - 12, label, FontStyle::Code, 10.0, SOFT);
    }
}

/// Draws a card with a coloured outline, a 3px accent stripe along the top,
/// a bold title and an optional subtitle.
#[allow(clippy::too_many_arguments)]
pub fn labeled_box(
    canvas: &Canvas<'_>,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    label: &str,
    sublabel: Option<&str>,
    color: Color,
) {
    rounded_rect(canvas, Rect::new(x, y, x + w, y + h), CARD_BG, Some(color), 6.0);
    accent_stripe(canvas, x, y, w, color);

    text(canvas, x + 12, y + 10, label, FontStyle::Bold, 14.0, FG);
    if let Some(sublabel) = sublabel {
        text(canvas, x + 12, y + 30, sublabel, FontStyle::Code, 11.0, SOFT);
    }
}

/// Draws the 3px stripe that marks the top edge of a card.
pub fn accent_stripe(canvas: &Canvas<'_>, x: i32, y: i32, w: i32, color: Color) {
    line(canvas, x, y + 1, x + w, y + 1, color, 3.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BG, BLUE, GREEN};
    use crate::draw::font::FontResolver;

    #[test]
    fn badge_width_covers_text_plus_padding() {
        let fonts = FontResolver::default();
        let canvas = Canvas::new(&fonts, BG).unwrap();

        for label in ["no TCP/IP", "x", "Services ready", "multi-provider", "1/3"] {
            let measured = measure_text(&canvas, label, FontStyle::Code, 10.0);
            let width = badge(&canvas, 10, 10, label, GREEN, &BadgeStyle::DIAGRAM);
            assert!(
                width >= measured.width as f64 + BadgeStyle::DIAGRAM.pad_x,
                "badge for '{}' too narrow",
                label
            );
        }
    }

    #[test]
    fn post_badges_use_wider_padding() {
        let fonts = FontResolver::default();
        let canvas = Canvas::new(&fonts, BG).unwrap();

        let style = BadgeStyle::post(13.0);
        let measured = measure_text(&canvas, "2/3", FontStyle::Code, 13.0);
        let width = badge(&canvas, 0, 0, "2/3", BLUE, &style);
        assert_eq!(width, measured.width as f64 + 14.0);
        assert_eq!(BadgeStyle::default(), BadgeStyle::post(11.0));
    }

    #[test]
    fn longer_labels_produce_wider_badges() {
        let fonts = FontResolver::default();
        let canvas = Canvas::new(&fonts, BG).unwrap();
        let short = badge(&canvas, 0, 0, "VM", GREEN, &BadgeStyle::DIAGRAM);
        let long = badge(&canvas, 0, 40, "systemd user + linger", GREEN, &BadgeStyle::DIAGRAM);
        assert!(long > short);
    }

    #[test]
    fn primitives_tolerate_degenerate_input() {
        let fonts = FontResolver::default();
        let canvas = Canvas::new(&fonts, BG).unwrap();

        rounded_rect(&canvas, Rect::new(50, 50, 10, 10), BLUE, Some(GREEN), 8.0);
        rounded_rect(&canvas, Rect::new(0, 0, 3, 3), BLUE, Some(GREEN), 8.0);
        polygon(&canvas, &[], BLUE);
        arrow(&canvas, 100, 100, 100, 100, BLUE, Some("none"));
        labeled_box(&canvas, 40, 40, 200, 60, "dom0", None, BLUE);
        labeled_box(&canvas, 40, 140, 200, 60, "VM", Some("StandaloneVM"), GREEN);
    }
}
