//! Post 2: admin web and gateway dashboard screenshots side by side.

use super::{Post, PostDirs, draw_footer, draw_header, finish, screenshot_placeholder};
use crate::assets::load_png_if_present;
use crate::draw::render::{self, BadgeStyle};
use crate::draw::{BG, BLUE, CARD_BG, Canvas, Color, HEIGHT, ORANGE, WIDTH};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::{Rect, fit_dimensions};
use cairo::ImageSurface;
use std::path::PathBuf;

/// One half of the composite: which screenshot goes where and how it is framed.
struct Panel {
    file: &'static str,
    placeholder: &'static str,
    label: &'static str,
    color: Color,
    /// Left edge of the card outline
    card_x: i32,
    /// Left edge of the paste box
    box_x: i32,
}

const BOX_WIDTH: i32 = (WIDTH - 60) / 2;
const BOX_HEIGHT: i32 = HEIGHT - 150;

const PANELS: [Panel; 2] = [
    Panel {
        file: "02-admin-web.png",
        placeholder: "[admin web - run demo first]",
        label: "dom0 Admin Web",
        color: BLUE,
        card_x: 18,
        box_x: 20,
    },
    Panel {
        file: "03-gateway-dashboard.png",
        placeholder: "[gateway dashboard - run demo first]",
        label: "OpenClaw Gateway",
        color: ORANGE,
        card_x: WIDTH / 2 + 8,
        box_x: WIDTH / 2 + 10,
    },
];

pub fn render(dirs: &PostDirs, theme: &Theme) -> Result<PathBuf, RenderError> {
    let canvas = Canvas::new(&theme.fonts, BG)?;
    draw_header(&canvas, theme, Post::Dashboards);

    for panel in &PANELS {
        let image = screenshot_or_placeholder(dirs, theme, panel)?;
        let (w, h) = fit_dimensions(image.width(), image.height(), BOX_WIDTH, BOX_HEIGHT);

        render::rounded_rect(
            &canvas,
            Rect::new(
                panel.card_x,
                66,
                panel.card_x + 4 + BOX_WIDTH,
                66 + BOX_HEIGHT + 4,
            ),
            CARD_BG,
            Some(panel.color),
            6.0,
        );
        canvas.paste(
            &image,
            panel.box_x + (BOX_WIDTH - w) / 2,
            70 + (BOX_HEIGHT - h) / 2,
            w,
            h,
        )?;
    }

    // Labels go on last so they sit above the pasted screenshots.
    for panel in &PANELS {
        render::badge(
            &canvas,
            panel.card_x + 7,
            72,
            panel.label,
            panel.color,
            &BadgeStyle::post(10.0),
        );
    }

    draw_footer(
        &canvas,
        theme,
        "All green from airgapped dom0 — proxy, gateway, tunnels, Tailscale",
    );
    finish(canvas, &dirs.output, Post::Dashboards)
}

fn screenshot_or_placeholder(
    dirs: &PostDirs,
    theme: &Theme,
    panel: &Panel,
) -> Result<ImageSurface, RenderError> {
    match load_png_if_present(&dirs.screenshots.join(panel.file))? {
        Some(image) => Ok(image),
        None => {
            log::info!("Screenshot {} missing, using placeholder", panel.file);
            screenshot_placeholder(&theme.fonts, BOX_WIDTH, BOX_HEIGHT, panel.placeholder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_match_fixed_layout() {
        assert_eq!(BOX_WIDTH, 570);
        assert_eq!(BOX_HEIGHT, 525);
        // Left card spans 18..=592, right card 608..=1182
        assert_eq!(PANELS[0].card_x + 4 + BOX_WIDTH, 592);
        assert_eq!(PANELS[1].card_x, 608);
        assert_eq!(PANELS[1].card_x + 4 + BOX_WIDTH, WIDTH / 2 + 12 + BOX_WIDTH);
        // Badges at x=25 and W/2+15
        assert_eq!(PANELS[0].card_x + 7, 25);
        assert_eq!(PANELS[1].card_x + 7, WIDTH / 2 + 15);
    }
}
