//! Post 1: the architecture diagram framed for social media.

use super::{Post, PostDirs, draw_footer, draw_header, finish};
use crate::assets::load_png_if_present;
use crate::draw::render;
use crate::draw::{ACCENT, BG, Canvas, FG, FontStyle, HEIGHT, WIDTH};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::fit_dimensions;
use std::path::PathBuf;

const FALLBACK_HEADING: &str = "AI Agents on Qubes OS";

const FALLBACK_LINES: [&str; 4] = [
    "VM-isolated AI agents with airgapped admin",
    "Multi-provider: Cursor / OpenAI / Anthropic / Ollama",
    "Zero-config reboot persistence",
    "qrexec tunnels — no network exposure",
];

pub fn render(dirs: &PostDirs, theme: &Theme) -> Result<PathBuf, RenderError> {
    let canvas = Canvas::new(&theme.fonts, BG)?;
    draw_header(&canvas, theme, Post::Overview);

    match load_png_if_present(&dirs.diagrams.join("architecture.png"))? {
        Some(diagram) => {
            let (w, h) = fit_dimensions(
                diagram.width(),
                diagram.height(),
                WIDTH - 40,
                HEIGHT - 130,
            );
            canvas.paste(&diagram, (WIDTH - w) / 2, 68, w, h)?;
        }
        None => {
            log::info!("No architecture diagram found, drawing text summary instead");
            render::text(
                &canvas,
                WIDTH / 2 - 200,
                HEIGHT / 2 - 60,
                FALLBACK_HEADING,
                FontStyle::Bold,
                24.0,
                ACCENT,
            );
            for (i, line) in FALLBACK_LINES.iter().enumerate() {
                render::text(
                    &canvas,
                    WIDTH / 2 - 250,
                    HEIGHT / 2 + i as i32 * 30,
                    &format!("  {line}"),
                    FontStyle::Text,
                    16.0,
                    FG,
                );
            }
        }
    }

    draw_footer(
        &canvas,
        theme,
        "Secure AI infrastructure — VM isolation + airgapped dom0 administration",
    );
    finish(canvas, &dirs.output, Post::Overview)
}
