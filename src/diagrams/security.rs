//! Security model: stacked isolation layers plus the airgap and secrets callouts.

use super::{Diagram, draw_footer, draw_title, draw_watermark, finish};
use crate::draw::render::{self, BadgeStyle};
use crate::draw::{
    BG, BLUE, CARD_BG, Canvas, Color, FontStyle, GREEN, ORANGE, PURPLE, RED, SOFT, WIDTH,
};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::Rect;
use std::path::{Path, PathBuf};

/// (label, description, color, top y, horizontal indent)
const LAYERS: [(&str, &str, Color, i32, i32); 4] = [
    (
        "Xen Hypervisor",
        "Hardware-enforced VM isolation",
        RED,
        90,
        80,
    ),
    (
        "Qrexec Policies",
        "Tag-based access: only openclaw-client -> openclaw-server",
        ORANGE,
        185,
        80,
    ),
    (
        "Port Restrictions",
        "ConnectTCP allows only 32125 and 18789",
        BLUE,
        280,
        80,
    ),
    (
        "Token Auth",
        "Gateway WebSocket requires auth token",
        PURPLE,
        375,
        80,
    ),
];

pub fn render(out_dir: &Path, theme: &Theme) -> Result<PathBuf, RenderError> {
    let canvas = Canvas::new(&theme.fonts, BG)?;
    let c = &canvas;

    draw_title(
        c,
        "Security Model",
        Some("Defense-in-depth: Xen isolation + qrexec policies + token auth + airgap"),
    );

    for (i, (label, desc, color, y, indent)) in LAYERS.into_iter().enumerate() {
        let x = 50 + indent;
        let w = WIDTH - 100 - indent * 2;
        render::rounded_rect(c, Rect::new(x, y, x + w, y + 70), CARD_BG, Some(color), 6.0);
        render::accent_stripe(c, x, y, w, color);
        render::text(c, x + 15, y + 12, label, FontStyle::Bold, 14.0, color);
        render::text(c, x + 15, y + 35, desc, FontStyle::Text, 11.0, SOFT);
        render::badge(
            c,
            x + w - 45,
            y + 12,
            &format!("Layer {}", i + 1),
            color,
            &BadgeStyle::DIAGRAM,
        );
    }

    callout(
        c,
        Rect::new(50, 470, 570, 560),
        GREEN,
        "Airgapped Admin (dom0)",
        &[
            "dom0 has no network stack.",
            "Tunnels use Xen shared memory (qrexec),",
            "not TCP/IP. Zero attack surface.",
        ],
    );

    callout(
        c,
        Rect::new(600, 470, 1150, 560),
        RED,
        "Secrets Stay in VM",
        &[
            "API keys live in ~/.openclaw/openclaw.json",
            "inside the VM. Never in dom0, never in git.",
            "Example configs use ${PLACEHOLDER} syntax.",
        ],
    );

    draw_footer(
        c,
        theme,
        Rect::new(50, 580, 1150, 645),
        (70, 592),
        "Security-first AI infrastructure on Qubes OS",
        &[
            (950, 595, "airgapped", GREEN),
            (1040, 595, "open source", BLUE),
        ],
    );

    draw_watermark(c, theme);
    finish(canvas, out_dir, Diagram::Security)
}

/// Outlined card with a coloured heading and up to three body lines.
fn callout(canvas: &Canvas<'_>, bounds: Rect, color: Color, heading: &str, lines: &[&str]) {
    render::rounded_rect(canvas, bounds, CARD_BG, Some(color), 6.0);
    let x = bounds.x0 + 15;
    render::text(canvas, x, bounds.y0 + 10, heading, FontStyle::Bold, 14.0, color);
    for (i, line) in lines.iter().enumerate() {
        let y = bounds.y0 + 35 + i as i32 * 18;
        render::text(canvas, x, y, line, FontStyle::Text, 11.0, SOFT);
    }
}
