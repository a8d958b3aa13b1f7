//! Reboot persistence chain: what auto-starts on each side, and in which order.

use super::{Diagram, draw_title, draw_watermark, finish};
use crate::draw::render::{self, BadgeStyle};
use crate::draw::{
    ACCENT, BG, BLUE, BORDER, CARD_BG, Canvas, Color, FG, FOOTER_BG, FontStyle, GREEN, ORANGE,
    PANEL_BG, SOFT,
};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::Rect;
use std::path::{Path, PathBuf};

/// Column heading, outline color, and (label, detail) rows.
type Column = (&'static str, Color, &'static [(&'static str, &'static str)]);

const COLUMNS: [Column; 2] = [
    (
        "dom0",
        BLUE,
        &[
            ("VM autostart", "qvm-prefs autostart True"),
            ("Tunnel 32125", "openclaw-tunnel@32125.service"),
            ("Tunnel 18789", "openclaw-tunnel@18789.service"),
            ("Admin web", "qubes-global-admin-web.service"),
            ("qvm-remote", "qvm-remote-dom0.service"),
            ("Policies", "/etc/qubes/policy.d/"),
        ],
    ),
    (
        "openclaw-vm",
        ORANGE,
        &[
            ("Cursor proxy", "openclaw-cursor-proxy.service"),
            ("Gateway", "openclaw-gateway.service"),
            ("ConnectTCP", "/etc/qubes-rpc/qubes.ConnectTCP"),
            ("User linger", "loginctl enable-linger"),
            ("Config", "~/.openclaw/openclaw.json"),
        ],
    ),
];

const BOOT_STEPS: [&str; 6] = [
    "Xen",
    "dom0",
    "qubesd",
    "VM start",
    "systemd user",
    "Services ready",
];

pub fn render(out_dir: &Path, theme: &Theme) -> Result<PathBuf, RenderError> {
    let canvas = Canvas::new(&theme.fonts, BG)?;
    let c = &canvas;

    draw_title(
        c,
        "Reboot Persistence Chain",
        Some("Every component auto-starts — zero manual intervention after setup"),
    );

    for (ci, (title, color, items)) in COLUMNS.iter().enumerate() {
        let bx = 50 + ci as i32 * 580;
        render::rounded_rect(c, Rect::new(bx, 95, bx + 540, 560), CARD_BG, Some(*color), 8.0);
        render::text(c, bx + 15, 105, title, FontStyle::Bold, 15.0, *color);

        for (i, (label, detail)) in items.iter().enumerate() {
            let y = 140 + i as i32 * 65;
            render::rounded_rect(
                c,
                Rect::new(bx + 15, y, bx + 525, y + 50),
                PANEL_BG,
                Some(BORDER),
                4.0,
            );
            render::badge(c, bx + 25, y + 8, "enabled", GREEN, &BadgeStyle::DIAGRAM);
            render::text(c, bx + 110, y + 8, label, FontStyle::Bold, 12.0, FG);
            render::text(c, bx + 25, y + 28, detail, FontStyle::Code, 11.0, SOFT);
        }
    }

    // Boot sequence bar
    render::rounded_rect(c, Rect::new(50, 575, 1150, 640), FOOTER_BG, Some(BORDER), 8.0);
    render::text(c, 70, 585, "Boot sequence:", FontStyle::Bold, 12.0, ACCENT);

    let mut sx = 70;
    for (i, step) in BOOT_STEPS.iter().enumerate() {
        // Hypervisor-side steps in blue, VM-side in orange
        let color = if i < 3 { BLUE } else { ORANGE };
        let width = render::badge(c, sx, 608, step, color, &BadgeStyle::DIAGRAM);
        sx += width as i32 + 6;
        if i < BOOT_STEPS.len() - 1 {
            render::text(c, sx - 2, 608, "->", FontStyle::Code, 11.0, SOFT);
            sx += 20;
        }
    }

    draw_watermark(c, theme);
    finish(canvas, out_dir, Diagram::Persistence)
}
