//! Full system architecture: dom0, the agent VM, and what survives a reboot.

use super::{Diagram, badge_row, draw_footer, draw_title, draw_watermark, finish};
use crate::draw::render::{self, BadgeStyle};
use crate::draw::{
    ACCENT, BG, BLUE, CARD_BG, Canvas, FG, FontStyle, GREEN, ORANGE, PURPLE, SOFT,
};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::Rect;
use std::path::{Path, PathBuf};

pub fn render(out_dir: &Path, theme: &Theme) -> Result<PathBuf, RenderError> {
    let canvas = Canvas::new(&theme.fonts, BG)?;
    let c = &canvas;

    draw_title(
        c,
        &format!("{} Architecture", theme.branding.product),
        Some("AI agents isolated in Qubes OS VM, administered from airgapped dom0"),
    );

    // dom0 panel
    render::rounded_rect(c, Rect::new(40, 95, 560, 310), CARD_BG, Some(BLUE), 8.0);
    render::text(c, 55, 102, "dom0 (airgapped)", FontStyle::Bold, 15.0, BLUE);

    let ports = [
        (":9876", "Admin Web UI", GREEN),
        (":32125", "Proxy tunnel", ACCENT),
        (":18789", "Gateway tunnel", ACCENT),
    ];
    for (i, (port, desc, color)) in ports.into_iter().enumerate() {
        let y = 135 + i as i32 * 40;
        render::text(
            c,
            70,
            y,
            &format!("localhost{port}"),
            FontStyle::Code,
            12.0,
            color,
        );
        render::text(c, 250, y + 1, desc, FontStyle::Text, 11.0, SOFT);
    }

    render::text(
        c,
        70,
        268,
        "socat  ->  qrexec-client  ->  Xen shared memory",
        FontStyle::Code,
        10.0,
        SOFT,
    );
    render::badge(c, 430, 265, "no TCP/IP", GREEN, &BadgeStyle::DIAGRAM);

    render::arrow(c, 560, 200, 640, 200, ACCENT, Some("qrexec"));

    // VM panel
    render::rounded_rect(c, Rect::new(640, 95, 1160, 420), CARD_BG, Some(ORANGE), 8.0);
    render::text(
        c,
        655,
        102,
        "openclaw-vm (StandaloneVM)",
        FontStyle::Bold,
        15.0,
        ORANGE,
    );

    let services = [
        ("openclaw-cursor proxy", Some(":32125"), "OpenAI-compatible API"),
        ("openclaw gateway", Some(":18789"), "Dashboard + WebSocket"),
        ("qubes.ConnectTCP", None, "qrexec TCP handler"),
    ];
    for (i, (name, port, desc)) in services.into_iter().enumerate() {
        let y = 135 + i as i32 * 45;
        render::text(c, 665, y, name, FontStyle::Code, 12.0, FG);
        if let Some(port) = port {
            render::badge(c, 900, y, port, ORANGE, &BadgeStyle::DIAGRAM);
        }
        render::text(c, 665, y + 18, desc, FontStyle::Text, 10.0, SOFT);
    }

    render::text(c, 655, 285, "Providers:", FontStyle::Bold, 12.0, SOFT);
    badge_row(
        c,
        665,
        308,
        &[
            ("Cursor Pro", BLUE),
            ("OpenAI", GREEN),
            ("Anthropic", ORANGE),
            ("Ollama", PURPLE),
        ],
        8,
    );

    render::text(c, 655, 345, "Optional:", FontStyle::Bold, 12.0, SOFT);
    badge_row(
        c,
        665,
        368,
        &[("Tailscale", PURPLE), ("WhatsApp", GREEN), ("Docker", BLUE)],
        8,
    );

    // Reboot survival
    render::rounded_rect(c, Rect::new(40, 440, 1160, 540), CARD_BG, Some(GREEN), 8.0);
    render::text(c, 55, 450, "Survives reboot", FontStyle::Bold, 15.0, GREEN);
    let boot_items = [
        "VM autostart",
        "systemd user + linger",
        "dom0 tunnel services",
        "qrexec policies",
        "ConnectTCP handler",
    ];
    let boot_badges: Vec<_> = boot_items.iter().map(|item| (*item, GREEN)).collect();
    badge_row(c, 55, 478, &boot_badges, 10);

    draw_footer(
        c,
        theme,
        Rect::new(40, 560, 1160, 640),
        (60, 575),
        "Run AI agents on Qubes OS with VM isolation and airgapped admin",
        &[
            (900, 580, "open source", GREEN),
            (1000, 580, "multi-provider", PURPLE),
        ],
    );

    draw_watermark(c, theme);
    finish(canvas, out_dir, Diagram::Architecture)
}
