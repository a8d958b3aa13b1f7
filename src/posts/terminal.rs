//! Post 3: a terminal window replaying the dom0 health checks.

use super::{Post, PostDirs, draw_footer, draw_header, finish};
use crate::assets::read_lines_if_present;
use crate::draw::render;
use crate::draw::{
    ACCENT, BG, BORDER, Canvas, Color, FG, FontStyle, GREEN, HEIGHT, PANEL_BG, SOFT, TERMINAL_BG,
    WIDTH,
};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::Rect;
use std::path::PathBuf;

/// Transcript lines beyond this are ignored.
pub const MAX_LINES: usize = 22;

const TERM_Y: i32 = 75;
const LINE_PITCH: i32 = 22;
const TRAFFIC_LIGHTS: [Color; 3] = [
    Color::rgb(255, 95, 86),
    Color::rgb(255, 189, 46),
    Color::rgb(39, 201, 63),
];

const FALLBACK_TRANSCRIPT: [&str; 22] = [
    "$ curl -s http://127.0.0.1:32125/health | python3 -m json.tool",
    "{",
    r#"  "status": "healthy","#,
    r#"  "authenticated": true,"#,
    r#"  "cursor_agent": "available","#,
    r#"  "proxy_version": "5c7c30c""#,
    "}",
    "",
    "$ systemctl is-active openclaw-tunnel@{32125,18789}",
    "active",
    "active",
    "",
    r"$ curl -s http://127.0.0.1:9876/api/openclaw/status | python3 -c \",
    r#"    "import sys,json; d=json.load(sys.stdin); \"#,
    r#"     print(f\"proxy={d['proxy_healthy']} gw={d['gateway_healthy']}\")""#,
    "proxy=True gw=True",
    "",
    "$ qvm-tags visyble list",
    "openclaw-server",
    "",
    "# All services healthy. Zero network exposure.",
    "# Administered entirely from airgapped dom0.",
];

/// How a transcript line is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Shell command (`$ ...`)
    Prompt,
    /// Shell comment (`# ...`)
    Comment,
    /// JSON braces and quoted members
    Json,
    /// Bare success words such as `active`
    Status,
    Plain,
}

impl LineKind {
    /// Classifies a line; the first matching rule wins.
    pub fn classify(line: &str) -> Self {
        if line.starts_with('$') {
            LineKind::Prompt
        } else if line.starts_with('#') {
            LineKind::Comment
        } else if line.starts_with('{') || line.starts_with('}') || line.trim().starts_with('"') {
            LineKind::Json
        } else if matches!(line, "active" | "True" | "openclaw-server") {
            LineKind::Status
        } else {
            LineKind::Plain
        }
    }

    pub fn color(self) -> Color {
        match self {
            LineKind::Prompt | LineKind::Status => GREEN,
            LineKind::Comment => SOFT,
            LineKind::Json => ACCENT,
            LineKind::Plain => FG,
        }
    }

    pub fn size(self) -> f64 {
        match self {
            LineKind::Prompt | LineKind::Comment | LineKind::Status => 12.0,
            LineKind::Json | LineKind::Plain => 11.0,
        }
    }
}

/// Lines from `04-health-checks.txt`, or the sample transcript if it is absent.
pub fn load_transcript(dirs: &PostDirs) -> Result<Vec<String>, RenderError> {
    let path = dirs.screenshots.join("04-health-checks.txt");
    Ok(read_lines_if_present(&path, MAX_LINES)?.unwrap_or_else(|| {
        log::info!("No health-check transcript found, using sample output");
        FALLBACK_TRANSCRIPT.iter().map(|line| line.to_string()).collect()
    }))
}

pub fn render(dirs: &PostDirs, theme: &Theme) -> Result<PathBuf, RenderError> {
    let canvas = Canvas::new(&theme.fonts, BG)?;
    draw_header(&canvas, theme, Post::Terminal);
    draw_window(&canvas, theme);

    let lines = load_transcript(dirs)?;
    let drawn = draw_transcript(&canvas, &lines);
    log::debug!("Drew {} of {} transcript lines", drawn, lines.len());

    draw_footer(
        &canvas,
        theme,
        "Airgapped health checks — dom0 talks to VM through Xen, not TCP/IP",
    );
    finish(canvas, &dirs.output, Post::Terminal)
}

fn draw_window(canvas: &Canvas<'_>, theme: &Theme) {
    render::rounded_rect(
        canvas,
        Rect::new(30, TERM_Y, WIDTH - 30, HEIGHT - 65),
        TERMINAL_BG,
        Some(BORDER),
        8.0,
    );

    // Title bar
    render::rounded_rect(
        canvas,
        Rect::new(30, TERM_Y, WIDTH - 30, TERM_Y + 28),
        PANEL_BG,
        None,
        0.0,
    );
    for (i, color) in TRAFFIC_LIGHTS.into_iter().enumerate() {
        render::dot(canvas, 50 + i as i32 * 18, TERM_Y + 14, 5.0, color);
    }
    render::text(
        canvas,
        110,
        TERM_Y + 8,
        &format!("dom0 — {} health check", theme.branding.product),
        FontStyle::Code,
        10.0,
        SOFT,
    );
}

/// Draws lines top to bottom and returns how many were drawn.
///
/// The line that pushes the cursor past `HEIGHT - 80` is still drawn.
fn draw_transcript(canvas: &Canvas<'_>, lines: &[String]) -> usize {
    let mut y = TERM_Y + 38;
    let mut drawn = 0;
    for line in lines {
        let kind = LineKind::classify(line);
        render::text(
            canvas,
            50,
            y,
            line,
            FontStyle::Code,
            kind.size(),
            kind.color(),
        );
        drawn += 1;
        y += LINE_PITCH;
        if y > HEIGHT - 80 {
            break;
        }
    }
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dirs_in(temp: &TempDir) -> PostDirs {
        PostDirs {
            diagrams: temp.path().join("diagrams"),
            screenshots: temp.path().to_path_buf(),
            output: temp.path().join("out"),
        }
    }

    #[test]
    fn classification_first_match_wins() {
        assert_eq!(LineKind::classify("$ systemctl is-active x"), LineKind::Prompt);
        assert_eq!(LineKind::classify("# done"), LineKind::Comment);
        assert_eq!(LineKind::classify("{"), LineKind::Json);
        assert_eq!(LineKind::classify("}"), LineKind::Json);
        assert_eq!(LineKind::classify(r#"  "status": "healthy","#), LineKind::Json);
        assert_eq!(LineKind::classify("active"), LineKind::Status);
        assert_eq!(LineKind::classify("True"), LineKind::Status);
        assert_eq!(LineKind::classify("openclaw-server"), LineKind::Status);
        assert_eq!(LineKind::classify("proxy=True gw=True"), LineKind::Plain);
        assert_eq!(LineKind::classify(""), LineKind::Plain);
        // Only exact matches count as status
        assert_eq!(LineKind::classify(" active"), LineKind::Plain);
    }

    #[test]
    fn kinds_map_to_colors_and_sizes() {
        assert_eq!(LineKind::Prompt.color(), GREEN);
        assert_eq!(LineKind::Comment.color(), SOFT);
        assert_eq!(LineKind::Json.color(), ACCENT);
        assert_eq!(LineKind::Plain.color(), FG);
        assert_eq!(LineKind::Status.size(), 12.0);
        assert_eq!(LineKind::Json.size(), 11.0);
    }

    #[test]
    fn sample_transcript_used_when_file_missing() {
        let temp = TempDir::new().unwrap();
        let lines = load_transcript(&dirs_in(&temp)).unwrap();
        assert_eq!(lines.len(), 22);
        assert!(lines[12].ends_with('\\'));
        assert_eq!(
            LineKind::classify(&lines[13]),
            LineKind::Json,
            "continuation line starts with a quote after indentation"
        );
    }

    #[test]
    fn transcript_file_is_truncated() {
        let temp = TempDir::new().unwrap();
        let body: String = (0..30).map(|i| format!("line {i}\n")).collect();
        std::fs::write(temp.path().join("04-health-checks.txt"), body).unwrap();

        let lines = load_transcript(&dirs_in(&temp)).unwrap();
        assert_eq!(lines.len(), MAX_LINES);
        assert_eq!(lines[0], "line 0");
    }

    #[test]
    fn drawing_stops_below_window() {
        let theme = Theme::default();
        let canvas = Canvas::new(&theme.fonts, BG).unwrap();
        let lines: Vec<String> = (0..MAX_LINES).map(|i| format!("line {i}")).collect();

        // y runs 113, 135, ... and the first y past 595 is reached after 22 lines,
        // so every line fits.
        assert_eq!(draw_transcript(&canvas, &lines), 22);

        let many: Vec<String> = (0..40).map(|i| format!("line {i}")).collect();
        assert_eq!(draw_transcript(&canvas, &many), 22);
    }
}
