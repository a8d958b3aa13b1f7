//! Branded 1200x675 post images.
//!
//! Every post shares a header bar (product, subtitle, `N/3` and
//! `open source` badges) and a footer bar (caption and repository URL). The
//! content in between comes from previously generated diagrams, screenshots,
//! or a health-check transcript, each with a built-in fallback when the input
//! file is missing.

pub mod dashboards;
pub mod overview;
pub mod terminal;

use crate::draw::render::{self, BadgeStyle};
use crate::draw::{
    ACCENT, BAR_BG, BLUE, BORDER, CARD_BG, Canvas, FontResolver, FontStyle, GREEN, HEIGHT, SOFT,
    WIDTH,
};
use crate::error::RenderError;
use crate::theme::Theme;
use crate::util::Rect;
use cairo::ImageSurface;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Number of posts in the series, shown as the `N/3` badge.
pub const TOTAL_POSTS: u32 = 3;

/// Input and output locations for post generation.
#[derive(Debug, Clone)]
pub struct PostDirs {
    /// Where `architecture.png` from the diagram generator lives
    pub diagrams: PathBuf,
    /// Where the demo screenshots and transcript live
    pub screenshots: PathBuf,
    /// Where `post-N.png` files are written
    pub output: PathBuf,
}

/// One post in the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Post {
    /// Architecture overview (post 1)
    Overview,
    /// Admin web and gateway dashboards side by side (post 2)
    Dashboards,
    /// Terminal health check transcript (post 3)
    Terminal,
}

impl Post {
    pub const ALL: [Post; 3] = [Post::Overview, Post::Dashboards, Post::Terminal];

    pub fn number(self) -> u32 {
        match self {
            Post::Overview => 1,
            Post::Dashboards => 2,
            Post::Terminal => 3,
        }
    }

    pub fn file_name(self) -> String {
        format!("post-{}.png", self.number())
    }

    /// Short description printed after the file name.
    pub fn summary(self) -> &'static str {
        match self {
            Post::Overview => "architecture",
            Post::Dashboards => "dashboards",
            Post::Terminal => "terminal",
        }
    }

    /// Renders this post and returns the written path.
    pub fn render(self, dirs: &PostDirs, theme: &Theme) -> Result<PathBuf, RenderError> {
        match self {
            Post::Overview => overview::render(dirs, theme),
            Post::Dashboards => dashboards::render(dirs, theme),
            Post::Terminal => terminal::render(dirs, theme),
        }
    }
}

/// Which posts to generate: `1`, `2`, `3` or `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    Single(Post),
    #[default]
    All,
}

impl Selection {
    /// Selected posts in generation order.
    pub fn posts(self) -> Vec<Post> {
        match self {
            Selection::Single(post) => vec![post],
            Selection::All => Post::ALL.to_vec(),
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(Selection::Single(Post::Overview)),
            "2" => Ok(Selection::Single(Post::Dashboards)),
            "3" => Ok(Selection::Single(Post::Terminal)),
            "all" => Ok(Selection::All),
            other => Err(format!("invalid post selector '{other}' (expected 1, 2, 3 or all)")),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Single(post) => write!(f, "{}", post.number()),
            Selection::All => f.write_str("all"),
        }
    }
}

/// Renders the selected posts in order, stopping at the first failure.
pub fn render_selected(
    selection: Selection,
    dirs: &PostDirs,
    theme: &Theme,
) -> Result<Vec<PathBuf>, RenderError> {
    selection
        .posts()
        .into_iter()
        .map(|post| post.render(dirs, theme))
        .collect()
}

/// Saves a finished post and prints the confirmation line.
fn finish(canvas: Canvas<'_>, out_dir: &Path, post: Post) -> Result<PathBuf, RenderError> {
    let path = out_dir.join(post.file_name());
    canvas.save_png(&path)?;
    println!("  {} ({})", post.file_name(), post.summary());
    Ok(path)
}

/// Top bar with product name, subtitle and the series/open-source badges.
fn draw_header(canvas: &Canvas<'_>, theme: &Theme, post: Post) {
    render::rounded_rect(canvas, Rect::new(0, 0, WIDTH, 60), BAR_BG, None, 0.0);
    render::text(
        canvas,
        30,
        15,
        &theme.branding.product,
        FontStyle::Bold,
        20.0,
        ACCENT,
    );
    render::text(
        canvas,
        180,
        18,
        &theme.branding.subtitle,
        FontStyle::Text,
        13.0,
        SOFT,
    );

    render::badge(
        canvas,
        WIDTH - 100,
        16,
        &format!("{}/{}", post.number(), TOTAL_POSTS),
        BLUE,
        &BadgeStyle::post(13.0),
    );
    render::badge(
        canvas,
        WIDTH - 190,
        16,
        "open source",
        GREEN,
        &BadgeStyle::post(10.0),
    );
}

/// Bottom bar with the caption on the left and the repository on the right.
fn draw_footer(canvas: &Canvas<'_>, theme: &Theme, caption: &str) {
    render::rounded_rect(
        canvas,
        Rect::new(0, HEIGHT - 55, WIDTH, HEIGHT),
        BAR_BG,
        None,
        0.0,
    );
    render::text(canvas, 30, HEIGHT - 40, caption, FontStyle::Text, 13.0, SOFT);
    render::text(
        canvas,
        WIDTH - 280,
        HEIGHT - 35,
        &theme.branding.repository,
        FontStyle::Code,
        10.0,
        BORDER,
    );
}

/// Builds the stand-in for a screenshot that has not been captured yet: a
/// bordered card with a centred gray label.
pub fn screenshot_placeholder(
    fonts: &FontResolver,
    width: i32,
    height: i32,
    label: &str,
) -> Result<ImageSurface, RenderError> {
    let canvas = Canvas::with_size(width, height, fonts, CARD_BG)?;
    render::rounded_rect(
        &canvas,
        Rect::new(0, 0, width - 1, height - 1),
        CARD_BG,
        Some(BORDER),
        6.0,
    );

    let extents = render::measure_text(&canvas, label, FontStyle::Code, 14.0);
    render::text(
        &canvas,
        (width - extents.width) / 2,
        height / 2 - 10,
        label,
        FontStyle::Code,
        14.0,
        SOFT,
    );

    Ok(canvas.into_surface())
}
