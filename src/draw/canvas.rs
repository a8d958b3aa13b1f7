//! Fixed-size raster canvas backed by a Cairo image surface.

use super::color::Color;
use super::font::FontResolver;
use crate::error::RenderError;
use cairo::{Context, Format, ImageSurface};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Width of every diagram and post
pub const WIDTH: i32 = 1200;
/// Height of every diagram and post
pub const HEIGHT: i32 = 675;

/// One output image: an RGB pixel buffer, its drawing context, and the font
/// resolver used by text primitives.
///
/// Created fresh per diagram or post and consumed when saved.
pub struct Canvas<'a> {
    surface: ImageSurface,
    ctx: Context,
    fonts: &'a FontResolver,
}

impl<'a> Canvas<'a> {
    /// Creates a `WIDTH` x `HEIGHT` canvas filled with `background`.
    pub fn new(fonts: &'a FontResolver, background: Color) -> Result<Self, RenderError> {
        Self::with_size(WIDTH, HEIGHT, fonts, background)
    }

    /// Creates a canvas of arbitrary size (used for placeholders).
    pub fn with_size(
        width: i32,
        height: i32,
        fonts: &'a FontResolver,
        background: Color,
    ) -> Result<Self, RenderError> {
        let surface = ImageSurface::create(Format::Rgb24, width, height)?;
        let ctx = Context::new(&surface)?;

        background.apply(&ctx);
        ctx.paint()?;

        Ok(Self {
            surface,
            ctx,
            fonts,
        })
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn fonts(&self) -> &FontResolver {
        self.fonts
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Draws `image` scaled to `width` x `height` with its top-left at (x, y).
    ///
    /// The scale is applied per axis, so callers compute the fitted size
    /// (see [`crate::util::fit_dimensions`]) beforehand.
    pub fn paste(
        &self,
        image: &ImageSurface,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), RenderError> {
        if image.width() <= 0 || image.height() <= 0 || width <= 0 || height <= 0 {
            log::debug!("Skipping paste of empty image at ({}, {})", x, y);
            return Ok(());
        }

        let ctx = &self.ctx;
        ctx.save()?;
        ctx.translate(x as f64, y as f64);
        ctx.scale(
            width as f64 / image.width() as f64,
            height as f64 / image.height() as f64,
        );
        ctx.set_source_surface(image, 0.0, 0.0)?;
        let pattern = ctx.source();
        pattern.set_filter(cairo::Filter::Best);
        pattern.set_extend(cairo::Extend::Pad);
        ctx.rectangle(0.0, 0.0, image.width() as f64, image.height() as f64);
        ctx.fill()?;
        ctx.restore()?;
        Ok(())
    }

    /// Writes the canvas to `path` as PNG, replacing any existing file.
    pub fn save_png(self, path: &Path) -> Result<(), RenderError> {
        let surface = self.into_surface();

        let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        surface
            .write_to_png(&mut writer)
            .map_err(|source| RenderError::ImageEncode {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(|e| RenderError::io(path, e))?;

        log::info!(
            "Saved {} ({}x{})",
            path.display(),
            surface.width(),
            surface.height()
        );
        Ok(())
    }

    /// Finishes drawing and returns the underlying surface.
    pub fn into_surface(self) -> ImageSurface {
        let Canvas { surface, ctx, .. } = self;
        drop(ctx);
        surface.flush();
        surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BG, CARD_BG};
    use tempfile::TempDir;

    /// Reads the pixel at (x, y) of an RGB24 surface as [r, g, b].
    fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> [u8; 3] {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let idx = y as usize * stride + x as usize * 4;
        // Native-endian xRGB: little-endian byte order is B, G, R, x.
        let word = u32::from_ne_bytes([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]);
        [(word >> 16) as u8, (word >> 8) as u8, word as u8]
    }

    #[test]
    fn new_canvas_is_full_size_and_painted() {
        let fonts = FontResolver::default();
        let canvas = Canvas::new(&fonts, BG).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (WIDTH, HEIGHT));

        let mut surface = canvas.into_surface();
        assert_eq!(pixel(&mut surface, 0, 0), [15, 17, 23]);
        assert_eq!(pixel(&mut surface, WIDTH - 1, HEIGHT - 1), [15, 17, 23]);
    }

    #[test]
    fn save_png_writes_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.png");
        let fonts = FontResolver::default();

        Canvas::new(&fonts, BG).unwrap().save_png(&path).unwrap();
        Canvas::new(&fonts, CARD_BG).unwrap().save_png(&path).unwrap();

        let mut file = File::open(&path).unwrap();
        let mut loaded = ImageSurface::create_from_png(&mut file).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (WIDTH, HEIGHT));
        assert_eq!(pixel(&mut loaded, 10, 10), [22, 27, 34]);
    }

    #[test]
    fn paste_scales_image_into_target_box() {
        let fonts = FontResolver::default();
        let source = Canvas::with_size(10, 5, &fonts, CARD_BG)
            .unwrap()
            .into_surface();

        let canvas = Canvas::with_size(100, 100, &fonts, BG).unwrap();
        canvas.paste(&source, 10, 10, 40, 20).unwrap();
        let mut surface = canvas.into_surface();

        assert_eq!(pixel(&mut surface, 30, 20), [22, 27, 34]);
        assert_eq!(pixel(&mut surface, 30, 40), [15, 17, 23]);
        assert_eq!(pixel(&mut surface, 60, 20), [15, 17, 23]);
    }

    #[test]
    fn upscaled_paste_keeps_hard_edges() {
        let fonts = FontResolver::default();
        let source = Canvas::with_size(10, 5, &fonts, CARD_BG)
            .unwrap()
            .into_surface();

        let canvas = Canvas::with_size(100, 100, &fonts, BG).unwrap();
        canvas.paste(&source, 10, 10, 40, 20).unwrap();
        let mut surface = canvas.into_surface();

        // Outermost pasted pixels carry the image colour, not a blend with BG.
        for (x, y) in [(10, 10), (49, 10), (10, 29), (49, 29), (30, 10)] {
            assert_eq!(pixel(&mut surface, x, y), [22, 27, 34], "({x}, {y})");
        }
        assert_eq!(pixel(&mut surface, 9, 20), [15, 17, 23]);
        assert_eq!(pixel(&mut surface, 50, 20), [15, 17, 23]);
    }

    #[test]
    fn transparent_pixels_show_the_background() {
        let fonts = FontResolver::default();
        let source = ImageSurface::create(Format::ARgb32, 8, 8).unwrap();

        let canvas = Canvas::with_size(20, 20, &fonts, BG).unwrap();
        canvas.paste(&source, 0, 0, 8, 8).unwrap();
        let mut surface = canvas.into_surface();
        assert_eq!(pixel(&mut surface, 4, 4), [15, 17, 23]);
    }

    #[test]
    fn save_png_reports_missing_directory() {
        let temp = TempDir::new().unwrap();
        let fonts = FontResolver::default();
        let err = Canvas::new(&fonts, BG)
            .unwrap()
            .save_png(&temp.path().join("nope").join("out.png"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
