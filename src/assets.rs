//! Reading optional inputs and preparing output directories.
//!
//! Every input (diagram, screenshot, transcript) is optional: a missing file
//! is reported as `None` so the caller can take its fallback path. A file that
//! exists but cannot be read or decoded is an error.

use crate::error::RenderError;
use cairo::ImageSurface;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Ensure the output directory exists, creating it and its parents if needed.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, RenderError> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory).map_err(|e| RenderError::io(directory, e))?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Loads a PNG image if the file exists.
pub fn load_png_if_present(path: &Path) -> Result<Option<ImageSurface>, RenderError> {
    if !path.exists() {
        log::debug!("Image {} not found, using fallback", path.display());
        return Ok(None);
    }

    let mut file = File::open(path).map_err(|e| RenderError::io(path, e))?;
    let image =
        ImageSurface::create_from_png(&mut file).map_err(|source| RenderError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(Some(image))
}

/// Reads at most `limit` lines of a text file if it exists.
pub fn read_lines_if_present(path: &Path, limit: usize) -> Result<Option<Vec<String>>, RenderError> {
    if !path.exists() {
        log::debug!("Text file {} not found, using fallback", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
    Ok(Some(
        contents.lines().take(limit).map(str::to_string).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_output_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        let created = ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
        assert!(created.ends_with("a/b"));

        // Existing directories are fine too
        ensure_directory_exists(&nested).unwrap();
    }

    #[test]
    fn missing_inputs_are_none() {
        let temp = TempDir::new().unwrap();
        assert!(
            load_png_if_present(&temp.path().join("none.png"))
                .unwrap()
                .is_none()
        );
        assert!(
            read_lines_if_present(&temp.path().join("none.txt"), 22)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn corrupt_png_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();
        let err = load_png_if_present(&path).unwrap_err();
        assert!(matches!(err, RenderError::ImageDecode { .. }));
    }

    #[test]
    fn reads_png_dimensions() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shot.png");
        let surface = ImageSurface::create(cairo::Format::Rgb24, 64, 32).unwrap();
        let mut file = File::create(&path).unwrap();
        surface.write_to_png(&mut file).unwrap();
        drop(file);

        let image = load_png_if_present(&path).unwrap().unwrap();
        assert_eq!((image.width(), image.height()), (64, 32));
    }

    #[test]
    fn line_limit_is_applied() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("health.txt");
        let body: String = (0..30).map(|i| format!("line {i}\n")).collect();
        fs::write(&path, body).unwrap();

        let lines = read_lines_if_present(&path, 22).unwrap().unwrap();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0], "line 0");
        assert_eq!(lines[21], "line 21");
    }
}
