//! Font resolution for text rendering.
//!
//! Text is drawn through Pango, which selects faces by family and weight.
//! The resolver decides *which* face to ask for: it walks an ordered list
//! of font files, loads each with `fontdb`, and takes the family and weight
//! of the first file that yields a face. When none do, a generic family is
//! used instead.

use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Logical text style used by the layouts.
///
/// Each style is an index into the candidate list; see [`FontResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Monospace code face (index 0)
    Code,
    /// Proportional body text (index 1)
    Text,
    /// Proportional bold for headings (index 2)
    Bold,
    /// Monospace bold (index 3)
    CodeBold,
    /// Plain monospace fallback (index 4)
    Mono,
}

impl FontStyle {
    /// Parses a style name; unknown names map to [`FontStyle::Code`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "code" => FontStyle::Code,
            "text" => FontStyle::Text,
            "bold" => FontStyle::Bold,
            "code-bold" => FontStyle::CodeBold,
            "mono" => FontStyle::Mono,
            other => {
                debug!("Unknown font style '{}', using code", other);
                FontStyle::Code
            }
        }
    }

    /// Position of this style's preferred font in the candidate list.
    pub fn index(self) -> usize {
        match self {
            FontStyle::Code => 0,
            FontStyle::Text => 1,
            FontStyle::Bold => 2,
            FontStyle::CodeBold => 3,
            FontStyle::Mono => 4,
        }
    }
}

/// One entry in the ordered font candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FontCandidate {
    /// TrueType/OpenType file; its first face supplies family and weight
    pub path: PathBuf,
}

impl FontCandidate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the file and returns its first face, if it has one.
    pub fn load(&self) -> Option<FaceInfo> {
        load_face(&self.path)
    }
}

/// The candidate list shipped with the tool, in style-index order.
pub fn default_candidates() -> Vec<FontCandidate> {
    [
        "/usr/share/fonts/fira-code/FiraCode-Regular.ttf",
        "/usr/share/fonts/redhat/RedHatDisplay-Regular.otf",
        "/usr/share/fonts/redhat/RedHatDisplay-Bold.otf",
        "/usr/share/fonts/fira-code/FiraCode-Bold.ttf",
        "/usr/share/fonts/dejavu-sans-mono-fonts/DejaVuSansMono.ttf",
    ]
    .into_iter()
    .map(FontCandidate::new)
    .collect()
}

/// Family and weight of a face read from a font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceInfo {
    pub family: String,
    /// CSS-style numeric weight (400 normal, 700 bold)
    pub weight: u16,
}

/// Where a resolved font came from.
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    /// A candidate file that loaded, with the face it contains
    File { path: PathBuf, face: FaceInfo },
    /// No candidate loaded; the generic family is used
    Default { family: String },
}

/// A font ready for one text drawing call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub source: FontSource,
    /// Absolute size in pixels
    pub size: f64,
}

impl ResolvedFont {
    pub fn is_default(&self) -> bool {
        matches!(self.source, FontSource::Default { .. })
    }

    pub fn family(&self) -> &str {
        match &self.source {
            FontSource::File { face, .. } => &face.family,
            FontSource::Default { family } => family,
        }
    }

    /// Builds the Pango description with an absolute pixel size.
    pub fn description(&self) -> pango::FontDescription {
        let mut desc = pango::FontDescription::new();
        desc.set_family(self.family());
        if let FontSource::File { face, .. } = &self.source {
            desc.set_weight(pango_weight(face.weight));
        }
        desc.set_absolute_size(self.size * pango::SCALE as f64);
        desc
    }
}

impl fmt::Display for ResolvedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            FontSource::File { face, .. } => {
                write!(f, "{} {} {}px", face.family, face.weight, self.size)
            }
            FontSource::Default { family } => write!(f, "{} (default) {}px", family, self.size),
        }
    }
}

/// Resolves logical styles to fonts using an ordered candidate list.
///
/// Resolution never fails:
/// 1. the candidate at the style's index is tried first;
/// 2. otherwise the whole list is scanned in order;
/// 3. otherwise the generic default family is returned.
///
/// Nothing is cached, so every call loads the files again.
#[derive(Debug, Clone)]
pub struct FontResolver {
    candidates: Vec<FontCandidate>,
    default_family: String,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new(default_candidates(), "Monospace")
    }
}

impl FontResolver {
    pub fn new(candidates: Vec<FontCandidate>, default_family: &str) -> Self {
        Self {
            candidates,
            default_family: default_family.to_string(),
        }
    }

    pub fn candidates(&self) -> &[FontCandidate] {
        &self.candidates
    }

    /// Resolves a style at the given pixel size.
    pub fn resolve(&self, style: FontStyle, size: f64) -> ResolvedFont {
        let preferred = self
            .candidates
            .get(style.index())
            .and_then(|candidate| Some((candidate, candidate.load()?)));

        let chosen = preferred.or_else(|| {
            debug!(
                "Preferred font for {:?} unavailable, scanning {} candidates",
                style,
                self.candidates.len()
            );
            self.candidates
                .iter()
                .find_map(|candidate| Some((candidate, candidate.load()?)))
        });

        let source = match chosen {
            Some((candidate, face)) => FontSource::File {
                path: candidate.path.clone(),
                face,
            },
            None => {
                debug!(
                    "No font candidate loaded, using '{}'",
                    self.default_family
                );
                FontSource::Default {
                    family: self.default_family.clone(),
                }
            }
        };

        ResolvedFont { source, size }
    }

    /// Resolves a style given by name (see [`FontStyle::from_name`]).
    pub fn resolve_named(&self, style: &str, size: f64) -> ResolvedFont {
        self.resolve(FontStyle::from_name(style), size)
    }
}

/// Loads `path` into a fresh font database and returns its first face.
///
/// Missing files, unreadable files and files without a parsable face all
/// yield `None`.
pub fn load_face(path: &Path) -> Option<FaceInfo> {
    let mut db = fontdb::Database::new();
    if let Err(e) = db.load_font_file(path) {
        debug!("Font {} not available: {}", path.display(), e);
        return None;
    }

    let Some(face) = db.faces().next() else {
        debug!("{} contains no usable font face", path.display());
        return None;
    };

    let Some((family, _)) = face.families.first() else {
        debug!("{} has a face without a family name", path.display());
        return None;
    };

    Some(FaceInfo {
        family: family.clone(),
        weight: face.weight.0,
    })
}

/// Maps a numeric weight to the closest Pango weight.
pub fn pango_weight(weight: u16) -> pango::Weight {
    match weight {
        0..=150 => pango::Weight::Thin,
        151..=250 => pango::Weight::Ultralight,
        251..=325 => pango::Weight::Light,
        326..=365 => pango::Weight::Semilight,
        366..=390 => pango::Weight::Book,
        391..=450 => pango::Weight::Normal,
        451..=550 => pango::Weight::Medium,
        551..=650 => pango::Weight::Semibold,
        651..=750 => pango::Weight::Bold,
        751..=850 => pango::Weight::Ultrabold,
        851..=950 => pango::Weight::Heavy,
        _ => pango::Weight::Ultraheavy,
    }
}
