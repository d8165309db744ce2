//! Caption measurement and drawing with `cosmic-text`.

use std::path::{Path, PathBuf};

mod draw;
mod layout;
mod style;

pub use draw::{blur_layer, draw_caption};
pub use layout::{TextLayout, shape};
pub use style::{DEFAULT_FONT_FAMILY, LINE_HEIGHT_FACTOR, Shadow, Style};

/// Error returned while loading a font file.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Failed to read the font file from disk.
    #[error("failed to read font file {path}: {source}")]
    Read {
        /// Path to the font file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file did not contain any usable font face.
    #[error("no font faces found in {path}")]
    NoFaces {
        /// Path to the font file.
        path: PathBuf,
    },
}

/// Loads a font file into a `fontdb` of some [`cosmic_text::FontSystem`].
///
/// Returns the family name of the first face in the file.
pub fn load_font_file(
    db: &mut cosmic_text::fontdb::Database,
    path: &Path,
) -> Result<String, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ids = db.load_font_source(cosmic_text::fontdb::Source::Binary(std::sync::Arc::new(
        data,
    )));

    let family = ids
        .iter()
        .filter_map(|id| db.face(*id))
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .ok_or_else(|| FontError::NoFaces {
            path: path.to_path_buf(),
        })?;

    tracing::debug!(path = %path.display(), %family, faces = ids.len(), "loaded font file");

    Ok(family)
}

/// The font system and glyph cache of a single run.
pub struct Fonts {
    /// Shaping and font lookup.
    pub font_system: cosmic_text::FontSystem,

    /// Rasterized glyph cache.
    pub cache: cosmic_text::SwashCache,
}

impl Fonts {
    /// Fonts backed by the fonts installed on the system.
    pub fn system() -> Self {
        Self::with_font_system(cosmic_text::FontSystem::new())
    }

    /// Fonts backed by the given font system.
    pub fn with_font_system(font_system: cosmic_text::FontSystem) -> Self {
        Self {
            font_system,
            cache: cosmic_text::SwashCache::new(),
        }
    }

    /// Load an extra font file, returning its family name.
    pub fn load_font_file(&mut self, path: &Path) -> Result<String, FontError> {
        load_font_file(self.font_system.db_mut(), path)
    }

    /// The measurement oracle over these fonts.
    pub fn layout(&mut self) -> TextLayout<'_> {
        TextLayout::new(&mut self.font_system)
    }

    /// Draw a caption onto the canvas, see [`draw_caption`].
    pub fn draw_caption(
        &mut self,
        canvas: &mut image::RgbaImage,
        text: &str,
        style: &Style,
        font_size: f64,
        origin: caption_fit::Point,
        clip_height: f64,
    ) {
        draw_caption(
            canvas,
            &mut self.font_system,
            &mut self.cache,
            text,
            style,
            font_size,
            origin,
            clip_height,
        );
    }
}

impl std::fmt::Debug for Fonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fonts")
            .field("faces", &self.font_system.db().len())
            .finish_non_exhaustive()
    }
}
