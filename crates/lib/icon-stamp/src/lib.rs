//! Stamping a caption onto an icon image.

use std::io::Write as _;
use std::path::Path;

use caption_fit::{Geometry, Measure, Outcome, Size};
use caption_render::{Fonts, Style};

mod error;

pub use error::{EncodeError, LoadError, SaveError};

/// An icon being stamped, along with the style of its caption.
#[derive(Debug, Clone)]
pub struct Stamp {
    /// The canvas.
    icon: image::RgbaImage,

    /// The caption style.
    style: Style,
}

impl Stamp {
    /// Wrap an already decoded icon, using the default caption style for its size.
    pub fn new(icon: image::RgbaImage) -> Self {
        let style = Style::for_image(&geometry_of(&icon));
        Self { icon, style }
    }

    /// Load and decode the icon from disk.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let icon = image::open(path).map_err(|source| LoadError {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            width = icon.width(),
            height = icon.height(),
            "loaded icon"
        );
        Ok(Self::new(icon.into_rgba8()))
    }

    /// Set the font family of the caption.
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.style = self.style.with_font_family(font_family);
        self
    }

    /// The caption geometry of this icon.
    pub fn geometry(&self) -> Geometry {
        geometry_of(&self.icon)
    }

    /// The caption style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The canvas.
    pub fn image(&self) -> &image::RgbaImage {
        &self.icon
    }

    /// Take the canvas.
    pub fn into_image(self) -> image::RgbaImage {
        self.icon
    }

    /// Find the font size the caption fits at, using the given oracle.
    pub fn fit_caption<M>(&self, oracle: &mut M, text: &str) -> Outcome
    where
        M: Measure + ?Sized,
    {
        caption_fit::fit(oracle, text, &self.style.font_family, &self.geometry())
    }

    /// Draw the caption as fitted by [`Self::fit_caption`].
    ///
    /// The text is drawn at the size that produced the fit, with the bottom
    /// of the block one inset above the bottom of the icon. Lines that did
    /// not fit into the content box are left out.
    pub fn draw_caption(&mut self, fonts: &mut Fonts, text: &str, outcome: &Outcome) {
        let geometry = self.geometry();
        let origin = geometry.placement(outcome.measurement.used.height);
        fonts.draw_caption(
            &mut self.icon,
            text,
            &self.style,
            outcome.font_size,
            origin,
            geometry.content_box().height,
        );
    }

    /// Fit the caption and draw it onto the icon.
    pub fn add_text(&mut self, fonts: &mut Fonts, text: &str) -> Outcome {
        let outcome = self.fit_caption(&mut fonts.layout(), text);
        self.draw_caption(fonts, text, &outcome);
        outcome
    }

    /// Encode the icon as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = std::io::Cursor::new(Vec::new());
        self.icon
            .write_to(&mut bytes, image::ImageFormat::Png)
            .map_err(EncodeError)?;
        Ok(bytes.into_inner())
    }

    /// Save the icon as PNG, replacing whatever is at `path`.
    ///
    /// The image is written to a temporary file in the same directory first
    /// and then moved over `path`.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let bytes = self.encode_png()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file =
            tempfile::NamedTempFile::new_in(dir).map_err(|source| SaveError::Create {
                path: path.to_path_buf(),
                source,
            })?;
        file.write_all(&bytes)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|source| SaveError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        file.persist(path).map_err(|error| SaveError::Persist {
            path: path.to_path_buf(),
            source: error.error,
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved icon");

        Ok(())
    }
}

/// The caption geometry of an image.
fn geometry_of(icon: &image::RgbaImage) -> Geometry {
    Geometry::new(Size::new(f64::from(icon.width()), f64::from(icon.height())))
}
