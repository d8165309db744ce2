//! Caption styling.

use caption_fit::Geometry;

/// The font family captions are set in unless configured otherwise.
pub const DEFAULT_FONT_FAMILY: &str = "HelveticaNeue-Light";

/// Line height relative to the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Drop shadow parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    /// Horizontal offset, positive to the right.
    pub offset_x: f64,

    /// Vertical offset, positive upwards.
    pub offset_y: f64,

    /// Blur radius.
    pub blur_radius: f64,

    /// Shadow color.
    pub color: image::Rgba<u8>,
}

/// The way a caption is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Font family name.
    pub font_family: String,

    /// Glyph fill color.
    pub foreground: image::Rgba<u8>,

    /// Drop shadow under the glyphs.
    pub shadow: Shadow,
}

impl Style {
    /// The default style for an image: white text in the default family with a
    /// dark shadow one unit below, blurred by one unit.
    pub fn for_image(geometry: &Geometry) -> Self {
        let unit = geometry.shadow_unit();
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            foreground: image::Rgba([255, 255, 255, 255]),
            shadow: Shadow {
                offset_x: 0.0,
                offset_y: -unit,
                blur_radius: unit,
                color: image::Rgba([64, 64, 64, 255]),
            },
        }
    }

    /// Replace the font family.
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }
}
