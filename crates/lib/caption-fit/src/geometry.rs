//! Caption geometry derived from the image size.

/// A width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,

    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A point on the canvas, with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f64,

    /// Vertical offset, growing downwards.
    pub y: f64,
}

/// The layout of a caption over an image of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// The image dimensions.
    pub image: Size,
}

impl Geometry {
    /// Geometry for an image of the given dimensions.
    pub const fn new(image: Size) -> Self {
        Self { image }
    }

    /// Vertical margin kept free at the top and at the bottom of the image.
    pub fn inset(&self) -> f64 {
        self.image.height / 20.0
    }

    /// The box the caption has to fit into.
    pub fn content_box(&self) -> Size {
        Size {
            width: self.image.width,
            height: self.image.height - 2.0 * self.inset(),
        }
    }

    /// The font size the search starts from.
    pub fn starting_font_size(&self) -> f64 {
        self.image.height / 4.0
    }

    /// The unit of the drop shadow offset and blur radius.
    pub fn shadow_unit(&self) -> f64 {
        self.image.height / 64.0
    }

    /// Where a text block of the given used height starts drawing.
    ///
    /// The block is anchored so that its bottom edge sits one inset above
    /// the bottom of the image.
    pub fn placement(&self, used_height: f64) -> Point {
        Point {
            x: 0.0,
            y: self.image.height - used_height - self.inset(),
        }
    }
}
