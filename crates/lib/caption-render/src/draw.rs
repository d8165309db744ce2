//! Caption drawing onto an RGBA canvas.

use caption_fit::Point;
use image::{Pixel as _, RgbaImage};

use crate::layout::shape;
use crate::style::Style;

/// Draw the caption with its drop shadow onto the canvas.
///
/// The text block is laid out across the whole canvas width and starts at
/// `origin`. Only lines whose bottom edge is within `clip_height` of the
/// block top are drawn, so a truncated caption loses the same lines it lost
/// when it was measured. The shadow is painted into its own layer, blurred,
/// and composited below the glyphs.
#[allow(clippy::too_many_arguments)]
pub fn draw_caption(
    canvas: &mut RgbaImage,
    font_system: &mut cosmic_text::FontSystem,
    cache: &mut cosmic_text::SwashCache,
    text: &str,
    style: &Style,
    font_size: f64,
    origin: Point,
    clip_height: f64,
) {
    let buffer = shape(
        font_system,
        text,
        &style.font_family,
        font_size,
        f64::from(canvas.width()),
    );
    let mut glyphs = Glyphs {
        buffer: &buffer,
        font_system,
        cache,
        clip_height: clip_height as f32,
    };

    let mut shadow_layer = RgbaImage::new(canvas.width(), canvas.height());
    glyphs.paint(
        &mut shadow_layer,
        style.shadow.color,
        (origin.x + style.shadow.offset_x).round() as i32,
        // The shadow offset is y-up, the canvas is y-down.
        (origin.y - style.shadow.offset_y).round() as i32,
    );
    let shadow_layer = blur_layer(shadow_layer, style.shadow.blur_radius);
    image::imageops::overlay(canvas, &shadow_layer, 0, 0);

    glyphs.paint(
        canvas,
        style.foreground,
        origin.x.round() as i32,
        origin.y.round() as i32,
    );
}

/// Blur the layer with a Gaussian whose sigma is half the blur radius.
pub fn blur_layer(layer: RgbaImage, blur_radius: f64) -> RgbaImage {
    let sigma = (blur_radius / 2.0) as f32;
    if sigma.is_nan() || sigma <= 0.0 {
        return layer;
    }
    image::imageops::blur(&layer, sigma)
}

/// The laid out glyphs of a caption and what is needed to rasterize them.
struct Glyphs<'a> {
    /// The shaped caption.
    buffer: &'a cosmic_text::Buffer,

    /// Font lookup for rasterization.
    font_system: &'a mut cosmic_text::FontSystem,

    /// Rasterized glyph cache.
    cache: &'a mut cosmic_text::SwashCache,

    /// Lines ending below this are not drawn.
    clip_height: f32,
}

impl Glyphs<'_> {
    /// Alpha-blend the visible glyphs onto the target at the given offset.
    fn paint(
        &mut self,
        target: &mut RgbaImage,
        color: image::Rgba<u8>,
        offset_x: i32,
        offset_y: i32,
    ) {
        let [r, g, b, a] = color.0;
        let base = cosmic_text::Color::rgba(r, g, b, a);
        let (width, height) = target.dimensions();

        for run in self.buffer.layout_runs() {
            if run.line_top + run.line_height > self.clip_height {
                break;
            }

            for glyph in run.glyphs {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let glyph_base = glyph.color_opt.unwrap_or(base);

                self.cache.with_pixels(
                    self.font_system,
                    physical.cache_key,
                    glyph_base,
                    |x, y, color| {
                        if color.a() == 0 {
                            return;
                        }
                        let px = offset_x + physical.x + x;
                        let py = offset_y + run.line_y as i32 + physical.y + y;
                        if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                            return;
                        }
                        target
                            .get_pixel_mut(px as u32, py as u32)
                            .blend(&image::Rgba(color.as_rgba()));
                    },
                );
            }
        }
    }
}
