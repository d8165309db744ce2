//! Caption layout on top of `cosmic-text`.

use caption_fit::{Measure, Measurement, Request, Size};

use crate::style::LINE_HEIGHT_FACTOR;

/// Shape the text as a centered, word wrapped paragraph of the given width.
///
/// The height is left unbounded so every line gets laid out; callers decide
/// which lines fit.
pub fn shape(
    font_system: &mut cosmic_text::FontSystem,
    text: &str,
    font_family: &str,
    font_size: f64,
    width: f64,
) -> cosmic_text::Buffer {
    let font_size = font_size as f32;
    let mut buffer = cosmic_text::Buffer::new_empty(cosmic_text::Metrics::new(
        font_size,
        font_size * LINE_HEIGHT_FACTOR,
    ));

    {
        let mut buffer = buffer.borrow_with(font_system);

        buffer.set_size(Some(width as f32), None);
        buffer.set_wrap(cosmic_text::Wrap::WordOrGlyph);

        let attrs = cosmic_text::Attrs::new().family(cosmic_text::Family::Name(font_family));
        buffer.set_text(
            text,
            &attrs,
            cosmic_text::Shaping::Advanced,
            Some(cosmic_text::Align::Center),
        );
        buffer.shape_until_scroll(false);
    }

    buffer
}

/// The extent of a single laid out line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineExtent {
    /// Index of the paragraph line the visual line belongs to.
    pub line_i: usize,

    /// Byte offset of the first glyph within the paragraph line.
    pub start: Option<usize>,

    /// Width of the line.
    pub width: f32,

    /// Bottom edge of the line.
    pub bottom: f32,
}

impl LineExtent {
    /// Collect the extents of every laid out line of the buffer.
    pub fn collect(buffer: &cosmic_text::Buffer) -> Vec<Self> {
        buffer
            .layout_runs()
            .map(|run| Self {
                line_i: run.line_i,
                start: run.glyphs.iter().map(|glyph| glyph.start).min(),
                width: run.line_w,
                bottom: run.line_top + run.line_height,
            })
            .collect()
    }
}

/// Summarize laid out lines into a measurement against the box height.
///
/// Lines are kept up to the first one that crosses the bottom of the box.
/// The characters of the caption before the first cut off glyph count as
/// rendered.
pub(crate) fn summarize(text: &str, lines: &[LineExtent], box_height: f64) -> Measurement {
    let box_height = box_height as f32;
    let mut used = Size::default();

    for line in lines {
        if line.bottom > box_height {
            let offset = cut_offset(text, line);
            return Measurement {
                rendered: text[..offset].chars().count(),
                used,
            };
        }
        used.width = used.width.max(f64::from(line.width));
        used.height = used.height.max(f64::from(line.bottom));
    }

    Measurement {
        rendered: text.chars().count(),
        used,
    }
}

/// The byte offset in `text` where the given line starts.
fn cut_offset(text: &str, line: &LineExtent) -> usize {
    let line_start = if line.line_i == 0 {
        0
    } else {
        text.match_indices('\n')
            .nth(line.line_i - 1)
            .map_or(text.len(), |(index, _)| index + 1)
    };
    let offset = line_start + line.start.unwrap_or(0);

    // Snap to a char boundary in case the paragraph text was normalized.
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// A text measurement oracle backed by a `cosmic-text` font system.
pub struct TextLayout<'a> {
    /// The font system used for shaping.
    font_system: &'a mut cosmic_text::FontSystem,
}

impl<'a> TextLayout<'a> {
    /// Create a new oracle.
    pub fn new(font_system: &'a mut cosmic_text::FontSystem) -> Self {
        Self { font_system }
    }
}

impl std::fmt::Debug for TextLayout<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextLayout").finish_non_exhaustive()
    }
}

impl Measure for TextLayout<'_> {
    fn measure(&mut self, request: &Request<'_>) -> Measurement {
        let buffer = shape(
            self.font_system,
            request.text,
            request.font_family,
            request.font_size,
            request.bounds.width,
        );
        summarize(
            request.text,
            &LineExtent::collect(&buffer),
            request.bounds.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shorthand for a line extent.
    fn line(line_i: usize, start: Option<usize>, width: f32, bottom: f32) -> LineExtent {
        LineExtent {
            line_i,
            start,
            width,
            bottom,
        }
    }

    #[test]
    fn all_lines_fit() {
        let lines = [line(0, Some(0), 80.0, 24.0), line(0, Some(6), 120.0, 48.0)];

        let measurement = summarize("hello world", &lines, 100.0);

        assert_eq!(measurement.rendered, 11);
        assert_eq!(measurement.used, Size::new(120.0, 48.0));
    }

    #[test]
    fn wrapped_line_below_box_is_cut() {
        let lines = [line(0, Some(0), 80.0, 24.0), line(0, Some(6), 120.0, 48.0)];

        let measurement = summarize("hello world", &lines, 30.0);

        assert_eq!(measurement.rendered, 6);
        assert_eq!(measurement.used, Size::new(80.0, 24.0));
    }

    #[test]
    fn nothing_fits() {
        let lines = [line(0, Some(0), 80.0, 24.0)];

        let measurement = summarize("hello", &lines, 10.0);

        assert_eq!(measurement.rendered, 0);
        assert_eq!(measurement.used, Size::default());
    }

    #[test]
    fn cut_counts_characters_of_earlier_paragraphs() {
        let lines = [line(0, Some(0), 30.0, 24.0), line(1, Some(0), 30.0, 48.0)];

        let measurement = summarize("héé\nàbc", &lines, 30.0);

        assert_eq!(measurement.rendered, 4);
    }

    #[test]
    fn empty_line_cut_off() {
        let lines = [
            line(0, Some(0), 30.0, 24.0),
            line(1, None, 0.0, 48.0),
            line(2, Some(0), 30.0, 72.0),
        ];

        let measurement = summarize("abc\n\nxyz", &lines, 30.0);

        assert_eq!(measurement.rendered, 4);
    }

    #[test]
    fn empty_caption_fits() {
        let lines = [line(0, None, 0.0, 24.0)];

        let measurement = summarize("", &lines, 30.0);

        assert_eq!(measurement.rendered, 0);
        assert_eq!(measurement.used, Size::new(0.0, 24.0));
    }
}
