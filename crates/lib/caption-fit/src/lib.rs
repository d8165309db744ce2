//! Font size search that fits a caption into the content box of an icon.
//!
//! The search does not shape text itself. It asks a [`Measure`] oracle how
//! much of the caption fits at a given size and backs the size off until
//! everything fits or the floor is reached.

mod geometry;
mod params;

pub use geometry::{Geometry, Point, Size};
pub use params::{DEFAULT_FLOOR, DEFAULT_STEP, Params, ParamsError};

/// A single measurement request to the oracle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request<'a> {
    /// The caption to lay out.
    pub text: &'a str,

    /// The font family name.
    pub font_family: &'a str,

    /// The font size to lay out at.
    pub font_size: f64,

    /// The box the text is laid out in.
    pub bounds: Size,
}

/// The result of laying out a caption at some font size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    /// The number of characters that ended up inside the box.
    pub rendered: usize,

    /// The extent actually covered by the rendered characters.
    pub used: Size,
}

/// The text-measurement oracle.
pub trait Measure {
    /// Lay the text out and report what fits.
    fn measure(&mut self, request: &Request<'_>) -> Measurement;
}

impl<F> Measure for F
where
    F: FnMut(&Request<'_>) -> Measurement,
{
    fn measure(&mut self, request: &Request<'_>) -> Measurement {
        (self)(request)
    }
}

/// The result of a font size search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// The measurement of the last attempt.
    pub measurement: Measurement,

    /// The font size that produced [`Self::measurement`].
    pub font_size: f64,

    /// The size the search was decremented to when it stopped.
    ///
    /// Always one step below [`Self::font_size`].
    pub final_font_size: f64,

    /// The number of measurements made.
    pub iterations: u64,

    /// Whether the caption did not fit completely even at the last size.
    pub truncated: bool,
}

/// Search for the largest font size at which the caption fits in `bounds`.
///
/// At least one measurement is always made. The search continues while the
/// caption is cut off and the next size is still above the floor; a caption
/// that does not fit at the floor is accepted truncated.
pub fn search<M>(
    oracle: &mut M,
    text: &str,
    font_family: &str,
    bounds: Size,
    params: &Params,
) -> Outcome
where
    M: Measure + ?Sized,
{
    let required = text.chars().count();
    let mut iterations = 0;

    loop {
        let font_size = params.size_at(iterations);
        let measurement = oracle.measure(&Request {
            text,
            font_family,
            font_size,
            bounds,
        });
        tracing::trace!(
            font_size,
            rendered = measurement.rendered,
            required,
            "measured caption"
        );

        iterations += 1;
        let final_font_size = params.size_at(iterations);

        if measurement.rendered >= required || final_font_size <= params.floor() {
            let outcome = Outcome {
                measurement,
                font_size,
                final_font_size,
                iterations,
                truncated: measurement.rendered < required,
            };
            tracing::debug!(
                font_size,
                iterations,
                truncated = outcome.truncated,
                "caption font size search finished"
            );
            return outcome;
        }
    }
}

/// Fit the caption over an image using the default parameters and the
/// content box of the given geometry.
pub fn fit<M>(oracle: &mut M, text: &str, font_family: &str, geometry: &Geometry) -> Outcome
where
    M: Measure + ?Sized,
{
    search(
        oracle,
        text,
        font_family,
        geometry.content_box(),
        &Params::for_image(geometry),
    )
}
