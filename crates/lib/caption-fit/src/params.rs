//! Font size search parameters.

use crate::geometry::Geometry;

/// The smallest font size the search goes down to.
pub const DEFAULT_FLOOR: f64 = 8.0;

/// The amount the font size decreases by on every attempt.
pub const DEFAULT_STEP: f64 = 0.1;

/// Error returned for parameters the search can not run with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    /// One of the values is NaN or infinite.
    #[error("font size search parameters must be finite (start={start}, floor={floor}, step={step})")]
    NotFinite {
        /// The starting font size.
        start: f64,
        /// The floor font size.
        floor: f64,
        /// The step.
        step: f64,
    },

    /// The step would never bring the size down to the floor.
    #[error("font size step must be positive, got {0}")]
    NonPositiveStep(f64),
}

/// Validated font size search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// The size of the first attempt.
    start: f64,

    /// The search stops once the next size would be at or below this.
    floor: f64,

    /// The decrement between attempts.
    step: f64,
}

impl Params {
    /// Create search parameters, rejecting values the search can not terminate with.
    pub fn new(start: f64, floor: f64, step: f64) -> Result<Self, ParamsError> {
        if !(start.is_finite() && floor.is_finite() && step.is_finite()) {
            return Err(ParamsError::NotFinite { start, floor, step });
        }
        if step <= 0.0 {
            return Err(ParamsError::NonPositiveStep(step));
        }
        Ok(Self { start, floor, step })
    }

    /// The default parameters for an image: a quarter of its height down to 8pt,
    /// in tenths of a point.
    pub fn for_image(geometry: &Geometry) -> Self {
        Self {
            start: geometry.starting_font_size(),
            floor: DEFAULT_FLOOR,
            step: DEFAULT_STEP,
        }
    }

    /// The starting font size.
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// The floor font size.
    pub const fn floor(&self) -> f64 {
        self.floor
    }

    /// The step between attempts.
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// The font size of the attempt with the given zero-based index.
    ///
    /// Computed from the index rather than by repeated subtraction, so the
    /// sizes do not drift.
    pub fn size_at(&self, attempt: u64) -> f64 {
        self.start - self.step * attempt as f64
    }

    /// The most attempts a search with these parameters makes.
    pub fn max_iterations(&self) -> u64 {
        let span = ((self.start - self.floor) / self.step).ceil();
        if span < 1.0 { 1 } else { span as u64 }
    }
}
