//! Scroll progress and linear range mapping for parallax.
//!
//! A page publishes one [`ScrollSample`] per scroll/resize notification.
//! Sections derive a progress in `[0, 1]` from it and map that into their own
//! output [`Span`]. Nothing here stores state; every value is recomputed.

/// Geometry of the page at one scroll notification, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    /// Vertical scroll offset of the page.
    pub scroll_y: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
    /// Full scrollable height of the document.
    pub document_height: f64,
}

impl ScrollSample {
    /// Progress through the whole page: 0 at the top, 1 when scrolled to the
    /// bottom. A page that cannot scroll reports 0.
    pub fn page_progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        clamp_unit(self.scroll_y / scrollable)
    }
}

/// Progress of an element passing through the viewport: 0 when its top edge
/// touches the viewport bottom, 1 when its bottom edge touches the viewport
/// top. `top` is the element's top relative to the viewport (as reported by
/// `getBoundingClientRect`).
pub fn element_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height + viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    clamp_unit((viewport_height - top) / travel)
}

/// A closed numeric interval, possibly descending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Value at progress 0.
    pub start: f64,
    /// Value at progress 1.
    pub end: f64,
}

impl Span {
    /// Interval from `start` to `end`.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Linear interpolation clamped to the span. The blend form is exact at
    /// both ends: `lerp(0.0) == start` and `lerp(1.0) == end`.
    pub fn lerp(&self, progress: f64) -> f64 {
        let t = clamp_unit(progress);
        self.start * (1.0 - t) + self.end * t
    }

    /// Where `value` falls inside the span, clamped to `[0, 1]`. A degenerate
    /// span reports 0.
    pub fn progress_of(&self, value: f64) -> f64 {
        let width = self.end - self.start;
        if width == 0.0 {
            return 0.0;
        }
        clamp_unit((value - self.start) / width)
    }
}

/// Maps an input span onto an output span, clamping at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapping {
    /// Domain.
    pub input: Span,
    /// Range.
    pub output: Span,
}

impl Mapping {
    /// Map `input` onto `output`.
    pub const fn new(input: Span, output: Span) -> Self {
        Self { input, output }
    }

    /// Map a progress value already in `[0, 1]`.
    pub const fn from_progress(output: Span) -> Self {
        Self {
            input: Span::new(0.0, 1.0),
            output,
        }
    }

    /// Output value for `value`.
    pub fn map(&self, value: f64) -> f64 {
        self.output.lerp(self.input.progress_of(value))
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
