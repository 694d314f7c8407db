//! Allowed resting region of the widget inside the viewport.

use floatchat_core::{Bounds, Point, Size};

/// Bounds for the widget's top-left corner, derived from the viewport size.
///
/// `min = margin` on both axes and `max = viewport - widget_size - margin`,
/// collapsed onto `min` when the viewport is too small to fit the widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    viewport: Size,
    widget_size: f32,
    margin: f32,
    bounds: Bounds,
}

impl ViewportBounds {
    pub fn new(viewport: Size, widget_size: f32, margin: f32) -> Self {
        Self {
            viewport,
            widget_size,
            margin,
            bounds: compute_bounds(viewport, widget_size, margin),
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn clamp(&self, point: Point) -> Point {
        self.bounds.clamp(point)
    }

    /// Recomputes the bounds for a new viewport size.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.bounds = compute_bounds(viewport, self.widget_size, self.margin);
    }

    /// Bottom-right corner inset by `inset` on both axes, clamped.
    pub fn initial_position(&self, inset: f32) -> Point {
        self.clamp(Point::new(
            self.viewport.width - self.widget_size - inset,
            self.viewport.height - self.widget_size - inset,
        ))
    }
}

fn compute_bounds(viewport: Size, widget_size: f32, margin: f32) -> Bounds {
    Bounds::new(
        margin,
        margin,
        viewport.width - widget_size - margin,
        viewport.height - widget_size - margin,
    )
}
