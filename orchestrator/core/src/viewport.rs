//! Viewport
//!
//! Decorative layers and planet placement depend on the size of whatever the
//! surface draws into. Instead of reaching for global window state, they ask a
//! [`Viewport`] and re-query it when the surface reports a resize.

use crate::planets::{Coordinate, DESIGN_SPACE};

/// Size in surface units (terminal cells, pixels, ...)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewportSize {
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl ViewportSize {
    /// Create a size
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Project a design-space coordinate into this viewport
    #[must_use]
    pub fn project(self, coord: Coordinate) -> (f32, f32) {
        let (dw, dh) = DESIGN_SPACE;
        (
            coord.x / dw * self.width as f32,
            coord.y / dh * self.height as f32,
        )
    }
}

/// Capability to query the current viewport size
pub trait Viewport {
    /// Current size; cheap enough to call every frame
    fn size(&self) -> ViewportSize;
}

/// A viewport of fixed size (tests, headless runs)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedViewport(pub ViewportSize);

impl Viewport for FixedViewport {
    fn size(&self) -> ViewportSize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_scales_design_space() {
        let size = ViewportSize::new(140, 75);
        let (x, y) = size.project(Coordinate::new(150.0, 250.0));
        assert!((x - 15.0).abs() < 1e-3);
        assert!((y - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_viewport() {
        let viewport = FixedViewport(ViewportSize::new(80, 24));
        assert_eq!(viewport.size(), ViewportSize::new(80, 24));
    }
}
