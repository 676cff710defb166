//! Backdrop
//!
//! The two decorative layers behind everything else: the flowing ASCII grid
//! and the particle field. Both size themselves from a [`Viewport`] and are
//! rebuilt when the terminal is resized.

pub mod ascii;
pub mod particles;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::buffer::Buffer;
use sokkaverse_core::Viewport;

pub use ascii::AsciiGrid;
pub use particles::ParticleField;

/// ASCII grid plus particles, sharing one RNG
pub struct Backdrop {
    ascii: AsciiGrid,
    particles: ParticleField,
    rng: StdRng,
}

impl Backdrop {
    /// Build a backdrop for the current viewport
    pub fn new(viewport: &dyn Viewport) -> Self {
        Self::with_rng(viewport, StdRng::from_entropy())
    }

    /// Build with a caller-supplied RNG (deterministic in tests)
    pub fn with_rng(viewport: &dyn Viewport, mut rng: StdRng) -> Self {
        let size = viewport.size();
        Self {
            ascii: AsciiGrid::new(size, &mut rng),
            particles: ParticleField::new(size, &mut rng),
            rng,
        }
    }

    /// Re-query the viewport and regenerate both layers
    pub fn resize(&mut self, viewport: &dyn Viewport) {
        let size = viewport.size();
        tracing::debug!(width = size.width, height = size.height, "Regenerating backdrop");
        self.ascii.regenerate(size, &mut self.rng);
        self.particles.reset(size, &mut self.rng);
    }

    /// Advance both animations
    pub fn update(&mut self, delta: Duration) {
        self.ascii.update(delta, &mut self.rng);
        self.particles.update(delta);
    }

    /// Draw the grid, then particles on top
    pub fn render(&self, buf: &mut Buffer) {
        self.ascii.render(buf);
        self.particles.render(buf);
    }

    /// The ASCII grid
    pub fn ascii(&self) -> &AsciiGrid {
        &self.ascii
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use sokkaverse_core::{FixedViewport, ViewportSize};

    #[test]
    fn test_resize_follows_viewport() {
        let small = FixedViewport(ViewportSize::new(20, 5));
        let mut backdrop = Backdrop::with_rng(&small, StdRng::seed_from_u64(3));
        assert_eq!(backdrop.ascii().height(), 20);

        let large = FixedViewport(ViewportSize::new(100, 40));
        backdrop.resize(&large);
        assert_eq!(backdrop.ascii().height(), 55);
        assert_eq!(backdrop.ascii().width(), 115);
    }

    #[test]
    fn test_render_fills_buffer() {
        let viewport = FixedViewport(ViewportSize::new(30, 6));
        let backdrop = Backdrop::with_rng(&viewport, StdRng::seed_from_u64(9));
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 6));
        backdrop.render(&mut buf);
        let non_blank = buf.content.iter().filter(|c| c.symbol() != " ").count();
        assert!(non_blank > 0);
    }
}
