//! Particle field
//!
//! Slow-drifting specks that wrap around the screen edges. Positions are in
//! cells; velocities in cells per second.

use std::f32::consts::TAU;
use std::time::Duration;

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use sokkaverse_core::ViewportSize;

use crate::theme::{STAR_BRIGHT, STAR_FAINT};

/// Number of particles
pub const PARTICLE_COUNT: usize = 80;

/// Upper bound on particle radius
pub const MAX_RADIUS: f32 = 1.5;

/// A single speck
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Column
    pub x: f32,
    /// Row
    pub y: f32,
    /// Radius, below [`MAX_RADIUS`]
    pub radius: f32,
    /// Horizontal velocity
    pub dx: f32,
    /// Vertical velocity
    pub dy: f32,
    /// 0.2..1.0
    pub opacity: f32,
}

impl Particle {
    fn random<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(0.3..1.5);
        Self {
            x: rng.gen_range(0.0..width.max(1.0)),
            y: rng.gen_range(0.0..height.max(1.0)),
            radius: rng.gen_range(0.0..MAX_RADIUS),
            dx: angle.cos() * speed,
            dy: angle.sin() * speed,
            opacity: rng.gen_range(0.2..1.0),
        }
    }

    /// Move by one step and wrap around the edges
    fn advance(&mut self, secs: f32, width: f32, height: f32) {
        self.x += self.dx * secs;
        self.y += self.dy * secs;

        if self.x - self.radius > width {
            self.x = -self.radius;
        } else if self.x + self.radius < 0.0 {
            self.x = width + self.radius;
        }
        if self.y - self.radius > height {
            self.y = -self.radius;
        } else if self.y + self.radius < 0.0 {
            self.y = height + self.radius;
        }
    }

    fn glyph(&self) -> char {
        if self.radius < 0.5 {
            '.'
        } else if self.radius < 1.0 {
            '·'
        } else {
            '*'
        }
    }
}

/// All particles plus the area they live in
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Scatter [`PARTICLE_COUNT`] particles over `size`
    pub fn new<R: Rng + ?Sized>(size: ViewportSize, rng: &mut R) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(PARTICLE_COUNT),
            width: 0.0,
            height: 0.0,
        };
        field.reset(size, rng);
        field
    }

    /// Re-scatter for a new viewport
    pub fn reset<R: Rng + ?Sized>(&mut self, size: ViewportSize, rng: &mut R) {
        self.width = size.width as f32;
        self.height = size.height as f32;
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(self.width, self.height, rng))
            .collect();
    }

    /// Advance every particle
    pub fn update(&mut self, delta: Duration) {
        let secs = delta.as_secs_f32();
        for p in &mut self.particles {
            p.advance(secs, self.width, self.height);
        }
    }

    /// Current particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Draw particles that are on screen
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        for p in &self.particles {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if x >= area.width || y >= area.height {
                continue;
            }
            let color = if p.opacity > 0.6 { STAR_BRIGHT } else { STAR_FAINT };
            buf[(area.x + x, area.y + y)]
                .set_char(p.glyph())
                .set_style(Style::default().fg(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_field_shape() {
        let field = ParticleField::new(ViewportSize::new(80, 24), &mut StdRng::seed_from_u64(1));
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!(p.radius < MAX_RADIUS);
            assert!((0.2..1.0).contains(&p.opacity));
            assert!((0.0..80.0).contains(&p.x));
            assert!((0.0..24.0).contains(&p.y));
        }
    }

    #[test]
    fn test_wraps_past_right_edge() {
        let mut p = Particle {
            x: 10.9,
            y: 2.0,
            radius: 1.0,
            dx: 1.0,
            dy: 0.0,
            opacity: 0.5,
        };
        p.advance(0.2, 10.0, 5.0);
        assert_eq!(p.x, -1.0);
    }

    #[test]
    fn test_wraps_past_top_edge() {
        let mut p = Particle {
            x: 3.0,
            y: -0.4,
            radius: 0.5,
            dx: 0.0,
            dy: -1.0,
            opacity: 0.5,
        };
        p.advance(0.2, 10.0, 5.0);
        assert_eq!(p.y, 5.5);
    }
}
