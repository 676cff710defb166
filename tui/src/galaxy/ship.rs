//! Transit Indicator
//!
//! The ship. It only ever sees coordinates: the app hands it a destination
//! and it reports arrival. Flight itself is modelled by the core [`Transit`].

use std::f32::consts::TAU;
use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use sokkaverse_core::{Coordinate, Transit, TransitEvent, ViewportSize, DESIGN_SPACE};

use crate::theme::{SHIP_FLAME, SHIP_HULL};

/// Where the ship parks before its first flight
pub fn home_position() -> Coordinate {
    let (w, h) = DESIGN_SPACE;
    Coordinate::new(w - 40.0, h - 100.0)
}

/// Idle hover: 5 design units up and back over 3 s each way
const HOVER_RISE: f32 = 5.0;
const HOVER_PERIOD: Duration = Duration::from_secs(6);

/// The ship and its hover clock
pub struct Ship {
    transit: Transit,
    idle: Duration,
}

impl Ship {
    /// A ship parked at [`home_position`]
    pub fn new(flight: Duration) -> Self {
        Self {
            transit: Transit::new(home_position(), flight),
            idle: Duration::ZERO,
        }
    }

    /// Fly (or re-target) towards `target`
    pub fn fly_to(&mut self, target: Coordinate) {
        tracing::debug!(x = target.x, y = target.y, "Ship heading out");
        self.transit.fly_to(target);
        self.idle = Duration::ZERO;
    }

    /// Advance flight or hover; reports arrival exactly once per flight
    pub fn update(&mut self, delta: Duration) -> Option<TransitEvent> {
        if !self.transit.is_flying() {
            self.idle += delta;
        }
        self.transit.update(delta)
    }

    /// Whether the ship is mid-flight
    pub fn is_flying(&self) -> bool {
        self.transit.is_flying()
    }

    /// Current position including idle hover
    pub fn position(&self) -> Coordinate {
        let base = self.transit.position();
        if self.transit.is_flying() {
            return base;
        }
        let phase = self.idle.as_secs_f32() / HOVER_PERIOD.as_secs_f32() * TAU;
        let lift = HOVER_RISE * (1.0 - phase.cos()) / 2.0;
        Coordinate::new(base.x, base.y - lift)
    }

    /// Heading in degrees, `atan2(dy, dx)` of the last flight
    pub fn heading_deg(&self) -> f32 {
        self.transit.heading_deg()
    }

    /// Hull glyph pointing along the heading (screen y grows downward)
    pub fn hull_glyph(&self) -> char {
        const ARROWS: [char; 8] = ['→', '↘', '↓', '↙', '←', '↖', '↑', '↗'];
        let sector = (self.heading_deg().rem_euclid(360.0) / 45.0).round() as usize % 8;
        ARROWS[sector]
    }

    /// Draw the hull and, while flying, a flame behind it
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        let size = ViewportSize::new(u32::from(area.width), u32::from(area.height));
        let (x, y) = size.project(self.position());
        let (col, row) = (x.round() as i32, y.round() as i32);

        put(buf, col, row, self.hull_glyph(), Style::default().fg(SHIP_HULL));

        if self.is_flying() {
            let rad = self.heading_deg().to_radians();
            let (back_x, back_y) = (-rad.cos().round() as i32, -rad.sin().round() as i32);
            put(buf, col + back_x, row + back_y, '*', Style::default().fg(SHIP_FLAME));
        }
    }
}

fn put(buf: &mut Buffer, col: i32, row: i32, ch: char, style: Style) {
    let area = buf.area;
    if col < 0 || row < 0 || col >= i32::from(area.width) || row >= i32::from(area.height) {
        return;
    }
    buf[(area.x + col as u16, area.y + row as u16)]
        .set_char(ch)
        .set_style(style);
}
