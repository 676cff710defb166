//! Transit Indicator Model
//!
//! The spaceship's fly-to motion. A transit only ever sees coordinates; which
//! planet a coordinate belongs to is the orchestrator's business.
//!
//! Re-targeting mid-flight keeps the same flight going: the new leg starts at
//! the ship's current position with a freshly computed heading, and only the
//! final leg reports [`TransitEvent::Arrived`].

use std::time::Duration;

use crate::animation::EasingFunction;
use crate::planets::Coordinate;

/// Default flight time of one transit
pub const DEFAULT_FLIGHT: Duration = Duration::from_millis(5_500);

/// Something a transit reports to its owner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitEvent {
    /// The ship reached its destination
    Arrived,
}

#[derive(Clone, Copy, Debug)]
struct Flight {
    from: Coordinate,
    to: Coordinate,
    elapsed: Duration,
}

/// Fly-to animation state for the ship
#[derive(Clone, Debug)]
pub struct Transit {
    position: Coordinate,
    heading_deg: f32,
    flight: Option<Flight>,
    duration: Duration,
    easing: EasingFunction,
    legs: u32,
}

impl Transit {
    /// Ship parked at `home`
    #[must_use]
    pub fn new(home: Coordinate, duration: Duration) -> Self {
        Self {
            position: home,
            heading_deg: 0.0,
            flight: None,
            duration,
            easing: EasingFunction::EaseInOut,
            legs: 0,
        }
    }

    /// Start flying to `target`, or re-target the current flight
    pub fn fly_to(&mut self, target: Coordinate) {
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;
        if dx != 0.0 || dy != 0.0 {
            self.heading_deg = dy.atan2(dx).to_degrees();
        }

        if self.flight.is_some() {
            tracing::debug!(x = target.x, y = target.y, "Transit re-targeted mid-flight");
        }
        self.flight = Some(Flight {
            from: self.position,
            to: target,
            elapsed: Duration::ZERO,
        });
        self.legs += 1;
    }

    /// Advance the flight clock
    ///
    /// Returns [`TransitEvent::Arrived`] once, on the frame the ship lands.
    pub fn update(&mut self, delta: Duration) -> Option<TransitEvent> {
        let flight = self.flight.as_mut()?;
        flight.elapsed = flight.elapsed.saturating_add(delta);

        let t = if self.duration.is_zero() {
            1.0
        } else {
            flight.elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        if t >= 1.0 {
            self.position = flight.to;
            self.flight = None;
            return Some(TransitEvent::Arrived);
        }

        self.position = flight.from.lerp(flight.to, self.easing.apply(t));
        None
    }

    /// Current ship position
    #[must_use]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Heading in degrees (`atan2(dy, dx)`, 0 = east, 90 = south)
    #[must_use]
    pub fn heading_deg(&self) -> f32 {
        self.heading_deg
    }

    /// Whether a flight is in progress
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// Current flight target
    #[must_use]
    pub fn target(&self) -> Option<Coordinate> {
        self.flight.map(|f| f.to)
    }

    /// Number of legs flown (re-targets count as legs)
    #[must_use]
    pub fn legs(&self) -> u32 {
        self.legs
    }

    /// Move a parked ship (e.g. after a viewport resize); ignored mid-flight
    pub fn park_at(&mut self, position: Coordinate) {
        if self.flight.is_none() {
            self.position = position;
        }
    }
}
