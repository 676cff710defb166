//! Planet Catalog
//!
//! The five planets of the galaxy and their fixed coordinates. Coordinates live
//! in a fixed design space ([`DESIGN_SPACE`]); surfaces project them onto
//! whatever viewport they have.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width and height of the design space planet coordinates are expressed in
pub const DESIGN_SPACE: (f32, f32) = (1400.0, 750.0);

/// Identifier of a planet (and of the page it routes to)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetId {
    /// Design Studio
    Design,
    /// Cinematic Mind
    Film,
    /// Soul & Logic
    Soul,
    /// Learner Terminal
    Code,
    /// Sokka Lab
    Lab,
}

impl PlanetId {
    /// All planets, in catalog order
    pub const ALL: [PlanetId; 5] = [
        PlanetId::Design,
        PlanetId::Film,
        PlanetId::Soul,
        PlanetId::Code,
        PlanetId::Lab,
    ];

    /// Lowercase identifier, also the route segment
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Film => "film",
            Self::Soul => "soul",
            Self::Code => "code",
            Self::Lab => "lab",
        }
    }

    /// Static descriptor for this planet
    #[must_use]
    pub fn descriptor(self) -> &'static PlanetDescriptor {
        // PLANETS is ordered like ALL
        &PLANETS[self as usize]
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no planet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown planet '{0}'")]
pub struct ParsePlanetError(pub String);

impl FromStr for PlanetId {
    type Err = ParsePlanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanetId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePlanetError(s.to_string()))
    }
}

/// A point in design space
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
}

impl Coordinate {
    /// Create a coordinate
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other` (`t` clamped to 0..=1)
    #[must_use]
    pub fn lerp(self, other: Coordinate, t: f32) -> Coordinate {
        let t = t.clamp(0.0, 1.0);
        Coordinate {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// 24-bit color, surface-agnostic
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS-style hex string, e.g. `#8A2BE2`
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Static, immutable description of a planet
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetDescriptor {
    /// Identifier
    pub id: PlanetId,
    /// Human label
    pub label: &'static str,
    /// Glow color
    pub color: Rgb,
    /// Fixed coordinate in design space
    pub position: Coordinate,
    /// Image asset reference
    pub image: &'static str,
}

/// The planet catalog, in [`PlanetId::ALL`] order
pub static PLANETS: [PlanetDescriptor; 5] = [
    PlanetDescriptor {
        id: PlanetId::Design,
        label: "Design Studio",
        color: Rgb(0x8A, 0x2B, 0xE2),
        position: Coordinate::new(150.0, 250.0),
        image: "03.png",
    },
    PlanetDescriptor {
        id: PlanetId::Film,
        label: "Cinematic Mind",
        color: Rgb(0x32, 0xCD, 0x32),
        position: Coordinate::new(1250.0, 350.0),
        image: "05.png",
    },
    PlanetDescriptor {
        id: PlanetId::Soul,
        label: "Soul & Logic",
        color: Rgb(0x66, 0xB2, 0xFF),
        position: Coordinate::new(250.0, 600.0),
        image: "06.png",
    },
    PlanetDescriptor {
        id: PlanetId::Code,
        label: "Learner Terminal",
        color: Rgb(0xA0, 0x52, 0x2D),
        position: Coordinate::new(750.0, 650.0),
        image: "02.png",
    },
    PlanetDescriptor {
        id: PlanetId::Lab,
        label: "Sokka Lab",
        color: Rgb(0x00, 0xBF, 0xFF),
        position: Coordinate::new(550.0, 100.0),
        image: "04.png",
    },
];

/// Look up a descriptor by its 1-based menu slot (the `1`..`5` hotkeys)
#[must_use]
pub fn by_menu_slot(slot: usize) -> Option<&'static PlanetDescriptor> {
    slot.checked_sub(1).and_then(|i| PLANETS.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_ids() {
        for (idx, id) in PlanetId::ALL.iter().enumerate() {
            assert_eq!(PLANETS[idx].id, *id);
            assert_eq!(id.descriptor().id, *id);
        }
    }

    #[test]
    fn test_parse_planet_id() {
        assert_eq!("design".parse::<PlanetId>(), Ok(PlanetId::Design));
        assert_eq!(" LAB ".parse::<PlanetId>(), Ok(PlanetId::Lab));
        assert_eq!(
            "pluto".parse::<PlanetId>(),
            Err(ParsePlanetError("pluto".to_string()))
        );
    }

    #[test]
    fn test_design_planet_descriptor() {
        let design = PlanetId::Design.descriptor();
        assert_eq!(design.label, "Design Studio");
        assert_eq!(design.position, Coordinate::new(150.0, 250.0));
        assert_eq!(design.color.to_hex(), "#8A2BE2");
    }

    #[test]
    fn test_menu_slots() {
        assert_eq!(by_menu_slot(1).map(|p| p.id), Some(PlanetId::Design));
        assert_eq!(by_menu_slot(5).map(|p| p.id), Some(PlanetId::Lab));
        assert!(by_menu_slot(0).is_none());
        assert!(by_menu_slot(6).is_none());
    }

    #[test]
    fn test_coordinate_lerp() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(a.lerp(b, 0.5), Coordinate::new(1.5, 2.0));
        assert_eq!(a.lerp(b, 2.0), b);
    }
}
