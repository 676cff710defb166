//! Surface Events
//!
//! Events sent from a UI surface up to the orchestrator. Surfaces report what
//! happened; they never decide what it means.

use serde::{Deserialize, Serialize};

use crate::console::CommandKey;
use crate::planets::{Coordinate, PlanetId};
use crate::stage::BootStage;

/// Events from UI surface to orchestrator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    // ============================================
    // Console
    // ============================================
    /// A keystroke aimed at the command line
    Keystroke {
        /// The key
        key: CommandKey,
    },

    /// A typed-text renderer finished revealing its stage line
    TypingComplete {
        /// Stage whose line finished
        stage: BootStage,
    },

    // ============================================
    // Galaxy
    // ============================================
    /// A planet was clicked (or picked from the menu)
    PlanetClicked {
        /// Which planet
        planet: PlanetId,
        /// The planet's fixed coordinate
        position: Coordinate,
    },

    /// The transit indicator finished a flight
    TransitArrived {
        /// Flight number from the [`DestinationSet`] the ship was flying
        ///
        /// [`DestinationSet`]: crate::OrchestratorMessage::DestinationSet
        flight: u64,
    },

    // ============================================
    // Lifecycle
    // ============================================
    /// The surface is going away; release everything
    Teardown,
}

impl SurfaceEvent {
    /// Click on a catalog planet at its fixed coordinate
    #[must_use]
    pub fn planet_clicked(planet: PlanetId) -> Self {
        Self::PlanetClicked {
            planet,
            position: planet.descriptor().position,
        }
    }

    /// Keystroke shorthand
    #[must_use]
    pub fn key(key: CommandKey) -> Self {
        Self::Keystroke { key }
    }
}
