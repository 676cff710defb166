//! Orchestrator Messages
//!
//! Messages sent from the orchestrator down to UI surfaces. A surface that
//! applies every message in order ends up with a complete picture of what to
//! render.

use serde::{Deserialize, Serialize};

use crate::planets::Coordinate;
use crate::routes::Route;
use crate::stage::{BootStage, StageDisplay};

/// Messages from orchestrator to UI surface
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum OrchestratorMessage {
    /// The boot sequence entered a new stage
    StageEntered {
        /// The new stage
        stage: BootStage,
        /// What to mount for it
        display: StageDisplay,
    },

    /// The command line changed
    CommandLine {
        /// Full current text
        text: String,
    },

    /// A line was appended to the output log
    OutputAppended {
        /// Position in the log
        index: usize,
        /// The line
        line: String,
    },

    /// The ship should fly to (or re-target) this coordinate
    DestinationSet {
        /// Target coordinate
        position: Coordinate,
        /// Echoed back in `TransitArrived` when this flight lands
        flight: u64,
    },

    /// No destination is in flight any more
    DestinationCleared,

    /// Switch to another screen
    Navigate {
        /// Target route
        route: Route,
        /// Absolute path including the base path
        path: String,
    },
}
