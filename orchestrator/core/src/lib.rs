//! Sokkaverse Core - Headless Boot and Navigation Orchestration
//!
//! This crate holds the state machine behind the Sokkaverse portfolio: the boot
//! terminal, the echo console, and the planet-to-page hand-off. It knows nothing
//! about terminals, so the same core drives the TUI and headless tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          UI Surface (TUI)                         │
//! │  ┌───────────┐  ┌────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │ Backdrop  │  │  Terminal  │  │ Planet Field │  │  Transit   │  │
//! │  │ (ascii +  │  │ (typed     │  │ (click /     │  │ Indicator  │  │
//! │  │ particles)│  │ text, log) │  │  hotkeys)    │  │  (ship)    │  │
//! │  └───────────┘  └─────┬──────┘  └──────┬───────┘  └─────┬──────┘  │
//! │                       └────────────────┴────────────────┘         │
//! │                                  │                                 │
//! │                        SurfaceEvent (up)                           │
//! │                    OrchestratorMessage (down)                      │
//! └──────────────────────────────────┼─────────────────────────────────┘
//!                                    │
//! ┌──────────────────────────────────┼─────────────────────────────────┐
//! │                          SOKKAVERSE CORE                            │
//! │  ┌───────────────────────────────┴───────────────────────────────┐ │
//! │  │                         Orchestrator                           │ │
//! │  │  ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌──────────┐  │ │
//! │  │  │ Boot Stage │  │  Console   │  │ Destination│  │  Timer   │  │ │
//! │  │  │  machine   │  │ (line+log) │  │  mailbox   │  │  slots   │  │ │
//! │  │  └────────────┘  └────────────┘  └────────────┘  └──────────┘  │ │
//! │  └────────────────────────────────────────────────────────────────┘ │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Orchestrator`]: boot stages, console and navigation hand-off
//! - [`OrchestratorMessage`]: messages sent from the orchestrator to surfaces
//! - [`SurfaceEvent`]: events sent from surfaces to the orchestrator
//! - [`TypedText`] / [`ProgressLoader`]: the two boot-stage animations
//! - [`Transit`]: the ship's flight between planets
//! - [`SokkaverseConfig`]: layered configuration
//!
//! # Quick Start
//!
//! ```ignore
//! use sokkaverse_core::{load_config, Orchestrator, PlanetId, SurfaceEvent};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let (msg_tx, mut msg_rx) = mpsc::channel(64);
//!     let (event_tx, event_rx) = mpsc::channel(64);
//!
//!     let config = load_config().unwrap_or_default();
//!     tokio::spawn(Orchestrator::new(config, msg_tx).run(event_rx));
//!
//!     event_tx.send(SurfaceEvent::planet_clicked(PlanetId::Design)).await.ok();
//!     while let Some(msg) = msg_rx.recv().await {
//!         // Render message to UI
//!     }
//! }
//! ```
//!
//! # Module Overview
//!
//! - [`animation`]: typed text, progress loader and easing curves
//! - [`config`]: TOML / env / CLI configuration
//! - [`console`]: command line buffer and output log
//! - [`events`]: events from surfaces to the orchestrator
//! - [`mailbox`]: single-slot, most-recent-wins cell
//! - [`messages`]: messages from the orchestrator to surfaces
//! - [`orchestrator`]: the orchestrator itself
//! - [`pages`]: themed page content and page-local state
//! - [`planets`]: the planet catalog
//! - [`routes`]: routes and base-path handling
//! - [`stage`]: boot stages and their timings
//! - [`timer`]: scoped, cancel-on-drop timers
//! - [`transit`]: ship flight model
//! - [`viewport`]: viewport size capability and projection
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod animation;
pub mod config;
pub mod console;
pub mod events;
pub mod mailbox;
pub mod messages;
pub mod orchestrator;
pub mod pages;
pub mod planets;
pub mod routes;
pub mod stage;
pub mod timer;
pub mod transit;
pub mod viewport;

// Re-exports for convenience
pub use animation::{EasingFunction, ProgressLoader, TypedText};
pub use console::{echo_lines, CommandKey, CommandLine, OutputLog, PROMPT};
pub use events::SurfaceEvent;
pub use mailbox::Mailbox;
pub use messages::OrchestratorMessage;
pub use orchestrator::{Destination, Orchestrator, OrchestratorError};
pub use planets::{by_menu_slot, Coordinate, PlanetDescriptor, PlanetId, Rgb, DESIGN_SPACE};
pub use routes::{BasePath, Route};
pub use stage::{AdvancePolicy, BootStage, StageDisplay, StageTimings};
pub use timer::TimerSlot;
pub use transit::{Transit, TransitEvent};
pub use viewport::{FixedViewport, Viewport, ViewportSize};

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, SokkaverseConfig, SokkaverseToml,
};
