//! Sokkaverse TUI - Terminal surface for the Sokkaverse portfolio
//!
//! A full-screen terminal that types its way through a boot sequence, then
//! opens onto a galaxy of clickable planets. Each planet flies the ship over
//! and lands on a themed page.
//!
//! # Architecture
//!
//! - **Compositor**: Layered rendering with z-ordering (backdrop, planets,
//!   terminal box, ship, pages, status bar)
//! - **Backdrop**: Flowing ASCII grid and particle field
//! - **Galaxy**: Bobbing planet field and the transit ship
//! - **Pages**: One themed page per planet
//! - **OrchestratorClient**: The embedded boot and navigation orchestrator
//!   from `sokkaverse-core`

pub mod app;
pub mod backdrop;
pub mod cli;
pub mod compositor;
pub mod display;
pub mod galaxy;
pub mod orchestrator_client;
pub mod pages;
pub mod theme;
pub mod viewport;
pub mod widgets;

pub use app::App;
pub use cli::Cli;
