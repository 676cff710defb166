//! Galaxy
//!
//! The home screen's interactive parts: the planet field and the ship.

pub mod planets;
pub mod ship;

pub use planets::PlanetField;
pub use ship::Ship;
