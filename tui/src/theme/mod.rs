//! Theme and Colors
//!
//! The Sokkaverse palette: deep-space backdrop, terminal green, and the glow
//! colors of the five planets.

use ratatui::style::Color;
use sokkaverse_core::Rgb;

// ============================================================================
// Space
// ============================================================================

/// Backdrop characters - barely visible
pub const ASCII_DIM: Color = Color::Rgb(40, 60, 70);

/// Bright particles
pub const STAR_BRIGHT: Color = Color::Rgb(230, 240, 255);

/// Faint particles
pub const STAR_FAINT: Color = Color::Rgb(110, 120, 150);

// ============================================================================
// Terminal
// ============================================================================

/// Boot text and prompt
pub const TERMINAL_GREEN: Color = Color::Rgb(0, 255, 150);

/// Echoed command lines
pub const ECHO_CYAN: Color = Color::Rgb(120, 220, 255);

/// Loader bar
pub const LOADER_AMBER: Color = Color::Rgb(255, 196, 0);

/// Terminal frame
pub const FRAME_GRAY: Color = Color::Rgb(70, 80, 90);

/// Status and hints
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

// ============================================================================
// Ship
// ============================================================================

/// Hull
pub const SHIP_HULL: Color = Color::Rgb(220, 220, 235);

/// Thrust flame (only while flying)
pub const SHIP_FLAME: Color = Color::Rgb(255, 120, 40);

// ============================================================================
// Pages
// ============================================================================

/// Page titles
pub const TITLE_WHITE: Color = Color::Rgb(245, 245, 245);

/// Selected rows, active file, opened frame
pub const HIGHLIGHT: Color = Color::Rgb(255, 223, 128);

/// Back-to-galaxy control
pub const BACK_LINK: Color = Color::Rgb(150, 180, 255);

/// Convert a catalog glow color into a terminal color
#[must_use]
pub fn glow(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
