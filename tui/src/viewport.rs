//! Terminal-backed viewport

use sokkaverse_core::{Viewport, ViewportSize};

/// Asks crossterm for the current terminal size
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn size(&self) -> ViewportSize {
        match crossterm::terminal::size() {
            Ok((w, h)) => ViewportSize::new(u32::from(w), u32::from(h)),
            Err(e) => {
                tracing::warn!("Could not query terminal size: {}", e);
                ViewportSize::new(80, 24)
            }
        }
    }
}
