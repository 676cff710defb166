//! Layer - A single compositable layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::LayerId;

/// A single layer in the compositor
pub struct Layer {
    /// Unique identifier
    pub id: LayerId,
    /// Z-order (higher = in front)
    pub z_index: i32,
    /// Position and size on screen
    pub bounds: Rect,
    /// Whether the layer is composited
    pub visible: bool,
    /// Whether blank cells let lower layers show through
    pub transparent: bool,
    /// The layer's render buffer (origin-based)
    pub buffer: Buffer,
}

impl Layer {
    /// Create a new, transparent layer
    pub fn new(id: LayerId, bounds: Rect, z_index: i32) -> Self {
        let buffer_area = Rect::new(0, 0, bounds.width, bounds.height);
        Self {
            id,
            z_index,
            bounds,
            visible: true,
            transparent: true,
            buffer: Buffer::empty(buffer_area),
        }
    }

    /// Check if a screen point is within this layer's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x.saturating_add(self.bounds.width)
            && y >= self.bounds.y
            && y < self.bounds.y.saturating_add(self.bounds.height)
    }
}
