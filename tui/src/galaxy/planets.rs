//! Planet Field
//!
//! Draws the five planets at their projected catalog coordinates, lets each
//! one bob gently, and turns mouse positions back into planet ids. Clicks
//! always report the planet's fixed catalog coordinate, never the bobbed one.

use std::time::Duration;

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use sokkaverse_core::planets::PLANETS;
use sokkaverse_core::{Coordinate, EasingFunction, PlanetId, ViewportSize};
use unicode_width::UnicodeWidthStr;

use crate::theme::glow;

/// Sprite rows, centered on the planet's coordinate
const SPRITE: [&str; 3] = [" ▄▄▄ ", "█████", " ▀▀▀ "];
const SPRITE_WIDTH: u16 = 5;
const SPRITE_HEIGHT: u16 = 3;

/// Vertical drift of one planet, in design units
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bob {
    period: Duration,
    amplitude: f32,
    delay: Duration,
}

impl Bob {
    fn random<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Self {
        Self {
            period: Duration::from_secs_f32(rng.gen_range(8.0..13.0)),
            amplitude: rng.gen_range(-15.0..15.0),
            delay: Duration::from_millis(3_000 + 500 * index as u64),
        }
    }

    /// Offset at `elapsed`: out to `amplitude` and back once per period
    fn offset(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        let period = self.period.as_secs_f32().max(f32::EPSILON);
        let frac = (running.as_secs_f32() % period) / period;
        let half = if frac < 0.5 { frac * 2.0 } else { (1.0 - frac) * 2.0 };
        self.amplitude * EasingFunction::EaseInOut.apply(half)
    }
}

/// The clickable planet field
pub struct PlanetField {
    bobs: [Bob; 5],
    elapsed: Duration,
    hovered: Option<PlanetId>,
    show_hotkeys: bool,
}

impl PlanetField {
    /// Field with randomized bobbing
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            bobs: std::array::from_fn(|i| Bob::random(i, rng)),
            elapsed: Duration::ZERO,
            hovered: None,
            show_hotkeys: false,
        }
    }

    /// Advance the bobbing clock
    pub fn update(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    /// Show `1`..`5` next to the labels
    pub fn set_show_hotkeys(&mut self, show: bool) {
        self.show_hotkeys = show;
    }

    /// Track the planet under the mouse (for glow)
    pub fn set_hovered(&mut self, hovered: Option<PlanetId>) {
        self.hovered = hovered;
    }

    /// Where `id` is drawn right now, in design space
    pub fn display_position(&self, id: PlanetId) -> Coordinate {
        let base = id.descriptor().position;
        let offset = self.bobs[id as usize].offset(self.elapsed);
        Coordinate::new(base.x, base.y + offset)
    }

    /// Top-left cell of the sprite for `id`
    fn sprite_origin(&self, id: PlanetId, size: ViewportSize) -> (i32, i32) {
        let (x, y) = size.project(self.display_position(id));
        (
            x.round() as i32 - i32::from(SPRITE_WIDTH / 2),
            y.round() as i32 - i32::from(SPRITE_HEIGHT / 2),
        )
    }

    /// Planet whose sprite or label covers the cell, if any
    pub fn hit_test(&self, col: u16, row: u16, size: ViewportSize) -> Option<PlanetId> {
        let (col, row) = (i32::from(col), i32::from(row));
        PlanetId::ALL.into_iter().rev().find(|id| {
            let (x, y) = self.sprite_origin(*id, size);
            let label_half = (self.label_for(*id).width() as i32 + 1) / 2;
            let center = x + i32::from(SPRITE_WIDTH / 2);
            let on_sprite = (x..x + i32::from(SPRITE_WIDTH)).contains(&col)
                && (y..y + i32::from(SPRITE_HEIGHT)).contains(&row);
            let on_label = row == y + i32::from(SPRITE_HEIGHT)
                && (center - label_half..=center + label_half).contains(&col);
            on_sprite || on_label
        })
    }

    fn label_for(&self, id: PlanetId) -> String {
        let desc = id.descriptor();
        if self.show_hotkeys {
            format!("{} {}", id as usize + 1, desc.label)
        } else {
            desc.label.to_string()
        }
    }

    /// Draw every planet with its label
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        let size = ViewportSize::new(u32::from(area.width), u32::from(area.height));

        for desc in &PLANETS {
            let (x, y) = self.sprite_origin(desc.id, size);
            let mut style = Style::default().fg(glow(desc.color));
            if self.hovered == Some(desc.id) {
                style = style.add_modifier(Modifier::BOLD);
            }

            for (dy, line) in SPRITE.iter().enumerate() {
                put_str(buf, x, y + dy as i32, line, style);
            }

            let label = self.label_for(desc.id);
            let label_x = x + i32::from(SPRITE_WIDTH / 2) - label.width() as i32 / 2;
            put_str(buf, label_x, y + i32::from(SPRITE_HEIGHT), &label, style);
        }
    }
}

/// `set_string` that tolerates negative or off-screen origins
fn put_str(buf: &mut Buffer, x: i32, y: i32, text: &str, style: Style) {
    let area = buf.area;
    if y < 0 || y >= i32::from(area.height) {
        return;
    }
    let mut col = x;
    for ch in text.chars() {
        if col >= i32::from(area.width) {
            break;
        }
        if col >= 0 && ch != ' ' {
            buf[(area.x + col as u16, area.y + y as u16)]
                .set_char(ch)
                .set_style(style);
        }
        col += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::layout::Rect;

    fn field() -> PlanetField {
        PlanetField::new(&mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_bob_waits_for_delay_and_returns() {
        let bob = Bob {
            period: Duration::from_secs(10),
            amplitude: 12.0,
            delay: Duration::from_secs(3),
        };
        assert_eq!(bob.offset(Duration::from_secs(2)), 0.0);
        assert!((bob.offset(Duration::from_secs(8)) - 12.0).abs() < 1e-3);
        assert!(bob.offset(Duration::from_secs(13)).abs() < 1e-3);
    }

    #[test]
    fn test_bobs_stay_in_range() {
        let f = field();
        for (i, bob) in f.bobs.iter().enumerate() {
            assert!(bob.amplitude.abs() <= 15.0);
            assert!((8.0..13.0).contains(&bob.period.as_secs_f32()));
            assert_eq!(bob.delay, Duration::from_millis(3_000 + 500 * i as u64));
        }
    }

    #[test]
    fn test_hit_test_finds_projected_planet() {
        let f = field();
        // 140x75 cells is a tenth of the design space
        let size = ViewportSize::new(140, 75);
        assert_eq!(f.hit_test(15, 25, size), Some(PlanetId::Design));
        assert_eq!(f.hit_test(125, 35, size), Some(PlanetId::Film));
        assert_eq!(f.hit_test(55, 10, size), Some(PlanetId::Lab));
        assert_eq!(f.hit_test(100, 5, size), None);
    }

    #[test]
    fn test_render_draws_sprite_and_label() {
        let mut f = field();
        f.set_show_hotkeys(true);
        let mut buf = Buffer::empty(Rect::new(0, 0, 140, 75));
        f.render(&mut buf);

        // Design Studio is centered on (15, 25)
        assert_eq!(buf[(15, 25)].symbol(), "█");
        let label_row: String = (0..140u16)
            .map(|x| buf[(x, 27)].symbol().to_string())
            .collect();
        assert!(label_row.contains("1 Design Studio"), "{label_row}");
    }

    #[test]
    fn test_offscreen_sprites_do_not_panic() {
        let f = field();
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        f.render(&mut buf);
    }
}
