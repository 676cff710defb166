//! Flowing ASCII grid
//!
//! A screen-sized grid of random characters with a margin on both axes.
//! Every [`SHIFT_INTERVAL`] the top row drops off and a fresh random row is
//! appended at the bottom, so the grid appears to flow upward.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::style::Style;
use sokkaverse_core::ViewportSize;

use crate::theme::ASCII_DIM;

/// Characters the grid is made of (the trailing space thins it out)
pub const CHARSET: &[u8] = b"01+-*/#@&%$ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// Extra rows and columns beyond the viewport
pub const MARGIN: usize = 15;

/// Time between upward shifts
pub const SHIFT_INTERVAL: Duration = Duration::from_millis(200);

/// The flowing character grid
pub struct AsciiGrid {
    rows: VecDeque<String>,
    cols: usize,
    since_shift: Duration,
}

impl AsciiGrid {
    /// Generate a grid covering `size` plus the margin
    pub fn new<R: Rng + ?Sized>(size: ViewportSize, rng: &mut R) -> Self {
        let mut grid = Self {
            rows: VecDeque::new(),
            cols: 0,
            since_shift: Duration::ZERO,
        };
        grid.regenerate(size, rng);
        grid
    }

    /// Throw the grid away and generate one for a new size
    pub fn regenerate<R: Rng + ?Sized>(&mut self, size: ViewportSize, rng: &mut R) {
        self.cols = size.width as usize + MARGIN;
        let rows = size.height as usize + MARGIN;
        self.rows = (0..rows).map(|_| random_row(self.cols, rng)).collect();
        self.since_shift = Duration::ZERO;
    }

    /// Advance the flow clock; returns how many shifts happened
    pub fn update<R: Rng + ?Sized>(&mut self, delta: Duration, rng: &mut R) -> usize {
        self.since_shift += delta;
        let mut shifts = 0;
        while self.since_shift >= SHIFT_INTERVAL {
            self.since_shift -= SHIFT_INTERVAL;
            self.shift(rng);
            shifts += 1;
        }
        shifts
    }

    fn shift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.rows.pop_front().is_none() {
            return;
        }
        self.rows.push_back(random_row(self.cols, rng));
    }

    /// Rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// Number of rows (viewport height plus margin)
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (viewport width plus margin)
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Draw the visible part of the grid
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        let style = Style::default().fg(ASCII_DIM);
        for (y, row) in self.rows.iter().take(area.height as usize).enumerate() {
            let visible: String = row.chars().take(area.width as usize).collect();
            buf.set_string(area.x, area.y + y as u16, &visible, style);
        }
    }
}

fn random_row<R: Rng + ?Sized>(cols: usize, rng: &mut R) -> String {
    (0..cols)
        .map(|_| char::from(CHARSET[rng.gen_range(0..CHARSET.len())]))
        .collect()
}
