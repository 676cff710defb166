//! TextBlock Widget
//!
//! A borderless, wrapped text region that can be scrolled and centered.
//! Used for page taglines, the readme view and the terminal output log.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

/// Scroll state of a text block
#[derive(Debug, Default)]
pub struct TextBlockState {
    /// First visible wrapped line
    pub scroll_offset: usize,
    /// Wrapped line count from the last render
    pub total_lines: usize,
}

impl TextBlockState {
    /// Scroll by delta (positive = down)
    pub fn scroll(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }

    /// Pin to the last lines (clamped on next render)
    pub fn follow_tail(&mut self) {
        self.scroll_offset = usize::MAX;
    }
}

/// A borderless, wrapped text block
pub struct TextBlock<'a> {
    content: &'a str,
    style: Style,
    centered: bool,
}

impl<'a> TextBlock<'a> {
    /// Block showing `content`; `\n` starts a new paragraph
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
            centered: false,
        }
    }

    /// Style for every line
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Center each wrapped line horizontally
    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    fn wrapped(&self, width: usize) -> Vec<String> {
        self.content
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, width.max(1))
                        .into_iter()
                        .map(|cow| cow.into_owned())
                        .collect()
                }
            })
            .collect()
    }
}

impl StatefulWidget for TextBlock<'_> {
    type State = TextBlockState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let wrapped = self.wrapped(area.width as usize);
        state.total_lines = wrapped.len();

        let max_scroll = state.total_lines.saturating_sub(area.height as usize);
        state.scroll_offset = state.scroll_offset.min(max_scroll);

        for (i, line) in wrapped
            .iter()
            .skip(state.scroll_offset)
            .take(area.height as usize)
            .enumerate()
        {
            let pad = if self.centered {
                (area.width as usize).saturating_sub(line.width()) / 2
            } else {
                0
            };
            buf.set_stringn(
                area.x + pad as u16,
                area.y + i as u16,
                line,
                area.width as usize - pad,
                self.style,
            );
        }
    }
}
