//! Cinematic Mind page: a horizontal reel of five frames

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};
use sokkaverse_core::pages::{FilmStrip, FILM_FRAMES};

use super::PageAction;
use crate::theme::{DIM_GRAY, FRAME_GRAY, HIGHLIGHT, LOADER_AMBER, TITLE_WHITE};
use crate::widgets::{TextBlock, TextBlockState};

const FRAME_WIDTH: u16 = 20;
const FRAME_HEIGHT: u16 = 6;
const FRAME_GAP: u16 = 1;

pub(super) fn handle_key(strip: &mut FilmStrip, key: KeyEvent) -> PageAction {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => strip.step(false),
        KeyCode::Right | KeyCode::Char('l') => strip.step(true),
        KeyCode::Enter | KeyCode::Char(' ') => strip.open_highlighted(),
        KeyCode::Esc if strip.opened().is_some() => strip.close(),
        KeyCode::Esc | KeyCode::Char('b' | 'B') => return PageAction::Back,
        _ => {}
    }
    PageAction::Stay
}

pub(super) fn handle_click(strip: &mut FilmStrip, col: u16, row: u16, body: Rect) {
    let at = Position::new(col, row);
    if let Some(index) = (0..FILM_FRAMES.len()).find(|&i| frame_rect(body, i).contains(at)) {
        strip.select(index);
    } else if strip.opened().is_some() && detail_rect(body).contains(at) {
        strip.close();
    }
}

/// Frame `index` on the reel, clipped to the body
fn frame_rect(body: Rect, index: usize) -> Rect {
    let x = body.x + (FRAME_WIDTH + FRAME_GAP) * index as u16;
    Rect::new(x, body.y + 1, FRAME_WIDTH, FRAME_HEIGHT).intersection(body)
}

fn detail_rect(body: Rect) -> Rect {
    let y = body.y + FRAME_HEIGHT + 2;
    Rect::new(body.x, y, body.width.min(60), 5).intersection(body)
}

pub(super) fn render(strip: &FilmStrip, body: Rect, buf: &mut Buffer) {
    buf.set_stringn(
        body.x,
        body.y,
        "◀ h / l ▶   Enter to open",
        body.width as usize,
        Style::default().fg(DIM_GRAY),
    );

    for (i, frame) in FILM_FRAMES.iter().enumerate() {
        let rect = frame_rect(body, i);
        if rect.width < 4 || rect.height < 3 {
            continue;
        }
        let border = if i == strip.highlighted() {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(FRAME_GRAY)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(rect);
        block.render(rect, buf);
        TextBlock::new(frame.title)
            .style(Style::default().fg(TITLE_WHITE))
            .centered()
            .render(inner, buf, &mut TextBlockState::default());
    }

    if let Some(frame) = strip.opened() {
        let rect = detail_rect(body);
        if rect.height < 3 {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(LOADER_AMBER))
            .title(frame.title);
        let inner = block.inner(rect);
        block.render(rect, buf);
        let detail = format!("{}\n(click or Esc to close)", frame.image);
        TextBlock::new(&detail)
            .style(Style::default().fg(DIM_GRAY))
            .render(inner, buf, &mut TextBlockState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(buf: &Buffer) -> String {
        let area = buf.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_esc_closes_frame_before_leaving() {
        let mut strip = FilmStrip::new();
        handle_key(&mut strip, key(KeyCode::Right));
        handle_key(&mut strip, key(KeyCode::Enter));
        assert_eq!(strip.opened().map(|f| f.id), Some("preschool"));

        assert_eq!(handle_key(&mut strip, key(KeyCode::Esc)), PageAction::Stay);
        assert!(strip.opened().is_none());
        assert_eq!(handle_key(&mut strip, key(KeyCode::Esc)), PageAction::Back);
    }

    #[test]
    fn test_click_opens_frame_and_detail_closes_it() {
        let mut strip = FilmStrip::new();
        let body = Rect::new(0, 0, 120, 20);

        // Third frame starts at x = 2 * (20 + 1)
        handle_click(&mut strip, 45, 3, body);
        assert_eq!(strip.highlighted(), 2);
        assert_eq!(strip.opened().map(|f| f.id), Some("event"));

        handle_click(&mut strip, 5, FRAME_HEIGHT + 3, body);
        assert!(strip.opened().is_none());
    }

    #[test]
    fn test_render_shows_frames_and_detail() {
        let mut strip = FilmStrip::new();
        strip.select(4);
        let body = Rect::new(0, 0, 120, 20);
        let mut buf = Buffer::empty(body);
        render(&strip, body, &mut buf);
        let s = screen(&buf);
        assert!(s.contains("Product"));
        assert!(s.contains("Placeholder5.jpg"));
    }
}
