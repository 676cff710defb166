//! Themed Pages
//!
//! One full-screen page per planet. Every page shares a header (title and
//! tagline) and a back-to-galaxy footer; Design Studio and Cinematic Mind add
//! their own body.

pub mod design;
pub mod film;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::StatefulWidget;
use sokkaverse_core::pages::{content_for, DesignExplorer, FilmStrip, BACK_TO_GALAXY};
use sokkaverse_core::PlanetId;

use crate::theme::{glow, BACK_LINK, TITLE_WHITE};
use crate::widgets::{TextBlock, TextBlockState};

/// What the app should do after a page handled input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Stay on the page
    Stay,
    /// Return to `/`
    Back,
}

/// Header, body and footer regions of a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLayout {
    /// Title row
    pub title: Rect,
    /// Tagline rows
    pub tagline: Rect,
    /// Page-specific content
    pub body: Rect,
    /// Back-to-galaxy row
    pub footer: Rect,
}

impl PageLayout {
    /// Split a full-screen area
    pub fn new(area: Rect) -> Self {
        let inner_x = area.x + 2;
        let inner_w = area.width.saturating_sub(4);
        let footer_y = area.y + area.height.saturating_sub(1);
        let body_y = area.y + 5;
        Self {
            title: Rect::new(inner_x, area.y + 1, inner_w, 1),
            tagline: Rect::new(inner_x, area.y + 2, inner_w, 2),
            body: Rect::new(
                inner_x,
                body_y,
                inner_w,
                footer_y.saturating_sub(body_y + 1),
            ),
            footer: Rect::new(inner_x, footer_y, inner_w, 1),
        }
    }
}

/// Per-page state that survives leaving and re-entering a page
#[derive(Debug, Default)]
pub struct Pages {
    explorer: DesignExplorer,
    film: FilmStrip,
}

impl Pages {
    /// Fresh page state
    pub fn new() -> Self {
        Self::default()
    }

    /// Design Studio state
    pub fn explorer(&self) -> &DesignExplorer {
        &self.explorer
    }

    /// Cinematic Mind state
    pub fn film(&self) -> &FilmStrip {
        &self.film
    }

    /// Route a key press to the page for `planet`
    pub fn handle_key(&mut self, planet: PlanetId, key: KeyEvent) -> PageAction {
        match planet {
            PlanetId::Design => design::handle_key(&mut self.explorer, key),
            PlanetId::Film => film::handle_key(&mut self.film, key),
            _ => back_on(key),
        }
    }

    /// Route a left click to the page for `planet`
    pub fn handle_click(&mut self, planet: PlanetId, col: u16, row: u16, area: Rect) -> PageAction {
        let layout = PageLayout::new(area);
        if row == layout.footer.y {
            return PageAction::Back;
        }
        match planet {
            PlanetId::Design => design::handle_click(&mut self.explorer, col, row, layout.body),
            PlanetId::Film => film::handle_click(&mut self.film, col, row, layout.body),
            _ => {}
        }
        PageAction::Stay
    }

    /// Draw the page for `planet` into a full-screen buffer
    pub fn render(&self, planet: PlanetId, buf: &mut Buffer) {
        let area = buf.area;
        let layout = PageLayout::new(area);
        let content = content_for(planet);
        let accent = glow(planet.descriptor().color);

        let title_style = Style::default().fg(TITLE_WHITE).add_modifier(Modifier::BOLD);
        buf.set_stringn(
            layout.title.x,
            layout.title.y,
            content.title,
            layout.title.width as usize,
            title_style,
        );
        TextBlock::new(content.tagline)
            .style(Style::default().fg(accent))
            .render(layout.tagline, buf, &mut TextBlockState::default());

        match planet {
            PlanetId::Design => design::render(&self.explorer, layout.body, buf),
            PlanetId::Film => film::render(&self.film, layout.body, buf),
            _ => {}
        }

        let footer = format!("{BACK_TO_GALAXY}   (b / Esc)");
        buf.set_stringn(
            layout.footer.x,
            layout.footer.y,
            &footer,
            layout.footer.width as usize,
            Style::default().fg(BACK_LINK),
        );
    }
}

/// Keys that leave any page
fn back_on(key: KeyEvent) -> PageAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b' | 'B') => PageAction::Back,
        _ => PageAction::Stay,
    }
}
