//! Design Studio page: project explorer, editor view, optional viewport

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};
use sokkaverse_core::pages::{DesignExplorer, EntryKind, DESIGN_MANIFESTO, README_ID};

use super::PageAction;
use crate::theme::{DIM_GRAY, ECHO_CYAN, FRAME_GRAY, HIGHLIGHT, TERMINAL_GREEN, TITLE_WHITE};
use crate::widgets::{TextBlock, TextBlockState};

const EXPLORER_WIDTH: u16 = 36;
const VIEWPORT_WIDTH: u16 = 30;

const README: &str = "// Welcome to the Design Studio\n\
As a designer entering the modern interface era, I'm showcasing my projects through this \
editor-style interface. This structure reflects a commitment to organization, logic, and \
production-ready design thinking.\n\
\n\
Explore my design projects and technical categories in the EXPLORER MENU on the left. \
Select any file to view its design rationale or preview.\n\
\n\
// Design Categories: Case Studies, UI-UX-Design, Visual-Asset-Design, Graphic-Print-Media, \
Team-Leadership.";

const RATIONALE: &str = "This is the rationale/code view for the selected project.\n\
\n\
// Here will be the detailed case study, user flow, or technical specifications for this design.";

pub(super) fn handle_key(explorer: &mut DesignExplorer, key: KeyEvent) -> PageAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => explorer.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => explorer.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => explorer.activate_cursor(),
        KeyCode::Esc | KeyCode::Char('b' | 'B') => return PageAction::Back,
        _ => {}
    }
    PageAction::Stay
}

pub(super) fn handle_click(explorer: &mut DesignExplorer, col: u16, row: u16, body: Rect) {
    let list = explorer_rect(body);
    if col < list.x || col >= list.x + list.width || row <= list.y {
        return;
    }
    let index = usize::from(row - list.y - 1);
    if let Some(entry) = explorer.visible().get(index) {
        let id = entry.id;
        explorer.click(id);
    }
}

fn explorer_rect(body: Rect) -> Rect {
    Rect::new(
        body.x,
        body.y,
        EXPLORER_WIDTH.min(body.width),
        body.height.saturating_sub(DESIGN_MANIFESTO.len() as u16 + 1),
    )
}

pub(super) fn render(explorer: &DesignExplorer, body: Rect, buf: &mut Buffer) {
    if body.width < 20 || body.height < 6 {
        return;
    }
    let list = explorer_rect(body);
    render_explorer(explorer, list, buf);

    let editor_x = list.x + list.width + 2;
    let editor_w = (body.x + body.width).saturating_sub(editor_x);
    let show_viewport = explorer.shows_viewport() && editor_w > VIEWPORT_WIDTH + 20;
    let text_w = if show_viewport {
        editor_w - VIEWPORT_WIDTH - 2
    } else {
        editor_w
    };

    let active = explorer.active();
    if active.id == README_ID {
        TextBlock::new(README)
            .style(Style::default().fg(TITLE_WHITE))
            .render(
                Rect::new(editor_x, list.y, text_w, list.height),
                buf,
                &mut TextBlockState::default(),
            );
    } else {
        let name = display_name(active.name);
        buf.set_stringn(
            editor_x,
            list.y,
            name,
            text_w as usize,
            Style::default().fg(ECHO_CYAN).add_modifier(Modifier::BOLD),
        );
        TextBlock::new(RATIONALE)
            .style(Style::default().fg(TITLE_WHITE))
            .render(
                Rect::new(editor_x, list.y + 2, text_w, list.height.saturating_sub(2)),
                buf,
                &mut TextBlockState::default(),
            );
    }

    if show_viewport {
        let panel = Rect::new(
            editor_x + text_w + 2,
            list.y,
            VIEWPORT_WIDTH,
            list.height.min(8),
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FRAME_GRAY))
            .title("VIEWPORT");
        let inner = block.inner(panel);
        block.render(panel, buf);
        let preview = format!("[Preview of {} goes here]", display_name(active.name));
        TextBlock::new(&preview)
            .style(Style::default().fg(DIM_GRAY))
            .centered()
            .render(inner, buf, &mut TextBlockState::default());
    }

    let footer_y = body.y + body.height.saturating_sub(DESIGN_MANIFESTO.len() as u16);
    for (i, line) in DESIGN_MANIFESTO.iter().enumerate() {
        buf.set_stringn(
            body.x,
            footer_y + i as u16,
            line,
            body.width as usize,
            Style::default().fg(TERMINAL_GREEN),
        );
    }
}

/// Entry name without its tree-drawing prefix
fn display_name(name: &str) -> &str {
    name.trim_start_matches(['├', '└', '─', ' '])
}

fn render_explorer(explorer: &DesignExplorer, area: Rect, buf: &mut Buffer) {
    buf.set_stringn(
        area.x,
        area.y,
        "PROJECT EXPLORER",
        area.width as usize,
        Style::default().fg(DIM_GRAY).add_modifier(Modifier::BOLD),
    );

    let active = explorer.active().id;
    for (i, entry) in explorer
        .visible()
        .into_iter()
        .take(area.height.saturating_sub(1) as usize)
        .enumerate()
    {
        let marker = if i == explorer.cursor() { '>' } else { ' ' };
        let label = match entry.kind {
            EntryKind::Folder => {
                let arrow = if explorer.is_open(entry.id) { '▼' } else { '▶' };
                format!("{marker}{arrow} {}", entry.name)
            }
            EntryKind::File => format!("{marker}  {}", entry.name),
        };
        let style = if entry.id == active {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TITLE_WHITE)
        };
        buf.set_stringn(area.x, area.y + 1 + i as u16, &label, area.width as usize, style);
    }
}
