//! Main Application
//!
//! The App struct manages the TUI lifecycle as a thin display client:
//! - Event loop (keyboard, mouse, resize)
//! - OrchestratorClient for boot and navigation decisions
//! - DisplayState for rendering
//!
//! # Architecture
//!
//! The App:
//! 1. Converts terminal events to SurfaceEvents
//! 2. Sends events to the orchestrator task via OrchestratorClient
//! 3. Receives OrchestratorMessages and updates DisplayState
//! 4. Renders based on DisplayState through the layered compositor
//!
//! Frames are paced by a `tokio::time::interval`; the app never sleeps.

use std::future::Future;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};
use ratatui::Terminal;
use tokio::time::MissedTickBehavior;

use sokkaverse_core::{
    by_menu_slot, BootStage, CommandKey, OrchestratorMessage, PlanetId, Route, SokkaverseConfig,
    TransitEvent, Viewport, ViewportSize,
};

use crate::backdrop::Backdrop;
use crate::compositor::{Compositor, LayerId};
use crate::display::DisplayState;
use crate::galaxy::{PlanetField, Ship};
use crate::orchestrator_client::OrchestratorClient;
use crate::pages::{PageAction, Pages};
use crate::theme::{DIM_GRAY, ECHO_CYAN, FRAME_GRAY, TERMINAL_GREEN};
use crate::viewport::TerminalViewport;

/// Largest terminal box
const TERMINAL_MAX: (u16, u16) = (72, 12);

/// Layer IDs for UI regions
struct AppLayers {
    backdrop: LayerId,
    planets: LayerId,
    terminal: LayerId,
    ship: LayerId,
    page: LayerId,
    status: LayerId,
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Resolved configuration
    config: SokkaverseConfig,

    // === Orchestrator Integration ===
    /// Client for the orchestrator task
    client: OrchestratorClient,
    /// Display state derived from OrchestratorMessages
    display: DisplayState,

    // === UI Components ===
    /// The layered compositor
    compositor: Compositor,
    /// Layer assignments
    layers: AppLayers,
    backdrop: Backdrop,
    planets: PlanetField,
    ship: Ship,
    /// Flight number of the ship's current (or last) leg
    flight: u64,
    pages: Pages,

    // === Misc State ===
    /// Where screen size comes from
    viewport: Box<dyn Viewport>,
    /// Terminal size
    size: ViewportSize,
    /// Last frame time (for animations)
    last_frame: Instant,
}

impl App {
    /// Create the app for the real terminal and spawn the orchestrator
    pub fn new(config: SokkaverseConfig, open: Option<&str>) -> Self {
        Self::with_viewport(config, open, Box::new(TerminalViewport))
    }

    /// Create the app against any viewport
    pub fn with_viewport(
        config: SokkaverseConfig,
        open: Option<&str>,
        viewport: Box<dyn Viewport>,
    ) -> Self {
        let size = viewport.size();
        let area = screen_rect(size);
        let mut compositor = Compositor::new(area);

        // Create layers with z-ordering
        let backdrop = compositor.create_layer(area, 0);
        let planets = compositor.create_layer(area, 10);
        let terminal = compositor.create_layer(terminal_rect(area), 20);
        let ship = compositor.create_layer(area, 30);
        let page = compositor.create_layer(area, 40);
        let status = compositor.create_layer(status_rect(area), 50);
        compositor.set_transparent(terminal, false);
        compositor.set_transparent(page, false);
        compositor.set_visible(page, false);

        let mut rng = rand::thread_rng();
        let mut display = DisplayState::with_cadence(config.timings.cadence);
        if let Some(path) = open {
            match config.base_path.resolve(path) {
                Some(route) => {
                    tracing::info!(%route, "Opening deep link");
                    display.show_route(route, config.base_path.path_of(route));
                }
                None => tracing::warn!(path, "Unknown deep link, starting at home"),
            }
        }

        Self {
            running: true,
            client: OrchestratorClient::spawn(config.clone()),
            display,
            compositor,
            layers: AppLayers {
                backdrop,
                planets,
                terminal,
                ship,
                page,
                status,
            },
            backdrop: Backdrop::new(viewport.as_ref()),
            planets: PlanetField::new(&mut rng),
            ship: Ship::new(config.transit_duration),
            flight: 0,
            pages: Pages::new(),
            viewport,
            size,
            last_frame: Instant::now(),
            config,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut frames = tokio::time::interval(self.config.frame_duration());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        while self.running {
            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event).await,
                    Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                    None => self.running = false,
                },

                // Frame tick - apply messages, animate, render
                _ = frames.tick() => {
                    self.process_messages();
                    self.update().await;
                    self.render(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Tear the orchestrator down and wait for it
    pub async fn shutdown(self) -> anyhow::Result<()> {
        self.client.shutdown().await
    }

    /// Whether the loop should keep going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current display state
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Dispatch one terminal event
    pub async fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle Press events (not Release or Repeat)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key).await,
            Event::Mouse(mouse) => self.handle_mouse(mouse).await,
            Event::Resize(..) => self.handle_resize(),
            _ => {}
        }
    }

    /// Process all pending messages from the orchestrator
    pub fn process_messages(&mut self) {
        let now = Instant::now();
        for msg in self.client.recv_all() {
            if let OrchestratorMessage::DestinationSet { position, flight } = &msg {
                self.ship.fly_to(*position);
                self.flight = *flight;
            }
            self.display.apply_message(&msg, now);
        }
    }

    /// Handle keyboard input
    async fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if let Route::Planet(planet) = self.display.route {
            if self.pages.handle_key(planet, key) == PageAction::Back {
                self.go_home();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char(c) if self.is_menu_hotkey(c) => {
                if let Some(desc) = c.to_digit(10).and_then(|d| by_menu_slot(d as usize)) {
                    deliver(self.client.planet_clicked(desc.id)).await;
                }
            }
            KeyCode::Char(c) => deliver(self.client.key(CommandKey::Char(c))).await,
            KeyCode::Backspace => deliver(self.client.key(CommandKey::Backspace)).await,
            KeyCode::Enter => deliver(self.client.key(CommandKey::Enter)).await,
            _ => {}
        }
    }

    /// `1`..`5` pick a planet once booted, unless a command is being typed
    fn is_menu_hotkey(&self, c: char) -> bool {
        self.display.is_interactive()
            && self.display.command_line.is_empty()
            && matches!(c, '1'..='5')
    }

    /// Handle mouse input
    async fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (col, row) = (mouse.column, mouse.row);
        match (self.display.route, mouse.kind) {
            (Route::Planet(planet), MouseEventKind::Down(MouseButton::Left)) => {
                let area = screen_rect(self.size);
                if self.pages.handle_click(planet, col, row, area) == PageAction::Back {
                    self.go_home();
                }
            }
            (Route::Home, MouseEventKind::Down(MouseButton::Left)) => {
                if let Some(planet) = self.planet_at(col, row) {
                    deliver(self.client.planet_clicked(planet)).await;
                }
            }
            (Route::Home, MouseEventKind::Moved) => {
                let hovered = self.planet_at(col, row);
                self.planets.set_hovered(hovered);
            }
            _ => {}
        }
    }

    /// Planet under a cell, unless the terminal box covers it
    fn planet_at(&self, col: u16, row: u16) -> Option<PlanetId> {
        let planets = self.layers.planets;
        let terminal = self.layers.terminal;
        let top = self
            .compositor
            .layer_at_filtered(col, row, |id| id == planets || id == terminal);
        if top == Some(terminal) {
            return None;
        }
        self.planets.hit_test(col, row, self.size)
    }

    fn go_home(&mut self) {
        let path = self.config.base_path.path_of(Route::Home);
        tracing::debug!(%path, "Back to galaxy");
        self.display.show_route(Route::Home, path);
    }

    /// Handle terminal resize: re-query the viewport and re-lay every layer
    fn handle_resize(&mut self) {
        self.size = self.viewport.size();
        let area = screen_rect(self.size);
        self.compositor.resize(area);

        for id in [
            self.layers.backdrop,
            self.layers.planets,
            self.layers.ship,
            self.layers.page,
        ] {
            self.compositor.place_layer(id, area);
        }
        self.compositor
            .place_layer(self.layers.terminal, terminal_rect(area));
        self.compositor
            .place_layer(self.layers.status, status_rect(area));

        self.backdrop.resize(self.viewport.as_ref());
    }

    /// Update animations and state
    async fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.advance(delta).await;
    }

    /// Advance every clock by `delta` and report completions upward
    pub async fn advance(&mut self, delta: Duration) {
        for stage in self.display.update(delta) {
            deliver(self.client.typing_complete(stage)).await;
        }

        self.backdrop.update(delta);
        self.planets.update(delta);
        self.planets.set_show_hotkeys(self.display.is_interactive());

        if self.ship.update(delta) == Some(TransitEvent::Arrived) {
            deliver(self.client.transit_arrived(self.flight)).await;
        }
    }

    /// Render the UI
    fn render(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        let output = self.compose().clone();

        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    let idx = output.index_of(x, y);
                    if idx < output.content.len() {
                        buf[(x, y)] = output.content[idx].clone();
                    }
                }
            }
        })?;

        Ok(())
    }

    /// Draw every layer and composite them
    pub fn compose(&mut self) -> &Buffer {
        let now = Instant::now();
        let home = self.display.route.is_home();
        self.compositor.set_visible(self.layers.page, !home);
        self.compositor.set_visible(self.layers.terminal, home);

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.backdrop) {
            buf.reset();
            self.backdrop.render(buf);
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.planets) {
            buf.reset();
            self.planets.render(buf);
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.terminal) {
            buf.reset();
            render_terminal(&self.display, now, buf);
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.ship) {
            buf.reset();
            self.ship.render(buf);
        }
        if let Route::Planet(planet) = self.display.route {
            if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.page) {
                buf.reset();
                self.pages.render(planet, buf);
            }
        }
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.status) {
            buf.reset();
            render_status(&self.display, buf);
        }

        self.compositor.composite()
    }
}

/// Await a send to the orchestrator; failures are logged, never fatal
async fn deliver(send: impl Future<Output = anyhow::Result<()>>) {
    if let Err(e) = send.await {
        tracing::warn!("Event not delivered: {:#}", e);
    }
}

fn screen_rect(size: ViewportSize) -> Rect {
    let clamp = |v: u32| u16::try_from(v).unwrap_or(u16::MAX);
    Rect::new(0, 0, clamp(size.width), clamp(size.height))
}

/// Terminal box, centered on screen
fn terminal_rect(area: Rect) -> Rect {
    let width = TERMINAL_MAX.0.min(area.width.saturating_sub(4));
    let height = TERMINAL_MAX.1.min(area.height.saturating_sub(4));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn status_rect(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1)
}

/// Boot lines, prompt and echo output, pinned to the last lines that fit
fn render_terminal(display: &DisplayState, now: Instant, buf: &mut Buffer) {
    let area = buf.area;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FRAME_GRAY))
        .title(" sokkaverse ");
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let stage_lines = display.lines.len();
    let mut rows: Vec<(String, Style)> = Vec::new();
    for (i, line) in display.terminal_lines(now).into_iter().enumerate() {
        let style = if i <= stage_lines {
            Style::default().fg(TERMINAL_GREEN)
        } else {
            Style::default().fg(ECHO_CYAN)
        };
        let line = if i == stage_lines && display.prompt.is_some() {
            format!("{line}_")
        } else {
            line
        };
        if line.is_empty() {
            rows.push((line, style));
            continue;
        }
        for wrapped in textwrap::wrap(&line, inner.width as usize) {
            rows.push((wrapped.into_owned(), style));
        }
    }

    let skip = rows.len().saturating_sub(inner.height as usize);
    for (i, (text, style)) in rows.iter().skip(skip).enumerate() {
        buf.set_stringn(inner.x, inner.y + i as u16, text, inner.width as usize, *style);
    }
}

fn render_status(display: &DisplayState, buf: &mut Buffer) {
    let area = buf.area;
    let stage = display.stage.map_or("Starting", BootStage::description);
    let hint = match display.route {
        Route::Home if display.is_interactive() => "1-5 or click a planet | Esc to quit",
        Route::Home => "Esc to quit",
        Route::Planet(_) => "b / Esc back to galaxy | Ctrl-C to quit",
    };
    let status = format!(" {stage} | {} | {hint}", display.path);
    buf.set_stringn(
        area.x,
        area.y,
        &status,
        area.width as usize,
        Style::default().fg(DIM_GRAY).add_modifier(Modifier::DIM),
    );
}
