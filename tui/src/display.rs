//! Display State
//!
//! What the terminal box and the router show, derived from
//! [`OrchestratorMessage`]s.
//!
//! # Design Philosophy
//!
//! The TUI is a thin client: it renders what the orchestrator tells it to.
//! Display state is the bridge between messages and rendering. The only
//! clocks it owns are the leaf animations (typed text, loader bar), and the
//! only thing it reports back is that a typed line finished.
//!
//! Mounted stages accumulate: the boot line stays on screen while the loader
//! runs, and both stay above the ready line and the prompt. Echo output types
//! itself in below the prompt, one reveal clock per line.

use std::time::{Duration, Instant};

use sokkaverse_core::{
    BootStage, Coordinate, OrchestratorMessage, ProgressLoader, Route, StageDisplay, StageTimings,
    TypedText,
};

/// A mounted stage line
#[derive(Clone, Debug)]
pub enum StageView {
    /// Typed-text line
    Typed(TypedText),
    /// Loader bar; `settled` pins it at 100%
    Loader {
        /// The bar model
        loader: ProgressLoader,
        /// A later stage was entered
        settled: bool,
    },
}

impl StageView {
    fn from_display(display: &StageDisplay, now: Instant) -> Option<Self> {
        match display {
            StageDisplay::Typed {
                text,
                cadence_ms,
                cursor,
            } => {
                let typed = TypedText::new(text.clone(), Duration::from_millis(*cadence_ms));
                Some(Self::Typed(if *cursor { typed.with_cursor() } else { typed }))
            }
            StageDisplay::Loader { label, duration_ms } => Some(Self::Loader {
                loader: ProgressLoader::started_at(
                    label.clone(),
                    Duration::from_millis(*duration_ms),
                    now,
                ),
                settled: false,
            }),
            StageDisplay::Prompt { .. } => None,
        }
    }

    /// Finish revealing (a later stage arrived first)
    fn settle(&mut self) {
        match self {
            Self::Typed(typed) => {
                if !typed.is_complete() {
                    typed.advance(typed.typing_duration());
                }
            }
            Self::Loader { settled, .. } => *settled = true,
        }
    }

    /// Text to draw at `now`, with the cursor if it is showing
    pub fn line_at(&self, now: Instant) -> String {
        match self {
            Self::Typed(typed) => {
                if typed.cursor_visible() {
                    format!("{}█", typed.displayed())
                } else {
                    typed.displayed().to_string()
                }
            }
            Self::Loader { loader, settled } => {
                if *settled {
                    loader.line_at(now + loader.duration())
                } else {
                    loader.line_at(now)
                }
            }
        }
    }
}

/// Everything the surface renders that the orchestrator decides
#[derive(Clone, Debug)]
pub struct DisplayState {
    /// Latest boot stage
    pub stage: Option<BootStage>,
    /// Mounted stage lines in order
    pub lines: Vec<(BootStage, StageView)>,
    /// Prompt text once the console is mounted
    pub prompt: Option<String>,
    /// Command-line text
    pub command_line: String,
    /// Echo output, each line typing in on its own clock
    pub output: Vec<TypedText>,
    /// Current screen
    pub route: Route,
    /// Absolute path of the current screen
    pub path: String,
    /// Where the ship is headed
    pub destination: Option<Coordinate>,
    /// Reveal cadence for output lines
    cadence: Duration,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::with_cadence(StageTimings::default().cadence)
    }
}

impl DisplayState {
    /// Empty display state
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty display state typing output at `cadence` per character
    pub fn with_cadence(cadence: Duration) -> Self {
        Self {
            stage: None,
            lines: Vec::new(),
            prompt: None,
            command_line: String::new(),
            output: Vec::new(),
            route: Route::Home,
            path: "/".to_string(),
            destination: None,
            cadence,
        }
    }

    /// Apply one orchestrator message received at `now`
    pub fn apply_message(&mut self, msg: &OrchestratorMessage, now: Instant) {
        match msg {
            OrchestratorMessage::StageEntered { stage, display } => {
                for (_, view) in &mut self.lines {
                    view.settle();
                }
                self.stage = Some(*stage);
                match display {
                    StageDisplay::Prompt { prompt } => self.prompt = Some(prompt.clone()),
                    other => {
                        if let Some(view) = StageView::from_display(other, now) {
                            self.lines.push((*stage, view));
                        }
                    }
                }
            }
            OrchestratorMessage::CommandLine { text } => {
                self.command_line.clone_from(text);
            }
            OrchestratorMessage::OutputAppended { index, line } => {
                let cadence = self.cadence;
                if *index >= self.output.len() {
                    self.output
                        .resize_with(*index + 1, || TypedText::new("", cadence));
                }
                self.output[*index] = TypedText::new(line.clone(), cadence);
            }
            OrchestratorMessage::DestinationSet { position, .. } => {
                self.destination = Some(*position);
            }
            OrchestratorMessage::DestinationCleared => {
                self.destination = None;
            }
            OrchestratorMessage::Navigate { route, path } => {
                self.route = *route;
                self.path.clone_from(path);
            }
        }
    }

    /// Advance typed lines by `delta`
    ///
    /// Returns the stages whose line finished typing during this frame.
    /// Output lines advance too but are never reported.
    pub fn update(&mut self, delta: Duration) -> Vec<BootStage> {
        for line in &mut self.output {
            line.advance(delta);
        }
        self.lines
            .iter_mut()
            .filter_map(|(stage, view)| match view {
                StageView::Typed(typed) => typed.advance(delta).then_some(*stage),
                StageView::Loader { .. } => None,
            })
            .collect()
    }

    /// Whether the command line is mounted
    pub fn is_interactive(&self) -> bool {
        self.stage == Some(BootStage::Interactive)
    }

    /// Terminal box contents at `now`, top to bottom
    pub fn terminal_lines(&self, now: Instant) -> Vec<String> {
        let mut out: Vec<String> = self.lines.iter().map(|(_, v)| v.line_at(now)).collect();
        if let Some(prompt) = &self.prompt {
            out.push(format!("{prompt} {}", self.command_line));
            out.extend(self.output.iter().map(|line| line.displayed().to_string()));
        }
        out
    }

    /// Switch screens without the orchestrator (back links, deep links)
    pub fn show_route(&mut self, route: Route, path: String) {
        self.route = route;
        self.path = path;
    }

    /// Full text of every output line, revealed or not
    pub fn output_text(&self) -> Vec<&str> {
        self.output.iter().map(TypedText::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sokkaverse_core::{PlanetId, StageTimings};

    fn entered(stage: BootStage) -> OrchestratorMessage {
        OrchestratorMessage::StageEntered {
            stage,
            display: StageTimings::default().display_for(stage),
        }
    }

    #[test]
    fn test_boot_line_types_and_reports_completion_once() {
        let now = Instant::now();
        let mut state = DisplayState::new();
        state.apply_message(&entered(BootStage::Booting), now);

        assert_eq!(state.terminal_lines(now), vec![String::new()]);
        assert!(state.update(Duration::from_millis(45 * 5)).is_empty());
        assert_eq!(state.terminal_lines(now), vec!["Initi".to_string()]);

        assert_eq!(state.update(Duration::from_secs(5)), vec![BootStage::Booting]);
        assert!(state.update(Duration::from_secs(1)).is_empty());
        assert_eq!(
            state.terminal_lines(now),
            vec!["Initializing Sokkaverse OS...".to_string()]
        );
    }

    #[test]
    fn test_stages_accumulate_and_loader_settles() {
        let now = Instant::now();
        let mut state = DisplayState::new();
        state.apply_message(&entered(BootStage::Booting), now);
        state.apply_message(&entered(BootStage::Loading), now);
        state.apply_message(&entered(BootStage::Ready), now);

        let lines = state.terminal_lines(now);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Initializing Sokkaverse OS...");
        assert_eq!(lines[1], "Loading multiverse gateways [##########] 100%");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_prompt_and_output() {
        let now = Instant::now();
        let mut state = DisplayState::new();
        state.apply_message(&entered(BootStage::Interactive), now);
        assert!(state.is_interactive());

        state.apply_message(
            &OrchestratorMessage::CommandLine {
                text: "hi".to_string(),
            },
            now,
        );
        state.apply_message(
            &OrchestratorMessage::OutputAppended {
                index: 0,
                line: ">> hi".to_string(),
            },
            now,
        );
        assert_eq!(
            state.terminal_lines(now),
            vec!["sokkaverse$> hi".to_string(), String::new()]
        );

        state.update(Duration::from_millis(45 * 5));
        assert_eq!(
            state.terminal_lines(now),
            vec!["sokkaverse$> hi".to_string(), ">> hi".to_string()]
        );
    }

    #[test]
    fn test_output_lines_type_in_on_their_own_clocks() {
        let now = Instant::now();
        let mut state = DisplayState::with_cadence(Duration::from_millis(10));
        state.apply_message(&entered(BootStage::Interactive), now);

        let echo = ">> hello";
        let ack = "Command 'hello' received. Processing...";
        for (index, line) in [echo, ack].into_iter().enumerate() {
            state.apply_message(
                &OrchestratorMessage::OutputAppended {
                    index,
                    line: line.to_string(),
                },
                now,
            );
        }
        assert_eq!(state.terminal_lines(now)[1..].to_vec(), vec![String::new(); 2]);

        state.update(Duration::from_millis(10 * echo.len() as u64));
        let lines = state.terminal_lines(now);
        assert_eq!(lines[1], echo);
        assert_eq!(lines[2], &ack[..echo.len()]);

        state.update(Duration::from_secs(1));
        assert_eq!(
            state.terminal_lines(now)[1..].to_vec(),
            vec![echo.to_string(), ack.to_string()]
        );
        assert_eq!(state.output_text(), vec![echo, ack]);
    }

    #[test]
    fn test_navigation_and_destination() {
        let now = Instant::now();
        let mut state = DisplayState::new();
        let target = PlanetId::Film.descriptor().position;
        state.apply_message(
            &OrchestratorMessage::DestinationSet {
                position: target,
                flight: 1,
            },
            now,
        );
        assert_eq!(state.destination, Some(target));

        state.apply_message(
            &OrchestratorMessage::Navigate {
                route: Route::Planet(PlanetId::Film),
                path: "/film".to_string(),
            },
            now,
        );
        state.apply_message(&OrchestratorMessage::DestinationCleared, now);
        assert_eq!(state.route, Route::Planet(PlanetId::Film));
        assert_eq!(state.path, "/film");
        assert!(state.destination.is_none());

        state.show_route(Route::Home, "/".to_string());
        assert!(state.route.is_home());
    }
}
