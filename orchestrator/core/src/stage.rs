//! Boot Stages
//!
//! The boot sequence is a strictly forward state machine:
//!
//! ```text
//! Booting ──(typing delay)──► Loading ──(loader duration)──► Ready ──(typing delay)──► Interactive
//! ```
//!
//! Each stage tells the surface what to show through a [`StageDisplay`]; the
//! orchestrator decides when to move on.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::console::PROMPT;

/// First line typed at boot
pub const BOOT_TEXT: &str = "Initializing Sokkaverse OS...";

/// Line typed once loading finishes
pub const READY_TEXT: &str = "System Ready. Enter a command or select an option:";

/// Label in front of the loader bar
pub const LOADER_LABEL: &str = "Loading multiverse gateways";

/// Phase of the boot animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BootStage {
    /// Typing the boot line
    Booting,
    /// Progress loader running
    Loading,
    /// Typing the ready line
    Ready,
    /// Command line mounted; terminal state
    Interactive,
}

impl BootStage {
    /// The stage after this one (`None` for the terminal stage)
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Booting => Some(Self::Loading),
            Self::Loading => Some(Self::Ready),
            Self::Ready => Some(Self::Interactive),
            Self::Interactive => None,
        }
    }

    /// Whether no further transitions happen
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Whether this stage types a line of text
    #[must_use]
    pub fn is_typing(self) -> bool {
        matches!(self, Self::Booting | Self::Ready)
    }

    /// Short description for status bars and logs
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Booting => "Booting",
            Self::Loading => "Loading",
            Self::Ready => "Ready",
            Self::Interactive => "Interactive",
        }
    }
}

impl fmt::Display for BootStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// What a surface should mount for a stage
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageDisplay {
    /// A typed-text line
    Typed {
        /// Text to reveal
        text: String,
        /// Milliseconds per character
        cadence_ms: u64,
        /// Blink a cursor after completion
        cursor: bool,
    },
    /// A progress loader
    Loader {
        /// Label before the bar
        label: String,
        /// Total fill time in milliseconds
        duration_ms: u64,
    },
    /// The focused command line
    Prompt {
        /// Prompt text
        prompt: String,
    },
}

/// How typing stages decide when to advance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvancePolicy {
    /// Advance after `len(text) * cadence + buffer`, regardless of the renderer
    #[default]
    Timed,
    /// Advance `buffer` after the surface reports the text finished typing
    OnTypingComplete,
}

impl FromStr for AdvancePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "timed" => Ok(Self::Timed),
            "on_typing_complete" | "on-typing-complete" | "completion" => {
                Ok(Self::OnTypingComplete)
            }
            other => Err(format!("unknown advance policy '{other}'")),
        }
    }
}

/// Timing constants of the boot sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageTimings {
    /// Reveal cadence of typed lines
    pub cadence: Duration,
    /// Slack added after a typed line before advancing
    pub buffer: Duration,
    /// Loader fill time (also the Loading stage length)
    pub loader: Duration,
}

impl Default for StageTimings {
    fn default() -> Self {
        Self {
            cadence: Duration::from_millis(45),
            buffer: Duration::from_millis(500),
            loader: Duration::from_secs(6),
        }
    }
}

impl StageTimings {
    /// `len(text) * cadence + buffer`
    #[must_use]
    pub fn typing_delay(&self, text: &str) -> Duration {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        self.cadence.saturating_mul(chars).saturating_add(self.buffer)
    }

    /// Timed delay before leaving `stage` (`None` for the terminal stage)
    #[must_use]
    pub fn timed_delay(&self, stage: BootStage) -> Option<Duration> {
        match stage {
            BootStage::Booting => Some(self.typing_delay(BOOT_TEXT)),
            BootStage::Loading => Some(self.loader),
            BootStage::Ready => Some(self.typing_delay(READY_TEXT)),
            BootStage::Interactive => None,
        }
    }

    /// What the surface should show while in `stage`
    #[must_use]
    pub fn display_for(&self, stage: BootStage) -> StageDisplay {
        let cadence_ms = u64::try_from(self.cadence.as_millis()).unwrap_or(u64::MAX);
        match stage {
            BootStage::Booting => StageDisplay::Typed {
                text: BOOT_TEXT.to_string(),
                cadence_ms,
                cursor: false,
            },
            BootStage::Loading => StageDisplay::Loader {
                label: LOADER_LABEL.to_string(),
                duration_ms: u64::try_from(self.loader.as_millis()).unwrap_or(u64::MAX),
            },
            BootStage::Ready => StageDisplay::Typed {
                text: READY_TEXT.to_string(),
                cadence_ms,
                cursor: true,
            },
            BootStage::Interactive => StageDisplay::Prompt {
                prompt: PROMPT.to_string(),
            },
        }
    }
}
