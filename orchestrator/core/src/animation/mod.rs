//! Animation Models
//!
//! Surface-agnostic models of the two leaf animations the boot sequence uses.
//! The orchestrator describes WHAT to animate (see
//! [`StageDisplay`](crate::stage::StageDisplay)); surfaces own instances of
//! these models and advance them on their own frame clock.
//!
//! - [`TypedText`]: reveals a string one character per cadence tick
//! - [`ProgressLoader`]: a `[####------]` bar measured against a wall clock

mod timing;

pub use timing::EasingFunction;

use std::time::{Duration, Instant};

/// Blink half-period of the completion cursor
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Number of slots in the loader bar
pub const LOADER_SLOTS: usize = 10;

/// Character-by-character text reveal
///
/// Each instance runs its own reveal clock. [`TypedText::advance`] reports the
/// moment typing completes, so callers can react to completion instead of
/// recomputing the duration from the text length.
#[derive(Clone, Debug)]
pub struct TypedText {
    text: String,
    char_count: usize,
    cadence: Duration,
    elapsed: Duration,
    cursor: bool,
    completion_reported: bool,
}

impl TypedText {
    /// Start revealing `text` at one character per `cadence`
    pub fn new(text: impl Into<String>, cadence: Duration) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            cadence,
            elapsed: Duration::ZERO,
            cursor: false,
            completion_reported: false,
        }
    }

    /// Show a blinking cursor once typing completes
    #[must_use]
    pub fn with_cursor(mut self) -> Self {
        self.cursor = true;
        self
    }

    /// Advance the reveal clock
    ///
    /// Returns `true` exactly once: on the call that completes the text.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.is_complete() && !self.completion_reported {
            self.completion_reported = true;
            return true;
        }
        false
    }

    /// Number of characters currently revealed
    #[must_use]
    pub fn visible_chars(&self) -> usize {
        if self.cadence.is_zero() {
            return self.char_count;
        }
        let ticks = self.elapsed.as_nanos() / self.cadence.as_nanos();
        usize::try_from(ticks).map_or(self.char_count, |t| t.min(self.char_count))
    }

    /// The revealed prefix of the text
    #[must_use]
    pub fn displayed(&self) -> &str {
        let visible = self.visible_chars();
        match self.text.char_indices().nth(visible) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    /// Whether every character is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.visible_chars() >= self.char_count
    }

    /// Whether the cursor is drawn right now (blinks after completion)
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        if !self.cursor || !self.is_complete() {
            return false;
        }
        let since_done = self.elapsed.saturating_sub(self.typing_duration());
        (since_done.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    /// Time it takes to reveal the whole text
    #[must_use]
    pub fn typing_duration(&self) -> Duration {
        self.cadence * u32::try_from(self.char_count).unwrap_or(u32::MAX)
    }

    /// Full text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Textual progress bar that fills over a fixed duration
///
/// Progress is always recomputed from the start instant, never accumulated,
/// so a late frame simply shows a larger jump.
#[derive(Clone, Debug)]
pub struct ProgressLoader {
    label: String,
    duration: Duration,
    started: Instant,
}

impl ProgressLoader {
    /// Loader starting now
    pub fn new(label: impl Into<String>, duration: Duration) -> Self {
        Self::started_at(label, duration, Instant::now())
    }

    /// Loader with an explicit start instant
    pub fn started_at(label: impl Into<String>, duration: Duration, started: Instant) -> Self {
        Self {
            label: label.into(),
            duration,
            started,
        }
    }

    /// Percentage (0..=100) at `now`; 100 exactly when `elapsed >= duration`
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> u8 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration || self.duration.is_zero() {
            return 100;
        }
        let pct = elapsed.as_nanos() * 100 / self.duration.as_nanos();
        u8::try_from(pct.min(99)).unwrap_or(99)
    }

    /// Whether the loader is full at `now`
    #[must_use]
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 100
    }

    /// `[###-------]` for a percentage
    #[must_use]
    pub fn bar(progress: u8) -> String {
        let filled = usize::from(progress.min(100)) / 10;
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(LOADER_SLOTS - filled)
        )
    }

    /// Full loader line at `now`
    #[must_use]
    pub fn line_at(&self, now: Instant) -> String {
        let progress = self.progress_at(now);
        format!("{} {} {}%", self.label, Self::bar(progress), progress)
    }

    /// Configured duration
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CADENCE: Duration = Duration::from_millis(45);

    #[test]
    fn test_typed_text_reveals_one_char_per_tick() {
        let mut typed = TypedText::new("Initializing", CADENCE);
        assert_eq!(typed.displayed(), "");

        typed.advance(CADENCE * 4);
        assert_eq!(typed.displayed(), "Init");

        typed.advance(CADENCE / 2);
        assert_eq!(typed.displayed(), "Init");
        assert!(!typed.is_complete());
    }

    #[test]
    fn test_typed_text_reports_completion_once() {
        let mut typed = TypedText::new("abc", CADENCE);
        assert!(!typed.advance(CADENCE * 2));
        assert!(typed.advance(CADENCE));
        assert!(!typed.advance(CADENCE));
        assert_eq!(typed.displayed(), "abc");
        assert_eq!(typed.typing_duration(), CADENCE * 3);
    }

    #[test]
    fn test_typed_text_handles_multibyte() {
        let mut typed = TypedText::new("Soul & Logic 🌱", CADENCE);
        typed.advance(CADENCE * 14);
        assert_eq!(typed.displayed(), "Soul & Logic 🌱");
        assert!(typed.is_complete());
    }

    #[test]
    fn test_cursor_blinks_only_after_completion() {
        let mut typed = TypedText::new("ok", CADENCE).with_cursor();
        typed.advance(CADENCE);
        assert!(!typed.cursor_visible());

        typed.advance(CADENCE);
        assert!(typed.cursor_visible());

        typed.advance(CURSOR_BLINK);
        assert!(!typed.cursor_visible());

        typed.advance(CURSOR_BLINK);
        assert!(typed.cursor_visible());
    }

    #[test]
    fn test_no_cursor_unless_requested() {
        let mut typed = TypedText::new("ok", CADENCE);
        typed.advance(Duration::from_secs(1));
        assert!(!typed.cursor_visible());
    }

    #[test]
    fn test_loader_hits_100_exactly_at_duration() {
        let start = Instant::now();
        let loader = ProgressLoader::started_at("Loading", Duration::from_secs(6), start);

        assert_eq!(loader.progress_at(start), 0);
        assert_eq!(loader.progress_at(start + Duration::from_secs(3)), 50);
        assert_eq!(
            loader.progress_at(start + Duration::from_millis(5_999)),
            99
        );
        assert_eq!(loader.progress_at(start + Duration::from_secs(6)), 100);
        assert_eq!(loader.progress_at(start + Duration::from_secs(60)), 100);
    }

    #[test]
    fn test_loader_bar_always_has_ten_slots() {
        for progress in 0..=100u8 {
            let bar = ProgressLoader::bar(progress);
            assert_eq!(bar.len(), LOADER_SLOTS + 2, "progress {progress}");
            let filled = bar.chars().filter(|c| *c == '#').count();
            assert_eq!(filled, usize::from(progress) / 10);
        }
    }

    #[test]
    fn test_loader_line_format() {
        let start = Instant::now();
        let loader = ProgressLoader::started_at(
            "Loading multiverse gateways",
            Duration::from_secs(6),
            start,
        );
        assert_eq!(
            loader.line_at(start + Duration::from_millis(2_400)),
            "Loading multiverse gateways [####------] 40%"
        );
    }
}
