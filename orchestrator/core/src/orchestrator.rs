//! Orchestrator - Boot Sequence and Navigation
//!
//! The Orchestrator owns everything that changes over time on the home screen:
//! - the boot stage and its advance timer
//! - the command line and the append-only output log
//! - the pending destination and the arrival grace timer
//!
//! # Design Philosophy
//!
//! Like the rest of the core it is surface-agnostic. Surfaces report what
//! happened through [`SurfaceEvent`]; the orchestrator answers with
//! [`OrchestratorMessage`]s. Every delay lives in a [`TimerSlot`] owned by the
//! orchestrator, so dropping it (or the task running [`Orchestrator::run`])
//! releases all pending work at once.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::SokkaverseConfig;
use crate::console::{echo_lines, CommandKey, CommandLine, OutputLog};
use crate::events::SurfaceEvent;
use crate::mailbox::Mailbox;
use crate::messages::OrchestratorMessage;
use crate::planets::{Coordinate, PlanetId};
use crate::routes::Route;
use crate::stage::{AdvancePolicy, BootStage};
use crate::timer::TimerSlot;

/// Orchestrator errors
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// The surface dropped its receiving end
    #[error("Surface channel closed")]
    SurfaceClosed,
}

/// A planet the ship is heading for
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Destination {
    /// Which planet; only the orchestrator cares
    pub planet: PlanetId,
    /// Where it is; the only part the transit indicator sees
    pub position: Coordinate,
    /// Flight number; only an arrival carrying it completes this destination
    pub flight: u64,
}

/// The boot and navigation orchestrator
pub struct Orchestrator {
    config: SokkaverseConfig,
    /// `None` until [`Orchestrator::start`]
    stage: Option<BootStage>,
    /// Fires with the stage it was armed for
    stage_timer: TimerSlot<BootStage>,
    arrival_timer: TimerSlot<()>,
    command_line: CommandLine,
    output_log: OutputLog,
    destination: Mailbox<Destination>,
    /// Last flight number handed out
    flights: u64,
    torn_down: bool,
    tx: mpsc::Sender<OrchestratorMessage>,
}

impl Orchestrator {
    /// Create an orchestrator that reports to `tx`
    #[must_use]
    pub fn new(config: SokkaverseConfig, tx: mpsc::Sender<OrchestratorMessage>) -> Self {
        Self {
            config,
            stage: None,
            stage_timer: TimerSlot::new("stage"),
            arrival_timer: TimerSlot::new("arrival"),
            command_line: CommandLine::new(),
            output_log: OutputLog::new(),
            destination: Mailbox::new(),
            flights: 0,
            torn_down: false,
            tx,
        }
    }

    /// Current boot stage
    #[must_use]
    pub fn stage(&self) -> Option<BootStage> {
        self.stage
    }

    /// The command line being edited
    #[must_use]
    pub fn command_line(&self) -> &CommandLine {
        &self.command_line
    }

    /// The destination waiting for an arrival, if any
    #[must_use]
    pub fn pending_destination(&self) -> Option<&Destination> {
        self.destination.peek()
    }

    /// Whether a stage timer is pending
    #[must_use]
    pub fn stage_timer_armed(&self) -> bool {
        self.stage_timer.is_armed()
    }

    /// Whether the arrival grace timer is pending
    #[must_use]
    pub fn arrival_pending(&self) -> bool {
        self.arrival_timer.is_armed()
    }

    /// Whether teardown has been processed
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Enter `Booting`
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::SurfaceClosed`] if the surface is gone.
    pub async fn start(&mut self) -> Result<(), OrchestratorError> {
        if self.stage.is_some() {
            tracing::debug!("Orchestrator already started");
            return Ok(());
        }
        self.enter_stage(BootStage::Booting).await?;

        if self.config.skip_boot {
            tracing::info!("Skipping boot sequence");
            while let Some(next) = self.stage.and_then(BootStage::next) {
                self.enter_stage(next).await?;
            }
        }
        Ok(())
    }

    /// Drive the orchestrator until teardown or until either channel closes
    pub async fn run(mut self, mut events: mpsc::Receiver<SurfaceEvent>) {
        if let Err(e) = self.start().await {
            tracing::warn!("Orchestrator stopped before booting: {}", e);
            return;
        }

        loop {
            let result = tokio::select! {
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => {
                        tracing::info!("Surface event channel closed");
                        break;
                    }
                },
                stage = self.stage_timer.fired() => self.on_stage_timer(stage).await,
                () = self.arrival_timer.fired() => self.on_arrival_grace().await,
            };

            if let Err(e) = result {
                tracing::warn!("Orchestrator stopping: {}", e);
                break;
            }
            if self.torn_down {
                break;
            }
        }
        tracing::debug!("Orchestrator loop finished");
    }

    /// Handle one event from the surface
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::SurfaceClosed`] if a reply cannot be sent.
    pub async fn handle_event(&mut self, event: SurfaceEvent) -> Result<(), OrchestratorError> {
        if self.torn_down {
            tracing::debug!(?event, "Event after teardown ignored");
            return Ok(());
        }

        match event {
            SurfaceEvent::Keystroke { key } => self.handle_key(key).await,
            SurfaceEvent::TypingComplete { stage } => {
                self.handle_typing_complete(stage);
                Ok(())
            }
            SurfaceEvent::PlanetClicked { planet, position } => {
                self.handle_planet_click(planet, position).await
            }
            SurfaceEvent::TransitArrived { flight } => {
                self.handle_arrival(flight);
                Ok(())
            }
            SurfaceEvent::Teardown => {
                self.teardown();
                Ok(())
            }
        }
    }

    // ========================================================================
    // Boot sequence
    // ========================================================================

    async fn enter_stage(&mut self, stage: BootStage) -> Result<(), OrchestratorError> {
        if let Some(current) = self.stage {
            if stage <= current {
                tracing::debug!(%current, %stage, "Refusing to move stage backwards");
                return Ok(());
            }
        }

        tracing::info!(%stage, "Boot stage: {}", stage.description());
        self.stage = Some(stage);
        self.stage_timer.disarm();

        let display = self.config.timings.display_for(stage);
        self.send(OrchestratorMessage::StageEntered { stage, display })
            .await?;

        if self.config.skip_boot {
            return Ok(());
        }
        if let Some(delay) = self.advance_delay(stage) {
            self.stage_timer.arm(stage, delay);
        }
        Ok(())
    }

    /// Delay armed on entering `stage`
    ///
    /// Typing stages under [`AdvancePolicy::OnTypingComplete`] arm nothing here;
    /// their timer starts when the surface reports the line finished.
    fn advance_delay(&self, stage: BootStage) -> Option<Duration> {
        match self.config.advance_policy {
            AdvancePolicy::OnTypingComplete if stage.is_typing() => None,
            _ => self.config.timings.timed_delay(stage),
        }
    }

    async fn on_stage_timer(&mut self, armed_for: BootStage) -> Result<(), OrchestratorError> {
        if self.stage != Some(armed_for) {
            tracing::debug!(%armed_for, "Stale stage timer ignored");
            return Ok(());
        }
        match armed_for.next() {
            Some(next) => self.enter_stage(next).await,
            None => Ok(()),
        }
    }

    fn handle_typing_complete(&mut self, stage: BootStage) {
        if self.config.advance_policy != AdvancePolicy::OnTypingComplete {
            tracing::trace!(%stage, "Typing complete (timed policy, ignored)");
            return;
        }
        if self.stage != Some(stage) || !stage.is_typing() {
            tracing::debug!(%stage, current = ?self.stage, "Typing complete for inactive stage");
            return;
        }
        if self.stage_timer.is_armed() {
            return;
        }
        self.stage_timer.arm(stage, self.config.timings.buffer);
    }

    // ========================================================================
    // Console
    // ========================================================================

    async fn handle_key(&mut self, key: CommandKey) -> Result<(), OrchestratorError> {
        if self.stage != Some(BootStage::Interactive) {
            tracing::debug!(?key, stage = ?self.stage, "Keystroke before prompt ignored");
            return Ok(());
        }

        match key {
            CommandKey::Char(c) => {
                self.command_line.push(c);
                self.send_command_line().await
            }
            CommandKey::Backspace => {
                self.command_line.backspace();
                self.send_command_line().await
            }
            CommandKey::Enter => {
                let raw = self.command_line.take();
                tracing::debug!(command = %raw.trim(), "Command submitted");
                for line in echo_lines(&raw) {
                    let index = self.output_log.push(line.clone());
                    self.send(OrchestratorMessage::OutputAppended { index, line })
                        .await?;
                }
                tracing::trace!(lines = self.output_log.len(), "Output log grew");
                self.send_command_line().await
            }
        }
    }

    async fn send_command_line(&self) -> Result<(), OrchestratorError> {
        self.send(OrchestratorMessage::CommandLine {
            text: self.command_line.as_str().to_string(),
        })
        .await
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    async fn handle_planet_click(
        &mut self,
        planet: PlanetId,
        position: Coordinate,
    ) -> Result<(), OrchestratorError> {
        self.flights += 1;
        let dest = Destination {
            planet,
            position,
            flight: self.flights,
        };
        if let Some(previous) = self.destination.put(dest) {
            tracing::debug!(
                discarded = %previous.planet,
                pending = %dest.planet,
                "Destination overwritten"
            );
        }
        // The ship re-targets and will report a fresh arrival.
        self.arrival_timer.disarm();

        self.send(OrchestratorMessage::DestinationSet {
            position: dest.position,
            flight: dest.flight,
        })
        .await
    }

    fn handle_arrival(&mut self, flight: u64) {
        match self.destination.peek() {
            None => tracing::debug!(flight, "Arrival with nothing pending"),
            Some(dest) if dest.flight != flight => {
                tracing::debug!(flight, pending = dest.flight, "Stale arrival ignored");
            }
            Some(_) => {
                self.arrival_timer.arm((), self.config.arrival_grace);
            }
        }
    }

    async fn on_arrival_grace(&mut self) -> Result<(), OrchestratorError> {
        let Some(dest) = self.destination.take() else {
            return Ok(());
        };
        let route = Route::for_planet(dest.planet);
        let path = self.config.base_path.path_of(route);
        tracing::info!(planet = %dest.planet, %path, "Navigating");

        self.send(OrchestratorMessage::Navigate { route, path })
            .await?;
        self.send(OrchestratorMessage::DestinationCleared).await
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    fn teardown(&mut self) {
        self.stage_timer.disarm();
        self.arrival_timer.disarm();
        self.destination.clear();
        self.torn_down = true;
        tracing::info!("Orchestrator torn down");
    }

    async fn send(&self, msg: OrchestratorMessage) -> Result<(), OrchestratorError> {
        self.tx
            .send(msg)
            .await
            .map_err(|_| OrchestratorError::SurfaceClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::StageDisplay;
    use pretty_assertions::assert_eq;

    fn orchestrator() -> (Orchestrator, mpsc::Receiver<OrchestratorMessage>) {
        let (tx, rx) = mpsc::channel(64);
        (Orchestrator::new(SokkaverseConfig::default(), tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_enters_booting() {
        let (mut orch, mut rx) = orchestrator();
        assert_eq!(orch.stage(), None);

        orch.start().await.unwrap();
        assert_eq!(orch.stage(), Some(BootStage::Booting));
        assert!(orch.stage_timer_armed());

        let msg = rx.recv().await.unwrap();
        assert!(matches!(
            msg,
            OrchestratorMessage::StageEntered {
                stage: BootStage::Booting,
                display: StageDisplay::Typed { .. }
            }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystrokes_ignored_while_booting() {
        let (mut orch, mut rx) = orchestrator();
        orch.start().await.unwrap();
        let _ = rx.recv().await;

        orch.handle_event(SurfaceEvent::key(CommandKey::Char('x')))
            .await
            .unwrap();
        assert!(orch.command_line().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_arrival_without_destination_is_noop() {
        let (mut orch, mut rx) = orchestrator();
        orch.handle_event(SurfaceEvent::TransitArrived { flight: 1 })
            .await
            .unwrap();
        assert!(!orch.arrival_pending());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_overwrites_pending() {
        let (mut orch, mut rx) = orchestrator();
        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Design))
            .await
            .unwrap();
        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Lab))
            .await
            .unwrap();

        assert_eq!(
            orch.pending_destination().map(|d| d.planet),
            Some(PlanetId::Lab)
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            OrchestratorMessage::DestinationSet {
                position: Coordinate::new(150.0, 250.0),
                flight: 1,
            }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            OrchestratorMessage::DestinationSet {
                position: PlanetId::Lab.descriptor().position,
                flight: 2,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_during_grace_cancels_it() {
        let (mut orch, _rx) = orchestrator();
        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Film))
            .await
            .unwrap();
        orch.handle_event(SurfaceEvent::TransitArrived { flight: 1 })
            .await
            .unwrap();
        assert!(orch.arrival_pending());

        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Soul))
            .await
            .unwrap();
        assert!(!orch.arrival_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_arrival_from_overwritten_flight_is_ignored() {
        let (mut orch, _rx) = orchestrator();
        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Design))
            .await
            .unwrap();
        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Lab))
            .await
            .unwrap();

        // The ship was still on the Design leg when it landed
        orch.handle_event(SurfaceEvent::TransitArrived { flight: 1 })
            .await
            .unwrap();
        assert!(!orch.arrival_pending());
        assert_eq!(
            orch.pending_destination().map(|d| d.planet),
            Some(PlanetId::Lab)
        );

        orch.handle_event(SurfaceEvent::TransitArrived { flight: 2 })
            .await
            .unwrap();
        assert!(orch.arrival_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_releases_everything() {
        let (mut orch, _rx) = orchestrator();
        orch.start().await.unwrap();
        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Code))
            .await
            .unwrap();
        orch.handle_event(SurfaceEvent::TransitArrived { flight: 1 })
            .await
            .unwrap();

        orch.handle_event(SurfaceEvent::Teardown).await.unwrap();
        assert!(orch.is_torn_down());
        assert!(!orch.stage_timer_armed());
        assert!(!orch.arrival_pending());
        assert!(orch.pending_destination().is_none());

        orch.handle_event(SurfaceEvent::planet_clicked(PlanetId::Code))
            .await
            .unwrap();
        assert!(orch.pending_destination().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_boot_fast_forwards_in_order() {
        let (tx, mut rx) = mpsc::channel(64);
        let mut config = SokkaverseConfig::default();
        config.skip_boot = true;
        let mut orch = Orchestrator::new(config, tx);

        orch.start().await.unwrap();
        assert_eq!(orch.stage(), Some(BootStage::Interactive));
        assert!(!orch.stage_timer_armed());

        let mut stages = Vec::new();
        while let Ok(OrchestratorMessage::StageEntered { stage, .. }) = rx.try_recv() {
            stages.push(stage);
        }
        assert_eq!(
            stages,
            vec![
                BootStage::Booting,
                BootStage::Loading,
                BootStage::Ready,
                BootStage::Interactive
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_surface_is_an_error() {
        let (mut orch, rx) = orchestrator();
        drop(rx);
        let result = orch.start().await;
        assert!(matches!(result, Err(OrchestratorError::SurfaceClosed)));
    }
}
