//! Orchestrator Client
//!
//! Thin wrapper around the orchestrator for TUI integration.
//! The orchestrator runs as a task on the same runtime (no network); this
//! client owns both ends of its channels.
//!
//! # Architecture
//!
//! The TUI is a thin client. It doesn't decide when stages advance or when to
//! navigate. Its job is:
//! 1. Convert terminal events to SurfaceEvents
//! 2. Send SurfaceEvents to the orchestrator
//! 3. Receive OrchestratorMessages
//! 4. Render display state based on messages

use anyhow::Context;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use sokkaverse_core::{
    BootStage, CommandKey, Orchestrator, OrchestratorMessage, PlanetId, SokkaverseConfig,
    SurfaceEvent,
};

const CHANNEL_CAPACITY: usize = 100;

/// Client for the embedded orchestrator task
pub struct OrchestratorClient {
    events: mpsc::Sender<SurfaceEvent>,
    rx: mpsc::Receiver<OrchestratorMessage>,
    task: Option<JoinHandle<()>>,
}

impl OrchestratorClient {
    /// Spawn the orchestrator; the boot sequence starts immediately
    pub fn spawn(config: SokkaverseConfig) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (events, events_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let task = tokio::spawn(Orchestrator::new(config, tx).run(events_rx));
        Self {
            events,
            rx,
            task: Some(task),
        }
    }

    /// Send raw surface event to the orchestrator
    pub async fn send_event(&self, event: SurfaceEvent) -> anyhow::Result<()> {
        self.events
            .send(event)
            .await
            .context("orchestrator task has stopped")
    }

    /// Forward a command-line keystroke
    pub async fn key(&self, key: CommandKey) -> anyhow::Result<()> {
        self.send_event(SurfaceEvent::key(key)).await
    }

    /// A planet was clicked or picked by hotkey
    pub async fn planet_clicked(&self, planet: PlanetId) -> anyhow::Result<()> {
        self.send_event(SurfaceEvent::planet_clicked(planet)).await
    }

    /// The ship landed at the end of `flight`
    pub async fn transit_arrived(&self, flight: u64) -> anyhow::Result<()> {
        self.send_event(SurfaceEvent::TransitArrived { flight }).await
    }

    /// A typed line finished revealing
    pub async fn typing_complete(&self, stage: BootStage) -> anyhow::Result<()> {
        self.send_event(SurfaceEvent::TypingComplete { stage }).await
    }

    /// Receive all pending messages (non-blocking)
    pub fn recv_all(&mut self) -> Vec<OrchestratorMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Wait for the next message
    pub async fn recv(&mut self) -> Option<OrchestratorMessage> {
        self.rx.recv().await
    }

    /// Tear the orchestrator down and wait for its loop to finish
    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        if let Err(e) = self.send_event(SurfaceEvent::Teardown).await {
            tracing::debug!("Teardown not delivered: {e}");
        }
        if let Some(task) = self.task.take() {
            task.await.context("orchestrator task panicked")?;
        }
        Ok(())
    }
}

impl Drop for OrchestratorClient {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sokkaverse_core::Route;

    #[tokio::test(start_paused = true)]
    async fn test_boot_reaches_interactive_and_navigates() {
        let mut client = OrchestratorClient::spawn(SokkaverseConfig::default());

        loop {
            match client.recv().await {
                Some(OrchestratorMessage::StageEntered {
                    stage: BootStage::Interactive,
                    ..
                }) => break,
                Some(_) => {}
                None => panic!("orchestrator hung up during boot"),
            }
        }

        client.planet_clicked(PlanetId::Soul).await.unwrap();
        client.transit_arrived(1).await.unwrap();
        loop {
            match client.recv().await {
                Some(OrchestratorMessage::Navigate { route, path }) => {
                    assert_eq!(route, Route::Planet(PlanetId::Soul));
                    assert_eq!(path, "/soul");
                    break;
                }
                Some(_) => {}
                None => panic!("orchestrator hung up before navigating"),
            }
        }

        client.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_recv_all_drains_without_blocking() {
        let mut client = OrchestratorClient::spawn(SokkaverseConfig::default());
        tokio::task::yield_now().await;
        let first = client.recv_all();
        assert!(matches!(
            first.first(),
            Some(OrchestratorMessage::StageEntered {
                stage: BootStage::Booting,
                ..
            })
        ));
        assert!(client.recv_all().is_empty());
        client.shutdown().await.unwrap();
    }
}
