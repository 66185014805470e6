//! Public handle for the advisory controller.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use lorekeeper_core::clock::Clock;
use lorekeeper_core::event::AdvisoryEvent;
use lorekeeper_core::observe::AdvisoryObserver;
use lorekeeper_core::reader::FileReader;
use lorekeeper_core::scheduler::Scheduler;
use lorekeeper_core::translate::Translator;

use crate::config::AdvisorConfig;
use crate::progress::ProgressState;
use crate::worker::{AdvisorWorker, Command};

/// Collaborator seams injected into a controller at spawn time.
pub struct AdvisorDeps {
    /// Time source for event elapsed measurement and counters.
    pub clock: Arc<dyn Clock>,
    /// Timer for the auto-acknowledge and error-recovery delays.
    pub scheduler: Arc<dyn Scheduler>,
    /// Source of advisory documents.
    pub reader: Arc<dyn FileReader>,
    /// Localization backend for the resolver's message keys.
    pub translator: Arc<dyn Translator>,
    /// Collaborators receiving display and lifecycle notifications.
    pub observers: Vec<Arc<dyn AdvisoryObserver>>,
}

/// Cloneable handle to a spawned advisory controller.
///
/// Every operation is a fire-and-forget send to the controller's single
/// worker task; advisory text and lifecycle changes arrive through the
/// registered observers, never as return values. The worker lives until
/// the last handle is dropped.
#[derive(Debug, Clone)]
pub struct AdvisoryController {
    commands: mpsc::UnboundedSender<Command>,
}

impl AdvisoryController {
    /// Spawns the worker task and returns its handle.
    #[must_use]
    pub fn spawn(config: AdvisorConfig, deps: AdvisorDeps) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = AdvisorWorker::new(config, deps, rx);
        tokio::spawn(worker.run());
        Self { commands: tx }
    }

    /// Submits a gameplay event for advisory processing.
    ///
    /// Returns immediately. An invalid event is reported through the error
    /// notification and counted; a valid one is enqueued in FIFO order and
    /// processed as soon as the worker is idle.
    pub fn handle_event(&self, event: AdvisoryEvent) {
        self.send(Command::HandleEvent(Box::new(event)));
    }

    /// Acknowledges the currently displayed advisory. Only effective while
    /// the controller is waiting for acknowledgement; otherwise ignored.
    pub fn acknowledge(&self) {
        self.send(Command::Acknowledge);
    }

    /// Drops all pending events and returns the controller to idle.
    /// Progress counters are untouched. An already-emitted ready
    /// notification cannot be retracted.
    pub fn clear_queue(&self) {
        self.send(Command::ClearQueue);
    }

    /// Clears the queue and zeroes every progress counter. Idempotent.
    pub fn reset(&self) {
        self.send(Command::Reset);
    }

    /// Loads the primary advisory document from `path`. An unreadable
    /// source is non-fatal; previously loaded content keeps serving.
    pub fn load_primary_document(&self, path: impl Into<PathBuf>) {
        self.send(Command::LoadPrimary(path.into()));
    }

    /// Loads the topic document for `topic_id` from `path`, with the same
    /// degraded-mode failure handling as the primary document.
    pub fn load_topic_document(&self, topic_id: impl Into<String>, path: impl Into<PathBuf>) {
        self.send(Command::LoadTopic(topic_id.into(), path.into()));
    }

    /// Returns a snapshot of the progress counters.
    ///
    /// The reply is sequenced behind every command submitted before it, so
    /// it reflects at least the receipt (and, outside of parked delays, the
    /// completion) of that earlier work.
    pub async fn progress(&self) -> ProgressState {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Progress(tx));
        rx.await.unwrap_or_default()
    }

    fn send(&self, command: Command) {
        // The worker outlives every handle; a closed channel only occurs
        // during shutdown, where dropping the command is the right outcome.
        let _ = self.commands.send(command);
    }
}
