//! The single-worker state machine driving advisory processing.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use lorekeeper_core::clock::Clock;
use lorekeeper_core::event::AdvisoryEvent;
use lorekeeper_core::observe::AdvisoryObserver;
use lorekeeper_core::reader::FileReader;
use lorekeeper_core::scheduler::Scheduler;
use lorekeeper_core::state::AdvisorState;
use lorekeeper_docs::index::DocumentIndex;
use lorekeeper_resolver::resolve::AdvisoryResolver;

use crate::config::AdvisorConfig;
use crate::controller::AdvisorDeps;
use crate::progress::ProgressState;

/// Commands accepted by the worker task.
pub(crate) enum Command {
    HandleEvent(Box<AdvisoryEvent>),
    Acknowledge,
    ClearQueue,
    Reset,
    Progress(oneshot::Sender<ProgressState>),
    LoadPrimary(PathBuf),
    LoadTopic(String, PathBuf),
}

/// Outcome of waiting for acknowledgement of a displayed advisory.
enum AckOutcome {
    /// A collaborator acknowledged, or the auto-acknowledge delay elapsed.
    Advance,
    /// The queue was cleared or the controller reset; stop this run.
    Interrupted,
    /// Every handle was dropped; shut down.
    Shutdown,
}

/// Owns the pending queue, the state machine, the progress counters, and
/// the document index. Exactly one instance runs per controller, so "at
/// most one process step active" holds by construction.
pub(crate) struct AdvisorWorker {
    config: AdvisorConfig,
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn Scheduler>,
    reader: Arc<dyn FileReader>,
    observers: Vec<Arc<dyn AdvisoryObserver>>,
    resolver: AdvisoryResolver,
    index: DocumentIndex,
    commands: mpsc::UnboundedReceiver<Command>,
    queue: VecDeque<AdvisoryEvent>,
    state: AdvisorState,
    progress: ProgressState,
}

impl AdvisorWorker {
    pub(crate) fn new(
        config: AdvisorConfig,
        deps: AdvisorDeps,
        commands: mpsc::UnboundedReceiver<Command>,
    ) -> Self {
        Self {
            config,
            clock: deps.clock,
            scheduler: deps.scheduler,
            reader: deps.reader,
            observers: deps.observers,
            resolver: AdvisoryResolver::new(deps.translator),
            index: DocumentIndex::new(),
            commands,
            queue: VecDeque::new(),
            state: AdvisorState::Idle,
            progress: ProgressState::default(),
        }
    }

    /// Runs until every controller handle is dropped.
    ///
    /// Invariant: the worker is idle with an empty queue between top-level
    /// commands — every nested flow (process run, error excursion) runs to
    /// completion before the next `recv`.
    pub(crate) async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            self.on_command(command).await;
        }
        tracing::debug!("all controller handles dropped, worker stopping");
    }

    async fn on_command(&mut self, command: Command) {
        match command {
            Command::HandleEvent(event) => self.on_event(*event).await,
            // Between steps there is nothing to acknowledge.
            Command::Acknowledge => tracing::debug!("acknowledge while idle ignored"),
            Command::ClearQueue => self.clear_queue(),
            Command::Reset => self.reset(),
            Command::Progress(reply) => {
                let _ = reply.send(self.progress.clone());
            }
            Command::LoadPrimary(path) => self.index.load_primary(self.reader.as_ref(), &path),
            Command::LoadTopic(topic_id, path) => {
                self.index.load_topic(&topic_id, self.reader.as_ref(), &path);
            }
        }
    }

    async fn on_event(&mut self, event: AdvisoryEvent) {
        if !event.is_valid() {
            let message = format!("invalid event rejected: {}", event.describe());
            self.report_error(&message);
            self.error_excursion().await;
            return;
        }
        self.queue.push_back(event);
        if self.state == AdvisorState::Idle {
            self.process_queue().await;
        }
    }

    /// One full processing run: dequeue, compose, display, wait for
    /// acknowledgement, until the queue drains or the run is interrupted.
    async fn process_queue(&mut self) {
        loop {
            let Some(event) = self.queue.pop_front() else {
                self.set_state(AdvisorState::Idle);
                self.notify(|o| o.on_processing_complete());
                return;
            };

            self.set_state(AdvisorState::Listening);
            self.set_state(AdvisorState::Composing);

            let started = self.clock.now();
            let text = self.resolver.resolve(&event, &self.index);
            let elapsed_ms = self
                .clock
                .now()
                .signed_duration_since(started)
                .num_milliseconds();
            let bound_ms = i64::try_from(self.config.event_timeout.as_millis()).unwrap_or(i64::MAX);

            if elapsed_ms > bound_ms {
                // Soft watchdog: the step ran to completion, but its text is
                // stale past the bound, so it is dropped rather than shown.
                self.report_error(&format!(
                    "processing of {} took {elapsed_ms} ms, exceeding the {bound_ms} ms bound",
                    event.category
                ));
                self.error_excursion().await;
                continue;
            }

            self.progress.record_display(event.category, self.clock.now());
            self.set_state(AdvisorState::WaitingForAck);
            self.notify(|o| o.on_ready_to_display(&text));

            match self.await_acknowledge().await {
                AckOutcome::Advance => {}
                AckOutcome::Interrupted | AckOutcome::Shutdown => return,
            }
        }
    }

    /// Races a collaborator acknowledgement against the auto-acknowledge
    /// delay. Commands arriving during the wait are serviced inline so a
    /// long-poll collaborator can still queue events, query progress, or
    /// clear the queue.
    async fn await_acknowledge(&mut self) -> AckOutcome {
        let scheduler = Arc::clone(&self.scheduler);
        let mut sleep = scheduler.sleep(self.config.ack_delay);
        loop {
            tokio::select! {
                biased;
                () = &mut sleep => return AckOutcome::Advance,
                command = self.commands.recv() => match command {
                    Some(Command::Acknowledge) => return AckOutcome::Advance,
                    Some(Command::ClearQueue) => {
                        self.clear_queue();
                        return AckOutcome::Interrupted;
                    }
                    Some(Command::Reset) => {
                        self.reset();
                        return AckOutcome::Interrupted;
                    }
                    Some(Command::HandleEvent(event)) => {
                        if event.is_valid() {
                            self.queue.push_back(*event);
                        } else {
                            // The in-flight display stays undisturbed; the
                            // rejection is reported and counted only.
                            self.report_error(&format!(
                                "invalid event rejected: {}",
                                event.describe()
                            ));
                        }
                    }
                    Some(Command::Progress(reply)) => {
                        let _ = reply.send(self.progress.clone());
                    }
                    Some(Command::LoadPrimary(path)) => {
                        self.index.load_primary(self.reader.as_ref(), &path);
                    }
                    Some(Command::LoadTopic(topic_id, path)) => {
                        self.index.load_topic(&topic_id, self.reader.as_ref(), &path);
                    }
                    None => return AckOutcome::Shutdown,
                },
            }
        }
    }

    /// Error-state excursion: enter `Error`, hold for the recovery delay,
    /// return to `Idle`. Unconditional regardless of the error's cause;
    /// commands submitted meanwhile stay buffered in the channel.
    async fn error_excursion(&mut self) {
        self.set_state(AdvisorState::Error);
        self.scheduler.sleep(self.config.recovery_delay).await;
        self.set_state(AdvisorState::Idle);
    }

    fn clear_queue(&mut self) {
        self.queue.clear();
        self.set_state(AdvisorState::Idle);
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.progress.reset();
        self.set_state(AdvisorState::Idle);
    }

    fn report_error(&mut self, message: &str) {
        tracing::error!("{message}");
        self.progress.record_error();
        self.notify(|o| o.on_error_occurred(message));
    }

    fn set_state(&mut self, new: AdvisorState) {
        if new == self.state {
            return;
        }
        let old = self.state;
        self.state = new;
        tracing::debug!(%old, %new, "advisor state changed");
        self.notify(|o| o.on_state_changed(old, new));
    }

    fn notify(&self, f: impl Fn(&dyn AdvisoryObserver)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }
}
