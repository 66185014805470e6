//! Shared helpers for controller integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use lorekeeper_advisor::config::AdvisorConfig;
use lorekeeper_advisor::controller::{AdvisorDeps, AdvisoryController};
use lorekeeper_core::clock::Clock;
use lorekeeper_core::event::{AdvisoryEvent, EventCategory};
use lorekeeper_core::scheduler::Scheduler;
use lorekeeper_test_support::{
    FixedClock, InMemoryReader, NoopScheduler, RecordingObserver, TranslatorStub,
};

/// Fixed timestamp used across all integration tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// Catalog with the strings the scenarios assert on.
pub fn stub_translator() -> TranslatorStub {
    TranslatorStub::new()
        .with("advisor.invalid_event", "Could not understand that event.")
        .with("advisor.tutorial.generic", "Welcome to the tutorial.")
        .with("advisor.minigame.start", "Starting {game}: {objective}")
        .with("advisor.minigame.generic", "Starting {game}. Good luck!")
        .with("advisor.achievement.unlocked", "Achievement unlocked: {name}!")
        .with("advisor.node.entered", "You entered {node}.")
        .with("advisor.hint.generic", "Check your objectives.")
        .with("advisor.game.completed", "You finished the game!")
}

/// A spawned controller plus the doubles the assertions read.
pub struct TestHarness {
    pub controller: AdvisoryController,
    pub observer: Arc<RecordingObserver>,
}

/// Spawns a controller over a fixed clock and the given scheduler/reader.
pub fn spawn_controller(
    scheduler: Arc<dyn Scheduler>,
    reader: InMemoryReader,
) -> TestHarness {
    spawn_controller_with_clock(Arc::new(FixedClock(fixed_now())), scheduler, reader)
}

/// Spawns a controller with every seam explicit.
pub fn spawn_controller_with_clock(
    clock: Arc<dyn Clock>,
    scheduler: Arc<dyn Scheduler>,
    reader: InMemoryReader,
) -> TestHarness {
    let observer = Arc::new(RecordingObserver::new());
    let controller = AdvisoryController::spawn(
        AdvisorConfig::default(),
        AdvisorDeps {
            clock,
            scheduler,
            reader: Arc::new(reader),
            translator: Arc::new(stub_translator()),
            observers: vec![Arc::clone(&observer) as _],
        },
    );
    TestHarness {
        controller,
        observer,
    }
}

/// Spawns a controller whose delays all complete immediately.
pub fn spawn_fast_controller() -> TestHarness {
    spawn_controller(Arc::new(NoopScheduler), InMemoryReader::new())
}

/// A valid tutorial-start event scoped to `context`.
pub fn tutorial_event(context: &str) -> AdvisoryEvent {
    AdvisoryEvent::new(EventCategory::TutorialStart, &FixedClock(fixed_now()))
        .with_context(context)
}

/// A valid hint-requested event.
pub fn hint_event() -> AdvisoryEvent {
    AdvisoryEvent::new(EventCategory::HintRequested, &FixedClock(fixed_now()))
}

/// A valid game-completed event.
pub fn completed_event() -> AdvisoryEvent {
    AdvisoryEvent::new(EventCategory::GameCompleted, &FixedClock(fixed_now()))
}
