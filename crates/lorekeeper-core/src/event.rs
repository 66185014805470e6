//! The gameplay event record and its validity contract.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::AdvisoryError;

/// Category of a gameplay event submitted to the advisory core.
///
/// The wire label is the kebab-case form (`tutorial-start`, ...). Labels the
/// current build does not know decode to [`EventCategory::Unknown`], which
/// never passes validation — the bridge from the host game's bus cannot
/// crash the advisory pipeline with a label from a newer build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    /// A tutorial sequence began.
    TutorialStart,
    /// A minigame is about to start.
    MinigameStart,
    /// The player made a mistake inside a minigame.
    PlayerError,
    /// The player's completion fraction changed.
    ProgressUpdate,
    /// An achievement was unlocked.
    Achievement,
    /// The player entered a map node.
    NodeEntered,
    /// The player explicitly asked for a hint.
    HintRequested,
    /// The game was finished.
    GameCompleted,
    /// Fail-closed catch-all for unrecognized wire labels.
    #[serde(other)]
    Unknown,
}

impl EventCategory {
    /// Returns the kebab-case wire label for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TutorialStart => "tutorial-start",
            Self::MinigameStart => "minigame-start",
            Self::PlayerError => "player-error",
            Self::ProgressUpdate => "progress-update",
            Self::Achievement => "achievement",
            Self::NodeEntered => "node-entered",
            Self::HintRequested => "hint-requested",
            Self::GameCompleted => "game-completed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened in the host game, described for the advisory core.
///
/// Immutable after construction: the fields are public for ergonomic access,
/// but an event is created once by the bridge, handed to the controller, and
/// discarded after its advisory text is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryEvent {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// What kind of thing happened.
    pub category: EventCategory,
    /// Optional free-text scope label for the level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_id: Option<String>,
    /// Optional free-text scope label for the area/context. Required
    /// non-empty for some categories, see [`AdvisoryEvent::is_valid`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    /// Category-dependent key/value payload.
    #[serde(default)]
    pub payload: Map<String, Value>,
    /// Creation time, stamped once from the injected clock.
    pub timestamp: DateTime<Utc>,
}

impl AdvisoryEvent {
    /// Creates an event of `category` with no scope labels and an empty
    /// payload, timestamped from `clock`.
    #[must_use]
    pub fn new(category: EventCategory, clock: &dyn Clock) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            category,
            level_id: None,
            context_id: None,
            payload: Map::new(),
            timestamp: clock.now(),
        }
    }

    /// Sets the level scope label.
    #[must_use]
    pub fn with_level(mut self, level_id: impl Into<String>) -> Self {
        self.level_id = Some(level_id.into());
        self
    }

    /// Sets the area/context scope label.
    #[must_use]
    pub fn with_context(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }

    /// Adds one payload entry.
    #[must_use]
    pub fn with_payload_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    /// Whether this event satisfies its category's validity contract.
    ///
    /// Pure function of category, context, and payload keys. The controller
    /// never processes an event for which this returns false.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self.category {
            EventCategory::TutorialStart
            | EventCategory::Achievement
            | EventCategory::NodeEntered => self.has_context(),
            EventCategory::MinigameStart => {
                self.has_context() && self.payload.contains_key("game_type")
            }
            EventCategory::PlayerError => self.payload.contains_key("error_code"),
            EventCategory::ProgressUpdate => self.payload.contains_key("completion"),
            EventCategory::HintRequested | EventCategory::GameCompleted => true,
            EventCategory::Unknown => false,
        }
    }

    /// Deterministic human-readable rendering, used in error notifications
    /// and logs.
    #[must_use]
    pub fn describe(&self) -> String {
        let level = self.level_id.as_deref().unwrap_or("-");
        let area = self.context_id.as_deref().unwrap_or("-");
        let payload = serde_json::to_string(&self.payload)
            .expect("JSON value serialization is infallible");
        format!("{} [level={level} area={area}] {payload}", self.category)
    }

    /// Serializes the event to its JSON wire form.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("JSON value serialization is infallible")
    }

    /// Decodes an event from its JSON wire form.
    ///
    /// An unrecognized category decodes to [`EventCategory::Unknown`]
    /// (fail closed) instead of erroring; the result then simply never
    /// validates.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisoryError::Serialization`] if `text` is not a
    /// well-formed event record.
    pub fn from_json(text: &str) -> Result<Self, AdvisoryError> {
        serde_json::from_str(text).map_err(|e| AdvisoryError::Serialization(e.to_string()))
    }

    fn has_context(&self) -> bool {
        self.context_id
            .as_deref()
            .is_some_and(|context| !context.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    use super::{AdvisoryEvent, EventCategory};
    use crate::clock::Clock;

    struct TestClock(DateTime<Utc>);

    impl Clock for TestClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn clock() -> TestClock {
        TestClock(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_tutorial_start_requires_non_empty_context() {
        let clock = clock();
        let valid = AdvisoryEvent::new(EventCategory::TutorialStart, &clock).with_context("intro");
        let missing = AdvisoryEvent::new(EventCategory::TutorialStart, &clock);
        let blank = AdvisoryEvent::new(EventCategory::TutorialStart, &clock).with_context("   ");

        assert!(valid.is_valid());
        assert!(!missing.is_valid());
        assert!(!blank.is_valid());
    }

    #[test]
    fn test_minigame_start_requires_context_and_game_type() {
        let clock = clock();
        let valid = AdvisoryEvent::new(EventCategory::MinigameStart, &clock)
            .with_context("lab")
            .with_payload_entry("game_type", json!("port_scanner"));
        let no_payload =
            AdvisoryEvent::new(EventCategory::MinigameStart, &clock).with_context("lab");
        let no_context = AdvisoryEvent::new(EventCategory::MinigameStart, &clock)
            .with_payload_entry("game_type", json!("port_scanner"));

        assert!(valid.is_valid());
        assert!(!no_payload.is_valid());
        assert!(!no_context.is_valid());
    }

    #[test]
    fn test_payload_keyed_categories_check_key_presence_only() {
        let clock = clock();
        let error_ok = AdvisoryEvent::new(EventCategory::PlayerError, &clock)
            .with_payload_entry("error_code", json!("timeout"));
        let error_missing = AdvisoryEvent::new(EventCategory::PlayerError, &clock);
        let progress_ok = AdvisoryEvent::new(EventCategory::ProgressUpdate, &clock)
            .with_payload_entry("completion", json!(0.5));
        let progress_missing = AdvisoryEvent::new(EventCategory::ProgressUpdate, &clock);

        assert!(error_ok.is_valid());
        assert!(!error_missing.is_valid());
        assert!(progress_ok.is_valid());
        assert!(!progress_missing.is_valid());
    }

    #[test]
    fn test_context_keyed_categories() {
        let clock = clock();
        for category in [EventCategory::Achievement, EventCategory::NodeEntered] {
            let with = AdvisoryEvent::new(category, &clock).with_context("vault");
            let without = AdvisoryEvent::new(category, &clock);
            assert!(with.is_valid(), "{category} with context");
            assert!(!without.is_valid(), "{category} without context");
        }
    }

    #[test]
    fn test_always_valid_categories() {
        let clock = clock();
        for category in [EventCategory::HintRequested, EventCategory::GameCompleted] {
            assert!(AdvisoryEvent::new(category, &clock).is_valid(), "{category}");
        }
    }

    #[test]
    fn test_unknown_category_is_never_valid() {
        let clock = clock();
        let event = AdvisoryEvent::new(EventCategory::Unknown, &clock)
            .with_context("anywhere")
            .with_payload_entry("game_type", json!("x"));

        assert!(!event.is_valid());
    }

    #[test]
    fn test_json_round_trip_preserves_all_fields() {
        let clock = clock();
        let event = AdvisoryEvent::new(EventCategory::MinigameStart, &clock)
            .with_level("level_3")
            .with_context("lab")
            .with_payload_entry("game_type", json!("port_scanner"))
            .with_payload_entry("difficulty", json!({"tier": 2}));

        let decoded = AdvisoryEvent::from_json(&event.to_json()).unwrap();

        assert_eq!(decoded, event);
    }

    #[test]
    fn test_unrecognized_category_decodes_fail_closed() {
        let clock = clock();
        let mut value = serde_json::to_value(AdvisoryEvent::new(
            EventCategory::GameCompleted,
            &clock,
        ))
        .unwrap();
        value["category"] = json!("teleport-started");

        let decoded = AdvisoryEvent::from_json(&value.to_string()).unwrap();

        assert_eq!(decoded.category, EventCategory::Unknown);
        assert!(!decoded.is_valid());
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let result = AdvisoryEvent::from_json("{not json");

        assert!(result.is_err());
    }

    #[test]
    fn test_describe_includes_category_scope_and_payload() {
        let clock = clock();
        let event = AdvisoryEvent::new(EventCategory::PlayerError, &clock)
            .with_level("level_1")
            .with_context("terminal")
            .with_payload_entry("error_code", json!("wrong_answer"));

        let description = event.describe();

        assert!(description.starts_with("player-error"));
        assert!(description.contains("level=level_1"));
        assert!(description.contains("area=terminal"));
        assert!(description.contains("wrong_answer"));
    }
}
