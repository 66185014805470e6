//! Per-category advisory text generation.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use lorekeeper_core::event::{AdvisoryEvent, EventCategory};
use lorekeeper_core::translate::Translator;
use lorekeeper_docs::index::DocumentIndex;

use crate::keys;
use crate::template;

/// Most characters of the controls section appended to the tutorial
/// opening line.
const CONTROLS_EXCERPT_CHARS: usize = 200;
/// Most characters of the tips section served for a requested hint.
const TIPS_EXCERPT_CHARS: usize = 150;

/// Resolves advisory display text for gameplay events.
///
/// Dispatches on the event category to one of eight generation rules, then
/// runs the produced context through the category's display template. All
/// prose comes from the injected translator; this type only selects keys,
/// truncates excerpts, and formats.
pub struct AdvisoryResolver {
    translator: Arc<dyn Translator>,
    templates: HashMap<EventCategory, String>,
}

impl AdvisoryResolver {
    /// Creates a resolver over `translator` with the default `{context}`
    /// template for every category.
    #[must_use]
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            templates: HashMap::new(),
        }
    }

    /// Overrides the display template for `category`. Templates support the
    /// named placeholders `{context}`, `{level}`, and `{area}`.
    pub fn set_template(&mut self, category: EventCategory, template: impl Into<String>) {
        self.templates.insert(category, template.into());
    }

    /// Produces the advisory text for `event`, consulting `index` where a
    /// category's rule reads documentation. An invalid event resolves to
    /// the fixed invalid-event message.
    #[must_use]
    pub fn resolve(&self, event: &AdvisoryEvent, index: &DocumentIndex) -> String {
        if !event.is_valid() {
            return self.translator.translate(keys::INVALID_EVENT);
        }
        tracing::debug!(category = %event.category, "resolving advisory text");
        let context = self.context_for(event, index);
        let template = self
            .templates
            .get(&event.category)
            .map_or("{context}", String::as_str);
        template::render(
            template,
            &[
                ("context", &context),
                ("level", event.level_id.as_deref().unwrap_or("")),
                ("area", event.context_id.as_deref().unwrap_or("")),
            ],
        )
    }

    fn context_for(&self, event: &AdvisoryEvent, index: &DocumentIndex) -> String {
        match event.category {
            EventCategory::TutorialStart => self.tutorial_start(index),
            EventCategory::MinigameStart => self.minigame_start(event, index),
            EventCategory::PlayerError => self.player_error(event),
            EventCategory::ProgressUpdate => self.progress_update(event),
            EventCategory::Achievement => self.translator.translate_args(
                keys::ACHIEVEMENT_UNLOCKED,
                &[("name", event.context_id.as_deref().unwrap_or(""))],
            ),
            EventCategory::NodeEntered => self.translator.translate_args(
                keys::NODE_ENTERED,
                &[("node", event.context_id.as_deref().unwrap_or(""))],
            ),
            EventCategory::HintRequested => self.hint_requested(index),
            EventCategory::GameCompleted => self.translator.translate(keys::GAME_COMPLETED),
            // Unreachable past the validity gate; fail closed regardless.
            EventCategory::Unknown => self.translator.translate(keys::INVALID_EVENT),
        }
    }

    fn tutorial_start(&self, index: &DocumentIndex) -> String {
        match index.category_section("controls") {
            Some(body) if !body.is_empty() => {
                let excerpt = truncate_chars(body, CONTROLS_EXCERPT_CHARS);
                format!(
                    "{} {excerpt}",
                    self.translator.translate(keys::TUTORIAL_CONTROLS)
                )
            }
            _ => self.translator.translate(keys::TUTORIAL_GENERIC),
        }
    }

    fn minigame_start(&self, event: &AdvisoryEvent, index: &DocumentIndex) -> String {
        let game = payload_str(event, "game_type", "unknown");
        match index.topic(game) {
            Some(doc) => self.translator.translate_args(
                keys::MINIGAME_START,
                &[("game", game), ("objective", &doc.objective)],
            ),
            None => self
                .translator
                .translate_args(keys::MINIGAME_GENERIC, &[("game", game)]),
        }
    }

    fn player_error(&self, event: &AdvisoryEvent) -> String {
        let code = payload_str(event, "error_code", "unknown");
        let attempt = payload_number(event, "attempt", 1.0);
        let key = match code {
            "wrong_answer" => keys::PLAYER_ERROR_WRONG_ANSWER,
            "timeout" => keys::PLAYER_ERROR_TIMEOUT,
            "invalid_input" => keys::PLAYER_ERROR_INVALID_INPUT,
            _ => keys::PLAYER_ERROR_GENERIC,
        };
        let mut text = self.translator.translate(key);
        if attempt > 2.0 {
            text.push(' ');
            text.push_str(&self.translator.translate(keys::HINT_SUGGESTION));
        }
        text
    }

    fn progress_update(&self, event: &AdvisoryEvent) -> String {
        let completion = payload_number(event, "completion", 0.0);
        let key = if completion >= 0.75 {
            keys::PROGRESS_HIGH
        } else if completion >= 0.5 {
            keys::PROGRESS_MID
        } else {
            keys::PROGRESS_LOW
        };
        self.translator.translate(key)
    }

    fn hint_requested(&self, index: &DocumentIndex) -> String {
        match index.category_section("tips") {
            Some(body) if !body.is_empty() => truncate_chars(body, TIPS_EXCERPT_CHARS),
            _ => self.translator.translate(keys::HINT_GENERIC),
        }
    }
}

fn payload_str<'a>(event: &'a AdvisoryEvent, key: &str, default: &'a str) -> &'a str {
    event
        .payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
}

fn payload_number(event: &AdvisoryEvent, key: &str, default: f64) -> f64 {
    event
        .payload
        .get(key)
        .and_then(Value::as_f64)
        .unwrap_or(default)
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
