//! Built-in English message catalog.
//!
//! The advisory core only selects message keys; prose is a collaborator
//! concern, and this console collaborator supplies an English set.

use std::collections::HashMap;

use lorekeeper_core::translate::Translator;

/// Translator over a fixed in-process catalog.
#[derive(Debug)]
pub struct CatalogTranslator {
    entries: HashMap<&'static str, &'static str>,
}

impl CatalogTranslator {
    /// The English catalog.
    #[must_use]
    pub fn english() -> Self {
        let entries = HashMap::from([
            ("advisor.invalid_event", "That event could not be understood."),
            ("advisor.tutorial.controls", "Welcome! Here is how the controls work:"),
            (
                "advisor.tutorial.generic",
                "Welcome! Follow the on-screen instructions to get started.",
            ),
            ("advisor.minigame.start", "Starting {game}. Objective: {objective}"),
            ("advisor.minigame.generic", "Starting {game}. Good luck!"),
            (
                "advisor.player_error.wrong_answer",
                "That answer is not correct. Try again.",
            ),
            ("advisor.player_error.timeout", "Time ran out. Take a breath and retry."),
            (
                "advisor.player_error.invalid_input",
                "That input is not accepted here.",
            ),
            ("advisor.player_error.generic", "Something went wrong. Try again."),
            (
                "advisor.player_error.hint_suggestion",
                "You can request a hint at any time.",
            ),
            ("advisor.progress.high", "Almost there, keep going!"),
            ("advisor.progress.mid", "Halfway done. Nice pace."),
            ("advisor.progress.low", "Every step counts. Keep at it."),
            ("advisor.achievement.unlocked", "Achievement unlocked: {name}!"),
            ("advisor.node.entered", "You entered {node}."),
            ("advisor.hint.generic", "Explore the area and check your objectives."),
            ("advisor.game.completed", "Congratulations, you finished the game!"),
        ]);
        Self { entries }
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str) -> String {
        self.entries.get(key).copied().unwrap_or(key).to_owned()
    }

    fn translate_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.translate(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }
}
