//! Message-key identifiers resolved through the collaborator's translator.
//!
//! The resolver never embeds display prose; it selects one of these keys
//! and the localization backend supplies the text.

/// Event was absent or failed validation.
pub const INVALID_EVENT: &str = "advisor.invalid_event";

/// Tutorial opening line, followed by a controls-section excerpt.
pub const TUTORIAL_CONTROLS: &str = "advisor.tutorial.controls";
/// Tutorial opening line when no controls section is available.
pub const TUTORIAL_GENERIC: &str = "advisor.tutorial.generic";

/// Minigame start with a known topic; takes `game` and `objective`.
pub const MINIGAME_START: &str = "advisor.minigame.start";
/// Minigame start with no topic document; takes `game`.
pub const MINIGAME_GENERIC: &str = "advisor.minigame.generic";

/// Player answered incorrectly.
pub const PLAYER_ERROR_WRONG_ANSWER: &str = "advisor.player_error.wrong_answer";
/// Player ran out of time.
pub const PLAYER_ERROR_TIMEOUT: &str = "advisor.player_error.timeout";
/// Player input was rejected.
pub const PLAYER_ERROR_INVALID_INPUT: &str = "advisor.player_error.invalid_input";
/// Any error code outside the closed table.
pub const PLAYER_ERROR_GENERIC: &str = "advisor.player_error.generic";
/// Appended after the third failed attempt.
pub const HINT_SUGGESTION: &str = "advisor.player_error.hint_suggestion";

/// Completion at or above three quarters.
pub const PROGRESS_HIGH: &str = "advisor.progress.high";
/// Completion at or above one half.
pub const PROGRESS_MID: &str = "advisor.progress.mid";
/// Anything below one half.
pub const PROGRESS_LOW: &str = "advisor.progress.low";

/// Achievement unlocked; takes `name`.
pub const ACHIEVEMENT_UNLOCKED: &str = "advisor.achievement.unlocked";
/// Map node entered; takes `node`.
pub const NODE_ENTERED: &str = "advisor.node.entered";
/// Hint requested but no tips section is available.
pub const HINT_GENERIC: &str = "advisor.hint.generic";
/// The game was finished.
pub const GAME_COMPLETED: &str = "advisor.game.completed";
