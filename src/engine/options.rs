//! Engine configuration.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::OptionError;

/// Highest skill level; at this level the engine never plays a random move.
pub const MAX_SKILL_LEVEL: u8 = 20;

/// Depth used by [`Engine::evaluate_moves`](crate::Engine::evaluate_moves)
/// when the caller does not pass one.
pub const DEFAULT_BATCH_DEPTH: u32 = 2;

/// Search configuration. A snapshot is taken at the start of every search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptions {
    /// Plies searched by `best_move`, root move included. At least 1.
    pub depth: u32,
    /// Soft budget for one search. Exceeding it is logged, the search is not
    /// cut short.
    pub time_limit: Duration,
    /// Accepted for front-end compatibility. There is no opening book, so
    /// this has no effect on the search.
    pub use_opening: bool,
    /// Switch the king to its endgame table once material thins out.
    pub use_endgame: bool,
    /// 0 (weakest) to [`MAX_SKILL_LEVEL`] (full strength).
    pub skill_level: u8,
    /// Artificial pause at every interior node, for demo play.
    pub thinking_delay: Option<Duration>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            depth: 3,
            time_limit: Duration::from_millis(1000),
            use_opening: true,
            use_endgame: true,
            skill_level: 10,
            thinking_delay: None,
        }
    }
}

impl EngineOptions {
    /// Apply `update`, keeping every field it leaves unset.
    ///
    /// Out-of-range values are clamped: `depth` to at least 1 and
    /// `skill_level` to at most [`MAX_SKILL_LEVEL`].
    pub fn merge(&mut self, update: &EngineOptionsUpdate) {
        if let Some(depth) = update.depth {
            self.depth = depth.max(1);
        }
        if let Some(limit) = update.time_limit {
            self.time_limit = limit;
        }
        if let Some(flag) = update.use_opening {
            self.use_opening = flag;
        }
        if let Some(flag) = update.use_endgame {
            self.use_endgame = flag;
        }
        if let Some(level) = update.skill_level {
            self.skill_level = level.min(MAX_SKILL_LEVEL);
        }
        if let Some(delay) = update.thinking_delay {
            self.thinking_delay = delay;
        }
    }

    /// Set one option from its textual name and value, e.g. `("Skill Level", "15")`.
    ///
    /// Names are matched case-insensitively, ignoring spaces and underscores.
    /// Durations are in milliseconds; a thinking delay of 0 disables it.
    pub fn set_named(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let value = value.trim();
        let invalid = || OptionError::InvalidValue {
            name: name.trim().to_string(),
            value: value.to_string(),
        };

        let mut update = EngineOptionsUpdate::default();
        match normalized.as_str() {
            "depth" => update.depth = Some(value.parse().map_err(|_| invalid())?),
            "timelimit" => {
                let ms: u64 = value.parse().map_err(|_| invalid())?;
                update.time_limit = Some(Duration::from_millis(ms));
            }
            "useopening" => update.use_opening = Some(parse_bool(value).ok_or_else(invalid)?),
            "useendgame" => update.use_endgame = Some(parse_bool(value).ok_or_else(invalid)?),
            "skilllevel" | "skill" => {
                update.skill_level = Some(value.parse().map_err(|_| invalid())?);
            }
            "thinkingdelay" => {
                let ms: u64 = value.parse().map_err(|_| invalid())?;
                update.thinking_delay = Some((ms > 0).then(|| Duration::from_millis(ms)));
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.trim().to_string(),
                })
            }
        }
        self.merge(&update);
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Partial options update: `None` fields are left as they are.
///
/// ```
/// use chess_search::{Engine, EngineOptionsUpdate};
///
/// let engine = Engine::new();
/// engine.set_options(EngineOptionsUpdate::default().depth(2).skill_level(20));
/// assert_eq!(engine.options().depth, 2);
/// assert!(engine.options().use_endgame);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptionsUpdate {
    pub depth: Option<u32>,
    pub time_limit: Option<Duration>,
    pub use_opening: Option<bool>,
    pub use_endgame: Option<bool>,
    pub skill_level: Option<u8>,
    /// `Some(None)` clears a previously set delay.
    pub thinking_delay: Option<Option<Duration>>,
}

impl EngineOptionsUpdate {
    #[must_use]
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    #[must_use]
    pub fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn use_opening(mut self, flag: bool) -> Self {
        self.use_opening = Some(flag);
        self
    }

    #[must_use]
    pub fn use_endgame(mut self, flag: bool) -> Self {
        self.use_endgame = Some(flag);
        self
    }

    #[must_use]
    pub fn skill_level(mut self, level: u8) -> Self {
        self.skill_level = Some(level);
        self
    }

    #[must_use]
    pub fn thinking_delay(mut self, delay: Option<Duration>) -> Self {
        self.thinking_delay = Some(delay);
        self
    }
}
