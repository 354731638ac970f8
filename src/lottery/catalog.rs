//! Static table of per-game parameters.
//!
//! A [`GameCatalog`] maps a game identifier (e.g. `"megasena"`) to its
//! [`GameConfig`]. It is built once at startup, either from the builtin
//! table or from a JSON file, and is read-only afterwards, so it can be
//! shared freely between threads.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::lottery::error::{LotteryError, Result};

/// Parameters of one game: the number range and allowed ticket sizes.
///
/// # Example
/// ```
/// use lotto_gen::lottery::GameConfig;
///
/// let config = GameConfig::new(1, 60, 6, 15).unwrap();
/// assert_eq!(config.range_size(), 60);
/// assert_eq!(config.digit_width(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Smallest number that can be drawn.
    pub min_number: u32,
    /// Largest number that can be drawn.
    pub max_number: u32,
    /// Fewest numbers a ticket may hold.
    pub min_count: usize,
    /// Most numbers a ticket may hold.
    pub max_count: usize,
    /// Weekdays on which the game is drawn.
    #[serde(default)]
    pub draw_days: Vec<String>,
}

impl GameConfig {
    /// Create a validated config with no draw days.
    pub fn new(min_number: u32, max_number: u32, min_count: usize, max_count: usize) -> Result<Self> {
        let config = Self {
            min_number,
            max_number,
            min_count,
            max_count,
            draw_days: Vec::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set the draw days.
    pub fn with_draw_days(mut self, days: &[&str]) -> Self {
        self.draw_days = days.iter().map(|d| d.to_string()).collect();
        self
    }

    /// Check `min_number < max_number` and `1 <= min_count <= max_count <= range_size`.
    pub fn validate(&self) -> Result<()> {
        if self.min_number >= self.max_number {
            return Err(LotteryError::InvalidConfig(format!(
                "min_number {} must be below max_number {}",
                self.min_number, self.max_number
            )));
        }
        if self.min_count == 0 || self.min_count > self.max_count {
            return Err(LotteryError::InvalidConfig(format!(
                "count bounds {}..={} are invalid",
                self.min_count, self.max_count
            )));
        }
        if self.max_count > self.range_size() {
            return Err(LotteryError::InvalidConfig(format!(
                "max_count {} exceeds the {} numbers in range",
                self.max_count,
                self.range_size()
            )));
        }
        Ok(())
    }

    /// Number of distinct values in `[min_number, max_number]`.
    #[inline]
    pub fn range_size(&self) -> usize {
        (self.max_number - self.min_number) as usize + 1
    }

    /// Width used when zero-padding numbers: digits in `max_number`.
    pub fn digit_width(&self) -> usize {
        self.max_number.to_string().len()
    }

    /// Check whether a value lies inside the game's range.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min_number && value <= self.max_number
    }
}

/// Registry of known games.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    games: FxHashMap<String, GameConfig>,
}

impl GameCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the standard Brazilian lottery games.
    pub fn builtin() -> Self {
        let builtin: [(&str, u32, u32, usize, usize, &[&str]); 9] = [
            ("megasena", 1, 60, 6, 15, &["Wednesday", "Saturday"]),
            (
                "lotofacil",
                1,
                25,
                15,
                20,
                &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            ),
            (
                "quina",
                1,
                80,
                5,
                15,
                &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
            ),
            ("lotomania", 1, 100, 50, 50, &["Monday", "Wednesday", "Friday"]),
            ("timemania", 1, 80, 10, 10, &["Tuesday", "Thursday", "Saturday"]),
            ("duplasena", 1, 50, 6, 15, &["Monday", "Wednesday", "Friday"]),
            ("diadesorte", 1, 31, 7, 15, &["Tuesday", "Thursday", "Saturday"]),
            ("supersete", 0, 9, 7, 7, &["Monday", "Wednesday", "Friday"]),
            ("maismilionaria", 1, 50, 6, 12, &["Saturday"]),
        ];

        let mut games = FxHashMap::with_capacity_and_hasher(builtin.len(), Default::default());
        for (id, min_number, max_number, min_count, max_count, days) in builtin {
            games.insert(
                id.to_string(),
                GameConfig {
                    min_number,
                    max_number,
                    min_count,
                    max_count,
                    draw_days: days.iter().map(|d| d.to_string()).collect(),
                },
            );
        }
        Self { games }
    }

    /// Builder method: register (or replace) a game after validating it.
    pub fn with_game(mut self, id: &str, config: GameConfig) -> Result<Self> {
        config.validate()?;
        self.games.insert(id.to_string(), config);
        Ok(self)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from a JSON object keyed by game identifier.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let games: FxHashMap<String, GameConfig> = serde_json::from_str(json)?;
        for (id, config) in &games {
            config
                .validate()
                .map_err(|e| LotteryError::InvalidConfig(format!("{}: {}", id, e)))?;
        }
        Ok(Self { games })
    }

    /// Look up the config for a game.
    pub fn config_for(&self, game_id: &str) -> Result<&GameConfig> {
        self.games
            .get(game_id)
            .ok_or_else(|| LotteryError::UnknownGame(game_id.to_string()))
    }

    /// Check that `count` numbers per ticket is allowed for the game.
    pub fn validate_count(&self, game_id: &str, count: usize) -> Result<()> {
        let config = self.config_for(game_id)?;
        if count < config.min_count || count > config.max_count {
            return Err(LotteryError::Range {
                game: game_id.to_string(),
                requested: count,
                min: config.min_count,
                max: config.max_count,
            });
        }
        Ok(())
    }

    /// Weekdays on which the game is drawn.
    pub fn draw_days(&self, game_id: &str) -> Result<&[String]> {
        Ok(&self.config_for(game_id)?.draw_days)
    }

    /// Registered game identifiers, sorted.
    pub fn game_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.games.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if the catalog has no games.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_configs_are_valid() {
        let catalog = GameCatalog::builtin();
        assert_eq!(catalog.len(), 9);
        for id in catalog.game_ids() {
            catalog.config_for(id).unwrap().validate().unwrap();
        }

        let mega = catalog.config_for("megasena").unwrap();
        assert_eq!((mega.min_number, mega.max_number), (1, 60));
        assert_eq!((mega.min_count, mega.max_count), (6, 15));
    }

    #[test]
    fn test_unknown_game() {
        let catalog = GameCatalog::builtin();
        assert_eq!(
            catalog.config_for("powerball"),
            Err(LotteryError::UnknownGame("powerball".to_string()))
        );
        assert!(matches!(
            catalog.validate_count("powerball", 6),
            Err(LotteryError::UnknownGame(_))
        ));
    }

    #[test]
    fn test_validate_count_bounds() {
        let catalog = GameCatalog::builtin();
        assert!(catalog.validate_count("megasena", 6).is_ok());
        assert!(catalog.validate_count("megasena", 15).is_ok());
        assert!(matches!(
            catalog.validate_count("megasena", 0),
            Err(LotteryError::Range { requested: 0, .. })
        ));
        assert!(matches!(
            catalog.validate_count("megasena", 16),
            Err(LotteryError::Range { min: 6, max: 15, .. })
        ));
    }

    #[test]
    fn test_config_invariants() {
        assert!(GameConfig::new(1, 60, 6, 15).is_ok());
        assert!(GameConfig::new(5, 5, 1, 1).is_err());
        assert!(GameConfig::new(1, 10, 0, 5).is_err());
        assert!(GameConfig::new(1, 10, 6, 5).is_err());
        assert!(GameConfig::new(1, 10, 5, 11).is_err());
        assert!(GameConfig::new(1, 10, 10, 10).is_ok());
    }

    #[test]
    fn test_digit_width() {
        let catalog = GameCatalog::builtin();
        assert_eq!(catalog.config_for("supersete").unwrap().digit_width(), 1);
        assert_eq!(catalog.config_for("quina").unwrap().digit_width(), 2);
        assert_eq!(catalog.config_for("lotomania").unwrap().digit_width(), 3);
    }

    #[test]
    fn test_draw_days() {
        let catalog = GameCatalog::builtin();
        assert_eq!(catalog.draw_days("megasena").unwrap(), ["Wednesday", "Saturday"]);
        assert_eq!(
            catalog.draw_days("lotofacil").unwrap(),
            ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        );
        assert_eq!(catalog.draw_days("quina").unwrap().len(), 6);
        assert!(catalog.draw_days("nope").is_err());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "tiny": {"min_number": 1, "max_number": 5, "min_count": 5, "max_count": 5},
            "mega": {"min_number": 1, "max_number": 60, "min_count": 6, "max_count": 15,
                     "draw_days": ["Saturday"]}
        }"#;
        let catalog = GameCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.game_ids(), vec!["mega", "tiny"]);
        assert!(catalog.draw_days("tiny").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_invalid_entry() {
        let json = r#"{"bad": {"min_number": 1, "max_number": 5, "min_count": 3, "max_count": 9}}"#;
        assert!(matches!(
            GameCatalog::from_json_str(json),
            Err(LotteryError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameCatalog::from_json_str("not json"),
            Err(LotteryError::Parse(_))
        ));
    }

    #[test]
    fn test_with_game() {
        let config = GameConfig::new(1, 5, 5, 5).unwrap().with_draw_days(&["Sunday"]);
        let catalog = GameCatalog::new().with_game("tiny", config.clone()).unwrap();
        assert_eq!(catalog.config_for("tiny").unwrap(), &config);
        assert_eq!(catalog.draw_days("tiny").unwrap(), ["Sunday"]);

        let invalid = GameConfig {
            min_number: 1,
            max_number: 5,
            min_count: 6,
            max_count: 6,
            draw_days: Vec::new(),
        };
        assert!(GameCatalog::new().with_game("bad", invalid).is_err());
    }
}
