//! Scoring weights for the computer player
//!
//! Only the relative ordering of the weights is load-bearing. The defaults
//! follow that ordering with room to spare; [`ScoringConfig::validate`]
//! rejects tables that break it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::MAX_CENTER_DIST;
use crate::error::ConfigError;

/// Weight table used by the position scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Cell completes five for the computer
    pub win: f64,
    /// Cell stops the opponent completing five
    pub block: f64,
    pub five: f64,
    /// Open four: _OOOO_
    pub open_four: f64,
    /// Closed four: XOOOO_ or _OOOOX
    pub closed_four: f64,
    /// Two or more open threes through one cell
    pub double_open_three: f64,
    /// Open three: _OOO_
    pub open_three: f64,
    /// A closed three together with an open two
    pub closed_three_open_two: f64,
    /// Closed three: XOOO_ or _OOOX
    pub closed_three: f64,
    /// Two or more open twos through one cell
    pub double_open_two: f64,
    /// Open two: _OO_
    pub open_two: f64,
    /// Closed two: XOO_ or _OOX
    pub closed_two: f64,
    /// Multiplier on the opponent's shapes, above 1.0 so defence wins ties
    pub defense_bias: f64,
    /// Bonus per step closer to the center (Manhattan)
    pub center_weight: f64,
    /// Penalty for the outermost ring
    pub edge_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            win: 10_000_000.0,
            block: 9_000_000.0,
            five: 1_000_000.0,
            open_four: 100_000.0,
            closed_four: 50_000.0,
            double_open_three: 20_000.0,
            open_three: 5_000.0,
            closed_three_open_two: 3_000.0,
            closed_three: 1_000.0,
            double_open_two: 800.0,
            open_two: 300.0,
            closed_two: 100.0,
            defense_bias: 1.1,
            center_weight: 3.0,
            edge_penalty: 10.0,
        }
    }
}

impl ScoringConfig {
    /// Largest score the shape and positional terms can reach without a
    /// win or a block: every axis a five for both sides plus the best
    /// positional bonus.
    pub fn max_generic_score(&self) -> f64 {
        let per_side = 4.0 * self.five;
        per_side * (1.0 + self.defense_bias) + self.center_weight * f64::from(MAX_CENTER_DIST)
    }

    /// Check the ordering the move selector relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.win <= self.block {
            return Err(ConfigError::Invalid("win must exceed block".into()));
        }
        if self.block <= self.max_generic_score() {
            return Err(ConfigError::Invalid(format!(
                "block ({}) must exceed the largest shape score ({})",
                self.block,
                self.max_generic_score()
            )));
        }
        let ladder = [
            ("five", self.five),
            ("open_four", self.open_four),
            ("closed_four", self.closed_four),
            ("double_open_three", self.double_open_three),
            ("open_three", self.open_three),
            ("closed_three_open_two", self.closed_three_open_two),
            ("closed_three", self.closed_three),
            ("double_open_two", self.double_open_two),
            ("open_two", self.open_two),
            ("closed_two", self.closed_two),
        ];
        for pair in ladder.windows(2) {
            let ((hi_name, hi), (lo_name, lo)) = (pair[0], pair[1]);
            if hi <= lo {
                return Err(ConfigError::Invalid(format!(
                    "{hi_name} ({hi}) must exceed {lo_name} ({lo})"
                )));
            }
        }
        if self.closed_two <= 0.0 {
            return Err(ConfigError::Invalid("closed_two must be positive".into()));
        }
        if self.defense_bias <= 1.0 {
            return Err(ConfigError::Invalid("defense_bias must exceed 1.0".into()));
        }
        if self.center_weight < 0.0 || self.edge_penalty < 0.0 {
            return Err(ConfigError::Invalid(
                "positional weights must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Load a (possibly partial) weight table from a TOML file.
    ///
    /// Missing keys keep their default value.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ScoringConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        info!(path = %path.display(), "loaded scoring config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        ScoringConfig::default().validate().unwrap();
    }

    #[test]
    fn test_pattern_score_hierarchy() {
        let w = ScoringConfig::default();
        assert!(w.win > w.block);
        assert!(w.block > w.five);
        assert!(w.five > w.open_four);
        assert!(w.open_four > w.closed_four);
        assert!(w.closed_four > w.double_open_three);
        assert!(w.double_open_three > w.open_three);
        assert!(w.open_three > w.closed_three_open_two);
        assert!(w.closed_three_open_two > w.closed_three);
        assert!(w.closed_three > w.double_open_two);
        assert!(w.double_open_two > w.open_two);
        assert!(w.open_two > w.closed_two);
    }

    #[test]
    fn test_block_below_generic_rejected() {
        let w = ScoringConfig {
            block: 1_000.0,
            ..ScoringConfig::default()
        };
        assert!(matches!(w.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_broken_ladder_rejected() {
        let w = ScoringConfig {
            open_two: 5_000.0,
            ..ScoringConfig::default()
        };
        let err = w.validate().unwrap_err().to_string();
        assert!(err.contains("open_two"), "unexpected message: {err}");
    }

    #[test]
    fn test_defense_bias_must_exceed_one() {
        let w = ScoringConfig {
            defense_bias: 1.0,
            ..ScoringConfig::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "defense_bias = 1.2\ncenter_weight = 2.0").unwrap();

        let w = ScoringConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(w.defense_bias, 1.2);
        assert_eq!(w.center_weight, 2.0);
        assert_eq!(w.open_four, ScoringConfig::default().open_four);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "open_five = 3.0").unwrap();
        assert!(matches!(
            ScoringConfig::from_toml_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            ScoringConfig::from_toml_file("/nonexistent/weights.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
