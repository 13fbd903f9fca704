//! Rule options.
//!
//! Two behaviours are configurable: how strictly the end of the game is
//! detected, and whether castling may start in or cross an attacked square.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::OptionError;

/// How the side to move is checked for remaining moves after each turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndDetection {
    /// Only moves that keep the king safe count.
    #[default]
    Legal,
    /// Any pseudo-legal move keeps the game going. Positions where every
    /// such move leaves the king attacked are reported as in progress.
    PseudoLegal,
}

/// Which squares a castling king must not be attacked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingCheck {
    /// Start, crossing and destination squares.
    #[default]
    Strict,
    /// Destination square only.
    DestinationOnly,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    pub end_detection: EndDetection,
    pub castling_check: CastlingCheck,
}

impl GameOptions {
    /// Set an option from a textual name/value pair, e.g.
    /// `("end_detection", Some("pseudo_legal"))`. Names and values are
    /// case-insensitive; spaces and dashes count as underscores.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let key = normalize(name);
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };
        let parsed = || value.map(normalize).ok_or_else(invalid);

        match key.as_str() {
            "end_detection" => {
                self.end_detection = match parsed()?.as_str() {
                    "legal" => EndDetection::Legal,
                    "pseudo_legal" => EndDetection::PseudoLegal,
                    _ => return Err(invalid()),
                };
            }
            "castling_check" => {
                self.castling_check = match parsed()?.as_str() {
                    "strict" => CastlingCheck::Strict,
                    "destination_only" => CastlingCheck::DestinationOnly,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn normalize(text: &str) -> String {
    text.trim()
        .to_ascii_lowercase()
        .replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GameOptions::default();
        assert_eq!(options.end_detection, EndDetection::Legal);
        assert_eq!(options.castling_check, CastlingCheck::Strict);
    }

    #[test]
    fn test_apply_option_normalizes_names_and_values() {
        let mut options = GameOptions::default();
        options
            .apply_option("End Detection", Some("Pseudo-Legal"))
            .unwrap();
        assert_eq!(options.end_detection, EndDetection::PseudoLegal);

        options
            .apply_option("castling-check", Some(" destination only "))
            .unwrap();
        assert_eq!(options.castling_check, CastlingCheck::DestinationOnly);
    }

    #[test]
    fn test_apply_option_errors() {
        let mut options = GameOptions::default();
        assert_eq!(
            options.apply_option("hash", Some("64")),
            Err(OptionError::UnknownOption {
                name: "hash".to_string()
            })
        );
        assert!(matches!(
            options.apply_option("end_detection", Some("sometimes")),
            Err(OptionError::InvalidValue { .. })
        ));
        assert!(matches!(
            options.apply_option("end_detection", None),
            Err(OptionError::InvalidValue { .. })
        ));
        assert_eq!(options, GameOptions::default());
    }
}
