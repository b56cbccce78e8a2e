//! Error types
//!
//! Card operations themselves never fail: bad geometry is clamped and stale
//! ids are ignored. Errors only surface when loading configuration and when a
//! caller explicitly asks the store to audit its invariants.

use std::path::PathBuf;
use thiserror::Error;

use crate::card::CardId;

/// Failure while loading or validating an [`EngineConfig`](crate::EngineConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for the expected schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed correctly but is out of range
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// A broken card store invariant, reported by
/// [`CardStore::check_invariants`](crate::CardStore::check_invariants)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("cards {first} and {second} share z-index {z_index}")]
    DuplicateZIndex {
        first: CardId,
        second: CardId,
        z_index: u32,
    },
    #[error("card {card_id} has z-index {z_index} outside its {expected} band")]
    WrongBand {
        card_id: CardId,
        z_index: u32,
        expected: &'static str,
    },
    #[error("card {card_id} dimensions {width}x{height} violate its size constraints")]
    SizeOutOfBounds {
        card_id: CardId,
        width: f32,
        height: f32,
    },
    #[error("card {card_id} at ({x}, {y}) does not intersect the usable viewport")]
    OffViewport { card_id: CardId, x: f32, y: f32 },
    #[error("card {card_id} left normal mode without a snapshot")]
    MissingSnapshot { card_id: CardId },
    #[error("normal card {card_id} still carries a snapshot")]
    StaleSnapshot { card_id: CardId },
}
