use serde::{Deserialize, Serialize};

use crate::error::GoError;

/// Board size offered when the player does not pick one.
pub const DEFAULT_SIZE: u8 = 9;

/// Board sizes a front end is expected to offer.
pub const STANDARD_SIZES: [u8; 3] = [9, 13, 19];

/// Capture threshold bounds for the advanced variant.
pub const MIN_CAPTURES: u32 = 2;
pub const MAX_CAPTURES: u32 = 10;

pub fn is_standard_size(size: u8) -> bool {
    STANDARD_SIZES.contains(&size)
}

pub fn max_standard_size() -> u8 {
    STANDARD_SIZES.iter().copied().max().unwrap_or(DEFAULT_SIZE)
}

/// Rule variant of a game.
///
/// The basic variant ends at the first capture and has no ko rule. The
/// advanced variant plays to a configurable number of captured stones and
/// forbids recreating a player's previous position (simple ko).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Captured stones of one color that end the game.
    pub capture_threshold: u32,
    /// Positions remembered per color for ko; 0 turns ko off.
    pub ko_history: usize,
}

impl Rules {
    pub fn basic() -> Self {
        Rules {
            capture_threshold: 1,
            ko_history: 0,
        }
    }

    pub fn advanced(capture_threshold: u32) -> Result<Self, GoError> {
        if !(MIN_CAPTURES..=MAX_CAPTURES).contains(&capture_threshold) {
            return Err(GoError::InvalidCaptureThreshold(capture_threshold));
        }
        Ok(Rules {
            capture_threshold,
            ko_history: 1,
        })
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if self.capture_threshold == 0 {
            return Err(GoError::InvalidCaptureThreshold(0));
        }
        Ok(())
    }

    pub fn ko_enabled(&self) -> bool {
        self.ko_history > 0
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::basic()
    }
}
