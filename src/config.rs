use thiserror::Error;

use crate::motion::Easing;
use crate::visibility::{LoadAhead, RevealThreshold};

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.8;
pub const DEFAULT_LOAD_AHEAD: f64 = 1.5;
pub const DEFAULT_DURATION_MS: u32 = 800;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("reveal threshold must be in (0, 1], got {0}")]
    RevealThreshold(f64),
    #[error("load-ahead must be a finite, non-negative multiple of the viewport height, got {0}")]
    LoadAhead(f64),
    #[error("animation duration must be positive")]
    ZeroDuration,
}

/// Defaults shared by every reveal and lazy-mount wrapper on the page.
///
/// Individual wrappers may override any of these through their props.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    pub reveal_threshold: RevealThreshold,
    pub load_ahead: LoadAhead,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: RevealThreshold::default(),
            load_ahead: LoadAhead::default(),
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            easing: Easing::default(),
        }
    }
}

impl MotionConfig {
    pub fn new(
        reveal_threshold: f64,
        load_ahead: f64,
        duration_ms: u32,
        delay_ms: u32,
    ) -> Result<Self, ConfigError> {
        if duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(Self {
            reveal_threshold: RevealThreshold::new(reveal_threshold)?,
            load_ahead: LoadAhead::new(load_ahead)?,
            duration_ms,
            delay_ms,
            easing: Easing::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MotionConfig::default();
        assert_eq!(config.reveal_threshold.get(), DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.load_ahead.get(), DEFAULT_LOAD_AHEAD);
        assert_eq!(config.duration_ms, 800);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.easing, Easing::EaseInOutCubic);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            MotionConfig::new(0.0, 1.5, 800, 0),
            Err(ConfigError::RevealThreshold(0.0))
        );
        assert_eq!(
            MotionConfig::new(0.8, -1.0, 800, 0),
            Err(ConfigError::LoadAhead(-1.0))
        );
        assert_eq!(
            MotionConfig::new(0.8, 1.5, 0, 0),
            Err(ConfigError::ZeroDuration)
        );
        let config = MotionConfig::new(0.5, 2.0, 400, 120).unwrap();
        assert_eq!(config.delay_ms, 120);
    }
}
