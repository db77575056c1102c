//! Two-tier level filtering
//!
//! 1. **Build ceiling**: [`BUILD_CEILING`], fixed by cargo features. Call
//!    sites above it are removed by the logging macros at compile time.
//! 2. **Runtime threshold**: held by [`LevelGate`], adjustable but never
//!    above the ceiling.

use super::config::BUILD_CEILING;
use super::log_level::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGate {
    threshold: LogLevel,
}

impl LevelGate {
    /// A gate whose threshold starts at the build ceiling.
    pub const fn new() -> Self {
        Self {
            threshold: BUILD_CEILING,
        }
    }

    /// Set the runtime threshold, clamped to the build ceiling.
    pub fn set_threshold(&mut self, level: LogLevel) {
        self.threshold = level.min(BUILD_CEILING);
    }

    #[inline]
    pub const fn threshold(&self) -> LogLevel {
        self.threshold
    }

    #[inline]
    pub const fn ceiling(&self) -> LogLevel {
        BUILD_CEILING
    }

    /// Whether a message at `level` passes the runtime threshold.
    ///
    /// `Off` is never a message level and never passes.
    #[inline]
    pub const fn should_emit(&self, level: LogLevel) -> bool {
        !matches!(level, LogLevel::Off) && level.at_most(self.threshold)
    }
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_ceiling() {
        let gate = LevelGate::new();
        assert_eq!(gate.threshold(), BUILD_CEILING);
        assert_eq!(gate.ceiling(), BUILD_CEILING);
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut gate = LevelGate::new();
        gate.set_threshold(LogLevel::Debug);
        assert!(gate.threshold() <= BUILD_CEILING);

        gate.set_threshold(LogLevel::from_u8_saturating(u8::MAX));
        assert_eq!(gate.threshold(), BUILD_CEILING);
    }

    #[test]
    fn test_should_emit_ordering() {
        let mut gate = LevelGate::new();
        gate.set_threshold(LogLevel::Error);
        let expected = LogLevel::Error.min(BUILD_CEILING);

        for level in LogLevel::ALL {
            let allowed = level != LogLevel::Off && level <= expected;
            assert_eq!(gate.should_emit(level), allowed, "level {}", level);
        }
    }

    #[test]
    fn test_off_suppresses_everything() {
        let mut gate = LevelGate::new();
        gate.set_threshold(LogLevel::Off);
        assert!(LogLevel::ALL.iter().all(|&level| !gate.should_emit(level)));
    }
}
