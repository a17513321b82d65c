//! Pace module
//!
//! Spaces capture cycles out in time.
//!
//! # Overview
//!
//! A [`Pacer`] runs once after every completed cycle, in one of three
//! mutually exclusive modes fixed at construction: sleep for a fixed
//! duration, delegate to a caller-supplied [`PauseHook`] with a named
//! context map, or do nothing. With nothing configured the pacer is a
//! no-op; that is the default, not an error.

mod limiter;

pub use limiter::RateLimitHook;

use crate::error::Result;
use crate::types::ValueMap;
use async_trait::async_trait;
use std::time::Duration;

// ============================================================================
// Pause Hook
// ============================================================================

/// A caller-supplied pacing routine
///
/// Invoked after each completed cycle with the named context the pacer was
/// built with. Implementations validate the context keys they need at call
/// time, never at construction; any error propagates to the run loop
/// unmodified.
#[async_trait]
pub trait PauseHook: Send + Sync {
    /// Block until the next request may be issued
    async fn pause(&self, context: &ValueMap) -> Result<()>;
}

// ============================================================================
// Pacer
// ============================================================================

enum PaceMode {
    Fixed(Duration),
    Hook {
        hook: Box<dyn PauseHook>,
        context: ValueMap,
    },
    NoOp,
}

impl std::fmt::Debug for PaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaceMode::Fixed(delay) => f.debug_tuple("Fixed").field(delay).finish(),
            PaceMode::Hook { context, .. } => {
                f.debug_struct("Hook").field("context", context).finish()
            }
            PaceMode::NoOp => f.write_str("NoOp"),
        }
    }
}

/// Spaces out capture cycles
#[derive(Debug)]
pub struct Pacer {
    mode: PaceMode,
}

impl Pacer {
    /// A pacer that sleeps a fixed number of seconds after each cycle
    ///
    /// Fractional seconds are honored; values that make no duration
    /// (negative, NaN) clamp to zero.
    pub fn fixed(seconds: f64) -> Self {
        let delay = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
        Self::fixed_duration(delay)
    }

    /// A pacer that sleeps a fixed duration after each cycle
    pub fn fixed_duration(delay: Duration) -> Self {
        Self {
            mode: PaceMode::Fixed(delay),
        }
    }

    /// A pacer that delegates to the given hook with the given context
    pub fn with_hook(hook: impl PauseHook + 'static, context: ValueMap) -> Self {
        Self {
            mode: PaceMode::Hook {
                hook: Box::new(hook),
                context,
            },
        }
    }

    /// A pacer that does nothing
    pub fn no_op() -> Self {
        Self {
            mode: PaceMode::NoOp,
        }
    }

    /// Is this the no-op pacer?
    pub fn is_no_op(&self) -> bool {
        matches!(self.mode, PaceMode::NoOp)
    }

    /// The fixed delay, when in fixed mode
    pub fn delay(&self) -> Option<Duration> {
        match &self.mode {
            PaceMode::Fixed(delay) => Some(*delay),
            _ => None,
        }
    }

    /// Block until the next cycle may start
    ///
    /// Fixed mode sleeps and cannot fail; hook mode returns whatever the
    /// hook returns; no-op returns immediately.
    pub async fn pause(&self) -> Result<()> {
        match &self.mode {
            PaceMode::Fixed(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(())
            }
            PaceMode::Hook { hook, context } => hook.pause(context).await,
            PaceMode::NoOp => Ok(()),
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::no_op()
    }
}

#[cfg(test)]
mod tests;
